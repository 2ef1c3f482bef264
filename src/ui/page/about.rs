//! About section: portrait, introduction, and social links.
//!
//! Side by side on wide terminals, stacked on narrow ones. The portrait
//! rises into view, the text fades in beside it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::app::CONTACT_DIALOG_ID;
use crate::error::Result;
use crate::profile::Profile;
use crate::style::theme::{COLOR_BORDER, COLOR_PRIMARY};
use crate::ui::components::{render_button, ButtonConfig};
use crate::ui::focus::FocusId;
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::text::{wrap_text, wrapped_height};
use crate::ui::transition::Transition;
use crate::ui::RenderContext;

use super::{dim_entering, entrance_area};

pub const GITHUB_BUTTON: FocusId = FocusId("about-github");
pub const LINKEDIN_BUTTON: FocusId = FocusId("about-linkedin");
pub const EMAIL_BUTTON: FocusId = FocusId("about-email");

/// Gap between the portrait and text columns.
const COLUMN_GAP: u16 = 2;
/// Portrait height when it stacks above the text.
const PORTRAIT_STACKED_HEIGHT: u16 = 5;
/// Gap between the social buttons.
const BUTTON_GAP: u16 = 2;

/// Half the column width reads roughly square in terminal cells.
fn portrait_height(width: u16) -> u16 {
    (width / 2).max(6)
}

fn text_height(profile: &Profile, width: u16) -> u16 {
    wrapped_height(&profile.headline, width) + 1 + wrapped_height(&profile.about, width) + 1 + 1
}

pub fn measure(profile: &Profile, width: u16, layout: &LayoutContext) -> u16 {
    if layout.should_stack_columns() {
        PORTRAIT_STACKED_HEIGHT + 1 + text_height(profile, width)
    } else {
        let (portrait_w, text_w) = layout.about_column_widths(width);
        portrait_height(portrait_w).max(text_height(profile, text_w.saturating_sub(COLUMN_GAP)))
    }
}

pub fn render(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    area: Rect,
    profile: &Profile,
    portrait_transition: &Transition,
    text_transition: &Transition,
) -> Result<()> {
    if area.width < 4 || area.height == 0 {
        return Ok(());
    }

    let (portrait_area, text_area) = if ctx.layout.should_stack_columns() {
        let portrait = Rect::new(area.x, area.y, area.width, PORTRAIT_STACKED_HEIGHT);
        let below = PORTRAIT_STACKED_HEIGHT + 1;
        let text = Rect::new(
            area.x,
            area.y + below,
            area.width,
            area.height.saturating_sub(below),
        );
        (portrait, text)
    } else {
        let (portrait_w, text_w) = ctx.layout.about_column_widths(area.width);
        let portrait = Rect::new(area.x, area.y, portrait_w, portrait_height(portrait_w));
        let text = Rect::new(
            area.x + portrait_w + COLUMN_GAP,
            area.y,
            text_w.saturating_sub(COLUMN_GAP),
            area.height,
        );
        (portrait, text)
    };

    render_portrait(buf, portrait_area, profile, portrait_transition, ctx.tick);
    render_text(buf, ctx, text_area, profile, text_transition)?;
    Ok(())
}

/// The portrait is a placeholder: a rounded frame around the profile's
/// initials, standing in for the photo the web page shows.
fn render_portrait(
    buf: &mut Buffer,
    area: Rect,
    profile: &Profile,
    transition: &Transition,
    tick: u64,
) {
    let area = entrance_area(area, transition, tick);
    if area.width < 4 || area.height < 3 {
        return;
    }

    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .render(area, buf);

    let initials: String = profile
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect();
    let x = area.x + area.width.saturating_sub(initials.len() as u16) / 2;
    let y = area.y + area.height / 2;
    buf.set_stringn(
        x,
        y,
        &initials,
        initials.len(),
        Style::default()
            .fg(COLOR_PRIMARY)
            .add_modifier(Modifier::BOLD),
    );

    dim_entering(buf, area, transition, tick);
}

fn render_text(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    area: Rect,
    profile: &Profile,
    transition: &Transition,
) -> Result<()> {
    let area = entrance_area(area, transition, ctx.tick);
    if area.width == 0 || area.height == 0 {
        return Ok(());
    }

    let mut y = area.y;
    for line in wrap_text(&profile.headline, area.width) {
        if y >= area.bottom() {
            return Ok(());
        }
        buf.set_stringn(
            area.x,
            y,
            &line,
            area.width as usize,
            Style::default().add_modifier(Modifier::BOLD),
        );
        y += 1;
    }
    y += 1;

    for line in wrap_text(&profile.about, area.width) {
        if y >= area.bottom() {
            return Ok(());
        }
        buf.set_stringn(area.x, y, &line, area.width as usize, Style::default());
        y += 1;
    }
    y += 1;

    if y < area.bottom() {
        render_social_buttons(buf, ctx, Rect::new(area.x, y, area.width, 1), profile)?;
    }

    dim_entering(buf, area, transition, ctx.tick);
    Ok(())
}

fn render_social_buttons(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    area: Rect,
    profile: &Profile,
) -> Result<()> {
    let buttons = [
        ButtonConfig::new("GitHub")
            .class("px-1")
            .focus(GITHUB_BUTTON)
            .on_press(ClickAction::OpenUrl(profile.github.clone())),
        ButtonConfig::new("LinkedIn")
            .class("px-1")
            .focus(LINKEDIN_BUTTON)
            .on_press(ClickAction::OpenUrl(profile.linkedin.clone())),
        ButtonConfig::new("Email")
            .variant("outline")
            .class("px-1")
            .focus(EMAIL_BUTTON)
            .on_press(ClickAction::OpenDialog(CONTACT_DIALOG_ID)),
    ];

    let mut x = area.x;
    for button in buttons {
        let width = button.measure()?;
        if x + width > area.right() {
            break;
        }
        render_button(buf, ctx, Rect::new(x, area.y, width, 1), &button)?;
        x += width + BUTTON_GAP;
    }
    Ok(())
}
