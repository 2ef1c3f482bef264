//! Sticky header and footer chrome.
//!
//! Both render in screen coordinates, outside the scrolling page
//! buffer. The header holds the site title and the section nav, the
//! footer holds the copyright line and, when one is active, a status
//! note.

use chrono::Datelike;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::app::{Section, SECTIONS};
use crate::error::Result;
use crate::profile::Profile;
use crate::style::theme::{COLOR_BORDER, COLOR_MUTED_FG, COLOR_PRIMARY};
use crate::style::when;
use crate::ui::components::{render_button, ButtonConfig};
use crate::ui::focus::FocusId;
use crate::ui::interaction::ClickAction;
use crate::ui::RenderContext;

const NAV_FOCUS_IDS: [FocusId; 3] = [
    FocusId("nav-about"),
    FocusId("nav-projects"),
    FocusId("nav-contact"),
];

/// Gap between nav buttons.
const NAV_GAP: u16 = 1;

fn nav_button(section: Section, index: usize, active: Section, compact: bool) -> ButtonConfig {
    let variant = if section == active { "secondary" } else { "ghost" };
    ButtonConfig::new(section.label())
        .variant(variant)
        .size("sm")
        .class(when(compact, "px-1"))
        .focus(NAV_FOCUS_IDS[index])
        .on_press(ClickAction::NavigateTo(section))
}

/// Renders the two header rows: title and nav on top, a rule below.
pub fn render_header(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    area: Rect,
    profile: &Profile,
    active: Section,
) -> Result<()> {
    if area.height < 2 || area.width < 4 {
        return Ok(());
    }

    let compact = ctx.layout.is_narrow();
    let buttons: Vec<ButtonConfig> = SECTIONS
        .iter()
        .enumerate()
        .map(|(i, s)| nav_button(*s, i, active, compact))
        .collect();

    let mut nav_width = 0u16;
    let mut widths = Vec::with_capacity(buttons.len());
    for button in &buttons {
        let w = button.measure()?;
        widths.push(w);
        nav_width += w;
    }
    nav_width += NAV_GAP * (buttons.len().saturating_sub(1)) as u16;

    // Nav sits flush right, the title takes whatever is left.
    let mut x = area
        .right()
        .saturating_sub(nav_width + 1)
        .max(area.x + 1);
    let title_width = x.saturating_sub(area.x + 2);
    if title_width > 0 {
        buf.set_stringn(
            area.x + 1,
            area.y,
            &profile.name,
            title_width as usize,
            Style::default().add_modifier(Modifier::BOLD),
        );
    }

    for (button, width) in buttons.iter().zip(widths) {
        if x + width > area.right() {
            break;
        }
        render_button(buf, ctx, Rect::new(x, area.y, width, 1), button)?;
        x += width + NAV_GAP;
    }

    let rule_y = area.y + 1;
    for col in area.x..area.right() {
        if let Some(cell) = buf.cell_mut((col, rule_y)) {
            cell.set_symbol("─");
            cell.set_style(Style::default().fg(COLOR_BORDER));
        }
    }

    Ok(())
}

/// Renders the footer row: a status note when one is showing, the
/// copyright line otherwise.
pub fn render_footer(buf: &mut Buffer, area: Rect, profile: &Profile, note: Option<&str>) {
    if area.height < 1 || area.width < 4 {
        return;
    }

    let (text, style) = match note {
        Some(note) => (note.to_string(), Style::default().fg(COLOR_PRIMARY)),
        None => {
            let year = chrono::Local::now().year();
            (
                format!("© {} {}. All rights reserved.", year, profile.name),
                Style::default().fg(COLOR_MUTED_FG),
            )
        }
    };

    let text_width = text.width() as u16;
    let x = area.x + area.width.saturating_sub(text_width) / 2;
    buf.set_stringn(x, area.y, &text, area.width as usize, style);
}
