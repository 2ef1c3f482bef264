//! Projects section: a heading over a responsive grid of cards.
//!
//! One card per project, each with a titled header, the description,
//! and a link button. Three columns on wide terminals, then two, then a
//! single stack.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::error::Result;
use crate::profile::{Profile, Project};
use crate::ui::components::{
    render_button, render_card, render_card_content, render_card_header, render_card_title,
    ButtonConfig,
};
use crate::ui::focus::FocusId;
use crate::ui::interaction::ClickAction;
use crate::ui::text::{wrap_text, wrapped_height};
use crate::ui::transition::Transition;
use crate::ui::RenderContext;

use super::{dim_entering, entrance_area};

/// Columns between cards.
const CARD_GAP: u16 = 2;
/// Rows between card rows.
const ROW_GAP: u16 = 1;
/// Border plus horizontal padding on both card edges.
const CARD_CHROME_WIDTH: u16 = 6;
/// Card rows that are frame, header, and padding rather than
/// description text.
const CARD_CHROME_HEIGHT: u16 = 10;
/// Rows given to the card header: padding, title, bottom rule.
const CARD_HEADER_HEIGHT: u16 = 4;

/// Focusable link buttons for the first few cards. Cards past these
/// stay mouse-only.
const LINK_FOCUS_IDS: [FocusId; 6] = [
    FocusId("project-link-0"),
    FocusId("project-link-1"),
    FocusId("project-link-2"),
    FocusId("project-link-3"),
    FocusId("project-link-4"),
    FocusId("project-link-5"),
];

fn link_focus_id(index: usize) -> Option<FocusId> {
    LINK_FOCUS_IDS.get(index).copied()
}

fn grid_columns(width: u16) -> u16 {
    if width >= 84 {
        3
    } else if width >= 56 {
        2
    } else {
        1
    }
}

fn card_width(width: u16, columns: u16) -> u16 {
    (width - (columns - 1) * CARD_GAP) / columns
}

fn card_height(project: &Project, inner_width: u16) -> u16 {
    wrapped_height(&project.description, inner_width) + CARD_CHROME_HEIGHT
}

pub fn measure(profile: &Profile, width: u16) -> u16 {
    let columns = grid_columns(width);
    let inner_width = card_width(width, columns).saturating_sub(CARD_CHROME_WIDTH);

    let rows = profile.projects.chunks(columns as usize);
    let row_count = rows.len();
    let mut total = 2;
    for (i, row) in rows.enumerate() {
        total += row
            .iter()
            .map(|p| card_height(p, inner_width))
            .max()
            .unwrap_or(0);
        if i + 1 < row_count {
            total += ROW_GAP;
        }
    }
    total
}

pub fn render(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    area: Rect,
    profile: &Profile,
    transition: &Transition,
) -> Result<()> {
    let area = entrance_area(area, transition, ctx.tick);
    if area.width < 8 || area.height < 3 {
        return Ok(());
    }

    buf.set_stringn(
        area.x,
        area.y,
        "Projects",
        area.width as usize,
        Style::default().add_modifier(Modifier::BOLD),
    );

    let columns = grid_columns(area.width);
    let card_w = card_width(area.width, columns);
    let inner_width = card_w.saturating_sub(CARD_CHROME_WIDTH);

    let mut y = area.y + 2;
    for (row_index, row) in profile.projects.chunks(columns as usize).enumerate() {
        let row_height = row
            .iter()
            .map(|p| card_height(p, inner_width))
            .max()
            .unwrap_or(0);
        if y + row_height > area.bottom() {
            break;
        }
        for (col, project) in row.iter().enumerate() {
            let x = area.x + col as u16 * (card_w + CARD_GAP);
            let index = row_index * columns as usize + col;
            render_project_card(
                buf,
                ctx,
                Rect::new(x, y, card_w, row_height),
                project,
                index,
            )?;
        }
        y += row_height + ROW_GAP;
    }

    dim_entering(buf, area, transition, ctx.tick);
    Ok(())
}

fn render_project_card(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    area: Rect,
    project: &Project,
    index: usize,
) -> Result<()> {
    let inner = render_card(buf, area, &[])?;
    if inner.height < CARD_HEADER_HEIGHT {
        return Ok(());
    }

    let header = Rect::new(inner.x, inner.y, inner.width, CARD_HEADER_HEIGHT);
    let title_area = render_card_header(buf, header, &[])?;
    render_card_title(buf, title_area, &project.title, &[])?;

    let body_area = Rect::new(
        inner.x,
        inner.y + CARD_HEADER_HEIGHT,
        inner.width,
        inner.height - CARD_HEADER_HEIGHT,
    );
    let body = render_card_content(buf, body_area, &[])?;

    let mut y = body.y;
    for line in wrap_text(&project.description, body.width) {
        if y >= body.bottom() {
            return Ok(());
        }
        buf.set_stringn(body.x, y, &line, body.width as usize, Style::default());
        y += 1;
    }
    y += 1;

    if y < body.bottom() {
        let mut link = ButtonConfig::new("View on GitHub")
            .variant("outline")
            .size("sm")
            .on_press(ClickAction::OpenUrl(project.link.clone()));
        if let Some(id) = link_focus_id(index) {
            link = link.focus(id);
        }
        let width = link.measure()?.min(body.width);
        render_button(buf, ctx, Rect::new(body.x, y, width, 1), &link)?;
    }
    Ok(())
}
