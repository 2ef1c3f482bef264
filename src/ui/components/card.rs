//! Card component family.
//!
//! Cards have no variant or size axes, just a fixed class per piece
//! plus caller overrides. The pieces are independent render functions
//! over caller-supplied areas, so a page can stack header, title and
//! content in whatever order and combination it wants inside the frame
//! `render_card` returns.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthStr;

use crate::error::ConfigError;
use crate::style::theme::COLOR_BORDER;
use crate::style::{paint, BorderKind, ClassInput, VariantSpec};

/// Outer card frame.
pub const CARD_SPEC: VariantSpec = VariantSpec::fixed(
    "card",
    &["border-rounded", "bg-background", "fg-foreground"],
);

/// Padded strip under the card's top edge, separated by a rule.
pub const CARD_HEADER_SPEC: VariantSpec =
    VariantSpec::fixed("card-header", &["px-2", "py-1", "border-bottom"]);

/// Emphasized heading line.
pub const CARD_TITLE_SPEC: VariantSpec = VariantSpec::fixed("card-title", &["bold", "fg-foreground"]);

/// Padded body region.
pub const CARD_CONTENT_SPEC: VariantSpec = VariantSpec::fixed("card-content", &["px-2", "py-1"]);

/// Draw the card frame and return the area inside it.
pub fn render_card(buf: &mut Buffer, area: Rect, class: &[ClassInput]) -> Result<Rect, ConfigError> {
    let seq = CARD_SPEC.resolve(None, None, class.iter().cloned())?;
    let painted = paint(&seq);
    if area.width < 2 || area.height < 2 {
        return Ok(Rect::new(area.x, area.y, 0, 0));
    }

    if painted.border.is_outer() {
        Block::bordered()
            .border_type(painted.border.border_type())
            .border_style(Style::default().fg(COLOR_BORDER))
            .style(painted.style)
            .render(area, buf);
    } else {
        buf.set_style(area, painted.style);
    }
    Ok(painted.inner(area))
}

/// Draw the header strip, rule included, and return its content area.
pub fn render_card_header(
    buf: &mut Buffer,
    area: Rect,
    class: &[ClassInput],
) -> Result<Rect, ConfigError> {
    let seq = CARD_HEADER_SPEC.resolve(None, None, class.iter().cloned())?;
    let painted = paint(&seq);
    if area.width == 0 || area.height == 0 {
        return Ok(area);
    }

    buf.set_style(area, painted.style);
    if painted.border == BorderKind::Bottom && area.height >= 2 {
        let rule_y = area.bottom() - 1;
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, rule_y)) {
                cell.set_symbol("─");
                cell.set_style(Style::default().fg(COLOR_BORDER));
            }
        }
    }
    Ok(painted.inner(area))
}

/// Draw a heading line into the first row of `area`.
pub fn render_card_title(
    buf: &mut Buffer,
    area: Rect,
    text: &str,
    class: &[ClassInput],
) -> Result<(), ConfigError> {
    let seq = CARD_TITLE_SPEC.resolve(None, None, class.iter().cloned())?;
    let painted = paint(&seq);
    if area.width == 0 || area.height == 0 {
        return Ok(());
    }

    let text_width = (text.width() as u16).min(area.width);
    let x = match painted.align {
        Alignment::Center => area.x + (area.width - text_width) / 2,
        Alignment::Right => area.x + area.width - text_width,
        Alignment::Left => area.x,
    };
    buf.set_stringn(x, area.y, text, area.width as usize, painted.style);
    Ok(())
}

/// Return the padded body area, applying any fill the class asks for.
pub fn render_card_content(
    buf: &mut Buffer,
    area: Rect,
    class: &[ClassInput],
) -> Result<Rect, ConfigError> {
    let seq = CARD_CONTENT_SPEC.resolve(None, None, class.iter().cloned())?;
    let painted = paint(&seq);
    if area.width == 0 || area.height == 0 {
        return Ok(area);
    }
    if painted.style != Style::default() {
        buf.set_style(area, painted.style);
    }
    Ok(painted.inner(area))
}

// ============================================================================
// Tests
// ============================================================================
