//! Token painter.
//!
//! Translates a merged [`TokenSequence`] into concrete terminal styling:
//! a ratatui [`Style`] plus the box metrics (padding, width, height,
//! border, alignment) render code needs to place content.
//!
//! The painter is deliberately lenient. Tokens it does not understand
//! ride through the merge untouched and are simply not painted, so page
//! authors can carry custom markers without breaking rendering.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use super::theme::{
    COLOR_BACKGROUND, COLOR_ERROR, COLOR_FOREGROUND, COLOR_MUTED, COLOR_MUTED_FG, COLOR_OVERLAY,
    COLOR_PRIMARY, COLOR_SUCCESS,
};
use super::token::TokenSequence;

// ============================================================================
// Painted Output
// ============================================================================

/// Border treatment requested by a `border-*` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderKind {
    /// No border.
    #[default]
    None,
    /// Square border on all sides.
    Plain,
    /// Rounded border on all sides.
    Rounded,
    /// Thick border on all sides.
    Thick,
    /// A single rule along the bottom edge (section header separators).
    Bottom,
}

impl BorderKind {
    /// True when the kind draws a full frame around the content.
    pub fn is_outer(self) -> bool {
        matches!(self, BorderKind::Plain | BorderKind::Rounded | BorderKind::Thick)
    }

    /// The ratatui border type for outer frames.
    pub fn border_type(self) -> BorderType {
        match self {
            BorderKind::Thick => BorderType::Thick,
            BorderKind::Rounded => BorderType::Rounded,
            _ => BorderType::Plain,
        }
    }
}

/// Width requested by a `w-*` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthSpec {
    /// A fixed number of columns.
    Cells(u16),
    /// Stretch to the available width.
    Full,
}

/// The painted form of a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Painted {
    /// Colors and text modifiers.
    pub style: Style,
    /// Horizontal padding in columns, each side.
    pub padding_x: u16,
    /// Vertical padding in rows, each side.
    pub padding_y: u16,
    /// Requested width, if any.
    pub width: Option<WidthSpec>,
    /// Requested content height in rows, if any.
    pub height: Option<u16>,
    /// Border treatment.
    pub border: BorderKind,
    /// Text alignment within the painted area.
    pub align: Alignment,
}

impl Painted {
    /// Shrink an area by this painting's border and padding.
    pub fn inner(&self, area: Rect) -> Rect {
        let border_inset: u16 = if self.border.is_outer() { 1 } else { 0 };
        let bottom_extra: u16 = if self.border == BorderKind::Bottom { 1 } else { 0 };
        let inset_x = border_inset + self.padding_x;
        let inset_y = border_inset + self.padding_y;
        Rect {
            x: area.x + inset_x.min(area.width / 2),
            y: area.y + inset_y.min(area.height / 2),
            width: area.width.saturating_sub(inset_x * 2),
            height: area
                .height
                .saturating_sub(inset_y * 2)
                .saturating_sub(bottom_extra),
        }
    }
}

// ============================================================================
// Painting
// ============================================================================

/// Paint a merged token sequence.
pub fn paint(seq: &TokenSequence) -> Painted {
    let mut painted = Painted::default();
    let mut style = Style::default();

    if let Some(color) = seq.family_value("bg").and_then(bg_color) {
        style = style.bg(color);
    }
    if let Some(color) = seq.family_value("fg").and_then(fg_color) {
        style = style.fg(color);
    }

    painted.padding_x = parse_cells(seq.family_value("px"));
    painted.padding_y = parse_cells(seq.family_value("py"));

    painted.width = match seq.family_value("w") {
        Some("full") => Some(WidthSpec::Full),
        Some(value) => value.parse().ok().map(WidthSpec::Cells),
        None => None,
    };
    painted.height = seq.family_value("h").and_then(|v| v.parse().ok());

    painted.border = match seq.family_value("border") {
        Some("plain") => BorderKind::Plain,
        Some("rounded") => BorderKind::Rounded,
        Some("thick") => BorderKind::Thick,
        Some("bottom") => BorderKind::Bottom,
        _ => BorderKind::None,
    };

    painted.align = match seq.family_value("align") {
        Some("center") => Alignment::Center,
        Some("right") => Alignment::Right,
        _ => Alignment::Left,
    };

    for token in seq {
        style = match token.as_str() {
            "bold" => style.add_modifier(Modifier::BOLD),
            "dim" => style.add_modifier(Modifier::DIM),
            "italic" => style.add_modifier(Modifier::ITALIC),
            "underline" => style.add_modifier(Modifier::UNDERLINED),
            _ => style,
        };
    }

    painted.style = style;
    painted
}

/// Background colors by value name.
fn bg_color(name: &str) -> Option<Color> {
    match name {
        "primary" => Some(COLOR_PRIMARY),
        "background" => Some(COLOR_BACKGROUND),
        "muted" => Some(COLOR_MUTED),
        "overlay" => Some(COLOR_OVERLAY),
        _ => None,
    }
}

/// Foreground colors by value name.
///
/// `fg-background` exists for text sitting on a filled accent, like the
/// label of a primary button.
fn fg_color(name: &str) -> Option<Color> {
    match name {
        "foreground" => Some(COLOR_FOREGROUND),
        "background" => Some(COLOR_BACKGROUND),
        "muted" => Some(COLOR_MUTED_FG),
        "primary" => Some(COLOR_PRIMARY),
        "success" => Some(COLOR_SUCCESS),
        "error" => Some(COLOR_ERROR),
        _ => None,
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_cells(value: Option<&str>) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================
