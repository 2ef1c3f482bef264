//! Button component.
//!
//! Buttons carry the full variant/size axis pair: filled accent
//! (`default`), filled muted (`secondary`), framed (`outline`) and
//! label-only (`ghost`) looks, with `sm`/`lg`/`icon` sizes controlling
//! horizontal padding. A button with an `on_press` action registers a
//! hit area; a button with a focus id joins the Tab order and activates
//! on Enter through the same action.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthStr;

use crate::error::ConfigError;
use crate::style::theme::{COLOR_FOCUS, COLOR_PRIMARY};
use crate::style::{paint, ClassInput, Painted, VariantSpec, WidthSpec};
use crate::ui::focus::FocusId;
use crate::ui::interaction::ClickAction;
use crate::ui::RenderContext;

/// Styling table for buttons.
pub const BUTTON_SPEC: VariantSpec = VariantSpec {
    component: "button",
    base: &["align-center", "bold"],
    variants: &[
        ("default", &["bg-primary", "fg-background"]),
        ("secondary", &["bg-muted", "fg-foreground"]),
        ("outline", &["border-plain", "fg-foreground"]),
        ("ghost", &["fg-foreground", "dim"]),
    ],
    sizes: &[
        ("default", &["px-4"]),
        ("sm", &["px-3"]),
        ("lg", &["px-8"]),
        ("icon", &["px-1", "w-5"]),
    ],
    default_variant: "default",
    default_size: "default",
};

// ============================================================================
// Configuration
// ============================================================================

/// Everything a button render needs.
#[derive(Debug, Clone)]
pub struct ButtonConfig {
    label: String,
    variant: Option<&'static str>,
    size: Option<&'static str>,
    class: Vec<ClassInput>,
    id: Option<FocusId>,
    on_press: Option<ClickAction>,
}

impl ButtonConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: None,
            size: None,
            class: Vec::new(),
            id: None,
            on_press: None,
        }
    }

    /// Request a declared variant key. Unknown keys fail at render.
    pub fn variant(mut self, variant: &'static str) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Request a declared size key. Unknown keys fail at render.
    pub fn size(mut self, size: &'static str) -> Self {
        self.size = Some(size);
        self
    }

    /// Append a caller override to the class list.
    pub fn class(mut self, input: impl Into<ClassInput>) -> Self {
        self.class.push(input.into());
        self
    }

    /// Give the button a place in the Tab order.
    pub fn focus(mut self, id: FocusId) -> Self {
        self.id = Some(id);
        self
    }

    /// Action dispatched on click or Enter while focused.
    pub fn on_press(mut self, action: ClickAction) -> Self {
        self.on_press = Some(action);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Columns the button wants, for laying out rows of buttons.
    pub fn measure(&self) -> Result<u16, ConfigError> {
        let seq = BUTTON_SPEC.resolve(self.variant, self.size, self.class.iter().cloned())?;
        let painted = paint(&seq);
        Ok(natural_width(&painted, &self.label))
    }

    /// Rows the button wants in the given area height.
    pub fn measure_height(&self, available: u16) -> Result<u16, ConfigError> {
        let seq = BUTTON_SPEC.resolve(self.variant, self.size, self.class.iter().cloned())?;
        let painted = paint(&seq);
        Ok(if painted.border.is_outer() && available >= 3 {
            3
        } else {
            available.min(1)
        })
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a button at the top-left of `area` and return the rect it
/// occupied.
///
/// The width comes from the resolved tokens (`w-*` or label width plus
/// padding), clamped to the area. Framed buttons take three rows when
/// the area allows and collapse to a bracketed single row otherwise.
pub fn render_button(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    area: Rect,
    config: &ButtonConfig,
) -> Result<Rect, ConfigError> {
    let seq = BUTTON_SPEC.resolve(config.variant, config.size, config.class.iter().cloned())?;
    let painted = paint(&seq);

    let rect = button_rect(area, &painted, &config.label);
    if rect.width == 0 || rect.height == 0 {
        return Ok(rect);
    }

    let focused = config.id.map(|id| ctx.focus.is_focused(id)).unwrap_or(false);
    let mut style = painted.style;
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    if painted.border.is_outer() && rect.height >= 3 {
        let block = Block::bordered()
            .border_type(painted.border.border_type())
            .style(style);
        let inner = block.inner(rect);
        block.render(rect, buf);
        draw_label(buf, inner, &config.label, style, painted.align);
    } else {
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
        let mut label_area = rect;
        if painted.border.is_outer() && rect.width >= 2 {
            // Too short for a frame, fall back to bracket delimiters
            if let Some(cell) = buf.cell_mut((rect.left(), rect.y)) {
                cell.set_symbol("[");
            }
            if let Some(cell) = buf.cell_mut((rect.right() - 1, rect.y)) {
                cell.set_symbol("]");
            }
            label_area.x += 1;
            label_area.width -= 2;
        }
        draw_label(buf, label_area, &config.label, style, painted.align);
    }

    if let Some(action) = &config.on_press {
        ctx.hits
            .register(rect, action.clone(), Some(hover_style(&painted)));
    }
    if let Some(id) = config.id {
        ctx.focus.register(id, ctx.scope, config.on_press.clone());
    }

    Ok(rect)
}

/// The rect a button occupies inside `area`.
fn button_rect(area: Rect, painted: &Painted, label: &str) -> Rect {
    let width = match painted.width {
        Some(WidthSpec::Full) => area.width,
        Some(WidthSpec::Cells(cells)) => cells.min(area.width),
        None => natural_width(painted, label).min(area.width),
    };
    let height = if painted.border.is_outer() && area.height >= 3 {
        3
    } else {
        area.height.min(1)
    };
    Rect::new(area.x, area.y, width, height)
}

fn natural_width(painted: &Painted, label: &str) -> u16 {
    let label_width = label.width() as u16;
    let border: u16 = if painted.border.is_outer() { 2 } else { 0 };
    label_width + painted.padding_x * 2 + border
}

fn draw_label(buf: &mut Buffer, area: Rect, label: &str, style: Style, align: Alignment) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let y = area.y + area.height / 2;
    let label_width = (label.width() as u16).min(area.width);
    let x = match align {
        Alignment::Center => area.x + (area.width - label_width) / 2,
        Alignment::Right => area.x + area.width - label_width,
        Alignment::Left => area.x,
    };
    buf.set_stringn(x, y, label, area.width as usize, style);
}

/// Hover restyle for the button's hit area.
///
/// Filled accent buttons shift their fill toward the focus color, the
/// rest brighten their label.
fn hover_style(painted: &Painted) -> Style {
    if painted.style.bg == Some(COLOR_PRIMARY) {
        painted.style.bg(COLOR_FOCUS)
    } else {
        painted
            .style
            .fg(COLOR_FOCUS)
            .remove_modifier(Modifier::DIM)
            .add_modifier(Modifier::BOLD)
    }
}

// ============================================================================
// Tests
// ============================================================================
