//! Modal dialog component.
//!
//! A dialog is three cooperating pieces:
//!
//! * [`DialogState`] is the open/closed flag living in app state. Open
//!   and close are idempotent and move keyboard focus into and back out
//!   of the overlay scope.
//! * [`DialogContentConfig`] describes what an open dialog shows, as an
//!   ordered list of [`DialogPart`]s. The page builds one per frame
//!   while the dialog is open and queues it with [`queue_dialog`].
//! * [`render_overlay_request`] draws a queued dialog during the
//!   overlay pass: backdrop, centered frame, parts, and the hit areas
//!   that make clicking outside close it.
//!
//! Closing is a single transition reachable three ways: a click on the
//! backdrop, the cancel key, and a programmatic close all funnel into
//! [`DialogState::close`]. Closing a closed dialog is a no-op.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Widget};

use crate::error::{ConfigError, EnvironmentError};
use crate::style::theme::{COLOR_FOCUS, COLOR_MUTED_FG, COLOR_OVERLAY};
use crate::style::{paint, ClassInput, Painted, VariantSpec};
use crate::ui::focus::{FocusId, FocusRegistry};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::overlay::DialogRequest;
use crate::ui::text::wrap_text;
use crate::ui::transition::dialog_entrance_progress;
use crate::ui::RenderContext;

use super::button::{render_button, ButtonConfig};

/// Styling table for the dialog surface.
pub const DIALOG_SPEC: VariantSpec = VariantSpec::fixed(
    "dialog",
    &["border-rounded", "bg-background", "fg-foreground", "px-2", "py-1"],
);

// ============================================================================
// State
// ============================================================================

/// Open/closed state of one dialog.
#[derive(Debug, Default)]
pub struct DialogState {
    open: bool,
    opened_at: u64,
    restore_focus: Option<FocusId>,
}

impl DialogState {
    pub const fn new() -> Self {
        Self {
            open: false,
            opened_at: 0,
            restore_focus: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Tick at which the dialog last opened.
    pub fn opened_at(&self) -> u64 {
        self.opened_at
    }

    /// Open the dialog and move focus into the overlay scope.
    ///
    /// Opening an already open dialog changes nothing, the entrance
    /// does not replay and the saved focus target is kept.
    pub fn open(&mut self, tick: u64, focus: &mut FocusRegistry) {
        if self.open {
            return;
        }
        self.open = true;
        self.opened_at = tick;
        self.restore_focus = focus.enter_overlay();
    }

    /// Close the dialog and hand focus back to what had it before.
    ///
    /// Backdrop clicks, the cancel key and programmatic closes all end
    /// up here, so repeated or mixed dismissals collapse into one
    /// transition.
    pub fn close(&mut self, focus: &mut FocusRegistry) {
        if !self.open {
            return;
        }
        self.open = false;
        focus.leave_overlay(self.restore_focus.take());
    }

    pub fn toggle(&mut self, tick: u64, focus: &mut FocusRegistry) {
        if self.open {
            self.close(focus);
        } else {
            self.open(tick, focus);
        }
    }
}

// ============================================================================
// Content
// ============================================================================

/// One block of dialog content, rendered top to bottom.
#[derive(Debug, Clone)]
pub enum DialogPart {
    /// Introductory group. Its parts pack together without the blank
    /// row separating top-level parts.
    Header(Vec<DialogPart>),
    /// Emphasized heading.
    Title(String),
    /// Word-wrapped body text.
    Paragraph(String),
    /// An interactive button, focusable within the dialog.
    Button(ButtonConfig),
    /// Dimmed helper line, keybinding hints and the like.
    Hint(String),
}

/// Everything an overlay pass needs to draw one dialog.
#[derive(Debug, Clone)]
pub struct DialogContentConfig {
    /// Identifies which dialog a backdrop click should close.
    pub id: &'static str,
    /// Caller overrides layered onto [`DIALOG_SPEC`].
    pub class: Vec<ClassInput>,
    /// Content blocks in render order.
    pub parts: Vec<DialogPart>,
    /// Responsive width bounds.
    pub min_width: u16,
    pub max_width: u16,
}

impl DialogContentConfig {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            class: Vec::new(),
            parts: Vec::new(),
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn class(mut self, input: impl Into<ClassInput>) -> Self {
        self.class.push(input.into());
        self
    }

    pub fn part(mut self, part: DialogPart) -> Self {
        self.parts.push(part);
        self
    }

    pub fn header(self, parts: Vec<DialogPart>) -> Self {
        self.part(DialogPart::Header(parts))
    }

    pub fn title(self, text: impl Into<String>) -> Self {
        self.part(DialogPart::Title(text.into()))
    }

    pub fn paragraph(self, text: impl Into<String>) -> Self {
        self.part(DialogPart::Paragraph(text.into()))
    }

    pub fn button(self, config: ButtonConfig) -> Self {
        self.part(DialogPart::Button(config))
    }

    pub fn hint(self, text: impl Into<String>) -> Self {
        self.part(DialogPart::Hint(text.into()))
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Queue an open dialog for the overlay pass.
///
/// Does nothing while the dialog is closed. While open, a render
/// context without an overlay layer means there is nowhere detached to
/// draw, which surfaces as an environment error instead of drawing the
/// dialog inline in the page flow.
pub fn queue_dialog(
    ctx: &mut RenderContext<'_>,
    state: &DialogState,
    content: DialogContentConfig,
) -> Result<(), EnvironmentError> {
    if !state.is_open() {
        return Ok(());
    }
    let layer = ctx.overlay_layer()?;
    layer.push(DialogRequest {
        content,
        opened_at: state.opened_at(),
    });
    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

/// Draw one queued dialog over the finished page.
///
/// Hit areas are registered lowest first: the full-viewport backdrop
/// closes the dialog, the surface guard above it swallows clicks on the
/// dialog body, and part buttons land on top of both.
pub fn render_overlay_request(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    viewport: Rect,
    request: &DialogRequest,
) -> Result<(), ConfigError> {
    let content = &request.content;
    let seq = DIALOG_SPEC.resolve(None, None, content.class.iter().cloned())?;
    let painted = paint(&seq);

    buf.set_style(
        viewport,
        Style::default()
            .bg(COLOR_OVERLAY)
            .add_modifier(Modifier::DIM),
    );
    ctx.hits
        .register(viewport, ClickAction::CloseDialog(content.id), None);

    let width = dialog_width(&ctx.layout, content, viewport.width);
    let frame_x = if painted.border.is_outer() { 2 } else { 0 } + painted.padding_x * 2;
    let frame_y = if painted.border.is_outer() { 2 } else { 0 } + painted.padding_y * 2;
    let content_width = width.saturating_sub(frame_x);
    let parts_height = measure_parts(content, content_width)?;
    let height = (parts_height + frame_y).min(viewport.height.saturating_sub(2));

    let dialog_area = Rect {
        x: viewport.x + viewport.width.saturating_sub(width) / 2,
        y: viewport.y + viewport.height.saturating_sub(height) / 2,
        width: width.min(viewport.width),
        height,
    };

    Clear.render(dialog_area, buf);
    if painted.border.is_outer() {
        Block::bordered()
            .border_type(painted.border.border_type())
            .border_style(Style::default().fg(COLOR_FOCUS))
            .style(painted.style)
            .render(dialog_area, buf);
    } else {
        buf.set_style(dialog_area, painted.style);
    }
    ctx.hits
        .register(dialog_area, ClickAction::DialogSurface, None);

    let inner = painted.inner(dialog_area);
    let mut y = inner.y;
    for (index, part) in content.parts.iter().enumerate() {
        if y >= inner.bottom() {
            break;
        }
        if index > 0 {
            y += 1;
            if y >= inner.bottom() {
                break;
            }
        }
        y += render_part(buf, ctx, inner, y, part, &painted)?;
    }

    if dialog_entrance_progress(request.opened_at, ctx.tick) < 0.7 {
        buf.set_style(dialog_area, Style::default().add_modifier(Modifier::DIM));
    }
    Ok(())
}

/// Draw one part at row `y` and report the rows it used.
///
/// Header parts draw their children back to back, so a title and its
/// description read as one block.
fn render_part(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    inner: Rect,
    y: u16,
    part: &DialogPart,
    painted: &Painted,
) -> Result<u16, ConfigError> {
    if y >= inner.bottom() {
        return Ok(0);
    }
    match part {
        DialogPart::Header(parts) => {
            let mut used = 0;
            for nested in parts {
                used += render_part(buf, ctx, inner, y + used, nested, painted)?;
            }
            Ok(used)
        }
        DialogPart::Title(text) => {
            buf.set_stringn(
                inner.x,
                y,
                text,
                inner.width as usize,
                painted.style.add_modifier(Modifier::BOLD),
            );
            Ok(1)
        }
        DialogPart::Paragraph(text) => {
            let mut used = 0;
            for line in wrap_text(text, inner.width) {
                if y + used >= inner.bottom() {
                    break;
                }
                buf.set_stringn(inner.x, y + used, &line, inner.width as usize, painted.style);
                used += 1;
            }
            Ok(used)
        }
        DialogPart::Button(config) => {
            let area = Rect::new(inner.x, y, inner.width, (inner.bottom() - y).min(3));
            let rect = render_button(buf, ctx, area, config)?;
            Ok(rect.height.max(1))
        }
        DialogPart::Hint(text) => {
            buf.set_stringn(
                inner.x,
                y,
                text,
                inner.width as usize,
                Style::default()
                    .fg(COLOR_MUTED_FG)
                    .add_modifier(Modifier::DIM),
            );
            Ok(1)
        }
    }
}

/// Responsive dialog width, clamped to the content's declared bounds.
fn dialog_width(layout: &LayoutContext, content: &DialogContentConfig, area_width: u16) -> u16 {
    if layout.is_extra_small() {
        area_width.saturating_sub(4).min(content.max_width)
    } else if layout.is_narrow() {
        layout.bounded_width(80, content.min_width, content.max_width)
    } else {
        layout.bounded_width(50, content.min_width, content.max_width)
    }
}

/// Rows the parts need at the given content width, gaps included.
fn measure_parts(content: &DialogContentConfig, width: u16) -> Result<u16, ConfigError> {
    let mut height = 0u16;
    for (index, part) in content.parts.iter().enumerate() {
        if index > 0 {
            height += 1;
        }
        height += measure_part(part, width)?;
    }
    Ok(height)
}

fn measure_part(part: &DialogPart, width: u16) -> Result<u16, ConfigError> {
    Ok(match part {
        DialogPart::Header(parts) => {
            let mut rows = 0;
            for nested in parts {
                rows += measure_part(nested, width)?;
            }
            rows
        }
        DialogPart::Title(_) | DialogPart::Hint(_) => 1,
        DialogPart::Paragraph(text) => wrap_text(text, width).len() as u16,
        DialogPart::Button(config) => config.measure_height(3)?,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus::FocusScope;
    use crate::ui::interaction::HitAreaRegistry;
    use crate::ui::overlay::OverlayLayer;

    fn contact_content() -> DialogContentConfig {
        DialogContentConfig::new("contact")
            .title("Get in touch")
            .paragraph("john.doe@example.com")
            .button(
                ButtonConfig::new("Copy email")
                    .focus(FocusId("dialog-copy"))
                    .on_press(ClickAction::CopyEmail),
            )
            .hint("esc closes")
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_open_close_round_trip_restores_focus() {
        let mut state = DialogState::new();
        let mut focus = FocusRegistry::new();
        focus.register(FocusId("email"), FocusScope::Page, None);
        focus.set_focused(Some(FocusId("email")));

        state.open(10, &mut focus);
        assert!(state.is_open());
        assert_eq!(state.opened_at(), 10);
        assert_eq!(focus.scope(), FocusScope::Overlay);
        assert_eq!(focus.focused(), None);

        state.close(&mut focus);
        assert!(!state.is_open());
        assert_eq!(focus.scope(), FocusScope::Page);
        assert_eq!(focus.focused(), Some(FocusId("email")));
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut state = DialogState::new();
        let mut focus = FocusRegistry::new();
        state.open(10, &mut focus);
        state.open(500, &mut focus);
        // The entrance does not restart on redundant opens
        assert_eq!(state.opened_at(), 10);
    }

    #[test]
    fn test_close_when_closed_is_a_no_op() {
        let mut state = DialogState::new();
        let mut focus = FocusRegistry::new();
        focus.set_focused(Some(FocusId("email")));
        state.close(&mut focus);
        state.close(&mut focus);
        assert!(!state.is_open());
        assert_eq!(focus.focused(), Some(FocusId("email")));
    }

    #[test]
    fn test_repeated_mixed_dismissals_collapse() {
        let mut state = DialogState::new();
        let mut focus = FocusRegistry::new();
        focus.register(FocusId("email"), FocusScope::Page, None);
        focus.set_focused(Some(FocusId("email")));

        state.open(0, &mut focus);
        // Backdrop click, then cancel key, then programmatic close
        state.close(&mut focus);
        state.close(&mut focus);
        state.close(&mut focus);
        assert!(!state.is_open());
        assert_eq!(focus.focused(), Some(FocusId("email")));
    }

    #[test]
    fn test_queue_requires_overlay_layer() {
        let mut state = DialogState::new();
        let mut hits = HitAreaRegistry::new();
        let mut focus = FocusRegistry::new();
        state.open(0, &mut focus);

        let mut ctx = RenderContext {
            layout: LayoutContext::new(80, 24),
            hits: &mut hits,
            focus: &mut focus,
            overlay: None,
            scope: FocusScope::Overlay,
            tick: 0,
        };
        let err = queue_dialog(&mut ctx, &state, contact_content()).unwrap_err();
        assert!(matches!(err, EnvironmentError::OverlayUnavailable));
    }

    #[test]
    fn test_queue_skips_closed_dialogs() {
        let state = DialogState::new();
        let mut hits = HitAreaRegistry::new();
        let mut focus = FocusRegistry::new();
        let mut overlay = OverlayLayer::new();
        let mut ctx = RenderContext {
            layout: LayoutContext::new(80, 24),
            hits: &mut hits,
            focus: &mut focus,
            overlay: Some(&mut overlay),
            scope: FocusScope::Page,
            tick: 0,
        };
        queue_dialog(&mut ctx, &state, contact_content()).unwrap();
        drop(ctx);
        assert!(overlay.is_empty());

        // Closed plus missing layer is still fine: nothing needs to render
        let mut ctx = RenderContext {
            layout: LayoutContext::new(80, 24),
            hits: &mut hits,
            focus: &mut focus,
            overlay: None,
            scope: FocusScope::Page,
            tick: 0,
        };
        queue_dialog(&mut ctx, &state, contact_content()).unwrap();
    }

    #[test]
    fn test_render_registers_dismissal_layers() {
        let viewport = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(viewport);
        let mut hits = HitAreaRegistry::new();
        let mut focus = FocusRegistry::new();
        let mut ctx = RenderContext {
            layout: LayoutContext::new(80, 24),
            hits: &mut hits,
            focus: &mut focus,
            overlay: None,
            scope: FocusScope::Overlay,
            tick: 100,
        };
        let request = DialogRequest {
            content: contact_content(),
            opened_at: 0,
        };
        render_overlay_request(&mut buf, &mut ctx, viewport, &request).unwrap();

        // A click in the far corner lands on the backdrop
        assert_eq!(
            ctx.hits.hit_test(0, 0),
            Some(ClickAction::CloseDialog("contact"))
        );
        assert_eq!(
            ctx.hits.hit_test(79, 23),
            Some(ClickAction::CloseDialog("contact"))
        );

        // Somewhere on the surface the guard wins, and the button sits
        // above the guard
        let mut surface = false;
        let mut button = false;
        for y in 0..24 {
            for x in 0..80 {
                match ctx.hits.hit_test(x, y) {
                    Some(ClickAction::DialogSurface) => surface = true,
                    Some(ClickAction::CopyEmail) => button = true,
                    _ => {}
                }
            }
        }
        assert!(surface);
        assert!(button);
    }

    #[test]
    fn test_header_packs_its_parts_together() {
        let content = DialogContentConfig::new("contact")
            .header(vec![
                DialogPart::Title("Contact me".to_string()),
                DialogPart::Paragraph("Reach me directly by email.".to_string()),
            ])
            .paragraph("john.doe@example.com".to_string());

        // Header rows collapse: title + description + gap + paragraph
        assert_eq!(measure_parts(&content, 40).unwrap(), 4);

        let viewport = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(viewport);
        let mut hits = HitAreaRegistry::new();
        let mut focus = FocusRegistry::new();
        let mut ctx = RenderContext {
            layout: LayoutContext::new(80, 24),
            hits: &mut hits,
            focus: &mut focus,
            overlay: None,
            scope: FocusScope::Overlay,
            tick: 100,
        };
        let request = DialogRequest {
            content,
            opened_at: 0,
        };
        render_overlay_request(&mut buf, &mut ctx, viewport, &request).unwrap();

        let text = buffer_text(&buf);
        let title_row = text.lines().position(|l| l.contains("Contact me")).unwrap();
        let desc_row = text
            .lines()
            .position(|l| l.contains("Reach me directly"))
            .unwrap();
        let body_row = text
            .lines()
            .position(|l| l.contains("john.doe@example.com"))
            .unwrap();
        assert_eq!(desc_row, title_row + 1);
        assert_eq!(body_row, desc_row + 2);
    }

    #[test]
    fn test_render_draws_parts_in_order() {
        let viewport = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(viewport);
        let mut hits = HitAreaRegistry::new();
        let mut focus = FocusRegistry::new();
        let mut ctx = RenderContext {
            layout: LayoutContext::new(80, 24),
            hits: &mut hits,
            focus: &mut focus,
            overlay: None,
            scope: FocusScope::Overlay,
            tick: 100,
        };
        let request = DialogRequest {
            content: contact_content(),
            opened_at: 0,
        };
        render_overlay_request(&mut buf, &mut ctx, viewport, &request).unwrap();

        let text = buffer_text(&buf);
        let title = text.find("Get in touch").unwrap();
        let email = text.find("john.doe@example.com").unwrap();
        let hint = text.find("esc closes").unwrap();
        assert!(title < email);
        assert!(email < hint);
    }

    #[test]
    fn test_dialog_focus_stays_in_overlay_scope() {
        let viewport = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(viewport);
        let mut hits = HitAreaRegistry::new();
        let mut focus = FocusRegistry::new();
        focus.register(FocusId("page-btn"), FocusScope::Page, None);

        let mut ctx = RenderContext {
            layout: LayoutContext::new(80, 24),
            hits: &mut hits,
            focus: &mut focus,
            overlay: None,
            scope: FocusScope::Overlay,
            tick: 0,
        };
        ctx.focus.enter_overlay();
        let request = DialogRequest {
            content: contact_content(),
            opened_at: 0,
        };
        render_overlay_request(&mut buf, &mut ctx, viewport, &request).unwrap();

        // Tab cycles only through the dialog's own controls
        ctx.focus.focus_next();
        assert_eq!(ctx.focus.focused(), Some(FocusId("dialog-copy")));
        ctx.focus.focus_next();
        assert_eq!(ctx.focus.focused(), Some(FocusId("dialog-copy")));
    }

    #[test]
    fn test_narrow_viewport_widens_dialog_share() {
        let content = contact_content();
        let normal = dialog_width(&LayoutContext::new(100, 30), &content, 100);
        let narrow = dialog_width(&LayoutContext::new(60, 24), &content, 60);
        // 50% of 100 and 80% of 60
        assert_eq!(normal, 50);
        assert_eq!(narrow, 48);

        let tiny = dialog_width(&LayoutContext::new(40, 12), &content, 40);
        assert_eq!(tiny, 36);
    }
}
