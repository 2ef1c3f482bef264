//! Terminal UI for the profile page.
//!
//! Each frame renders in three passes:
//!
//! - Page: the three sections draw into an offscreen buffer tall enough
//!   for the whole page; the rows under the viewport are blitted below
//!   the header and the page's hit areas are shifted by the scroll
//!   offset.
//! - Chrome: header nav and footer draw in screen coordinates.
//! - Overlay: dialogs queued during the page pass draw over everything
//!   with a dimmed backdrop.
//!
//! ## Responsive Layout System
//!
//! Sizing decisions flow through [`LayoutContext`], which wraps the
//! terminal dimensions and answers questions like
//! `should_stack_columns()` and `content_column_width()`. Every render
//! function receives it inside [`RenderContext`] rather than consulting
//! the terminal directly, so tests can render at any size.

pub mod components;
pub mod focus;
pub mod interaction;
pub mod layout;
pub mod overlay;
pub mod page;
pub mod text;
pub mod transition;

// Re-export the layout system for external use
pub use layout::{breakpoints, LayoutContext};
pub use page::PageTransitions;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

use crate::app::App;
use crate::error::{EnvironmentError, FolioError};
use crate::style::theme::COLOR_MUTED_FG;
use focus::{FocusRegistry, FocusScope};
use interaction::HitAreaRegistry;
use overlay::OverlayLayer;
use page::{layout_page, render_footer, render_header, render_page, PageState};

// ============================================================================
// Render Context
// ============================================================================

/// Capabilities handed to every render function.
///
/// Components receive their environment explicitly instead of reaching
/// for globals: the hit and focus registries they register into, the
/// overlay layer (only present during the page pass, so overlay content
/// cannot queue further overlays), and the scope their focus targets
/// belong to.
pub struct RenderContext<'a> {
    pub layout: LayoutContext,
    pub hits: &'a mut HitAreaRegistry,
    pub focus: &'a mut FocusRegistry,
    pub overlay: Option<&'a mut OverlayLayer>,
    pub scope: FocusScope,
    pub tick: u64,
}

impl RenderContext<'_> {
    /// The overlay layer, or [`EnvironmentError::OverlayUnavailable`]
    /// in passes that have none.
    pub fn overlay_layer(&mut self) -> Result<&mut OverlayLayer, EnvironmentError> {
        self.overlay
            .as_deref_mut()
            .ok_or(EnvironmentError::OverlayUnavailable)
    }
}

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render one frame of the page.
pub fn render(frame: &mut Frame, app: &mut App) -> Result<(), FolioError> {
    let size = frame.area();
    let layout = LayoutContext::new(size.width, size.height);
    app.layout = layout;

    app.hits.clear();
    app.focus.begin_frame();
    app.overlay.begin_frame();

    if layout::is_terminal_too_small(size.width, size.height) {
        render_too_small(frame.buffer_mut(), size);
        return Ok(());
    }

    let page = layout_page(&app.profile, &layout);
    app.section_offsets = page.section_offsets().map(f32::from);
    let content_height = layout.content_height();
    app.max_scroll = f32::from(page.total_height.saturating_sub(content_height));
    app.scroll_target = app.scroll_target.clamp(0.0, app.max_scroll);
    app.scroll = app.scroll.clamp(0.0, app.max_scroll);

    let tick = app.tick_count;
    let active = app.active_section;
    let scroll = app.scroll.round().max(0.0) as u16;

    let App {
        profile,
        form,
        contact_dialog,
        transitions,
        hits,
        focus,
        overlay,
        status_note,
        ..
    } = app;

    // Page pass, in page coordinates.
    let mut page_buf = Buffer::empty(Rect::new(0, 0, size.width, page.total_height.max(1)));
    {
        let mut ctx = RenderContext {
            layout,
            hits,
            focus,
            overlay: Some(overlay),
            scope: FocusScope::Page,
            tick,
        };
        let state = PageState {
            profile,
            form,
            dialog: contact_dialog,
        };
        render_page(&mut page_buf, &mut ctx, &page, &state, transitions, scroll)?;
    }

    // Blit the viewport rows below the header and move the page's hit
    // areas into screen coordinates. Chrome and overlay register after
    // this, so only page hits get shifted.
    let content_area = Rect::new(0, layout.header_height(), size.width, content_height);
    let frame_buf = frame.buffer_mut();
    for row in 0..content_area.height {
        let src_y = scroll + row;
        if src_y >= page.total_height {
            break;
        }
        for col in 0..size.width {
            if let (Some(src), Some(dst)) = (
                page_buf.cell((col, src_y)),
                frame_buf.cell_mut((col, content_area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
    hits.translate_y(content_area.y as i32 - scroll as i32, content_area);

    // Chrome pass, in screen coordinates.
    let mut ctx = RenderContext {
        layout,
        hits,
        focus,
        overlay: None,
        scope: FocusScope::Page,
        tick,
    };
    let header_area = Rect::new(0, 0, size.width, layout.header_height());
    render_header(frame_buf, &mut ctx, header_area, profile, active)?;

    let footer_area = Rect::new(0, size.height - 1, size.width, layout.footer_height());
    let note = status_note.as_ref().map(|note| note.text.as_str());
    render_footer(frame_buf, footer_area, profile, note);

    // Overlay pass. The context carries no overlay layer, so dialog
    // content cannot stack another dialog on top.
    for request in overlay.take_requests() {
        let mut ctx = RenderContext {
            layout,
            hits,
            focus,
            overlay: None,
            scope: FocusScope::Overlay,
            tick,
        };
        components::render_overlay_request(frame_buf, &mut ctx, size, &request)?;
    }

    // A freshly opened dialog has no focused control yet; land on its
    // first one so Tab and Enter work immediately.
    if focus.scope() == FocusScope::Overlay && focus.focused().is_none() {
        focus.focus_next();
    }

    Ok(())
}

/// Centered notice shown instead of the page when the terminal is
/// below the minimum size.
fn render_too_small(buf: &mut Buffer, area: Rect) {
    let lines = [
        "Terminal too small".to_string(),
        format!(
            "Need at least {}x{}",
            layout::MIN_TERMINAL_WIDTH,
            layout::MIN_TERMINAL_HEIGHT
        ),
    ];
    let start_y = area.height.saturating_sub(lines.len() as u16) / 2;
    for (i, line) in lines.iter().enumerate() {
        let x = area.x + area.width.saturating_sub(line.len() as u16) / 2;
        let style = if i == 0 {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_MUTED_FG).add_modifier(Modifier::DIM)
        };
        buf.set_stringn(x, area.y + start_y + i as u16, line, area.width as usize, style);
    }
}
