//! Application state.
//!
//! [`App`] owns everything the page needs between frames: the profile
//! being shown, scroll position, form drafts, dialog state, and the
//! per-frame registries the renderer fills in. The event loop drives it
//! through [`App::tick`], input dispatch, and [`App::handle_message`].

pub mod actions;
pub mod form;
pub mod messages;
pub mod navigation;

pub use form::{ContactForm, FormField, SubmitStatus};
pub use messages::AppMessage;
pub use navigation::{Section, SECTIONS};

use tokio::sync::mpsc;

use crate::profile::Profile;
use crate::ui::components::DialogState;
use crate::ui::focus::{FocusRegistry, FocusScope};
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::layout::LayoutContext;
use crate::ui::overlay::OverlayLayer;
use crate::ui::page::PageTransitions;

/// Id of the email dialog, shared by its trigger and its close paths.
pub const CONTACT_DIALOG_ID: &str = "contact";

/// Ticks a status note stays in the footer (about 3 seconds).
const STATUS_NOTE_TICKS: u64 = 180;

/// A transient footer message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNote {
    pub text: String,
    pub expires_at: u64,
}

/// Top-level application state.
pub struct App {
    pub profile: Profile,

    /// Animated scroll offset of the page column, in rows.
    pub scroll: f32,
    /// Where the scroll is headed.
    pub scroll_target: f32,
    /// Largest reachable scroll offset, measured during render.
    pub max_scroll: f32,
    /// Row offset of each section in page coordinates, measured during
    /// render.
    pub section_offsets: [f32; 3],
    /// Terminal dimensions from the last render.
    pub layout: LayoutContext,

    /// Which nav entry is highlighted.
    pub active_section: Section,
    pub form: ContactForm,
    pub contact_dialog: DialogState,
    pub transitions: PageTransitions,

    /// Clickable regions registered by the last render.
    pub hits: HitAreaRegistry,
    /// Tab order registered by the last render.
    pub focus: FocusRegistry,
    /// Dialog queue drained by the overlay pass.
    pub overlay: OverlayLayer,

    pub tick_count: u64,
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub status_note: Option<StatusNote>,

    /// Receiver half of the async message channel. Taken by the event
    /// loop on startup.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub http: reqwest::Client,
}

impl App {
    pub fn new(profile: Profile) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            profile,
            scroll: 0.0,
            scroll_target: 0.0,
            max_scroll: 0.0,
            section_offsets: [0.0; 3],
            layout: LayoutContext::default(),
            active_section: Section::About,
            form: ContactForm::default(),
            contact_dialog: DialogState::new(),
            transitions: PageTransitions::new(),
            hits: HitAreaRegistry::new(),
            focus: FocusRegistry::new(),
            overlay: OverlayLayer::new(),
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            status_note: None,
            message_rx: Some(message_rx),
            message_tx,
            http: reqwest::Client::new(),
        }
    }

    /// Advance animations by one 16ms tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        let diff = self.scroll_target - self.scroll;
        if diff != 0.0 {
            if diff.abs() < 0.5 {
                self.scroll = self.scroll_target;
            } else {
                self.scroll += diff * 0.2;
            }
            self.mark_dirty();
        }

        if let Some(note) = &self.status_note {
            if self.tick_count >= note.expires_at {
                self.status_note = None;
                self.mark_dirty();
            }
        }

        if self.transitions.any_running(self.tick_count) {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a transient message in the footer.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_note = Some(StatusNote {
            text: text.into(),
            expires_at: self.tick_count + STATUS_NOTE_TICKS,
        });
        self.mark_dirty();
    }

    /// The form field keystrokes go to, while one is focused.
    pub fn typing_field(&self) -> Option<FormField> {
        if self.focus.scope() != FocusScope::Page {
            return None;
        }
        self.focus.focused().and_then(FormField::from_focus)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut app = App::new(Profile::default());
        app.tick_count = u64::MAX;
        app.tick();
        assert_eq!(app.tick_count, 0);
    }

    #[test]
    fn test_status_note_expires() {
        let mut app = App::new(Profile::default());
        app.set_status("Copied john@doe.dev");
        assert!(app.status_note.is_some());
        for _ in 0..=STATUS_NOTE_TICKS {
            app.tick();
        }
        assert!(app.status_note.is_none());
    }

    #[test]
    fn test_typing_field_follows_focus() {
        let mut app = App::new(Profile::default());
        assert_eq!(app.typing_field(), None);
        app.focus.set_focused(Some(form::FIELD_EMAIL));
        assert_eq!(app.typing_field(), Some(FormField::Email));

        // A focused form field under an open dialog does not type
        app.contact_dialog.open(0, &mut app.focus);
        assert_eq!(app.typing_field(), None);
    }
}
