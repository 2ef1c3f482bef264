//! Input handling: keyboard to command to app mutation.
//!
//! All keyboard input flows one way:
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! The registry only needs an [`InputContext`] snapshot to decide what
//! a key means; execution happens against the full app state. Mouse
//! clicks skip the registry and resolve through hit testing instead,
//! but end in the same app methods.

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crate::app::App;

impl App {
    /// Build the dispatch context from current state.
    pub fn build_input_context(&self) -> InputContext {
        let modal = if self.contact_dialog.is_open() {
            ModalType::Dialog
        } else {
            ModalType::None
        };
        InputContext::new()
            .with_modal(modal)
            .with_typing(self.typing_field().is_some())
    }

    /// Execute a dispatched command.
    ///
    /// Returns `true` if the command did something.
    pub fn execute_command(&mut self, command: Command) -> bool {
        tracing::debug!("execute_command: {:?}", command);
        if command.marks_dirty() {
            self.mark_dirty();
        }
        match command {
            Command::Quit => {
                self.quit();
                true
            }
            Command::FocusNext => {
                self.focus.focus_next();
                true
            }
            Command::FocusPrev => {
                self.focus.focus_prev();
                true
            }
            Command::Activate => {
                self.activate_focused();
                true
            }
            Command::Blur => {
                self.focus.set_focused(None);
                true
            }
            Command::TypeChar(c) => match self.typing_field() {
                Some(field) => {
                    self.form.type_char(field, c);
                    true
                }
                None => false,
            },
            Command::DeleteChar => match self.typing_field() {
                Some(field) => {
                    self.form.delete_char(field);
                    true
                }
                None => false,
            },
            Command::ScrollLines(lines) => {
                self.scroll_by(lines);
                true
            }
            Command::ScrollPageDown => {
                self.scroll_page(1);
                true
            }
            Command::ScrollPageUp => {
                self.scroll_page(-1);
                true
            }
            Command::ScrollToTop => {
                self.scroll_to_top();
                true
            }
            Command::ScrollToBottom => {
                self.scroll_to_bottom();
                true
            }
            Command::NavigateTo(section) => {
                self.scroll_to_section(section);
                true
            }
            Command::CloseDialog => {
                self.close_any_dialog();
                true
            }
            Command::CopyEmail => {
                self.copy_email();
                true
            }
            Command::Noop => true,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::{FIELD_NAME, SEND_BUTTON};
    use crate::app::{Section, CONTACT_DIALOG_ID};
    use crate::profile::Profile;
    use crate::ui::focus::FocusScope;
    use crate::ui::interaction::ClickAction;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn test_app() -> App {
        let mut app = App::new(Profile::default());
        app.max_scroll = 100.0;
        app.section_offsets = [0.0, 40.0, 80.0];
        app
    }

    #[test]
    fn test_build_input_context_default() {
        let app = test_app();
        let ctx = app.build_input_context();
        assert_eq!(ctx.modal, ModalType::None);
        assert!(!ctx.typing);
    }

    #[test]
    fn test_build_input_context_tracks_dialog_and_typing() {
        let mut app = test_app();
        app.focus.set_focused(Some(FIELD_NAME));
        assert!(app.build_input_context().typing);

        app.open_dialog(CONTACT_DIALOG_ID);
        let ctx = app.build_input_context();
        assert_eq!(ctx.modal, ModalType::Dialog);
        // Overlay focus suspends form typing
        assert!(!ctx.typing);
    }

    #[test]
    fn test_execute_quit() {
        let mut app = test_app();
        assert!(app.execute_command(Command::Quit));
        assert!(app.should_quit);
    }

    #[test]
    fn test_execute_typing_into_focused_field() {
        let mut app = test_app();
        app.focus.set_focused(Some(FIELD_NAME));
        assert!(app.execute_command(Command::TypeChar('J')));
        assert!(app.execute_command(Command::TypeChar('o')));
        assert_eq!(app.form.name, "Jo");
        assert!(app.execute_command(Command::DeleteChar));
        assert_eq!(app.form.name, "J");
    }

    #[test]
    fn test_typing_without_field_is_unhandled() {
        let mut app = test_app();
        assert!(!app.execute_command(Command::TypeChar('x')));
        assert!(app.form.name.is_empty());
    }

    #[test]
    fn test_full_dispatch_and_execute() {
        let mut app = test_app();
        let registry = CommandRegistry::new();
        let context = app.build_input_context();

        let key = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
        let command = registry.dispatch(key, &context).unwrap();
        assert!(app.execute_command(command));
        assert_eq!(app.active_section, Section::Projects);
        assert_eq!(app.scroll_target, 40.0);
    }

    #[test]
    fn test_escape_closes_dialog_through_command() {
        let mut app = test_app();
        app.open_dialog(CONTACT_DIALOG_ID);
        let registry = CommandRegistry::new();

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let command = registry
            .dispatch(key, &app.build_input_context())
            .unwrap();
        app.execute_command(command);
        assert!(!app.contact_dialog.is_open());
        assert_eq!(app.focus.scope(), FocusScope::Page);
    }

    #[test]
    fn test_enter_activates_registered_action() {
        let mut app = test_app();
        app.focus.register(
            SEND_BUTTON,
            FocusScope::Page,
            Some(ClickAction::NavigateTo(Section::Contact)),
        );
        app.focus.set_focused(Some(SEND_BUTTON));
        assert!(app.execute_command(Command::Activate));
        assert_eq!(app.active_section, Section::Contact);
    }
}
