//! Key event to command dispatch.
//!
//! Priority order:
//! 1. Ctrl+C, which always quits
//! 2. Dialog bindings while the dialog is open; unmatched keys become
//!    [`Command::Noop`] so nothing reaches the page underneath
//! 3. Text entry while a form field is focused
//! 4. The global page bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Maps key events to commands for the current context.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatch one key event.
    ///
    /// `None` means the key is ignored entirely.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        if context.is_modal_active() {
            return self.dispatch_dialog(key);
        }

        if context.typing {
            if let Some(command) = Self::dispatch_typing(key) {
                return Some(command);
            }
        }

        let combo = KeyCombo::new(key.code, key.modifiers);
        self.config.get_global(&combo).copied()
    }

    /// Dialog keys, with everything unbound swallowed.
    fn dispatch_dialog(&self, key: KeyEvent) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);
        if let Some(command) = self.config.get_dialog(&combo) {
            return Some(*command);
        }
        Some(Command::Noop)
    }

    /// Keys while a form field captures text.
    ///
    /// Printable characters become input; editing and focus movement
    /// keep their keys; anything else falls through to the global
    /// table so paging still works mid-form.
    fn dispatch_typing(key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                Some(Command::TypeChar(c))
            }
            KeyCode::Backspace => Some(Command::DeleteChar),
            KeyCode::Esc => Some(Command::Blur),
            KeyCode::Enter | KeyCode::Tab => Some(Command::FocusNext),
            KeyCode::BackTab => Some(Command::FocusPrev),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
