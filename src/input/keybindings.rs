//! Default key bindings.
//!
//! Two tables: the global page bindings, and the bindings active while
//! the email dialog is open. The registry decides which table applies;
//! this module only stores the mappings.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::Section;

use super::command::Command;

/// A key plus its modifiers, used as the lookup key for bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// The configured key tables.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    global: HashMap<KeyCombo, Command>,
    dialog: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            dialog: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_dialog_bindings();
        config
    }

    /// Bindings active on the page when no field is capturing text.
    fn setup_global_bindings(&mut self) {
        let bindings = &mut self.global;
        bindings.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);

        bindings.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        bindings.insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev);
        bindings.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        bindings.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);

        bindings.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollLines(-1));
        bindings.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollLines(1));
        bindings.insert(KeyCombo::plain(KeyCode::Char('k')), Command::ScrollLines(-1));
        bindings.insert(KeyCombo::plain(KeyCode::Char('j')), Command::ScrollLines(1));
        bindings.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        bindings.insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);
        bindings.insert(KeyCombo::plain(KeyCode::Home), Command::ScrollToTop);
        bindings.insert(KeyCombo::plain(KeyCode::End), Command::ScrollToBottom);
        bindings.insert(KeyCombo::plain(KeyCode::Char('g')), Command::ScrollToTop);
        bindings.insert(
            KeyCombo::shift(KeyCode::Char('G')),
            Command::ScrollToBottom,
        );

        bindings.insert(
            KeyCombo::plain(KeyCode::Char('1')),
            Command::NavigateTo(Section::About),
        );
        bindings.insert(
            KeyCombo::plain(KeyCode::Char('2')),
            Command::NavigateTo(Section::Projects),
        );
        bindings.insert(
            KeyCombo::plain(KeyCode::Char('3')),
            Command::NavigateTo(Section::Contact),
        );
    }

    /// Bindings active while the email dialog is open.
    ///
    /// Deliberately small: the dialog swallows everything else so the
    /// page underneath stays inert.
    fn setup_dialog_bindings(&mut self) {
        let bindings = &mut self.dialog;
        bindings.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseDialog);
        bindings.insert(KeyCombo::plain(KeyCode::Char('q')), Command::CloseDialog);
        bindings.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        bindings.insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev);
        bindings.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        bindings.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        bindings.insert(KeyCombo::plain(KeyCode::Char('c')), Command::CopyEmail);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_dialog(&self, combo: &KeyCombo) -> Option<&Command> {
        self.dialog.get(combo)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_bindings_cover_navigation() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::plain(KeyCode::Char('q'))),
            Some(&Command::Quit)
        );
        assert_eq!(
            config.get_global(&KeyCombo::plain(KeyCode::Char('2'))),
            Some(&Command::NavigateTo(Section::Projects))
        );
        assert_eq!(
            config.get_global(&KeyCombo::plain(KeyCode::PageDown)),
            Some(&Command::ScrollPageDown)
        );
    }

    #[test]
    fn test_dialog_bindings_close_paths() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_dialog(&KeyCombo::plain(KeyCode::Esc)),
            Some(&Command::CloseDialog)
        );
        assert_eq!(
            config.get_dialog(&KeyCombo::plain(KeyCode::Char('c'))),
            Some(&Command::CopyEmail)
        );
        // Scrolling is not available inside the dialog
        assert_eq!(config.get_dialog(&KeyCombo::plain(KeyCode::PageDown)), None);
    }

    #[test]
    fn test_modifiers_distinguish_combos() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::shift(KeyCode::Char('G'))),
            Some(&Command::ScrollToBottom)
        );
        assert_eq!(config.get_global(&KeyCombo::ctrl(KeyCode::Char('g'))), None);
    }
}
