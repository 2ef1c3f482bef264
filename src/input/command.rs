//! The command enum: every action a key can trigger.

use crate::app::Section;

/// A user action, produced by the registry and executed by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Exit the application.
    Quit,
    /// Move keyboard focus to the next element in the active scope.
    FocusNext,
    /// Move keyboard focus to the previous element.
    FocusPrev,
    /// Run the focused element's action.
    Activate,
    /// Drop focus from the current form field.
    Blur,
    /// Append a character to the focused form field.
    TypeChar(char),
    /// Delete the last character of the focused form field.
    DeleteChar,
    /// Scroll the page by a row count, positive meaning down.
    ScrollLines(i16),
    ScrollPageDown,
    ScrollPageUp,
    ScrollToTop,
    ScrollToBottom,
    /// Jump to a page section.
    NavigateTo(Section),
    /// Dismiss the open dialog.
    CloseDialog,
    /// Copy the contact address from the email dialog.
    CopyEmail,
    /// Swallow the key without doing anything. Used by dialogs to keep
    /// keystrokes away from the page underneath.
    Noop,
}

impl Command {
    /// Whether executing this command should trigger a redraw.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }
}
