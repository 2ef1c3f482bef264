//! Clipboard text writing.
//!
//! Self-contained wrapper around the system clipboard. No coupling to
//! UI or application state.

use thiserror::Error;

/// Errors surfaced when writing to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Clipboard access failed (headless session, missing display).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The write itself failed.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Put a text snippet on the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
    Ok(())
}
