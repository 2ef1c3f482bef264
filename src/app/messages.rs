//! Messages from async tasks back to the app.
//!
//! Spawned work never touches app state directly. It sends one of
//! these over the app's unbounded channel and the event loop applies
//! the result on the next pass.

use crate::submit::SubmitError;

use super::form::SubmitStatus;
use super::App;

/// Result of work running off the event loop.
#[derive(Debug)]
pub enum AppMessage {
    /// The contact form submission finished.
    SubmitFinished(Result<(), SubmitError>),
}

impl App {
    /// Apply one message to app state.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SubmitFinished(Ok(())) => {
                tracing::info!("Contact form submitted");
                self.form.accept();
                self.set_status("Message sent. Thank you!");
            }
            AppMessage::SubmitFinished(Err(err)) => {
                tracing::warn!("Contact form submission failed: {}", err);
                let text = err.to_string();
                self.form.status = SubmitStatus::Failed(text.clone());
                self.set_status(text);
            }
        }
        self.mark_dirty();
    }
}

// ============================================================================
// Tests
// ============================================================================
