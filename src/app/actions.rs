//! Click and activation handling.
//!
//! Every interactive element on the page registers a [`ClickAction`]
//! during render. Mouse clicks resolve to one through hit testing;
//! Enter on a focused element resolves to the same action through the
//! focus registry. Both funnel into [`App::handle_click_action`].

use crate::app::messages::AppMessage;
use crate::clipboard;
use crate::submit;
use crate::ui::interaction::ClickAction;

use super::form::SubmitStatus;
use super::{App, CONTACT_DIALOG_ID};

impl App {
    /// Dispatch one resolved click action.
    pub fn handle_click_action(&mut self, action: ClickAction) {
        tracing::debug!("Click action: {:?}", action);
        match action {
            ClickAction::NavigateTo(section) => self.scroll_to_section(section),
            ClickAction::OpenUrl(url) => self.open_url(&url),
            ClickAction::OpenDialog(id) => self.open_dialog(id),
            ClickAction::CloseDialog(id) => self.close_dialog(id),
            // Clicks on a dialog body are deliberately inert
            ClickAction::DialogSurface => {}
            ClickAction::FocusField(id) => {
                self.focus.set_focused(Some(id));
                self.mark_dirty();
            }
            ClickAction::SubmitForm => self.submit_contact_form(),
            ClickAction::CopyEmail => self.copy_email(),
        }
    }

    /// Run the action of the focused element, if it has one.
    pub fn activate_focused(&mut self) {
        if let Some(action) = self.focus.activate_action() {
            self.handle_click_action(action);
        }
    }

    /// Hand a URL to the system browser.
    pub fn open_url(&mut self, url: &str) {
        match webbrowser::open(url) {
            Ok(()) => {
                tracing::info!("Opened {} in browser", url);
                self.set_status(format!("Opened {}", url));
            }
            Err(err) => {
                tracing::warn!("Could not open {}: {}", url, err);
                self.set_status(format!("Could not open browser: {}", err));
            }
        }
        self.mark_dirty();
    }

    pub fn open_dialog(&mut self, id: &'static str) {
        if id == CONTACT_DIALOG_ID {
            self.contact_dialog.open(self.tick_count, &mut self.focus);
            self.mark_dirty();
        } else {
            tracing::warn!("Open request for unknown dialog {:?}", id);
        }
    }

    pub fn close_dialog(&mut self, id: &'static str) {
        if id == CONTACT_DIALOG_ID {
            self.contact_dialog.close(&mut self.focus);
            self.mark_dirty();
        }
    }

    /// Close whatever dialog is open. Bound to the cancel key.
    pub fn close_any_dialog(&mut self) {
        self.close_dialog(CONTACT_DIALOG_ID);
    }

    /// Copy the contact address out of the email dialog.
    pub fn copy_email(&mut self) {
        match clipboard::copy_text(&self.profile.email) {
            Ok(()) => {
                tracing::info!("Copied contact address to clipboard");
                self.set_status(format!("Copied {}", self.profile.email));
            }
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {}", err);
                self.set_status(err.to_string());
            }
        }
        self.mark_dirty();
    }

    /// Validate and send the contact form.
    ///
    /// Validation failures surface immediately and nothing is sent.
    /// A send already in flight is left alone.
    pub fn submit_contact_form(&mut self) {
        if self.form.is_sending() {
            return;
        }
        if let Err(reason) = self.form.validate() {
            self.form.status = SubmitStatus::Failed(reason.clone());
            self.set_status(reason);
            self.mark_dirty();
            return;
        }

        self.form.status = SubmitStatus::Sending;
        self.mark_dirty();

        let client = self.http.clone();
        let endpoint = self.profile.contact_endpoint.clone();
        let submission = self.form.submission();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = submit::submit(&client, &endpoint, &submission).await;
            let _ = tx.send(AppMessage::SubmitFinished(result));
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
