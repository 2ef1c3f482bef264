//! Contact form state and validation.

use crate::submit::Submission;
use crate::ui::focus::FocusId;

pub const FIELD_NAME: FocusId = FocusId("contact-name");
pub const FIELD_EMAIL: FocusId = FocusId("contact-email");
pub const FIELD_MESSAGE: FocusId = FocusId("contact-message");
pub const SEND_BUTTON: FocusId = FocusId("contact-send");

/// The editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// The field behind a focus id, if the id is a form field at all.
    pub fn from_focus(id: FocusId) -> Option<Self> {
        match id {
            _ if id == FIELD_NAME => Some(FormField::Name),
            _ if id == FIELD_EMAIL => Some(FormField::Email),
            _ if id == FIELD_MESSAGE => Some(FormField::Message),
            _ => None,
        }
    }

    pub fn focus_id(self) -> FocusId {
        match self {
            FormField::Name => FIELD_NAME,
            FormField::Email => FIELD_EMAIL,
            FormField::Message => FIELD_MESSAGE,
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

/// Where the last submission attempt stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// The contact form's text and submission status.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn type_char(&mut self, field: FormField, c: char) {
        // Keep control characters out of the submission payload
        if c.is_control() {
            return;
        }
        self.field_mut(field).push(c);
        self.clear_failure();
    }

    pub fn delete_char(&mut self, field: FormField) {
        self.field_mut(field).pop();
        self.clear_failure();
    }

    /// Checks every field before a submit is attempted.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err("All fields are required".to_string());
        }
        if !self.email.contains('@') {
            return Err("Enter a valid email address".to_string());
        }
        Ok(())
    }

    pub fn submission(&self) -> Submission {
        Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Clear the fields once the endpoint accepted the submission.
    pub fn accept(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = SubmitStatus::Sent;
    }

    fn clear_failure(&mut self) {
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@roe.dev".to_string(),
            message: "Hi".to_string(),
            status: SubmitStatus::Idle,
        }
    }

    #[test]
    fn test_field_focus_round_trip() {
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            assert_eq!(FormField::from_focus(field.focus_id()), Some(field));
        }
        assert_eq!(FormField::from_focus(SEND_BUTTON), None);
        assert_eq!(FormField::from_focus(FocusId("nav-about")), None);
    }

    #[test]
    fn test_typing_and_deleting() {
        let mut form = ContactForm::default();
        for c in "Jane".chars() {
            form.type_char(FormField::Name, c);
        }
        assert_eq!(form.name, "Jane");
        form.delete_char(FormField::Name);
        assert_eq!(form.name, "Jan");
        // Control characters never land in the payload
        form.type_char(FormField::Name, '\u{8}');
        assert_eq!(form.name, "Jan");
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        let form = ContactForm::default();
        assert_eq!(form.validate(), Err("All fields are required".to_string()));

        let mut partial = filled_form();
        partial.message.clear();
        assert!(partial.validate().is_err());

        // Whitespace-only counts as empty
        partial.message = "   ".to_string();
        assert!(partial.validate().is_err());
    }

    #[test]
    fn test_email_needs_an_at_sign() {
        let mut form = filled_form();
        form.email = "jane.roe.dev".to_string();
        assert_eq!(
            form.validate(),
            Err("Enter a valid email address".to_string())
        );
    }

    #[test]
    fn test_valid_form_builds_trimmed_submission() {
        let mut form = filled_form();
        form.name = "  Jane  ".to_string();
        assert!(form.validate().is_ok());
        assert_eq!(form.submission().name, "Jane");
    }

    #[test]
    fn test_accept_clears_fields() {
        let mut form = filled_form();
        form.status = SubmitStatus::Sending;
        form.accept();
        assert!(form.name.is_empty());
        assert_eq!(form.status, SubmitStatus::Sent);
    }

    #[test]
    fn test_typing_clears_a_stale_failure() {
        let mut form = filled_form();
        form.status = SubmitStatus::Failed("All fields are required".to_string());
        form.type_char(FormField::Message, '!');
        assert_eq!(form.status, SubmitStatus::Idle);
    }
}
