//! Input context: the state snapshot dispatch decisions depend on.

/// Which modal surface, if any, currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalType {
    /// No modal, keys go to the page.
    #[default]
    None,
    /// The email dialog is open and contains all input.
    Dialog,
}

/// Snapshot of the input-relevant app state at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub modal: ModalType,
    /// A form field is focused, so printable keys are text entry.
    pub typing: bool,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_typing(mut self, typing: bool) -> Self {
        self.typing = typing;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}
