//! Reusable rendering components.
//!
//! Each component follows the same shape: a `*Config` struct built with
//! chained setters, a `VariantSpec` declaring its styling table, and a
//! `render_*` function that paints into a [`Buffer`] and returns the
//! area it used. Components never reach into application state; anything
//! interactive is registered through the [`RenderContext`] they are
//! handed.
//!
//! [`Buffer`]: ratatui::buffer::Buffer
//! [`RenderContext`]: crate::ui::RenderContext

pub mod button;
pub mod card;
pub mod dialog;

pub use button::{render_button, ButtonConfig, BUTTON_SPEC};
pub use card::{
    render_card, render_card_content, render_card_header, render_card_title, CARD_CONTENT_SPEC,
    CARD_HEADER_SPEC, CARD_SPEC, CARD_TITLE_SPEC,
};
pub use dialog::{
    queue_dialog, render_overlay_request, DialogContentConfig, DialogPart, DialogState, DIALOG_SPEC,
};
