//! Styling system for folio components.
//!
//! The pipeline is: class lists ([`merge`]) into token sequences
//! ([`token`]), variant tables resolved on top ([`variant`]), and the
//! result painted into terminal styling ([`paint`]) against the theme
//! palette ([`theme`]).

pub mod merge;
pub mod paint;
pub mod theme;
pub mod token;
pub mod variant;

pub use merge::{maybe, merge, token as class, when, ClassInput};
pub use paint::{paint, BorderKind, Painted, WidthSpec};
pub use token::{StyleToken, TokenSequence, FAMILIES};
pub use variant::{AxisEntry, VariantSpec};
