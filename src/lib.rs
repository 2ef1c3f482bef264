//! folio - a personal profile page for the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod input;
pub mod logging;
pub mod profile;
pub mod style;
pub mod submit;
pub mod ui;
