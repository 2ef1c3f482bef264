//! Color theme constants for the folio UI.
//!
//! Defines the dark palette the token painter maps color values onto.

use ratatui::style::Color;

// ============================================================================
// Core Palette
// ============================================================================

/// Accent color for primary actions and the active nav entry
pub const COLOR_PRIMARY: Color = Color::Rgb(99, 102, 241); // indigo #6366F1

/// Page background
pub const COLOR_BACKGROUND: Color = Color::Rgb(15, 17, 26);

/// Default text color
pub const COLOR_FOREGROUND: Color = Color::Rgb(226, 232, 240);

/// Subdued surface color for secondary buttons and quiet fills
pub const COLOR_MUTED: Color = Color::Rgb(45, 52, 71);

/// Subdued text color for descriptions and hints
pub const COLOR_MUTED_FG: Color = Color::Rgb(148, 163, 184);

// ============================================================================
// Chrome
// ============================================================================

/// Border color for cards, outline buttons, and dialog frames
pub const COLOR_BORDER: Color = Color::Rgb(55, 63, 86);

/// Focus ring color for the focused interactive element
pub const COLOR_FOCUS: Color = Color::Rgb(129, 140, 248); // indigo #818CF8

/// Dimmed backdrop fill behind an open dialog
pub const COLOR_OVERLAY: Color = Color::Rgb(8, 9, 14);

// ============================================================================
// Status
// ============================================================================

/// Success color for the sent confirmation of the contact form
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Error color for failed submissions and validation notices
pub const COLOR_ERROR: Color = Color::Red;
