//! Responsive layout system.
//!
//! Provides the [`LayoutContext`] that encapsulates terminal dimensions
//! and the sizing decisions the page makes from them: when the about
//! section stacks its columns, how wide the centered content column is,
//! and when the terminal is too small to render at all.
//!
//! A `LayoutContext` is built once per frame from the frame area and
//! passed down through every render function.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 50 columns)
    pub const XS_WIDTH: u16 = 50;
    /// Small terminal (< 72 columns)
    pub const SM_WIDTH: u16 = 72;
    /// Medium terminal (< 110 columns)
    pub const MD_WIDTH: u16 = 110;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Hard minimum width below which the page is not rendered
pub const MIN_TERMINAL_WIDTH: u16 = 30;

/// Hard minimum height below which the page is not rendered
pub const MIN_TERMINAL_HEIGHT: u16 = 10;

/// Check whether the terminal is below the hard rendering minimum.
pub fn is_terminal_too_small(width: u16, height: u16) -> bool {
    width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 50 cols)
    ExtraSmall,
    /// Small (< 72 cols)
    Small,
    /// Medium (< 110 cols)
    Medium,
    /// Large (>= 110 cols)
    Large,
}

// ============================================================================
// Layout Context
// ============================================================================

/// Terminal dimensions plus responsive sizing helpers.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width clamped to min/max bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    /// Get the width size category.
    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Check if the terminal is narrow (less than 72 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is short (less than 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Check if the terminal is narrow or short.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Check if the terminal is extra small (very constrained space).
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Page Layout Decisions
    // ========================================================================

    /// Width of the centered content column the page sections render in.
    ///
    /// Wide terminals get a bounded column so text lines stay readable;
    /// narrow terminals use everything but a 2 column margin.
    pub fn content_column_width(&self) -> u16 {
        if self.is_narrow() {
            self.width.saturating_sub(2)
        } else {
            self.bounded_width(80, 60, 96)
        }
    }

    /// Whether the about section stacks portrait above text instead of
    /// placing them side by side.
    pub fn should_stack_columns(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Column split for the about section when side by side.
    ///
    /// Returns `(portrait_width, text_width)` out of `total`.
    pub fn about_column_widths(&self, total: u16) -> (u16, u16) {
        let portrait = ((total as u32 * 35) / 100).clamp(14, 30) as u16;
        (portrait, total.saturating_sub(portrait))
    }

    /// Rows of the sticky page header (nav row plus separator rule).
    pub fn header_height(&self) -> u16 {
        2
    }

    /// Rows of the footer hint bar.
    pub fn footer_height(&self) -> u16 {
        1
    }

    /// Rows left for the scrolling content region.
    pub fn content_height(&self) -> u16 {
        self.height
            .saturating_sub(self.header_height())
            .saturating_sub(self.footer_height())
    }
}

impl Default for LayoutContext {
    /// Returns a default layout context with standard 80x24 terminal size.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
