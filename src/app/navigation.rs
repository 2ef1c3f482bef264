//! Page sections and scrolling.
//!
//! The page is one tall column of three sections. Scrolling animates a
//! float offset toward `scroll_target`; the render pass measures the
//! sections each frame and writes their offsets back into the app so
//! navigation can jump to them.

use super::App;

/// The three page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Contact,
}

/// Sections in the order they appear on the page and in the nav.
pub const SECTIONS: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

impl Section {
    /// Nav label.
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Projects => 1,
            Section::Contact => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        SECTIONS.get(index).copied()
    }
}

impl App {
    /// Scroll by a number of rows, positive meaning down.
    pub fn scroll_by(&mut self, lines: i16) {
        self.scroll_target = (self.scroll_target + lines as f32).clamp(0.0, self.max_scroll);
        self.update_active_from_scroll();
        self.mark_dirty();
    }

    /// Scroll by most of a viewport, keeping a little overlap.
    pub fn scroll_page(&mut self, direction: i16) {
        let step = self.layout.content_height().saturating_sub(2).max(1) as i16;
        self.scroll_by(direction.signum() * step);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_target = 0.0;
        self.active_section = Section::About;
        self.mark_dirty();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_target = self.max_scroll;
        self.update_active_from_scroll();
        self.mark_dirty();
    }

    /// Keep the nav marker on the section being looked at.
    ///
    /// The probe row sits a third of the way down the viewport, so a
    /// section turns active a little before its heading reaches the
    /// top. Nav jumps skip this and mark their target directly.
    fn update_active_from_scroll(&mut self) {
        let probe = self.scroll_target + self.layout.content_height() as f32 / 3.0;
        let mut active = Section::About;
        for section in SECTIONS {
            if self.section_offsets[section.index()] <= probe {
                active = section;
            }
        }
        self.active_section = active;
    }

    /// Jump to a section and mark it active in the nav.
    ///
    /// The active marker follows the request immediately, like the nav
    /// in a browser page, rather than waiting for the scroll animation
    /// to arrive.
    pub fn scroll_to_section(&mut self, section: Section) {
        self.scroll_target = self.section_offsets[section.index()].min(self.max_scroll);
        self.active_section = section;
        self.mark_dirty();
    }
}

// ============================================================================
// Tests
// ============================================================================
