//! Hit area system for mouse interactions.
//!
//! This module provides a registry-based approach to handling clickable
//! regions in the TUI. Components register hit areas during rendering,
//! and the event loop queries the registry to determine what action to
//! take on mouse events.
//!
//! Page sections render into a virtual column that is taller than the
//! viewport, so their hit areas are registered in page coordinates and
//! projected into screen coordinates with [`HitAreaRegistry::translate_y`]
//! once the scroll offset for the frame is known. Chrome and overlay
//! areas are registered afterwards in screen coordinates directly.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::app::Section;
use crate::ui::focus::FocusId;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Scroll smoothly to a page section and mark it active
    NavigateTo(Section),
    /// Open an external link in the default browser
    OpenUrl(String),
    /// Open the dialog with the given id
    OpenDialog(&'static str),
    /// Dismiss the dialog with the given id
    CloseDialog(&'static str),
    /// Click landed inside open dialog content; consumed without effect
    DialogSurface,
    /// Give keyboard focus to a form field
    FocusField(FocusId),
    /// Submit the contact form
    SubmitForm,
    /// Copy the contact email address to the clipboard
    CopyEmail,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    /// Create a new hit area with the given rect and action.
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of
/// each render cycle. The registry supports hit testing (finding which
/// area was clicked) and hover tracking for visual feedback.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
    /// Index of the currently hovered area (if any)
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            areas: Vec::new(),
            hovered: None,
        }
    }

    /// Clear all registered areas and reset hover state.
    ///
    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority over earlier ones for
    /// overlapping regions (z-order: later = on top).
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Project page-coordinate areas into screen coordinates.
    ///
    /// Shifts every area registered so far by `dy` rows and clips it to
    /// `viewport`. Areas scrolled fully out of view are dropped. Must run
    /// before chrome and overlay areas are registered, since those are
    /// already in screen coordinates.
    pub fn translate_y(&mut self, dy: i32, viewport: Rect) {
        let view_top = viewport.y as i32;
        let view_bottom = view_top + viewport.height as i32;

        self.areas.retain_mut(|area| {
            let top = (area.rect.y as i32 + dy).max(view_top);
            let bottom = (area.rect.y as i32 + dy + area.rect.height as i32).min(view_bottom);
            if bottom <= top {
                return false;
            }
            area.rect.y = top as u16;
            area.rect.height = (bottom - top) as u16;
            true
        });
        self.hovered = None;
    }

    /// Perform a hit test at the given position.
    ///
    /// Returns the action for the topmost hit area containing the point,
    /// or None if no area was hit. Areas are checked in reverse order
    /// (last registered = highest priority).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        for area in self.areas.iter().rev() {
            if area.contains(x, y) {
                return Some(area.action.clone());
            }
        }
        None
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hover state changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let new_hovered = self.find_hovered_index(x, y);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// Find the index of the topmost area containing the given point.
    fn find_hovered_index(&self, x: u16, y: u16) -> Option<usize> {
        for (i, area) in self.areas.iter().enumerate().rev() {
            if area.contains(x, y) {
                return Some(i);
            }
        }
        None
    }

    /// Get the hover style for a rect if it matches the currently hovered area.
    ///
    /// This allows render code to apply hover styling to elements without
    /// needing to track hover state themselves.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let hovered_idx = self.hovered?;
        let hovered_area = self.areas.get(hovered_idx)?;
        if hovered_area.rect == rect {
            hovered_area.hover_style
        } else {
            None
        }
    }

    /// Check if any area is currently hovered.
    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    /// Get the currently hovered area (if any).
    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|idx| self.areas.get(idx))
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Iterate over the registered areas in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &HitArea> {
        self.areas.iter()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), ClickAction::SubmitForm);

        // Inside the area
        assert!(area.contains(10, 10)); // Top-left corner
        assert!(area.contains(29, 10)); // Top-right edge (x + width - 1)
        assert!(area.contains(29, 19)); // Bottom-right corner
        assert!(area.contains(20, 15)); // Center

        // Outside the area
        assert!(!area.contains(9, 10)); // Left of area
        assert!(!area.contains(30, 10)); // Right of area (exclusive)
        assert!(!area.contains(10, 20)); // Below area (exclusive)
    }

    #[test]
    fn test_hit_area_zero_size() {
        let area = HitArea::new(make_rect(5, 5, 0, 0), ClickAction::CopyEmail);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_registry_clear() {
        let mut registry = HitAreaRegistry::new();

        registry.register(
            make_rect(0, 0, 10, 10),
            ClickAction::NavigateTo(Section::About),
            None,
        );
        registry.register(make_rect(10, 0, 10, 10), ClickAction::SubmitForm, None);
        assert_eq!(registry.len(), 2);

        registry.update_hover(5, 5);
        assert!(registry.is_hovering());

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.is_hovering());
    }

    #[test]
    fn test_hit_test_basic() {
        let mut registry = HitAreaRegistry::new();

        registry.register(
            make_rect(0, 0, 10, 10),
            ClickAction::NavigateTo(Section::About),
            None,
        );
        registry.register(
            make_rect(20, 0, 10, 10),
            ClickAction::NavigateTo(Section::Projects),
            None,
        );

        assert_eq!(
            registry.hit_test(5, 5),
            Some(ClickAction::NavigateTo(Section::About))
        );
        assert_eq!(
            registry.hit_test(25, 5),
            Some(ClickAction::NavigateTo(Section::Projects))
        );

        // Miss all areas
        assert_eq!(registry.hit_test(15, 5), None);
    }

    #[test]
    fn test_hit_test_overlapping_areas_last_wins() {
        let mut registry = HitAreaRegistry::new();

        // Later registrations sit on top, the way a dialog surface sits
        // on top of the backdrop that dismisses it
        registry.register(
            make_rect(0, 0, 40, 20),
            ClickAction::CloseDialog("contact"),
            None,
        );
        registry.register(make_rect(10, 5, 20, 10), ClickAction::DialogSurface, None);

        assert_eq!(registry.hit_test(20, 10), Some(ClickAction::DialogSurface));
        assert_eq!(
            registry.hit_test(2, 2),
            Some(ClickAction::CloseDialog("contact"))
        );
    }

    #[test]
    fn test_update_hover_returns_changed() {
        let mut registry = HitAreaRegistry::new();

        registry.register(make_rect(0, 0, 10, 10), ClickAction::SubmitForm, None);
        registry.register(make_rect(20, 0, 10, 10), ClickAction::CopyEmail, None);

        // Initial hover - changed from None
        assert!(registry.update_hover(5, 5));
        // Same area - no change
        assert!(!registry.update_hover(8, 8));
        // Different area - changed
        assert!(registry.update_hover(25, 5));
        // Off all areas - changed
        assert!(registry.update_hover(100, 100));
        // Still off - no change
        assert!(!registry.update_hover(200, 100));
    }

    #[test]
    fn test_get_hover_style() {
        let mut registry = HitAreaRegistry::new();

        let hover_style = Style::default().fg(Color::Yellow);
        let rect1 = make_rect(0, 0, 10, 10);
        let rect2 = make_rect(20, 0, 10, 10);

        registry.register(rect1, ClickAction::SubmitForm, Some(hover_style));
        registry.register(rect2, ClickAction::CopyEmail, None);

        assert_eq!(registry.get_hover_style(rect1), None);

        registry.update_hover(5, 5);
        assert_eq!(registry.get_hover_style(rect1), Some(hover_style));
        assert_eq!(registry.get_hover_style(rect2), None);

        registry.update_hover(25, 5);
        assert_eq!(registry.get_hover_style(rect1), None);
        assert_eq!(registry.get_hover_style(rect2), None); // Has no hover style
    }

    #[test]
    fn test_translate_y_shifts_into_viewport() {
        let mut registry = HitAreaRegistry::new();
        let viewport = make_rect(0, 2, 80, 20);

        // Section button at page row 30, scroll offset 25 puts it at
        // screen row 2 + (30 - 25) = 7
        registry.register(make_rect(4, 30, 12, 1), ClickAction::SubmitForm, None);
        registry.translate_y(2 - 25, viewport);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.hit_test(5, 7), Some(ClickAction::SubmitForm));
        assert_eq!(registry.hit_test(5, 30), None);
    }

    #[test]
    fn test_translate_y_drops_offscreen_areas() {
        let mut registry = HitAreaRegistry::new();
        let viewport = make_rect(0, 2, 80, 10);

        // One area above the viewport after scrolling, one below
        registry.register(make_rect(0, 0, 10, 1), ClickAction::CopyEmail, None);
        registry.register(make_rect(0, 60, 10, 1), ClickAction::SubmitForm, None);
        registry.translate_y(2 - 20, viewport);

        assert!(registry.is_empty());
    }

    #[test]
    fn test_translate_y_clips_partial_areas() {
        let mut registry = HitAreaRegistry::new();
        let viewport = make_rect(0, 2, 80, 10);

        // A 4-row card straddling the top edge of the viewport: page rows
        // 18..22 with scroll 20 puts rows 18 and 19 off screen
        registry.register(make_rect(0, 18, 10, 4), ClickAction::DialogSurface, None);
        registry.translate_y(2 - 20, viewport);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.hit_test(5, 2), Some(ClickAction::DialogSurface));
        assert_eq!(registry.hit_test(5, 3), Some(ClickAction::DialogSurface));
        assert_eq!(registry.hit_test(5, 1), None);
        assert_eq!(registry.hit_test(5, 4), None);
    }

    #[test]
    fn test_translate_y_leaves_later_registrations_untouched() {
        let mut registry = HitAreaRegistry::new();
        let viewport = make_rect(0, 2, 80, 20);

        registry.register(make_rect(0, 10, 10, 1), ClickAction::SubmitForm, None);
        registry.translate_y(-5, viewport);

        // Chrome registered after projection stays in screen coordinates
        registry.register(
            make_rect(0, 0, 10, 1),
            ClickAction::NavigateTo(Section::Contact),
            None,
        );
        assert_eq!(
            registry.hit_test(5, 0),
            Some(ClickAction::NavigateTo(Section::Contact))
        );
        assert_eq!(registry.hit_test(5, 5), Some(ClickAction::SubmitForm));
    }
}
