//! Keyboard focus registry.
//!
//! Interactive elements register a [`FocusId`] while rendering, in the
//! order they appear on the page. Tab order is registration order. Each
//! entry carries the same [`ClickAction`] its hit area would trigger, so
//! pressing Enter on a focused element and clicking it are one code path.
//!
//! Focus lives in one of two scopes. While a dialog is open the registry
//! switches to [`FocusScope::Overlay`] and cycling only visits entries
//! registered by the dialog content; the page's entries are unreachable
//! until the dialog closes and the previously focused element is
//! restored. This is what keeps focus inside an open dialog.

use crate::ui::interaction::ClickAction;

/// Identity of a focusable element, stable across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(pub &'static str);

/// Which layer an element was registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusScope {
    /// Normal page content
    #[default]
    Page,
    /// Content of an open dialog
    Overlay,
}

/// One focusable element registered this frame.
#[derive(Debug, Clone)]
struct FocusEntry {
    id: FocusId,
    scope: FocusScope,
    action: Option<ClickAction>,
}

/// Registry of focusable elements and the current focus target.
///
/// Entries are re-registered every frame; the focused id and active
/// scope persist across frames.
#[derive(Debug, Default)]
pub struct FocusRegistry {
    entries: Vec<FocusEntry>,
    focused: Option<FocusId>,
    scope: FocusScope,
}

impl FocusRegistry {
    /// Create an empty registry with page scope active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's entries. Focus target and scope persist.
    ///
    /// Call this at the start of each render cycle.
    pub fn begin_frame(&mut self) {
        self.entries.clear();
    }

    /// Register a focusable element in tab order.
    ///
    /// `action` is what Enter triggers while the element is focused;
    /// form fields register `None` and handle keys through the typing
    /// context instead.
    pub fn register(&mut self, id: FocusId, scope: FocusScope, action: Option<ClickAction>) {
        self.entries.push(FocusEntry { id, scope, action });
    }

    /// The currently focused element, if any.
    pub fn focused(&self) -> Option<FocusId> {
        self.focused
    }

    /// True if the given element currently holds focus.
    pub fn is_focused(&self, id: FocusId) -> bool {
        self.focused == Some(id)
    }

    /// Set or clear the focus target directly (mouse click on a field).
    pub fn set_focused(&mut self, id: Option<FocusId>) {
        self.focused = id;
    }

    /// The scope focus cycling is currently confined to.
    pub fn scope(&self) -> FocusScope {
        self.scope
    }

    /// The Enter action of the focused element, if it has one.
    ///
    /// Entries outside the active scope never activate, even if a stale
    /// focus id still points at one.
    pub fn activate_action(&self) -> Option<ClickAction> {
        let focused = self.focused?;
        self.entries
            .iter()
            .find(|e| e.id == focused && e.scope == self.scope)
            .and_then(|e| e.action.clone())
    }

    /// Move focus to the next element in the active scope, wrapping.
    ///
    /// Returns true if the focus target changed.
    pub fn focus_next(&mut self) -> bool {
        self.cycle(1)
    }

    /// Move focus to the previous element in the active scope, wrapping.
    pub fn focus_prev(&mut self) -> bool {
        self.cycle(-1)
    }

    fn cycle(&mut self, step: i32) -> bool {
        let scoped: Vec<FocusId> = self
            .entries
            .iter()
            .filter(|e| e.scope == self.scope)
            .map(|e| e.id)
            .collect();
        if scoped.is_empty() {
            let changed = self.focused.is_some();
            self.focused = None;
            return changed;
        }

        let len = scoped.len() as i32;
        let next = match self.focused.and_then(|f| scoped.iter().position(|id| *id == f)) {
            Some(pos) => (pos as i32 + step).rem_euclid(len) as usize,
            // Nothing focused yet: Tab lands on the first element,
            // Shift+Tab on the last
            None => {
                if step > 0 {
                    0
                } else {
                    scoped.len() - 1
                }
            }
        };

        let changed = self.focused != Some(scoped[next]);
        self.focused = Some(scoped[next]);
        changed
    }

    /// Switch to overlay scope for an opening dialog.
    ///
    /// Returns the page element that held focus so the caller can stash
    /// it for restoration. Focus starts empty inside the overlay; the
    /// first Tab lands on the dialog's first focusable.
    pub fn enter_overlay(&mut self) -> Option<FocusId> {
        let prior = self.focused.take();
        self.scope = FocusScope::Overlay;
        prior
    }

    /// Return to page scope after a dialog closed, restoring focus.
    pub fn leave_overlay(&mut self, restore: Option<FocusId>) {
        self.scope = FocusScope::Page;
        self.focused = restore;
    }
}

// ============================================================================
// Tests
// ============================================================================
