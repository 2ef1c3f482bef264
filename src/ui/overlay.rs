//! Overlay layer for detached rendering.
//!
//! Dialogs do not paint into the page flow. While the page renders, an
//! open dialog queues a [`DialogRequest`] here; after the page and
//! chrome passes finish, the frame renderer drains the queue and draws
//! each request on top of everything, in queue order. That gives dialog
//! content a stacking position independent of where its trigger sits in
//! the page and keeps it out of the scrolled coordinate space.
//!
//! The layer is handed to render code as an optional capability. Render
//! contexts built without one (nested overlay passes, stripped-down
//! tests) make any dialog render attempt fail with an environment error
//! rather than silently drawing inline.

use crate::ui::components::dialog::DialogContentConfig;

/// A dialog waiting to be drawn in the overlay pass.
#[derive(Debug, Clone)]
pub struct DialogRequest {
    /// Fully resolved content description.
    pub content: DialogContentConfig,
    /// Tick at which the dialog opened, for the entrance transition.
    pub opened_at: u64,
}

/// Queue of dialogs to draw after the page passes.
#[derive(Debug, Default)]
pub struct OverlayLayer {
    requests: Vec<DialogRequest>,
}

impl OverlayLayer {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any requests left from the previous frame.
    ///
    /// Call this at the start of each render cycle.
    pub fn begin_frame(&mut self) {
        self.requests.clear();
    }

    /// Queue a dialog for the overlay pass.
    pub fn push(&mut self, request: DialogRequest) {
        self.requests.push(request);
    }

    /// Drain the queued requests in the order they were pushed.
    pub fn take_requests(&mut self) -> Vec<DialogRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Number of queued requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
