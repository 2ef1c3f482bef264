//! Entrance transitions driven by the tick counter.
//!
//! Page sections fade in the first time they scroll into view and
//! dialogs fade in when opened. A transition is purely cosmetic: the
//! content underneath is fully rendered and interactive from the first
//! frame, the transition only dims it and nudges it down for a few
//! ticks. Nothing waits for a transition to finish.

/// Ticks a section entrance takes at the 16ms tick rate (about 300ms).
pub const ENTRANCE_TICKS: u64 = 18;

/// Ticks a dialog entrance takes (about 150ms).
pub const DIALOG_ENTRANCE_TICKS: u64 = 9;

/// Visual treatment during the entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Dim and rise from slightly below the final position.
    Rise,
    /// Dim only.
    Fade,
}

/// Entrance state of one animated element.
///
/// The first call to [`enter`](Transition::enter) stamps the current
/// tick; the element animates over the following [`ENTRANCE_TICKS`] and
/// then stays settled forever. Re-entering the viewport later does not
/// replay the entrance.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    kind: TransitionKind,
    entered_at: Option<u64>,
}

impl Transition {
    /// A transition that has not started yet.
    pub const fn new(kind: TransitionKind) -> Self {
        Self {
            kind,
            entered_at: None,
        }
    }

    /// Stamp the entrance tick. Only the first call has any effect.
    pub fn enter(&mut self, tick: u64) {
        if self.entered_at.is_none() {
            self.entered_at = Some(tick);
        }
    }

    /// True once the element has been on screen at least one frame.
    pub fn has_entered(&self) -> bool {
        self.entered_at.is_some()
    }

    /// Entrance progress in `0.0..=1.0`.
    pub fn progress(&self, tick: u64) -> f32 {
        match self.entered_at {
            Some(start) => {
                let elapsed = tick.saturating_sub(start);
                (elapsed as f32 / ENTRANCE_TICKS as f32).min(1.0)
            }
            None => 0.0,
        }
    }

    /// True while the entrance is mid-flight and needs redraws.
    pub fn is_running(&self, tick: u64) -> bool {
        self.has_entered() && self.progress(tick) < 1.0
    }

    /// Rows to shift the content down while rising.
    pub fn offset_rows(&self, tick: u64) -> u16 {
        if self.kind != TransitionKind::Rise {
            return 0;
        }
        let remaining = 1.0 - self.progress(tick);
        (remaining * 2.0).round() as u16
    }

    /// True while the content should render dimmed.
    pub fn is_dim(&self, tick: u64) -> bool {
        self.progress(tick) < 0.7
    }
}

/// Entrance progress of a dialog opened at `opened_at`.
pub fn dialog_entrance_progress(opened_at: u64, tick: u64) -> f32 {
    let elapsed = tick.saturating_sub(opened_at);
    (elapsed as f32 / DIALOG_ENTRANCE_TICKS as f32).min(1.0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_stamps_only_once() {
        let mut t = Transition::new(TransitionKind::Rise);
        assert!(!t.has_entered());
        t.enter(100);
        t.enter(500);
        // Progress is measured from the first stamp
        assert_eq!(t.progress(100), 0.0);
        assert!(t.progress(109) < 1.0);
        assert_eq!(t.progress(100 + ENTRANCE_TICKS), 1.0);
    }

    #[test]
    fn test_progress_before_enter_is_zero() {
        let t = Transition::new(TransitionKind::Fade);
        assert_eq!(t.progress(1_000), 0.0);
        assert!(!t.is_running(1_000));
    }

    #[test]
    fn test_progress_clamps_at_one() {
        let mut t = Transition::new(TransitionKind::Fade);
        t.enter(10);
        assert_eq!(t.progress(10 + ENTRANCE_TICKS * 4), 1.0);
        assert!(!t.is_running(10 + ENTRANCE_TICKS * 4));
    }

    #[test]
    fn test_is_running_during_flight() {
        let mut t = Transition::new(TransitionKind::Rise);
        t.enter(0);
        assert!(t.is_running(1));
        assert!(t.is_running(ENTRANCE_TICKS - 1));
        assert!(!t.is_running(ENTRANCE_TICKS));
    }

    #[test]
    fn test_rise_offset_shrinks_to_zero() {
        let mut t = Transition::new(TransitionKind::Rise);
        t.enter(0);
        assert_eq!(t.offset_rows(0), 2);
        assert_eq!(t.offset_rows(ENTRANCE_TICKS), 0);
        // Monotonically non-increasing across the flight
        let mut last = u16::MAX;
        for tick in 0..=ENTRANCE_TICKS {
            let offset = t.offset_rows(tick);
            assert!(offset <= last);
            last = offset;
        }
    }

    #[test]
    fn test_fade_never_offsets() {
        let mut t = Transition::new(TransitionKind::Fade);
        t.enter(0);
        assert_eq!(t.offset_rows(0), 0);
        assert_eq!(t.offset_rows(3), 0);
    }

    #[test]
    fn test_dim_clears_late_in_flight() {
        let mut t = Transition::new(TransitionKind::Rise);
        t.enter(0);
        assert!(t.is_dim(0));
        assert!(!t.is_dim(ENTRANCE_TICKS));
    }

    #[test]
    fn test_dialog_entrance_progress() {
        assert_eq!(dialog_entrance_progress(50, 50), 0.0);
        assert!(dialog_entrance_progress(50, 53) < 1.0);
        assert_eq!(dialog_entrance_progress(50, 50 + DIALOG_ENTRANCE_TICKS), 1.0);
        assert_eq!(dialog_entrance_progress(50, 5_000), 1.0);
    }
}
