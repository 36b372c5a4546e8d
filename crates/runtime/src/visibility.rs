//! Login-driven visibility of the delivery window.

/// Tracks login transitions and decides when the window opens or closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityTracker {
    was_loaded: bool,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Some(open)` when the login state changed since the last call.
    ///
    /// On login the window opens when `auto_show` is set and deliveries
    /// remain this week. On logout it closes.
    pub fn observe(
        &mut self,
        player_loaded: bool,
        remaining_allowance: u32,
        auto_show: bool,
    ) -> Option<bool> {
        if player_loaded == self.was_loaded {
            return None;
        }
        self.was_loaded = player_loaded;
        Some(player_loaded && auto_show && remaining_allowance > 0)
    }

    pub fn is_loaded(&self) -> bool {
        self.was_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_login_with_allowance() {
        let mut tracker = VisibilityTracker::new();
        assert_eq!(tracker.observe(false, 12, true), None);
        assert_eq!(tracker.observe(true, 12, true), Some(true));
        assert_eq!(tracker.observe(true, 12, true), None);
        assert_eq!(tracker.observe(false, 12, true), Some(false));
    }

    #[test]
    fn stays_closed_without_allowance_or_auto_show() {
        let mut tracker = VisibilityTracker::new();
        assert_eq!(tracker.observe(true, 0, true), Some(false));

        let mut tracker = VisibilityTracker::new();
        assert_eq!(tracker.observe(true, 5, false), Some(false));
        assert!(tracker.is_loaded());
    }
}
