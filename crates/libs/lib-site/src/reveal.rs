//! Once-only entrance reveal for sections marked `reveal`.

use std::collections::HashSet;

/// Class added to a revealed element.
pub const IN_VIEW_CLASS: &str = "in-view";

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection entry. Returns `true` only the first time the
    /// element becomes visible, which is when the class should be added.
    pub fn observe(&mut self, id: &str, intersecting: bool) -> bool {
        if !intersecting || self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_string());
        true
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn clear(&mut self) {
        self.revealed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_once() {
        let mut tracker = RevealTracker::new();

        assert!(!tracker.observe("stats", false));
        assert!(tracker.observe("stats", true));
        assert!(!tracker.observe("stats", false));
        assert!(!tracker.observe("stats", true));
        assert!(tracker.is_revealed("stats"));
        assert!(!tracker.is_revealed("past"));
    }
}
