//! Rising-edge detection for the trailing "load more" rows.
//!
//! Each expanded listing with a further page ends in a sentinel row. The
//! terminal reports which sentinels fall inside the viewport after every
//! layout change; only a sentinel that was hidden in the previous
//! observation and is visible now triggers a fetch.

use std::collections::HashSet;

use crate::github::identity::UserLogin;

/// Remembers which sentinels were visible in the last observation.
#[derive(Debug, Clone, Default)]
pub struct SentinelTracker {
    visible: HashSet<UserLogin>,
}

impl SentinelTracker {
    /// Records the sentinels visible now and returns the owners whose
    /// sentinel just became visible, in the order they were reported.
    pub fn observe<I>(&mut self, visible: I) -> Vec<UserLogin>
    where
        I: IntoIterator<Item = UserLogin>,
    {
        let mut current = HashSet::new();
        let mut rising = Vec::new();
        for owner in visible {
            if !self.visible.contains(&owner) && !current.contains(&owner) {
                rising.push(owner.clone());
            }
            current.insert(owner);
        }
        self.visible = current;
        rising
    }

    /// Forgets the sentinel of `owner`, so its next sighting counts as new.
    pub fn forget(&mut self, owner: &UserLogin) {
        self.visible.remove(owner);
    }

    /// Forgets every sentinel.
    pub fn clear(&mut self) {
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn login(raw: &str) -> UserLogin {
        UserLogin::new(raw).expect("login should be valid")
    }

    #[rstest]
    fn only_newly_visible_sentinels_are_reported() {
        let mut tracker = SentinelTracker::default();

        let first = tracker.observe([login("octocat")]);
        let repeated = tracker.observe([login("octocat"), login("hubot")]);

        assert_eq!(first, [login("octocat")]);
        assert_eq!(repeated, [login("hubot")]);
    }

    #[rstest]
    fn sentinel_that_leaves_and_returns_fires_again() {
        let mut tracker = SentinelTracker::default();
        tracker.observe([login("octocat")]);

        assert!(tracker.observe([]).is_empty());
        assert_eq!(tracker.observe([login("octocat")]), [login("octocat")]);
    }

    #[rstest]
    fn forgotten_sentinel_fires_on_next_sighting() {
        let mut tracker = SentinelTracker::default();
        tracker.observe([login("octocat")]);

        tracker.forget(&login("octocat"));

        assert_eq!(tracker.observe([login("octocat")]), [login("octocat")]);
    }

    #[rstest]
    fn duplicate_reports_fire_once() {
        let mut tracker = SentinelTracker::default();

        let rising = tracker.observe([login("octocat"), login("octocat")]);

        assert_eq!(rising, [login("octocat")]);
    }
}
