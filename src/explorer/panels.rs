//! Expansion state of the per-user panels.

use std::collections::HashSet;

use crate::github::identity::UserLogin;

/// Tracks which user panels are expanded.
///
/// Every panel starts collapsed and toggles independently of its siblings.
#[derive(Debug, Clone, Default)]
pub struct PanelSet {
    expanded: HashSet<UserLogin>,
}

impl PanelSet {
    /// Flips the panel for `login` and returns true when it is now expanded.
    pub fn toggle(&mut self, login: &UserLogin) -> bool {
        if self.expanded.remove(login) {
            false
        } else {
            self.expanded.insert(login.clone());
            true
        }
    }

    /// Returns true when the panel for `login` is expanded.
    #[must_use]
    pub fn is_expanded(&self, login: &UserLogin) -> bool {
        self.expanded.contains(login)
    }

    /// Collapses every panel.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}
