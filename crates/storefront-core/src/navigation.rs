//! # Navigation Targets
//!
//! Links offered by the empty state. The core only names them; the
//! host's router performs the actual navigation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Message shown when there is nothing to feature.
pub const EMPTY_STATE_MESSAGE: &str = "No featured products available at the moment.";

/// Where an empty-state link leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    /// The general product catalog.
    Catalog,
    /// Sign up to be notified when new products are featured.
    NotifySignup,
}

impl NavTarget {
    /// All targets, in the order the empty state lists them.
    pub const ALL: [NavTarget; 2] = [NavTarget::Catalog, NavTarget::NotifySignup];

    /// Router path for this target.
    pub const fn path(self) -> &'static str {
        match self {
            NavTarget::Catalog => "/products",
            NavTarget::NotifySignup => "/signup",
        }
    }

    /// Link text.
    pub const fn label(self) -> &'static str {
        match self {
            NavTarget::Catalog => "Browse all products",
            NavTarget::NotifySignup => "Get notified",
        }
    }
}

impl std::fmt::Display for NavTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A "navigate to path" request handed to the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub target: NavTarget,
    pub path: String,
    pub label: String,
}

impl From<NavTarget> for NavLink {
    fn from(target: NavTarget) -> Self {
        NavLink {
            target,
            path: target.path().to_string(),
            label: target.label().to_string(),
        }
    }
}

/// Content rendered in place of the track when there are no items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub message: String,
    pub links: Vec<NavLink>,
}

impl Default for EmptyState {
    fn default() -> Self {
        EmptyState {
            message: EMPTY_STATE_MESSAGE.to_string(),
            links: NavTarget::ALL.into_iter().map(NavLink::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_have_distinct_paths() {
        assert_ne!(NavTarget::Catalog.path(), NavTarget::NotifySignup.path());
        assert_eq!(NavTarget::Catalog.to_string(), "/products");
    }

    #[test]
    fn test_empty_state_lists_both_links() {
        let empty = EmptyState::default();
        assert_eq!(empty.message, EMPTY_STATE_MESSAGE);
        let targets: Vec<NavTarget> = empty.links.iter().map(|l| l.target).collect();
        assert_eq!(targets, vec![NavTarget::Catalog, NavTarget::NotifySignup]);
    }

    #[test]
    fn test_target_wire_names() {
        assert_eq!(
            serde_json::to_string(&NavTarget::NotifySignup).unwrap(),
            "\"notify_signup\""
        );
        let parsed: NavTarget = serde_json::from_str("\"catalog\"").unwrap();
        assert_eq!(parsed, NavTarget::Catalog);
    }
}
