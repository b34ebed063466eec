//! Validation middleware configuration
//!
//! Plain data, so it can be deserialized from a configuration file. The
//! custom error callback is not part of it and is installed on the
//! middleware directly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Action types skipped by default
///
/// These are dispatched by saga monitors and never declared in application schemas.
pub const DEFAULT_IGNORED_ACTIONS: [&str; 5] = [
    "EFFECT_TRIGGERED",
    "EFFECT_RESOLVED",
    "EFFECT_REJECTED",
    "EFFECT_CANCELLED",
    "ACTION_DISPATCHED",
];

/// What the middleware does with a violation when no custom callback is set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnErrorPolicy {
    /// Abort the dispatch with [`crate::DispatchError::Rejected`]
    #[default]
    Fail,

    /// Log the violation at warn level and carry on
    Warn,

    /// Carry on silently
    Drop,
}

/// Configuration for [`crate::ValidatingMiddleware`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Skip all payload checks; action types are still checked
    pub ignore_payloads: bool,

    /// Action types passed through without any check
    ///
    /// Replaces [`DEFAULT_IGNORED_ACTIONS`] when set.
    pub ignore_actions: BTreeSet<String>,

    /// Forward rejected actions when the error handler returns normally
    pub forward_rejected: bool,

    /// Built-in error handling
    pub on_error: OnErrorPolicy,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            ignore_payloads: false,
            ignore_actions: DEFAULT_IGNORED_ACTIONS
                .iter()
                .map(|kind| kind.to_string())
                .collect(),
            forward_rejected: false,
            on_error: OnErrorPolicy::default(),
        }
    }
}

impl ValidationConfig {
    pub fn with_ignore_payloads(mut self, ignore_payloads: bool) -> Self {
        self.ignore_payloads = ignore_payloads;
        self
    }

    /// Replace the ignore list
    pub fn with_ignore_actions<I, N>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.ignore_actions = kinds.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_forward_rejected(mut self, forward_rejected: bool) -> Self {
        self.forward_rejected = forward_rejected;
        self
    }

    pub fn with_on_error(mut self, on_error: OnErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn is_ignored(&self, kind: &str) -> bool {
        self.ignore_actions.contains(kind)
    }
}
