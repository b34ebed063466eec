//! Actions and dispatchable values
//!
//! An [`Action`] is the plain `{ type, payload?, meta? }` message understood by
//! reducers. The store accepts more than actions though: a [`Dispatchable`] can
//! also be a raw JSON value or a thunk, and each middleware decides which of
//! those it cares about.

use crate::dispatcher::Dispatcher;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// A plain action message
///
/// Serializes to and from `{"type": ..., "payload": ..., "meta": ...}`.
/// A present `"payload": null` stays `Some(Value::Null)` so it can be told
/// apart from a missing payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub payload: Option<Value>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub meta: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Action {
    /// Create an action without payload or meta
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
            meta: None,
        }
    }

    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<Value>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    /// The action type
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// Interpret a raw value as an action
    ///
    /// Returns `None` unless the value is an object with a string `type` field.
    /// Fields other than `type`, `payload` and `meta` are dropped.
    pub fn from_value(value: &Value) -> Option<Action> {
        if !value.get("type").is_some_and(Value::is_string) {
            return None;
        }
        Action::deserialize(value).ok()
    }
}

/// A function dispatched in place of an action
///
/// Receives the dispatcher and the current state when a thunk-aware
/// middleware runs it.
pub type Thunk<S> = Box<dyn Fn(&Dispatcher<S>, &S) + Send>;

/// Anything that can be dispatched to the store
pub enum Dispatchable<S> {
    /// A typed action
    Action(Action),
    /// An arbitrary value, which may or may not look like an action
    Value(Value),
    /// A deferred function, handled by [`crate::middleware::thunk::ThunkMiddleware`]
    Thunk(Thunk<S>),
}

impl<S> Dispatchable<S> {
    /// Wrap a closure as a thunk
    pub fn thunk<F>(f: F) -> Self
    where
        F: Fn(&Dispatcher<S>, &S) + Send + 'static,
    {
        Dispatchable::Thunk(Box::new(f))
    }

    /// View this value as an action, if it has the shape of one
    pub fn as_action(&self) -> Option<Cow<'_, Action>> {
        match self {
            Dispatchable::Action(action) => Some(Cow::Borrowed(action)),
            Dispatchable::Value(value) => Action::from_value(value).map(Cow::Owned),
            Dispatchable::Thunk(_) => None,
        }
    }

    pub fn is_thunk(&self) -> bool {
        matches!(self, Dispatchable::Thunk(_))
    }

    /// Short description for logs and errors
    pub fn describe(&self) -> String {
        match self {
            Dispatchable::Action(action) => action.kind.clone(),
            Dispatchable::Value(value) => value.to_string(),
            Dispatchable::Thunk(_) => "<thunk>".to_string(),
        }
    }
}

impl<S> From<Action> for Dispatchable<S> {
    fn from(action: Action) -> Self {
        Dispatchable::Action(action)
    }
}

impl<S> From<Value> for Dispatchable<S> {
    fn from(value: Value) -> Self {
        Dispatchable::Value(value)
    }
}

impl<S> fmt::Debug for Dispatchable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatchable::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Dispatchable::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Dispatchable::Thunk(_) => f.write_str("Thunk(..)"),
        }
    }
}
