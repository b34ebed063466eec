//! Error types
//!
//! Three layers of failure are kept apart:
//! - [`SchemaError`]: configuration mistakes, reported when a schema is built
//! - [`Violation`]: a dispatched action does not match the schema
//! - [`DispatchError`]: a dispatch was aborted

use crate::action::Action;
use crate::types::TypeTag;
use thiserror::Error;

/// Errors raised while building a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The same action name was declared twice
    #[error("duplicate action type in schema: {0}")]
    DuplicateAction(String),

    /// An entry was declared with an empty name
    #[error("action type must not be empty")]
    EmptyActionName,

    /// A type tag name did not match any known tag
    #[error("unknown type tag: {0}")]
    UnknownTypeTag(String),
}

/// A dispatched action that does not satisfy the schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The action type is neither declared nor ignored
    #[error("unrecognized action type: {action_type}")]
    UnrecognizedActionType { action_type: String },

    /// The action type takes no payload but one was supplied
    #[error("action {action_type} does not take a payload")]
    UnexpectedPayload { action_type: String },

    /// The action type requires a payload but none was supplied
    #[error("action {action_type} requires a {expected} payload")]
    MissingPayload {
        action_type: String,
        expected: TypeTag,
    },

    /// The payload does not satisfy the declared type tag
    #[error("action {action_type} expects a {expected} payload, found {found}")]
    PayloadTypeMismatch {
        action_type: String,
        expected: TypeTag,
        found: TypeTag,
    },
}

impl Violation {
    /// Stable reason code handed to error callbacks
    pub fn reason(&self) -> &'static str {
        match self {
            Violation::UnrecognizedActionType { .. } => "unrecognized action type",
            Violation::UnexpectedPayload { .. } => "unexpected payload",
            Violation::MissingPayload { .. } => "missing payload",
            Violation::PayloadTypeMismatch { .. } => "payload type mismatch",
        }
    }

    /// The offending action type
    pub fn action_type(&self) -> &str {
        match self {
            Violation::UnrecognizedActionType { action_type }
            | Violation::UnexpectedPayload { action_type }
            | Violation::MissingPayload { action_type, .. }
            | Violation::PayloadTypeMismatch { action_type, .. } => action_type,
        }
    }
}

/// Errors that abort a dispatch
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// Validation failed and the error handler chose to abort
    #[error("action {} rejected: {violation}", .action.kind)]
    Rejected { action: Action, violation: Violation },

    /// A value that is not an action reached the reducer
    #[error("dispatched value is not an action: {0}")]
    NotAnAction(String),

    /// A middleware aborted the dispatch for its own reasons
    #[error("middleware error: {0}")]
    Middleware(String),
}

impl DispatchError {
    /// The violation behind a rejection, if any
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            DispatchError::Rejected { violation, .. } => Some(violation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes() {
        let unrecognized = Violation::UnrecognizedActionType {
            action_type: "quux".to_string(),
        };
        assert_eq!(unrecognized.reason(), "unrecognized action type");
        assert_eq!(unrecognized.action_type(), "quux");

        let mismatch = Violation::PayloadTypeMismatch {
            action_type: "bar".to_string(),
            expected: TypeTag::String,
            found: TypeTag::Object,
        };
        assert_eq!(mismatch.reason(), "payload type mismatch");
        assert_eq!(
            mismatch.to_string(),
            "action bar expects a String payload, found Object"
        );
    }

    #[test]
    fn test_rejected_display() {
        let err = DispatchError::Rejected {
            action: Action::new("foo").with_payload("arg"),
            violation: Violation::UnexpectedPayload {
                action_type: "foo".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "action foo rejected: action foo does not take a payload"
        );
        assert!(err.violation().is_some());
    }
}
