//! Schema validation
//!
//! The [`Validator`] decides whether a dispatched value satisfies the schema.
//! It has no side effects; turning a [`Violation`] into an error, a log line or
//! nothing at all is the middleware's job.

use crate::action::{Action, Dispatchable};
use crate::config::ValidationConfig;
use crate::error::Violation;
use crate::schema::Schema;
use crate::types::TypeTag;
use std::collections::BTreeSet;

/// Why a value was let through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Declared in the schema and all applicable checks passed
    Valid,
    /// The action type is on the ignore list
    Ignored,
    /// Not an action (thunk, or a value without a string `type`)
    Skipped,
}

/// Checks actions against a schema
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Schema,
    ignore_payloads: bool,
    ignore_actions: BTreeSet<String>,
}

impl Validator {
    pub fn new(schema: Schema, config: &ValidationConfig) -> Self {
        Self {
            schema,
            ignore_payloads: config.ignore_payloads,
            ignore_actions: config.ignore_actions.clone(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate any dispatched value; non-actions are skipped
    pub fn check<S>(&self, value: &Dispatchable<S>) -> Result<Verdict, Violation> {
        match value.as_action() {
            Some(action) => self.validate(&action),
            None => Ok(Verdict::Skipped),
        }
    }

    /// Validate an action
    ///
    /// Checks run in order and the first failure wins: ignore list, type
    /// recognition, then payload presence and shape. `meta` is never inspected.
    pub fn validate(&self, action: &Action) -> Result<Verdict, Violation> {
        let kind = action.kind();

        if self.ignore_actions.contains(kind) {
            return Ok(Verdict::Ignored);
        }

        let Some(expected) = self.schema.payload_type(kind) else {
            return Err(Violation::UnrecognizedActionType {
                action_type: kind.to_string(),
            });
        };

        if self.ignore_payloads {
            return Ok(Verdict::Valid);
        }

        check_payload(kind, expected, action.payload.as_ref())?;
        Ok(Verdict::Valid)
    }
}

fn check_payload(
    kind: &str,
    expected: Option<TypeTag>,
    payload: Option<&serde_json::Value>,
) -> Result<(), Violation> {
    match (expected, payload) {
        (None, None) => Ok(()),
        (None, Some(_)) => Err(Violation::UnexpectedPayload {
            action_type: kind.to_string(),
        }),
        (Some(expected), None) => Err(Violation::MissingPayload {
            action_type: kind.to_string(),
            expected,
        }),
        (Some(expected), Some(value)) if !expected.check(value) => {
            Err(Violation::PayloadTypeMismatch {
                action_type: kind.to_string(),
                expected,
                found: TypeTag::of(value),
            })
        }
        (Some(_), Some(_)) => Ok(()),
    }
}
