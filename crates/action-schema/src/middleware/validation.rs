//! Schema-validating middleware
//!
//! Wraps a [`Validator`] and maps its violations to a side effect through an
//! error handler. Values that are not actions (thunks, arbitrary JSON) pass
//! through untouched, so the middleware can sit anywhere in the chain.

use crate::action::{Action, Dispatchable};
use crate::config::{OnErrorPolicy, ValidationConfig};
use crate::dispatcher::Dispatcher;
use crate::error::{DispatchError, Violation};
use crate::middleware::Middleware;
use crate::schema::Schema;
use crate::validator::{Validator, Verdict};
use std::fmt;

/// Callback receiving every violation
///
/// Returning `Err` aborts the dispatch with that error.
pub type ErrorHandler = Box<dyn Fn(&Action, &Violation) -> Result<(), DispatchError> + Send + Sync>;

/// ValidatingMiddleware - checks every dispatched action against a schema
pub struct ValidatingMiddleware {
    validator: Validator,
    forward_rejected: bool,
    on_error: ErrorHandler,
}

impl ValidatingMiddleware {
    pub fn new(schema: Schema, config: ValidationConfig) -> Self {
        Self {
            validator: Validator::new(schema, &config),
            forward_rejected: config.forward_rejected,
            on_error: policy_handler(config.on_error),
        }
    }

    /// Replace the built-in error policy with a custom callback
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Action, &Violation) -> Result<(), DispatchError> + Send + Sync + 'static,
    {
        self.on_error = Box::new(handler);
        self
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

impl fmt::Debug for ValidatingMiddleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatingMiddleware")
            .field("validator", &self.validator)
            .field("forward_rejected", &self.forward_rejected)
            .finish_non_exhaustive()
    }
}

fn policy_handler(policy: OnErrorPolicy) -> ErrorHandler {
    match policy {
        OnErrorPolicy::Fail => Box::new(|action: &Action, violation: &Violation| {
            Err(DispatchError::Rejected {
                action: action.clone(),
                violation: violation.clone(),
            })
        }),
        OnErrorPolicy::Warn => Box::new(|_: &Action, violation: &Violation| {
            log::warn!("Invalid action: {}", violation);
            Ok(())
        }),
        OnErrorPolicy::Drop => Box::new(|_: &Action, _: &Violation| Ok(())),
    }
}

impl<S> Middleware<S> for ValidatingMiddleware {
    fn handle(
        &mut self,
        action: &Dispatchable<S>,
        _state: &S,
        _dispatcher: &Dispatcher<S>,
    ) -> Result<bool, DispatchError> {
        match self.validator.check(action) {
            Ok(Verdict::Skipped) => {
                log::trace!("ValidatingMiddleware: skipping {}", action.describe());
                Ok(true)
            }
            Ok(Verdict::Ignored) => {
                log::trace!("ValidatingMiddleware: ignoring {}", action.describe());
                Ok(true)
            }
            Ok(Verdict::Valid) => Ok(true),
            Err(violation) => {
                log::debug!(
                    "ValidatingMiddleware: {} ({})",
                    violation,
                    violation.reason()
                );
                // Only actions produce violations
                if let Some(action) = action.as_action() {
                    (self.on_error)(&*action, &violation)?;
                }
                Ok(self.forward_rejected)
            }
        }
    }
}
