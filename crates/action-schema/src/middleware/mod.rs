//! Middleware system
//!
//! Middleware sits between dispatch and reducer execution:
//!
//! ```text
//! Dispatchable → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware can inspect the dispatched value and the current state,
//! dispatch follow-up values, block the value from continuing, or abort the
//! whole dispatch with an error.

use crate::action::Dispatchable;
use crate::dispatcher::Dispatcher;
use crate::error::DispatchError;

pub mod logging;
pub mod thunk;
pub mod validation;

/// Middleware trait - intercepts dispatched values before they reach the reducer
pub trait Middleware<S>: Send {
    /// Handle a dispatched value
    ///
    /// - `action`: The value being dispatched
    /// - `state`: Current state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch values that should re-enter the middleware chain
    ///
    /// Returns `Ok(true)` to continue the chain, `Ok(false)` to consume the value,
    /// and `Err` to abort the dispatch.
    fn handle(
        &mut self,
        action: &Dispatchable<S>,
        state: &S,
        dispatcher: &Dispatcher<S>,
    ) -> Result<bool, DispatchError>;
}
