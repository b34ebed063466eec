use crate::action::Dispatchable;
use crate::dispatcher::Dispatcher;
use crate::error::DispatchError;
use crate::middleware::Middleware;

/// ThunkMiddleware - runs dispatched functions instead of reducing them
///
/// The thunk receives the dispatcher and the current state. Anything it
/// dispatches re-enters the chain from the start, so validation still applies.
#[derive(Debug, Default)]
pub struct ThunkMiddleware;

impl ThunkMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Middleware<S> for ThunkMiddleware {
    fn handle(
        &mut self,
        action: &Dispatchable<S>,
        state: &S,
        dispatcher: &Dispatcher<S>,
    ) -> Result<bool, DispatchError> {
        match action {
            Dispatchable::Thunk(thunk) => {
                log::debug!("ThunkMiddleware: running thunk");
                thunk(dispatcher, state);
                Ok(false)
            }
            _ => Ok(true),
        }
    }
}
