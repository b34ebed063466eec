use crate::action::Dispatchable;
use crate::dispatcher::Dispatcher;
use crate::error::DispatchError;
use crate::middleware::Middleware;

/// LoggingMiddleware - logs all values passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Middleware<S> for LoggingMiddleware {
    fn handle(
        &mut self,
        action: &Dispatchable<S>,
        _state: &S,
        _dispatcher: &Dispatcher<S>,
    ) -> Result<bool, DispatchError> {
        log::debug!("Action: {:?}", action);

        Ok(true) // Always pass action through
    }
}
