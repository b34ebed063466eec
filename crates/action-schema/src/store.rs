use crate::action::Dispatchable;
use crate::dispatcher::Dispatcher;
use crate::error::DispatchError;
use crate::middleware::Middleware;
use crate::reducer::Reducer;
use std::sync::mpsc::Receiver;

/// How a dispatched value left the middleware chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The value reached the reducer
    Reduced,
    /// A middleware consumed the value
    Consumed,
}

/// Store - holds state and runs the dispatch loop
///
/// Every dispatched value passes through the middleware chain in the order the
/// middleware was added. If no middleware consumes it, it is handed to the
/// reducer. Values queued on the [`Dispatcher`] during a dispatch are processed
/// right after it, through the full chain.
pub struct Store<S> {
    state: S,
    reducer: Reducer<S>,
    middleware: Vec<Box<dyn Middleware<S>>>,
    dispatcher: Dispatcher<S>,
    pending: Receiver<Dispatchable<S>>,
}

impl<S: Clone> Store<S> {
    /// Create a store starting from the reducer's initial state
    pub fn new(reducer: Reducer<S>) -> Self {
        let state = reducer.initial_state().clone();
        Self::with_state(reducer, state)
    }

    /// Create a store with preloaded state
    pub fn with_state(reducer: Reducer<S>, state: S) -> Self {
        let (dispatcher, pending) = Dispatcher::channel();
        Self {
            state,
            reducer,
            middleware: Vec::new(),
            dispatcher,
            pending,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware<S>>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher<S> {
        &self.dispatcher
    }

    /// Process a value through the middleware chain and reducer
    ///
    /// Returns the outcome of `value` itself. An error from a queued follow-up
    /// dispatch is returned as well, and anything still queued is discarded.
    pub fn dispatch(
        &mut self,
        value: impl Into<Dispatchable<S>>,
    ) -> Result<DispatchOutcome, DispatchError> {
        let outcome = self
            .process(value.into())
            .inspect_err(|_| self.discard_pending())?;

        // Process any values dispatched by middleware or thunks
        while let Ok(queued) = self.pending.try_recv() {
            self.process(queued)
                .inspect_err(|_| self.discard_pending())?;
        }

        Ok(outcome)
    }

    fn process(&mut self, value: Dispatchable<S>) -> Result<DispatchOutcome, DispatchError> {
        log::debug!("Store: dispatching {}", value.describe());

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&value, &self.state, &self.dispatcher)? {
                return Ok(DispatchOutcome::Consumed);
            }
        }

        let Some(action) = value.as_action() else {
            return Err(DispatchError::NotAnAction(value.describe()));
        };

        self.state = self.reducer.reduce(Some(self.state.clone()), &action);
        Ok(DispatchOutcome::Reduced)
    }

    fn discard_pending(&self) {
        let dropped = self.pending.try_iter().count();
        if dropped > 0 {
            log::warn!(
                "Store: discarded {} queued actions after failed dispatch",
                dropped
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::middleware::logging::LoggingMiddleware;
    use crate::middleware::thunk::ThunkMiddleware;
    use crate::reducer::ReducerBuilder;
    use serde_json::json;

    fn counter() -> Reducer<i64> {
        ReducerBuilder::new(0_i64)
            .on("increment", |state, _| state + 1)
            .on("add", |state, action| {
                state + action.payload.as_ref().and_then(|p| p.as_i64()).unwrap_or(0)
            })
            .build()
    }

    /// Blocks every action of one type
    struct Block(&'static str);

    impl Middleware<i64> for Block {
        fn handle(
            &mut self,
            action: &Dispatchable<i64>,
            _state: &i64,
            _dispatcher: &Dispatcher<i64>,
        ) -> Result<bool, DispatchError> {
            Ok(action.as_action().map_or(true, |a| a.kind() != self.0))
        }
    }

    /// Fails every action of one type
    struct Fail(&'static str);

    impl Middleware<i64> for Fail {
        fn handle(
            &mut self,
            action: &Dispatchable<i64>,
            _state: &i64,
            _dispatcher: &Dispatcher<i64>,
        ) -> Result<bool, DispatchError> {
            match action.as_action() {
                Some(a) if a.kind() == self.0 => Err(DispatchError::Middleware(a.kind.clone())),
                _ => Ok(true),
            }
        }
    }

    #[test]
    fn test_store_starts_from_initial_state() {
        let store = Store::new(counter());
        assert_eq!(*store.state(), 0);

        let store = Store::with_state(counter(), 41);
        assert_eq!(*store.state(), 41);
    }

    #[test]
    fn test_store_dispatch_reduces() {
        let mut store = Store::new(counter());
        store.add_middleware(Box::new(LoggingMiddleware::new()));

        assert_eq!(
            store.dispatch(Action::new("increment")),
            Ok(DispatchOutcome::Reduced)
        );
        assert_eq!(
            store.dispatch(Action::new("add").with_payload(5)),
            Ok(DispatchOutcome::Reduced)
        );
        assert_eq!(*store.state(), 6);
    }

    #[test]
    fn test_middleware_can_consume() {
        let mut store = Store::new(counter());
        store.add_middleware(Box::new(Block("increment")));

        assert_eq!(
            store.dispatch(Action::new("increment")),
            Ok(DispatchOutcome::Consumed)
        );
        assert_eq!(*store.state(), 0);
    }

    #[test]
    fn test_thunk_without_middleware_is_not_an_action() {
        let mut store = Store::new(counter());

        let result = store.dispatch(Dispatchable::thunk(|_, _: &i64| {}));
        assert_eq!(result, Err(DispatchError::NotAnAction("<thunk>".to_string())));
    }

    #[test]
    fn test_raw_value_without_type_is_not_an_action() {
        let mut store = Store::new(counter());

        let result = store.dispatch(json!({ "payload": 1 }));
        assert!(matches!(result, Err(DispatchError::NotAnAction(_))));
    }

    #[test]
    fn test_raw_value_with_non_string_type_is_not_an_action() {
        let mut store = Store::new(counter());
        store.add_middleware(Box::new(LoggingMiddleware::new()));

        let result = store.dispatch(json!({ "type": 42 }));
        assert_eq!(
            result,
            Err(DispatchError::NotAnAction(r#"{"type":42}"#.to_string()))
        );
        assert_eq!(*store.state(), 0);
    }

    #[test]
    fn test_thunk_dispatches_are_processed_after() {
        let mut store = Store::new(counter());
        store.add_middleware(Box::new(ThunkMiddleware::new()));

        let outcome = store.dispatch(Dispatchable::thunk(|dispatcher, state: &i64| {
            assert_eq!(*state, 0);
            dispatcher.dispatch(Action::new("increment"));
            dispatcher.dispatch(Action::new("add").with_payload(10));
        }));

        assert_eq!(outcome, Ok(DispatchOutcome::Consumed));
        assert_eq!(*store.state(), 11);
    }

    #[test]
    fn test_failed_follow_up_discards_queue() {
        let mut store = Store::new(counter());
        store.add_middleware(Box::new(Fail("boom")));
        store.add_middleware(Box::new(ThunkMiddleware::new()));

        let result = store.dispatch(Dispatchable::thunk(|dispatcher, _: &i64| {
            dispatcher.dispatch(Action::new("boom"));
            dispatcher.dispatch(Action::new("increment"));
        }));
        assert_eq!(result, Err(DispatchError::Middleware("boom".to_string())));
        assert_eq!(*store.state(), 0);

        // Nothing left over for the next dispatch
        store.dispatch(Action::new("increment")).unwrap();
        assert_eq!(*store.state(), 1);
    }
}
