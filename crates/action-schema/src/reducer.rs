//! Reducer builder
//!
//! A [`Reducer`] maps action types to pure state transitions. It does no
//! validation: unknown action types (including ones a middleware rejected)
//! leave the state untouched.

use crate::action::Action;
use crate::schema::Schema;
use std::collections::HashMap;

/// Pure state transition for one action type
pub type Handler<S> = Box<dyn Fn(S, &Action) -> S + Send + Sync>;

/// Reducer - pure function that produces new state from current state + action
pub struct Reducer<S> {
    initial_state: S,
    handlers: HashMap<String, Handler<S>>,
}

impl<S> Reducer<S> {
    /// Build a reducer from a ready-made handler map
    pub fn from_handlers<I, N>(handlers: I, initial_state: S) -> Self
    where
        I: IntoIterator<Item = (N, Handler<S>)>,
        N: Into<String>,
    {
        Self {
            initial_state,
            handlers: handlers
                .into_iter()
                .map(|(name, handler)| (name.into(), handler))
                .collect(),
        }
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn handles(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Compute the next state
    ///
    /// `None` stands for "no state yet" and starts from the initial state.
    pub fn reduce(&self, state: Option<S>, action: &Action) -> S
    where
        S: Clone,
    {
        let state = state.unwrap_or_else(|| self.initial_state.clone());

        match self.handlers.get(action.kind()) {
            Some(handler) => handler(state, action),
            None => state,
        }
    }
}

/// Collects handlers before producing a [`Reducer`]
pub struct ReducerBuilder<S> {
    initial_state: S,
    handlers: HashMap<String, Handler<S>>,
    schema: Option<Schema>,
}

impl<S> ReducerBuilder<S> {
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            handlers: HashMap::new(),
            schema: None,
        }
    }

    /// Check handler names against `schema` when building
    pub fn for_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Register a handler; a later registration for the same type wins
    pub fn on<F>(mut self, kind: impl Into<String>, handler: F) -> Self
    where
        F: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        self.handlers.insert(kind.into(), Box::new(handler));
        self
    }

    pub fn build(self) -> Reducer<S> {
        if let Some(schema) = &self.schema {
            for kind in self.handlers.keys().filter(|kind| !schema.contains(kind)) {
                log::warn!("Reducer handler for undeclared action type: {}", kind);
            }
        }

        Reducer {
            initial_state: self.initial_state,
            handlers: self.handlers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeTag;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        count: i64,
        message: String,
    }

    fn initial() -> Counter {
        Counter {
            count: 0,
            message: "hello".to_string(),
        }
    }

    #[test]
    fn test_missing_state_starts_from_initial() {
        let reducer = ReducerBuilder::new(initial()).build();
        assert_eq!(reducer.reduce(None, &Action::new("anything")), initial());
    }

    #[test]
    fn test_registered_handler_runs() {
        let reducer = ReducerBuilder::new(initial())
            .on("increment", |mut state: Counter, _| {
                state.count += 1;
                state
            })
            .on("set_message", |mut state: Counter, action| {
                if let Some(message) = action.payload.as_ref().and_then(|p| p.as_str()) {
                    state.message = message.to_string();
                }
                state
            })
            .build();

        let state = reducer.reduce(None, &Action::new("increment"));
        let state = reducer.reduce(Some(state), &Action::new("increment"));
        assert_eq!(state.count, 2);

        let set_message = Action::new("set_message").with_payload("world");
        let state = reducer.reduce(Some(state), &set_message);
        assert_eq!(state.message, "world");
    }

    #[test]
    fn test_unknown_action_passes_state_through() {
        let reducer = ReducerBuilder::new(initial())
            .on("increment", |mut state: Counter, _| {
                state.count += 1;
                state
            })
            .build();

        let state = Counter {
            count: 7,
            message: "kept".to_string(),
        };
        assert_eq!(
            reducer.reduce(Some(state.clone()), &Action::new("quux")),
            state
        );
    }

    #[test]
    fn test_from_handlers() {
        let add: Handler<i64> = Box::new(|state: i64, _: &Action| state + 1);
        let reset: Handler<i64> = Box::new(|_: i64, _: &Action| 0);
        let reducer = Reducer::from_handlers([("add", add), ("reset", reset)], 10);

        assert!(reducer.handles("add"));
        assert!(!reducer.handles("sub"));
        assert_eq!(reducer.reduce(None, &Action::new("add")), 11);
        assert_eq!(reducer.reduce(Some(5), &Action::new("reset")), 0);
    }

    #[test]
    fn test_schema_reducer_accepts_undeclared_handlers() {
        let schema = Schema::new([("foo", None), ("bar", Some(TypeTag::String))]).unwrap();
        let reducer = schema
            .create_reducer(0_i64)
            .on("foo", |state, _| state)
            .on("not_declared", |state, _| state + 100)
            .build();

        assert_eq!(reducer.reduce(None, &Action::new("not_declared")), 100);
    }
}
