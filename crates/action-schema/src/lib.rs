//! # action-schema
//!
//! Schema-validated actions for a Redux-style store.
//!
//! A [`Schema`] declares which action types exist and which payload type each
//! one carries. From it you derive:
//!
//! - a [`Reducer`] via [`Schema::create_reducer`], mapping action types to pure
//!   state transitions and passing everything else through, and
//! - a [`ValidatingMiddleware`] via [`Schema::create_middleware`], rejecting
//!   dispatched actions whose `type` or `payload` does not match the schema.
//!
//! Both plug into the bundled [`Store`], which runs every dispatched value
//! through its middleware chain before reducing it.
//!
//! ## Usage
//!
//! ```rust
//! use action_schema::{create_schema, Action, Store, TypeTag, ValidationConfig};
//!
//! let schema = create_schema([("foo", None), ("bar", Some(TypeTag::String))])?;
//!
//! let reducer = schema
//!     .create_reducer(String::from("hello"))
//!     .on("bar", |state, action| {
//!         action
//!             .payload
//!             .as_ref()
//!             .and_then(|p| p.as_str())
//!             .map(String::from)
//!             .unwrap_or(state)
//!     })
//!     .build();
//!
//! let mut store = Store::new(reducer);
//! store.add_middleware(Box::new(schema.create_middleware(ValidationConfig::default())));
//!
//! store.dispatch(Action::new("bar").with_payload("world"))?;
//! assert_eq!(store.state(), "world");
//!
//! assert!(store.dispatch(Action::new("quux")).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod action;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod middleware;
pub mod reducer;
pub mod schema;
pub mod store;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use action::{Action, Dispatchable, Thunk};
pub use config::{OnErrorPolicy, ValidationConfig, DEFAULT_IGNORED_ACTIONS};
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, SchemaError, Violation};
pub use middleware::logging::LoggingMiddleware;
pub use middleware::thunk::ThunkMiddleware;
pub use middleware::validation::{ErrorHandler, ValidatingMiddleware};
pub use middleware::Middleware;
pub use reducer::{Handler, Reducer, ReducerBuilder};
pub use schema::{Schema, SchemaEntry};
pub use store::{DispatchOutcome, Store};
pub use types::TypeTag;
pub use validator::{Validator, Verdict};

/// Build a schema from `(name, payload type)` declarations
///
/// Shorthand for [`Schema::new`].
pub fn create_schema<I, E>(entries: I) -> Result<Schema, SchemaError>
where
    I: IntoIterator<Item = E>,
    E: Into<SchemaEntry>,
{
    Schema::new(entries)
}
