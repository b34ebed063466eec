//! Schema table
//!
//! The schema is the static declaration of which action types exist and what
//! payload each of them expects. It is built once at setup and then shared by
//! the reducer builder and every middleware derived from it.

use crate::config::ValidationConfig;
use crate::error::SchemaError;
use crate::middleware::validation::ValidatingMiddleware;
use crate::reducer::ReducerBuilder;
use crate::types::TypeTag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// One declared action type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub name: String,

    /// Expected payload type; `None` means the action takes no payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<TypeTag>,
}

impl SchemaEntry {
    /// An action type without payload
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: None,
        }
    }

    /// An action type carrying a payload of type `tag`
    pub fn with_payload(name: impl Into<String>, tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            payload: Some(tag),
        }
    }
}

impl From<&str> for SchemaEntry {
    fn from(name: &str) -> Self {
        SchemaEntry::new(name)
    }
}

impl<N: Into<String>> From<(N, TypeTag)> for SchemaEntry {
    fn from((name, tag): (N, TypeTag)) -> Self {
        SchemaEntry::with_payload(name, tag)
    }
}

impl<N: Into<String>> From<(N, Option<TypeTag>)> for SchemaEntry {
    fn from((name, payload): (N, Option<TypeTag>)) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

#[derive(Debug)]
struct SchemaTable {
    entries: Vec<SchemaEntry>,
    index: HashMap<String, usize>,
}

/// Immutable, ordered set of action declarations
///
/// Cloning is cheap; all clones share the same table.
#[derive(Debug, Clone)]
pub struct Schema {
    table: Arc<SchemaTable>,
}

impl Schema {
    /// Build a schema, rejecting empty and duplicate names
    pub fn new<I, E>(entries: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = E>,
        E: Into<SchemaEntry>,
    {
        let entries: Vec<SchemaEntry> = entries.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(SchemaError::EmptyActionName);
            }
            if index.insert(entry.name.clone(), position).is_some() {
                return Err(SchemaError::DuplicateAction(entry.name.clone()));
            }
        }

        log::debug!("Schema built with {} action types", entries.len());

        Ok(Self {
            table: Arc::new(SchemaTable { entries, index }),
        })
    }

    /// Look up the declaration for an action type
    pub fn entry(&self, name: &str) -> Option<&SchemaEntry> {
        self.table
            .index
            .get(name)
            .map(|&position| &self.table.entries[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.index.contains_key(name)
    }

    /// Expected payload type for `name`
    ///
    /// Outer `None`: the type is not declared. Inner `None`: declared without payload.
    pub fn payload_type(&self, name: &str) -> Option<Option<TypeTag>> {
        self.entry(name).map(|entry| entry.payload)
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[SchemaEntry] {
        &self.table.entries
    }

    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    /// Start building a reducer for this schema
    pub fn create_reducer<S>(&self, initial_state: S) -> ReducerBuilder<S> {
        ReducerBuilder::new(initial_state).for_schema(self.clone())
    }

    /// Create a middleware validating dispatched actions against this schema
    pub fn create_middleware(&self, config: ValidationConfig) -> ValidatingMiddleware {
        ValidatingMiddleware::new(self.clone(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup() {
        let schema = Schema::new([
            SchemaEntry::new("foo"),
            SchemaEntry::with_payload("bar", TypeTag::String),
        ])
        .unwrap();

        assert_eq!(schema.len(), 2);
        assert!(schema.contains("foo"));
        assert!(!schema.contains("quux"));
        assert_eq!(schema.payload_type("foo"), Some(None));
        assert_eq!(schema.payload_type("bar"), Some(Some(TypeTag::String)));
        assert_eq!(schema.payload_type("quux"), None);
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let schema = Schema::new([
            ("zeta", None),
            ("alpha", Some(TypeTag::Number)),
            ("mid", None),
        ])
        .unwrap();

        let names: Vec<&str> = schema.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let err = Schema::new([
            SchemaEntry::new("foo"),
            SchemaEntry::with_payload("foo", TypeTag::String),
        ])
        .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateAction("foo".to_string()));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = Schema::new([SchemaEntry::from("")]).unwrap_err();
        assert_eq!(err, SchemaError::EmptyActionName);
    }

    #[test]
    fn test_empty_schema() {
        let schema = Schema::new(Vec::<SchemaEntry>::new()).unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_entry_deserialize() {
        let entry: SchemaEntry =
            serde_json::from_str(r#"{ "name": "bar", "payload": "String" }"#).unwrap();
        assert_eq!(entry, SchemaEntry::with_payload("bar", TypeTag::String));

        let entry: SchemaEntry = serde_json::from_str(r#"{ "name": "foo" }"#).unwrap();
        assert_eq!(entry, SchemaEntry::new("foo"));
    }
}
