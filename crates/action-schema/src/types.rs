//! Payload type tags
//!
//! A [`TypeTag`] is a named runtime-type predicate attached to a schema entry.
//! The set is closed: every tag maps onto one shape of [`serde_json::Value`].

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Runtime type expected for an action payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Null,
    /// Any value, as long as a payload is present
    Any,
}

impl TypeTag {
    /// All tags, in declaration order
    pub const ALL: [TypeTag; 7] = [
        TypeTag::String,
        TypeTag::Number,
        TypeTag::Boolean,
        TypeTag::Object,
        TypeTag::Array,
        TypeTag::Null,
        TypeTag::Any,
    ];

    /// Test whether `value` satisfies this tag
    pub fn check(&self, value: &Value) -> bool {
        match self {
            TypeTag::String => value.is_string(),
            TypeTag::Number => value.is_number(),
            TypeTag::Boolean => value.is_boolean(),
            TypeTag::Object => value.is_object(),
            TypeTag::Array => value.is_array(),
            TypeTag::Null => value.is_null(),
            TypeTag::Any => true,
        }
    }

    /// Tag name as used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::String => "String",
            TypeTag::Number => "Number",
            TypeTag::Boolean => "Boolean",
            TypeTag::Object => "Object",
            TypeTag::Array => "Array",
            TypeTag::Null => "Null",
            TypeTag::Any => "Any",
        }
    }

    /// The tag describing the runtime type of `value`
    ///
    /// Never returns [`TypeTag::Any`]. Used to report what was found on a mismatch.
    pub fn of(value: &Value) -> TypeTag {
        match value {
            Value::String(_) => TypeTag::String,
            Value::Number(_) => TypeTag::Number,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Object(_) => TypeTag::Object,
            Value::Array(_) => TypeTag::Array,
            Value::Null => TypeTag::Null,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| SchemaError::UnknownTypeTag(s.to_string()))
    }
}
