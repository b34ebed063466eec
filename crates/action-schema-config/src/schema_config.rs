//! Schema configuration
//!
//! Declares a schema and its middleware settings in TOML:
//!
//! ```toml
//! [[actions]]
//! name = "foo"
//!
//! [[actions]]
//! name = "bar"
//! payload = "String"
//!
//! [middleware]
//! ignore_payloads = false
//! ignore_actions = ["baz"]
//! on_error = "warn"
//! ```

use action_schema::{Schema, SchemaEntry, ValidatingMiddleware, ValidationConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Schema configuration loaded from .action-schema.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Declared action types, in order
    #[serde(default)]
    pub actions: Vec<SchemaEntry>,

    /// Validation middleware settings
    #[serde(default)]
    pub middleware: ValidationConfig,
}

impl SchemaConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse schema config")
    }

    /// Load config from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema config ({})", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load config from CWD first, then home and config directories, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded schema config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {:#}", path.display(), e);
                }
            }
        }

        log::debug!("Using default schema config");
        Self::default()
    }

    /// Build the declared schema
    pub fn schema(&self) -> Result<Schema> {
        Schema::new(self.actions.iter().cloned()).context("Invalid schema in config")
    }

    /// Middleware settings
    pub fn validation_config(&self) -> ValidationConfig {
        self.middleware.clone()
    }

    /// Build the declared schema and a middleware for it
    pub fn create_middleware(&self) -> Result<(Schema, ValidatingMiddleware)> {
        let schema = self.schema()?;
        let middleware = schema.create_middleware(self.validation_config());
        Ok((schema, middleware))
    }
}
