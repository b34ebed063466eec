//! Configuration file management for action-schema
//!
//! This crate provides:
//! - Config file path utilities
//! - Config file discovery (CWD, home directory, platform config directory)
//! - Schema and middleware configuration (SchemaConfig) loaded from TOML

pub mod config_file;
pub mod paths;
pub mod schema_config;

pub use config_file::load_config_file;
pub use schema_config::SchemaConfig;
