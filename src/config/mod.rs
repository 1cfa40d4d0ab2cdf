//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use regex_playground::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".regex-playground");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "default_flags: gi").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.default_flags, "gi");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{PlaygroundConfig, StorageConfig, CONFIG_DIR};
pub use validator::{validate, validate_config, ValidationError};
