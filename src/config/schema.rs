//! Configuration schema types.
//!
//! ```yaml
//! # .regex-playground/config.yml
//! debounce:
//!   delay_ms: 300
//!   leading: false
//!   max_wait_ms: 2000
//! storage:
//!   dir: .regex-playground/data
//! default_flags: gi
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::debounce::DebounceConfig;
use crate::matcher::DEFAULT_FLAGS;

/// Name of the per-project directory holding config and data.
pub const CONFIG_DIR: &str = ".regex-playground";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// History debounce settings.
    pub debounce: DebounceConfig,

    /// Where persisted collections live.
    pub storage: StorageConfig,

    /// Flags applied on reset and when loading built-in patterns.
    pub default_flags: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            debounce: DebounceConfig::default(),
            storage: StorageConfig::default(),
            default_flags: DEFAULT_FLAGS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory. Relative paths resolve against the project root.
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: Path::new(CONFIG_DIR).join("data"),
        }
    }
}

impl StorageConfig {
    /// The data directory for a project rooted at `project_root`.
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            project_root.join(&self.dir)
        }
    }
}
