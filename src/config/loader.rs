//! Configuration file discovery and loading.
//!
//! A project keeps its config under `.regex-playground/`:
//! 1. `config.yml` - project config
//! 2. `config.local.yml` - local overrides (usually not committed)
//!
//! Both are optional. Without either, [`PlaygroundConfig::default`] applies.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::merger::merge_configs;
use crate::config::schema::{PlaygroundConfig, CONFIG_DIR};
use crate::error::{PlaygroundError, Result};

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: `.regex-playground/config.yml`
    pub project: Option<PathBuf>,

    /// Local overrides: `.regex-playground/config.local.yml`
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Whether any config file exists.
    pub fn is_empty(&self) -> bool {
        self.project.is_none() && self.project_local.is_none()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// The nearest ancestor containing `.regex-playground/` wins, then the
/// nearest containing `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let marked = |marker: &str| {
        start
            .ancestors()
            .find(|dir| dir.join(marker).exists())
            .map(Path::to_path_buf)
    };
    marked(CONFIG_DIR).or_else(|| marked(".git"))
}

/// Load a config file as raw YAML for merging.
///
/// An empty file loads as an empty mapping.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PlaygroundError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PlaygroundError::Io(e)
        }
    })?;

    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| PlaygroundError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<PlaygroundConfig> {
    let value = load_config_value(path)?;
    parse_value(value, path)
}

fn parse_value(value: serde_yaml::Value, source: &Path) -> Result<PlaygroundConfig> {
    serde_yaml::from_value(value).map_err(|e| PlaygroundError::ConfigParseError {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project config with its local overrides.
///
/// Returns defaults when neither file exists.
pub fn load_merged_config(project_root: &Path) -> Result<PlaygroundConfig> {
    let paths = ConfigPaths::discover(project_root);
    if paths.is_empty() {
        debug!("No config under {}, using defaults", project_root.display());
        return Ok(PlaygroundConfig::default());
    }

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        debug!("Loading config from {}", path.display());
        configs.push(load_config_value(path)?);
    }

    parse_value(
        merge_configs(&configs),
        &project_root.join(CONFIG_DIR).join("config.yml"),
    )
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges the project's config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PlaygroundConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}
