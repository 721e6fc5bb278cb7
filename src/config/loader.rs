//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StagehandError};

use super::schema::LaunchConfig;

/// Name of the config file looked up at the project root.
pub const CONFIG_FILE: &str = "stagehand.yml";

/// Find the config file for a project root, if one exists.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a config file and parse it.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid, and
/// `ConfigValidationError` if field values are out of range.
pub fn load_config_file(path: &Path) -> Result<LaunchConfig> {
    let contents = fs::read_to_string(path).map_err(|e| StagehandError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let config: LaunchConfig =
        serde_yaml::from_str(&contents).map_err(|e| StagehandError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    config.validate()?;
    Ok(config)
}

/// Load the project config, falling back to defaults when no file exists.
///
/// `explicit` (from `--config`) must exist; a missing discovered file is
/// simply the zero-config case.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<LaunchConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => match find_config(project_root) {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                load_config_file(&path)
            }
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                Ok(LaunchConfig::default())
            }
        },
    }
}
