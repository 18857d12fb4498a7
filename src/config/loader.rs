//! Configuration file discovery and loading.
//!
//! A project may carry `.depcheck.yml` or `depcheck.yml` at its root.
//! Without either file the defaults apply.

use crate::config::schema::DepcheckConfig;
use crate::error::{DepcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched in the project root, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".depcheck.yml", "depcheck.yml"];

/// Find the project config file, if any.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file.
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DepcheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DepcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DepcheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into DepcheckConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DepcheckConfig> {
    if content.trim().is_empty() {
        return Ok(DepcheckConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| DepcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Otherwise the project root is searched and
/// a missing file means defaults.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<DepcheckConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }

    match find_config(project_root) {
        Some(path) => {
            tracing::debug!("Using config {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No config in {}, using defaults", project_root.display());
            Ok(DepcheckConfig::default())
        }
    }
}
