//! Path resolution utilities for hypoboard

use std::path::{Path, PathBuf};

/// Name of the project-local config file
pub const CONFIG_FILE_NAME: &str = "hypoboard.json";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "HYPOBOARD_CONFIG";

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the project-local config file.
pub fn get_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}
