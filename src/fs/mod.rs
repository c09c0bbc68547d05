//! File system utilities for hypoboard
//!
//! Config lookup paths and JSON reading/writing.

mod json;
mod paths;

pub use json::{read_json, write_json, write_snapshot};
pub use paths::{get_config_path, resolve_cwd, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
