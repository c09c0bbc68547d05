//! Configuration loading with defaults

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Overrides `api_base_url`
pub const API_URL_ENV_VAR: &str = "HYPOTHESIS_API_URL";

/// Overrides `actor`
pub const ACTOR_ENV_VAR: &str = "HYPOBOARD_ACTOR";

/// Load configuration, falling back to defaults.
///
/// Lookup order: the explicit path, then `$HYPOBOARD_CONFIG`, then
/// `hypoboard.json` in `cwd`. Environment overrides are applied on top.
///
/// # Errors
/// * `FileNotFound` - If an explicitly named file does not exist
/// * `InvalidJson` - If the file is not a valid config
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    load_config_with(explicit, cwd, |key| std::env::var(key).ok())
}

/// [`load_config`] with an injectable environment lookup
pub fn load_config_with<F>(explicit: Option<&Path>, cwd: &Path, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match resolve_config_path(explicit, cwd, &lookup) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading config");
            fs::read_json(&path)?
        }
        None => Config::default(),
    };
    Ok(apply_env_overrides(config, &lookup))
}

fn resolve_config_path<F>(explicit: Option<&Path>, cwd: &Path, lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = non_empty(lookup(fs::CONFIG_ENV_VAR)) {
        return Some(PathBuf::from(path));
    }
    let local = fs::get_config_path(cwd);
    local.exists().then_some(local)
}

/// Apply `HYPOTHESIS_API_URL` and `HYPOBOARD_ACTOR`
pub fn apply_env_overrides<F>(mut config: Config, lookup: &F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(lookup(API_URL_ENV_VAR)) {
        config.api_base_url = url;
    }
    if let Some(actor) = non_empty(lookup(ACTOR_ENV_VAR)) {
        config.actor = actor;
    }
    config
}

/// Command-line flags win over file and environment
pub fn apply_cli_overrides(mut config: Config, api_url: Option<&str>) -> Config {
    if let Some(url) = api_url {
        config.api_base_url = url.to_string();
    }
    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BoardError;
    use std::collections::HashMap;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_config_with(None, temp.path(), env(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, "http://localhost:8001");
        assert_eq!(config.toast_ttl_ms, 4200);
    }

    #[test]
    fn test_load_config_from_cwd_file() {
        let temp = TempDir::new().unwrap();
        let config_content = r#"{
            "api_base_url": "http://hypotheses.internal:9000",
            "gate_drag_transitions": false
        }"#;
        std_fs::write(temp.path().join("hypoboard.json"), config_content).unwrap();

        let config = load_config_with(None, temp.path(), env(&[])).unwrap();
        assert_eq!(config.api_base_url, "http://hypotheses.internal:9000");
        assert!(!config.gate_drag_transitions);
        // Default for unspecified field
        assert_eq!(config.actor, "System");
    }

    #[test]
    fn test_explicit_path_wins_over_env_and_cwd() {
        let temp = TempDir::new().unwrap();
        std_fs::write(temp.path().join("hypoboard.json"), r#"{"actor": "cwd"}"#).unwrap();
        let env_file = temp.path().join("env.json");
        std_fs::write(&env_file, r#"{"actor": "env"}"#).unwrap();
        let explicit = temp.path().join("explicit.json");
        std_fs::write(&explicit, r#"{"actor": "explicit"}"#).unwrap();

        let lookup = env(&[("HYPOBOARD_CONFIG", env_file.to_str().unwrap())]);
        let config = load_config_with(Some(&explicit), temp.path(), &lookup).unwrap();
        assert_eq!(config.actor, "explicit");

        let config = load_config_with(None, temp.path(), &lookup).unwrap();
        assert_eq!(config.actor, "env");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");

        let err = load_config_with(Some(&missing), temp.path(), env(&[])).unwrap_err();
        assert!(matches!(err, BoardError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_file_is_invalid_json() {
        let temp = TempDir::new().unwrap();
        std_fs::write(temp.path().join("hypoboard.json"), "{ nope").unwrap();

        let err = load_config_with(None, temp.path(), env(&[])).unwrap_err();
        assert!(matches!(err, BoardError::InvalidJson(_)));
    }

    #[test]
    fn test_env_overrides() {
        let temp = TempDir::new().unwrap();
        let lookup = env(&[
            ("HYPOTHESIS_API_URL", "http://api.example:8001"),
            ("HYPOBOARD_ACTOR", "Ana Ruiz"),
        ]);

        let config = load_config_with(None, temp.path(), lookup).unwrap();
        assert_eq!(config.api_base_url, "http://api.example:8001");
        assert_eq!(config.actor, "Ana Ruiz");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let config = apply_env_overrides(Config::default(), &env(&[("HYPOBOARD_ACTOR", "  ")]));
        assert_eq!(config.actor, "System");
    }

    #[test]
    fn test_cli_override_is_last() {
        let config = apply_env_overrides(
            Config::default(),
            &env(&[("HYPOTHESIS_API_URL", "http://from-env")]),
        );
        let config = apply_cli_overrides(config, Some("http://from-flag"));
        assert_eq!(config.api_base_url, "http://from-flag");
    }
}
