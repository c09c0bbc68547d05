//! Configuration loading

mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config, load_config_with, ACTOR_ENV_VAR,
    API_URL_ENV_VAR,
};
