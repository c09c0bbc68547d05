//! Config schema - Configuration for hypoboard

use serde::{Deserialize, Serialize};

/// Main configuration for hypoboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the hypothesis service (e.g., "http://localhost:8001")
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Name sent as `updatedBy` on stage moves
    #[serde(default = "default_actor")]
    pub actor: String,

    /// Lifetime of a toast notification in milliseconds
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,

    /// Pointer travel needed before a press becomes a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f64,

    /// Run the readiness gate on forward drag moves
    #[serde(default = "default_gate_drag_transitions")]
    pub gate_drag_transitions: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_actor() -> String {
    "System".to_string()
}

fn default_toast_ttl_ms() -> u64 {
    4200
}

fn default_drag_threshold() -> f64 {
    5.0
}

fn default_gate_drag_transitions() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            actor: default_actor(),
            toast_ttl_ms: default_toast_ttl_ms(),
            drag_threshold: default_drag_threshold(),
            gate_drag_transitions: default_gate_drag_transitions(),
        }
    }
}

impl Config {
    /// Toast lifetime as a Duration
    pub fn toast_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.toast_ttl_ms)
    }
}
