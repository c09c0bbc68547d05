//! Stage schema - the six lifecycle stages and column health

use serde::{Deserialize, Serialize};

use crate::errors::BoardError;

/// Lifecycle stage of a hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageKey {
    /// Idea captured, not yet scoped
    Ideation,
    /// Problem and data scope being defined
    Scoping,
    /// Competing for portfolio funding
    Prioritization,
    /// Lab experiments running
    Experimentation,
    /// Results under governance review
    Evaluation,
    /// Rolled out to production
    Scaling,
}

impl StageKey {
    /// Human-readable label, e.g. "Prioritization"
    pub fn label(&self) -> &'static str {
        match self {
            StageKey::Ideation => "Ideation",
            StageKey::Scoping => "Scoping",
            StageKey::Prioritization => "Prioritization",
            StageKey::Experimentation => "Experimentation",
            StageKey::Evaluation => "Evaluation",
            StageKey::Scaling => "Scaling",
        }
    }
}

impl std::fmt::Display for StageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageKey::Ideation => write!(f, "IDEATION"),
            StageKey::Scoping => write!(f, "SCOPING"),
            StageKey::Prioritization => write!(f, "PRIORITIZATION"),
            StageKey::Experimentation => write!(f, "EXPERIMENTATION"),
            StageKey::Evaluation => write!(f, "EVALUATION"),
            StageKey::Scaling => write!(f, "SCALING"),
        }
    }
}

impl std::str::FromStr for StageKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IDEATION" => Ok(StageKey::Ideation),
            "SCOPING" => Ok(StageKey::Scoping),
            "PRIORITIZATION" => Ok(StageKey::Prioritization),
            "EXPERIMENTATION" => Ok(StageKey::Experimentation),
            "EVALUATION" => Ok(StageKey::Evaluation),
            "SCALING" => Ok(StageKey::Scaling),
            _ => Err(BoardError::UnknownStage(s.to_string())),
        }
    }
}

/// Health badge of a stage column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StageHealth {
    #[default]
    OnTrack,
    Warning,
    Risk,
}

impl std::fmt::Display for StageHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageHealth::OnTrack => write!(f, "on-track"),
            StageHealth::Warning => write!(f, "warning"),
            StageHealth::Risk => write!(f, "risk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_key_serialization() {
        assert_eq!(serde_json::to_string(&StageKey::Ideation).unwrap(), "\"IDEATION\"");
        assert_eq!(
            serde_json::to_string(&StageKey::Prioritization).unwrap(),
            "\"PRIORITIZATION\""
        );
        assert_eq!(serde_json::to_string(&StageKey::Scaling).unwrap(), "\"SCALING\"");
    }

    #[test]
    fn test_stage_key_deserialization() {
        assert_eq!(
            serde_json::from_str::<StageKey>("\"EXPERIMENTATION\"").unwrap(),
            StageKey::Experimentation
        );
        assert!(serde_json::from_str::<StageKey>("\"ARCHIVED\"").is_err());
    }

    #[test]
    fn test_stage_key_from_str_is_case_insensitive() {
        assert_eq!("scoping".parse::<StageKey>().unwrap(), StageKey::Scoping);
        assert_eq!(" Evaluation ".parse::<StageKey>().unwrap(), StageKey::Evaluation);
        let err = "launch".parse::<StageKey>().unwrap_err();
        assert!(matches!(err, BoardError::UnknownStage(ref s) if s == "launch"));
        assert_eq!(err.code(), "UNKNOWN_STAGE");
    }

    #[test]
    fn test_stage_key_display_and_label() {
        assert_eq!(StageKey::Scoping.to_string(), "SCOPING");
        assert_eq!(StageKey::Scoping.label(), "Scoping");
    }

    #[test]
    fn test_stage_health_serialization() {
        assert_eq!(serde_json::to_string(&StageHealth::OnTrack).unwrap(), "\"on-track\"");
        assert_eq!(
            serde_json::from_str::<StageHealth>("\"risk\"").unwrap(),
            StageHealth::Risk
        );
    }
}
