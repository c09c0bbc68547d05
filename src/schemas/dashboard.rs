//! Dashboard schema - the full board snapshot served by the backend

use serde::{Deserialize, Serialize};

use super::hypothesis::{HypothesisDetail, StageSummary};
use super::stage::StageKey;

/// Portfolio headline numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Highlights {
    #[serde(default)]
    pub portfolio_value: String,
    #[serde(default)]
    pub experiments_in_flight: u32,
    #[serde(default)]
    pub avg_time_to_value: String,
    #[serde(default)]
    pub governance_pending: u32,
}

/// Open work item attached to a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub due_at: String,
    /// data | governance | approval
    #[serde(rename = "type", default)]
    pub kind: String,
    /// at-risk | due-soon | blocked
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub severity: String,
    pub related_stage: StageKey,
}

/// Entry of the portfolio activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub actor: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub occurred_at: String,
    pub stage: StageKey,
    /// positive | neutral | negative
    #[serde(default)]
    pub impact: String,
}

/// Response of `GET /hypotheses/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stages: Vec<StageSummary>,
    #[serde(default)]
    pub highlights: Highlights,
    #[serde(default)]
    pub focus_hypothesis: Option<HypothesisDetail>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub activity: Vec<Activity>,
}

impl Dashboard {
    /// A snapshot holding only the given columns
    pub fn from_stages(stages: Vec<StageSummary>) -> Self {
        Dashboard {
            stages,
            highlights: Highlights::default(),
            focus_hypothesis: None,
            tasks: Vec::new(),
            activity: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_parses_minimal_payload() {
        let json = r#"{"stages": [{"key": "IDEATION", "title": "Ideation"}]}"#;
        let dashboard: Dashboard = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.stages.len(), 1);
        assert!(dashboard.focus_hypothesis.is_none());
        assert_eq!(dashboard.highlights, Highlights::default());
    }

    #[test]
    fn test_task_type_field_is_renamed() {
        let json = r#"{
            "id": "TASK-1",
            "label": "Upload data contract",
            "type": "governance",
            "status": "blocked",
            "relatedStage": "SCOPING"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.kind, "governance");
        assert_eq!(task.related_stage, StageKey::Scoping);

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["type"], "governance");
    }
}
