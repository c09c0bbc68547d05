//! Hypothesis schema - board cards, stage columns and the full detail record
//!
//! Field names follow the backend's camelCase JSON.

use serde::{Deserialize, Serialize};

use super::stage::{StageHealth, StageKey};

/// A hypothesis card as listed in a stage column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypothesisItem {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub stage: StageKey,

    /// Scores on a 0-10 scale
    #[serde(default)]
    pub impact: f64,
    #[serde(default)]
    pub feasibility: f64,
    #[serde(default)]
    pub confidence: f64,

    /// Name of the gate guarding the next stage
    #[serde(default)]
    pub next_gate: Option<String>,

    #[serde(default)]
    pub last_updated: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl HypothesisItem {
    /// Create a card with zero scores and no tags
    pub fn new(id: impl Into<String>, title: impl Into<String>, stage: StageKey) -> Self {
        HypothesisItem {
            id: id.into(),
            title: title.into(),
            owner: "Unassigned".to_string(),
            stage,
            impact: 0.0,
            feasibility: 0.0,
            confidence: 0.0,
            next_gate: None,
            last_updated: None,
            tags: Vec::new(),
        }
    }

    /// Return a new card tagged with the given stage
    pub fn with_stage(mut self, stage: StageKey) -> Self {
        self.stage = stage;
        self
    }
}

/// One kanban column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageSummary {
    pub key: StageKey,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sla_hours: u32,
    #[serde(default)]
    pub stage_owner: String,
    #[serde(default)]
    pub stage_health: StageHealth,
    #[serde(default)]
    pub conversion_rate: f64,
    #[serde(default)]
    pub average_days_in_stage: f64,
    #[serde(default)]
    pub items: Vec<HypothesisItem>,
}

impl StageSummary {
    /// Create an empty, on-track column titled after the stage label
    pub fn new(key: StageKey) -> Self {
        StageSummary {
            key,
            title: key.label().to_string(),
            description: String::new(),
            sla_hours: 0,
            stage_owner: String::new(),
            stage_health: StageHealth::OnTrack,
            conversion_rate: 0.0,
            average_days_in_stage: 0.0,
            items: Vec::new(),
        }
    }

    /// Return a new column with the given items
    pub fn with_items(mut self, items: Vec<HypothesisItem>) -> Self {
        self.items = items;
        self
    }
}

/// Status of a gating checklist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistStatus {
    #[default]
    Pending,
    InProgress,
    Complete,
}

/// One entry of a hypothesis' gating checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    #[serde(default)]
    pub status: ChecklistStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
}

impl ChecklistItem {
    pub fn new(label: impl Into<String>, status: ChecklistStatus) -> Self {
        ChecklistItem {
            id: None,
            label: label.into(),
            status,
            owner: None,
            due_at: None,
        }
    }
}

/// Experiment plan linked to a hypothesis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedExperiment {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Decision state of an approval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "pending"),
            ApprovalStatus::Approved => write!(f, "approved"),
            ApprovalStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// An approval decision recorded by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    #[serde(default)]
    pub id: String,
    pub approver_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver_role: Option<String>,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<String>,
}

fn default_required() -> bool {
    true
}

/// Full hypothesis record shown in the detail panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypothesisDetail {
    pub id: String,
    pub title: String,
    pub owner: String,
    #[serde(default)]
    pub sponsor: String,
    pub stage: StageKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_health: Option<StageHealth>,

    #[serde(default)]
    pub description: String,

    /// Free text, the backend writes "Not set" when unknown
    #[serde(default)]
    pub target_value: String,
    #[serde(default)]
    pub cost_avoidance: String,

    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub feasibility: f64,
    #[serde(default)]
    pub impact: f64,

    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub linked_experiments: Vec<LinkedExperiment>,
    #[serde(default)]
    pub gating_checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub approvals: Vec<Approval>,
}

impl HypothesisDetail {
    /// Create a bare detail record with empty text fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, stage: StageKey) -> Self {
        HypothesisDetail {
            id: id.into(),
            title: title.into(),
            owner: "Unassigned".to_string(),
            sponsor: String::new(),
            stage,
            stage_health: None,
            description: String::new(),
            target_value: String::new(),
            cost_avoidance: String::new(),
            confidence: 0.0,
            feasibility: 0.0,
            impact: 0.0,
            dependencies: Vec::new(),
            linked_experiments: Vec::new(),
            gating_checklist: Vec::new(),
            approvals: Vec::new(),
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_stage(mut self, stage: StageKey) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_roi(mut self, target_value: impl Into<String>, cost_avoidance: impl Into<String>) -> Self {
        self.target_value = target_value.into();
        self.cost_avoidance = cost_avoidance.into();
        self
    }

    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.gating_checklist = checklist;
        self
    }

    pub fn with_experiment(mut self, experiment: LinkedExperiment) -> Self {
        self.linked_experiments.push(experiment);
        self
    }

    pub fn with_approval(mut self, approval: Approval) -> Self {
        self.approvals.push(approval);
        self
    }
}

/// Body of `PATCH /hypotheses/{id}` for a stage move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageUpdate {
    pub stage: StageKey,
    pub updated_by: String,
}
