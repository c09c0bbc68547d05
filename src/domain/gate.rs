//! Readiness gate for stage transitions
//!
//! `evaluate` projects a hypothesis detail onto a target stage and returns the
//! readiness checks plus the approval requirements for that stage. Every rule
//! runs; results are collected, never short-circuited.

use serde::Serialize;

use crate::schemas::{ApprovalStatus, ChecklistStatus, HypothesisDetail, StageKey};

/// Outcome of a single readiness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Complete,
    /// Blocks the transition
    Incomplete,
    /// Advisory only
    Warning,
}

/// A named precondition evaluated against the target stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadinessCheck {
    pub field: String,
    pub status: CheckStatus,
    pub message: String,
}

impl ReadinessCheck {
    fn incomplete(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReadinessCheck {
            field: field.into(),
            status: CheckStatus::Incomplete,
            message: message.into(),
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReadinessCheck {
            field: field.into(),
            status: CheckStatus::Warning,
            message: message.into(),
        }
    }
}

/// How many approvers must sign off for governance completeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuorumMode {
    #[default]
    Single,
    All,
    Majority,
}

impl std::fmt::Display for QuorumMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuorumMode::Single => write!(f, "single"),
            QuorumMode::All => write!(f, "all"),
            QuorumMode::Majority => write!(f, "majority"),
        }
    }
}

/// An approver expected for the target stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalRequirement {
    pub approver: String,
    pub role: String,
    pub status: ApprovalStatus,
    pub required: bool,
}

/// Result of evaluating a hypothesis against a target stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateReport {
    pub target: StageKey,
    pub checks: Vec<ReadinessCheck>,
    pub approvals: Vec<ApprovalRequirement>,
    pub quorum_mode: QuorumMode,
}

impl GateReport {
    /// True iff no check is `incomplete`. Warnings never block.
    pub fn is_ready(&self) -> bool {
        !self
            .checks
            .iter()
            .any(|check| check.status == CheckStatus::Incomplete)
    }

    pub fn has_warnings(&self) -> bool {
        self.checks
            .iter()
            .any(|check| check.status == CheckStatus::Warning)
    }

    /// Checks that keep the gate closed
    pub fn blocking_checks(&self) -> Vec<&ReadinessCheck> {
        self.checks
            .iter()
            .filter(|check| check.status == CheckStatus::Incomplete)
            .collect()
    }

    /// Whether the recorded approvals meet the quorum. Advisory; never feeds `is_ready`.
    pub fn quorum_satisfied(&self) -> bool {
        quorum_satisfied(self.quorum_mode, &self.approvals)
    }
}

/// Approvers and quorum for a target stage.
///
/// Static table; every requirement starts out `pending`.
pub fn approval_requirements(target: StageKey) -> (Vec<ApprovalRequirement>, QuorumMode) {
    let table: &[(&str, &str, bool)] = match target {
        StageKey::Prioritization => &[
            ("Portfolio Council", "Portfolio Manager", true),
            ("Finance Partner", "Finance", true),
        ],
        StageKey::Experimentation => &[("Lab Squad Alpha", "Tech Lead", true)],
        StageKey::Evaluation => &[
            ("Governance Office", "Governance", true),
            ("Ops Data Guild", "Data Lead", false),
        ],
        StageKey::Scaling => &[
            ("Scale Factory", "Scale Lead", true),
            ("Executive Sponsor", "COO", true),
        ],
        StageKey::Ideation | StageKey::Scoping => &[],
    };

    let mode = match target {
        StageKey::Prioritization | StageKey::Scaling => QuorumMode::All,
        StageKey::Evaluation => QuorumMode::Majority,
        _ => QuorumMode::Single,
    };

    let requirements = table
        .iter()
        .map(|&(approver, role, required)| ApprovalRequirement {
            approver: approver.to_string(),
            role: role.to_string(),
            status: ApprovalStatus::Pending,
            required,
        })
        .collect();

    (requirements, mode)
}

/// Quorum rule over a set of approval requirements. An empty set is satisfied.
pub fn quorum_satisfied(mode: QuorumMode, approvals: &[ApprovalRequirement]) -> bool {
    if approvals.is_empty() {
        return true;
    }

    let approved = approvals
        .iter()
        .filter(|a| a.status == ApprovalStatus::Approved)
        .count();

    match mode {
        QuorumMode::Single => approved >= 1,
        QuorumMode::All => approvals
            .iter()
            .filter(|a| a.required)
            .all(|a| a.status == ApprovalStatus::Approved),
        QuorumMode::Majority => {
            let required_rejected = approvals
                .iter()
                .any(|a| a.required && a.status == ApprovalStatus::Rejected);
            approved * 2 > approvals.len() && !required_rejected
        }
    }
}

fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.to_lowercase().contains("not set")
}

/// Evaluate readiness of `detail` for a move into `target`.
pub fn evaluate(detail: &HypothesisDetail, target: StageKey) -> GateReport {
    let mut checks = Vec::new();

    for item in &detail.gating_checklist {
        match item.status {
            ChecklistStatus::Pending => checks.push(ReadinessCheck::incomplete(
                item.label.clone(),
                format!("Required checklist item \"{}\" is not completed", item.label),
            )),
            ChecklistStatus::InProgress => checks.push(ReadinessCheck::warning(
                item.label.clone(),
                format!("Checklist item \"{}\" is in progress", item.label),
            )),
            ChecklistStatus::Complete => {}
        }
    }

    if target == StageKey::Scoping && detail.description.trim().is_empty() {
        checks.push(ReadinessCheck::incomplete(
            "Description",
            "Hypothesis description is required for Scoping stage",
        ));
    }

    if target == StageKey::Prioritization
        && (is_unset(&detail.target_value) || is_unset(&detail.cost_avoidance))
    {
        checks.push(ReadinessCheck::incomplete(
            "ROI Metrics",
            "Target value and cost avoidance are required for Prioritization",
        ));
    }

    if target == StageKey::Experimentation && detail.linked_experiments.is_empty() {
        checks.push(ReadinessCheck::warning(
            "Experiments",
            "No experiments linked. Consider adding at least one experiment plan",
        ));
    }

    let (mut approvals, quorum_mode) = approval_requirements(target);
    for requirement in &mut approvals {
        if let Some(recorded) = detail
            .approvals
            .iter()
            .find(|a| a.approver_name.eq_ignore_ascii_case(&requirement.approver))
        {
            requirement.status = recorded.status;
        }
    }

    GateReport {
        target,
        checks,
        approvals,
        quorum_mode,
    }
}
