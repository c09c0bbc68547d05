//! Show command - Show details of a hypothesis

use std::fmt::Write as _;

use crate::errors::{BoardError, Result};
use crate::schemas::{Config, HypothesisDetail};
use crate::sync::{HttpHypothesisApi, HypothesisApi};

/// Show details of a hypothesis
pub async fn run(config: &Config, id: &str, json: bool) -> Result<()> {
    let api = HttpHypothesisApi::new(config.api_base_url.clone());
    let detail = api.fetch_detail(id).await?;

    if json {
        let text = serde_json::to_string_pretty(&detail)
            .map_err(|e| BoardError::InvalidJson(e.to_string()))?;
        println!("{}", text);
    } else {
        print!("{}", format_detail(&detail));
    }
    Ok(())
}

pub fn format_detail(detail: &HypothesisDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  {}", detail.id, detail.title);
    let _ = writeln!(out, "Stage:   {}", detail.stage);
    let _ = writeln!(out, "Owner:   {}", detail.owner);
    if !detail.sponsor.is_empty() {
        let _ = writeln!(out, "Sponsor: {}", detail.sponsor);
    }
    let _ = writeln!(
        out,
        "Scores:  impact {:.1} / feasibility {:.1} / confidence {:.1}",
        detail.impact, detail.feasibility, detail.confidence
    );
    if !detail.target_value.is_empty() || !detail.cost_avoidance.is_empty() {
        let _ = writeln!(
            out,
            "ROI:     target {} / cost avoidance {}",
            detail.target_value, detail.cost_avoidance
        );
    }
    if !detail.description.trim().is_empty() {
        let _ = writeln!(out, "\n{}", detail.description.trim());
    }

    if !detail.gating_checklist.is_empty() {
        let _ = writeln!(out, "\nChecklist:");
        for item in &detail.gating_checklist {
            let _ = writeln!(out, "  [{}] {}", checklist_mark(item.status), item.label);
        }
    }
    if !detail.linked_experiments.is_empty() {
        let _ = writeln!(out, "\nExperiments:");
        for experiment in &detail.linked_experiments {
            let _ = writeln!(out, "  {} {} ({})", experiment.id, experiment.title, experiment.status);
        }
    }
    if !detail.approvals.is_empty() {
        let _ = writeln!(out, "\nApprovals:");
        for approval in &detail.approvals {
            let _ = writeln!(out, "  {} - {}", approval.approver_name, approval.status);
        }
    }
    out
}

fn checklist_mark(status: crate::schemas::ChecklistStatus) -> char {
    use crate::schemas::ChecklistStatus;
    match status {
        ChecklistStatus::Complete => 'x',
        ChecklistStatus::InProgress => '~',
        ChecklistStatus::Pending => ' ',
    }
}
