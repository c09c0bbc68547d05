//! Gate command - Evaluate readiness for a target stage

use std::fmt::Write as _;

use crate::domain::{self, CheckStatus, GateReport};
use crate::errors::{BoardError, Result};
use crate::schemas::{Config, StageKey};
use crate::sync::{HttpHypothesisApi, HypothesisApi};

pub async fn run(config: &Config, id: &str, target: StageKey, json: bool) -> Result<()> {
    let api = HttpHypothesisApi::new(config.api_base_url.clone());
    let detail = api.fetch_detail(id).await?;
    let report = domain::evaluate(&detail, target);

    if json {
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| BoardError::InvalidJson(e.to_string()))?;
        println!("{}", text);
    } else {
        print!("{}", format_report(id, &report));
    }
    Ok(())
}

/// Readiness verdict, checks, then the approval quorum
pub fn format_report(id: &str, report: &GateReport) -> String {
    let mut out = String::new();
    let verdict = if report.is_ready() { "ready" } else { "blocked" };
    let _ = writeln!(out, "{} -> {}: {}", id, report.target, verdict);

    for check in &report.checks {
        let mark = match check.status {
            CheckStatus::Complete => "ok",
            CheckStatus::Incomplete => "MISSING",
            CheckStatus::Warning => "warn",
        };
        let _ = writeln!(out, "  {:<8} {}: {}", mark, check.field, check.message);
    }

    if !report.approvals.is_empty() {
        let quorum = if report.quorum_satisfied() { "met" } else { "not met" };
        let _ = writeln!(out, "Approvals ({} quorum, {}):", report.quorum_mode, quorum);
        for approval in &report.approvals {
            let required = if approval.required { "required" } else { "optional" };
            let _ = writeln!(
                out,
                "  {} ({}, {}): {}",
                approval.approver, approval.role, required, approval.status
            );
        }
    }
    out
}
