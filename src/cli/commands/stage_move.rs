//! Move command - Run one stage transition through the controller

use crate::domain;
use crate::errors::{BoardError, Result};
use crate::schemas::{Config, StageKey};
use crate::sync::{HttpHypothesisApi, HypothesisApi, SyncEngine};
use crate::transition::{
    success_message, TransitionController, TransitionOrigin, TransitionOutcome, TransitionRequest,
};
use crate::workspace::WorkspaceState;

use super::gate::format_report;

/// Move `id` to `to`. Blocked and failed moves are returned as errors so the
/// process exits non-zero.
pub async fn run(config: &Config, id: &str, to: StageKey, actor: Option<&str>, drag: bool) -> Result<()> {
    let engine = SyncEngine::new(HttpHypothesisApi::new(config.api_base_url.clone()));
    let dashboard = engine.api().fetch_dashboard().await?;
    let from = domain::stage_of(&dashboard.stages, id)
        .ok_or_else(|| BoardError::NotFound(id.to_string()))?;

    let workspace = WorkspaceState::from_dashboard(dashboard, config.toast_ttl()).into_shared();
    let controller = TransitionController::new(engine, actor.unwrap_or(config.actor.as_str()))
        .with_drag_gating(config.gate_drag_transitions);
    let origin = if drag {
        TransitionOrigin::Drag
    } else {
        TransitionOrigin::Dialog
    };

    let outcome = controller
        .submit(&workspace, TransitionRequest::new(id, from, to, origin))
        .await?;
    report_outcome(id, to, outcome)
}

fn report_outcome(id: &str, to: StageKey, outcome: TransitionOutcome) -> Result<()> {
    match outcome {
        TransitionOutcome::Moved { .. } => {
            println!("{}", success_message(to));
            Ok(())
        }
        TransitionOutcome::Unchanged => {
            println!("{} is already in {}", id, to);
            Ok(())
        }
        TransitionOutcome::Blocked(report) => {
            print!("{}", format_report(id, &report));
            let blocking = report.blocking_checks();
            let fields: Vec<&str> = blocking.iter().map(|c| c.field.as_str()).collect();
            Err(BoardError::wrap(
                fields.join(", "),
                format!("Move of {} to {} blocked", id, to),
            ))
        }
        TransitionOutcome::Failed { message } => {
            Err(BoardError::wrap(message, format!("Move of {} to {} failed", id, to)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::HypothesisDetail;

    #[test]
    fn test_blocked_outcome_is_an_error() {
        let detail = HypothesisDetail::new("HYP-001", "Predictive downtime alerts", StageKey::Ideation);
        let report = domain::evaluate(&detail, StageKey::Scoping);

        let err = report_outcome("HYP-001", StageKey::Scoping, TransitionOutcome::Blocked(report)).unwrap_err();
        assert_eq!(err.to_string(), "Move of HYP-001 to SCOPING blocked: Description");
    }

    #[test]
    fn test_failed_outcome_is_an_error() {
        let outcome = TransitionOutcome::Failed {
            message: "Stage move failed".to_string(),
        };
        let err = report_outcome("HYP-001", StageKey::Scoping, outcome).unwrap_err();
        assert_eq!(err.code(), "WRAPPED_ERROR");
    }

    #[test]
    fn test_unchanged_is_ok() {
        assert!(report_outcome("HYP-001", StageKey::Scoping, TransitionOutcome::Unchanged).is_ok());
    }
}
