//! Stage transition orchestration
//!
//! A transition runs same-stage check, gate, optimistic move, PATCH and then
//! reconciliation. Backend failures resolve to [`TransitionOutcome::Failed`];
//! the only error `submit` returns is [`BoardError::TransitionInFlight`].

use tracing::{info, warn};

use crate::domain::{self, GateReport};
use crate::errors::{BoardError, Result};
use crate::schemas::{Config, HypothesisDetail, StageKey, StageSummary};
use crate::sync::{HypothesisApi, SyncEngine};
use crate::workspace::{SharedWorkspace, ToastVariant, TransitionPhase};

use super::guard::BusyGate;

/// Banner fallback and error toast text
pub const STAGE_MOVE_FAILED: &str = "Stage move failed";

/// Where a transition request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOrigin {
    Drag,
    Dialog,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    pub item_id: String,
    pub from: StageKey,
    pub to: StageKey,
    pub origin: TransitionOrigin,
}

impl TransitionRequest {
    pub fn new(item_id: impl Into<String>, from: StageKey, to: StageKey, origin: TransitionOrigin) -> Self {
        Self {
            item_id: item_id.into(),
            from,
            to,
            origin,
        }
    }
}

/// Result of one transition attempt
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// Server accepted the move and the workspace is reconciled
    Moved { detail: HypothesisDetail },
    /// Source and target were the same stage
    Unchanged,
    /// Readiness gate refused the move; nothing was changed
    Blocked(GateReport),
    /// Backend rejected the move or was unreachable; the board was resynced
    Failed { message: String },
}

impl TransitionOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, TransitionOutcome::Moved { .. })
    }
}

pub fn success_message(stage: StageKey) -> String {
    format!("Hypothesis moved to {}", stage)
}

pub struct TransitionController<A: HypothesisApi> {
    engine: SyncEngine<A>,
    gate: BusyGate,
    actor: String,
    gate_drag: bool,
}

impl<A: HypothesisApi> Clone for TransitionController<A> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            gate: self.gate.clone(),
            actor: self.actor.clone(),
            gate_drag: self.gate_drag,
        }
    }
}

impl<A: HypothesisApi> TransitionController<A> {
    pub fn new(engine: SyncEngine<A>, actor: impl Into<String>) -> Self {
        Self {
            engine,
            gate: BusyGate::new(),
            actor: actor.into(),
            gate_drag: true,
        }
    }

    pub fn from_config(engine: SyncEngine<A>, config: &Config) -> Self {
        Self::new(engine, config.actor.clone()).with_drag_gating(config.gate_drag_transitions)
    }

    pub fn with_drag_gating(mut self, enabled: bool) -> Self {
        self.gate_drag = enabled;
        self
    }

    pub fn engine(&self) -> &SyncEngine<A> {
        &self.engine
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    fn should_gate(&self, request: &TransitionRequest) -> bool {
        match request.origin {
            TransitionOrigin::Dialog => true,
            TransitionOrigin::Drag => self.gate_drag && domain::is_forward(request.from, request.to),
        }
    }

    /// Run one transition against the shared workspace.
    pub async fn submit(
        &self,
        workspace: &SharedWorkspace,
        request: TransitionRequest,
    ) -> Result<TransitionOutcome> {
        let _permit = self.gate.try_acquire()?;

        if request.from == request.to {
            return Ok(TransitionOutcome::Unchanged);
        }

        info!(
            id = %request.item_id,
            from = %request.from,
            to = %request.to,
            origin = ?request.origin,
            "Starting stage transition"
        );

        // The gate fetch already counts as in flight
        {
            let mut state = workspace.lock().await;
            state.busy = true;
            state.phase = TransitionPhase::Busy;
        }

        if self.should_gate(&request) {
            match self.gate_report(workspace, &request).await {
                Ok(report) if !report.is_ready() => {
                    info!(
                        id = %request.item_id,
                        blocking = report.blocking_checks().len(),
                        "Transition blocked by readiness gate"
                    );
                    self.finish(workspace).await;
                    return Ok(TransitionOutcome::Blocked(report));
                }
                Ok(_) => {}
                Err(err) => {
                    let outcome = self.fail(workspace, &request, err, None).await;
                    self.finish(workspace).await;
                    return Ok(outcome);
                }
            }
        }

        workspace.lock().await.clear_error();
        let snapshot = self
            .engine
            .apply_optimistic(workspace, &request.item_id, request.from, request.to)
            .await;

        let outcome = match self.commit_and_reconcile(workspace, &request).await {
            Ok(detail) => {
                info!(id = %request.item_id, to = %request.to, "Stage transition succeeded");
                workspace
                    .lock()
                    .await
                    .push_toast(success_message(request.to), ToastVariant::Success);
                TransitionOutcome::Moved { detail }
            }
            Err(err) => self.fail(workspace, &request, err, Some(snapshot)).await,
        };

        self.finish(workspace).await;
        Ok(outcome)
    }

    /// Gate against the open detail when it is this item, otherwise a fresh fetch.
    async fn gate_report(&self, workspace: &SharedWorkspace, request: &TransitionRequest) -> Result<GateReport> {
        let open = workspace
            .lock()
            .await
            .active_detail
            .clone()
            .filter(|detail| detail.id == request.item_id);
        let detail = match open {
            Some(detail) => detail,
            None => self.engine.fetch_detail(&request.item_id).await?,
        };
        Ok(domain::evaluate(&detail, request.to))
    }

    async fn commit_and_reconcile(
        &self,
        workspace: &SharedWorkspace,
        request: &TransitionRequest,
    ) -> Result<HypothesisDetail> {
        self.engine
            .commit_stage(&request.item_id, request.to, &self.actor)
            .await?;
        self.engine.reconcile(workspace, &request.item_id).await
    }

    async fn fail(
        &self,
        workspace: &SharedWorkspace,
        request: &TransitionRequest,
        err: BoardError,
        snapshot: Option<Vec<StageSummary>>,
    ) -> TransitionOutcome {
        warn!(id = %request.item_id, to = %request.to, error = %err, "Stage transition failed");
        let message = err
            .user_message()
            .unwrap_or_else(|| STAGE_MOVE_FAILED.to_string());
        {
            let mut state = workspace.lock().await;
            state.set_error(message.clone());
            state.push_toast(STAGE_MOVE_FAILED, ToastVariant::Error);
        }

        if let Err(resync_err) = self.engine.resync(workspace).await {
            if let Some(snapshot) = snapshot {
                warn!(error = %resync_err, "Resync failed, rolling back optimistic move");
                self.engine.rollback(workspace, snapshot).await;
            } else {
                warn!(error = %resync_err, "Resync after failed transition also failed");
            }
        }

        TransitionOutcome::Failed { message }
    }

    async fn finish(&self, workspace: &SharedWorkspace) {
        let mut state = workspace.lock().await;
        state.busy = false;
        state.phase = TransitionPhase::Idle;
    }
}
