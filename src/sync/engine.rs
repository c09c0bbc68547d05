//! Optimistic board updates and server reconciliation
//!
//! The engine owns the network round-trip and the order of refetches. Shared
//! state is locked only for the synchronous apply steps.

use std::sync::Arc;

use crate::domain;
use crate::errors::Result;
use crate::schemas::{HypothesisDetail, StageKey, StageSummary, StageUpdate};
use crate::workspace::SharedWorkspace;

use super::api::HypothesisApi;

pub struct SyncEngine<A: HypothesisApi> {
    api: Arc<A>,
}

impl<A: HypothesisApi> Clone for SyncEngine<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl<A: HypothesisApi> SyncEngine<A> {
    pub fn new(api: A) -> Self {
        Self { api: Arc::new(api) }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Move the card locally and return the partition as it was before.
    pub async fn apply_optimistic(
        &self,
        workspace: &SharedWorkspace,
        item_id: &str,
        from: StageKey,
        to: StageKey,
    ) -> Vec<StageSummary> {
        let mut state = workspace.lock().await;
        let next = domain::move_item(&state.stages, item_id, from, to);
        std::mem::replace(&mut state.stages, next)
    }

    /// Put a previously captured partition back in place
    pub async fn rollback(&self, workspace: &SharedWorkspace, snapshot: Vec<StageSummary>) {
        workspace.lock().await.stages = snapshot;
    }

    /// Send the stage move to the backend
    pub async fn commit_stage(&self, id: &str, to: StageKey, actor: &str) -> Result<HypothesisDetail> {
        let update = StageUpdate {
            stage: to,
            updated_by: actor.to_string(),
        };
        self.api.update_stage(id, &update).await
    }

    /// Fetch a detail without touching the workspace
    pub async fn fetch_detail(&self, id: &str) -> Result<HypothesisDetail> {
        self.api.fetch_detail(id).await
    }

    /// Refetch the detail and apply it, then refetch the dashboard and apply it.
    ///
    /// The dashboard request is not issued until the detail is in place.
    pub async fn reconcile(&self, workspace: &SharedWorkspace, id: &str) -> Result<HypothesisDetail> {
        let detail = self.refresh_detail(workspace, id).await?;
        self.resync(workspace).await?;
        Ok(detail)
    }

    /// Replace board data with the server's current dashboard
    pub async fn resync(&self, workspace: &SharedWorkspace) -> Result<()> {
        let dashboard = self.api.fetch_dashboard().await?;
        workspace.lock().await.apply_dashboard(dashboard);
        Ok(())
    }

    /// Load a detail into the panel unless a newer request overtook this one.
    pub async fn refresh_detail(&self, workspace: &SharedWorkspace, id: &str) -> Result<HypothesisDetail> {
        let token = workspace.lock().await.begin_detail_request();
        let detail = self.api.fetch_detail(id).await?;
        workspace.lock().await.apply_detail(token, detail.clone());
        Ok(detail)
    }
}
