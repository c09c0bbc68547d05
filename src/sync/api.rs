//! Backend boundary consumed by the sync engine

use async_trait::async_trait;

use crate::errors::Result;
use crate::schemas::{Dashboard, HypothesisDetail, StageUpdate};

/// The three calls the stage-transition flow makes against the hypothesis service.
#[async_trait]
pub trait HypothesisApi: Send + Sync {
    /// `GET /hypotheses/dashboard`
    async fn fetch_dashboard(&self) -> Result<Dashboard>;

    /// `GET /hypotheses/{id}`
    async fn fetch_detail(&self, id: &str) -> Result<HypothesisDetail>;

    /// `PATCH /hypotheses/{id}` with `{ stage, updatedBy }`
    async fn update_stage(&self, id: &str, update: &StageUpdate) -> Result<HypothesisDetail>;
}
