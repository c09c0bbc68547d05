//! In-memory backend that records every call, for unit tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain;
use crate::errors::{BoardError, Result};
use crate::schemas::{Dashboard, HypothesisDetail, StageUpdate};

use super::api::HypothesisApi;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Dashboard,
    Detail(String),
    Patch(String, StageUpdate),
}

#[derive(Default)]
struct Server {
    dashboard: Option<Dashboard>,
    details: HashMap<String, HypothesisDetail>,
    calls: Vec<ApiCall>,
    patch_failure: Option<(u16, String)>,
    dashboard_failure: Option<(u16, String)>,
    detail_failure: Option<(u16, String)>,
}

/// Backend double: PATCH moves the card server-side, failures are injectable.
#[derive(Clone, Default)]
pub struct FakeApi {
    server: Arc<Mutex<Server>>,
    patch_hold: Option<Arc<Notify>>,
    detail_hold: Arc<Mutex<Option<Arc<Notify>>>>,
}

impl FakeApi {
    pub fn new(dashboard: Dashboard, details: Vec<HypothesisDetail>) -> Self {
        let server = Server {
            dashboard: Some(dashboard),
            details: details.into_iter().map(|d| (d.id.clone(), d)).collect(),
            ..Default::default()
        };
        Self {
            server: Arc::new(Mutex::new(server)),
            patch_hold: None,
            detail_hold: Arc::default(),
        }
    }

    /// PATCH waits until the returned handle is notified
    pub fn hold_patches(mut self) -> (Self, Arc<Notify>) {
        let notify = Arc::new(Notify::new());
        self.patch_hold = Some(notify.clone());
        (self, notify)
    }

    /// The next detail fetch waits until the returned handle is notified
    pub fn hold_next_detail(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.detail_hold.lock().unwrap() = Some(notify.clone());
        notify
    }

    pub fn fail_patch(&self, status: u16, body: &str) {
        self.server.lock().unwrap().patch_failure = Some((status, body.to_string()));
    }

    pub fn fail_dashboard(&self, status: u16, body: &str) {
        self.server.lock().unwrap().dashboard_failure = Some((status, body.to_string()));
    }

    pub fn fail_detail(&self, status: u16, body: &str) {
        self.server.lock().unwrap().detail_failure = Some((status, body.to_string()));
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.server.lock().unwrap().calls.clone()
    }

    pub fn dashboard(&self) -> Dashboard {
        self.server.lock().unwrap().dashboard.clone().unwrap()
    }
}

fn failure((status, message): &(u16, String)) -> BoardError {
    BoardError::Api {
        status: *status,
        message: message.clone(),
    }
}

#[async_trait]
impl HypothesisApi for FakeApi {
    async fn fetch_dashboard(&self) -> Result<Dashboard> {
        let mut server = self.server.lock().unwrap();
        server.calls.push(ApiCall::Dashboard);
        if let Some(f) = &server.dashboard_failure {
            return Err(failure(f));
        }
        server
            .dashboard
            .clone()
            .ok_or_else(|| BoardError::NotFound("dashboard".into()))
    }

    async fn fetch_detail(&self, id: &str) -> Result<HypothesisDetail> {
        self.server
            .lock()
            .unwrap()
            .calls
            .push(ApiCall::Detail(id.to_string()));

        let hold = self.detail_hold.lock().unwrap().take();
        if let Some(hold) = hold {
            hold.notified().await;
        }

        let server = self.server.lock().unwrap();
        if let Some(f) = &server.detail_failure {
            return Err(failure(f));
        }
        server
            .details
            .get(id)
            .cloned()
            .ok_or_else(|| BoardError::NotFound(id.to_string()))
    }

    async fn update_stage(&self, id: &str, update: &StageUpdate) -> Result<HypothesisDetail> {
        self.server
            .lock()
            .unwrap()
            .calls
            .push(ApiCall::Patch(id.to_string(), update.clone()));

        if let Some(hold) = &self.patch_hold {
            hold.notified().await;
        }

        let mut server = self.server.lock().unwrap();
        if let Some(f) = &server.patch_failure {
            return Err(failure(f));
        }

        if let Some(dashboard) = server.dashboard.as_mut() {
            if let Some(from) = domain::stage_of(&dashboard.stages, id) {
                dashboard.stages = domain::move_item(&dashboard.stages, id, from, update.stage);
            }
        }
        let detail = server
            .details
            .get_mut(id)
            .ok_or_else(|| BoardError::NotFound(id.to_string()))?;
        detail.stage = update.stage;
        Ok(detail.clone())
    }
}

/// Two hypotheses: HYP-001 in IDEATION (ready for SCOPING) and HYP-002 in SCOPING
/// with an unfinished checklist.
pub fn sample_board() -> (Dashboard, Vec<HypothesisDetail>) {
    use crate::schemas::{ChecklistItem, ChecklistStatus, HypothesisItem, StageKey, StageSummary};

    let stages = domain::STAGE_ORDER
        .iter()
        .map(|&key| {
            let items = match key {
                StageKey::Ideation => vec![HypothesisItem::new(
                    "HYP-001",
                    "Predictive downtime alerts",
                    StageKey::Ideation,
                )],
                StageKey::Scoping => vec![HypothesisItem::new(
                    "HYP-002",
                    "Invoice triage copilot",
                    StageKey::Scoping,
                )],
                _ => Vec::new(),
            };
            StageSummary::new(key).with_items(items)
        })
        .collect();

    let details = vec![
        HypothesisDetail::new("HYP-001", "Predictive downtime alerts", StageKey::Ideation)
            .with_description("Cut unplanned downtime on line 4")
            .with_checklist(vec![ChecklistItem::new(
                "Problem statement",
                ChecklistStatus::Complete,
            )]),
        HypothesisDetail::new("HYP-002", "Invoice triage copilot", StageKey::Scoping)
            .with_description("Route invoices automatically")
            .with_checklist(vec![ChecklistItem::new(
                "Data access agreement",
                ChecklistStatus::Pending,
            )]),
    ];

    (Dashboard::from_stages(stages), details)
}
