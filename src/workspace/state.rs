//! Client-side board state
//!
//! One explicit value holds everything the board and detail panel render.
//! Mutators are synchronous and short so a shared lock is never held across
//! network calls.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain;
use crate::schemas::{Activity, Dashboard, Highlights, HypothesisDetail, StageSummary, Task};

use super::toast::{ToastQueue, ToastVariant};

/// Workspace state shared between the render loop and transition tasks
pub type SharedWorkspace = Arc<Mutex<WorkspaceState>>;

/// Phase of the stage transition in flight. The result of a finished attempt
/// is its `TransitionOutcome`; the workspace always returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Busy,
}

/// Token identifying one detail fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailToken(u64);

#[derive(Debug, Clone)]
pub struct WorkspaceState {
    pub stages: Vec<StageSummary>,
    pub highlights: Highlights,
    pub tasks: Vec<Task>,
    pub activity: Vec<Activity>,
    pub active_detail: Option<HypothesisDetail>,
    /// Persistent error banner, cleared when the next transition starts
    pub error: Option<String>,
    /// Mirrors the busy gate for rendering
    pub busy: bool,
    pub phase: TransitionPhase,
    pub toasts: ToastQueue,
    pub refreshed_at: Option<DateTime<Utc>>,
    detail_seq: u64,
}

impl WorkspaceState {
    /// Empty workspace, nothing loaded yet
    pub fn new(toast_ttl: Duration) -> Self {
        Self {
            stages: Vec::new(),
            highlights: Highlights::default(),
            tasks: Vec::new(),
            activity: Vec::new(),
            active_detail: None,
            error: None,
            busy: false,
            phase: TransitionPhase::Idle,
            toasts: ToastQueue::new(toast_ttl),
            refreshed_at: None,
            detail_seq: 0,
        }
    }

    /// Workspace seeded from a dashboard snapshot
    pub fn from_dashboard(dashboard: Dashboard, toast_ttl: Duration) -> Self {
        let mut state = Self::new(toast_ttl);
        state.apply_dashboard(dashboard);
        state
    }

    /// Wrap into the shared handle used by the controller and the TUI
    pub fn into_shared(self) -> SharedWorkspace {
        Arc::new(Mutex::new(self))
    }

    /// Replace board data with a server snapshot.
    ///
    /// The focus hypothesis only becomes the active detail when none is open.
    pub fn apply_dashboard(&mut self, dashboard: Dashboard) {
        self.stages = dashboard.stages;
        self.highlights = dashboard.highlights;
        self.tasks = dashboard.tasks;
        self.activity = dashboard.activity;
        if self.active_detail.is_none() {
            self.active_detail = dashboard.focus_hypothesis;
        }
        self.refreshed_at = Some(Utc::now());
    }

    /// Start a detail fetch; later tokens supersede earlier ones.
    pub fn begin_detail_request(&mut self) -> DetailToken {
        self.detail_seq += 1;
        DetailToken(self.detail_seq)
    }

    /// Apply a fetched detail if no newer fetch has started. Returns whether it was applied.
    pub fn apply_detail(&mut self, token: DetailToken, detail: HypothesisDetail) -> bool {
        if token.0 != self.detail_seq {
            tracing::debug!(id = %detail.id, "Dropping stale detail response");
            return false;
        }
        self.active_detail = Some(detail);
        true
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn push_toast(&mut self, message: impl Into<String>, variant: ToastVariant) -> u64 {
        self.toasts.push(message, variant, Instant::now())
    }

    /// Drop toasts whose display time is over
    pub fn expire_toasts(&mut self, now: Instant) {
        self.toasts.expire(now);
    }

    pub fn total_items(&self) -> usize {
        domain::total_items(&self.stages)
    }
}
