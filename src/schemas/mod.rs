//! Schema types for hypoboard
//!
//! All types mirror the JSON served by the hypothesis backend.

mod config;
mod dashboard;
mod hypothesis;
mod stage;

pub use config::Config;
pub use dashboard::{Activity, Dashboard, Highlights, Task};
pub use hypothesis::{
    Approval, ApprovalStatus, ChecklistItem, ChecklistStatus, HypothesisDetail, HypothesisItem,
    LinkedExperiment, StageSummary, StageUpdate,
};
pub use stage::{StageHealth, StageKey};
