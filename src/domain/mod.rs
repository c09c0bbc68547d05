//! Domain logic for lifecycle stages, board moves and readiness gates

pub mod board;
pub mod gate;
mod stages;


pub use board::{find_item, item_ids, move_item, stage_of, total_items};
pub use gate::{
    approval_requirements, evaluate, quorum_satisfied, ApprovalRequirement, CheckStatus,
    GateReport, QuorumMode, ReadinessCheck,
};
pub use stages::{
    get_dialog_targets, get_next_stage, get_previous_stage, get_stage_index, is_forward,
    STAGE_ORDER,
};
