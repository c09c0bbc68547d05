//! Stage lifecycle definitions
//!
//! The lifecycle follows a linear progression:
//! ideation → scoping → prioritization → experimentation → evaluation → scaling

use crate::schemas::StageKey;

/// The canonical ordering of lifecycle stages.
///
/// Board columns are rendered in this order and "forward" is measured against it.
pub const STAGE_ORDER: &[StageKey] = &[
    StageKey::Ideation,
    StageKey::Scoping,
    StageKey::Prioritization,
    StageKey::Experimentation,
    StageKey::Evaluation,
    StageKey::Scaling,
];

/// Get the 0-based index of a stage in the lifecycle.
pub fn get_stage_index(stage: StageKey) -> usize {
    STAGE_ORDER
        .iter()
        .position(|&s| s == stage)
        .unwrap_or(usize::MAX)
}

/// Returns the next stage, or None for the terminal "scaling" stage.
pub fn get_next_stage(current: StageKey) -> Option<StageKey> {
    let index = get_stage_index(current);
    STAGE_ORDER.get(index.checked_add(1)?).copied()
}

/// Returns the previous stage, or None for "ideation".
pub fn get_previous_stage(current: StageKey) -> Option<StageKey> {
    let index = get_stage_index(current);
    STAGE_ORDER.get(index.checked_sub(1)?).copied()
}

/// Targets offered by the transition dialog: one step forward, then one step back.
pub fn get_dialog_targets(current: StageKey) -> Vec<StageKey> {
    get_next_stage(current)
        .into_iter()
        .chain(get_previous_stage(current))
        .collect()
}

/// True when `to` lies later in the lifecycle than `from`.
pub fn is_forward(from: StageKey, to: StageKey) -> bool {
    get_stage_index(to) > get_stage_index(from)
}
