//! Board partition logic
//!
//! Pure functions over the stage → items partition. Callers apply `move_item`
//! to local state before any network call.

use crate::schemas::{HypothesisItem, StageKey, StageSummary};

/// Pure function that moves a card between stage columns.
///
/// - Never mutates the input partition
/// - Removes the card from every column, then prepends it to `to` with its
///   stage tag updated
/// - Returns an unchanged copy when `from == to`, when the card is not in
///   `from`, or when the partition has no `to` column
pub fn move_item(
    stages: &[StageSummary],
    item_id: &str,
    from: StageKey,
    to: StageKey,
) -> Vec<StageSummary> {
    if from == to {
        return stages.to_vec();
    }

    let moved = stages
        .iter()
        .find(|stage| stage.key == from)
        .and_then(|stage| stage.items.iter().find(|item| item.id == item_id));

    let moved = match moved {
        Some(item) if stages.iter().any(|stage| stage.key == to) => item.clone().with_stage(to),
        Some(_) => {
            tracing::warn!(item_id, %to, "Board has no target column; move ignored");
            return stages.to_vec();
        }
        None => {
            tracing::warn!(item_id, %from, "Card not found in source column; move ignored");
            return stages.to_vec();
        }
    };

    let mut next: Vec<StageSummary> = stages
        .iter()
        .map(|stage| {
            let mut stage = stage.clone();
            stage.items.retain(|item| item.id != item_id);
            stage
        })
        .collect();

    if let Some(target) = next.iter_mut().find(|stage| stage.key == to) {
        target.items.insert(0, moved);
    }

    next
}

/// Number of cards across all columns
pub fn total_items(stages: &[StageSummary]) -> usize {
    stages.iter().map(|stage| stage.items.len()).sum()
}

/// All card ids, column by column
pub fn item_ids(stages: &[StageSummary]) -> Vec<&str> {
    stages
        .iter()
        .flat_map(|stage| stage.items.iter().map(|item| item.id.as_str()))
        .collect()
}

/// Look up a card by id
pub fn find_item<'a>(stages: &'a [StageSummary], item_id: &str) -> Option<&'a HypothesisItem> {
    stages
        .iter()
        .flat_map(|stage| stage.items.iter())
        .find(|item| item.id == item_id)
}

/// Column currently holding the card
pub fn stage_of(stages: &[StageSummary], item_id: &str) -> Option<StageKey> {
    stages
        .iter()
        .find(|stage| stage.items.iter().any(|item| item.id == item_id))
        .map(|stage| stage.key)
}
