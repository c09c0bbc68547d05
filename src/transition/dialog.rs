//! Transition dialog: pick an adjacent stage and preview its gate

use crate::domain::{self, GateReport};
use crate::schemas::{HypothesisDetail, StageKey};

use super::controller::{TransitionOrigin, TransitionRequest};

/// Dialog state for moving the active hypothesis
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDialog {
    pub hypothesis_id: String,
    pub current: StageKey,
    /// Next stage first, then previous
    pub options: Vec<StageKey>,
    pub selected: Option<StageKey>,
    pub report: Option<GateReport>,
    detail: HypothesisDetail,
}

impl TransitionDialog {
    /// Open for a detail; the first option is preselected when there is one.
    pub fn open(detail: &HypothesisDetail) -> Self {
        let options = domain::get_dialog_targets(detail.stage);
        let dialog = Self {
            hypothesis_id: detail.id.clone(),
            current: detail.stage,
            options,
            selected: None,
            report: None,
            detail: detail.clone(),
        };
        match dialog.options.first().copied() {
            Some(first) => dialog.select(first),
            None => dialog,
        }
    }

    /// Choose a target and re-run the gate. Non-adjacent stages are ignored.
    pub fn select(mut self, stage: StageKey) -> Self {
        if !self.options.contains(&stage) {
            return self;
        }
        self.selected = Some(stage);
        self.report = Some(domain::evaluate(&self.detail, stage));
        self
    }

    pub fn select_next_option(self) -> Self {
        self.cycle(1)
    }

    pub fn select_previous_option(self) -> Self {
        let step = self.options.len().saturating_sub(1);
        self.cycle(step)
    }

    fn cycle(self, step: usize) -> Self {
        if self.options.is_empty() {
            return self;
        }
        let index = self
            .selected
            .and_then(|s| self.options.iter().position(|o| *o == s))
            .map(|i| (i + step) % self.options.len())
            .unwrap_or(0);
        let stage = self.options[index];
        self.select(stage)
    }

    /// Submit is allowed when a ready target is selected and nothing is in flight.
    pub fn can_submit(&self, busy: bool) -> bool {
        !busy
            && self.selected.is_some()
            && self.report.as_ref().is_some_and(GateReport::is_ready)
    }

    pub fn request(&self) -> Option<TransitionRequest> {
        self.selected.map(|to| {
            TransitionRequest::new(self.hypothesis_id.clone(), self.current, to, TransitionOrigin::Dialog)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{ChecklistItem, ChecklistStatus};

    fn make_detail(stage: StageKey) -> HypothesisDetail {
        HypothesisDetail::new("HYP-001", "Predictive downtime alerts", stage)
    }

    #[test]
    fn test_open_preselects_next_stage() {
        let dialog = TransitionDialog::open(&make_detail(StageKey::Scoping));
        assert_eq!(dialog.options, vec![StageKey::Prioritization, StageKey::Ideation]);
        assert_eq!(dialog.selected, Some(StageKey::Prioritization));
        assert_eq!(dialog.report.as_ref().unwrap().target, StageKey::Prioritization);
    }

    #[test]
    fn test_selection_reevaluates_gate() {
        let detail = make_detail(StageKey::Scoping).with_checklist(vec![ChecklistItem::new(
            "Data access",
            ChecklistStatus::Complete,
        )]);
        let dialog = TransitionDialog::open(&detail);
        // No ROI metrics yet
        assert!(!dialog.can_submit(false));

        let dialog = dialog.select(StageKey::Ideation);
        assert_eq!(dialog.report.as_ref().unwrap().target, StageKey::Ideation);
        assert!(dialog.can_submit(false));
        assert!(!dialog.can_submit(true));
    }

    #[test]
    fn test_select_ignores_non_adjacent_stage() {
        let dialog = TransitionDialog::open(&make_detail(StageKey::Scoping)).select(StageKey::Scaling);
        assert_eq!(dialog.selected, Some(StageKey::Prioritization));
    }

    #[test]
    fn test_cycling_wraps() {
        let dialog = TransitionDialog::open(&make_detail(StageKey::Scoping));
        let dialog = dialog.select_next_option();
        assert_eq!(dialog.selected, Some(StageKey::Ideation));
        let dialog = dialog.select_next_option();
        assert_eq!(dialog.selected, Some(StageKey::Prioritization));
        let dialog = dialog.select_previous_option();
        assert_eq!(dialog.selected, Some(StageKey::Ideation));
    }

    #[test]
    fn test_terminal_stage_offers_only_previous() {
        let dialog = TransitionDialog::open(&make_detail(StageKey::Scaling));
        assert_eq!(dialog.options, vec![StageKey::Evaluation]);
    }

    #[test]
    fn test_request_is_dialog_origin() {
        let dialog = TransitionDialog::open(&make_detail(StageKey::Ideation));
        let request = dialog.request().unwrap();
        assert_eq!(request.from, StageKey::Ideation);
        assert_eq!(request.to, StageKey::Scoping);
        assert_eq!(request.origin, TransitionOrigin::Dialog);
    }
}
