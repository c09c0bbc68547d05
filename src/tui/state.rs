//! TUI-local view state
//!
//! Board data lives in the shared workspace; this only tracks what the
//! terminal front end itself has open.

use crate::domain::{CheckStatus, GateReport};
use crate::transition::TransitionDialog;

#[derive(Debug, Clone, Default)]
pub struct TuiState {
    pub dialog: Option<TransitionDialog>,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new TuiState with the dialog replaced
    pub fn with_dialog(mut self, dialog: Option<TransitionDialog>) -> Self {
        self.dialog = dialog;
        self
    }

    /// Return a new TuiState with the dialog passed through `f`
    pub fn map_dialog(mut self, f: impl FnOnce(TransitionDialog) -> TransitionDialog) -> Self {
        self.dialog = self.dialog.map(f);
        self
    }

    pub fn with_quit(mut self) -> Self {
        self.should_quit = true;
        self
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }
}

/// Banner text for a move the readiness gate refused
pub fn blocked_message(report: &GateReport) -> String {
    let fields: Vec<&str> = report
        .checks
        .iter()
        .filter(|c| c.status == CheckStatus::Incomplete)
        .map(|c| c.field.as_str())
        .collect();
    format!("Move to {} blocked: {}", report.target, fields.join(", "))
}
