//! Tui command - Run the interactive board

use crate::errors::Result;
use crate::schemas::Config;
use crate::sync::{HttpHypothesisApi, SyncEngine};
use crate::transition::TransitionController;
use crate::tui::TuiRunner;
use crate::workspace::WorkspaceState;

pub async fn run(config: &Config) -> Result<()> {
    let engine = SyncEngine::new(HttpHypothesisApi::new(config.api_base_url.clone()));
    let workspace = WorkspaceState::new(config.toast_ttl()).into_shared();

    // An unreachable backend still opens the board, with the error in the banner
    if let Err(err) = engine.resync(&workspace).await {
        tracing::warn!(error = %err, "Initial dashboard load failed");
        workspace
            .lock()
            .await
            .set_error(format!("Could not load board: {}", err));
    }

    let controller = TransitionController::from_config(engine, config);
    let mut runner = TuiRunner::new(workspace, controller, config.drag_threshold);
    runner.run().await
}
