//! Board command - Print the kanban columns

use std::fmt::Write as _;
use std::path::Path;

use crate::errors::{BoardError, Result};
use crate::fs;
use crate::schemas::{Config, Dashboard};
use crate::sync::{HttpHypothesisApi, HypothesisApi};

/// Fetch the dashboard and print it
pub async fn run(config: &Config, json: bool, out: Option<&Path>) -> Result<()> {
    let api = HttpHypothesisApi::new(config.api_base_url.clone());
    let dashboard = api.fetch_dashboard().await?;

    if let Some(path) = out {
        fs::write_snapshot(path, &dashboard)?;
        tracing::info!(path = %path.display(), "Wrote board snapshot");
    }

    if json {
        let text = serde_json::to_string_pretty(&dashboard)
            .map_err(|e| BoardError::InvalidJson(e.to_string()))?;
        println!("{}", text);
    } else {
        print!("{}", format_board(&dashboard));
    }
    Ok(())
}

/// One block per stage: header with count, then one line per card
pub fn format_board(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    for stage in &dashboard.stages {
        let _ = writeln!(
            out,
            "{} ({}) [{}, SLA {}h]",
            stage.title,
            stage.items.len(),
            stage.stage_health,
            stage.sla_hours
        );
        for item in &stage.items {
            let _ = writeln!(out, "  {:<10} {}", item.id, item.title);
        }
    }
    out
}
