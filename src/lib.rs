//! Hypoboard - Kanban board and stage-transition gates for AI project hypotheses
//!
//! This library provides the core functionality for the hypoboard CLI, including:
//! - Schema definitions for stages, hypotheses, dashboards and config
//! - Domain logic for board moves and readiness gates
//! - Drag gesture interpretation
//! - Stage transition control with optimistic updates and server reconciliation
//! - Workspace state with toast notifications
//! - A ratatui kanban board

pub mod cli;
pub mod config;
pub mod domain;
pub mod drag;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod sync;
pub mod transition;
pub mod tui;
pub mod workspace;

// Re-export commonly used types
pub use errors::{BoardError, Result};
pub use schemas::{Config, Dashboard, HypothesisDetail, HypothesisItem, StageKey, StageSummary};
