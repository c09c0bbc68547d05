//! CLI command implementations

pub mod board;
pub mod gate;
pub mod show;
pub mod stage_move;
pub mod tui;
