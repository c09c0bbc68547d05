//! Terminal User Interface (TUI) module
//!
//! A kanban board over the shared workspace, with mouse drag-and-drop and a
//! keyboard-driven transition dialog.

pub mod events;
pub mod runner;
pub mod state;
pub mod widgets;


// Re-export commonly used types
pub use events::{translate_key, translate_mouse, BoardAction, PointerAction};
pub use runner::TuiRunner;
pub use state::{blocked_message, TuiState};
pub use widgets::{compute_layout, render_screen, BoardLayout, CardHit, ColumnLayout};
