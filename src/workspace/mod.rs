//! Workspace state: board snapshot, detail panel, banner and toasts

mod state;
mod toast;

pub use state::{DetailToken, SharedWorkspace, TransitionPhase, WorkspaceState};
pub use toast::{Toast, ToastQueue, ToastVariant};
