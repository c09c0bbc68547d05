//! Stage transitions: busy gate, controller and dialog

mod controller;
mod dialog;
mod guard;

pub use controller::{
    success_message, TransitionController, TransitionOrigin, TransitionOutcome, TransitionRequest,
    STAGE_MOVE_FAILED,
};
pub use dialog::TransitionDialog;
pub use guard::{BusyGate, BusyPermit};
