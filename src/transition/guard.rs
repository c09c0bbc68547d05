//! Single-flight guard for stage transitions

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::errors::{BoardError, Result};

/// At most one transition holds the permit at a time.
#[derive(Debug, Clone)]
pub struct BusyGate {
    permits: Arc<Semaphore>,
}

/// Held for the duration of one transition; dropping it releases the gate.
#[derive(Debug)]
pub struct BusyPermit {
    _permit: OwnedSemaphorePermit,
}

impl BusyGate {
    pub fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(1)),
        }
    }

    /// Take the permit without waiting
    pub fn try_acquire(&self) -> Result<BusyPermit> {
        self.permits
            .clone()
            .try_acquire_owned()
            .map(|permit| BusyPermit { _permit: permit })
            .map_err(|_| BoardError::TransitionInFlight)
    }

    pub fn is_busy(&self) -> bool {
        self.permits.available_permits() == 0
    }
}

impl Default for BusyGate {
    fn default() -> Self {
        Self::new()
    }
}
