//! Toast notifications as a delay queue keyed by toast id
//!
//! Each toast carries its own deadline. `expire` drains the due ones and
//! `dismiss` cancels a pending expiry. Time is passed in so callers and tests
//! control the clock.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Visual variant of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub expires_at: Instant,
}

/// Pending toasts ordered by id (= push order)
#[derive(Debug, Clone)]
pub struct ToastQueue {
    ttl: Duration,
    next_id: u64,
    pending: BTreeMap<u64, Toast>,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            next_id: 1,
            pending: BTreeMap::new(),
        }
    }

    /// Schedule a toast that expires `ttl` after `now`. Returns its id.
    pub fn push(&mut self, message: impl Into<String>, variant: ToastVariant, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert(
            id,
            Toast {
                id,
                message: message.into(),
                variant,
                expires_at: now + self.ttl,
            },
        );
        id
    }

    /// Cancel a toast before it expires. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Dismiss the most recently pushed toast
    pub fn dismiss_latest(&mut self) -> Option<Toast> {
        self.pending.pop_last().map(|(_, toast)| toast)
    }

    /// Remove and return every toast whose deadline is at or before `now`
    pub fn expire(&mut self, now: Instant) -> Vec<Toast> {
        let due: Vec<u64> = self
            .pending
            .values()
            .filter(|toast| toast.expires_at <= now)
            .map(|toast| toast.id)
            .collect();
        due.into_iter()
            .filter_map(|id| self.pending.remove(&id))
            .collect()
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|toast| toast.expires_at).min()
    }

    /// Toasts currently on screen, oldest first
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.pending.values()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
