//! Backend access and board reconciliation

mod api;
mod engine;
#[cfg(test)]
pub(crate) mod fake;
mod http;

pub use api::HypothesisApi;
pub use engine::SyncEngine;
pub use http::HttpHypothesisApi;
