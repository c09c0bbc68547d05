//! reqwest-backed implementation of [`HypothesisApi`]

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::errors::{BoardError, Result};
use crate::schemas::{Dashboard, HypothesisDetail, StageUpdate};

use super::api::HypothesisApi;

/// HTTP client for the hypothesis service
#[derive(Debug, Clone)]
pub struct HttpHypothesisApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpHypothesisApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-success status into [`BoardError::Api`] carrying the body text.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(BoardError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response, what: &str) -> Result<T> {
    let body = check_response(resp).await?.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| BoardError::InvalidJson(format!("Invalid {} payload: {}", what, e)))
}

#[async_trait]
impl HypothesisApi for HttpHypothesisApi {
    async fn fetch_dashboard(&self) -> Result<Dashboard> {
        let url = self.url("/hypotheses/dashboard");
        tracing::debug!(%url, "GET dashboard");
        let resp = self.client.get(&url).send().await?;
        decode(resp, "dashboard").await
    }

    async fn fetch_detail(&self, id: &str) -> Result<HypothesisDetail> {
        let url = self.url(&format!("/hypotheses/{}", id));
        tracing::debug!(%url, "GET hypothesis");
        let resp = self.client.get(&url).send().await?;
        decode(resp, "hypothesis").await
    }

    async fn update_stage(&self, id: &str, update: &StageUpdate) -> Result<HypothesisDetail> {
        let url = self.url(&format!("/hypotheses/{}", id));
        tracing::debug!(%url, stage = %update.stage, "PATCH hypothesis");
        let resp = self.client.patch(&url).json(update).send().await?;
        decode(resp, "hypothesis").await
    }
}
