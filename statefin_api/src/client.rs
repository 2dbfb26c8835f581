//! HTTP client for the search engine backing the campaign-finance indices.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{query::dsl::SearchBody, Error};

/// Client for the `_search` endpoint of the index cluster.
///
/// Holds a single `reqwest::Client` so connections are reused across
/// requests. Every search is a POST of a JSON body against
/// `{base}/{index}/_search`.
pub struct EsClient {
    http: reqwest::Client,
    /// Base URL of the cluster, without a trailing slash.
    base_url: String,
}

impl EsClient {
    /// Creates a client pointing at a local engine on the default port.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("http://localhost:9200")
    }

    /// Creates a client against a custom base URL. The server passes its
    /// configured engine host here; tests point this at a mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Url::parse(base_url).map_err(|e| {
            tracing::error!("invalid search engine URL '{}': {}", base_url, e);
            Error::InvalidInput(format!("invalid search engine URL '{}'", base_url))
        })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(Error::RequestFailed)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Runs a search against `index` and decodes the response into `T`.
    ///
    /// Non-2xx replies and undecodable bodies both log a truncated body
    /// snippet before returning the error.
    pub async fn search<T>(&self, index: &str, body: &SearchBody) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}/_search", self.base_url, index);
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("search request to {} failed: {}", url, e);
                Error::RequestFailed(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read search response body: {}", e);
            Error::RequestFailed(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("search against {} returned status {}: {}", index, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "failed to decode search response: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Decode(e)
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
