//! HTTP client for the Cricbuzz API.

use std::time::Duration;

use log::{error, info};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode,
};
use serde_json::{json, Value};

use super::endpoints::Endpoint;
use crate::{
    config::Config,
    error::{CricError, Result},
};


const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a fetch did not produce data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub label: String,
    /// HTTP status when the server answered, `None` for transport errors.
    pub status: Option<u16>,
    pub reason: String,
}

/// Result of a single API request.
///
/// A successful response whose body holds no data is still `Success`; only
/// transport errors, non-2xx statuses and undecodable bodies are `Failed`.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Success(Value),
    Failed(FetchFailure),
}

impl FetchOutcome {
    #[cfg(test)]
    pub(crate) fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    /// The response body, or an empty JSON object if the fetch failed.
    pub fn or_empty(self) -> Value {
        match self {
            FetchOutcome::Success(v) => v,
            FetchOutcome::Failed(_) => json!({}),
        }
    }

    /// The response body, or [`CricError::Fetch`] if the fetch failed.
    pub fn into_result(self) -> Result<Value> {
        match self {
            FetchOutcome::Success(v) => Ok(v),
            FetchOutcome::Failed(f) => Err(CricError::Fetch {
                label: f.label,
                reason: f.reason,
            }),
        }
    }
}

/// Authenticated Cricbuzz client.
pub struct ApiClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: &str, api_host: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("cricbuzz-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: auth_headers(api_key, api_host)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, config.require_api_key()?, &config.api_host)
    }

    /// GET an endpoint and decode its JSON body. Never returns an error;
    /// failures are logged and reported as [`FetchOutcome::Failed`].
    pub async fn fetch(&self, endpoint: &Endpoint) -> FetchOutcome {
        let label = endpoint.label();
        let url = format!("{}{}", self.base_url, endpoint.path());

        let response = match self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(&endpoint.query())
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return failed(label, None, e.to_string()),
        };

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            info!("Fetched {} (no content)", label);
            return FetchOutcome::Success(json!({}));
        }
        if !status.is_success() {
            return failed(label, Some(status.as_u16()), format!("HTTP {}", status));
        }

        match response.json::<Value>().await {
            Ok(body) => {
                info!("Fetched {}", label);
                FetchOutcome::Success(body)
            }
            Err(e) => failed(label, Some(status.as_u16()), e.to_string()),
        }
    }
}

fn failed(label: String, status: Option<u16>, reason: String) -> FetchOutcome {
    error!("Error fetching {}: {}", label, reason);
    FetchOutcome::Failed(FetchFailure {
        label,
        status,
        reason,
    })
}

/// The two RapidAPI headers plus `Accept: application/json`.
pub fn auth_headers(api_key: &str, api_host: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert("X-RapidAPI-Key", HeaderValue::from_str(api_key)?);
    h.insert("X-RapidAPI-Host", HeaderValue::from_str(api_host)?);
    Ok(h)
}
