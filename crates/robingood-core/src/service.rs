//! Scoring-service client.
//!
//! [`ScoringService`] is the seam between the search session and the network.
//! [`HttpScoringService`] is the production implementation; it wraps reqwest,
//! which works on both targets:
//! - Native: hyper with rustls-tls
//! - WASM: the browser fetch() API
//!
//! Response handling:
//! - non-2xx status → [`QueryError::Status`]
//! - 2xx with a JSON array body → records in response order
//! - 2xx with anything else → [`QueryError::MalformedBody`]

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
#[cfg(feature = "profile")]
use tracing::instrument;

use crate::config::ServiceConfig;
use crate::error::QueryError;
use crate::types::ResultRecord;

/// Something that can turn a query string into scored records.
///
/// Futures are `?Send` so the same trait works on WASM, where reqwest
/// futures are not `Send`.
#[async_trait(?Send)]
pub trait ScoringService {
    /// Sends `text` exactly as given (untrimmed) and returns the records in
    /// response order.
    async fn query(&self, text: &str) -> Result<Vec<ResultRecord>, QueryError>;
}

/// HTTP GET client for the `/query` endpoint.
#[derive(Debug, Clone)]
pub struct HttpScoringService {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl HttpScoringService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

}

impl Default for HttpScoringService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

#[async_trait(?Send)]
impl ScoringService for HttpScoringService {
    #[cfg_attr(feature = "profile", instrument(skip_all, fields(query = %text)))]
    async fn query(&self, text: &str) -> Result<Vec<ResultRecord>, QueryError> {
        let url = self.config.query_url(text)?;
        debug!("GET {}", url);

        let request = self.client.get(url);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.config.timeout);

        let response = request.send().await.map_err(|e| {
            QueryError::Transport(format!("Failed to reach {}: {}", self.config.base_url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Transport(format!("Failed to read response body: {}", e)))?;

        parse_results(&body)
    }
}

/// Parses a success body into records.
///
/// The only shape check is "is it an array"; each element must be a JSON
/// object, and odd record fields default (see [`ResultRecord`]).
pub fn parse_results(body: &str) -> Result<Vec<ResultRecord>, QueryError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                serde_json::from_value(item)
                    .map_err(|e| QueryError::MalformedBody(format!("element {}: {}", idx, e)))
            })
            .collect(),
        other => Err(QueryError::MalformedBody(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
