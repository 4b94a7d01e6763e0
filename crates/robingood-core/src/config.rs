//! Production configuration constants and the scoring-service endpoint.
//!
//! # Usage
//!
//! ```
//! use robingood_core::config::ServiceConfig;
//!
//! let config = ServiceConfig::default();
//! let url = config.query_url("clean energy").unwrap();
//! assert_eq!(url.as_str(), "http://localhost:5000/query?query=clean+energy");
//! ```

use std::time::Duration;

use url::Url;

use crate::error::QueryError;

// =============================================================================
// Scoring Service
// =============================================================================

/// Search endpoint of the scoring service.
///
/// The host and port are fixed; the service ships alongside the front-end.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000/query";

/// Name of the query-string parameter carrying the raw search text.
pub const QUERY_PARAM: &str = "query";

/// Per-request timeout in seconds (native targets only).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Risk Tolerance Slider
// =============================================================================

/// Lowest selectable risk tolerance.
pub const RISK_TOLERANCE_MIN: u8 = 1;

/// Highest selectable risk tolerance.
pub const RISK_TOLERANCE_MAX: u8 = 100;

/// Slider position on a fresh session.
pub const RISK_TOLERANCE_DEFAULT: u8 = 50;

// =============================================================================
// Risk Level Thresholds
// =============================================================================

/// `overallRisk` at or below this value is labelled "Low".
pub const LOW_RISK_CEILING: f64 = 1.5;

/// `overallRisk` at or below this value (and above [`LOW_RISK_CEILING`]) is "Moderate".
pub const MODERATE_RISK_CEILING: f64 = 2.0;

/// Where and how to reach the scoring service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Full URL of the search endpoint, without query string.
    pub base_url: String,
    /// Request timeout. Ignored on WASM, where the browser owns fetch timeouts.
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Creates a config pointing at `base_url` with the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builds the request URL for `text`.
    ///
    /// The text is passed through untrimmed and percent-encoded as the
    /// `query` parameter.
    pub fn query_url(&self, text: &str) -> Result<Url, QueryError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| QueryError::InvalidEndpoint(format!("{}: {}", self.base_url, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(QueryError::InvalidEndpoint(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                url.scheme()
            )));
        }

        url.query_pairs_mut().append_pair(QUERY_PARAM, text);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_port_5000() {
        let config = ServiceConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/query");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_query_url_keeps_whitespace() {
        let url = ServiceConfig::default().query_url("  tesla ").unwrap();
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "query");
        assert_eq!(value, "  tesla ");
    }

    #[test]
    fn test_query_url_encodes_reserved_characters() {
        let url = ServiceConfig::default().query_url("a&b=c").unwrap();
        assert_eq!(url.query(), Some("query=a%26b%3Dc"));
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = ServiceConfig::with_base_url("not a url");
        assert!(matches!(
            config.query_url("x"),
            Err(QueryError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_invalid_scheme() {
        let config = ServiceConfig::with_base_url("ftp://localhost/query");
        assert!(matches!(
            config.query_url("x"),
            Err(QueryError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_risk_thresholds_ordered() {
        let (low, moderate) = (LOW_RISK_CEILING, MODERATE_RISK_CEILING);
        assert!(low < moderate);
    }
}
