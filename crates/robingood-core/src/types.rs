//! Core types: scored stock records, derived risk levels, and the risk
//! tolerance slider value.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::{
    LOW_RISK_CEILING, MODERATE_RISK_CEILING, RISK_TOLERANCE_DEFAULT, RISK_TOLERANCE_MAX,
    RISK_TOLERANCE_MIN,
};

/// One stock as scored by the remote service.
///
/// Field names on the wire are camelCase (`environmentScore`, `totalEsg`,
/// `overallRisk`, ...). Every field is lenient: missing, `null` or
/// wrongly typed values fall back to an empty string or a zero score, numeric
/// strings are read as numbers and numbers are shown as text. Any JSON object
/// in the response array is therefore accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultRecord {
    /// Ticker symbol, e.g. "TSLA".
    #[serde(deserialize_with = "lenient_string")]
    pub symbol: String,
    /// Company name.
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    /// GICS sector.
    #[serde(deserialize_with = "lenient_string")]
    pub sector: String,
    /// Environmental sub-score, 0-100.
    #[serde(deserialize_with = "lenient_f64")]
    pub environment_score: f64,
    /// Social sub-score, 0-100.
    #[serde(deserialize_with = "lenient_f64")]
    pub social_score: f64,
    /// Governance sub-score, 0-100.
    #[serde(deserialize_with = "lenient_f64")]
    pub governance_score: f64,
    /// Composite ESG score, 0-100.
    #[serde(deserialize_with = "lenient_f64")]
    pub total_esg: f64,
    /// Overall risk figure (non-negative). Drives [`RiskLevel`].
    #[serde(deserialize_with = "lenient_f64")]
    pub overall_risk: f64,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

impl ResultRecord {
    /// Three-level label derived from [`overall_risk`](Self::overall_risk).
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_overall_risk(self.overall_risk)
    }
}

/// Coarse risk bucket shown on each result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Buckets an `overallRisk` value. Both ceilings are inclusive.
    ///
    /// NaN fails both comparisons and lands in `High`.
    pub fn from_overall_risk(overall_risk: f64) -> Self {
        if overall_risk <= LOW_RISK_CEILING {
            RiskLevel::Low
        } else if overall_risk <= MODERATE_RISK_CEILING {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer risk tolerance in `[1, 100]`.
///
/// Every constructor clamps, so a `RiskTolerance` is always in range.
/// The value is decorative: it is not sent to the scoring service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RiskTolerance(u8);

impl RiskTolerance {
    pub const MIN: RiskTolerance = RiskTolerance(RISK_TOLERANCE_MIN);
    pub const MAX: RiskTolerance = RiskTolerance(RISK_TOLERANCE_MAX);

    /// Clamps `value` into `[1, 100]`.
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(RISK_TOLERANCE_MIN as i64, RISK_TOLERANCE_MAX as i64);
        RiskTolerance(clamped as u8)
    }

    /// Rounds to the nearest integer, then clamps. Returns `None` for NaN or
    /// infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let clamped = value
            .round()
            .clamp(RISK_TOLERANCE_MIN as f64, RISK_TOLERANCE_MAX as f64);
        Some(RiskTolerance(clamped as u8))
    }

    /// Parses the value reported by a range input (`"37"`, `"37.0"`).
    pub fn parse(input: &str) -> Option<Self> {
        input
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::from_f64)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Caption shown above the slider.
    pub fn label(self) -> String {
        format!("Risk Tolerance: {}", self.0)
    }
}

impl Default for RiskTolerance {
    fn default() -> Self {
        RiskTolerance(RISK_TOLERANCE_DEFAULT)
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
