//! # RobinGood Core
//!
//! Platform-independent pieces of the RobinGood ESG search front-end.
//!
//! The crate has no UI dependency; the Dioxus app in `crates/robingood` drives
//! a [`SearchSession`] from its components and talks to the scoring service
//! through [`ScoringService`].
//!
//! ## Modules
//!
//! - [`types`] - Scored records, risk levels, risk tolerance
//! - [`session`] - Query/result state and request sequencing
//! - [`service`] - Scoring-service trait and reqwest-backed HTTP client
//! - [`config`] - Endpoint and slider constants
//! - [`error`] - Query error type

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod service;
pub mod session;
pub mod types;

pub use config::ServiceConfig;
pub use error::QueryError;
pub use service::{parse_results, HttpScoringService, ScoringService};
pub use session::{SearchOutcome, SearchSession, SearchTicket};
pub use types::{ResultRecord, RiskLevel, RiskTolerance};
