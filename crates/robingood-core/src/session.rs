//! Search session state: query text, risk tolerance, and the result list.
//!
//! A search is split in two so that a UI can release its state between the
//! steps while the request is in flight:
//!
//! 1. [`SearchSession::begin_search`] checks the query and hands out a
//!    sequence-numbered [`SearchTicket`].
//! 2. [`SearchSession::complete`] applies the service response for that
//!    ticket.
//!
//! Only the response for the most recently issued ticket is applied. Older
//! responses are discarded, so the result list always belongs to the latest
//! query. Failures never touch the result list.
//!
//! ```
//! use robingood_core::{ResultRecord, SearchOutcome, SearchSession};
//!
//! let mut session = SearchSession::new();
//! session.set_query("clean energy");
//!
//! let ticket = session.begin_search().expect("query is not blank");
//! let records = vec![ResultRecord { symbol: "NEE".into(), ..Default::default() }];
//!
//! assert_eq!(session.complete(ticket, Ok(records)), SearchOutcome::Applied { count: 1 });
//! assert_eq!(session.results()[0].symbol, "NEE");
//! ```

use instant::Instant;
use tracing::{debug, error, info, warn};

use crate::error::QueryError;
use crate::service::ScoringService;
use crate::types::{ResultRecord, RiskTolerance};

/// An accepted submission waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The raw query text, exactly as typed.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What [`SearchSession::complete`] did with a response.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Result list replaced with `count` records.
    Applied { count: usize },
    /// A newer ticket was issued after this one; response dropped.
    Stale,
    /// Request or response failed; result list left as it was.
    Failed(QueryError),
}

/// In-memory state behind the search view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    query: String,
    risk_tolerance: RiskTolerance,
    results: Vec<ResultRecord>,
    latest_seq: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Overwrites the query text. No trimming.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn risk_tolerance(&self) -> RiskTolerance {
        self.risk_tolerance
    }

    pub fn set_risk_tolerance(&mut self, value: RiskTolerance) {
        self.risk_tolerance = value;
    }

    /// Records from the last applied response, in response order.
    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    /// True when the trimmed query is non-empty.
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Issues a ticket for the current query, or `None` for a blank query.
    ///
    /// A blank query leaves the session untouched.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if !self.has_query() {
            debug!("Ignoring search for blank query");
            return None;
        }

        self.latest_seq += 1;
        Some(SearchTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        })
    }

    /// Whether `ticket` is still the most recent submission.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// Applies the response for `ticket`.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        response: Result<Vec<ResultRecord>, QueryError>,
    ) -> SearchOutcome {
        if !self.is_current(&ticket) {
            debug!(
                "Discarding response for superseded search #{} ('{}'), latest is #{}",
                ticket.seq, ticket.query, self.latest_seq
            );
            return SearchOutcome::Stale;
        }

        match response {
            Ok(records) => {
                let count = records.len();
                info!(
                    "Search #{} for '{}' returned {} results",
                    ticket.seq, ticket.query, count
                );
                self.results = records;
                SearchOutcome::Applied { count }
            }
            Err(e) => {
                match &e {
                    QueryError::Status(_) | QueryError::MalformedBody(_) => {
                        warn!(kind = e.kind(), "Search #{} for '{}' failed: {}", ticket.seq, ticket.query, e)
                    }
                    QueryError::Transport(_) | QueryError::InvalidEndpoint(_) => {
                        error!(kind = e.kind(), "Search #{} for '{}' failed: {}", ticket.seq, ticket.query, e)
                    }
                }
                SearchOutcome::Failed(e)
            }
        }
    }

    /// Runs a whole search against `service`: one request for a non-blank
    /// query, none otherwise.
    ///
    /// Holds `&mut self` across the request, so UIs that must stay
    /// responsive use [`begin_search`](Self::begin_search) and
    /// [`complete`](Self::complete) directly.
    pub async fn submit<S>(&mut self, service: &S) -> Option<SearchOutcome>
    where
        S: ScoringService + ?Sized,
    {
        let ticket = self.begin_search()?;

        let start = Instant::now();
        let response = service.query(ticket.query()).await;
        debug!(
            "Search #{} answered in {:.1}ms",
            ticket.seq,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Some(self.complete(ticket, response))
    }
}
