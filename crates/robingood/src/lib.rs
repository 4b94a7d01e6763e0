//! RobinGood - ESG-aware stock search front-end.
//!
//! A Dioxus application that sends a free-text query to the RobinGood scoring
//! service and renders the returned stocks as cards with their ESG scores and
//! a derived risk level.
//!
//! # Architecture
//!
//! - **State**: a single [`robingood_core::SearchSession`] signal owned by
//!   [`components::SearchView`] (query text, risk tolerance, result list)
//! - **Network**: [`robingood_core::ScoringService`] supplied through context;
//!   production uses the reqwest-backed [`robingood_core::HttpScoringService`]
//! - **Sequencing**: every search runs in its own task and only the newest
//!   submission may replace the result list
//!
//! # Platform Support
//!
//! - **Web (WASM)**: default `web` feature
//! - **Desktop**: `desktop` feature

#![forbid(unsafe_code)]

pub mod components;
