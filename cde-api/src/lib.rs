//! HTTP data layer for the Climate Data Explorer dashboard.
//!
//! This crate owns the JSON wire contract of the backend API and a thin
//! client over it, for consumption by Dioxus chart applications compiled
//! to WASM.
//!
//! # Architecture
//!
//! - `models`: serde value objects mirroring the backend response schemas.
//!   Responses are immutable once decoded; the frontend never mutates them.
//! - `client`: one async method per endpoint (`GET /stations`,
//!   `GET /data/monthly`, `GET /data/annual`, `GET /analytics`,
//!   `POST /ai/insights`, `POST /ai/ask`, `GET /health`). On wasm32,
//!   `reqwest` lowers to the browser fetch API.
//! - `cache`: stale-time request cache keyed by URL, shared via
//!   `Rc<RefCell<_>>` in the single-threaded WASM environment.
//! - `error`: typed `ApiError` covering transport, HTTP status, and decode
//!   failures.

pub mod cache;
mod client;
pub mod error;
pub mod models;

pub use cache::QueryCache;
pub use client::ApiClient;
pub use error::{ApiError, Result};
