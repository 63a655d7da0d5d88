//! Release Radar server library entry.
//!
//! This crate wires the release store, the HTTP handlers, configuration, and
//! in-process observability into an axum service. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
