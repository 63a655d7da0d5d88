//! Release Radar core: release model, risk classifier, and error types.
//!
//! This crate holds the transport-agnostic pieces shared by the HTTP server
//! and any offline tooling. It carries no runtime or HTTP dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Classification is total over any numeric input, and every fallible path
//! surfaces as `RadarError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod classifier;
pub mod error;
pub mod model;

/// Shared result type.
pub use error::{Result, RadarError};
