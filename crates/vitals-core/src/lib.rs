//! vitals core: metric domain types, wire payloads, and error surface.
//!
//! This crate defines the contract shared by the server and the agent: the
//! gauge/counter metric model, the JSON body exchanged over HTTP, and the
//! error taxonomy. It carries no transport or runtime dependencies so both
//! sides (and tests) can reuse it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `VitalsError`/`Result` so a malformed
//! request body or a garbage value string can never crash a process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod wire;

/// Shared result type.
pub use error::{Result, VitalsError};
pub use metric::{Metric, MetricKind, MetricValue};
pub use wire::MetricPayload;
