//! vitals server library entry.
//!
//! Wires the metric store, the HTTP handlers, and the router into the
//! serving stack. Consumed by the binary (`main.rs`) and by the HTTP
//! contract tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod router;
pub mod store;
pub mod trace;
