//! vitals agent library entry.
//!
//! Two periodic loops with a bounded channel between them: the collector
//! samples OS stats, the reporter drains queued samples and posts them to
//! the server's update endpoint.

pub mod collect;
pub mod config;
pub mod report;
