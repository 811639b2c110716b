//! Metric domain model.
//!
//! A metric is a `(id, value)` pair where the value is a tagged union:
//! gauges hold an `f64` replaced wholesale on every write, counters hold an
//! `i64` running total of all deltas ever applied. Keeping the kind and the
//! payload in one enum means they can never disagree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VitalsError;

/// The two recognized metric kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    /// Wire spelling of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = VitalsError;

    /// Exact, case-sensitive match; anything else is `InvalidKind`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gauge" => Ok(MetricKind::Gauge),
            "counter" => Ok(MetricKind::Counter),
            other => Err(VitalsError::InvalidKind(other.to_string())),
        }
    }
}

/// Kind-tagged metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Last written float (replace semantics).
    Gauge(f64),
    /// Cumulative delta total (accumulate semantics).
    Counter(i64),
}

impl MetricValue {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricValue::Gauge(_) => MetricKind::Gauge,
            MetricValue::Counter(_) => MetricKind::Counter,
        }
    }

    /// Parse a raw string value under the given kind.
    ///
    /// Gauges parse as `f64`, counters as `i64`; failure surfaces as
    /// `Validation`, never as a fallback to the other kind.
    pub fn parse_raw(kind: MetricKind, raw: &str) -> Result<Self, VitalsError> {
        match kind {
            MetricKind::Gauge => raw
                .parse::<f64>()
                .map(MetricValue::Gauge)
                .map_err(|_| VitalsError::Validation(format!("not a float: {raw:?}"))),
            MetricKind::Counter => raw
                .parse::<i64>()
                .map(MetricValue::Counter)
                .map_err(|_| VitalsError::Validation(format!("not an integer: {raw:?}"))),
        }
    }
}

/// A stored metric: unique id plus its current tagged value.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub id: String,
    pub value: MetricValue,
}

impl Metric {
    pub fn gauge(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            value: MetricValue::Gauge(value),
        }
    }

    pub fn counter(id: impl Into<String>, delta: i64) -> Self {
        Self {
            id: id.into(),
            value: MetricValue::Counter(delta),
        }
    }

    pub fn kind(&self) -> MetricKind {
        self.value.kind()
    }
}
