//! Structured wire body (JSON).
//!
//! One body shape serves both the update and the query routes: `id` and
//! `type` are always present, and exactly one of `value` (gauge) or `delta`
//! (counter) carries the number. Query requests may omit both numeric
//! fields; update requests must carry the one matching `type`.

use serde::{Deserialize, Serialize};

use crate::error::VitalsError;
use crate::metric::{Metric, MetricKind, MetricValue};

/// JSON metric body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPayload {
    /// Metric id.
    pub id: String,
    /// Metric kind (field name is `type` in JSON).
    #[serde(rename = "type")]
    pub kind: MetricKind,
    /// Gauge value, absent for counters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Counter delta, absent for gauges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,
}

impl MetricPayload {
    /// Decode a payload from a raw JSON body.
    pub fn from_json(body: &str) -> Result<Self, VitalsError> {
        serde_json::from_str(body).map_err(|e| VitalsError::Encoding(e.to_string()))
    }

    /// Encode to a JSON body.
    pub fn to_json(&self) -> Result<String, VitalsError> {
        serde_json::to_string(self).map_err(|e| VitalsError::Encoding(e.to_string()))
    }
}

impl TryFrom<MetricPayload> for Metric {
    type Error = VitalsError;

    /// Validate an update payload into a domain metric.
    ///
    /// The numeric field must match the declared kind; a counter body with
    /// only `value` set (or vice versa) is malformed, not a zero write.
    fn try_from(p: MetricPayload) -> Result<Self, Self::Error> {
        if p.id.is_empty() {
            return Err(VitalsError::Validation("empty metric id".into()));
        }
        let value = match p.kind {
            MetricKind::Gauge => MetricValue::Gauge(
                p.value
                    .ok_or_else(|| VitalsError::Validation("gauge body missing value".into()))?,
            ),
            MetricKind::Counter => MetricValue::Counter(
                p.delta
                    .ok_or_else(|| VitalsError::Validation("counter body missing delta".into()))?,
            ),
        };
        Ok(Metric { id: p.id, value })
    }
}

impl From<&Metric> for MetricPayload {
    fn from(m: &Metric) -> Self {
        let (value, delta) = match m.value {
            MetricValue::Gauge(v) => (Some(v), None),
            MetricValue::Counter(d) => (None, Some(d)),
        };
        MetricPayload {
            id: m.id.clone(),
            kind: m.kind(),
            value,
            delta,
        }
    }
}
