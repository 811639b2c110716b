//! HTTP handlers for the update and query routes.
//!
//! Status codes are the observable contract:
//! - validation / unknown kind / type conflict / malformed body -> 400
//! - absent id or kind mismatch on lookup -> 404
//! - response-side encoding failure -> 500 (the only server-fault case)
//!
//! JSON bodies are decoded from the raw body string rather than through the
//! `Json` extractor so malformed input is always a clean 400, never a
//! content-type rejection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use vitals_core::error::ClientCode;
use vitals_core::{Metric, MetricKind, MetricPayload, MetricValue, VitalsError};

use crate::app_state::AppState;

fn status_for(err: &VitalsError) -> StatusCode {
    match err.client_code() {
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::Internal | ClientCode::Transport => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// `POST /update/:kind/:id/:value` — segmented-path update.
pub async fn update_path(
    State(state): State<AppState>,
    Path((kind, id, value)): Path<(String, String, String)>,
) -> StatusCode {
    if id.is_empty() {
        return StatusCode::NOT_FOUND;
    }
    if kind.is_empty() || value.is_empty() {
        return StatusCode::BAD_REQUEST;
    }
    let kind: MetricKind = match kind.parse() {
        Ok(k) => k,
        Err(_) => return StatusCode::BAD_REQUEST,
    };

    match state.store().save_raw(kind, &id, &value) {
        Ok(_) => StatusCode::OK,
        Err(err) => {
            tracing::debug!(%id, %err, "path update rejected");
            status_for(&err)
        }
    }
}

/// `POST /update/` — structured-body update.
///
/// Responds with the current stored state of the id (post-accumulation for
/// counters), read under the same lock as the write.
pub async fn update_body(State(state): State<AppState>, body: String) -> Response {
    let metric = match MetricPayload::from_json(&body).and_then(Metric::try_from) {
        Ok(m) => m,
        Err(err) => {
            tracing::debug!(%err, "body update rejected");
            return status_for(&err).into_response();
        }
    };

    match state.store().apply(&metric.id, metric.value) {
        Ok(stored) => Json(MetricPayload::from(&stored)).into_response(),
        Err(err) => {
            tracing::debug!(id = %metric.id, %err, "body update rejected");
            status_for(&err).into_response()
        }
    }
}

/// `GET /value/:kind/:id` — bare numeric value.
///
/// An unrecognized kind segment reads as a lookup that can never match, so
/// it is a 404 here (unlike the update route, where it is a 400).
pub async fn value_path(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Response {
    let Ok(kind) = kind.parse::<MetricKind>() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.store().get(kind, &id) {
        Some(m) => match m.value {
            MetricValue::Gauge(v) => Json(v).into_response(),
            MetricValue::Counter(d) => Json(d).into_response(),
        },
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// `POST /value/` — structured-body query, responds with the full metric.
pub async fn value_body(State(state): State<AppState>, body: String) -> Response {
    let payload = match MetricPayload::from_json(&body) {
        Ok(p) => p,
        Err(err) => {
            tracing::debug!(%err, "body query rejected");
            return status_for(&err).into_response();
        }
    };

    match state.store().get(payload.kind, &payload.id) {
        Some(m) => Json(MetricPayload::from(&m)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// `GET /` — full dump of every stored metric.
pub async fn index(State(state): State<AppState>) -> Json<Vec<MetricPayload>> {
    Json(
        state
            .store()
            .snapshot()
            .iter()
            .map(MetricPayload::from)
            .collect(),
    )
}
