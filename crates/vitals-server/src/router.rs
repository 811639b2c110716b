//! Axum router wiring.
//!
//! Routes carrying only read semantics are registered `get`, so a write
//! method on `/` answers 405 straight from the router.

use axum::routing::{get, post};
use axum::Router;

use crate::{app_state::AppState, handlers, trace};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/update/:kind/:id/:value", post(handlers::update_path))
        .route("/update", post(handlers::update_body))
        .route("/update/", post(handlers::update_body))
        .route("/value/:kind/:id", get(handlers::value_path))
        .route("/value", post(handlers::value_body))
        .route("/value/", post(handlers::value_body))
        .layer(axum::middleware::from_fn(trace::log_requests))
        .with_state(state)
}
