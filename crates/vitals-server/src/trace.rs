//! Request logging middleware.
//!
//! One structured line per request: method, uri, status, elapsed time.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        %method,
        %uri,
        status = res.status().as_u16(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "request"
    );
    res
}
