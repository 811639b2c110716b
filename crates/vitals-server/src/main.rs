//! vitals server binary.
//!
//! Boot order: logging, config, store + router, serve.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use vitals_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::ServerConfig::parse();

    let state = app_state::AppState::new();
    let app = router::build_router(state);

    tracing::info!(address = %cfg.address, "vitals-server starting");
    let listener = tokio::net::TcpListener::bind(&cfg.address)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
