//! vitals agent binary.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use vitals_agent::{config, report};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::AgentConfig::parse();
    tracing::info!(
        address = %cfg.address,
        poll_interval = cfg.poll_interval,
        report_interval = cfg.report_interval,
        "vitals-agent starting"
    );

    report::Reporter::new(cfg).run().await;
}
