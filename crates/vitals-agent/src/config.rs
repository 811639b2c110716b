//! Agent configuration.
//!
//! Precedence: command flag over environment variable over default.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "vitals-agent", about = "OS metric collection agent")]
pub struct AgentConfig {
    /// Server address to report to.
    #[arg(short = 'a', long = "address", env = "ADDRESS", default_value = "localhost:8080")]
    pub address: String,

    /// Seconds between metric samples.
    #[arg(
        short = 'p',
        long = "poll-interval",
        env = "POLL_INTERVAL",
        default_value_t = 3,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval: u64,

    /// Seconds between reports to the server.
    #[arg(
        short = 'r',
        long = "report-interval",
        env = "REPORT_INTERVAL",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub report_interval: u64,
}
