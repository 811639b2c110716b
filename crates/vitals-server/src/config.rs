//! Server configuration.
//!
//! Precedence: command flag over environment variable over default,
//! matching the agent's loader.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "vitals-server", about = "HTTP metric aggregation server")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(short = 'a', long = "address", env = "ADDRESS", default_value = "localhost:8080")]
    pub address: String,
}
