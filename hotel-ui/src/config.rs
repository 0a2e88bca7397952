//! Command line and environment configuration

use std::path::PathBuf;

use clap::Parser;
use hotel_client::ClientConfig;
use hotel_client::config::DEFAULT_TIMEOUT_SECS;

/// Terminal client for the CQRS Hotel demo
#[derive(Debug, Clone, Parser)]
#[command(name = "hotel-ui", version, about)]
pub struct Args {
    /// Base URL of the hotel API
    #[arg(long, env = "HOTEL_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "HOTEL_API_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, env = "HOTEL_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log as JSON
    #[arg(long, env = "HOTEL_LOG_JSON")]
    pub log_json: bool,

    /// Also write daily rotated log files into this directory
    #[arg(long, env = "HOTEL_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Location opened at startup
    #[arg(default_value = "/")]
    pub path: String,
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url).with_timeout(self.timeout)
    }
}
