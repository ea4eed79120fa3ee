use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Replays a CSV of ledger commands and prints the resulting balances
#[derive(Parser, Debug, Clone)]
#[command(name = "ledger_engine")]
#[command(version)]
pub struct Cli {
    /// CSV file with `type, origin, destination, amount` rows
    pub input: PathBuf,

    /// Write the balance report here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}
