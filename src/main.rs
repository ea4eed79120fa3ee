use std::fs::File;
use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*};

use ledger_engine::config::Cli;
use ledger_engine::dlq::LogDeadLetterQueue;
use ledger_engine::ingestion::CsvReader;
use ledger_engine::output::CsvReport;
use ledger_engine::{Engine, LedgerStore};

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(cli.env_filter())
        .init();

    let file = File::open(&cli.input)?;
    let mut ingestion = CsvReader::new(file)?;
    let dlq = LogDeadLetterQueue::default();

    let engine = Engine::new(LedgerStore::new());
    engine.replay(&mut ingestion, &dlq).await;

    let accounts = engine.accounts();
    match &cli.output {
        Some(path) => CsvReport::new(File::create(path)?).write(&accounts)?,
        None => CsvReport::new(io::stdout().lock()).write(&accounts)?,
    }

    Ok(())
}
