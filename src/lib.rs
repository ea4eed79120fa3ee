pub mod config;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod output;
pub mod store;

pub use domain::*;
pub use engine::{Engine, ReplaySummary};
pub use store::LedgerStore;
