use crate::domain::Operation;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// The adapter could not turn a row into a command (the "bad request" case).
    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    /// An operation referenced an account that was never credited.
    #[error("Account not found for {0}")]
    AccountNotFound(Operation),
}
