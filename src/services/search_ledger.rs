//! Domain service for the per-city search counter.

use crate::models::search::SearchRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for LedgerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Persistent search ledger.
#[async_trait::async_trait]
pub trait SearchLedger: Send + Sync {
    /// Counts one successful lookup of `city`, creating the record on first use.
    async fn record(&self, city: &str) -> Result<(), LedgerError>;

    /// All records, most searched first.
    async fn stats(&self) -> Result<Vec<SearchRecord>, LedgerError>;
}
