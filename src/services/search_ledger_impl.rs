//! `SeaORM` implementation of the `SearchLedger` trait.

use crate::db::Store;
use crate::models::search::SearchRecord;
use crate::services::search_ledger::{LedgerError, SearchLedger};
use async_trait::async_trait;
use tracing::debug;

pub struct SeaOrmSearchLedger {
    store: Store,
}

impl SeaOrmSearchLedger {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SearchLedger for SeaOrmSearchLedger {
    async fn record(&self, city: &str) -> Result<(), LedgerError> {
        self.store.record_search(city).await?;
        debug!(city, "Recorded search");
        Ok(())
    }

    async fn stats(&self) -> Result<Vec<SearchRecord>, LedgerError> {
        Ok(self.store.search_stats().await?)
    }
}
