use serde::{Deserialize, Serialize};

/// One row of the search ledger as exposed by `/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub city: String,
    pub count: i64,
}
