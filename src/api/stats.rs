use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::models::search::SearchRecord;

/// Whole ledger, most searched cities first.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SearchRecord>>, ApiError> {
    let stats = state.search_ledger().stats().await?;
    Ok(Json(stats))
}
