//! Full recompute routes

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RecalcResponse {
    pub status: String,
    pub users: usize,
    pub teams: usize,
}

/// Recompute stats and badges for every profile, synchronously
pub async fn trigger(State(state): State<Arc<AppState>>) -> ApiResult<Json<RecalcResponse>> {
    info!("Full recompute triggered via API");

    let summary = state
        .refresher
        .refresh_all()
        .await
        .map_err(|e| ApiError::Internal(format!("Recompute failed: {}", e)))?;

    Ok(Json(RecalcResponse {
        status: "complete".to_string(),
        users: summary.users,
        teams: summary.teams,
    }))
}
