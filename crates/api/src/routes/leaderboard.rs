//! Leaderboard routes

use std::sync::Arc;

use axum::{extract::State, Json};
use common::models::Leaderboard;

use crate::error::{ApiError, ApiResult, DbResultExt};
use crate::state::AppState;

/// Per-category top 10 across all users
pub async fn users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Leaderboard>> {
    let board = engine::leaderboard::for_users(&state.pool)
        .await
        .map_err(|e| ApiError::Internal(format!("Leaderboard build failed: {}", e)))?;

    Ok(Json(board))
}

/// Per-category top 10 across all teams
pub async fn teams(State(state): State<Arc<AppState>>) -> ApiResult<Json<Leaderboard>> {
    // Team aggregates go stale as members post, so rebuild them first
    let teams = db::teams::list_teams(&state.pool).await.db_err()?;
    for team in &teams {
        state
            .refresher
            .refresh_team(&team.name, &team.name)
            .await
            .map_err(|e| ApiError::Internal(format!("Team recompute failed: {}", e)))?;
    }

    let board = engine::leaderboard::for_teams(&state.pool)
        .await
        .map_err(|e| ApiError::Internal(format!("Leaderboard build failed: {}", e)))?;

    Ok(Json(board))
}
