//! Team routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::models::{Badges, Stats, Team, User};
use engine::RefreshKey;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult, DbResultExt, OptionExt};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct TeamProfile {
    pub team: Team,
    pub stats: Stats,
    pub badges: Badges,
    pub members: Vec<User>,
}

/// List all teams
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Team>>> {
    let teams = db::teams::list_teams(&state.pool).await.db_err()?;
    Ok(Json(teams))
}

/// Create a new team
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTeamRequest>,
) -> ApiResult<(StatusCode, Json<Team>)> {
    let team = db::teams::create_team(&state.pool, &req.name, &req.display_name)
        .await
        .db_err()?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// Get a team with a freshly aggregated score and its member list
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<TeamProfile>> {
    let team = db::teams::get_team_by_name(&state.pool, &name)
        .await
        .db_err()?
        .not_found(format!("Team '{}' not found", name))?;

    // Member activity changes between views, so re-aggregate on read
    let (stats, badges) = state
        .refresher
        .refresh_team(&name, &name)
        .await
        .map_err(|e| ApiError::Internal(format!("Team recompute failed: {}", e)))?;

    let members = db::teams::members(&state.pool, &name).await.db_err()?;

    Ok(Json(TeamProfile {
        team,
        stats,
        badges,
        members,
    }))
}

/// Delete a team
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    db::teams::get_team_by_name(&state.pool, &name)
        .await
        .db_err()?
        .not_found(format!("Team '{}' not found", name))?;

    db::teams::delete_team(&state.pool, &name).await.db_err()?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a member to a team
pub async fn add_member(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<AddMemberRequest>,
) -> ApiResult<StatusCode> {
    db::teams::get_team_by_name(&state.pool, &name)
        .await
        .db_err()?
        .not_found(format!("Team '{}' not found", name))?;

    db::users::get_by_email(&state.pool, &req.email)
        .await
        .db_err()?
        .not_found(format!("User '{}' not found", req.email))?;

    db::teams::add_member(&state.pool, &name, &req.email).await.db_err()?;

    state
        .queue
        .request(RefreshKey::Team(name.clone()), &req.email)
        .await;

    Ok(StatusCode::CREATED)
}

/// Remove a member from a team
pub async fn remove_member(
    State(state): State<Arc<AppState>>,
    Path((name, email)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    db::teams::get_team_by_name(&state.pool, &name)
        .await
        .db_err()?
        .not_found(format!("Team '{}' not found", name))?;

    db::teams::remove_member(&state.pool, &name, &email).await.db_err()?;

    state.queue.request(RefreshKey::Team(name.clone()), &email).await;

    Ok(StatusCode::NO_CONTENT)
}
