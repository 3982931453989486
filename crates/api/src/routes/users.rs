//! User routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use common::models::{Badges, Category, Notification, Stats, User};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::error::{ApiError, ApiResult, DbResultExt, OptionExt};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpsertUserRequest {
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub custom_avatar: bool,
}

#[derive(Debug, Deserialize)]
pub struct NotificationsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// Progress of one badge category
#[derive(Debug, Serialize)]
pub struct CategoryProgress {
    pub category: Category,
    pub level: i16,
    pub percent: u8,
}

#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub user: User,
    pub stats: Stats,
    pub badges: Badges,
    pub progress: Vec<CategoryProgress>,
}

/// Create or update a user
pub async fn upsert(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpsertUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = db::users::upsert(&state.pool, &req.email, &req.display_name, req.custom_avatar)
        .await
        .db_err()?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    let users = db::users::list_all(&state.pool).await.db_err()?;
    Ok(Json(users))
}

/// Get a user with stats, badges, and per-category progress. The view
/// recomputes the snapshot; if the recompute fails it falls back to the
/// stored one instead of failing the read.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    let user = db::users::get_by_email(&state.pool, &email)
        .await
        .db_err()?
        .not_found(format!("User '{}' not found", email))?;

    let (stats, badges) = match state.refresher.refresh_user(&email, &email).await {
        Ok(fresh) => fresh,
        Err(e) => {
            warn!("Profile recompute for {} failed: {}", email, e);
            // Profiles never scored yet read as all zeros
            let stats = db::stats::get(&state.pool, &email)
                .await
                .db_err()?
                .unwrap_or_else(|| Stats::zero(&email));
            let badges = db::badges::get(&state.pool, &email)
                .await
                .db_err()?
                .unwrap_or_else(|| Badges::zero(&email));
            (stats, badges)
        }
    };

    let progress = Category::SCORABLE
        .iter()
        .map(|c| {
            let points = engine::levels::points(*c, stats.counter(*c));
            CategoryProgress {
                category: *c,
                level: engine::levels::level(points),
                percent: engine::levels::percent_to_next(points),
            }
        })
        .collect();

    Ok(Json(UserProfile {
        user,
        stats,
        badges,
        progress,
    }))
}

/// Count a connection for a user (at most one per rolling day)
pub async fn connect(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> ApiResult<Json<Stats>> {
    db::users::get_by_email(&state.pool, &email)
        .await
        .db_err()?
        .not_found(format!("User '{}' not found", email))?;

    let stats = state
        .refresher
        .track_connection(&email)
        .await
        .map_err(|e| ApiError::Internal(format!("Connection tracking failed: {}", e)))?;

    Ok(Json(stats))
}

/// Record that a user found the hidden easter egg
pub async fn secret(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> ApiResult<Json<Badges>> {
    db::users::get_by_email(&state.pool, &email)
        .await
        .db_err()?
        .not_found(format!("User '{}' not found", email))?;

    let badges = state
        .refresher
        .set_secret(&email)
        .await
        .map_err(|e| ApiError::Internal(format!("Secret unlock failed: {}", e)))?;

    Ok(Json(badges))
}

/// Recent notifications for a user, newest first
pub async fn notifications(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
    Query(params): Query<NotificationsQuery>,
) -> ApiResult<Json<Vec<Notification>>> {
    db::users::get_by_email(&state.pool, &email)
        .await
        .db_err()?
        .not_found(format!("User '{}' not found", email))?;

    let notifications = db::notifications::list_for_recipient(&state.pool, &email, params.limit)
        .await
        .db_err()?;

    Ok(Json(notifications))
}

/// Mark every notification of a user as seen
pub async fn mark_notifications_seen(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let updated = db::notifications::mark_all_seen(&state.pool, &email).await.db_err()?;
    Ok(Json(json!({ "updated": updated })))
}
