//! Pin routes: posting, commenting, liking, saving
//!
//! Every mutation queues a background recompute for the profiles whose
//! counters it moved; the response never waits for the recompute.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use common::models::{Comment, Pin};
use engine::RefreshKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiResult, DbResultExt, OptionExt};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePinRequest {
    pub author_email: String,
    pub title: String,
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub author_email: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub author_email: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct PinDetail {
    #[serde(flatten)]
    pub pin: Pin,
    pub comments: Vec<Comment>,
    pub like_count: i64,
}

/// Create a pin
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePinRequest>,
) -> ApiResult<(StatusCode, Json<Pin>)> {
    let pin = db::pins::insert(&state.pool, &req.author_email, &req.title, req.body.as_deref())
        .await
        .db_err()?;

    state
        .queue
        .request(RefreshKey::User(req.author_email.clone()), &req.author_email)
        .await;

    Ok((StatusCode::CREATED, Json(pin)))
}

/// List recent pins
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<Vec<Pin>>> {
    let pins = db::pins::list_recent(&state.pool, params.limit).await.db_err()?;
    Ok(Json(pins))
}

/// Get a pin with its comments and like count
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<PinDetail>> {
    let pin = db::pins::get(&state.pool, id)
        .await
        .db_err()?
        .not_found(format!("Pin '{}' not found", id))?;

    let comments = db::comments::list_for_pin(&state.pool, pin.id).await.db_err()?;
    let like_count = db::likes::count_for_pin(&state.pool, pin.id).await.db_err()?;

    Ok(Json(PinDetail {
        pin,
        comments,
        like_count,
    }))
}

/// Delete a pin
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let pin = db::pins::get(&state.pool, id)
        .await
        .db_err()?
        .not_found(format!("Pin '{}' not found", id))?;

    db::pins::delete(&state.pool, pin.id).await.db_err()?;

    // The author's posted and received counters all shrink
    state
        .queue
        .request(RefreshKey::User(pin.author_email.clone()), &pin.author_email)
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// Comment on a pin
pub async fn comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    let pin = db::pins::get(&state.pool, id)
        .await
        .db_err()?
        .not_found(format!("Pin '{}' not found", id))?;

    let comment = db::comments::insert(&state.pool, pin.id, &req.author_email, &req.body)
        .await
        .db_err()?;

    // The commenter's posted counter and the pin author's received counters move
    state
        .queue
        .request(RefreshKey::User(req.author_email.clone()), &req.author_email)
        .await;
    state
        .queue
        .request(RefreshKey::User(pin.author_email.clone()), &req.author_email)
        .await;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Delete a comment
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let comment = db::comments::get(&state.pool, id)
        .await
        .db_err()?
        .not_found(format!("Comment '{}' not found", id))?;
    let pin = db::pins::get(&state.pool, comment.pin_id).await.db_err()?;

    db::comments::delete(&state.pool, comment.id).await.db_err()?;

    state
        .queue
        .request(
            RefreshKey::User(comment.author_email.clone()),
            &comment.author_email,
        )
        .await;
    if let Some(pin) = pin {
        state
            .queue
            .request(
                RefreshKey::User(pin.author_email.clone()),
                &comment.author_email,
            )
            .await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Like a pin. Liking twice is a no-op.
pub async fn like(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<LikeRequest>,
) -> ApiResult<StatusCode> {
    let pin = db::pins::get(&state.pool, id)
        .await
        .db_err()?
        .not_found(format!("Pin '{}' not found", id))?;

    let inserted = db::likes::insert(&state.pool, pin.id, &req.author_email)
        .await
        .db_err()?;
    if !inserted {
        return Ok(StatusCode::OK);
    }

    state
        .queue
        .request(RefreshKey::User(req.author_email.clone()), &req.author_email)
        .await;
    state
        .queue
        .request(RefreshKey::User(pin.author_email.clone()), &req.author_email)
        .await;

    Ok(StatusCode::CREATED)
}

/// Remove a like
pub async fn unlike(
    State(state): State<Arc<AppState>>,
    Path((id, email)): Path<(Uuid, String)>,
) -> ApiResult<StatusCode> {
    let pin = db::pins::get(&state.pool, id)
        .await
        .db_err()?
        .not_found(format!("Pin '{}' not found", id))?;

    let removed = db::likes::remove(&state.pool, pin.id, &email).await.db_err()?;
    if removed {
        state.queue.request(RefreshKey::User(email.clone()), &email).await;
        state
            .queue
            .request(RefreshKey::User(pin.author_email.clone()), &email)
            .await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Save a pin for later. Saving twice is a no-op.
pub async fn save(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SaveRequest>,
) -> ApiResult<StatusCode> {
    let pin = db::pins::get(&state.pool, id)
        .await
        .db_err()?
        .not_found(format!("Pin '{}' not found", id))?;

    let inserted = db::saved_pins::save(&state.pool, pin.id, &req.email).await.db_err()?;
    if !inserted {
        return Ok(StatusCode::OK);
    }

    // Only the saver's counter moves
    state
        .queue
        .request(RefreshKey::User(req.email.clone()), &req.email)
        .await;

    Ok(StatusCode::CREATED)
}

/// Remove a saved pin
pub async fn unsave(
    State(state): State<Arc<AppState>>,
    Path((id, email)): Path<(Uuid, String)>,
) -> ApiResult<StatusCode> {
    let pin = db::pins::get(&state.pool, id)
        .await
        .db_err()?
        .not_found(format!("Pin '{}' not found", id))?;

    let removed = db::saved_pins::unsave(&state.pool, pin.id, &email).await.db_err()?;
    if removed {
        state.queue.request(RefreshKey::User(email.clone()), &email).await;
    }

    Ok(StatusCode::NO_CONTENT)
}
