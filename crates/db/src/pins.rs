//! Pin queries

use common::models::Pin;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

fn pin_from_row(row: &PgRow) -> Pin {
    Pin {
        id: row.get("id"),
        author_email: row.get("author_email"),
        title: row.get("title"),
        body: row.get("body"),
        created_at: row.get("created_at"),
    }
}

/// Insert a new pin
pub async fn insert(
    pool: &PgPool,
    author_email: &str,
    title: &str,
    body: Option<&str>,
) -> Result<Pin, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO pins (id, author_email, title, body)
        VALUES ($1, $2, $3, $4)
        RETURNING id, author_email, title, body, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(author_email)
    .bind(title)
    .bind(body)
    .fetch_one(pool)
    .await?;

    Ok(pin_from_row(&row))
}

/// Get a pin by id
pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Pin>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, author_email, title, body, created_at
        FROM pins
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| pin_from_row(&r)))
}

/// List pins, most recent first
pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Pin>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, author_email, title, body, created_at
        FROM pins
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(pin_from_row).collect())
}

/// Delete a pin (comments, likes and saves cascade)
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pins WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Received-engagement tallies for one authored pin
#[derive(Debug, Clone)]
pub struct PinEngagement {
    pub pin_id: Uuid,
    pub comments: i64,
    pub likes: i64,
}

/// Per-pin received comment/like counts for every pin authored by a profile
pub async fn engagement_by_author(
    pool: &PgPool,
    author_email: &str,
) -> Result<Vec<PinEngagement>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.id AS pin_id,
               (SELECT COUNT(*) FROM comments c WHERE c.pin_id = p.id) AS comments,
               (SELECT COUNT(*) FROM likes l WHERE l.pin_id = p.id) AS likes
        FROM pins p
        WHERE p.author_email = $1
        ORDER BY p.created_at
        "#,
    )
    .bind(author_email)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|r| PinEngagement {
            pin_id: r.get("pin_id"),
            comments: r.get("comments"),
            likes: r.get("likes"),
        })
        .collect())
}
