//! Like queries

use common::models::Like;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Add a like. Returns false if the user already liked the pin.
pub async fn insert(pool: &PgPool, pin_id: Uuid, author_email: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO likes (pin_id, author_email)
        VALUES ($1, $2)
        ON CONFLICT (pin_id, author_email) DO NOTHING
        "#,
    )
    .bind(pin_id)
    .bind(author_email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove a like
pub async fn remove(pool: &PgPool, pin_id: Uuid, author_email: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM likes
        WHERE pin_id = $1 AND author_email = $2
        "#,
    )
    .bind(pin_id)
    .bind(author_email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// List likes on a pin, oldest first
pub async fn list_for_pin(pool: &PgPool, pin_id: Uuid) -> Result<Vec<Like>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT pin_id, author_email, created_at
        FROM likes
        WHERE pin_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(pin_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|r| Like {
            pin_id: r.get("pin_id"),
            author_email: r.get("author_email"),
            created_at: r.get("created_at"),
        })
        .collect())
}

/// Count likes given by a profile
pub async fn count_by_author(pool: &PgPool, author_email: &str) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM likes WHERE author_email = $1")
        .bind(author_email)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Count likes received on a pin
pub async fn count_for_pin(pool: &PgPool, pin_id: Uuid) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM likes WHERE pin_id = $1")
        .bind(pin_id)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}
