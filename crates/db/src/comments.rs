//! Comment queries

use common::models::Comment;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

fn comment_from_row(row: &PgRow) -> Comment {
    Comment {
        id: row.get("id"),
        pin_id: row.get("pin_id"),
        author_email: row.get("author_email"),
        body: row.get("body"),
        created_at: row.get("created_at"),
    }
}

/// Insert a new comment
pub async fn insert(
    pool: &PgPool,
    pin_id: Uuid,
    author_email: &str,
    body: &str,
) -> Result<Comment, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO comments (id, pin_id, author_email, body)
        VALUES ($1, $2, $3, $4)
        RETURNING id, pin_id, author_email, body, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(pin_id)
    .bind(author_email)
    .bind(body)
    .fetch_one(pool)
    .await?;

    Ok(comment_from_row(&row))
}

/// Get a comment by id
pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Comment>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, pin_id, author_email, body, created_at
        FROM comments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| comment_from_row(&r)))
}

/// List comments on a pin, oldest first
pub async fn list_for_pin(pool: &PgPool, pin_id: Uuid) -> Result<Vec<Comment>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, pin_id, author_email, body, created_at
        FROM comments
        WHERE pin_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(pin_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(comment_from_row).collect())
}

/// Delete a comment
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count comments authored by a profile
pub async fn count_by_author(pool: &PgPool, author_email: &str) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM comments WHERE author_email = $1")
        .bind(author_email)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Count comments received on a pin
pub async fn count_for_pin(pool: &PgPool, pin_id: Uuid) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM comments WHERE pin_id = $1")
        .bind(pin_id)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}
