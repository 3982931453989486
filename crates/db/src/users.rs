//! User queries

use common::models::User;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

fn user_from_row(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        email: row.get("email"),
        display_name: row.get("display_name"),
        custom_avatar: row.get("custom_avatar"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Create or update a user
pub async fn upsert(
    pool: &PgPool,
    email: &str,
    display_name: &str,
    custom_avatar: bool,
) -> Result<User, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO users (id, email, display_name, custom_avatar, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        ON CONFLICT (email) DO UPDATE
        SET display_name = EXCLUDED.display_name,
            custom_avatar = EXCLUDED.custom_avatar,
            updated_at = NOW()
        RETURNING id, email, display_name, custom_avatar, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(display_name)
    .bind(custom_avatar)
    .fetch_one(pool)
    .await?;

    Ok(user_from_row(&row))
}

/// Get a user by email
pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, email, display_name, custom_avatar, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| user_from_row(&r)))
}

/// List all users
pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, email, display_name, custom_avatar, created_at, updated_at
        FROM users
        ORDER BY email
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(user_from_row).collect())
}
