//! Saved-pin queries

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Save a pin for a user. Returns false if already saved.
pub async fn save(pool: &PgPool, pin_id: Uuid, email: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO saved_pins (pin_id, email)
        VALUES ($1, $2)
        ON CONFLICT (pin_id, email) DO NOTHING
        "#,
    )
    .bind(pin_id)
    .bind(email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove a saved pin
pub async fn unsave(pool: &PgPool, pin_id: Uuid, email: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM saved_pins
        WHERE pin_id = $1 AND email = $2
        "#,
    )
    .bind(pin_id)
    .bind(email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Count pins saved by a profile
pub async fn count_for_profile(pool: &PgPool, email: &str) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM saved_pins WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}
