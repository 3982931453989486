//! Badge level store, one row per profile

use common::models::Badges;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

fn badges_from_row(row: &PgRow) -> Badges {
    Badges {
        profile_key: row.get("profile_key"),
        pins_posted_level: row.get("pins_posted_level"),
        likes_posted_level: row.get("likes_posted_level"),
        likes_received_level: row.get("likes_received_level"),
        likes_received_one_pin_level: row.get("likes_received_one_pin_level"),
        comments_posted_level: row.get("comments_posted_level"),
        comments_received_level: row.get("comments_received_level"),
        comments_received_one_pin_level: row.get("comments_received_one_pin_level"),
        saved_pins_level: row.get("saved_pins_level"),
        connections_level: row.get("connections_level"),
        global_level: row.get("global_level"),
        secret_level: row.get("secret_level"),
    }
}

/// Get the stored badge levels for a profile
pub async fn get(pool: &PgPool, profile_key: &str) -> Result<Option<Badges>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT profile_key, pins_posted_level, likes_posted_level, likes_received_level,
               likes_received_one_pin_level, comments_posted_level, comments_received_level,
               comments_received_one_pin_level, saved_pins_level, connections_level,
               global_level, secret_level
        FROM badges
        WHERE profile_key = $1
        "#,
    )
    .bind(profile_key)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| badges_from_row(&r)))
}

/// Overwrite (or create) the badge levels for a profile
pub async fn upsert(pool: &PgPool, badges: &Badges) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO badges (
            profile_key, pins_posted_level, likes_posted_level, likes_received_level,
            likes_received_one_pin_level, comments_posted_level, comments_received_level,
            comments_received_one_pin_level, saved_pins_level, connections_level,
            global_level, secret_level, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW())
        ON CONFLICT (profile_key) DO UPDATE
        SET pins_posted_level = EXCLUDED.pins_posted_level,
            likes_posted_level = EXCLUDED.likes_posted_level,
            likes_received_level = EXCLUDED.likes_received_level,
            likes_received_one_pin_level = EXCLUDED.likes_received_one_pin_level,
            comments_posted_level = EXCLUDED.comments_posted_level,
            comments_received_level = EXCLUDED.comments_received_level,
            comments_received_one_pin_level = EXCLUDED.comments_received_one_pin_level,
            saved_pins_level = EXCLUDED.saved_pins_level,
            connections_level = EXCLUDED.connections_level,
            global_level = EXCLUDED.global_level,
            secret_level = EXCLUDED.secret_level,
            updated_at = NOW()
        "#,
    )
    .bind(&badges.profile_key)
    .bind(badges.pins_posted_level)
    .bind(badges.likes_posted_level)
    .bind(badges.likes_received_level)
    .bind(badges.likes_received_one_pin_level)
    .bind(badges.comments_posted_level)
    .bind(badges.comments_received_level)
    .bind(badges.comments_received_one_pin_level)
    .bind(badges.saved_pins_level)
    .bind(badges.connections_level)
    .bind(badges.global_level)
    .bind(badges.secret_level)
    .execute(pool)
    .await?;

    Ok(())
}
