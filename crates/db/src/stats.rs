//! Stats snapshot store, keyed by profile (user email or team name)

use common::models::Stats;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

fn stats_from_row(row: &PgRow) -> Stats {
    Stats {
        profile_key: row.get("profile_key"),
        team: row.get("team"),
        pins_posted: row.get("pins_posted"),
        likes_posted: row.get("likes_posted"),
        likes_received: row.get("likes_received"),
        likes_received_one_pin: row.get("likes_received_one_pin"),
        comments_posted: row.get("comments_posted"),
        comments_received: row.get("comments_received"),
        comments_received_one_pin: row.get("comments_received_one_pin"),
        saved_pins: row.get("saved_pins"),
        connections: row.get("connections"),
        secret_count: row.get("secret_count"),
        last_connection_at: row.get("last_connection_at"),
    }
}

/// Get the stored snapshot for a profile
pub async fn get(pool: &PgPool, profile_key: &str) -> Result<Option<Stats>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT profile_key, team, pins_posted, likes_posted, likes_received,
               likes_received_one_pin, comments_posted, comments_received,
               comments_received_one_pin, saved_pins, connections, secret_count,
               last_connection_at
        FROM stats
        WHERE profile_key = $1
        "#,
    )
    .bind(profile_key)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| stats_from_row(&r)))
}

/// Overwrite (or create) the snapshot for a profile
pub async fn upsert(pool: &PgPool, stats: &Stats) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO stats (
            profile_key, team, pins_posted, likes_posted, likes_received,
            likes_received_one_pin, comments_posted, comments_received,
            comments_received_one_pin, saved_pins, connections, secret_count,
            last_connection_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW())
        ON CONFLICT (profile_key) DO UPDATE
        SET team = EXCLUDED.team,
            pins_posted = EXCLUDED.pins_posted,
            likes_posted = EXCLUDED.likes_posted,
            likes_received = EXCLUDED.likes_received,
            likes_received_one_pin = EXCLUDED.likes_received_one_pin,
            comments_posted = EXCLUDED.comments_posted,
            comments_received = EXCLUDED.comments_received,
            comments_received_one_pin = EXCLUDED.comments_received_one_pin,
            saved_pins = EXCLUDED.saved_pins,
            connections = EXCLUDED.connections,
            secret_count = EXCLUDED.secret_count,
            last_connection_at = EXCLUDED.last_connection_at,
            updated_at = NOW()
        "#,
    )
    .bind(&stats.profile_key)
    .bind(stats.team)
    .bind(stats.pins_posted)
    .bind(stats.likes_posted)
    .bind(stats.likes_received)
    .bind(stats.likes_received_one_pin)
    .bind(stats.comments_posted)
    .bind(stats.comments_received)
    .bind(stats.comments_received_one_pin)
    .bind(stats.saved_pins)
    .bind(stats.connections)
    .bind(stats.secret_count)
    .bind(stats.last_connection_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// All user snapshots (team rows excluded)
pub async fn for_users(pool: &PgPool) -> Result<Vec<Stats>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT profile_key, team, pins_posted, likes_posted, likes_received,
               likes_received_one_pin, comments_posted, comments_received,
               comments_received_one_pin, saved_pins, connections, secret_count,
               last_connection_at
        FROM stats
        WHERE team = FALSE
        ORDER BY profile_key
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(stats_from_row).collect())
}

/// All synthetic team snapshots
pub async fn for_teams(pool: &PgPool) -> Result<Vec<Stats>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT profile_key, team, pins_posted, likes_posted, likes_received,
               likes_received_one_pin, comments_posted, comments_received,
               comments_received_one_pin, saved_pins, connections, secret_count,
               last_connection_at
        FROM stats
        WHERE team = TRUE
        ORDER BY profile_key
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(stats_from_row).collect())
}

/// Stored snapshots of every member of a team. Members without a snapshot do
/// not appear and contribute nothing to the aggregate.
pub async fn for_team_members(
    pool: &PgPool,
    team_name: &str,
) -> Result<Vec<Stats>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT s.profile_key, s.team, s.pins_posted, s.likes_posted, s.likes_received,
               s.likes_received_one_pin, s.comments_posted, s.comments_received,
               s.comments_received_one_pin, s.saved_pins, s.connections, s.secret_count,
               s.last_connection_at
        FROM stats s
        JOIN team_members tm ON tm.email = s.profile_key
        WHERE tm.team_name = $1
        ORDER BY s.profile_key
        "#,
    )
    .bind(team_name)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(stats_from_row).collect())
}
