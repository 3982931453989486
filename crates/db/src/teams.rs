//! Team and membership queries

use common::models::{Team, User};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

fn team_from_row(row: &PgRow) -> Team {
    Team {
        id: row.get("id"),
        name: row.get("name"),
        display_name: row.get("display_name"),
        custom_avatar: row.get("custom_avatar"),
        created_at: row.get("created_at"),
    }
}

/// Create a new team
pub async fn create_team(
    pool: &PgPool,
    name: &str,
    display_name: &str,
) -> Result<Team, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO teams (id, name, display_name, custom_avatar)
        VALUES ($1, $2, $3, FALSE)
        RETURNING id, name, display_name, custom_avatar, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(display_name)
    .fetch_one(pool)
    .await?;

    Ok(team_from_row(&row))
}

/// Get a team by name
pub async fn get_team_by_name(pool: &PgPool, name: &str) -> Result<Option<Team>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, name, display_name, custom_avatar, created_at
        FROM teams
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| team_from_row(&r)))
}

/// List all teams
pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, display_name, custom_avatar, created_at
        FROM teams
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(team_from_row).collect())
}

/// Delete a team (membership rows cascade)
pub async fn delete_team(pool: &PgPool, name: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM teams WHERE name = $1")
        .bind(name)
        .execute(pool)
        .await?;

    Ok(())
}

/// Add a user to a team
pub async fn add_member(pool: &PgPool, team_name: &str, email: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO team_members (team_name, email)
        VALUES ($1, $2)
        ON CONFLICT (team_name, email) DO NOTHING
        "#,
    )
    .bind(team_name)
    .bind(email)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a user from a team
pub async fn remove_member(
    pool: &PgPool,
    team_name: &str,
    email: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM team_members
        WHERE team_name = $1 AND email = $2
        "#,
    )
    .bind(team_name)
    .bind(email)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get the members of a team
pub async fn members(pool: &PgPool, team_name: &str) -> Result<Vec<User>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT u.id, u.email, u.display_name, u.custom_avatar, u.created_at, u.updated_at
        FROM team_members tm
        JOIN users u ON u.email = tm.email
        WHERE tm.team_name = $1
        ORDER BY u.email
        "#,
    )
    .bind(team_name)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|r| User {
            id: r.get("id"),
            email: r.get("email"),
            display_name: r.get("display_name"),
            custom_avatar: r.get("custom_avatar"),
            created_at: r.get("created_at"),
            updated_at: r.get("updated_at"),
        })
        .collect())
}
