//! Notification store

use common::models::Notification;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

fn notification_from_row(row: &PgRow) -> Notification {
    Notification {
        id: row.get("id"),
        recipient: row.get("recipient"),
        link: row.get("link"),
        message: row.get("message"),
        kind: row.get("kind"),
        actor: row.get("actor"),
        seen: row.get("seen"),
        created_at: row.get("created_at"),
    }
}

/// Insert a notification for a recipient
pub async fn insert(
    pool: &PgPool,
    recipient: &str,
    link: &str,
    message: &str,
    kind: &str,
    actor: &str,
) -> Result<Notification, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO notifications (id, recipient, link, message, kind, actor)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, recipient, link, message, kind, actor, seen, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(recipient)
    .bind(link)
    .bind(message)
    .bind(kind)
    .bind(actor)
    .fetch_one(pool)
    .await?;

    Ok(notification_from_row(&row))
}

/// Most recent notifications for a recipient, newest first
pub async fn list_for_recipient(
    pool: &PgPool,
    recipient: &str,
    limit: i64,
) -> Result<Vec<Notification>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, recipient, link, message, kind, actor, seen, created_at
        FROM notifications
        WHERE recipient = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(recipient)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(notification_from_row).collect())
}

/// Mark every notification of a recipient as seen, returning how many changed
pub async fn mark_all_seen(pool: &PgPool, recipient: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE notifications SET seen = TRUE WHERE recipient = $1 AND seen = FALSE",
    )
    .bind(recipient)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
