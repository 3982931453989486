//! Stats recomputation from raw activity

use common::models::{Category, Stats};
use db::pins::PinEngagement;
use sqlx::PgPool;

use crate::levels;

/// One user's raw activity, read in a single pass
#[derive(Debug, Clone, Default)]
pub struct ActivitySnapshot {
    pub pin_engagement: Vec<PinEngagement>,
    pub comments_posted: i64,
    pub likes_posted: i64,
    pub saved_pins: i64,
}

/// Read a user's raw activity from the content stores
pub async fn gather(pool: &PgPool, email: &str) -> Result<ActivitySnapshot, common::Error> {
    let pin_engagement = db::pins::engagement_by_author(pool, email)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    let comments_posted = db::comments::count_by_author(pool, email)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    let likes_posted = db::likes::count_by_author(pool, email)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    let saved_pins = db::saved_pins::count_for_profile(pool, email)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    Ok(ActivitySnapshot {
        pin_engagement,
        comments_posted,
        likes_posted,
        saved_pins,
    })
}

/// Rebuild the counter snapshot from raw activity. Connections, the secret
/// counter, and the connection timestamp are tracked incrementally elsewhere
/// and carried over unchanged.
pub fn apply(snapshot: &ActivitySnapshot, prev: &Stats) -> Stats {
    let mut next = prev.clone();

    next.pins_posted = snapshot.pin_engagement.len() as i64;
    next.comments_received = snapshot.pin_engagement.iter().map(|p| p.comments).sum();
    next.likes_received = snapshot.pin_engagement.iter().map(|p| p.likes).sum();
    next.comments_received_one_pin = snapshot
        .pin_engagement
        .iter()
        .map(|p| p.comments)
        .max()
        .unwrap_or(0);
    next.likes_received_one_pin = snapshot
        .pin_engagement
        .iter()
        .map(|p| p.likes)
        .max()
        .unwrap_or(0);
    next.comments_posted = snapshot.comments_posted;
    next.likes_posted = snapshot.likes_posted;
    next.saved_pins = snapshot.saved_pins;

    next
}

/// Categories whose level rose into a milestone between two snapshots.
/// Runs against the stored value before it is overwritten, so a second
/// recompute with no new activity finds nothing to announce.
pub fn crossed_milestones(prev: &Stats, next: &Stats) -> Vec<(Category, i16)> {
    let mut crossed = Vec::new();

    for category in Category::ACCUMULATED {
        let old_level = levels::weighted_level(category, prev.counter(category));
        let new_level = levels::weighted_level(category, next.counter(category));
        if new_level > old_level && levels::is_milestone(new_level) {
            crossed.push((category, new_level));
        }
    }

    crossed
}
