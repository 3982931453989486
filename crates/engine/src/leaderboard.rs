//! Per-category top-10 rankings

use std::collections::HashMap;

use common::models::{Category, Leaderboard, Profile, Stats};
use sqlx::PgPool;

/// Entries kept per ranked category
pub const LEADERBOARD_SIZE: usize = 10;

/// Rank every stored user snapshot
pub async fn for_users(pool: &PgPool) -> Result<Leaderboard, common::Error> {
    let stats = db::stats::for_users(pool)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    let users = db::users::list_all(pool)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    let profiles: HashMap<String, Profile> = users
        .into_iter()
        .map(|u| (u.email.clone(), Profile::User(u)))
        .collect();

    Ok(build(stats, &profiles))
}

/// Rank every stored team snapshot
pub async fn for_teams(pool: &PgPool) -> Result<Leaderboard, common::Error> {
    let stats = db::stats::for_teams(pool)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    let teams = db::teams::list_teams(pool)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    let profiles: HashMap<String, Profile> = teams
        .into_iter()
        .map(|t| (t.name.clone(), Profile::Team(t)))
        .collect();

    Ok(build(stats, &profiles))
}

/// Build every category ranking from one set of stats. The same working list
/// is re-sorted in place per category, in field order, so ties keep the order
/// the previous category's sort left them in.
pub fn build(mut stats: Vec<Stats>, profiles: &HashMap<String, Profile>) -> Leaderboard {
    Leaderboard {
        pins_posted: rank(&mut stats, Category::PinsPosted, profiles),
        comments_posted: rank(&mut stats, Category::CommentsPosted, profiles),
        comments_received: rank(&mut stats, Category::CommentsReceived, profiles),
        comments_received_one_pin: rank(&mut stats, Category::CommentsReceivedOnePin, profiles),
        likes_posted: rank(&mut stats, Category::LikesPosted, profiles),
        likes_received: rank(&mut stats, Category::LikesReceived, profiles),
        likes_received_one_pin: rank(&mut stats, Category::LikesReceivedOnePin, profiles),
        connections: rank(&mut stats, Category::Connections, profiles),
    }
}

/// Sort descending by one category's counter and resolve the top keys to
/// profiles. Keys with no matching profile stay in place as `None`.
fn rank(
    stats: &mut [Stats],
    category: Category,
    profiles: &HashMap<String, Profile>,
) -> Vec<Option<Profile>> {
    stats.sort_by(|a, b| b.counter(category).cmp(&a.counter(category)));

    stats
        .iter()
        .take(LEADERBOARD_SIZE)
        .map(|s| profiles.get(&s.profile_key).cloned())
        .collect()
}
