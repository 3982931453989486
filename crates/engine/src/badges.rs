//! Badge level evaluation

use common::models::{Badges, Category, Stats};

use crate::levels;
use crate::team::TeamAggregate;

/// Freshly computed badges plus the announcements the recompute calls for
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub badges: Badges,
    /// Set when the global level rose into a milestone
    pub champion: Option<i16>,
    /// Set on the first transition of the secret level away from zero
    pub secret_unlocked: bool,
}

/// Evaluate a user's badges against its freshly recomputed stats
pub fn evaluate_user(stats: &Stats, prev: &Badges) -> Evaluation {
    let mut badges = from_stats(stats);

    // One-shot: once found, the secret mirrors the counter and never resets
    badges.secret_level = if stats.secret_count > 0 {
        stats.secret_count
    } else {
        prev.secret_level
    };

    against_previous(badges, prev)
}

/// Evaluate a team's badges. The secret badge only lights up when every
/// contributing member has found the secret; the "Curieux !" announcement
/// stays personal, so no unlock event is raised here.
pub fn evaluate_team(aggregate: &TeamAggregate, prev: &Badges) -> Evaluation {
    let mut badges = from_stats(&aggregate.stats);

    badges.secret_level = if aggregate.members > 0
        && aggregate.stats.secret_count == aggregate.members as i64
    {
        aggregate.stats.secret_count
    } else {
        0
    };

    let mut evaluation = against_previous(badges, prev);
    evaluation.secret_unlocked = false;
    evaluation
}

/// Map every category counter through the level table. The global level is
/// the minimum across the nine categories; the secret is filled in by the
/// caller.
fn from_stats(stats: &Stats) -> Badges {
    let mut badges = Badges {
        profile_key: stats.profile_key.clone(),
        pins_posted_level: levels::weighted_level(Category::PinsPosted, stats.pins_posted),
        likes_posted_level: levels::weighted_level(Category::LikesPosted, stats.likes_posted),
        likes_received_level: levels::weighted_level(Category::LikesReceived, stats.likes_received),
        likes_received_one_pin_level: levels::weighted_level(
            Category::LikesReceivedOnePin,
            stats.likes_received_one_pin,
        ),
        comments_posted_level: levels::weighted_level(
            Category::CommentsPosted,
            stats.comments_posted,
        ),
        comments_received_level: levels::weighted_level(
            Category::CommentsReceived,
            stats.comments_received,
        ),
        comments_received_one_pin_level: levels::weighted_level(
            Category::CommentsReceivedOnePin,
            stats.comments_received_one_pin,
        ),
        saved_pins_level: levels::weighted_level(Category::SavedPins, stats.saved_pins),
        connections_level: levels::weighted_level(Category::Connections, stats.connections),
        global_level: 0,
        secret_level: 0,
    };

    badges.global_level = Category::SCORABLE
        .iter()
        .map(|c| badges.category_level(*c))
        .min()
        .unwrap_or(0);

    badges
}

fn against_previous(badges: Badges, prev: &Badges) -> Evaluation {
    let champion = if badges.global_level > prev.global_level
        && levels::is_milestone(badges.global_level)
    {
        Some(badges.global_level)
    } else {
        None
    };

    let secret_unlocked = prev.secret_level == 0 && badges.secret_level > 0;

    Evaluation {
        badges,
        champion,
        secret_unlocked,
    }
}
