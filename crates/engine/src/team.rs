//! Team score aggregation

use common::models::Stats;

/// Team size above which the diminishing-returns modulator kicks in
const MODULATOR_THRESHOLD: usize = 3;

/// A team's combined member stats plus the member count the badge evaluator
/// needs for the secret rule
#[derive(Debug, Clone)]
pub struct TeamAggregate {
    pub stats: Stats,
    /// Members that contributed a stats row
    pub members: usize,
}

/// Diminishing-returns divisor for a team of the given size
pub fn modulator(members: usize) -> f64 {
    if members > MODULATOR_THRESHOLD {
        1.0 + 0.5 * (members - MODULATOR_THRESHOLD) as f64
    } else {
        1.0
    }
}

/// Combine member stats into one synthetic team snapshot. Additive counters
/// are summed and then shrunk by the modulator, truncating; the per-pin
/// maxima and the secret count are left untouched. The secret count becomes
/// the number of members that have found the secret.
pub fn aggregate(team_name: &str, members: &[Stats]) -> TeamAggregate {
    let mut stats = Stats::zero(team_name);
    stats.team = true;

    for member in members {
        stats.pins_posted += member.pins_posted;
        stats.likes_posted += member.likes_posted;
        stats.likes_received += member.likes_received;
        stats.comments_posted += member.comments_posted;
        stats.comments_received += member.comments_received;
        stats.saved_pins += member.saved_pins;
        stats.connections += member.connections;
        stats.likes_received_one_pin = stats
            .likes_received_one_pin
            .max(member.likes_received_one_pin);
        stats.comments_received_one_pin = stats
            .comments_received_one_pin
            .max(member.comments_received_one_pin);
        if member.secret_count > 0 {
            stats.secret_count += 1;
        }
    }

    let factor = modulator(members.len());
    if factor > 1.0 {
        stats.pins_posted = (stats.pins_posted as f64 / factor) as i64;
        stats.likes_posted = (stats.likes_posted as f64 / factor) as i64;
        stats.likes_received = (stats.likes_received as f64 / factor) as i64;
        stats.comments_posted = (stats.comments_posted as f64 / factor) as i64;
        stats.comments_received = (stats.comments_received as f64 / factor) as i64;
        stats.saved_pins = (stats.saved_pins as f64 / factor) as i64;
        stats.connections = (stats.connections as f64 / factor) as i64;
    }

    TeamAggregate {
        stats,
        members: members.len(),
    }
}
