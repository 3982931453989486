//! Level table shared by every badge category

use common::models::Category;

/// Points needed to reach each level, ascending. Level n is reached at
/// `THRESHOLDS[n - 1]` points.
pub const THRESHOLDS: [f64; 10] = [
    1.0, 10.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0,
];

/// Highest reachable level
pub const MAX_LEVEL: i16 = 10;

/// Levels worth announcing
pub const MILESTONES: [i16; 4] = [3, 5, 7, 10];

/// Level reached by a weighted point total: the number of thresholds at or
/// below it. Total function, 0 below the first threshold.
pub fn level(points: f64) -> i16 {
    THRESHOLDS.iter().filter(|t| points >= **t).count() as i16
}

/// Weighted points for a raw counter in a category
pub fn points(category: Category, count: i64) -> f64 {
    count as f64 * category.weight()
}

/// Level for a raw counter in a category
pub fn weighted_level(category: Category, count: i64) -> i16 {
    level(points(category, count))
}

/// Progress through the current level's window, as a whole percentage.
/// 100 at the top level; below level 1 the window is the first threshold
/// itself, otherwise it runs from the threshold just reached to the next.
pub fn percent_to_next(points: f64) -> u8 {
    let lvl = level(points);
    if lvl == MAX_LEVEL {
        return 100;
    }
    if lvl == 0 {
        return (points * 100.0).round().min(100.0) as u8;
    }
    let floor = THRESHOLDS[lvl as usize - 1];
    let ceil = THRESHOLDS[lvl as usize];
    ((points - floor) / (ceil - floor) * 100.0).round() as u8
}

/// Whether a level is one of the announced milestones
pub fn is_milestone(level: i16) -> bool {
    MILESTONES.contains(&level)
}
