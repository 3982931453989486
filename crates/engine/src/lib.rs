//! Scoring engine: level table, stat recomputation, badges, team
//! aggregation, leaderboards, and badge notifications

pub mod accumulate;
pub mod badges;
pub mod leaderboard;
pub mod levels;
pub mod notify;
pub mod queue;
pub mod refresh;
pub mod team;

pub use queue::{RefreshKey, RefreshQueue};
pub use refresh::Refresher;

#[cfg(test)]
mod accumulate_test;
#[cfg(test)]
mod leaderboard_test;
#[cfg(test)]
mod levels_test;
#[cfg(test)]
mod notify_test;
#[cfg(test)]
mod team_test;
