//! API routes

pub mod health;
pub mod leaderboard;
pub mod pins;
pub mod recalc;
pub mod teams;
pub mod users;
