//! Profile recomputation orchestration

use chrono::{Duration, Utc};
use common::models::{Badges, Category, Stats};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use crate::notify::Notifier;
use crate::{accumulate, badges, levels, team};

/// Recomputes stats and badges for one profile and emits whatever
/// notifications the deltas call for. Shared by the API handlers and the
/// background refresh queue.
#[derive(Clone)]
pub struct Refresher {
    pool: PgPool,
    notifier: Notifier,
}

/// Outcome of a full recompute pass
#[derive(Debug, Default, Serialize)]
pub struct RefreshSummary {
    pub users: usize,
    pub teams: usize,
}

impl Refresher {
    pub fn new(pool: PgPool, notifier: Notifier) -> Self {
        Self { pool, notifier }
    }

    /// Recompute one user's stats and badges from raw activity
    pub async fn refresh_user(
        &self,
        email: &str,
        actor: &str,
    ) -> Result<(Stats, Badges), common::Error> {
        let prev_stats = self.stored_stats(email, false).await?;
        let prev_badges = self.stored_badges(email).await?;

        let snapshot = accumulate::gather(&self.pool, email).await?;
        let next_stats = accumulate::apply(&snapshot, &prev_stats);

        for (category, level) in accumulate::crossed_milestones(&prev_stats, &next_stats) {
            self.notifier.badge_earned(email, actor, category, level).await;
        }

        db::stats::upsert(&self.pool, &next_stats)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let evaluation = badges::evaluate_user(&next_stats, &prev_badges);
        self.announce(email, actor, &evaluation).await;

        db::badges::upsert(&self.pool, &evaluation.badges)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        Ok((next_stats, evaluation.badges))
    }

    /// Recompute a team's synthetic stats from its members' stored stats
    pub async fn refresh_team(
        &self,
        name: &str,
        actor: &str,
    ) -> Result<(Stats, Badges), common::Error> {
        let prev_stats = self.stored_stats(name, true).await?;
        let prev_badges = self.stored_badges(name).await?;

        let members = db::stats::for_team_members(&self.pool, name)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;
        let aggregate = team::aggregate(name, &members);

        for (category, level) in accumulate::crossed_milestones(&prev_stats, &aggregate.stats) {
            self.notifier.badge_earned(name, actor, category, level).await;
        }

        db::stats::upsert(&self.pool, &aggregate.stats)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let evaluation = badges::evaluate_team(&aggregate, &prev_badges);
        self.announce(name, actor, &evaluation).await;

        db::badges::upsert(&self.pool, &evaluation.badges)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        Ok((aggregate.stats, evaluation.badges))
    }

    /// Count a connection for a user, at most once per rolling 24 hours
    pub async fn track_connection(&self, email: &str) -> Result<Stats, common::Error> {
        let mut stats = self.stored_stats(email, false).await?;

        let now = Utc::now();
        let counted = match stats.last_connection_at {
            Some(last) => now - last >= Duration::hours(24),
            None => true,
        };
        if !counted {
            return Ok(stats);
        }

        let old_level = levels::weighted_level(Category::Connections, stats.connections);
        stats.connections += 1;
        stats.last_connection_at = Some(now);
        let new_level = levels::weighted_level(Category::Connections, stats.connections);

        db::stats::upsert(&self.pool, &stats)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        if new_level > old_level && levels::is_milestone(new_level) {
            self.notifier
                .badge_earned(email, email, Category::Connections, new_level)
                .await;
        }

        // Connections feed the global level, so badges need a fresh pass
        let prev_badges = self.stored_badges(email).await?;
        let evaluation = badges::evaluate_user(&stats, &prev_badges);
        self.announce(email, email, &evaluation).await;

        db::badges::upsert(&self.pool, &evaluation.badges)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        Ok(stats)
    }

    /// Record a secret unlock for a user
    pub async fn set_secret(&self, email: &str) -> Result<Badges, common::Error> {
        let mut stats = self.stored_stats(email, false).await?;
        stats.secret_count += 1;

        db::stats::upsert(&self.pool, &stats)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let prev_badges = self.stored_badges(email).await?;
        let evaluation = badges::evaluate_user(&stats, &prev_badges);
        self.announce(email, email, &evaluation).await;

        db::badges::upsert(&self.pool, &evaluation.badges)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        Ok(evaluation.badges)
    }

    /// Recompute every user, then every team built from the fresh user stats
    pub async fn refresh_all(&self) -> Result<RefreshSummary, common::Error> {
        info!("Starting full recompute of all profiles");

        let mut summary = RefreshSummary::default();

        let users = db::users::list_all(&self.pool)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;
        for user in &users {
            self.refresh_user(&user.email, &user.email).await?;
            summary.users += 1;
        }

        let teams = db::teams::list_teams(&self.pool)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;
        for team in &teams {
            self.refresh_team(&team.name, &team.name).await?;
            summary.teams += 1;
        }

        info!(
            "Recompute complete: {} users, {} teams",
            summary.users, summary.teams
        );
        Ok(summary)
    }

    async fn announce(&self, recipient: &str, actor: &str, evaluation: &badges::Evaluation) {
        if let Some(level) = evaluation.champion {
            self.notifier.champion(recipient, actor, level).await;
        }
        if evaluation.secret_unlocked {
            self.notifier.secret_unlocked(recipient, actor).await;
        }
    }

    /// Stored stats for a profile, or a zero snapshot if none exists yet
    async fn stored_stats(&self, profile_key: &str, team: bool) -> Result<Stats, common::Error> {
        let stats = db::stats::get(&self.pool, profile_key)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?
            .unwrap_or_else(|| {
                let mut zero = Stats::zero(profile_key);
                zero.team = team;
                zero
            });
        Ok(stats)
    }

    /// Stored badges for a profile, or zeroes if none exist yet
    async fn stored_badges(&self, profile_key: &str) -> Result<Badges, common::Error> {
        let badges = db::badges::get(&self.pool, profile_key)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?
            .unwrap_or_else(|| Badges::zero(profile_key));
        Ok(badges)
    }
}
