//! Application state

use common::Config;
use engine::notify::Notifier;
use engine::{RefreshQueue, Refresher};
use sqlx::PgPool;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub refresher: Refresher,
    pub queue: RefreshQueue,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        let notifier = Notifier::new(pool.clone(), config.public_base_url.clone());
        let refresher = Refresher::new(pool.clone(), notifier);
        let queue = RefreshQueue::spawn(refresher.clone(), config.refresh_queue_capacity);
        Self {
            config,
            pool,
            refresher,
            queue,
        }
    }
}
