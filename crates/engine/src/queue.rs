//! Background refresh queue

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, Mutex};
use tracing::{error, info, warn};

use crate::refresh::Refresher;

/// What a queued job recomputes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RefreshKey {
    User(String),
    Team(String),
}

impl RefreshKey {
    pub fn as_str(&self) -> &str {
        match self {
            RefreshKey::User(email) => email,
            RefreshKey::Team(name) => name,
        }
    }
}

struct RefreshJob {
    key: RefreshKey,
    actor: String,
    done: Option<oneshot::Sender<()>>,
}

/// Bounded queue feeding a single refresh worker. Overlapping requests for
/// the same profile collapse into one queued job, and a full queue drops the
/// request instead of blocking the caller; the next recompute reads the
/// latest data either way.
#[derive(Clone)]
pub struct RefreshQueue {
    tx: mpsc::Sender<RefreshJob>,
    pending: Arc<Mutex<HashSet<RefreshKey>>>,
}

impl RefreshQueue {
    /// Spawn the worker task and hand back the queue handle
    pub fn spawn(refresher: Refresher, capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        let pending = Arc::new(Mutex::new(HashSet::new()));
        tokio::spawn(worker(refresher, rx, pending.clone()));
        Self { tx, pending }
    }

    /// Queue a refresh without waiting for it
    pub async fn request(&self, key: RefreshKey, actor: &str) {
        self.enqueue(key, actor, None).await;
    }

    /// Queue a refresh and wait until the worker has run it
    pub async fn request_and_wait(&self, key: RefreshKey, actor: &str) {
        let (done_tx, done_rx) = oneshot::channel();
        self.enqueue(key, actor, Some(done_tx)).await;
        let _ = done_rx.await;
    }

    async fn enqueue(&self, key: RefreshKey, actor: &str, done: Option<oneshot::Sender<()>>) {
        {
            let mut pending = self.pending.lock().await;
            // Waiters always get their own job so the done signal fires
            if done.is_none() && pending.contains(&key) {
                return;
            }
            pending.insert(key.clone());
        }

        let job = RefreshJob {
            key: key.clone(),
            actor: actor.to_string(),
            done,
        };
        if self.tx.try_send(job).is_err() {
            self.pending.lock().await.remove(&key);
            warn!("Refresh queue full, dropping refresh of {}", key.as_str());
        }
    }
}

async fn worker(
    refresher: Refresher,
    mut rx: mpsc::Receiver<RefreshJob>,
    pending: Arc<Mutex<HashSet<RefreshKey>>>,
) {
    info!("Refresh worker started");

    while let Some(job) = rx.recv().await {
        pending.lock().await.remove(&job.key);

        let result = match &job.key {
            RefreshKey::User(email) => refresher.refresh_user(email, &job.actor).await.map(|_| ()),
            RefreshKey::Team(name) => refresher.refresh_team(name, &job.actor).await.map(|_| ()),
        };
        if let Err(e) = result {
            error!("Background refresh of {} failed: {}", job.key.as_str(), e);
        }

        if let Some(done) = job.done {
            let _ = done.send(());
        }
    }
}
