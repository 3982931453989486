//! Badge notification emission

use common::models::Category;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::levels::MAX_LEVEL;

/// Type tag carried by every engine notification
const KIND_BADGE: &str = "badge";

/// Emits badge notifications. Inserts are fire-and-forget: a failure is
/// logged and swallowed so it never aborts the recompute that produced it.
#[derive(Clone)]
pub struct Notifier {
    pool: PgPool,
    base_url: String,
}

impl Notifier {
    pub fn new(pool: PgPool, base_url: impl Into<String>) -> Self {
        Self {
            pool,
            base_url: base_url.into(),
        }
    }

    /// Announce a category milestone
    pub async fn badge_earned(&self, recipient: &str, actor: &str, category: Category, level: i16) {
        let message = milestone_message(category, level);
        self.send(recipient, actor, &message).await;
    }

    /// Announce a global-level milestone
    pub async fn champion(&self, recipient: &str, actor: &str, level: i16) {
        let message = champion_message(level);
        self.send(recipient, actor, &message).await;
    }

    /// Announce the first secret unlock
    pub async fn secret_unlocked(&self, recipient: &str, actor: &str) {
        self.send(recipient, actor, SECRET_MESSAGE).await;
    }

    /// Deep link to the recipient's badge page
    fn badge_link(&self, profile_key: &str) -> String {
        format!("{}/profiles/{}/badges", self.base_url, profile_key)
    }

    async fn send(&self, recipient: &str, actor: &str, message: &str) {
        let link = self.badge_link(recipient);
        match db::notifications::insert(&self.pool, recipient, &link, message, KIND_BADGE, actor)
            .await
        {
            Ok(_) => info!("🏅 Badge notification for {}: {}", recipient, message),
            Err(e) => warn!("Failed to notify {}: {}", recipient, e),
        }
    }
}

pub const SECRET_MESSAGE: &str = "Curieux !";

/// French milestone message for a category level
pub fn milestone_message(category: Category, level: i16) -> String {
    match category {
        Category::PinsPosted => {
            format!("Vous êtes désormais un pinneur {} !", person_adjective(level))
        }
        Category::LikesPosted => {
            format!("Vous êtes désormais un liker {} !", person_adjective(level))
        }
        Category::CommentsPosted => format!(
            "Vous êtes désormais un commentateur {} !",
            person_adjective(level)
        ),
        Category::SavedPins => format!(
            "Vous êtes désormais un collectionneur {} !",
            person_adjective(level)
        ),
        Category::Connections => {
            format!("Vous êtes désormais un habitué {} !", person_adjective(level))
        }
        Category::LikesReceived => format!("Vos pins sont {} aimés !", degree_adverb(level)),
        Category::CommentsReceived => {
            format!("Vos pins sont {} commentés !", degree_adverb(level))
        }
        Category::LikesReceivedOnePin => {
            format!("Un de vos pins est {} aimé !", degree_adverb(level))
        }
        Category::CommentsReceivedOnePin => {
            format!("Un de vos pins est {} commenté !", degree_adverb(level))
        }
    }
}

/// French message for a global-level milestone
pub fn champion_message(level: i16) -> String {
    if level == MAX_LEVEL {
        "Champion absolu ! Toutes vos catégories sont au niveau maximum !".to_string()
    } else {
        format!("Champion ! Toutes vos catégories ont atteint le niveau {level} !")
    }
}

/// Adjective for the person-centric categories
fn person_adjective(level: i16) -> &'static str {
    match level {
        3 => "amateur",
        5 => "acharné",
        7 => "d'or",
        _ => "absolu",
    }
}

/// Adverb for the received and per-pin categories
fn degree_adverb(level: i16) -> &'static str {
    match level {
        3 => "bien",
        5 => "très",
        7 => "extrêment",
        _ => "incontestablement",
    }
}
