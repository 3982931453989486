//! Domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, keyed by email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub custom_avatar: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A team, keyed by name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub custom_avatar: bool,
    pub created_at: DateTime<Utc>,
}

/// A scorable profile: users and teams both hold stats and badges and appear
/// on leaderboards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Profile {
    User(User),
    Team(Team),
}

impl Profile {
    /// Stable identifier: email for users, name for teams
    pub fn key(&self) -> &str {
        match self {
            Profile::User(u) => &u.email,
            Profile::Team(t) => &t.name,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Profile::User(u) => &u.display_name,
            Profile::Team(t) => &t.display_name,
        }
    }
}

/// A posted content item, the board's core post type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    pub id: Uuid,
    pub author_email: String,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A comment on a pin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub pin_id: Uuid,
    pub author_email: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A like on a pin (one per user per pin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub pin_id: Uuid,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
}

/// A scoring category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PinsPosted,
    LikesPosted,
    LikesReceived,
    LikesReceivedOnePin,
    CommentsPosted,
    CommentsReceived,
    CommentsReceivedOnePin,
    SavedPins,
    Connections,
}

impl Category {
    /// Every category that maps to a badge level
    pub const SCORABLE: [Category; 9] = [
        Category::PinsPosted,
        Category::LikesPosted,
        Category::LikesReceived,
        Category::LikesReceivedOnePin,
        Category::CommentsPosted,
        Category::CommentsReceived,
        Category::CommentsReceivedOnePin,
        Category::SavedPins,
        Category::Connections,
    ];

    /// Counters recomputed by the stat accumulator: everything except
    /// connections, which only the connection tracker touches
    pub const ACCUMULATED: [Category; 8] = [
        Category::PinsPosted,
        Category::LikesPosted,
        Category::LikesReceived,
        Category::LikesReceivedOnePin,
        Category::CommentsPosted,
        Category::CommentsReceived,
        Category::CommentsReceivedOnePin,
        Category::SavedPins,
    ];

    /// Fixed multiplier converting a raw counter into points
    pub fn weight(&self) -> f64 {
        match self {
            Category::PinsPosted => 5.0,
            Category::LikesPosted => 1.5,
            Category::LikesReceived => 1.5,
            Category::LikesReceivedOnePin => 5.0,
            Category::CommentsPosted => 3.0,
            Category::CommentsReceived => 2.0,
            Category::CommentsReceivedOnePin => 7.0,
            Category::SavedPins => 20.0,
            Category::Connections => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::PinsPosted => "pins_posted",
            Category::LikesPosted => "likes_posted",
            Category::LikesReceived => "likes_received",
            Category::LikesReceivedOnePin => "likes_received_one_pin",
            Category::CommentsPosted => "comments_posted",
            Category::CommentsReceived => "comments_received",
            Category::CommentsReceivedOnePin => "comments_received_one_pin",
            Category::SavedPins => "saved_pins",
            Category::Connections => "connections",
        }
    }
}

/// Per-profile counter snapshot. A materialized view: overwritten in full on
/// every recompute, never appended to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    pub profile_key: String,
    /// True for synthetic team aggregates
    pub team: bool,
    pub pins_posted: i64,
    pub likes_posted: i64,
    pub likes_received: i64,
    pub likes_received_one_pin: i64,
    pub comments_posted: i64,
    pub comments_received: i64,
    pub comments_received_one_pin: i64,
    pub saved_pins: i64,
    pub connections: i64,
    pub secret_count: i64,
    pub last_connection_at: Option<DateTime<Utc>>,
}

impl Stats {
    /// Zero-valued snapshot, materialized lazily for profiles never scored
    pub fn zero(profile_key: impl Into<String>) -> Self {
        Self {
            profile_key: profile_key.into(),
            team: false,
            pins_posted: 0,
            likes_posted: 0,
            likes_received: 0,
            likes_received_one_pin: 0,
            comments_posted: 0,
            comments_received: 0,
            comments_received_one_pin: 0,
            saved_pins: 0,
            connections: 0,
            secret_count: 0,
            last_connection_at: None,
        }
    }

    /// Raw counter for a scoring category
    pub fn counter(&self, category: Category) -> i64 {
        match category {
            Category::PinsPosted => self.pins_posted,
            Category::LikesPosted => self.likes_posted,
            Category::LikesReceived => self.likes_received,
            Category::LikesReceivedOnePin => self.likes_received_one_pin,
            Category::CommentsPosted => self.comments_posted,
            Category::CommentsReceived => self.comments_received,
            Category::CommentsReceivedOnePin => self.comments_received_one_pin,
            Category::SavedPins => self.saved_pins,
            Category::Connections => self.connections,
        }
    }
}

/// Per-profile badge levels derived from Stats
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Badges {
    pub profile_key: String,
    pub pins_posted_level: i16,
    pub likes_posted_level: i16,
    pub likes_received_level: i16,
    pub likes_received_one_pin_level: i16,
    pub comments_posted_level: i16,
    pub comments_received_level: i16,
    pub comments_received_one_pin_level: i16,
    pub saved_pins_level: i16,
    pub connections_level: i16,
    /// Minimum across the nine category levels
    pub global_level: i16,
    /// 0 until the secret is found; mirrors the secret counter afterwards
    pub secret_level: i64,
}

impl Badges {
    pub fn zero(profile_key: impl Into<String>) -> Self {
        Self {
            profile_key: profile_key.into(),
            pins_posted_level: 0,
            likes_posted_level: 0,
            likes_received_level: 0,
            likes_received_one_pin_level: 0,
            comments_posted_level: 0,
            comments_received_level: 0,
            comments_received_one_pin_level: 0,
            saved_pins_level: 0,
            connections_level: 0,
            global_level: 0,
            secret_level: 0,
        }
    }

    pub fn category_level(&self, category: Category) -> i16 {
        match category {
            Category::PinsPosted => self.pins_posted_level,
            Category::LikesPosted => self.likes_posted_level,
            Category::LikesReceived => self.likes_received_level,
            Category::LikesReceivedOnePin => self.likes_received_one_pin_level,
            Category::CommentsPosted => self.comments_posted_level,
            Category::CommentsReceived => self.comments_received_level,
            Category::CommentsReceivedOnePin => self.comments_received_one_pin_level,
            Category::SavedPins => self.saved_pins_level,
            Category::Connections => self.connections_level,
        }
    }
}

/// Per-category top-10 rankings, profiles in descending order of the
/// category's raw counter. Keys that no longer resolve to a profile are kept
/// as `None` in position; consumers filter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    pub pins_posted: Vec<Option<Profile>>,
    pub comments_posted: Vec<Option<Profile>>,
    pub comments_received: Vec<Option<Profile>>,
    pub comments_received_one_pin: Vec<Option<Profile>>,
    pub likes_posted: Vec<Option<Profile>>,
    pub likes_received: Vec<Option<Profile>>,
    pub likes_received_one_pin: Vec<Option<Profile>>,
    pub connections: Vec<Option<Profile>>,
}

/// An in-app notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient: String,
    pub link: String,
    pub message: String,
    pub kind: String,
    pub actor: String,
    pub seen: bool,
    pub created_at: DateTime<Utc>,
}
