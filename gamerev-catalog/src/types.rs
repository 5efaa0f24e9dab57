//! Data model types for the review site.
//!
//! Views are immutable snapshots assembled by `gamerev-db`. Field names
//! serialize the way the site's templates expect them (`ID`, `avgRating`).

use serde::{Deserialize, Serialize};

// ── Category / Publisher ────────────────────────────────────────────────────

/// A game category (genre-like label).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "ID")]
    pub id: i64,
    pub title: String,
}

/// A game publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
}

// ── Game ────────────────────────────────────────────────────────────────────

/// Fully assembled read view of a game.
///
/// Composes rows owned by the image, review, publisher and category modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    #[serde(rename = "ID")]
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub desc: String,
    /// Stored picture paths, oldest first.
    pub pictures: Vec<String>,
    /// Mean review rating rounded half up; 0 when unrated.
    pub avg_rating: i64,
    pub publishers: Vec<Publisher>,
    #[serde(rename = "category")]
    pub categories: Vec<Category>,
}

/// Partial update for a game. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameUpdate {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub desc: Option<String>,
}

impl GameUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.summary.is_none() && self.desc.is_none()
    }
}

// ── Review / Comment ────────────────────────────────────────────────────────

/// Input for a new review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub full_text: String,
    pub rating: i64,
}

/// A review with its comments attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "gameID")]
    pub game_id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub full_text: String,
    pub rating: i64,
    pub created_at: String,
    pub comments: Vec<Comment>,
}

/// Reviews of one game, with the requesting user's own review split out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReviews {
    pub reviews: Vec<Review>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_review: Option<Review>,
}

/// A comment on a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "reviewID")]
    pub review_id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub full_text: String,
    pub created_at: String,
}

// ── User ────────────────────────────────────────────────────────────────────

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    #[serde(rename = "ID")]
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Role name (`user`, `admin`), if one is assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Well-known role IDs seeded by the schema.
pub mod roles {
    pub const USER: i64 = 1;
    pub const ADMIN: i64 = 2;
}

// ── Seed data ───────────────────────────────────────────────────────────────

/// Contents of a seed file, loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub games: Vec<SeedGame>,
}

/// A game entry in a seed file. Links refer to categories/publishers by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedGame {
    pub title: String,
    pub summary: String,
    pub desc: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
}
