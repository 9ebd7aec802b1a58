/// Data models for forum-service
///
/// This module defines the two stored entities:
/// - Post: top-level content item with a score and owned comments
/// - Comment: content item attached to exactly one post
///
/// Both serialize to the flat shape `{id, score, text, username}`. Comments are
/// never embedded in a serialized post; they are listed through their own endpoint.
use serde::{Deserialize, Serialize};

/// Post row from the `post` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub score: i64,
    pub text: String,
    pub username: String,
}

/// Comment row from the `comment` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub score: i64,
    pub text: String,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub post_id: i64,
}

/// Fields accepted when creating a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub text: String,
    pub username: String,
}

/// Fields accepted when creating a comment; the owning post comes from the path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub username: String,
}

/// Direction of a single vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    /// `false` and numeric zero are downvotes. Everything else, including an
    /// absent field, `null` and strings, counts as an upvote.
    pub fn from_json(value: Option<&serde_json::Value>) -> Self {
        match value {
            Some(serde_json::Value::Bool(false)) => Vote::Down,
            Some(serde_json::Value::Number(n)) if n.as_f64() == Some(0.0) => Vote::Down,
            _ => Vote::Up,
        }
    }

    /// Score delta applied by this vote
    pub fn delta(self) -> i64 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }
}
