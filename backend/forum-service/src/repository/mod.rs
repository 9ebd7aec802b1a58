//! Storage interface for forum entities.
//!
//! Handlers never touch the pool directly. They receive an
//! `Arc<dyn ForumRepository>` as application data, which keeps the store
//! swappable in tests and keeps every multi-step write inside one place.

mod sqlx_repository;

pub use sqlx_repository::SqlxForumRepository;

use crate::error::Result;
use crate::models::{Comment, NewComment, NewPost, Post, Vote};
use async_trait::async_trait;

/// Injected storage interface for posts and comments.
///
/// Every lookup-style method returns `Ok(None)` when the addressed entity is
/// missing; translating that into a 404 is the caller's job.
#[async_trait]
pub trait ForumRepository: Send + Sync {
    /// All posts in insertion order.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Store a new post with a zero score.
    async fn create_post(&self, post: NewPost) -> Result<Post>;

    /// Fetch a post by id.
    async fn get_post(&self, post_id: i64) -> Result<Option<Post>>;

    /// Replace a post's text. `text == None` leaves the post unchanged but
    /// still reports it, so callers cannot tell a no-op edit from a real one.
    async fn update_post_text(&self, post_id: i64, text: Option<&str>) -> Result<Option<Post>>;

    /// Delete a post together with all of its comments, atomically.
    ///
    /// Returns the post as it was right before deletion.
    async fn delete_post(&self, post_id: i64) -> Result<Option<Post>>;

    /// Apply one vote to a post's score.
    async fn vote_post(&self, post_id: i64, vote: Vote) -> Result<Option<Post>>;

    /// Comments of a post in insertion order; `None` when the post is missing.
    async fn list_comments(&self, post_id: i64) -> Result<Option<Vec<Comment>>>;

    /// Attach a new comment to a post; `None` when the post is missing.
    async fn create_comment(&self, post_id: i64, comment: NewComment) -> Result<Option<Comment>>;

    /// Fetch a comment by id.
    async fn get_comment(&self, comment_id: i64) -> Result<Option<Comment>>;

    /// Apply one vote to a comment's score.
    async fn vote_comment(&self, comment_id: i64, vote: Vote) -> Result<Option<Comment>>;

    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> Result<()>;
}
