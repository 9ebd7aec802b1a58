//! Repository whose every call fails like an unreachable database.

use async_trait::async_trait;
use forum_service::error::{AppError, Result};
use forum_service::models::{Comment, NewComment, NewPost, Post, Vote};
use forum_service::repository::ForumRepository;

pub struct FailingRepository;

fn unavailable<T>() -> Result<T> {
    Err(AppError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl ForumRepository for FailingRepository {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        unavailable()
    }

    async fn create_post(&self, _post: NewPost) -> Result<Post> {
        unavailable()
    }

    async fn get_post(&self, _post_id: i64) -> Result<Option<Post>> {
        unavailable()
    }

    async fn update_post_text(&self, _post_id: i64, _text: Option<&str>) -> Result<Option<Post>> {
        unavailable()
    }

    async fn delete_post(&self, _post_id: i64) -> Result<Option<Post>> {
        unavailable()
    }

    async fn vote_post(&self, _post_id: i64, _vote: Vote) -> Result<Option<Post>> {
        unavailable()
    }

    async fn list_comments(&self, _post_id: i64) -> Result<Option<Vec<Comment>>> {
        unavailable()
    }

    async fn create_comment(
        &self,
        _post_id: i64,
        _comment: NewComment,
    ) -> Result<Option<Comment>> {
        unavailable()
    }

    async fn get_comment(&self, _comment_id: i64) -> Result<Option<Comment>> {
        unavailable()
    }

    async fn vote_comment(&self, _comment_id: i64, _vote: Vote) -> Result<Option<Comment>> {
        unavailable()
    }

    async fn ping(&self) -> Result<()> {
        unavailable()
    }
}
