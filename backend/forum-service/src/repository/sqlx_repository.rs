use super::ForumRepository;
use crate::db::{comment_repo, post_repo};
use crate::error::Result;
use crate::models::{Comment, NewComment, NewPost, Post, Vote};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// `ForumRepository` backed by a SQLite pool
#[derive(Clone)]
pub struct SqlxForumRepository {
    pool: SqlitePool,
}

impl SqlxForumRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ForumRepository for SqlxForumRepository {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(post_repo::list_posts(&self.pool).await?)
    }

    async fn create_post(&self, post: NewPost) -> Result<Post> {
        Ok(post_repo::create_post(&self.pool, &post.text, &post.username).await?)
    }

    async fn get_post(&self, post_id: i64) -> Result<Option<Post>> {
        Ok(post_repo::find_post_by_id(&self.pool, post_id).await?)
    }

    async fn update_post_text(&self, post_id: i64, text: Option<&str>) -> Result<Option<Post>> {
        match text {
            Some(text) => Ok(post_repo::update_post_text(&self.pool, post_id, text).await?),
            None => Ok(post_repo::find_post_by_id(&self.pool, post_id).await?),
        }
    }

    async fn delete_post(&self, post_id: i64) -> Result<Option<Post>> {
        let mut tx = self.pool.begin().await?;

        let Some(post) = post_repo::find_post_by_id(&mut *tx, post_id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };

        let removed = comment_repo::delete_comments_by_post(&mut *tx, post_id).await?;
        post_repo::delete_post(&mut *tx, post_id).await?;
        tx.commit().await?;

        tracing::debug!(post_id, comments_removed = removed, "post deleted");
        Ok(Some(post))
    }

    async fn vote_post(&self, post_id: i64, vote: Vote) -> Result<Option<Post>> {
        Ok(post_repo::adjust_post_score(&self.pool, post_id, vote.delta()).await?)
    }

    async fn list_comments(&self, post_id: i64) -> Result<Option<Vec<Comment>>> {
        let mut tx = self.pool.begin().await?;

        if post_repo::find_post_by_id(&mut *tx, post_id).await?.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let comments = comment_repo::get_comments_by_post(&mut *tx, post_id).await?;
        tx.commit().await?;

        Ok(Some(comments))
    }

    async fn create_comment(&self, post_id: i64, comment: NewComment) -> Result<Option<Comment>> {
        let mut tx = self.pool.begin().await?;

        if post_repo::find_post_by_id(&mut *tx, post_id).await?.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let created =
            comment_repo::create_comment(&mut *tx, post_id, &comment.text, &comment.username)
                .await?;
        tx.commit().await?;

        Ok(Some(created))
    }

    async fn get_comment(&self, comment_id: i64) -> Result<Option<Comment>> {
        Ok(comment_repo::find_comment_by_id(&self.pool, comment_id).await?)
    }

    async fn vote_comment(&self, comment_id: i64, vote: Vote) -> Result<Option<Comment>> {
        Ok(comment_repo::adjust_comment_score(&self.pool, comment_id, vote.delta()).await?)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ensure_schema;

    async fn repo() -> SqlxForumRepository {
        let pool = db_pool::create_in_memory_pool().await.unwrap();
        ensure_schema(&pool).await.unwrap();
        SqlxForumRepository::new(pool)
    }

    fn new_post(text: &str, username: &str) -> NewPost {
        NewPost {
            text: text.to_string(),
            username: username.to_string(),
        }
    }

    fn new_comment(text: &str) -> NewComment {
        NewComment {
            text: text.to_string(),
            username: "Megan".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_zero_score() {
        let repo = repo().await;

        let first = repo.create_post(new_post("a", "Megan")).await.unwrap();
        let second = repo.create_post(new_post("b", "Megan")).await.unwrap();

        assert_eq!(first.score, 0);
        assert_eq!(second.id, first.id + 1);
        assert_eq!(repo.list_posts().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn edit_without_text_is_a_no_op() {
        let repo = repo().await;
        let post = repo.create_post(new_post("keep me", "Megan")).await.unwrap();

        let unchanged = repo.update_post_text(post.id, None).await.unwrap();
        assert_eq!(unchanged, Some(post.clone()));

        let edited = repo
            .update_post_text(post.id, Some("New text"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(edited.text, "New text");
        assert_eq!(edited.username, post.username);
        assert_eq!(edited.score, post.score);

        assert_eq!(repo.update_post_text(1000, Some("x")).await.unwrap(), None);
        assert_eq!(repo.update_post_text(1000, None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn votes_adjust_scores_without_bounds() {
        let repo = repo().await;
        let post = repo.create_post(new_post("a", "Megan")).await.unwrap();

        repo.vote_post(post.id, Vote::Down).await.unwrap();
        let post = repo.vote_post(post.id, Vote::Down).await.unwrap().unwrap();
        assert_eq!(post.score, -2);

        let comment = repo
            .create_comment(post.id, new_comment("c"))
            .await
            .unwrap()
            .unwrap();
        repo.vote_comment(comment.id, Vote::Up).await.unwrap();
        let comment = repo.vote_comment(comment.id, Vote::Up).await.unwrap().unwrap();
        assert_eq!(comment.score, 2);

        assert_eq!(repo.vote_post(1000, Vote::Up).await.unwrap(), None);
        assert_eq!(repo.vote_comment(1000, Vote::Up).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_cascades_to_comments() {
        let repo = repo().await;
        let post = repo.create_post(new_post("a", "Megan")).await.unwrap();
        let other = repo.create_post(new_post("b", "Megan")).await.unwrap();
        repo.create_comment(post.id, new_comment("one")).await.unwrap();
        repo.create_comment(post.id, new_comment("two")).await.unwrap();
        repo.create_comment(other.id, new_comment("stays")).await.unwrap();

        let deleted = repo.delete_post(post.id).await.unwrap();
        assert_eq!(deleted, Some(post.clone()));
        assert_eq!(repo.get_post(post.id).await.unwrap(), None);
        assert_eq!(repo.list_comments(post.id).await.unwrap(), None);

        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comment WHERE post_id = ?")
            .bind(post.id)
            .fetch_one(repo.pool())
            .await
            .unwrap();
        assert_eq!(orphans, 0);

        let remaining = repo.list_comments(other.id).await.unwrap().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text, "stays");

        assert_eq!(repo.delete_post(post.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = repo().await;
        let first = repo.create_post(new_post("a", "Megan")).await.unwrap();
        repo.delete_post(first.id).await.unwrap();

        let next = repo.create_post(new_post("b", "Megan")).await.unwrap();
        assert!(next.id > first.id);
    }

    #[tokio::test]
    async fn comments_require_an_existing_post() {
        let repo = repo().await;

        assert_eq!(repo.create_comment(1000, new_comment("x")).await.unwrap(), None);
        assert_eq!(repo.get_comment(1000).await.unwrap(), None);
        assert_eq!(repo.list_comments(1000).await.unwrap(), None);
    }

    #[tokio::test]
    async fn comments_list_in_insertion_order() {
        let repo = repo().await;
        let post = repo.create_post(new_post("a", "Megan")).await.unwrap();
        for text in ["first", "second", "third"] {
            repo.create_comment(post.id, new_comment(text)).await.unwrap();
        }

        let texts: Vec<String> = repo
            .list_comments(post.id)
            .await
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn ping_succeeds_on_open_pool() {
        let repo = repo().await;
        repo.ping().await.unwrap();
    }
}
