use crate::models::Comment;
use sqlx::SqliteExecutor;

/// Create a new comment on a post
pub async fn create_comment<'e, E>(
    executor: E,
    post_id: i64,
    text: &str,
    username: &str,
) -> Result<Comment, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comment (score, text, username, post_id)
        VALUES (0, ?, ?, ?)
        RETURNING id, score, text, username, post_id
        "#,
    )
    .bind(text)
    .bind(username)
    .bind(post_id)
    .fetch_one(executor)
    .await?;

    Ok(comment)
}

/// Get all comments for a post, oldest first
pub async fn get_comments_by_post<'e, E>(
    executor: E,
    post_id: i64,
) -> Result<Vec<Comment>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, score, text, username, post_id
        FROM comment
        WHERE post_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(executor)
    .await?;

    Ok(comments)
}

/// Get a single comment by ID
pub async fn find_comment_by_id<'e, E>(
    executor: E,
    comment_id: i64,
) -> Result<Option<Comment>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, score, text, username, post_id
        FROM comment
        WHERE id = ?
        "#,
    )
    .bind(comment_id)
    .fetch_optional(executor)
    .await?;

    Ok(comment)
}

/// Add `delta` to the comment score in place
pub async fn adjust_comment_score<'e, E>(
    executor: E,
    comment_id: i64,
    delta: i64,
) -> Result<Option<Comment>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comment
        SET score = score + ?
        WHERE id = ?
        RETURNING id, score, text, username, post_id
        "#,
    )
    .bind(delta)
    .bind(comment_id)
    .fetch_optional(executor)
    .await?;

    Ok(comment)
}

/// Delete every comment owned by a post, returning how many went away
pub async fn delete_comments_by_post<'e, E>(executor: E, post_id: i64) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM comment WHERE post_id = ?")
        .bind(post_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}
