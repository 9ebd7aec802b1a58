use crate::models::Post;
use sqlx::SqliteExecutor;

/// Insert a post with a zero score and return the stored row
pub async fn create_post<'e, E>(
    executor: E,
    text: &str,
    username: &str,
) -> Result<Post, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO post (score, text, username)
        VALUES (0, ?, ?)
        RETURNING id, score, text, username
        "#,
    )
    .bind(text)
    .bind(username)
    .fetch_one(executor)
    .await?;

    Ok(post)
}

/// All posts in insertion (id) order
pub async fn list_posts<'e, E>(executor: E) -> Result<Vec<Post>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, score, text, username
        FROM post
        ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(posts)
}

/// Find a post by ID
pub async fn find_post_by_id<'e, E>(executor: E, post_id: i64) -> Result<Option<Post>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, score, text, username
        FROM post
        WHERE id = ?
        "#,
    )
    .bind(post_id)
    .fetch_optional(executor)
    .await?;

    Ok(post)
}

/// Replace post text; `None` when the post does not exist
pub async fn update_post_text<'e, E>(
    executor: E,
    post_id: i64,
    text: &str,
) -> Result<Option<Post>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE post
        SET text = ?
        WHERE id = ?
        RETURNING id, score, text, username
        "#,
    )
    .bind(text)
    .bind(post_id)
    .fetch_optional(executor)
    .await?;

    Ok(post)
}

/// Add `delta` to the post score in place
pub async fn adjust_post_score<'e, E>(
    executor: E,
    post_id: i64,
    delta: i64,
) -> Result<Option<Post>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE post
        SET score = score + ?
        WHERE id = ?
        RETURNING id, score, text, username
        "#,
    )
    .bind(delta)
    .bind(post_id)
    .fetch_optional(executor)
    .await?;

    Ok(post)
}

/// Delete the post row only. Callers remove comments first.
pub async fn delete_post<'e, E>(executor: E, post_id: i64) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM post WHERE id = ?")
        .bind(post_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
