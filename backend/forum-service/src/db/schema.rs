use sqlx::SqlitePool;
use tracing::info;

/// Ensure the forum tables exist.
///
/// Runs at service startup and is safe to repeat: every statement is
/// `IF NOT EXISTS`. `AUTOINCREMENT` keeps deleted ids from being handed out again.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Ensuring forum tables exist");

    let mut tx = pool.begin().await?;
    for statement in [POST_TABLE, COMMENT_TABLE, COMMENT_POST_INDEX] {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(())
}

const POST_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS post (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    score INTEGER NOT NULL DEFAULT 0,
    text TEXT NOT NULL,
    username TEXT NOT NULL
)
"#;

const COMMENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS comment (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    score INTEGER NOT NULL DEFAULT 0,
    text TEXT NOT NULL,
    username TEXT NOT NULL,
    post_id INTEGER NOT NULL REFERENCES post(id) ON DELETE CASCADE
)
"#;

const COMMENT_POST_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_comment_post_id ON comment(post_id)";
