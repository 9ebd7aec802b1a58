/// Database access layer
///
/// This module provides:
/// - Schema bootstrap for the `post` and `comment` tables
/// - Row-level query functions for posts and comments
///
/// Functions here take any SQLite executor so callers can run them either
/// directly on the pool or inside a transaction.
pub mod comment_repo;
pub mod post_repo;
pub mod schema;

pub use schema::ensure_schema;
