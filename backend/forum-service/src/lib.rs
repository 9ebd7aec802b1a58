/// Forum Service Library
///
/// A small forum backend: posts, comments on posts, and up/down votes on both,
/// stored in a single-file SQLite database and served as JSON over HTTP.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Post and Comment entities and the vote type
/// - `repository`: the injected storage interface and its SQLite implementation
/// - `db`: schema bootstrap and row-level queries
/// - `error`: Error types and their JSON envelope
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

pub use config::Config;
pub use error::{AppError, Result};
