/// Configuration management for Forum Service
///
/// Configuration is read from environment variables (optionally seeded from a
/// `.env` file by the binary). Every setting has a development default, so a bare
/// `forum-service` listens on `0.0.0.0:5000` against `./posts.db`.
use db_pool::env_utils::{parse_env_flag, parse_env_or_default};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// HTTP worker threads; actix picks one per core when unset
    pub workers: Option<usize>,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite URL of the database file
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Log every SQL statement sqlx executes
    pub sql_echo: bool,
}

impl LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    pub fn default_filter(&self) -> String {
        let sqlx_level = if self.sql_echo { "debug" } else { "warn" };
        format!("info,actix_web=info,sqlx={}", sqlx_level)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let workers = match std::env::var("FORUM_SERVICE_WORKERS") {
            Ok(raw) => {
                let workers: usize = raw
                    .trim()
                    .parse()
                    .map_err(|_| format!("Failed to parse FORUM_SERVICE_WORKERS='{}'", raw))?;
                if workers == 0 {
                    return Err("FORUM_SERVICE_WORKERS must be greater than zero".to_string());
                }
                Some(workers)
            }
            Err(_) => None,
        };

        let format = match std::env::var("LOG_FORMAT") {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" | "" => LogFormat::Text,
                other => return Err(format!("Unknown LOG_FORMAT '{}'", other)),
            },
            Err(_) => LogFormat::Text,
        };

        Ok(Config {
            app: AppConfig {
                env: app_env,
                host: std::env::var("FORUM_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or_default("FORUM_SERVICE_PORT", 5000)?,
                workers,
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://posts.db".to_string()),
                max_connections: parse_env_or_default("DATABASE_MAX_CONNECTIONS", 5)?,
            },
            logging: LoggingConfig {
                format,
                sql_echo: parse_env_flag("SQL_ECHO"),
            },
        })
    }

    /// `host:port` string the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}
