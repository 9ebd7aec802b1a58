//! Environment variable parsing utilities
//!
//! Small helpers for reading typed values out of the process environment
//! without sprinkling `unwrap()` across config loaders.

use std::str::FromStr;

/// Parse an environment variable with a default fallback.
///
/// Missing and unparseable values both yield `default`.
///
/// # Example
/// ```ignore
/// let max: u32 = parse_env_with_default("DB_MAX_CONNECTIONS", 5);
/// ```
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parse an environment variable strictly.
///
/// A missing variable yields `Ok(default)`; a present but unparseable one is an error,
/// so typos in deployment config fail loudly at startup.
pub fn parse_env_or_default<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|_| format!("Failed to parse {}='{}'", key, val)),
        Err(_) => Ok(default),
    }
}

/// Interpret common truthy spellings (`1`, `true`, `yes`, `on`).
pub fn parse_env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| {
            matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(false)
}
