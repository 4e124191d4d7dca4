//! Configuration for the batch binary.

use std::path::Path;

use anyhow::{Context, Result};
use objsync_db_postgres::PostgresConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub postgres: PostgresConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter applied when RUST_LOG is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Loads configuration from the given path.
///
/// A missing file yields the defaults; a present but unreadable or invalid
/// file is an error. `OBJSYNC_DATABASE_URL` overrides the configured
/// connection URL either way.
pub fn load(path: &Path) -> Result<AppConfig> {
    let mut config = if path.exists() {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        parse(&raw).with_context(|| format!("failed to parse {}", path.display()))?
    } else {
        AppConfig::default()
    };

    if let Ok(url) = std::env::var("OBJSYNC_DATABASE_URL") {
        config.postgres.url = url;
    }

    Ok(config)
}

fn parse(raw: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.postgres.url, "postgres://localhost/objsync");
    }

    #[test]
    fn test_parse_partial_file() {
        let config = parse(
            r#"
            [postgres]
            url = "postgres://db.internal/objsync"
            pool_size = 3

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.postgres.url, "postgres://db.internal/objsync");
        assert_eq!(config.postgres.pool_size, 3);
        // Unspecified fields keep their defaults.
        assert_eq!(config.postgres.connect_timeout_ms, 5000);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_empty_file() {
        let config = parse("").unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_rejects_bad_shape() {
        assert!(parse("postgres = 5").is_err());
    }
}
