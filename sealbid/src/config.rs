//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple sources
//! with a clear precedence order. Configuration can come from default values,
//! configuration files, and environment variables.

use crate::Cli;
use sealbid_core::models::BidRules;
use sealbid_sqlite::config::SqliteConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The database file used when none is configured.
pub const DEFAULT_DATABASE_PATH: &str = "database.db";

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Web server configuration
    #[serde(default)]
    pub server: sealbid_axum::config::AxumConfig,

    /// Database location, `database.db` in the working directory unless set
    #[serde(default = "default_database")]
    pub database: SqliteConfig,

    /// Minimum bid and bid id retry limit
    #[serde(default)]
    pub rules: BidRules,
}

fn default_database() -> SqliteConfig {
    SqliteConfig {
        database_path: Some(PathBuf::from(DEFAULT_DATABASE_PATH)),
        ..Default::default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: Default::default(),
            database: default_database(),
            rules: Default::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Keep bids somewhere other than ./database.db
    /// export APP_DATABASE__DATABASE_PATH="/data/bids.db"
    ///
    /// # Set server bind address
    /// export APP_SERVER__BIND_ADDRESS="0.0.0.0:3000"
    ///
    /// # Raise the minimum bid
    /// export APP_RULES__MINIMUM_BID=25000
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps APP_SERVER__BIND_ADDRESS to server.bind_address
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load(&Cli { config: None }).unwrap();

        assert_eq!(config.server.bind_address.port(), 8080);
        assert_eq!(
            config.database.database_path,
            Some(PathBuf::from(DEFAULT_DATABASE_PATH))
        );
        assert!(config.database.create_if_missing);
        assert_eq!(config.rules, BidRules::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
            [server]
            bind_address = "127.0.0.1:3000"

            [database]
            database_path = "bids.db"

            [rules]
            minimum_bid = 25000.0
            "#
        )
        .unwrap();

        let config = AppConfig::load(&Cli {
            config: Some(file.path().to_path_buf()),
        })
        .unwrap();

        assert_eq!(config.server.bind_address.port(), 3000);
        assert_eq!(
            config.database.database_path,
            Some(PathBuf::from("bids.db"))
        );
        assert!(config.database.create_if_missing);
        assert_eq!(config.rules.minimum_bid, 25000.0);
        assert_eq!(config.rules.max_attempts, BidRules::default().max_attempts);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(dir.path().join("absent.toml")),
        };

        assert!(AppConfig::load(&cli).is_err());
    }
}
