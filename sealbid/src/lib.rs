#![warn(missing_docs)]
//! The `sealbid` server: a sealed-bid web form backed by SQLite.
//!
//! Configuration is layered from defaults, an optional TOML file and
//! `APP_`-prefixed environment variables (see [`AppConfig::load`]). The
//! binary opens the database, creating the `bid` table if needed, and serves
//! the routes from `sealbid-axum`.

pub mod impls;

mod cli;
pub use cli::Cli;

mod config;
pub use config::AppConfig;
