//! The production [`Application`]: SQLite storage, the wall clock, random
//! bid ids and the configured rules.

use sealbid_core::{models::BidRules, ports::Application};
use sealbid_sqlite::{Db, types::DateTime};

/// Main application implementation combining all system components.
#[derive(Clone, Debug)]
pub struct BidApp {
    /// Database connection for persistent storage
    pub db: Db,
    /// The rules every submission is checked against
    pub rules: BidRules,
}

impl Application for BidApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn now(&self) -> DateTime {
        DateTime::now()
    }

    fn rules(&self) -> &BidRules {
        &self.rules
    }
}
