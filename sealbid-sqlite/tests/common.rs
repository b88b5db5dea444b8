use sealbid_core::{
    models::{BidRules, BidToken, ValidatedBid},
    ports::Application,
};
use sealbid_sqlite::{Db, types::DateTime};
use std::sync::atomic::{AtomicU32, Ordering};

/// An application over a SQLite database that hands out sequential bid ids.
pub struct TestApp {
    pub db: Db,
    pub rules: BidRules,
    next_id: AtomicU32,
}

impl TestApp {
    pub fn new(db: Db) -> Self {
        Self {
            db,
            rules: BidRules::default(),
            next_id: AtomicU32::new(1),
        }
    }
}

impl Application for TestApp {
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

    fn generate_bid_id(&self) -> BidToken {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("{n:06}").parse().unwrap()
    }
}

pub fn bid(name: &str, bid_amount: f64) -> ValidatedBid {
    ValidatedBid {
        name: name.to_string(),
        phone: "555-0100".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        bid_amount,
    }
}

pub fn token(s: &str) -> BidToken {
    s.parse().unwrap()
}
