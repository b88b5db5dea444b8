use sealbid_core::{
    memory::InMemoryRepository,
    models::{BidRules, BidToken},
    ports::Application,
};
use sealbid_sqlite::{Db, config::SqliteConfig, types::DateTime};
use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};
use time::OffsetDateTime;

/// A SQLite-backed application handing out bid ids 000001, 000002, ...
#[derive(Clone)]
pub struct TestApp {
    pub db: Db,
    pub rules: BidRules,
    next_id: Arc<AtomicU32>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = Db::open(&SqliteConfig::default()).await.unwrap();
        Self {
            db,
            rules: BidRules::default(),
            next_id: Arc::new(AtomicU32::new(1)),
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

/// An in-memory application, used to simulate an unreachable store.
#[derive(Clone, Default)]
pub struct MemoryApp {
    pub db: InMemoryRepository,
    pub rules: BidRules,
}

impl Application for MemoryApp {
    type Repository = InMemoryRepository;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn rules(&self) -> &BidRules {
        &self.rules
    }
}

pub fn form<'a>(name: &'a str, bid_amount: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("name", name),
        ("phone", "555-0100"),
        ("email", "bidder@example.com"),
        ("bid_amount", bid_amount),
    ]
}
