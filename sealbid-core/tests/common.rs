use sealbid_core::{
    memory::InMemoryRepository,
    models::{BidForm, BidRules, BidToken},
    ports::Application,
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use time::OffsetDateTime;

/// An application over the in-memory store whose bid ids can be scripted.
///
/// Scripted ids are handed out first, in order; once they run out the app
/// falls back to random ids.
#[derive(Clone, Default)]
pub struct TestApp {
    pub db: InMemoryRepository,
    pub rules: BidRules,
    pub ids: Arc<Mutex<VecDeque<BidToken>>>,
}

impl TestApp {
    pub fn with_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let app = Self::default();
        app.script(ids);
        app
    }

    pub fn script<'a>(&self, ids: impl IntoIterator<Item = &'a str>) {
        let mut queue = self.ids.lock().unwrap();
        queue.extend(ids.into_iter().map(|id| id.parse::<BidToken>().unwrap()));
    }
}

impl Application for TestApp {
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

    fn generate_bid_id(&self) -> BidToken {
        self.ids
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(BidToken::random)
    }
}

pub fn form(name: &str, bid_amount: &str) -> BidForm {
    BidForm {
        name: Some(name.to_string()),
        phone: Some("555-0100".to_string()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        bid_amount: Some(bid_amount.to_string()),
    }
}
