use crate::{
    models::{BidRecord, BidToken, ValidatedBid},
    ports::{BidRepository, DuplicateBidId, Repository},
};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use time::OffsetDateTime;

/// Failures of the in-memory store.
#[derive(Error, Debug)]
pub enum MemoryError {
    /// The store was switched off with [`InMemoryRepository::set_available`]
    #[error("in-memory store is unavailable")]
    Unavailable,

    /// A previous holder of the lock panicked
    #[error("in-memory store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Default)]
struct State {
    bids: Vec<BidRecord<OffsetDateTime>>,
    unavailable: bool,
}

/// Fake in-memory persistence.
///
/// Behaves like a real store with respect to surrogate ids, bid id
/// uniqueness and tie-breaking, and can be switched off to simulate an
/// unreachable backend. Clones share the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (`false`) or succeed again (`true`)
    pub fn set_available(&self, available: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.unavailable = !available;
        }
    }

    /// A copy of every stored bid, in insertion order
    pub fn bids(&self) -> Result<Vec<BidRecord<OffsetDateTime>>, MemoryError> {
        Ok(self.lock()?.bids.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, MemoryError> {
        let state = self.state.lock().map_err(|_| MemoryError::Poisoned)?;
        if state.unavailable {
            Err(MemoryError::Unavailable)
        } else {
            Ok(state)
        }
    }
}

impl Repository for InMemoryRepository {
    type Error = MemoryError;
    type DateTime = OffsetDateTime;
}

impl BidRepository for InMemoryRepository {
    async fn create_bid(
        &self,
        bid: &ValidatedBid,
        bid_id: BidToken,
        bid_time: Self::DateTime,
    ) -> Result<Result<BidRecord<Self::DateTime>, DuplicateBidId>, Self::Error> {
        let mut state = self.lock()?;

        if state.bids.iter().any(|stored| stored.bid_id == bid_id) {
            return Ok(Err(DuplicateBidId(bid_id)));
        }

        let record = BidRecord {
            id: state.bids.last().map_or(1, |last| last.id + 1),
            name: bid.name.clone(),
            phone: bid.phone.clone(),
            email: bid.email.clone(),
            bid_amount: bid.bid_amount,
            bid_id,
            bid_time,
        };
        state.bids.push(record.clone());

        Ok(Ok(record))
    }

    async fn highest_bid(&self) -> Result<Option<BidRecord<Self::DateTime>>, Self::Error> {
        let state = self.lock()?;

        // `max_by` keeps the last of equal elements, so order ids in reverse
        // to let the earliest bid win a tie
        Ok(state
            .bids
            .iter()
            .max_by(|a, b| {
                a.bid_amount
                    .total_cmp(&b.bid_amount)
                    .then_with(|| b.id.cmp(&a.id))
            })
            .cloned())
    }

    async fn count_bids(&self) -> Result<u64, Self::Error> {
        Ok(self.lock()?.bids.len() as u64)
    }
}
