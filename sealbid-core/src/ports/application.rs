use super::{BidRepository, Repository};
use crate::models::{BidRules, BidToken};

/// Everything the bid service needs from its surroundings.
///
/// An implementation bundles a storage backend with a clock, the acceptance
/// rules and a source of bid ids. Swapping any of these (an in-memory store,
/// a fixed clock, a scripted id sequence) is how the service is tested.
pub trait Application: Send + Sync {
    /// The storage backend
    type Repository: BidRepository;

    /// Get a reference to the storage backend
    fn database(&self) -> &Self::Repository;

    /// The current time, in the repository's representation
    fn now(&self) -> <Self::Repository as Repository>::DateTime;

    /// The rules a submission is checked against
    fn rules(&self) -> &BidRules;

    /// Produce a candidate bid id.
    ///
    /// The default draws a random token; there is no guarantee that the
    /// result is unused.
    fn generate_bid_id(&self) -> BidToken {
        BidToken::random()
    }
}
