use crate::models::{BidRecord, BidToken, ValidatedBid};
use thiserror::Error;

/// The bid id offered on insertion is already in use.
///
/// This is an expected outcome rather than a storage failure, since bid ids
/// are drawn at random from a small space. Callers should retry with a new id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("bid id {0} is already taken")]
pub struct DuplicateBidId(pub BidToken);

/// Repository interface for storing bids and ranking them.
///
/// Each method is its own unit of work: implementations acquire whatever
/// connection or transaction they need and release it before returning,
/// on success and on failure alike.
pub trait BidRepository: super::Repository {
    /// Store a new bid under `bid_id`, accepted at `bid_time`.
    ///
    /// # Returns
    ///
    /// - Ok(Ok(record)) with the surrogate id filled in on success
    /// - Ok(Err(DuplicateBidId)) if another stored bid already uses `bid_id`
    /// - Err otherwise
    fn create_bid(
        &self,
        bid: &ValidatedBid,
        bid_id: BidToken,
        bid_time: Self::DateTime,
    ) -> impl Future<Output = Result<Result<BidRecord<Self::DateTime>, DuplicateBidId>, Self::Error>>
    + Send;

    /// Retrieve the bid with the largest amount.
    ///
    /// When several bids share the largest amount, the one accepted first
    /// (lowest surrogate id) is returned.
    ///
    /// # Returns
    ///
    /// Ok(None) if no bid has been stored.
    fn highest_bid(
        &self,
    ) -> impl Future<Output = Result<Option<BidRecord<Self::DateTime>>, Self::Error>> + Send;

    /// Count the stored bids.
    fn count_bids(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}
