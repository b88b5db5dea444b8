#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shown in place of a name when no bid has been stored yet.
pub const NO_BIDS_NAME: &str = "No bids";

/// Shown in place of a bid id when no bid has been stored yet.
pub const NO_BIDS_ID: &str = "N/A";

/// The public view of the leading bid.
///
/// `bid_id` is plain text rather than a [`BidToken`](super::BidToken)
/// because the empty-store placeholder is not a valid token.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HighestBid {
    /// The bidder's name with every second character masked
    pub redacted_name: String,
    /// The leading amount
    pub bid_amount: f64,
    /// The public identifier of the leading bid
    pub bid_id: String,
}

impl HighestBid {
    /// The placeholder returned when the store is empty
    pub fn no_bids() -> Self {
        Self {
            redacted_name: NO_BIDS_NAME.to_string(),
            bid_amount: 0.0,
            bid_id: NO_BIDS_ID.to_string(),
        }
    }
}
