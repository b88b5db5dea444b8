use super::{BidToken, HighestBid};
use crate::redact::redact;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stored bid, as read back from a repository.
///
/// The record is generic over the repository's timestamp type, so each
/// backend can pick the representation it stores natively.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BidRecord<DateTime> {
    /// The surrogate key assigned by the store on insertion
    pub id: i64,
    /// The bidder's display name
    pub name: String,
    /// A contact phone number
    pub phone: String,
    /// A contact email address
    pub email: String,
    /// The offered amount
    pub bid_amount: f64,
    /// The public identifier handed back to the bidder
    pub bid_id: BidToken,
    /// When the bid was accepted
    pub bid_time: DateTime,
}

impl<DateTime> BidRecord<DateTime> {
    /// The subset of the record shown to the bidder on acceptance
    pub fn receipt(&self) -> BidReceipt {
        BidReceipt {
            name: self.name.clone(),
            bid_amount: self.bid_amount,
            bid_id: self.bid_id.clone(),
        }
    }

    /// The public view of this record with the name masked
    pub fn redacted(&self) -> HighestBid {
        HighestBid {
            redacted_name: redact(&self.name),
            bid_amount: self.bid_amount,
            bid_id: self.bid_id.to_string(),
        }
    }
}

/// Confirmation of an accepted bid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BidReceipt {
    /// The bidder's display name, unmasked
    pub name: String,
    /// The accepted amount
    pub bid_amount: f64,
    /// The public identifier assigned to the bid
    pub bid_id: BidToken,
}
