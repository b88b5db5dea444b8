#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The conditions a submission must meet to be accepted.
///
/// # Examples
///
/// ```
/// use sealbid_core::models::BidRules;
///
/// let rules = BidRules::default();
/// assert_eq!(rules.minimum_bid, 20000.0);
/// assert_eq!(rules.max_attempts, 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BidRules {
    /// The smallest amount accepted, inclusive
    #[cfg_attr(feature = "serde", serde(default = "default_minimum_bid"))]
    pub minimum_bid: f64,

    /// How many freshly generated bid ids to try before giving up on a submission
    #[cfg_attr(feature = "serde", serde(default = "default_max_attempts"))]
    pub max_attempts: usize,
}

fn default_minimum_bid() -> f64 {
    20000.0
}

fn default_max_attempts() -> usize {
    5
}

impl Default for BidRules {
    fn default() -> Self {
        Self {
            minimum_bid: default_minimum_bid(),
            max_attempts: default_max_attempts(),
        }
    }
}
