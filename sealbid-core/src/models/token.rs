use rand::Rng;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The number of digits in a bid id.
pub const BID_ID_LEN: usize = 6;

/// A short, public identifier for an accepted bid.
///
/// A token is always exactly [`BID_ID_LEN`] ASCII digits. It is distinct
/// from the surrogate key the store assigns, and is the only identifier a
/// bidder ever sees.
///
/// Random tokens are *not* unique by construction: two calls to
/// [`BidToken::random`] may return the same value. Uniqueness is enforced
/// by the store, and the [`BidService`](crate::service::BidService) retries
/// with a fresh token when it hits a collision.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct BidToken(String);

impl BidToken {
    /// Draw a token from the thread-local random number generator.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Draw a token from the supplied random number generator.
    ///
    /// Each digit is sampled uniformly and independently.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let token = (0..BID_ID_LEN)
            .map(|_| {
                let digit: u8 = rng.random_range(0..10);
                char::from(b'0' + digit)
            })
            .collect();
        Self(token)
    }

    /// Borrow the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The error returned when text is not a well-formed bid id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("a bid id is exactly six ascii digits, got {0:?}")]
pub struct InvalidBidToken(pub String);

impl TryFrom<String> for BidToken {
    type Error = InvalidBidToken;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.len() == BID_ID_LEN && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(InvalidBidToken(value))
        }
    }
}

impl FromStr for BidToken {
    type Err = InvalidBidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.to_owned().try_into()
    }
}

impl From<BidToken> for String {
    fn from(value: BidToken) -> Self {
        value.0
    }
}

impl AsRef<str> for BidToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for BidToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn random_tokens_are_six_digits() {
        for _ in 0..1000 {
            let token = BidToken::random();
            assert_eq!(token.as_str().len(), BID_ID_LEN);
            assert!(token.as_str().bytes().all(|b| b.is_ascii_digit()), "{token}");
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = BidToken::random_with(&mut StdRng::seed_from_u64(7));
        let b = BidToken::random_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn every_digit_shows_up() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 10];
        for _ in 0..200 {
            for b in BidToken::random_with(&mut rng).as_str().bytes() {
                seen[usize::from(b - b'0')] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn parsing_rejects_malformed_tokens() {
        assert!("012345".parse::<BidToken>().is_ok());
        assert!("12345".parse::<BidToken>().is_err());
        assert!("1234567".parse::<BidToken>().is_err());
        assert!("12a456".parse::<BidToken>().is_err());
        assert!("１２３４５６".parse::<BidToken>().is_err());
        assert_eq!(
            "N/A".parse::<BidToken>(),
            Err(InvalidBidToken("N/A".to_string()))
        );
    }
}
