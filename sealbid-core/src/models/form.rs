use super::{BidRules, display_amount};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The raw fields of a bid submission, exactly as the boundary received them.
///
/// Every field is optional so that a form post missing a key entirely and a
/// form post with an empty value both reach [`BidForm::validate`] and are
/// rejected the same way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BidForm {
    /// The bidder's display name
    pub name: Option<String>,
    /// A contact phone number
    pub phone: Option<String>,
    /// A contact email address
    pub email: Option<String>,
    /// The offered amount, as text
    pub bid_amount: Option<String>,
}

/// A submission that passed validation and is ready to be stored.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidatedBid {
    /// The bidder's display name
    pub name: String,
    /// A contact phone number
    pub phone: String,
    /// A contact email address
    pub email: String,
    /// The offered amount
    pub bid_amount: f64,
}

/// The ways in which a submission can be rejected before it reaches storage.
///
/// The display text of each variant is the message shown to the bidder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One of the four fields was absent or empty
    #[error("All fields are required.")]
    MissingField(&'static str),

    /// The amount is not a finite, positive decimal number
    #[error("Invalid bid amount.")]
    InvalidAmount,

    /// The amount is below the configured minimum
    #[error("Minimum bid amount is ₹{}.", display_amount(*.minimum))]
    BelowMinimum {
        /// The amount that was offered
        amount: f64,
        /// The minimum in force when the bid was checked
        minimum: f64,
    },
}

impl BidForm {
    /// Check the submission against `rules`.
    ///
    /// The checks run in order and the first failure is returned:
    ///
    /// 1. `name`, `phone`, `email` and `bid_amount` are all present and non-empty
    /// 2. `bid_amount` parses as a finite number above zero (surrounding
    ///    whitespace is ignored), whatever the configured minimum
    /// 3. `bid_amount` is at least `rules.minimum_bid`
    pub fn validate(&self, rules: &BidRules) -> Result<ValidatedBid, ValidationError> {
        let name = required("name", &self.name)?;
        let phone = required("phone", &self.phone)?;
        let email = required("email", &self.email)?;
        let bid_amount = required("bid_amount", &self.bid_amount)?;

        let bid_amount = bid_amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .ok_or(ValidationError::InvalidAmount)?;

        if bid_amount < rules.minimum_bid {
            return Err(ValidationError::BelowMinimum {
                amount: bid_amount,
                minimum: rules.minimum_bid,
            });
        }

        Ok(ValidatedBid {
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
            bid_amount,
        })
    }
}

fn required<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, ValidationError> {
    value
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form(name: &str, phone: &str, email: &str, bid_amount: &str) -> BidForm {
        BidForm {
            name: Some(name.to_string()),
            phone: Some(phone.to_string()),
            email: Some(email.to_string()),
            bid_amount: Some(bid_amount.to_string()),
        }
    }

    #[rstest]
    #[case::name("", "555-0100", "a@example.com", "25000", "name")]
    #[case::phone("Asha", "", "a@example.com", "25000", "phone")]
    #[case::email("Asha", "555-0100", "", "25000", "email")]
    #[case::amount("Asha", "555-0100", "a@example.com", "", "bid_amount")]
    #[case::first_wins("", "", "", "", "name")]
    fn empty_fields_are_missing(
        #[case] name: &str,
        #[case] phone: &str,
        #[case] email: &str,
        #[case] bid_amount: &str,
        #[case] field: &'static str,
    ) {
        let err = form(name, phone, email, bid_amount)
            .validate(&BidRules::default())
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField(field));
        assert_eq!(err.to_string(), "All fields are required.");
    }

    #[test]
    fn absent_fields_are_missing() {
        let err = BidForm {
            name: Some("Asha".to_string()),
            ..Default::default()
        }
        .validate(&BidRules::default())
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("phone"));
    }

    #[rstest]
    #[case("abc")]
    #[case("20,000")]
    #[case("inf")]
    #[case("NaN")]
    #[case("1e400")]
    fn unparseable_amounts_are_invalid(#[case] amount: &str) {
        let err = form("Asha", "555-0100", "a@example.com", amount)
            .validate(&BidRules::default())
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidAmount);
        assert_eq!(err.to_string(), "Invalid bid amount.");
    }

    #[rstest]
    #[case("0")]
    #[case("0.00")]
    #[case("-0")]
    #[case("-25000")]
    fn non_positive_amounts_are_invalid_even_without_a_minimum(#[case] amount: &str) {
        for minimum_bid in [0.0, -100.0] {
            let rules = BidRules {
                minimum_bid,
                ..Default::default()
            };
            let err = form("Asha", "555-0100", "a@example.com", amount)
                .validate(&rules)
                .unwrap_err();
            assert_eq!(err, ValidationError::InvalidAmount);
        }
    }

    #[test]
    fn missing_field_beats_invalid_amount() {
        let err = form("Asha", "", "a@example.com", "abc")
            .validate(&BidRules::default())
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("phone"));
    }

    #[test]
    fn below_minimum_is_rejected() {
        let err = form("Asha", "555-0100", "a@example.com", "19999.99")
            .validate(&BidRules::default())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::BelowMinimum {
                amount: 19999.99,
                minimum: 20000.0
            }
        );
        assert_eq!(err.to_string(), "Minimum bid amount is ₹20,000.");
    }

    #[rstest]
    #[case("20000.00", 20000.0)]
    #[case("20000", 20000.0)]
    #[case(" 25000.5 ", 25000.5)]
    #[case("3e4", 30000.0)]
    fn amounts_at_or_above_minimum_are_accepted(#[case] amount: &str, #[case] expected: f64) {
        let bid = form("Asha", "555-0100", "a@example.com", amount)
            .validate(&BidRules::default())
            .unwrap();
        assert_eq!(bid.bid_amount, expected);
        assert_eq!(bid.name, "Asha");
        assert_eq!(bid.phone, "555-0100");
        assert_eq!(bid.email, "a@example.com");
    }

    #[test]
    fn minimum_comes_from_rules() {
        let rules = BidRules {
            minimum_bid: 100.0,
            ..Default::default()
        };
        assert!(form("Asha", "1", "a@b", "150").validate(&rules).is_ok());
        assert_eq!(
            form("Asha", "1", "a@b", "99").validate(&rules).unwrap_err().to_string(),
            "Minimum bid amount is ₹100."
        );
    }
}
