mod bid;
mod form;
mod highest;
mod rules;
mod token;

pub use bid::{BidReceipt, BidRecord};
pub use form::{BidForm, ValidatedBid, ValidationError};
pub use highest::{HighestBid, NO_BIDS_ID, NO_BIDS_NAME};
pub use rules::BidRules;
pub use token::{BID_ID_LEN, BidToken, InvalidBidToken};

/// Render an amount with thousands separators, dropping a zero fractional part.
///
/// `20000.0` renders as `20,000` and `1234567.5` as `1,234,567.50`.
pub fn display_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    if amount.is_sign_negative() && amount != 0.0 {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if fraction != "00" {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
