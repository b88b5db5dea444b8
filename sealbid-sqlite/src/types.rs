//! Type definitions for the SQLite implementation.
//!
//! The public [`DateTime`] is the timestamp representation this backend
//! stores; the row type is internal and only used to map query results.

use sealbid_core::models::{BidRecord, BidToken};

mod datetime;
pub use datetime::DateTime;

#[derive(sqlx::FromRow)]
pub(crate) struct BidRow {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub bid_amount: f64,
    pub bid_id: String,
    pub bid_time: DateTime,
}

impl TryFrom<BidRow> for BidRecord<DateTime> {
    type Error = sqlx::Error;

    fn try_from(row: BidRow) -> Result<Self, Self::Error> {
        let bid_id = BidToken::try_from(row.bid_id).map_err(|err| sqlx::Error::ColumnDecode {
            index: "bid_id".to_string(),
            source: Box::new(err),
        })?;

        Ok(BidRecord {
            id: row.id,
            name: row.name,
            phone: row.phone,
            email: row.email,
            bid_amount: row.bid_amount,
            bid_id,
            bid_time: row.bid_time,
        })
    }
}
