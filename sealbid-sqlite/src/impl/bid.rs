use crate::{
    Db,
    types::{BidRow, DateTime},
};
use sealbid_core::{
    models::{BidRecord, BidToken, ValidatedBid},
    ports::{BidRepository, DuplicateBidId},
};
use tracing::{Level, event};

impl BidRepository for Db {
    async fn create_bid(
        &self,
        bid: &ValidatedBid,
        bid_id: BidToken,
        bid_time: Self::DateTime,
    ) -> Result<Result<BidRecord<Self::DateTime>, DuplicateBidId>, Self::Error> {
        // dropping the transaction on any early return rolls it back
        let mut tx = self.writer.begin().await?;

        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            insert into
                bid (name, phone, email, bid_amount, bid_id, bid_time)
            values
                ($1, $2, $3, $4, $5, $6)
            returning
                id
            "#,
        )
        .bind(&bid.name)
        .bind(&bid.phone)
        .bind(&bid.email)
        .bind(bid.bid_amount)
        .bind(bid_id.as_str())
        .bind(bid_time)
        .fetch_one(&mut *tx)
        .await;

        let id = match inserted {
            Ok(id) => id,
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                event!(Level::DEBUG, bid_id = bid_id.as_str(), err = err.to_string());
                return Ok(Err(DuplicateBidId(bid_id)));
            }
            Err(err) => return Err(err),
        };

        tx.commit().await?;

        Ok(Ok(BidRecord {
            id,
            name: bid.name.clone(),
            phone: bid.phone.clone(),
            email: bid.email.clone(),
            bid_amount: bid.bid_amount,
            bid_id,
            bid_time,
        }))
    }

    async fn highest_bid(&self) -> Result<Option<BidRecord<DateTime>>, Self::Error> {
        // ties on amount go to the earliest accepted bid
        sqlx::query_as::<_, BidRow>(
            r#"
            select
                id,
                name,
                phone,
                email,
                bid_amount,
                bid_id,
                bid_time
            from
                bid
            order by
                bid_amount desc,
                id asc
            limit 1
            "#,
        )
        .fetch_optional(&self.reader)
        .await?
        .map(BidRecord::try_from)
        .transpose()
    }

    async fn count_bids(&self) -> Result<u64, Self::Error> {
        let count = sqlx::query_scalar::<_, i64>("select count(*) from bid")
            .fetch_one(&self.reader)
            .await?;

        Ok(count.try_into().unwrap_or_default())
    }
}
