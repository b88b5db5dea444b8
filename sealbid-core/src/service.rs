use crate::{
    models::{BidForm, BidReceipt, HighestBid, ValidationError},
    ports::{Application, BidRepository as _, DuplicateBidId, Repository},
};
use thiserror::Error;
use tracing::{Level, event};

/// The storage error type of an application's repository.
pub type StorageError<A> = <<A as Application>::Repository as Repository>::Error;

/// The message shown for any failure the bidder cannot fix by editing the form.
pub const TRY_AGAIN_MESSAGE: &str =
    "We could not record your bid right now. Please try again later.";

/// The ways a submission can fail.
#[derive(Error, Debug)]
pub enum SubmitError<E> {
    /// The form was rejected; nothing was stored
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Every generated bid id collided with a stored one
    #[error("no unused bid id found after {attempts} attempts")]
    DuplicateBidId {
        /// How many ids were tried
        attempts: usize,
    },

    /// The storage backend failed
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] E),
}

impl<E> SubmitError<E> {
    /// Whether the bidder can resolve this by correcting their input
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The plain-text message to show the bidder.
    ///
    /// Validation failures explain what to fix. Everything else gets the
    /// same generic message, since storage details are not for the public.
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(err) => err.to_string(),
            Self::DuplicateBidId { .. } | Self::StorageUnavailable(_) => {
                TRY_AGAIN_MESSAGE.to_string()
            }
        }
    }
}

/// Accepts bids and reports the current leader.
///
/// The service owns no state of its own. Storage, the clock, the rules and
/// the id generator all come from the [`Application`] it was built with.
#[derive(Clone, Debug)]
pub struct BidService<A> {
    app: A,
}

impl<A: Application> BidService<A> {
    /// Build a service around the given application
    pub fn new(app: A) -> Self {
        Self { app }
    }

    /// Get a reference to the underlying application
    pub fn app(&self) -> &A {
        &self.app
    }

    /// Validate and store a submission.
    ///
    /// Validation failures return immediately without touching storage. Once
    /// the form is valid, a bid id is generated and insertion attempted; if
    /// the id is already taken a new one is drawn, up to
    /// [`BidRules::max_attempts`](crate::models::BidRules::max_attempts) times.
    #[tracing::instrument(skip_all)]
    pub async fn submit(&self, form: &BidForm) -> Result<BidReceipt, SubmitError<StorageError<A>>> {
        let rules = self.app.rules();
        let bid = form.validate(rules).inspect_err(|err| {
            event!(Level::DEBUG, err = err.to_string(), "rejected submission");
        })?;

        let db = self.app.database();
        let attempts = rules.max_attempts.max(1);

        for attempt in 1..=attempts {
            let bid_id = self.app.generate_bid_id();
            let bid_time = self.app.now();

            let created = db
                .create_bid(&bid, bid_id, bid_time)
                .await
                .map_err(|err| {
                    event!(Level::ERROR, err = err.to_string());
                    SubmitError::StorageUnavailable(err)
                })?;

            match created {
                Ok(record) => {
                    event!(
                        Level::INFO,
                        id = record.id,
                        bid_id = record.bid_id.as_str(),
                        attempt,
                        "accepted bid"
                    );
                    return Ok(record.receipt());
                }
                Err(DuplicateBidId(bid_id)) => {
                    event!(
                        Level::WARN,
                        bid_id = bid_id.as_str(),
                        attempt,
                        "bid id already taken"
                    );
                }
            }
        }

        Err(SubmitError::DuplicateBidId { attempts })
    }

    /// The current leading bid, with the bidder's name masked.
    ///
    /// Returns [`HighestBid::no_bids`] if nothing has been stored yet.
    #[tracing::instrument(skip_all)]
    pub async fn highest(&self) -> Result<HighestBid, StorageError<A>> {
        let highest = self.app.database().highest_bid().await.inspect_err(|err| {
            event!(Level::ERROR, err = err.to_string());
        })?;

        Ok(highest
            .map(|record| record.redacted())
            .unwrap_or_else(HighestBid::no_bids))
    }
}
