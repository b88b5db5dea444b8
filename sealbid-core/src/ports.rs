mod application;
mod bid;

pub use application::Application;
pub use bid::{BidRepository, DuplicateBidId};

/// The base trait every storage backend implements.
///
/// The associated types let each backend pick its own error and timestamp
/// representation; the core never inspects either beyond passing them along.
pub trait Repository: Sized + Send + Sync {
    /// The error type for underlying storage failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// The timestamp type stored alongside each bid
    type DateTime: Clone + Send + Sync;
}
