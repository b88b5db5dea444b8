#![warn(missing_docs)]
//! The HTTP boundary for `sealbid`.
//!
//! [`router`] wires a [`BidService`] into an axum router serving the bid form,
//! form submission, the post-submission confirmation and the current highest
//! bid. [`start_server`] binds it to the address in [`AxumConfig`].
//!
//! Validation failures come back as `400` with the message the bidder should
//! see; storage failures are logged and come back as `503` with a generic
//! message.

mod bid_routes;

use axum::{Json, routing::get};
use sealbid_core::{
    ports::{Application, Repository},
    service::BidService,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct the full router around the given application
pub fn router<T: ApiApplication>(app: T) -> axum::Router {
    axum::Router::new()
        .route("/health", get(health_check))
        .merge(bid_routes::router::<T>())
        .layer(TraceLayer::new_for_http())
        .with_state(BidService::new(app))
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    axum::serve(listener, router(app)).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication:
    Clone
    + Send
    + Sync
    + 'static
    + Application<Repository: Send + Sync + 'static + Repository<DateTime: Send + Sync + 'static>>
{
}

// this is the blanket implementation
impl<T: Clone + Send + Sync + 'static> ApiApplication for T where
    T: Application<
            Repository: Send + Sync + 'static + Repository<DateTime: Send + Sync + 'static>,
        >
{
}
