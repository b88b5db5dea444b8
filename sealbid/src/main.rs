use sealbid::{AppConfig, Cli, impls::BidApp};
use sealbid_axum::start_server;
use sealbid_sqlite::Db;
use tracing::{Level, event};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    // Accordingly, we likely want to subscribe to these events so we can
    // write them to stdio and possibly some durable location.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    // Create config with proper layering of CLI args
    let AppConfig {
        server,
        database,
        rules,
    } = AppConfig::load(&cli)?;

    // Nothing is served unless the bid table is in place
    let db = Db::open(&database).await.inspect_err(|err| {
        event!(Level::ERROR, err = err.to_string(), "unable to open bid database");
    })?;

    event!(
        Level::INFO,
        minimum_bid = rules.minimum_bid,
        max_attempts = rules.max_attempts,
        "accepting bids"
    );

    start_server(server, BidApp { db, rules }).await?;

    Ok(())
}
