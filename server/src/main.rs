//! Order Feed Server
//!
//! Hosts one live order feed and serves it as the mini-app page plus a
//! small JSON API. Orders come from a JSON file or the built-in sample set.

mod error;
mod html;
mod routes;
mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use common::{Feed, JsonFileOrders, SampleOrders, Theme};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "order-feed-server", about = "Serve the order feed mini-app", version)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "ORDER_FEED_ADDR", default_value = "127.0.0.1:3000")]
    addr: String,

    /// JSON file with the orders to show (default: built-in sample orders)
    #[arg(long, env = "ORDER_FEED_ORDERS")]
    orders: Option<PathBuf>,

    /// YAML theme overriding currency, labels and colors
    #[arg(long, env = "ORDER_FEED_THEME")]
    theme: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let feed = match &args.orders {
        Some(path) => Feed::load(&JsonFileOrders::new(path))
            .with_context(|| format!("failed to load orders from {}", path.display()))?,
        None => {
            warn!("no orders file given, serving the sample orders");
            Feed::load(&SampleOrders)?
        }
    };

    let theme = match &args.theme {
        Some(path) => Theme::load(path)?,
        None => Theme::default(),
    };

    if feed.is_empty() {
        warn!("orders file is empty, the feed will show no cards");
    }
    let summary = feed.summary();
    info!(
        orders = summary.total,
        average_price = summary.average_price,
        "feed ready"
    );

    let app = routes::router(state::AppState::new(feed, theme));

    let listener = tokio::net::TcpListener::bind(&args.addr)
        .await
        .with_context(|| format!("failed to bind {}", args.addr))?;
    info!("order feed listening on http://{}", args.addr);
    info!("try: curl 'http://{}/api/feed'", args.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
