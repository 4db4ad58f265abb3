//! Order Feed terminal client
//!
//! Fetches the feed from a running order feed server and prints it as text.
//! Can also switch the price filter and respond to an order.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use common::{CardView, FeedView, PriceFilter};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "order-feed", about = "Browse the order feed from a terminal", version)]
struct Cli {
    /// Base URL of the order feed server
    #[arg(long, global = true, env = "ORDER_FEED_URL", default_value = "http://127.0.0.1:3000")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the feed
    Feed,

    /// Switch the price filter toggle
    Filter {
        /// cheap or expensive
        value: PriceFilter,
    },

    /// Respond to an order
    Respond {
        /// Order id
        id: u64,
    },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Passes 2xx responses through; turns anything else into the server's message.
fn check(response: Response) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    bail!(error_message(status, &body))
}

/// The `{"error": ...}` text when the body carries one, else the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.error)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());
    format!("server returned {}: {}", status.as_u16(), message)
}

fn render_feed(view: &FeedView) -> String {
    let mut out = String::new();
    out.push_str(&format!("⚡ {}\n", view.title));
    out.push_str(&format!("   {}\n", view.subtitle));

    let toggles: Vec<String> = view
        .toggles
        .iter()
        .map(|t| {
            if t.active {
                format!("[{}]", t.label)
            } else {
                format!(" {} ", t.label)
            }
        })
        .collect();
    out.push_str(&format!("   {}\n", toggles.join(" ")));
    out.push_str(&format!(
        "   {}: {}   {}: {}\n",
        view.total_label, view.total, view.average_label, view.average_price
    ));
    out.push('\n');
    out.push_str(&format!("🔥 {}\n", view.section_label));

    for card in &view.cards {
        out.push('\n');
        out.push_str(&render_card(card));
    }
    out
}

fn render_card(card: &CardView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} · {}\n", card.title, card.posted_ago));
    out.push_str(&format!("  {}\n", card.price));
    out.push_str(&format!("  {} / {}\n", card.address[0], card.address[1]));
    out.push_str(&format!("  {} / {}\n", card.task[0], card.task[1]));
    out.push_str(&format!("  {}  ★ {}\n", card.customer_handle, card.rating));
    if card.effect.is_some() {
        out.push_str(&format!("  ({}) ✨\n", card.respond_label));
    } else if card.respond_enabled {
        out.push_str(&format!("  [{}]\n", card.respond_label));
    } else {
        out.push_str(&format!("  ({})\n", card.respond_label));
    }
    out
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let base = cli.server.trim_end_matches('/');
    let client = Client::new();

    match cli.command {
        Command::Feed => {
            let url = format!("{base}/api/feed");
            debug!(%url, "fetching feed");
            let response = client
                .get(&url)
                .send()
                .with_context(|| format!("failed to reach {url}"))?;
            let view: FeedView = check(response)?.json().context("malformed feed")?;
            print!("{}", render_feed(&view));
        }
        Command::Filter { value } => {
            let url = format!("{base}/api/filter");
            debug!(%url, filter = %value, "setting filter");
            let response = client
                .put(&url)
                .json(&serde_json::json!({ "filter": value }))
                .send()
                .with_context(|| format!("failed to reach {url}"))?;
            let view: FeedView = check(response)?.json().context("malformed feed")?;
            print!("{}", render_feed(&view));
        }
        Command::Respond { id } => {
            let url = format!("{base}/api/orders/{id}/respond");
            debug!(%url, "responding");
            let response = client
                .post(&url)
                .send()
                .with_context(|| format!("failed to reach {url}"))?;
            let card: CardView = check(response)?.json().context("malformed card")?;
            println!("✅ Responded to {}", card.title);
            print!("{}", render_card(&card));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::effect::ResponseEffect;
    use common::{Feed, SampleOrders, Theme};

    fn sample_view() -> FeedView {
        Feed::load(&SampleOrders).unwrap().render(&Theme::default())
    }

    #[test]
    fn test_render_feed_header() {
        let text = render_feed(&sample_view());
        assert!(text.contains("[Cheaper]  Pricier "));
        assert!(text.contains("Total orders: 2   Average price: 850 ₽"));
    }

    #[test]
    fn test_render_feed_keeps_card_order() {
        let text = render_feed(&sample_view());
        let first = text.find("Order #17").unwrap();
        let second = text.find("Order #16").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_card_idle() {
        let view = sample_view();
        let text = render_card(&view.cards[1]);
        assert!(text.contains("1 200 ₽"));
        assert!(text.contains("@user123  ★ 4.5"));
        assert!(text.contains("[Respond]"));
    }

    #[test]
    fn test_render_card_while_responded() {
        let mut card = sample_view().cards[0].clone();
        card.responded = true;
        card.respond_enabled = false;
        card.effect = Some(ResponseEffect::new());
        let text = render_card(&card);
        assert!(text.contains("(Respond) ✨"));
        assert!(!text.contains("[Respond]"));

        card.effect = None;
        assert!(render_card(&card).contains("  (Respond)\n"));
    }

    #[test]
    fn test_error_message_uses_server_text() {
        let message = error_message(
            StatusCode::CONFLICT,
            r#"{"error":"order 16: already responded"}"#,
        );
        assert_eq!(message, "server returned 409: order 16: already responded");

        let message = error_message(StatusCode::NOT_FOUND, r#"{"error":"order 99 not found"}"#);
        assert_eq!(message, "server returned 404: order 99 not found");
    }

    #[test]
    fn test_error_message_falls_back_to_reason() {
        let message = error_message(StatusCode::BAD_GATEWAY, "<html>upstream down</html>");
        assert_eq!(message, "server returned 502: Bad Gateway");

        let message = error_message(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(message, "server returned 500: Internal Server Error");
    }
}
