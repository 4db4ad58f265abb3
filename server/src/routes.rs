//! HTTP surface: the mini-app page and its JSON API.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post, put},
};
use common::{Activation, CardView, FeedError, FeedView, Order, PriceFilter};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::AppError;
use crate::html;
use crate::state::AppState;

type SharedState = Arc<AppState>;

/// Body of `PUT /api/filter`.
#[derive(Debug, Deserialize)]
struct FilterBody {
    filter: String,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/orders", get(orders_page))
        .route("/orders/filter/{value}", post(page_set_filter))
        .route("/orders/{id}/respond", post(page_respond))
        .route("/api/orders", get(list_orders))
        .route("/api/feed", get(get_feed))
        .route("/api/filter", put(put_filter))
        .route("/api/orders/{id}/respond", post(respond))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn parse_filter(value: &str) -> Result<PriceFilter, AppError> {
    value
        .parse()
        .map_err(|e: FeedError| AppError::bad_request(e.to_string()))
}

/// Handler for GET /
async fn root_handler() -> Redirect {
    Redirect::to("/orders")
}

/// Handler for GET /orders
async fn orders_page(State(state): State<SharedState>) -> Html<String> {
    let view = state.feed.lock().await.render(&state.theme);
    Html(html::render_page(&view, &state.theme))
}

/// Handler for POST /orders/filter/{value}
async fn page_set_filter(
    State(state): State<SharedState>,
    Path(value): Path<String>,
) -> Result<Redirect, AppError> {
    let filter = parse_filter(&value)?;
    state.feed.lock().await.set_filter(filter);
    Ok(Redirect::to("/orders"))
}

/// Handler for POST /orders/{id}/respond
///
/// A rejected activation still redirects; the page shows the disabled button.
async fn page_respond(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Redirect, AppError> {
    activate(&state, id).await?;
    Ok(Redirect::to("/orders"))
}

/// Handler for GET /api/orders
async fn list_orders(State(state): State<SharedState>) -> Json<Vec<Order>> {
    let feed = state.feed.lock().await;
    Json(feed.orders().cloned().collect())
}

/// Handler for GET /api/feed
async fn get_feed(State(state): State<SharedState>) -> Json<FeedView> {
    Json(state.feed.lock().await.render(&state.theme))
}

/// Handler for PUT /api/filter
async fn put_filter(
    State(state): State<SharedState>,
    Json(body): Json<FilterBody>,
) -> Result<Json<FeedView>, AppError> {
    let filter = parse_filter(&body.filter)?;
    let mut feed = state.feed.lock().await;
    feed.set_filter(filter);
    Ok(Json(feed.render(&state.theme)))
}

/// Handler for POST /api/orders/{id}/respond
async fn respond(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<CardView>, AppError> {
    match activate(&state, id).await? {
        (Activation::Accepted, view) => Ok(Json(view)),
        (Activation::Rejected, _) => Err(AppError::conflict(format!(
            "order {id}: already responded"
        ))),
    }
}

async fn activate(state: &AppState, id: u64) -> Result<(Activation, CardView), AppError> {
    let mut feed = state.feed.lock().await;
    let card = feed
        .card_mut(id)
        .ok_or_else(|| AppError::not_found(format!("order {id} not found")))?;
    let outcome = card.activate_response();
    if outcome == Activation::Accepted {
        info!(order_id = id, "responded to order");
    }
    Ok((outcome, card.view(&state.theme)))
}
