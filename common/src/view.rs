//! Render output shared by the HTML page, the JSON API and the terminal client.

use serde::{Deserialize, Serialize};

use crate::PriceFilter;
use crate::effect::ResponseEffect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedView {
    pub title: String,
    pub subtitle: String,
    pub filter: PriceFilter,
    pub toggles: Vec<FilterToggle>,
    pub total_label: String,
    pub total: usize,
    pub average_label: String,
    /// Formatted for display, e.g. `3 845 ₽`.
    pub average_price: String,
    pub average_amount: f64,
    pub section_label: String,
    pub cards: Vec<CardView>,
}

impl FeedView {
    pub fn any_responded(&self) -> bool {
        self.cards.iter().any(|c| c.responded)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterToggle {
    pub value: PriceFilter,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: u64,
    pub title: String,
    pub posted_ago: String,
    pub price: String,
    pub price_amount: i64,
    pub address: [String; 2],
    pub task: [String; 2],
    pub customer_handle: String,
    pub rating: String,
    pub respond_label: String,
    pub responded: bool,
    pub respond_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<ResponseEffect>,
}
