//! Order feed core.
//!
//! Holds the order model shared by the server and the terminal client, the
//! feed container with its filter toggle, the per-order card with its timed
//! response affordance, and the view model both front ends render.

pub mod card;
pub mod effect;
pub mod error;
pub mod feed;
pub mod format;
pub mod source;
pub mod theme;
pub mod view;

use serde::{Deserialize, Serialize};

pub use card::{Activation, OrderCard, RESPONSE_RESET};
pub use error::FeedError;
pub use feed::{Feed, FeedSummary, PriceFilter};
pub use source::{JsonFileOrders, OrderSource, SampleOrders};
pub use theme::Theme;
pub use view::{CardView, FeedView, FilterToggle};

/// One listing in the feed. Read-only once loaded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub posted_ago: String,
    pub price: i64,
    pub address_primary: String,
    pub address_secondary: String,
    pub task_primary: String,
    pub task_secondary: String,
    pub customer_handle: String,
    /// Nominally within 0.0..=5.0, rendered as-is when it is not.
    pub customer_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_uses_camel_case_fields() {
        let json = r#"{
            "id": 16,
            "postedAgo": "5 h ago",
            "price": 1200,
            "addressPrimary": "45 Lenin St",
            "addressSecondary": "apt. 23",
            "taskPrimary": "Grocery delivery",
            "taskSecondary": "Needed: 2 people",
            "customerHandle": "@user123",
            "customerRating": 4.5
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 16);
        assert_eq!(order.posted_ago, "5 h ago");
        assert_eq!(order.customer_handle, "@user123");

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["addressSecondary"], "apt. 23");
        assert_eq!(value["customerRating"], 4.5);
    }

    #[test]
    fn test_order_rating_out_of_range_is_accepted() {
        let json = r#"{"id":1,"postedAgo":"now","price":10,"addressPrimary":"",
            "addressSecondary":"","taskPrimary":"","taskSecondary":"",
            "customerHandle":"@x","customerRating":7.25}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer_rating, 7.25);
    }
}
