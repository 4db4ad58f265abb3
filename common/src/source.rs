//! Where the feed gets its orders from.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::{FeedError, Order};

/// Provides the ordered sequence of orders a feed displays.
pub trait OrderSource {
    fn orders(&self) -> Result<Vec<Order>, FeedError>;
}

/// The fixed two-order set the mini-app ships with.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleOrders;

impl OrderSource for SampleOrders {
    fn orders(&self) -> Result<Vec<Order>, FeedError> {
        Ok(vec![
            Order {
                id: 17,
                posted_ago: "4 h ago".to_string(),
                price: 500,
                address_primary: "Sadovaya St".to_string(),
                address_secondary: "13".to_string(),
                task_primary: "Unloading".to_string(),
                task_secondary: "Needed: 1 person".to_string(),
                customer_handle: "@lalalsIII".to_string(),
                customer_rating: 0.0,
            },
            Order {
                id: 16,
                posted_ago: "5 h ago".to_string(),
                price: 1200,
                address_primary: "45 Lenin St".to_string(),
                address_secondary: "apt. 23".to_string(),
                task_primary: "Grocery delivery".to_string(),
                task_secondary: "Needed: 2 people".to_string(),
                customer_handle: "@user123".to_string(),
                customer_rating: 4.5,
            },
        ])
    }
}

/// Orders stored as a JSON array on disk, e.g. `data/orders.json`.
#[derive(Debug, Clone)]
pub struct JsonFileOrders {
    path: PathBuf,
}

impl JsonFileOrders {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OrderSource for JsonFileOrders {
    fn orders(&self) -> Result<Vec<Order>, FeedError> {
        if !self.path.exists() {
            return Err(FeedError::OrdersNotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path).map_err(|source| FeedError::Io {
            path: self.path.clone(),
            source,
        })?;
        let orders: Vec<Order> =
            serde_json::from_str(&content).map_err(|source| FeedError::Json {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), count = orders.len(), "loaded orders");
        Ok(orders)
    }
}
