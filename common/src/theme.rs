//! Presentation constants: currency, digit grouping, copy and palette.
//!
//! None of this affects feed or card behavior. A theme file only needs the
//! keys it wants to change:
//!
//! ```yaml
//! currency_symbol: "$"
//! labels:
//!   respond: Take it
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::FeedError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub currency_symbol: String,
    pub thousands_separator: String,
    pub labels: Labels,
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            currency_symbol: "₽".to_string(),
            thousands_separator: " ".to_string(),
            labels: Labels::default(),
            palette: Palette::default(),
        }
    }
}

impl Theme {
    pub fn load(path: &Path) -> Result<Self, FeedError> {
        let content = fs::read_to_string(path).map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = serde_yaml::from_str(&content).map_err(|source| FeedError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded theme");
        Ok(theme)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub subtitle: String,
    pub cheap: String,
    pub expensive: String,
    pub total_orders: String,
    pub average_price: String,
    pub active_offers: String,
    pub order: String,
    pub per_shift: String,
    pub address: String,
    pub description: String,
    pub customer: String,
    pub respond: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Order feed".to_string(),
            subtitle: "Filter by price and respond in one tap".to_string(),
            cheap: "Cheaper".to_string(),
            expensive: "Pricier".to_string(),
            total_orders: "Total orders".to_string(),
            average_price: "Average price".to_string(),
            active_offers: "Active offers".to_string(),
            order: "Order".to_string(),
            per_shift: "per shift".to_string(),
            address: "Address & time".to_string(),
            description: "Description".to_string(),
            customer: "Customer".to_string(),
            respond: "Respond".to_string(),
        }
    }
}

/// CSS colors used by the HTML page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub card: String,
    pub panel: String,
    pub text: String,
    pub muted: String,
    pub price: String,
    pub accent: String,
    pub particle: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#0f0f0f".to_string(),
            card: "#1a1a1a".to_string(),
            panel: "#2a3a5a".to_string(),
            text: "#ffffff".to_string(),
            muted: "#9ca3af".to_string(),
            price: "#facc15".to_string(),
            accent: "#f59e42".to_string(),
            particle: "#fde047".to_string(),
        }
    }
}
