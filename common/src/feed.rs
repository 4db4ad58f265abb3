//! The feed container: the order collection, the price filter toggle and
//! the summary panel.
//!
//! The filter only decides which toggle is highlighted. Orders are always
//! shown in the order the source produced them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::format::{format_price, round_amount};
use crate::view::{FeedView, FilterToggle};
use crate::{FeedError, Order, OrderCard, OrderSource, Theme};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceFilter {
    #[default]
    Cheap,
    Expensive,
}

impl PriceFilter {
    pub const ALL: [PriceFilter; 2] = [PriceFilter::Cheap, PriceFilter::Expensive];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceFilter::Cheap => "cheap",
            PriceFilter::Expensive => "expensive",
        }
    }

    fn label<'a>(&self, theme: &'a Theme) -> &'a str {
        match self {
            PriceFilter::Cheap => &theme.labels.cheap,
            PriceFilter::Expensive => &theme.labels.expensive,
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceFilter {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cheap" => Ok(PriceFilter::Cheap),
            "expensive" => Ok(PriceFilter::Expensive),
            _ => Err(FeedError::UnknownFilter(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedSummary {
    pub total: usize,
    /// Arithmetic mean of all prices, 0 for an empty feed.
    pub average_price: f64,
}

impl FeedSummary {
    pub fn of<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let (total, sum) = orders
            .into_iter()
            .fold((0usize, 0f64), |(n, sum), o| (n + 1, sum + o.price as f64));
        let average_price = if total == 0 { 0.0 } else { sum / total as f64 };
        Self {
            total,
            average_price,
        }
    }
}

#[derive(Debug, Default)]
pub struct Feed {
    cards: Vec<OrderCard>,
    filter: PriceFilter,
}

impl Feed {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            cards: orders.into_iter().map(OrderCard::new).collect(),
            filter: PriceFilter::default(),
        }
    }

    pub fn load(source: &impl OrderSource) -> Result<Self, FeedError> {
        let orders = source.orders()?;
        info!(count = orders.len(), "feed loaded");
        Ok(Self::new(orders))
    }

    pub fn filter(&self) -> PriceFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: PriceFilter) {
        if self.filter != filter {
            info!(from = %self.filter, to = %filter, "filter changed");
        }
        self.filter = filter;
    }

    /// Orders in collection order, regardless of the filter.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.cards.iter().map(OrderCard::order)
    }

    pub fn card(&self, id: u64) -> Option<&OrderCard> {
        self.cards.iter().find(|c| c.order().id == id)
    }

    pub fn card_mut(&mut self, id: u64) -> Option<&mut OrderCard> {
        self.cards.iter_mut().find(|c| c.order().id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn summary(&self) -> FeedSummary {
        FeedSummary::of(self.orders())
    }

    pub fn render(&self, theme: &Theme) -> FeedView {
        let summary = self.summary();
        let labels = &theme.labels;

        let toggles = PriceFilter::ALL
            .iter()
            .map(|&value| FilterToggle {
                value,
                label: value.label(theme).to_string(),
                active: value == self.filter,
            })
            .collect();

        FeedView {
            title: labels.title.clone(),
            subtitle: labels.subtitle.clone(),
            filter: self.filter,
            toggles,
            total_label: labels.total_orders.clone(),
            total: summary.total,
            average_label: labels.average_price.clone(),
            average_price: format_price(round_amount(summary.average_price), theme),
            average_amount: summary.average_price,
            section_label: labels.active_offers.clone(),
            cards: self.cards.iter().map(|c| c.view(theme)).collect(),
        }
    }
}
