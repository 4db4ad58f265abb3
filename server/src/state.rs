use std::sync::Arc;

use common::{Feed, Theme};
use tokio::sync::Mutex;

/// Shared application state: one live feed and the theme it renders with.
pub struct AppState {
    pub feed: Mutex<Feed>,
    pub theme: Theme,
}

impl AppState {
    pub fn new(feed: Feed, theme: Theme) -> Arc<Self> {
        Arc::new(Self {
            feed: Mutex::new(feed),
            theme,
        })
    }
}
