//! A single order card and its "respond" control.
//!
//! The card cycles between idle and responded. Activating an idle card flips
//! it to responded and schedules a reset; activating a responded card is
//! rejected and leaves the pending reset untouched. The reset task is owned
//! by the card and cancelled when the card goes away.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::effect::ResponseEffect;
use crate::format::{format_price, format_rating};
use crate::{CardView, Order, Theme};

/// How long a card stays in the responded state.
pub const RESPONSE_RESET: Duration = Duration::from_millis(2000);

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Accepted,
    Rejected,
}

#[derive(Debug)]
pub struct OrderCard {
    order: Order,
    responded: Arc<AtomicBool>,
    pending_reset: Option<PendingReset>,
}

/// Cancels the reset task when dropped.
#[derive(Debug)]
struct PendingReset {
    token: CancellationToken,
}

impl Drop for PendingReset {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl OrderCard {
    pub fn new(order: Order) -> Self {
        Self {
            order,
            responded: Arc::new(AtomicBool::new(false)),
            pending_reset: None,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn is_responded(&self) -> bool {
        self.responded.load(Ordering::Acquire)
    }

    /// The respond control is disabled for as long as the card is responded.
    pub fn can_respond(&self) -> bool {
        !self.is_responded()
    }

    /// Must be called from within a Tokio runtime; the reset runs as a task.
    pub fn activate_response(&mut self) -> Activation {
        if self
            .responded
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(order_id = self.order.id, "respond rejected, already responded");
            return Activation::Rejected;
        }

        let deadline = Instant::now() + RESPONSE_RESET;
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let flag = Arc::clone(&self.responded);
        let order_id = self.order.id;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    debug!(order_id, "response reset cancelled");
                }
                _ = tokio::time::sleep_until(deadline) => {
                    flag.store(false, Ordering::Release);
                    debug!(order_id, "response reset");
                }
            }
        });

        // Replacing a finished guard cancels a token nobody listens to anymore.
        self.pending_reset = Some(PendingReset { token });
        debug!(order_id, "respond accepted");
        Activation::Accepted
    }

    pub fn effect(&self) -> Option<ResponseEffect> {
        self.is_responded().then(ResponseEffect::new)
    }

    pub fn view(&self, theme: &Theme) -> CardView {
        let order = &self.order;
        CardView {
            id: order.id,
            title: format!("{} #{}", theme.labels.order, order.id),
            posted_ago: order.posted_ago.clone(),
            price: format_price(order.price, theme),
            price_amount: order.price,
            address: [
                order.address_primary.clone(),
                order.address_secondary.clone(),
            ],
            task: [order.task_primary.clone(), order.task_secondary.clone()],
            customer_handle: order.customer_handle.clone(),
            rating: format_rating(order.customer_rating),
            respond_label: theme.labels.respond.clone(),
            responded: self.is_responded(),
            respond_enabled: self.can_respond(),
            effect: self.effect(),
        }
    }
}
