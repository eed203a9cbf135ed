use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::structs::PriceSnapshot;

/// Maximum number of retained history entries; the oldest are evicted first.
pub const HISTORY_CAP: usize = 100;

/// One recorded observation in the bot's in-memory history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub observed_at: DateTime<Utc>,
    pub price: Decimal,
    pub source: String,
}

/// Process-lifetime state of the bot, passed explicitly into each cycle.
///
/// Starts empty, is mutated only after a notification was accepted by the
/// sink, and is lost on process exit. There is no hidden global; callers own
/// the value and hand it to the driver.
#[derive(Debug, Default)]
pub struct BotState {
    previous_price: Option<Decimal>,
    history: VecDeque<PricePoint>,
}

impl BotState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The price from the last successfully reported cycle, if any.
    pub fn previous_price(&self) -> Option<Decimal> {
        self.previous_price
    }

    pub fn history(&self) -> &VecDeque<PricePoint> {
        &self.history
    }

    /// Commits a successfully reported snapshot, appending it to the history
    /// and evicting the oldest entries beyond [`HISTORY_CAP`].
    pub fn record(&mut self, snapshot: &PriceSnapshot) {
        self.previous_price = Some(snapshot.price);
        self.history.push_back(PricePoint {
            observed_at: snapshot.observed_at,
            price: snapshot.price,
            source: snapshot.source.clone(),
        });
        while self.history.len() > HISTORY_CAP {
            self.history.pop_front();
        }
    }
}
