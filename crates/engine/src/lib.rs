use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use alerter::Notifier;
use core_types::{BotState, PriceChange, PriceSnapshot};
use futures::FutureExt;
use price_feed::FallbackFeed;

pub mod error;
pub mod report;

pub use error::EngineError;

/// The result of one successful fetch → compute → format → send cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub snapshot: PriceSnapshot,
    pub change: PriceChange,
    pub message: String,
}

/// The central orchestrator: owns the provider chain and the notification
/// sink, and drives each cycle over an explicit [`BotState`].
pub struct Watcher {
    feed: FallbackFeed,
    notifier: Arc<dyn Notifier>,
    symbol: String,
}

impl Watcher {
    pub fn new(feed: FallbackFeed, notifier: Arc<dyn Notifier>, symbol: impl Into<String>) -> Self {
        Self {
            feed,
            notifier,
            symbol: symbol.into(),
        }
    }

    /// Runs one full cycle against the given state.
    ///
    /// The state is committed only after the sink accepted the message; a
    /// failure at any step leaves it untouched, so the next cycle compares
    /// against the last price that actually reached the channel.
    pub async fn run_cycle(&self, state: &mut BotState) -> Result<CycleReport, EngineError> {
        tracing::info!(symbol = %self.symbol, "Checking price...");

        let snapshot = self.feed.fetch().await?;
        tracing::info!(
            price = %snapshot.price,
            source = %snapshot.source,
            "Current price"
        );

        let change = PriceChange::between(snapshot.price, state.previous_price());
        let message = report::price_message(&self.symbol, &snapshot, &change);

        self.notifier.notify(&message).await?;

        state.record(&snapshot);
        tracing::debug!(history_len = state.history().len(), "Recorded price point");

        Ok(CycleReport {
            snapshot,
            change,
            message,
        })
    }

    /// Runs cycles forever at a fixed interval.
    ///
    /// A cycle that fails is logged and the loop keeps going after the
    /// regular interval. A cycle that panics is contained and followed by
    /// the shorter cool-down instead. There is no backoff, no retry cap and
    /// no circuit breaker; Ctrl-C ends the loop cleanly.
    pub async fn run_forever(&self, state: &mut BotState, interval: Duration, cooldown: Duration) {
        tracing::info!(
            symbol = %self.symbol,
            interval_secs = interval.as_secs(),
            "Starting watch loop"
        );

        loop {
            let delay = match AssertUnwindSafe(self.run_cycle(state)).catch_unwind().await {
                Ok(Ok(report)) => {
                    tracing::info!(
                        price = %report.snapshot.price,
                        trend = ?report.change.trend,
                        "Cycle complete"
                    );
                    interval
                }
                Ok(Err(e)) => {
                    tracing::error!(error = %e, "Cycle failed");
                    interval
                }
                Err(_) => {
                    tracing::error!("Cycle panicked, cooling down before the next attempt");
                    cooldown
                }
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted, stopping watch loop");
                    break;
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}
