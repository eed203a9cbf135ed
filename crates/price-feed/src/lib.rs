use std::sync::Arc;

use async_trait::async_trait;
use configuration::settings::FeedConfig;
use core_types::PriceSnapshot;

pub mod coingecko;
pub mod dia;
pub mod error;

// --- Public API ---
pub use coingecko::CoinGeckoProvider;
pub use dia::DiaProvider;
pub use error::FeedError;

/// The generic, abstract interface for a current-price data source.
/// This trait is the contract the driver uses, allowing the underlying
/// implementation (live or mock) to be swapped out, and allowing further
/// fallback sources to be appended to the chain.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Short human-readable name, used in logs and for snapshot tagging.
    fn name(&self) -> &'static str;

    /// Fetches the current price observation from this source.
    async fn fetch(&self) -> Result<PriceSnapshot, FeedError>;
}

/// An ordered chain of price providers, consulted front to back.
pub struct FallbackFeed {
    providers: Vec<Arc<dyn PriceProvider>>,
}

impl FallbackFeed {
    pub fn new(providers: Vec<Arc<dyn PriceProvider>>) -> Self {
        Self { providers }
    }

    /// Builds the default CoinGecko → DIA chain from the feed settings.
    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        Ok(Self::new(vec![
            Arc::new(CoinGeckoProvider::new(config)?),
            Arc::new(DiaProvider::new(config)?),
        ]))
    }

    /// Tries each provider exactly once, in order, returning the first
    /// successful snapshot. A provider failure is logged and the next source
    /// is consulted; when every source has failed the fetch fails for this
    /// cycle with [`FeedError::Exhausted`].
    pub async fn fetch(&self) -> Result<PriceSnapshot, FeedError> {
        for provider in &self.providers {
            match provider.fetch().await {
                Ok(snapshot) => {
                    tracing::debug!(
                        source = provider.name(),
                        price = %snapshot.price,
                        "Fetched current price"
                    );
                    return Ok(snapshot);
                }
                Err(e) => {
                    tracing::warn!(
                        source = provider.name(),
                        error = %e,
                        "Price source failed, trying next"
                    );
                }
            }
        }

        tracing::error!("All price sources failed");
        Err(FeedError::Exhausted)
    }
}
