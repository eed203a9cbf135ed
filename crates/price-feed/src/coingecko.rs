use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use configuration::settings::FeedConfig;
use core_types::PriceSnapshot;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::FeedError;
use crate::PriceProvider;

pub const SOURCE_NAME: &str = "CoinGecko";

/// One asset entry in the CoinGecko simple-price response. The response
/// object is keyed by asset id; only `usd` is guaranteed, the auxiliary
/// fields depend on the query flags and may be absent or null.
#[derive(Debug, Deserialize)]
pub struct SimplePriceQuote {
    pub usd: Option<Decimal>,
    #[serde(default)]
    pub usd_market_cap: Option<Decimal>,
    #[serde(default)]
    pub usd_24h_vol: Option<Decimal>,
    #[serde(default)]
    pub usd_24h_change: Option<Decimal>,
}

/// The primary price source: CoinGecko's simple-price endpoint.
pub struct CoinGeckoProvider {
    client: Client,
    url: String,
    asset_id: String,
    vs_currency: String,
}

impl CoinGeckoProvider {
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.coingecko_url.clone(),
            asset_id: config.asset_id.clone(),
            vs_currency: config.vs_currency.clone(),
        })
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<PriceSnapshot, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("ids", self.asset_id.as_str()),
                ("vs_currencies", self.vs_currency.as_str()),
                ("include_market_cap", "true"),
                ("include_24hr_vol", "true"),
                ("include_24hr_change", "true"),
                ("include_last_updated_at", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let quotes: HashMap<String, SimplePriceQuote> =
            serde_json::from_str(&text).map_err(|e| FeedError::Deserialization(e.to_string()))?;

        let quote = quotes
            .get(&self.asset_id)
            .ok_or(FeedError::MissingField("asset id"))?;
        let price = quote.usd.ok_or(FeedError::MissingField("usd"))?;

        Ok(PriceSnapshot {
            price,
            market_cap: quote.usd_market_cap.unwrap_or_default(),
            volume_24h: quote.usd_24h_vol.unwrap_or_default(),
            change_24h: quote.usd_24h_change.unwrap_or_default(),
            source: SOURCE_NAME.to_string(),
            observed_at: Utc::now(),
        })
    }
}
