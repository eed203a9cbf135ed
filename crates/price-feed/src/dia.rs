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

pub const SOURCE_NAME: &str = "DIA";

/// Quotation payload returned by the DIA asset endpoint. DIA supplies fewer
/// fields than the primary source; market cap and 24h change are not
/// available from it at all.
#[derive(Debug, Deserialize)]
pub struct AssetQuotation {
    #[serde(rename = "Price")]
    pub price: Option<Decimal>,
    #[serde(rename = "VolumeYesterdayUSD", default)]
    pub volume_yesterday_usd: Option<Decimal>,
}

/// The secondary price source, consulted only when the primary fails.
pub struct DiaProvider {
    client: Client,
    url: String,
}

impl DiaProvider {
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.dia_url.clone(),
        })
    }
}

#[async_trait]
impl PriceProvider for DiaProvider {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<PriceSnapshot, FeedError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let quotation: AssetQuotation =
            serde_json::from_str(&text).map_err(|e| FeedError::Deserialization(e.to_string()))?;

        let price = quotation.price.ok_or(FeedError::MissingField("Price"))?;

        Ok(PriceSnapshot {
            price,
            market_cap: Decimal::ZERO,
            volume_24h: quotation.volume_yesterday_usd.unwrap_or_default(),
            change_24h: Decimal::ZERO,
            source: SOURCE_NAME.to_string(),
            observed_at: Utc::now(),
        })
    }
}
