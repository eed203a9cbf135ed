use serde::Deserialize;

/// The root settings structure for the bot.
#[derive(Debug, Clone)]
pub struct Settings {
    pub telegram: TelegramConfig,
    pub feed: FeedConfig,
    pub schedule: ScheduleConfig,
}

/// Credentials for the Telegram Bot API.
///
/// These are secrets and are only ever sourced from the process environment,
/// never from the settings file.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

/// Parameters of the market data feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// CoinGecko asset identifier (e.g. "iotex").
    pub asset_id: String,
    /// Ticker symbol used in the formatted report (e.g. "IOTX").
    pub symbol: String,
    /// Quote currency for the primary source.
    pub vs_currency: String,
    /// The CoinGecko simple-price endpoint.
    pub coingecko_url: String,
    /// The DIA asset-quotation endpoint for the configured asset.
    pub dia_url: String,
    /// Fixed timeout applied to every outbound price request.
    pub request_timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            asset_id: "iotex".to_string(),
            symbol: "IOTX".to_string(),
            vs_currency: "usd".to_string(),
            coingecko_url: "https://api.coingecko.com/api/v3/simple/price".to_string(),
            dia_url: "https://api.diadata.org/v1/assetQuotation/Ethereum/0x6fB3e0A217407EFFf7Ca062D46c26E5d60a14d69"
                .to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Pacing of the continuous watch loop.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Seconds between price checks.
    pub interval_secs: u64,
    /// Shorter sleep applied after a cycle blew up unexpectedly.
    pub cooldown_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_secs: 300,
            cooldown_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_defaults_target_iotex() {
        let feed = FeedConfig::default();
        assert_eq!(feed.asset_id, "iotex");
        assert_eq!(feed.vs_currency, "usd");
        assert_eq!(feed.request_timeout_secs, 10);
    }

    #[test]
    fn schedule_defaults_to_five_minutes() {
        let schedule = ScheduleConfig::default();
        assert_eq!(schedule.interval_secs, 300);
        assert_eq!(schedule.cooldown_secs, 60);
    }
}
