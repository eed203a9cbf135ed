use serde::Deserialize;

use crate::settings::{FeedConfig, ScheduleConfig, TelegramConfig};

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::Settings;

/// The file-backed portion of the settings. Everything here has a code
/// default, so the file itself is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    feed: FeedConfig,
    schedule: ScheduleConfig,
}

/// Loads the application settings.
///
/// Feed and schedule parameters come from an optional `config.toml`,
/// falling back to code defaults. The Telegram credentials are required and
/// come from the `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID` environment
/// variables; a missing variable is a fatal startup error, reported before
/// any request is made.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config.toml").required(false))
        .build()?;

    let file = builder.try_deserialize::<FileSettings>()?;

    Ok(Settings {
        telegram: telegram_from_env()?,
        feed: file.feed,
        schedule: file.schedule,
    })
}

fn telegram_from_env() -> Result<TelegramConfig, ConfigError> {
    Ok(TelegramConfig {
        bot_token: required_var("TELEGRAM_BOT_TOKEN")?,
        chat_id: required_var("TELEGRAM_CHAT_ID")?,
    })
}

/// Reads a mandatory environment variable, treating blank values as unset.
fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
