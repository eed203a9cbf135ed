use std::sync::Arc;
use std::time::Duration;

use alerter::TelegramAlerter;
use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::load_settings;
use core_types::BotState;
use engine::Watcher;
use price_feed::FallbackFeed;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// A Telegram price-alert bot with a primary/fallback market data feed.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single price check and exit (cron-friendly).
    Once,
    /// Run price checks forever at a fixed interval.
    Watch(WatchArgs),
}

#[derive(Parser)]
struct WatchArgs {
    /// Seconds between price checks. Overrides the configured interval.
    #[arg(long)]
    interval_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present; deployments supply
    // them directly.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    // A missing credential fails here, before any request goes out.
    let settings = load_settings().context("invalid configuration")?;
    tracing::info!(
        asset = %settings.feed.asset_id,
        chat_id = %settings.telegram.chat_id,
        token = %redact(&settings.telegram.bot_token),
        "Configuration loaded"
    );

    let feed = FallbackFeed::from_config(&settings.feed)?;
    let notifier = Arc::new(TelegramAlerter::new(&settings.telegram)?);
    let watcher = Watcher::new(feed, notifier, settings.feed.symbol.clone());
    let mut state = BotState::new();

    match cli.command {
        Commands::Once => {
            watcher
                .run_cycle(&mut state)
                .await
                .context("price check failed")?;
            tracing::info!("Price check sent successfully; exiting.");
        }
        Commands::Watch(args) => {
            let interval =
                Duration::from_secs(args.interval_secs.unwrap_or(settings.schedule.interval_secs));
            let cooldown = Duration::from_secs(settings.schedule.cooldown_secs);
            watcher.run_forever(&mut state, interval, cooldown).await;
        }
    }

    Ok(())
}

/// Only the first few characters of the bot token ever reach the logs.
fn redact(token: &str) -> String {
    let prefix: String = token.chars().take(10).collect();
    format!("{prefix}...")
}
