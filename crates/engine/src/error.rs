use alerter::AlerterError;
use price_feed::FeedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Price fetch failed: {0}")]
    Feed(#[from] FeedError),

    #[error("Failed to deliver the notification: {0}")]
    Notify(#[from] AlerterError),
}
