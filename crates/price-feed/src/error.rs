use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("The price request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("The price API returned status {0}")]
    Status(u16),

    #[error("Failed to deserialize the price response: {0}")]
    Deserialization(String),

    #[error("The price response is missing the expected field: {0}")]
    MissingField(&'static str),

    #[error("All price sources failed")]
    Exhausted,
}
