use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from file: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Required environment variable {0} is not set")]
    MissingVar(&'static str),
}
