use thiserror::Error;

/// Errors raised while building or loading a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The scan interval must be at least one second.
    #[error("invalid interval: {0} seconds (must be >= 1)")]
    InvalidInterval(u64),

    /// The asset API address is empty or unset.
    #[error("api_address must not be empty")]
    MissingApiAddress,

    /// The asset API token is empty or unset.
    #[error("api_token must not be empty")]
    MissingApiToken,

    /// The config file could not be read or parsed.
    #[error("failed to load configuration: {0}")]
    Load(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
