//! Error types for bridge setup

use thiserror::Error;

/// Failure loading the bridge configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for
    /// [`BridgeConfig`](crate::BridgeConfig).
    #[cfg(feature = "serde")]
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
