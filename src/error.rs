use thiserror::Error;

/// Errors surfaced by the scoring engine, configuration and service layers
#[derive(Debug, Error)]
pub enum ZoMateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ZoMateError {
    /// Short machine-readable kind, used as the `error` field of JSON error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            ZoMateError::InvalidInput(_) => "invalid_input",
            ZoMateError::Config(_) => "configuration",
            ZoMateError::Serialization(_) => "serialization",
        }
    }
}

pub type Result<T> = std::result::Result<T, ZoMateError>;
