use thiserror::Error;

pub mod config;
pub mod entropy;

pub use self::config::ConfigError;
pub use self::entropy::EntropyError;

#[derive(Debug, Error)]
pub enum RidError {
    // Randomness errors, never transient
    #[error("Entropy error: {0}")]
    Entropy(#[from] EntropyError),
    // Setup errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Signing error: {0}")]
    Signing(String),
}
