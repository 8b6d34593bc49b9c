use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Represents an error raised while reading or merging configuration sources.
    #[error("Configuration source error: {0}")]
    SourceError(#[from] config::ConfigError),
}
