use rand::rand_core::OsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntropyError {
    /// The operating system random source refused to produce bytes
    #[error("OS random source failure: {0}")]
    Os(#[from] OsError),

    /// A non-OS entropy source failed (mocks, custom sources)
    #[error("Entropy source failure: {0}")]
    Source(String),
}
