use crate::errors::EntropyError;
use crate::services::RidGenerator;
use crate::utils::alphabet::ALPHABET;
use crate::utils::entropy::{uniform_i63, uniform_mod62, EntropySource, OsEntropy};

/// Generator drawing every symbol straight from a secure entropy source.
///
/// Slower than [`FastGenerator`](crate::services::FastGenerator) but each
/// symbol is an exact uniform draw in `[0, 62)`. Holds no mutable state.
#[derive(Debug, Clone, Default)]
pub struct CryptoGenerator<E = OsEntropy> {
    entropy: E,
}

impl CryptoGenerator {
    pub const fn new() -> Self {
        Self { entropy: OsEntropy }
    }
}

impl<E: EntropySource> CryptoGenerator<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Uniform non-negative 63-bit integer, used to seed the fast streams
    pub fn try_int63(&self) -> Result<i64, EntropyError> {
        uniform_i63(&self.entropy)
    }
}

impl<E: EntropySource> RidGenerator for CryptoGenerator<E> {
    fn try_generate(&self, n: usize) -> Result<String, EntropyError> {
        (0..n)
            .map(|_| uniform_mod62(&self.entropy).map(|i| ALPHABET[i as usize] as char))
            .collect()
    }
}
