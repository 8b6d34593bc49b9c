use crate::errors::EntropyError;
use crate::services::RidGenerator;
use crate::utils::alphabet::ALPHABET;

/// Non-cryptographic generator for tests and benchmarks.
///
/// Draws from a thread-local `fastrand` stream. Gives no uniqueness or
/// security guarantee and never touches the secure entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathGenerator;

impl RidGenerator for MathGenerator {
    fn try_generate(&self, n: usize) -> Result<String, EntropyError> {
        Ok((0..n)
            .map(|_| ALPHABET[fastrand::usize(..ALPHABET.len())] as char)
            .collect())
    }
}
