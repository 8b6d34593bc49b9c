use std::process;

use rand::{rngs::OsRng, TryRngCore};
use tracing::error;

use crate::errors::EntropyError;

type Result<T> = std::result::Result<T, EntropyError>;

/// Exit status used when the secure random source is unusable
pub const ENTROPY_FAILURE_EXIT_CODE: i32 = 70;

#[cfg_attr(test, mockall::automock)]
pub trait EntropySource: Send + Sync {
    /// Fills `dest` with bytes from a cryptographically secure source
    ///
    /// ### Arguments
    /// * `dest` - The buffer to fill completely
    ///
    /// ### Errors
    /// * `EntropyError::Os` - If the operating system source fails
    /// * `EntropyError::Source` - If a custom source fails
    fn try_fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// The operating system's secure random source
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn try_fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Draws a uniform value in `[0, bound)`.
///
/// Reads just enough big-endian bytes to cover `bound - 1`, masks the spare
/// high bits off the first byte and redraws while the value is out of range.
/// No modulo is taken, so the result carries no bias.
pub fn uniform_below<E: EntropySource + ?Sized>(source: &E, bound: u64) -> Result<u64> {
    if bound <= 1 {
        return Ok(0);
    }

    let max = bound - 1;
    let bits = u64::BITS - max.leading_zeros();
    let len = bits.div_ceil(8) as usize;
    let top_bits = bits - 8 * (len as u32 - 1);
    let top_mask = if top_bits == 8 { 0xFF } else { (1u8 << top_bits) - 1 };

    let mut buf = [0u8; 8];
    loop {
        let bytes = &mut buf[8 - len..];
        source.try_fill(bytes)?;
        bytes[0] &= top_mask;

        let value = u64::from_be_bytes(buf);
        if value < bound {
            return Ok(value);
        }
    }
}

/// Uniform non-negative 63-bit integer
pub fn uniform_i63<E: EntropySource + ?Sized>(source: &E) -> Result<i64> {
    // i64::MAX is below 2^63, so the cast can't wrap
    uniform_below(source, i64::MAX as u64).map(|v| v as i64)
}

/// Uniform alphabet index in `[0, 62)`
pub fn uniform_mod62<E: EntropySource + ?Sized>(source: &E) -> Result<u8> {
    uniform_below(source, 62).map(|v| v as u8)
}

/// Unwraps an entropy result, or logs the failure and terminates the process.
/// No partial identifier ever reaches the caller.
pub fn unwrap_or_exit<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!("Critical entropy failure, terminating: {}", err);
            process::exit(ENTROPY_FAILURE_EXIT_CODE);
        }
    }
}
