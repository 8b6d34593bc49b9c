use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::{rngs::SmallRng, RngCore, SeedableRng};
use tracing::debug;

use crate::errors::EntropyError;
use crate::services::RidGenerator;
use crate::utils::alphabet;
use crate::utils::entropy::{uniform_i63, EntropySource, OsEntropy};

type Result<T> = std::result::Result<T, EntropyError>;

/// Two independent pseudorandom streams; `a` feeds even positions, `b` odd ones
struct DualStreams<R> {
    a: R,
    b: R,
}

/// High throughput generator over two interleaved pseudorandom streams.
///
/// Both streams are seeded from `E` and reseeded from it whenever the first
/// byte drawn from each stream in one call is zero (a 1 in 65536 chance).
/// Output is statistically close to uniform but carries no cryptographic
/// guarantee; use [`CryptoGenerator`](crate::services::CryptoGenerator) when
/// that matters.
///
/// All calls are serialized on a single lock held for the whole generation.
pub struct FastGenerator<R = SmallRng, E = OsEntropy> {
    streams: Mutex<DualStreams<R>>,
    entropy: E,
}

impl FastGenerator {
    /// Creates a generator seeded from the operating system
    pub fn new() -> Result<Self> {
        Self::with_entropy(OsEntropy)
    }
}

impl<R, E> FastGenerator<R, E>
where
    R: RngCore + SeedableRng,
    E: EntropySource,
{
    /// Creates a generator seeded (and later reseeded) from `entropy`
    pub fn with_entropy(entropy: E) -> Result<Self> {
        let seed_a = uniform_i63(&entropy)? as u64;
        let seed_b = uniform_i63(&entropy)? as u64;
        debug!("Seeded fast generator from entropy source");
        Ok(Self::from_seeds(seed_a, seed_b, entropy))
    }

    /// Creates a generator with fixed initial seeds. `entropy` is only used
    /// for reseeding.
    pub fn from_seeds(seed_a: u64, seed_b: u64, entropy: E) -> Self {
        Self {
            streams: Mutex::new(DualStreams {
                a: R::seed_from_u64(seed_a),
                b: R::seed_from_u64(seed_b),
            }),
            entropy,
        }
    }

    /// Reseeds both streams from the entropy source right away
    pub fn reseed(&self) -> Result<()> {
        let mut streams = self.lock();
        self.reseed_streams(&mut streams)
    }

    fn lock(&self) -> MutexGuard<'_, DualStreams<R>> {
        // the streams hold no invariant a panicking holder could break
        self.streams.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reseed_streams(&self, streams: &mut DualStreams<R>) -> Result<()> {
        let seed_a = uniform_i63(&self.entropy)? as u64;
        let seed_b = uniform_i63(&self.entropy)? as u64;
        streams.a = R::seed_from_u64(seed_a);
        streams.b = R::seed_from_u64(seed_b);
        debug!("Reseeded fast generator streams");
        Ok(())
    }
}

/// Opportunistic reseed trigger: both streams opened this call with a zero byte
fn needs_reseed(first_a: u8, first_b: u8) -> bool {
    first_a == 0 && first_b == 0
}

impl<R, E> RidGenerator for FastGenerator<R, E>
where
    R: RngCore + SeedableRng,
    E: EntropySource,
{
    fn try_generate(&self, n: usize) -> Result<String> {
        let mut streams = self.lock();

        let half = n / 2 + 1;
        let mut bytes_a = vec![0u8; half];
        let mut bytes_b = vec![0u8; half];
        streams.a.fill_bytes(&mut bytes_a);
        streams.b.fill_bytes(&mut bytes_b);

        let mut rid = String::with_capacity(n);
        for i in 0..n {
            let raw = if i % 2 == 0 {
                bytes_a[i / 2]
            } else {
                bytes_b[i / 2]
            };
            rid.push(alphabet::map_byte(raw, &mut streams.a) as char);
        }

        if needs_reseed(bytes_a[0], bytes_b[0]) {
            self.reseed_streams(&mut streams)?;
        }

        Ok(rid)
    }
}
