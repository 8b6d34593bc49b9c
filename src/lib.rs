//! Short, URL-safe random identifiers over a 62 symbol alphabet.
//!
//! Two entropy tiers are offered: 16 characters (about 95.3 bits) and 20
//! characters (about 119.1 bits). Identifiers come from one of two paths:
//!
//! - the fast path ([`new_rid16`], [`new_rid20`]): a process-wide pair of
//!   interleaved pseudorandom streams, reseeded from the OS from time to time
//! - the crypto path ([`new_rid16_crypto`], [`new_rid20_crypto`]): every
//!   symbol drawn from the OS secure random source
//!
//! A 20 character identifier can carry a truncated HMAC-SHA256 signature
//! ([`new_rid20_signed`], [`valid_rid20_signed`]).
//!
//! Uniqueness is probabilistic only.
//!
//! The infallible functions terminate the process if the OS random source
//! fails. Use the `try_` variants to receive an [`EntropyError`] instead;
//! callers should still treat it as unrecoverable.

use once_cell::sync::OnceCell;

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;
pub mod validations;

pub use crate::config::{Config, GeneratorConfig, GeneratorKind, SigningConfig};
pub use errors::{ConfigError, EntropyError, RidError};
pub use models::{Rid, SignedRid, Tier, RID16_LEN, RID20_LEN, SIGNED_RID20_LEN};
pub use services::{CryptoGenerator, FastGenerator, MathGenerator, RidGenerator, RidService};
pub use utils::alphabet::ALPHABET;
pub use utils::hash::sign;
pub use utils::id_generator::dash_nid;

use utils::entropy::{unwrap_or_exit, OsEntropy};

static FAST: OnceCell<FastGenerator> = OnceCell::new();
static CRYPTO: CryptoGenerator = CryptoGenerator::new();

/// The process-wide fast generator, seeded on first use
fn shared_fast() -> Result<&'static FastGenerator, EntropyError> {
    FAST.get_or_try_init(FastGenerator::new)
}

/// 16 character identifier from the fast path
pub fn new_rid16() -> String {
    new_ridn(RID16_LEN)
}

/// 20 character identifier from the fast path
pub fn new_rid20() -> String {
    new_ridn(RID20_LEN)
}

/// `n` character identifier from the fast path
pub fn new_ridn(n: usize) -> String {
    unwrap_or_exit(try_new_ridn(n))
}

pub fn try_new_ridn(n: usize) -> Result<String, EntropyError> {
    shared_fast()?.try_generate(n)
}

/// 20 character identifier followed by its 16 hex character signature
pub fn new_rid20_signed(secret: &str) -> String {
    unwrap_or_exit(try_new_rid20_signed(secret))
}

pub fn try_new_rid20_signed(secret: &str) -> Result<String, EntropyError> {
    let rid = try_new_ridn(RID20_LEN)?;
    let digest = sign(&rid, secret);
    Ok(rid + &digest)
}

/// 16 character identifier from the crypto path
pub fn new_rid16_crypto() -> String {
    new_ridn_crypto(RID16_LEN)
}

/// 20 character identifier from the crypto path
pub fn new_rid20_crypto() -> String {
    new_ridn_crypto(RID20_LEN)
}

/// `n` character identifier from the crypto path
pub fn new_ridn_crypto(n: usize) -> String {
    CRYPTO.generate(n)
}

pub fn try_new_ridn_crypto(n: usize) -> Result<String, EntropyError> {
    CRYPTO.try_generate(n)
}

/// Uniform non-negative 63-bit integer from the OS secure source
pub fn new_int63_crypto() -> i64 {
    unwrap_or_exit(try_new_int63_crypto())
}

pub fn try_new_int63_crypto() -> Result<i64, EntropyError> {
    CRYPTO.try_int63()
}

/// 16 character identifier from a non-cryptographic source, for tests and
/// benchmarks only
pub fn new_rid16_math() -> String {
    new_ridn_math(RID16_LEN)
}

/// 20 character identifier from a non-cryptographic source, for tests and
/// benchmarks only
pub fn new_rid20_math() -> String {
    new_ridn_math(RID20_LEN)
}

pub fn new_ridn_math(n: usize) -> String {
    MathGenerator.generate(n)
}

/// Numeric ID in `[0, 1_000_000_000)` as a decimal string
pub fn new_nid() -> String {
    unwrap_or_exit(try_new_nid())
}

pub fn try_new_nid() -> Result<String, EntropyError> {
    utils::id_generator::generate_nid(&OsEntropy)
}

pub fn valid_rid16(rid: &str) -> bool {
    validations::validate_rid(rid, RID16_LEN).is_ok()
}

pub fn valid_rid20(rid: &str) -> bool {
    validations::validate_rid(rid, RID20_LEN).is_ok()
}

/// True iff `signed` is a 20 character identifier followed by its signature
/// under `secret`
pub fn valid_rid20_signed(signed: &str, secret: &str) -> bool {
    validations::validate_signed_rid(signed, secret).is_ok()
}
