use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::trace;

type HmacSha256 = Hmac<Sha256>;

/// Number of HMAC bytes kept in a signature
pub const DIGEST_BYTES: usize = 8;

/// Length of a hex encoded signature
pub const DIGEST_HEX_LEN: usize = DIGEST_BYTES * 2;

fn keyed(message: &str, secret: &str) -> HmacSha256 {
    // HMAC takes keys of any length
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("Make HMAC-SHA256");
    mac.update(message.as_bytes());
    mac
}

/// Signs `message` with `secret`: the first 8 bytes of HMAC-SHA256, hex encoded
pub fn sign(message: &str, secret: &str) -> String {
    let digest = keyed(message, secret).finalize().into_bytes();
    trace!("Signed message of {} bytes", message.len());
    hex::encode(&digest[..DIGEST_BYTES])
}

/// Checks `digest_hex` against the signature of `message` in constant time.
///
/// Only the exact lowercase form produced by [`sign`] is accepted.
pub fn verify(message: &str, digest_hex: &str, secret: &str) -> bool {
    if digest_hex.len() != DIGEST_HEX_LEN
        || !digest_hex
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    {
        return false;
    }

    let Ok(tag) = hex::decode(digest_hex) else {
        return false;
    };

    keyed(message, secret).verify_truncated_left(&tag).is_ok()
}
