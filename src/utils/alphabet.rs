use rand::Rng;

/// The 62 symbols every identifier is drawn from, in index order
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Largest multiple of 62 that fits in a byte
pub const MAPPABLE_BYTES: usize = 248;

/// The alphabet repeated four times, so any byte below 248 indexes it directly
pub static EXTENDED_ALPHABET: [u8; MAPPABLE_BYTES] = extend_alphabet();

const fn extend_alphabet() -> [u8; MAPPABLE_BYTES] {
    let mut table = [0u8; MAPPABLE_BYTES];
    let mut i = 0;
    while i < MAPPABLE_BYTES {
        table[i] = ALPHABET[i % ALPHABET.len()];
        i += 1;
    }
    table
}

/// Maps a raw random byte onto the alphabet without modulo bias.
///
/// Bytes in `[248, 256)` cannot be mapped evenly, so they are thrown away and
/// a fresh symbol index is drawn from `fallback` instead.
pub fn map_byte<R: Rng + ?Sized>(raw: u8, fallback: &mut R) -> u8 {
    match EXTENDED_ALPHABET.get(raw as usize) {
        Some(&symbol) => symbol,
        None => ALPHABET[fallback.random_range(0..ALPHABET.len())],
    }
}

/// Returns true if `c` is one of the 62 alphabet symbols
pub fn is_symbol(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}
