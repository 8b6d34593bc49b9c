use crate::errors::EntropyError;
use crate::utils::entropy::{uniform_i63, EntropySource};

/// Exclusive upper bound of a numeric ID
pub const NID_BOUND: i64 = 1_000_000_000;

/// Digits a numeric ID is padded to before dashing
const NID_MIN_DIGITS: usize = 9;

/// Generates a numeric ID in `[0, 1_000_000_000)` as a decimal string
pub fn generate_nid<E: EntropySource + ?Sized>(source: &E) -> Result<String, EntropyError> {
    let value = uniform_i63(source)? % NID_BOUND;
    Ok(value.to_string())
}

/// Formats a numeric ID as `XXX-XXX-XXXX` for display.
///
/// Inputs shorter than nine characters are left-padded with zeros first, so
/// small IDs like `42` come out as `000-000-042`. Longer inputs keep every
/// trailing character in the last group.
pub fn dash_nid(nid: &str) -> String {
    let chars: Vec<char> = nid.chars().collect();
    let padding = NID_MIN_DIGITS.saturating_sub(chars.len());

    let digits: String = std::iter::repeat('0')
        .take(padding)
        .chain(chars)
        .collect();

    // all padded inputs are at least nine chars, split on char boundaries
    let mut groups = digits.char_indices().map(|(i, _)| i);
    let second = groups.nth(3).unwrap_or(digits.len());
    let third = groups.nth(2).unwrap_or(digits.len());

    format!(
        "{}-{}-{}",
        &digits[..second],
        &digits[second..third],
        &digits[third..]
    )
}
