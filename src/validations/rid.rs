use validator::ValidationError;

use crate::models::{RID20_LEN, SIGNED_RID20_LEN};
use crate::utils::{alphabet, hash};

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Validates that an identifier:
/// - Is exactly `len` bytes long
/// - Only contains `[A-Za-z0-9]`
pub fn validate_rid(rid: &str, len: usize) -> Result<(), ValidationError> {
    if rid.len() != len {
        return Err(invalid(
            "rid_length",
            format!("Identifier must be {} characters, got {}", len, rid.len()),
        ));
    }

    if !rid.bytes().all(alphabet::is_symbol) {
        return Err(invalid(
            "rid_charset",
            "Identifier can only contain ASCII letters and digits".to_string(),
        ));
    }

    Ok(())
}

/// Validates a signed identifier: a 20 character identifier followed by the
/// 16 hex character signature of that identifier under `secret`
pub fn validate_signed_rid(signed: &str, secret: &str) -> Result<(), ValidationError> {
    if signed.len() != SIGNED_RID20_LEN {
        return Err(invalid(
            "signed_rid_length",
            format!(
                "Signed identifier must be {} characters, got {}",
                SIGNED_RID20_LEN,
                signed.len()
            ),
        ));
    }

    // non-ASCII input may not split cleanly at 20 bytes
    let (Some(rid), Some(digest)) = (signed.get(..RID20_LEN), signed.get(RID20_LEN..)) else {
        return Err(invalid(
            "rid_charset",
            "Identifier can only contain ASCII letters and digits".to_string(),
        ));
    };

    validate_rid(rid, RID20_LEN)?;

    if !hash::verify(rid, digest, secret) {
        return Err(invalid(
            "signature_mismatch",
            "Signature does not match identifier".to_string(),
        ));
    }

    Ok(())
}
