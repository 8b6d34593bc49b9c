// src/models/rid.rs - Identifier value types
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::utils::hash;
use crate::validations::{validate_rid, validate_signed_rid};

/// Length of a 16 character identifier
pub const RID16_LEN: usize = 16;

/// Length of a 20 character identifier
pub const RID20_LEN: usize = 20;

/// Length of a 20 character identifier plus its hex signature
pub const SIGNED_RID20_LEN: usize = RID20_LEN + hash::DIGEST_HEX_LEN;

/// Entropy tier of an identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// 16 characters, about 95.3 bits
    Rid16,
    /// 20 characters, about 119.1 bits
    #[default]
    Rid20,
}

impl Tier {
    // a tier is never empty
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        match self {
            Tier::Rid16 => RID16_LEN,
            Tier::Rid20 => RID20_LEN,
        }
    }

    /// Bits of entropy carried by an identifier of this tier
    pub fn entropy_bits(self) -> f64 {
        self.len() as f64 * 62f64.log2()
    }

    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            RID16_LEN => Some(Tier::Rid16),
            RID20_LEN => Some(Tier::Rid20),
            _ => None,
        }
    }
}

/// A validated identifier of one of the two tiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rid(String);

impl Rid {
    pub fn tier(&self) -> Tier {
        // construction only admits tier lengths
        if self.0.len() == RID16_LEN {
            Tier::Rid16
        } else {
            Tier::Rid20
        }
    }

    /// Wraps generator output, which is valid by construction
    pub(crate) fn from_generated(rid: String) -> Self {
        debug_assert!(Tier::from_len(rid.len()).is_some());
        Rid(rid)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Rid {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let tier = Tier::from_len(value.len()).unwrap_or_default();
        validate_rid(&value, tier.len())?;
        Ok(Rid(value))
    }
}

impl FromStr for Rid {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rid::try_from(s.to_string())
    }
}

impl From<Rid> for String {
    fn from(rid: Rid) -> Self {
        rid.0
    }
}

impl AsRef<str> for Rid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 20 character identifier together with its truncated HMAC signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRid {
    rid: Rid,
    digest: String,
}

impl SignedRid {
    /// Signs a 20 character identifier with `secret`
    pub fn sign(rid: Rid, secret: &str) -> Result<Self, ValidationError> {
        validate_rid(rid.as_str(), RID20_LEN)?;
        let digest = hash::sign(rid.as_str(), secret);
        Ok(Self { rid, digest })
    }

    /// Parses and verifies a 36 character signed identifier
    pub fn parse(signed: &str, secret: &str) -> Result<Self, ValidationError> {
        validate_signed_rid(signed, secret)?;
        let (rid, digest) = signed.split_at(RID20_LEN);
        Ok(Self {
            rid: Rid(rid.to_string()),
            digest: digest.to_string(),
        })
    }

    pub fn rid(&self) -> &Rid {
        &self.rid
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl fmt::Display for SignedRid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rid, self.digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_lengths_and_entropy() {
        assert_eq!(Tier::Rid16.len(), 16);
        assert_eq!(Tier::Rid20.len(), 20);
        assert!((Tier::Rid16.entropy_bits() - 95.3).abs() < 0.1);
        assert!((Tier::Rid20.entropy_bits() - 119.1).abs() < 0.1);
        assert_eq!(Tier::from_len(16), Some(Tier::Rid16));
        assert_eq!(Tier::from_len(36), None);
    }

    #[test]
    fn test_tier_len_is_never_zero() {
        for tier in [Tier::Rid16, Tier::Rid20] {
            assert!(tier.len() > 0);
            assert_eq!(Tier::from_len(tier.len()), Some(tier));
        }
        assert_eq!(Tier::from_len(0), None);
    }

    #[test]
    fn test_tier_serde_names() {
        let tier: Tier = serde_json::from_str("\"rid16\"").unwrap();
        assert_eq!(tier, Tier::Rid16);
        assert_eq!(serde_json::to_string(&Tier::Rid20).unwrap(), "\"rid20\"");
    }

    #[test]
    fn test_rid_parsing() {
        let rid: Rid = "ABCDEFGHijklmn01".parse().unwrap();
        assert_eq!(rid.tier(), Tier::Rid16);
        assert_eq!(rid.to_string(), "ABCDEFGHijklmn01");

        let rid: Rid = "ABCDEFGHijklmn012345".parse().unwrap();
        assert_eq!(rid.tier(), Tier::Rid20);

        assert!("ABCDEFGHijklmn0".parse::<Rid>().is_err());
        assert!("ABCDEFGHijklmn0!".parse::<Rid>().is_err());
        assert!("".parse::<Rid>().is_err());
    }

    #[test]
    fn test_rid_serde_validates() {
        let rid: Rid = serde_json::from_str("\"ABCDEFGHijklmn01\"").unwrap();
        assert_eq!(rid.as_str(), "ABCDEFGHijklmn01");
        assert_eq!(serde_json::to_string(&rid).unwrap(), "\"ABCDEFGHijklmn01\"");
        assert!(serde_json::from_str::<Rid>("\"short\"").is_err());
    }

    #[test]
    fn test_signed_rid_round_trip() {
        let rid: Rid = "ABCDEFGHijklmn012345".parse().unwrap();
        let signed = SignedRid::sign(rid.clone(), "secret").unwrap();
        let text = signed.to_string();
        assert_eq!(text.len(), SIGNED_RID20_LEN);

        let parsed = SignedRid::parse(&text, "secret").unwrap();
        assert_eq!(parsed, signed);
        assert_eq!(parsed.rid(), &rid);
        assert!(SignedRid::parse(&text, "other").is_err());
    }

    #[test]
    fn test_signed_rid_requires_tier_20() {
        let rid: Rid = "ABCDEFGHijklmn01".parse().unwrap();
        assert!(SignedRid::sign(rid, "secret").is_err());
    }
}
