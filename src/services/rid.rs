// src/services/rid.rs - Configured identifier service
use std::sync::Arc;

use tracing::debug;

use crate::config::{Config, GeneratorKind};
use crate::errors::RidError;
use crate::models::{Rid, SignedRid, Tier, RID20_LEN};
use crate::services::{CryptoGenerator, FastGenerator, MathGenerator, RidGenerator};
use crate::validations::{validate_rid, validate_signed_rid};

type Result<T> = std::result::Result<T, RidError>;

pub type SharedGenerator = Arc<dyn RidGenerator + Send + Sync>;

/// Generates, signs and validates identifiers of one tier
pub struct RidService {
    generator: SharedGenerator,
    tier: Tier,
    secret: Option<String>,
}

impl RidService {
    pub fn new(generator: SharedGenerator) -> Self {
        Self {
            generator,
            tier: Tier::default(),
            secret: None,
        }
    }

    pub fn with_tier(generator: SharedGenerator, tier: Tier) -> Self {
        Self {
            generator,
            tier,
            secret: None,
        }
    }

    /// Enables signing with `secret`
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Builds a service from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let generator: SharedGenerator = match config.generator.kind {
            GeneratorKind::Fast => Arc::new(FastGenerator::new()?),
            GeneratorKind::Crypto => Arc::new(CryptoGenerator::new()),
            GeneratorKind::Math => Arc::new(MathGenerator),
        };
        debug!(
            "Built {:?} identifier service for {:?}",
            config.generator.kind, config.generator.tier
        );

        Ok(Self {
            generator,
            tier: config.generator.tier,
            secret: config.signing.secret.clone(),
        })
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Generates a new identifier of the configured tier
    pub fn generate(&self) -> Result<Rid> {
        let rid = self.generator.try_generate(self.tier.len())?;
        Ok(Rid::from_generated(rid))
    }

    /// Generates a new 20 character identifier and signs it
    pub fn generate_signed(&self) -> Result<SignedRid> {
        let secret = self
            .secret
            .as_deref()
            .ok_or_else(|| RidError::Signing("no signing secret configured".to_string()))?;

        let rid = Rid::from_generated(self.generator.try_generate(RID20_LEN)?);
        SignedRid::sign(rid, secret).map_err(|e| RidError::Signing(e.to_string()))
    }

    /// Checks an identifier against the configured tier
    pub fn validate(&self, rid: &str) -> bool {
        validate_rid(rid, self.tier.len()).is_ok()
    }

    /// Checks a signed identifier; always false when signing is disabled
    pub fn validate_signed(&self, signed: &str) -> bool {
        match &self.secret {
            Some(secret) => validate_signed_rid(signed, secret).is_ok(),
            None => false,
        }
    }
}
