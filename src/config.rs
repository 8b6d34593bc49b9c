use std::{fmt, path::Path, str::FromStr};

use config::{File, FileFormat};
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::models::Tier;

// Result type for configuration functions
type ConfigResult<T> = Result<T, ConfigError>;

// Which generation path a service draws identifiers from
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Dual-stream pseudorandom path, periodically reseeded
    #[default]
    Fast,
    /// Every symbol drawn from the OS secure source
    Crypto,
    /// Non-cryptographic, for tests and benchmarks only
    Math,
}

impl FromStr for GeneratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(GeneratorKind::Fast),
            "crypto" | "secure" => Ok(GeneratorKind::Crypto),
            "math" | "test" => Ok(GeneratorKind::Math),
            _ => Err(format!(
                "Invalid generator kind: {}. Must be one of: fast, crypto, math",
                s
            )),
        }
    }
}

// Generator-specific configuration
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    pub kind: GeneratorKind,
    pub tier: Tier,
}

// Signing configuration, no secret means signing is disabled
#[derive(Deserialize, Clone, Default)]
#[serde(default)]
pub struct SigningConfig {
    pub secret: Option<String>,
}

impl fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub signing: SigningConfig,
}

impl Config {
    /// Loads configuration from a file; the format follows its extension
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let settings = config::Config::builder()
            .add_source(File::from(path))
            .build()?;

        Self::finish(settings)
    }

    /// Parses configuration from a TOML document
    pub fn from_toml(toml: &str) -> ConfigResult<Self> {
        let settings = config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::finish(settings)
    }

    fn finish(settings: config::Config) -> ConfigResult<Self> {
        let mut config: Config = settings.try_deserialize()?;
        config.normalize();

        info!("Configuration loaded successfully");
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }

    // an empty secret disables signing, same as leaving it out
    fn normalize(&mut self) {
        if matches!(self.signing.secret.as_deref(), Some("")) {
            debug!("Empty signing secret, signing disabled");
            self.signing.secret = None;
        }
    }
}
