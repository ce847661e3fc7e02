use crate::core::ConfigProvider;
use crate::utils::error::{Result, SignatureError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "add-signature.toml";

pub const DEFAULT_SIGNATURE_TEXT: &str = "\nCreated: ${DD-MM-YYYY} at ${hh-mm}";

/// Delay between a file appearing and the signature being written.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

pub const MAX_SETTLE_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureConfig {
    pub signature: SignatureSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureSection {
    pub enabled: bool,
    pub text: String,
    pub settle_delay_ms: u64,
}

impl Default for SignatureSection {
    fn default() -> Self {
        Self {
            enabled: true,
            text: DEFAULT_SIGNATURE_TEXT.to_string(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    signature: Option<SignatureSection>,
}

impl SignatureConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| SignatureError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        let signature = validate_required_field("signature", &raw.signature)?.clone();
        Ok(Self { signature })
    }

    /// Load `path` if it exists, otherwise fall back to the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SignatureError::ConfigParseError {
            path: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply command-line overrides on top of the file values.
    pub fn apply_overrides(&mut self, enabled: Option<bool>, text: Option<String>) {
        if let Some(enabled) = enabled {
            tracing::info!("🔧 Signature enabled overridden to: {}", enabled);
            self.signature.enabled = enabled;
        }
        if let Some(text) = text {
            self.signature.text = text;
        }
    }
}

impl Validate for SignatureConfig {
    fn validate(&self) -> Result<()> {
        if self.signature.enabled {
            validate_non_empty_string("signature.text", &self.signature.text)?;
        }
        validate_range(
            "signature.settle_delay_ms",
            self.signature.settle_delay_ms,
            0,
            MAX_SETTLE_DELAY_MS,
        )
    }
}

impl ConfigProvider for SignatureConfig {
    fn signature_enabled(&self) -> bool {
        self.signature.enabled
    }

    fn signature_text(&self) -> &str {
        &self.signature.text
    }

    fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.signature.settle_delay_ms)
    }
}
