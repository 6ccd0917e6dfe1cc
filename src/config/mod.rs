/// Helper configuration
pub mod constants;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EncodingError, EncodingResult};

/// Letter case of hex digests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    #[default]
    Upper,
    Lower,
}

/// How a space is written by the URL encoders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceEncoding {
    /// `%20`
    #[default]
    Percent,
    /// `+`, as in `application/x-www-form-urlencoded`
    Plus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    pub hex_case: HexCase,
    pub space_encoding: SpaceEncoding,
    pub decode_plus_as_space: bool,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            hex_case: HexCase::Upper,
            space_encoding: SpaceEncoding::Percent,
            decode_plus_as_space: true,
        }
    }
}

impl HelperConfig {
    pub fn with_hex_case(mut self, hex_case: HexCase) -> Self {
        self.hex_case = hex_case;
        self
    }

    pub fn with_space_encoding(mut self, space_encoding: SpaceEncoding) -> Self {
        self.space_encoding = space_encoding;
        self
    }

    pub fn with_decode_plus_as_space(mut self, enabled: bool) -> Self {
        self.decode_plus_as_space = enabled;
        self
    }

    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str) -> EncodingResult<Self> {
        if text.trim().is_empty() {
            return Err(EncodingError::config("config is empty"));
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> EncodingResult<Self> {
        debug!("Loading helper config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load `path` if given, else `constants::CONFIG_FILE` when it exists,
    /// else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> EncodingResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(constants::CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
