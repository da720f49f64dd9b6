//! Runner configuration
//!
//! The binary always runs with [`DemoConfig::default`]. Library callers can
//! supply their own keys and message, either directly or from a JSON file:
//!
//! ```json
//! {
//!   "private_keys": ["0x0123...0123", "0x9876...9876"],
//!   "message": "Hello, world! This is Shubh"
//! }
//! ```
//!
//! Missing fields fall back to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{error_codes, CryptoError, CryptoResult};

/// First built-in recipient private key
pub const DEFAULT_PRIVATE_KEY_1: &str =
    "0x0123456789012345678901234567890123456789012345678901234567890123";

/// Second built-in recipient private key
pub const DEFAULT_PRIVATE_KEY_2: &str =
    "0x9876543210987654321098765432109876543210987654321098765432109876";

/// Built-in plaintext
pub const DEFAULT_MESSAGE: &str = "Hello, world! This is Shubh";

/// Inputs of a demo run
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Hex private keys, one per recipient
    pub private_keys: Vec<String>,
    /// Plaintext to encrypt
    pub message: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            private_keys: vec![
                DEFAULT_PRIVATE_KEY_1.to_string(),
                DEFAULT_PRIVATE_KEY_2.to_string(),
            ],
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Debug for DemoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoConfig")
            .field("private_keys", &format!("[{} REDACTED]", self.private_keys.len()))
            .field("message_len", &self.message.len())
            .finish()
    }
}

impl DemoConfig {
    pub fn new<I, S>(private_keys: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            private_keys: private_keys.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> CryptoResult<Self> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> CryptoResult<Self> {
        let path = path.as_ref();
        log::debug!("loading demo configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Check the shape of the configuration
    ///
    /// Key validity on the curve is checked later, when wallets are derived.
    pub fn validate(&self) -> CryptoResult<()> {
        if self.private_keys.is_empty() {
            return Err(CryptoError::config_error(
                "private_keys",
                "at least one private key is required",
                error_codes::CONFIG_INVALID,
            ));
        }
        if let Some(index) = self.private_keys.iter().position(|k| k.trim().is_empty()) {
            return Err(CryptoError::config_error(
                "private_keys",
                &format!("entry {} is empty", index),
                error_codes::CONFIG_INVALID,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.private_keys.len(), 2);
        assert_eq!(config.private_keys[0], DEFAULT_PRIVATE_KEY_1);
        assert_eq!(config.private_keys[1], DEFAULT_PRIVATE_KEY_2);
        assert_eq!(config.message, DEFAULT_MESSAGE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = DemoConfig::from_json(r#"{ "message": "custom" }"#).unwrap();
        assert_eq!(config.message, "custom");
        assert_eq!(config.private_keys, DemoConfig::default().private_keys);
    }

    #[test]
    fn test_from_json_rejects_empty_keys() {
        let err = DemoConfig::from_json(r#"{ "private_keys": [] }"#).unwrap_err();
        assert_eq!(err.error_code(), error_codes::CONFIG_INVALID);

        let err = DemoConfig::from_json(r#"{ "private_keys": ["  "] }"#).unwrap_err();
        assert_eq!(err.error_type(), "ConfigError");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = DemoConfig::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), error_codes::CONFIG_PARSE_FAILED);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let config = DemoConfig::new([DEFAULT_PRIVATE_KEY_2], "from disk");
        write!(file, "{}", serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DemoConfig::from_file(dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.error_type(), "IoError");
    }

    #[test]
    fn test_debug_hides_keys() {
        let rendered = format!("{:?}", DemoConfig::default());
        assert!(!rendered.contains("0123456789"));
        assert!(rendered.contains("2 REDACTED"));
    }
}
