/*!
 * Error Handling for the ethseal crate
 *
 * Provides error types with error codes, user-friendly messages and
 * suggested remediation for every fallible operation in the crate.
 */

use std::collections::HashMap;
use thiserror::Error;

/// Error type for all cryptographic operations
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Key derivation failed: {operation} - {cause}")]
    KeyDerivationError {
        operation: String,
        cause: String,
        error_code: u32,
        context: HashMap<String, String>,
    },

    #[error("AES operation failed: {operation} - {cause}")]
    AesError {
        operation: String,
        cause: String,
        error_code: u32,
        context: HashMap<String, String>,
    },

    #[error("Random number generation failed: {cause}")]
    RandomGenerationError { cause: String, error_code: u32 },

    #[error("Invalid parameter: {parameter} - {expected} - got {actual}")]
    InvalidParameter {
        parameter: String,
        expected: String,
        actual: String,
        error_code: u32,
    },

    #[error("Configuration error: {setting} - {cause}")]
    ConfigError {
        setting: String,
        cause: String,
        error_code: u32,
    },

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Error code constants for different error categories
pub mod error_codes {
    // Key derivation errors: 1000-1999
    pub const INVALID_PRIVATE_KEY: u32 = 1001;
    pub const PUBLIC_KEY_ENCODING_FAILED: u32 = 1002;

    // AES errors: 3000-3999
    pub const AES_ENCRYPTION_FAILED: u32 = 3001;
    pub const AES_DECRYPTION_FAILED: u32 = 3002;
    pub const AES_INVALID_KEY_SIZE: u32 = 3003;
    pub const AES_INVALID_ENVELOPE: u32 = 3004;

    // Randomness errors: 5000-5999
    pub const INSUFFICIENT_ENTROPY: u32 = 5002;

    // Configuration errors: 6000-6999
    pub const CONFIG_INVALID: u32 = 6001;
    pub const CONFIG_PARSE_FAILED: u32 = 6002;

    // Generic errors: 9000-9999
    pub const ENCODING_FAILED: u32 = 9001;
    pub const IO_ERROR: u32 = 9002;
    pub const INVALID_PARAMETER: u32 = 9999;
}

impl CryptoError {
    /// Get the numeric error code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            CryptoError::KeyDerivationError { error_code, .. } => *error_code,
            CryptoError::AesError { error_code, .. } => *error_code,
            CryptoError::RandomGenerationError { error_code, .. } => *error_code,
            CryptoError::InvalidParameter { error_code, .. } => *error_code,
            CryptoError::ConfigError { error_code, .. } => *error_code,
            CryptoError::EncodingError(_) => error_codes::ENCODING_FAILED,
            CryptoError::IoError(_) => error_codes::IO_ERROR,
        }
    }

    /// Get a user-friendly error message
    pub fn user_friendly_message(&self) -> String {
        match self {
            CryptoError::KeyDerivationError { operation, .. } => {
                format!(
                    "Key derivation '{}' failed. The private key is not usable on secp256k1.",
                    operation
                )
            }
            CryptoError::AesError { operation, .. } => {
                format!(
                    "Encryption operation '{}' failed. The data or the key may be wrong.",
                    operation
                )
            }
            CryptoError::RandomGenerationError { .. } => {
                "Random number generation failed. A secure symmetric key could not be created."
                    .to_string()
            }
            CryptoError::InvalidParameter {
                parameter,
                expected,
                ..
            } => {
                format!(
                    "Invalid parameter '{}'. Expected '{}' format.",
                    parameter, expected
                )
            }
            CryptoError::ConfigError { setting, .. } => {
                format!("Configuration setting '{}' is invalid.", setting)
            }
            CryptoError::EncodingError(_) => {
                "Data encoding failed. The input may be corrupted.".to_string()
            }
            CryptoError::IoError(_) => {
                "Input/output operation failed. Check file permissions and paths.".to_string()
            }
        }
    }

    /// Get technical details for debugging
    pub fn technical_details(&self) -> HashMap<String, String> {
        let mut details = HashMap::new();

        details.insert("error_code".to_string(), self.error_code().to_string());
        details.insert("error_type".to_string(), self.error_type().to_string());
        details.insert("timestamp".to_string(), chrono::Utc::now().to_rfc3339());

        match self {
            CryptoError::KeyDerivationError {
                operation,
                cause,
                context,
                ..
            }
            | CryptoError::AesError {
                operation,
                cause,
                context,
                ..
            } => {
                details.insert("operation".to_string(), operation.clone());
                details.insert("cause".to_string(), cause.clone());
                details.extend(context.clone());
            }
            CryptoError::InvalidParameter {
                parameter,
                expected,
                actual,
                ..
            } => {
                details.insert("parameter".to_string(), parameter.clone());
                details.insert("expected".to_string(), expected.clone());
                details.insert("actual".to_string(), actual.clone());
            }
            CryptoError::ConfigError { setting, cause, .. } => {
                details.insert("setting".to_string(), setting.clone());
                details.insert("cause".to_string(), cause.clone());
            }
            _ => {
                details.insert("details".to_string(), format!("{:?}", self));
            }
        }

        details
    }

    /// Get suggested remediation steps
    pub fn suggested_remediation(&self) -> Option<String> {
        match self {
            CryptoError::KeyDerivationError { error_code, .. } => match *error_code {
                error_codes::INVALID_PRIVATE_KEY => Some(
                    "Use a non-zero 32-byte private key smaller than the secp256k1 group order."
                        .to_string(),
                ),
                _ => Some("Check the private key encoding.".to_string()),
            },
            CryptoError::AesError { error_code, .. } => match *error_code {
                error_codes::AES_DECRYPTION_FAILED => Some(
                    "Verify the passphrase is the exact symmetric key used for encryption."
                        .to_string(),
                ),
                error_codes::AES_INVALID_ENVELOPE => Some(
                    "Pass the complete base64 string starting with 'U2FsdGVkX1'.".to_string(),
                ),
                _ => None,
            },
            CryptoError::RandomGenerationError { .. } => Some(
                "Check system entropy sources. The OS random number generator must be available."
                    .to_string(),
            ),
            CryptoError::ConfigError { .. } => {
                Some("Review the configuration file against the documented fields.".to_string())
            }
            _ => None,
        }
    }

    /// Get the error category/type as a string
    pub fn error_type(&self) -> &'static str {
        match self {
            CryptoError::KeyDerivationError { .. } => "KeyDerivationError",
            CryptoError::AesError { .. } => "AesError",
            CryptoError::RandomGenerationError { .. } => "RandomGenerationError",
            CryptoError::InvalidParameter { .. } => "InvalidParameter",
            CryptoError::ConfigError { .. } => "ConfigError",
            CryptoError::EncodingError(_) => "EncodingError",
            CryptoError::IoError(_) => "IoError",
        }
    }
}

/// Convenience constructors for common error types
impl CryptoError {
    pub fn key_derivation_error(operation: &str, cause: &str, error_code: u32) -> Self {
        CryptoError::KeyDerivationError {
            operation: operation.to_string(),
            cause: cause.to_string(),
            error_code,
            context: HashMap::new(),
        }
    }

    pub fn aes_error(operation: &str, cause: &str, error_code: u32) -> Self {
        CryptoError::AesError {
            operation: operation.to_string(),
            cause: cause.to_string(),
            error_code,
            context: HashMap::new(),
        }
    }

    pub fn invalid_parameter(parameter: &str, expected: &str, actual: &str) -> Self {
        CryptoError::InvalidParameter {
            parameter: parameter.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
            error_code: error_codes::INVALID_PARAMETER,
        }
    }

    pub fn config_error(setting: &str, cause: &str, error_code: u32) -> Self {
        CryptoError::ConfigError {
            setting: setting.to_string(),
            cause: cause.to_string(),
            error_code,
        }
    }

    pub fn io_error(cause: &str) -> Self {
        CryptoError::IoError(cause.to_string())
    }
}

// From implementations for automatic error conversion
impl From<std::io::Error> for CryptoError {
    fn from(err: std::io::Error) -> Self {
        CryptoError::io_error(&format!("IO operation failed: {}", err))
    }
}

impl From<serde_json::Error> for CryptoError {
    fn from(err: serde_json::Error) -> Self {
        CryptoError::config_error("json", &err.to_string(), error_codes::CONFIG_PARSE_FAILED)
    }
}

impl From<hex::FromHexError> for CryptoError {
    fn from(err: hex::FromHexError) -> Self {
        CryptoError::EncodingError(format!("invalid hex: {}", err))
    }
}

impl From<base64::DecodeError> for CryptoError {
    fn from(err: base64::DecodeError) -> Self {
        CryptoError::EncodingError(format!("invalid base64: {}", err))
    }
}

/// Result type alias for cryptographic operations
pub type CryptoResult<T> = Result<T, CryptoError>;
