/*!
 * ethseal
 *
 * A small demonstration of hybrid encryption building blocks:
 *
 * - secp256k1 key-pairs derived from Ethereum-style hex private keys
 * - random 256-bit symmetric keys rendered as hex passphrases
 * - password-based AES-256-CBC in the OpenSSL `Salted__` envelope, readable
 *   by `openssl enc` and CryptoJS
 *
 * The [`demo`] module ties them together in the same order the `ethseal`
 * binary runs them.
 */

/// secp256k1 wallets: public keys and addresses
pub mod wallet;

/// Random symmetric keys
pub mod key_management;

/// Password-based AES in the OpenSSL envelope
pub mod aes;

/// The demo encryption runner
pub mod demo;

/// Runner configuration
pub mod config;

/// Common error types
pub mod error;

/// Zeroizing containers for secrets
pub mod secure_memory;

/// Utilities for cryptographic operations
pub mod utils;

pub use config::DemoConfig;
pub use demo::{DemoReport, DemoRunner, RecipientKeys};
pub use error::{CryptoError, CryptoResult};
pub use key_management::SymmetricKey;
pub use wallet::Wallet;

/// Commonly used items in one import
pub mod prelude {
    pub use crate::aes::decrypt;
    pub use crate::aes::decrypt_to_string;
    pub use crate::aes::encrypt;
    pub use crate::aes::SaltedEnvelope;
    pub use crate::demo::run_default;
    pub use crate::CryptoError;
    pub use crate::CryptoResult;
    pub use crate::DemoConfig;
    pub use crate::DemoReport;
    pub use crate::DemoRunner;
    pub use crate::RecipientKeys;
    pub use crate::SymmetricKey;
    pub use crate::Wallet;
}
