use std::fmt;

use crate::error::CryptoResult;
use crate::secure_memory::{SecureBuffer, SecureBytes};
use crate::utils;

/// Size of a symmetric key in bits
pub const SYMMETRIC_KEY_BITS: usize = 256;

/// Size of a symmetric key in bytes
pub const SYMMETRIC_KEY_LEN: usize = SYMMETRIC_KEY_BITS / 8;

/// A random 256-bit symmetric key
///
/// The key is used as a *passphrase*: the cipher is keyed by the 64-character
/// lowercase hex rendering of the bytes, not by the bytes themselves. This is
/// what makes ciphertexts interchangeable with `openssl enc -pass pass:<hex>`
/// and CryptoJS.
///
/// # Examples
///
/// ```
/// use ethseal::key_management::SymmetricKey;
///
/// let key = SymmetricKey::generate().unwrap();
/// assert_eq!(key.as_passphrase().len(), 64);
/// assert!(key.as_passphrase().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
/// ```
#[derive(Clone)]
pub struct SymmetricKey {
    bytes: SecureBytes,
    passphrase: SecureBuffer<String>,
}

impl SymmetricKey {
    /// Generate a fresh key from the operating system CSPRNG
    ///
    /// # Errors
    ///
    /// Returns `RandomGenerationError` if the OS random source fails
    pub fn generate() -> CryptoResult<Self> {
        let bytes = utils::random_bytes(SYMMETRIC_KEY_LEN)?;
        log::debug!("generated {}-bit symmetric key", SYMMETRIC_KEY_BITS);
        Ok(Self::from_secure_bytes(SecureBytes::from(bytes)))
    }

    /// Rebuild a key from its hex rendering (optional `0x` prefix)
    pub fn from_hex(value: &str) -> CryptoResult<Self> {
        let mut bytes = utils::decode_hex_exact::<SYMMETRIC_KEY_LEN>("symmetric_key", value)?;
        let key = Self::from_secure_bytes(SecureBytes::new(&bytes));
        zeroize::Zeroize::zeroize(&mut bytes);
        Ok(key)
    }

    fn from_secure_bytes(bytes: SecureBytes) -> Self {
        let passphrase = SecureBuffer::new(hex::encode(bytes.as_bytes()));
        Self { bytes, passphrase }
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }

    /// The lowercase hex passphrase handed to the cipher
    pub fn as_passphrase(&self) -> &str {
        self.passphrase.as_str()
    }

    /// Owned copy of the hex passphrase
    pub fn to_hex(&self) -> String {
        self.passphrase.as_str().to_owned()
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for SymmetricKey {}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("bits", &SYMMETRIC_KEY_BITS)
            .field("key", &"[REDACTED]")
            .finish()
    }
}
