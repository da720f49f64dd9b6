//! Secure Memory Handling Utilities
//!
//! Containers for private keys, symmetric keys and passphrases. Their contents
//! are zeroed when dropped and never appear in `Debug` output, so a stray
//! `{:?}` in a log line cannot leak key material.

use std::fmt;
use std::ops::Deref;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A container for sensitive data that is zeroed when dropped.
///
/// Holds any [`Zeroize`] value, most commonly the hex passphrase form of a
/// symmetric key. Access is read-only through `Deref`.
///
/// # Example
///
/// ```
/// use ethseal::secure_memory::SecureBuffer;
///
/// let passphrase = SecureBuffer::new(String::from("00112233"));
/// assert_eq!(passphrase.len(), 8);
/// // zeroed when `passphrase` goes out of scope
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecureBuffer<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> SecureBuffer<T> {
    /// Wrap `data` so that it is zeroed on drop
    pub fn new(data: T) -> Self {
        Self { inner: data }
    }
}

impl<T: Zeroize> Deref for SecureBuffer<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Zeroize> fmt::Debug for SecureBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureBuffer([REDACTED])")
    }
}

/// Byte container for secret scalars and raw symmetric keys.
///
/// # Security Properties
///
/// 1. Memory is zeroed when the value is dropped or cleared
/// 2. `Debug` prints only the length
/// 3. Equality is evaluated in constant time
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecureBytes {
    bytes: Vec<u8>,
}

impl SecureBytes {
    /// Copy `data` into a new secure container
    pub fn new(data: &[u8]) -> Self {
        Self {
            bytes: data.to_vec(),
        }
    }

    /// Read-only view of the protected bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Zero and truncate the buffer
    pub fn clear(&mut self) {
        self.bytes.zeroize();
        self.bytes.clear();
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for SecureBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for SecureBytes {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for SecureBytes {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.len() == other.bytes.len() && bool::from(self.bytes.ct_eq(&other.bytes))
    }
}

impl Eq for SecureBytes {}

impl fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureBytes")
            .field("len", &self.bytes.len())
            .finish()
    }
}
