use ::aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use md5::{Digest, Md5};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{error_codes, CryptoError, CryptoResult};
use crate::utils;

type Aes256CbcEnc = cbc::Encryptor<::aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<::aes::Aes256>;

/// Magic prefix of an OpenSSL salted envelope
pub const SALT_MAGIC: &[u8; 8] = b"Salted__";

/// Salt length in bytes
pub const SALT_LEN: usize = 8;

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// CBC initialization vector length in bytes
pub const IV_LEN: usize = 16;

/// AES block length in bytes
pub const BLOCK_LEN: usize = 16;

const HEADER_LEN: usize = SALT_MAGIC.len() + SALT_LEN;

/// Key and IV derived from a passphrase and salt
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeyMaterial {
    key: [u8; KEY_LEN],
    iv: [u8; IV_LEN],
}

impl DerivedKeyMaterial {
    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }
}

impl std::fmt::Debug for DerivedKeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKeyMaterial")
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .finish()
    }
}

/// OpenSSL `EVP_BytesToKey` with MD5 and a single iteration
///
/// Produces 48 bytes as `D_1 || D_2 || D_3` where
/// `D_i = MD5(D_{i-1} || passphrase || salt)` and `D_0` is empty. The first
/// 32 bytes are the AES-256 key, the last 16 the CBC IV.
pub fn evp_bytes_to_key(passphrase: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKeyMaterial {
    let mut material = [0u8; KEY_LEN + IV_LEN];
    let mut filled = 0;
    let mut previous: Vec<u8> = Vec::new();

    while filled < material.len() {
        let mut hasher = Md5::new();
        hasher.update(&previous);
        hasher.update(passphrase);
        hasher.update(salt);
        let block = hasher.finalize();

        let take = (material.len() - filled).min(block.len());
        material[filled..filled + take].copy_from_slice(&block[..take]);
        filled += take;

        previous.zeroize();
        previous = block.to_vec();
    }
    previous.zeroize();

    let mut key = [0u8; KEY_LEN];
    let mut iv = [0u8; IV_LEN];
    key.copy_from_slice(&material[..KEY_LEN]);
    iv.copy_from_slice(&material[KEY_LEN..]);
    material.zeroize();

    DerivedKeyMaterial { key, iv }
}

/// AES-256-CBC cipher with PKCS#7 padding
///
/// # Examples
///
/// ```
/// use ethseal::aes::AesCbc;
///
/// let cipher = AesCbc::new(&[0x42; 32], &[0x24; 16]).unwrap();
/// let ciphertext = cipher.encrypt(b"Secret message");
/// assert_eq!(ciphertext.len(), 16);
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"Secret message");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesCbc {
    key: [u8; KEY_LEN],
    iv: [u8; IV_LEN],
}

impl std::fmt::Debug for AesCbc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesCbc")
            .field("cipher", &"[AES-256-CBC Cipher]")
            .finish()
    }
}

impl AesCbc {
    /// Create a cipher from a 32-byte key and a 16-byte IV
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either length is wrong
    pub fn new(key: &[u8], iv: &[u8]) -> CryptoResult<Self> {
        if key.len() != KEY_LEN {
            return Err(CryptoError::invalid_parameter(
                "key",
                "32 bytes",
                &format!("{} bytes", key.len()),
            ));
        }
        if iv.len() != IV_LEN {
            return Err(CryptoError::invalid_parameter(
                "iv",
                "16 bytes",
                &format!("{} bytes", iv.len()),
            ));
        }

        let mut cipher = Self {
            key: [0u8; KEY_LEN],
            iv: [0u8; IV_LEN],
        };
        cipher.key.copy_from_slice(key);
        cipher.iv.copy_from_slice(iv);
        Ok(cipher)
    }

    fn from_material(material: &DerivedKeyMaterial) -> Self {
        Self {
            key: material.key,
            iv: material.iv,
        }
    }

    /// Encrypt and pad; output length is the next multiple of 16 above the input
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        Aes256CbcEnc::new(&self.key.into(), &self.iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
    }

    /// Decrypt and strip padding
    ///
    /// # Errors
    ///
    /// Returns an `AesError` when the input is not a whole number of blocks or
    /// the padding is invalid, which is the usual outcome of a wrong key.
    pub fn decrypt(&self, ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(CryptoError::aes_error(
                "decrypt",
                &format!(
                    "ciphertext length {} is not a positive multiple of {}",
                    ciphertext.len(),
                    BLOCK_LEN
                ),
                error_codes::AES_INVALID_ENVELOPE,
            ));
        }

        Aes256CbcDec::new(&self.key.into(), &self.iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| {
                CryptoError::aes_error(
                    "decrypt",
                    "invalid padding (wrong key or corrupted data)",
                    error_codes::AES_DECRYPTION_FAILED,
                )
            })
    }
}

/// Parsed OpenSSL salted envelope: `"Salted__" || salt || ciphertext`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedEnvelope {
    pub salt: [u8; SALT_LEN],
    pub ciphertext: Vec<u8>,
}

impl SaltedEnvelope {
    /// Decode the base64 text form
    ///
    /// Surrounding whitespace and line breaks (as written by `openssl enc -a`)
    /// are ignored.
    pub fn parse(encoded: &str) -> CryptoResult<Self> {
        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        let raw = base64::decode(compact)?;

        if raw.len() < HEADER_LEN || &raw[..SALT_MAGIC.len()] != SALT_MAGIC {
            return Err(CryptoError::aes_error(
                "parse_envelope",
                "missing 'Salted__' header",
                error_codes::AES_INVALID_ENVELOPE,
            ));
        }

        let ciphertext = raw[HEADER_LEN..].to_vec();
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(CryptoError::aes_error(
                "parse_envelope",
                &format!(
                    "ciphertext length {} is not a positive multiple of {}",
                    ciphertext.len(),
                    BLOCK_LEN
                ),
                error_codes::AES_INVALID_ENVELOPE,
            ));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&raw[SALT_MAGIC.len()..HEADER_LEN]);
        Ok(Self { salt, ciphertext })
    }

    /// Render as standard, padded base64 on a single line
    pub fn encode(&self) -> String {
        let mut raw = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        raw.extend_from_slice(SALT_MAGIC);
        raw.extend_from_slice(&self.salt);
        raw.extend_from_slice(&self.ciphertext);
        base64::encode(raw)
    }
}

/// Encrypt `plaintext` under `passphrase` with a fresh random salt
///
/// The result is a single-line base64 string beginning with `U2FsdGVkX1`,
/// readable by `openssl enc -d -aes-256-cbc -md md5 -a -A` and by CryptoJS.
/// Because the salt is random, encrypting the same input twice gives two
/// different strings.
///
/// # Examples
///
/// ```
/// use ethseal::aes;
///
/// let sealed = aes::encrypt(b"Hello", "my passphrase").unwrap();
/// assert!(sealed.starts_with("U2FsdGVkX1"));
/// assert_eq!(aes::decrypt(&sealed, "my passphrase").unwrap(), b"Hello");
/// ```
pub fn encrypt(plaintext: &[u8], passphrase: &str) -> CryptoResult<String> {
    let salt_bytes = utils::random_bytes(SALT_LEN)?;
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&salt_bytes);
    encrypt_with_salt(plaintext, passphrase, salt)
}

/// Encrypt with a caller-chosen salt
///
/// Deterministic: identical inputs give identical output. Only use a fixed
/// salt for reproducible vectors.
pub fn encrypt_with_salt(
    plaintext: &[u8],
    passphrase: &str,
    salt: [u8; SALT_LEN],
) -> CryptoResult<String> {
    let material = evp_bytes_to_key(passphrase.as_bytes(), &salt);
    let ciphertext = AesCbc::from_material(&material).encrypt(plaintext);

    Ok(SaltedEnvelope { salt, ciphertext }.encode())
}

/// Decrypt an envelope produced by [`encrypt`] (or OpenSSL / CryptoJS)
///
/// # Errors
///
/// * `EncodingError` if the text is not base64
/// * `AesError` if the header or length is wrong, or the padding check fails
///
/// A wrong passphrase almost always fails the padding check. In the rare case
/// it passes, the returned bytes are unrelated to the original plaintext.
pub fn decrypt(envelope: &str, passphrase: &str) -> CryptoResult<Vec<u8>> {
    let envelope = SaltedEnvelope::parse(envelope)?;
    let material = evp_bytes_to_key(passphrase.as_bytes(), &envelope.salt);
    AesCbc::from_material(&material).decrypt(&envelope.ciphertext)
}

/// Decrypt and require the plaintext to be UTF-8
pub fn decrypt_to_string(envelope: &str, passphrase: &str) -> CryptoResult<String> {
    let plaintext = decrypt(envelope, passphrase)?;
    String::from_utf8(plaintext).map_err(|e| {
        CryptoError::EncodingError(format!("plaintext is not UTF-8: {}", e.utf8_error()))
    })
}
