use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{FieldBytes, PublicKey, SecretKey};
use sha3::{Digest, Keccak256};

use crate::error::{error_codes, CryptoError, CryptoResult};
use crate::secure_memory::SecureBytes;
use crate::utils;

/// Length of a secp256k1 private key in bytes
pub const PRIVATE_KEY_LEN: usize = 32;

/// Length of an Ethereum address in bytes
pub const ADDRESS_LEN: usize = 20;

/// A secp256k1 key-pair in the form used by Ethereum wallets
///
/// The wallet owns the secret scalar and the public point derived from it.
/// Derivation happens once in [`Wallet::from_private_key`]; every accessor
/// afterwards is a pure encoding of the stored point, so two wallets built
/// from the same private key always report the same public key and address.
///
/// # Examples
///
/// ```
/// use ethseal::wallet::Wallet;
///
/// let wallet = Wallet::from_private_key(
///     "0x0000000000000000000000000000000000000000000000000000000000000001",
/// ).unwrap();
///
/// assert_eq!(wallet.address(), "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
/// assert!(wallet.public_key().starts_with("0x0479be667ef9dcbbac55a06295ce870b"));
/// ```
#[derive(Clone)]
pub struct Wallet {
    secret: SecureBytes,
    public: PublicKey,
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("secret", &"[REDACTED]")
            .field("address", &self.address())
            .finish()
    }
}

impl Wallet {
    /// Build a wallet from a hex-encoded private key
    ///
    /// Accepts 64 hex digits with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// * `InvalidParameter` if the literal is not 32 bytes of hex
    /// * `KeyDerivationError` if the scalar is zero or not below the curve order
    pub fn from_private_key(private_key: &str) -> CryptoResult<Self> {
        let mut bytes = utils::decode_hex_exact::<PRIVATE_KEY_LEN>("private_key", private_key)?;
        let result = Self::from_bytes(&bytes);
        zeroize::Zeroize::zeroize(&mut bytes);
        result
    }

    /// Build a wallet from the raw 32-byte scalar
    pub fn from_bytes(bytes: &[u8; PRIVATE_KEY_LEN]) -> CryptoResult<Self> {
        let secret_key = SecretKey::from_bytes(FieldBytes::from_slice(bytes)).map_err(|_| {
            CryptoError::key_derivation_error(
                "public_key_derivation",
                "private key is not a valid secp256k1 scalar",
                error_codes::INVALID_PRIVATE_KEY,
            )
        })?;

        let public = secret_key.public_key();
        log::debug!("derived secp256k1 public key for {}", address_of(&public));

        Ok(Self {
            secret: SecureBytes::new(bytes),
            public,
        })
    }

    /// The private key as `0x` followed by 64 lowercase hex digits
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.secret.as_bytes()))
    }

    /// Uncompressed SEC1 public key, `0x04` followed by x and y (132 characters)
    pub fn public_key(&self) -> String {
        let point = self.public.to_encoded_point(false);
        format!("0x{}", hex::encode(point.as_bytes()))
    }

    /// Compressed SEC1 public key, `0x02` or `0x03` followed by x (68 characters)
    pub fn compressed_public_key(&self) -> String {
        let point = self.public.to_encoded_point(true);
        format!("0x{}", hex::encode(point.as_bytes()))
    }

    /// EIP-55 checksummed address of this key-pair
    pub fn address(&self) -> String {
        address_of(&self.public)
    }

    /// Raw 20-byte address
    pub fn address_bytes(&self) -> [u8; ADDRESS_LEN] {
        address_bytes_of(&self.public)
    }
}

fn address_bytes_of(public: &PublicKey) -> [u8; ADDRESS_LEN] {
    let point = public.to_encoded_point(false);
    // skip the 0x04 tag
    let digest = Keccak256::digest(&point.as_bytes()[1..]);

    let mut address = [0u8; ADDRESS_LEN];
    address.copy_from_slice(&digest[digest.len() - ADDRESS_LEN..]);
    address
}

fn address_of(public: &PublicKey) -> String {
    to_checksum_address(&address_bytes_of(public))
}

/// Render a 20-byte address with the EIP-55 mixed-case checksum
///
/// A hex letter is upper-cased when the matching nibble of
/// `keccak256(lowercase_hex_address)` is 8 or greater.
pub fn to_checksum_address(address: &[u8; ADDRESS_LEN]) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
