/*!
 * Password-based AES
 *
 * AES-256-CBC keyed through OpenSSL's `EVP_BytesToKey`, wrapped in the
 * `Salted__` envelope that `openssl enc` and CryptoJS read and write.
 */

#[allow(clippy::module_inception)]
mod aes;

pub use self::aes::*;
