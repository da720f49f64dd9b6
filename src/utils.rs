//! Small helpers shared by the key and cipher modules.

use rand::{rngs::OsRng, RngCore};
use subtle::ConstantTimeEq;

use crate::error::{error_codes, CryptoError, CryptoResult};

/// Fill a new buffer of `length` bytes from the operating system CSPRNG
pub fn random_bytes(length: usize) -> CryptoResult<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::RandomGenerationError {
            cause: e.to_string(),
            error_code: error_codes::INSUFFICIENT_ENTROPY,
        })?;
    Ok(bytes)
}

/// Constant-time comparison of two byte slices
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Remove a leading `0x` or `0X` from a hex literal
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Decode a hex literal (optional `0x` prefix) that must be exactly `N` bytes
pub fn decode_hex_exact<const N: usize>(parameter: &str, value: &str) -> CryptoResult<[u8; N]> {
    let digits = strip_hex_prefix(value.trim());
    if digits.len() != N * 2 {
        return Err(CryptoError::invalid_parameter(
            parameter,
            &format!("{} hex characters", N * 2),
            &format!("{} characters", digits.len()),
        ));
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out).map_err(|e| {
        CryptoError::invalid_parameter(parameter, "hexadecimal digits", &e.to_string())
    })?;
    Ok(out)
}
