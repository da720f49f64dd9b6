use super::*;
use std::collections::HashSet;

#[test]
fn test_generated_key_shape() {
    let key = SymmetricKey::generate().unwrap();

    assert_eq!(key.as_bytes().len(), SYMMETRIC_KEY_LEN);
    assert_eq!(key.as_passphrase().len(), 64);
    assert!(key
        .as_passphrase()
        .chars()
        .all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    assert_eq!(key.as_passphrase(), hex::encode(key.as_bytes()));
}

#[test]
fn test_generated_keys_differ() {
    let keys: HashSet<String> = (0..16)
        .map(|_| SymmetricKey::generate().unwrap().to_hex())
        .collect();
    assert_eq!(keys.len(), 16);
}

#[test]
fn test_from_hex_round_trip() {
    let key = SymmetricKey::generate().unwrap();
    let restored = SymmetricKey::from_hex(&key.to_hex()).unwrap();
    assert_eq!(key, restored);

    let prefixed = SymmetricKey::from_hex(&format!("0x{}", key.to_hex().to_uppercase())).unwrap();
    assert_eq!(key, prefixed);
    assert_eq!(prefixed.as_passphrase(), key.as_passphrase());
}

#[test]
fn test_from_hex_rejects_wrong_length() {
    let err = SymmetricKey::from_hex("abcd").unwrap_err();
    assert_eq!(err.error_type(), "InvalidParameter");
}

#[test]
fn test_debug_redacts_key() {
    let key = SymmetricKey::from_hex(&"ab".repeat(32)).unwrap();
    let rendered = format!("{:?}", key);
    assert!(rendered.contains("[REDACTED]"));
    assert!(!rendered.contains("abab"));
}
