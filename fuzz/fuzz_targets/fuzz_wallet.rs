#![no_main]

use ethseal::wallet::{self, Wallet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Wallet::from_private_key(text);
    }

    if data.len() >= 32 {
        let mut scalar = [0u8; 32];
        scalar.copy_from_slice(&data[..32]);
        if let Ok(w) = Wallet::from_bytes(&scalar) {
            assert_eq!(w.public_key().len(), 132);
            assert_eq!(w.address().len(), 42);
            let again = Wallet::from_private_key(&w.private_key_hex()).expect("normalized key");
            assert_eq!(again.public_key(), w.public_key());
        }
    }

    if data.len() >= 20 {
        let mut raw = [0u8; 20];
        raw.copy_from_slice(&data[..20]);
        let checksummed = wallet::to_checksum_address(&raw);
        assert_eq!(checksummed.to_lowercase(), format!("0x{}", hex_lower(&raw)));
    }
});

fn hex_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
