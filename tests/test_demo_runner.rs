//! Integration tests for the demo runner and the `ethseal` binary

use std::process::Command;

use ethseal::aes;
use ethseal::config::{DEFAULT_MESSAGE, DEFAULT_PRIVATE_KEY_1, DEFAULT_PRIVATE_KEY_2};
use ethseal::prelude::*;

const PUBLIC_KEY_1: &str = "0x046655feed4d214c261e0a6b554395596f1f1476a77d999560e5a8df9b8a1a3515\
                            217e88dd05e938efdd71b2cce322bf01da96cd42087b236e8f5043157a9c068e";
const PUBLIC_KEY_2: &str = "0x04164d9dab17b3fcc2d89c4f04a9de2f8656763b9880af139ad98138a502f70c06\
                            dbe81dbfe833d1ca06906bdbcd6e70ebb244e8846b7d469d47c5758de3aa7824";

#[test]
fn test_public_keys_are_deterministic_across_runs() {
    let first = run_default().expect("first run");
    let second = run_default().expect("second run");

    assert_eq!(first.recipients, second.recipients);
    assert_eq!(first.recipients[0].public_key, PUBLIC_KEY_1);
    assert_eq!(first.recipients[1].public_key, PUBLIC_KEY_2);
}

#[test]
fn test_symmetric_key_and_ciphertext_change_between_runs() {
    let first = run_default().expect("first run");
    let second = run_default().expect("second run");

    assert_eq!(first.symmetric_key.as_passphrase().len(), 64);
    assert_ne!(first.symmetric_key, second.symmetric_key);
    assert_ne!(first.ciphertext, second.ciphertext);
}

#[test]
fn test_ciphertext_opens_only_with_its_key() {
    let report = run_default().expect("run");

    let opened = decrypt_to_string(&report.ciphertext, report.symmetric_key.as_passphrase())
        .expect("decrypt with the right key");
    assert_eq!(opened, "Hello, world! This is Shubh");

    let other = SymmetricKey::generate().expect("key");
    match decrypt(&report.ciphertext, other.as_passphrase()) {
        Ok(bytes) => assert_ne!(bytes, DEFAULT_MESSAGE.as_bytes()),
        Err(e) => assert_eq!(e.error_type(), "AesError"),
    }
}

#[test]
fn test_custom_configuration() {
    let config = DemoConfig::new([DEFAULT_PRIVATE_KEY_2], "a different message");
    let report = DemoRunner::new(config).run().expect("run");

    assert_eq!(report.recipients.len(), 1);
    assert_eq!(report.recipients[0].public_key, PUBLIC_KEY_2);
    assert_eq!(
        aes::decrypt(&report.ciphertext, report.symmetric_key.as_passphrase()).unwrap(),
        b"a different message"
    );
}

#[test]
fn test_recipient_keys_match_wallet() {
    let wallet = Wallet::from_private_key(DEFAULT_PRIVATE_KEY_1).unwrap();
    let keys = RecipientKeys::from(&wallet);
    assert_eq!(keys.public_key, PUBLIC_KEY_1);
    assert_eq!(keys.address, wallet.address());
}

#[test]
fn test_binary_prints_one_ciphertext_line() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_ethseal"))
            .env_remove("RUST_LOG")
            .output()
            .expect("spawn ethseal")
    };

    let first = run();
    assert!(first.status.success());
    let stdout = String::from_utf8(first.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("U2FsdGVkX1"));
    assert!(SaltedEnvelope::parse(lines[0]).is_ok());

    let second = run();
    assert!(second.status.success());
    assert_ne!(String::from_utf8(second.stdout).unwrap(), stdout);
}
