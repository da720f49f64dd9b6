#![no_main]

use arbitrary::Arbitrary;
use ethseal::aes;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct EnvelopeFuzzInput {
    plaintext: Vec<u8>,
    passphrase: String,
    salt: [u8; 8],
    envelope: String,
    raw_ciphertext: Vec<u8>,
}

fuzz_target!(|input: EnvelopeFuzzInput| {
    // Round trip must always hold
    if let Ok(sealed) = aes::encrypt_with_salt(&input.plaintext, &input.passphrase, input.salt) {
        let opened = aes::decrypt(&sealed, &input.passphrase).expect("round trip");
        assert_eq!(opened, input.plaintext);
    }

    // Arbitrary text must be rejected without panicking
    let _ = aes::decrypt(&input.envelope, &input.passphrase);

    // Well-formed header around arbitrary bytes
    let envelope = aes::SaltedEnvelope {
        salt: input.salt,
        ciphertext: input.raw_ciphertext,
    };
    let _ = aes::decrypt_to_string(&envelope.encode(), &input.passphrase);
});
