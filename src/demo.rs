//! Demo encryption runner
//!
//! Executes the whole hybrid-encryption demonstration in order:
//!
//! 1. derive a secp256k1 wallet for every configured private key
//! 2. generate a random 256-bit symmetric key
//! 3. encrypt the message with password-based AES keyed by the hex key
//! 4. hand back the ciphertext together with what was derived on the way
//!
//! Any failing step aborts the run; nothing is retried.

use crate::aes;
use crate::config::DemoConfig;
use crate::error::CryptoResult;
use crate::key_management::SymmetricKey;
use crate::wallet::Wallet;

/// Public material derived for one recipient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientKeys {
    /// Uncompressed `0x04…` public key
    pub public_key: String,
    /// EIP-55 checksummed address
    pub address: String,
}

impl From<&Wallet> for RecipientKeys {
    fn from(wallet: &Wallet) -> Self {
        Self {
            public_key: wallet.public_key(),
            address: wallet.address(),
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub recipients: Vec<RecipientKeys>,
    pub symmetric_key: SymmetricKey,
    /// Salted base64 envelope, the line printed by the binary
    pub ciphertext: String,
}

/// Runs the demonstration for one configuration
#[derive(Debug, Clone, Default)]
pub struct DemoRunner {
    config: DemoConfig,
}

impl DemoRunner {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Execute all steps and return the report
    ///
    /// # Errors
    ///
    /// Propagates the first failure: an invalid configuration, an unusable
    /// private key, an RNG failure or an encryption error.
    pub fn run(&self) -> CryptoResult<DemoReport> {
        self.config.validate()?;

        let recipients = self.derive_recipients()?;
        log::info!("derived {} recipient key-pairs", recipients.len());

        let symmetric_key = SymmetricKey::generate()?;

        let ciphertext = aes::encrypt(
            self.config.message.as_bytes(),
            symmetric_key.as_passphrase(),
        )?;
        log::info!(
            "encrypted {}-byte message into {}-character envelope",
            self.config.message.len(),
            ciphertext.len()
        );

        Ok(DemoReport {
            recipients,
            symmetric_key,
            ciphertext,
        })
    }

    fn derive_recipients(&self) -> CryptoResult<Vec<RecipientKeys>> {
        self.config
            .private_keys
            .iter()
            .enumerate()
            .map(|(index, private_key)| {
                let wallet = Wallet::from_private_key(private_key).map_err(|e| {
                    log::error!("recipient {}: {}", index, e);
                    e
                })?;
                log::debug!("recipient {} address {}", index, wallet.address());
                Ok(RecipientKeys::from(&wallet))
            })
            .collect()
    }
}

/// Run with the built-in configuration
pub fn run_default() -> CryptoResult<DemoReport> {
    DemoRunner::default().run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aes;
    use crate::config::{DEFAULT_MESSAGE, DEFAULT_PRIVATE_KEY_1};

    #[test]
    fn test_default_run() {
        let report = run_default().unwrap();

        assert_eq!(report.recipients.len(), 2);
        assert_eq!(
            report.recipients[0].address,
            "0x14791697260E4c9A71f18484C9f997B308e59325"
        );
        assert_eq!(
            report.recipients[1].address,
            "0xa698d53d0b38cF4A7C9371c7ea8bec4594B00122"
        );

        let opened =
            aes::decrypt_to_string(&report.ciphertext, report.symmetric_key.as_passphrase())
                .unwrap();
        assert_eq!(opened, DEFAULT_MESSAGE);
    }

    #[test]
    fn test_invalid_key_aborts_run() {
        let runner = DemoRunner::new(DemoConfig::new(
            [DEFAULT_PRIVATE_KEY_1, "0xnot-a-key"],
            DEFAULT_MESSAGE,
        ));
        let err = runner.run().unwrap_err();
        assert_eq!(err.error_type(), "InvalidParameter");
    }

    #[test]
    fn test_empty_config_aborts_run() {
        let runner = DemoRunner::new(DemoConfig::new(Vec::<String>::new(), "x"));
        assert_eq!(runner.run().unwrap_err().error_type(), "ConfigError");
    }
}
