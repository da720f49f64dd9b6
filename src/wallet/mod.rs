/*!
 * secp256k1 wallets
 *
 * Derives Ethereum-style public keys and addresses from hex private keys.
 */

#[allow(clippy::module_inception)]
mod wallet;

pub use wallet::*;
