/*!
 * Symmetric key management
 *
 * Generation and parsing of the random symmetric keys that protect message
 * bodies.
 */

pub mod symmetric;

#[cfg(test)]
mod tests;

pub use symmetric::SymmetricKey;
pub use symmetric::SYMMETRIC_KEY_BITS;
pub use symmetric::SYMMETRIC_KEY_LEN;
