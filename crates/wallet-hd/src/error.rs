//! Error taxonomy for key derivation (`spec.md` §4.3, §7).

use crate::path::PathParseError;
use thiserror::Error;

/// Errors raised while parsing mnemonics, seeds, or derivation paths, or
/// while walking an HD tree.
#[derive(Debug, Error)]
pub enum HdError {
    /// A mnemonic phrase failed BIP-39 wordlist/checksum validation.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),
    /// A seed was not the expected length for the requested derivation.
    #[error("invalid seed length: expected {expected}, got {actual}")]
    InvalidSeedLength {
        /// The length the derivation scheme requires.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },
    /// The underlying `bip32` crate rejected a derivation step (e.g. because
    /// it produced an invalid child key; astronomically unlikely but part of
    /// the BIP-32 spec).
    #[error("bip32 derivation failed: {0}")]
    Bip32(String),
    /// A non-hardened derivation step was requested against SLIP-0010
    /// Ed25519, which only supports hardened derivation.
    #[error("unsupported derivation: {0}")]
    UnsupportedDerivation(String),
    /// A derivation path string could not be parsed.
    #[error(transparent)]
    PathParse(#[from] PathParseError),
}
