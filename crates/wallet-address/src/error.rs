//! Error taxonomy for address encoding/decoding (`spec.md` §4.4, §7).

use crate::bech32::Bech32Error;
use thiserror::Error;

/// Errors encoding or decoding a chain address.
#[derive(Debug, Error)]
pub enum AddressError {
    /// A decoded address had the wrong byte length for its format.
    #[error("invalid address length: expected {expected}, got {actual}")]
    InvalidLength {
        /// The length the format requires.
        expected: usize,
        /// The length actually present.
        actual: usize,
    },
    /// An EIP-55 checksum did not match the computed checksum.
    #[error("invalid EIP-55 checksum")]
    InvalidChecksum,
    /// A base58 string failed to decode.
    #[error("invalid base58: {0}")]
    InvalidBase58(String),
    /// A Base58Check checksum did not match.
    #[error("invalid base58check checksum")]
    InvalidBase58Check,
    /// A Bech32/Bech32m string failed to decode.
    #[error(transparent)]
    Bech32(#[from] Bech32Error),
    /// A hex string failed to decode.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    /// A witness program had an invalid length for its version.
    #[error("invalid witness program length {length} for version {version}")]
    InvalidWitnessProgram {
        /// The witness version.
        version: u8,
        /// The program length actually present.
        length: usize,
    },
}
