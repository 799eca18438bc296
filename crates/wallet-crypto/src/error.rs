//! Failure modes for hashing and curve operations (`spec.md` §4.2).

use thiserror::Error;

/// Errors raised by [`crate::curve`] and [`crate::hashing`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// A private scalar was zero or greater than or equal to the curve's
    /// group order.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// A function requiring an exactly-32-byte message/digest was given a
    /// buffer of a different length.
    #[error("bad preimage: expected 32 bytes, got {0}")]
    BadPreimage(usize),
    /// A public key failed to parse (wrong length, invalid encoding, or a
    /// point not on the curve).
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
    /// A signature failed self-verification.
    #[error("signature verification failed")]
    VerificationFailed,
}
