//! The shared error taxonomy (`spec.md` §7).
//!
//! Every fallible boundary in the core — a builder, a pre-image function, the
//! signer orchestrator — ultimately surfaces one of these five classes. Each
//! chain crate defines its own narrower error enum (e.g.
//! `wallet_chain_bitcoin::BitcoinBuildError`) and converts into [`CoreError`]
//! via `#[from]`.
//!
//! Class 5 (`Invariant`) is reserved for programming errors: an internal
//! invariant the builder itself should have enforced before calling deeper into
//! the stack. It is never expected to be handled by a caller; its purpose is to
//! fail loudly instead of emitting possibly-invalid bytes.

use thiserror::Error;

/// The top-level error type surfaced by `WalletCore`'s external interfaces.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Class 1: malformed input — bad mnemonic, invalid derivation path,
    /// out-of-range amount, an intent with inconsistent fields, a checksum
    /// mismatch.
    #[error("invalid input: {0}")]
    InputValidation(String),

    /// Class 2: a cryptographic operation failed — invalid private key,
    /// unsupported curve for the requested family, signature self-check
    /// failure.
    #[error("cryptographic error: {0}")]
    Crypto(String),

    /// Class 3: a serialization/deserialization boundary was violated —
    /// length-prefix overflow, non-canonical encoding where canonicity is
    /// required.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Class 4: the external `Signer` surfaced an error. Propagated verbatim
    /// with the chain family attached as context.
    #[error("signer error ({family}): {source}")]
    Signer {
        /// The chain family the signing request was for.
        family: &'static str,
        /// The underlying signer error.
        #[source]
        source: SignerError,
    },

    /// Class 5: an internal invariant was violated. This is a programming
    /// error in the core itself, not a caller mistake.
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

/// Failure modes an external [`Signer`](crate) implementation may surface
/// (`spec.md` §6).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignerError {
    /// The user declined to approve the signing request on a hardware or
    /// remote device.
    #[error("user rejected the signing request")]
    UserRejected,
    /// The requested curve is not supported by this signer implementation.
    #[error("unsupported curve: {0}")]
    Unsupported(String),
    /// Communication with a hardware or remote signer timed out.
    #[error("communication with signer timed out")]
    CommunicationTimeout,
    /// The outer operation was cancelled before the signer responded.
    #[error("signing operation was cancelled")]
    Cancelled,
    /// An opaque backend-specific failure.
    #[error("signer backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signer_error_wraps_with_family_context() {
        let err = CoreError::Signer {
            family: "bitcoin",
            source: SignerError::UserRejected,
        };
        assert_eq!(
            err.to_string(),
            "signer error (bitcoin): user rejected the signing request"
        );
    }
}
