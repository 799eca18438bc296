//! Error taxonomy for Cosmos SDK construction and signing (`spec.md` §7).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CosmosError {
    #[error("no messages in transaction body")]
    EmptyMessageList,

    #[error("signature shape incompatible with SIGN_MODE_DIRECT (expected ECDSA)")]
    IncompatibleSignature,

    #[error("invalid coin amount: {0}")]
    InvalidAmount(String),

    /// `cosmrs` has no `PartialEq` on its own error type, so it is carried
    /// here as a formatted string rather than via `#[from]`.
    #[error("cosmrs: {0}")]
    Cosmrs(String),

    #[error(transparent)]
    Crypto(#[from] wallet_crypto::CryptoError),
}
