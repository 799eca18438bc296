//! Error taxonomy for ERC-4337 UserOperation construction and signing
//! (`spec.md` §7).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Erc4337Error {
    /// Both v0.6 and v0.7 field sets were populated on the same intent.
    #[error("both v0.6 and v0.7 fields are set; exactly one must be populated")]
    BothVersionsSet,
    /// Neither v0.6 nor v0.7 field set was populated.
    #[error("neither v0.6 nor v0.7 fields are set")]
    NeitherVersionSet,
    /// A recovery id was outside the valid `{0, 1}` range.
    #[error("invalid recovery id for UserOperation signature: {0}")]
    InvalidRecoveryId(u8),
    #[error(transparent)]
    Crypto(#[from] wallet_crypto::CryptoError),
}
