//! Error taxonomy for the EVM chain family (`spec.md` §7).

use thiserror::Error;

/// Errors building, hashing, or signing an EVM transaction.
#[derive(Debug, Error)]
pub enum EvmError {
    /// The caller requested an envelope type incompatible with the supplied
    /// gas pricing (e.g. `Eip1559` type hint with legacy `gasPrice`).
    #[error("type hint {hint:?} is incompatible with the supplied gas pricing")]
    IncompatibleTypeHint { hint: crate::types::TypeHint },
    /// An authorization list was supplied for a non-EIP-7702 envelope.
    #[error("authorization list requires an EIP-7702 envelope")]
    AuthorizationRequiresEip7702,
    /// A recovery id was outside the valid `{0, 1}` range for `yParity`.
    #[error("invalid recovery id for yParity: {0}")]
    InvalidRecoveryId(u8),
    /// The underlying curve signer returned an error.
    #[error(transparent)]
    Crypto(#[from] wallet_crypto::CryptoError),
}
