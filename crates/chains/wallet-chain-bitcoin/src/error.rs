//! Error taxonomy for Bitcoin construction and signing (`spec.md` §7).

use thiserror::Error;

/// Errors from Bitcoin transaction building, scripting, and signing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitcoinError {
    /// Outputs would spend more than the inputs provide; the builder never
    /// invents change, so this is the caller's responsibility to avoid.
    #[error("insufficient input: inputs total {input_total}, outputs total {output_total}")]
    InsufficientInput { input_total: u64, output_total: u64 },

    /// A pushed data item exceeds the 4-byte length-prefix ceiling `OP_PUSHDATA4` allows.
    #[error("script push data too large: {0} bytes")]
    PushDataTooLarge(usize),

    /// A script did not match any recognized template where one was required.
    #[error("script does not match expected template")]
    UnrecognizedScript,

    /// A secp256k1 x-only public key or tweak was malformed.
    #[error("invalid taproot key material: {0}")]
    InvalidTaprootKey(String),

    /// The signature attached to an input did not match the algorithm its
    /// `ScriptType` requires (e.g. a Schnorr signature on a legacy input).
    #[error("signature shape incompatible with script type")]
    IncompatibleSignature,

    #[error(transparent)]
    Crypto(#[from] wallet_crypto::CryptoError),
}
