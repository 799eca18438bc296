//! Error taxonomy for Solana message compiling and signing (`spec.md` §7).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolanaError {
    #[error("no instructions in transaction")]
    EmptyInstructionList,

    #[error("signature count {got} does not match required signer count {expected}")]
    SignatureCountMismatch { expected: usize, got: usize },

    #[error("signature shape incompatible with Ed25519")]
    IncompatibleSignature,
}
