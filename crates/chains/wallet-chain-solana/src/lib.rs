//! Solana legacy-`Message` construction and Ed25519 signing (`spec.md` §4.5–§4.8).

pub mod builder;
pub mod codec;
pub mod error;
pub mod signing;
pub mod types;

pub use error::SolanaError;
pub use types::{Instruction, Message, SignedTransaction, TxIntent};
