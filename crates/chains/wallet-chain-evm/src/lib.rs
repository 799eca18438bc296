//! EVM transaction construction, sighash, and signing (`spec.md` §4.6, §4.7):
//! legacy, EIP-1559, and EIP-7702 envelopes.

pub mod builder;
pub mod error;
pub mod rlp;
pub mod sighash;
pub mod signing;
pub mod types;

pub use error::EvmError;
pub use types::{TxIntent, UnsignedTransaction};
