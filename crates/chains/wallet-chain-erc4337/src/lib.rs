//! ERC-4337 UserOperation construction and hashing: v0.6/v0.7 packed ABI
//! hashing, v0.8+ EIP-712 (`spec.md` §4.6–§4.8).

pub mod abi;
pub mod builder;
pub mod error;
pub mod sighash;
pub mod signing;
pub mod types;

pub use error::Erc4337Error;
pub use types::{TxIntent, UnsignedUserOperation, Version};
