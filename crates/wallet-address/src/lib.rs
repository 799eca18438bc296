//! L3 address codecs for every chain family (`spec.md` §4.4).
//!
//! Decoders normalize and validate against each format's canonical form:
//! mixed-case Bech32 is rejected, and non-minimal bit padding is rejected
//! (see [`bech32::convert_bits`]).

pub mod aptos;
pub mod bech32;
pub mod bitcoin;
pub mod cardano;
pub mod cosmos;
pub mod error;
pub mod evm;
pub mod solana;

pub use error::AddressError;
