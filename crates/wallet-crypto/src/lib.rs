//! L1: hashing and curve operations, shared by every chain family.
//!
//! `spec.md` §4.2 frames this as a single layer precisely because EVM,
//! Bitcoin, and Cosmos all sign with secp256k1 and Solana signs with Ed25519 —
//! there is no reason for five families to carry five curve implementations.
//! One secp256k1 binding ([`secp256k1`], the same crate vendored as
//! `vlib-secp256k1` in the `nconsigny-vanadium` reference) covers ECDSA for
//! EVM/Bitcoin/Cosmos and BIP-340 Schnorr for Bitcoin Taproot; one Ed25519
//! implementation ([`ed25519_dalek`]) covers Solana and SLIP-0010 derivation.
//!
//! # Modules
//!
//! - [`hashing`] — SHA-256, double-SHA-256, Keccak-256, RIPEMD-160/`hash160`,
//!   BLAKE2b-256, and the BIP-340 tagged hash.
//! - [`curve`] — ECDSA (low-S, recoverable), BIP-340 Schnorr, and Ed25519
//!   signing, plus the [`Signature`](curve::Signature) sum type from
//!   `spec.md` §3.
//! - [`error`] — curve/hashing failure modes (`InvalidKey`, `BadPreimage`).

pub mod curve;
pub mod error;
pub mod hashing;

pub use curve::Signature;
pub use error::CryptoError;
