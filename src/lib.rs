//! A multi-chain transaction construction and signing core.
//!
//! This crate is the orchestration layer above a stack of per-layer crates
//! (hashing and curves, key derivation, address encoding, and one chain
//! crate per family): it builds unsigned transactions, derives the exact
//! bytes each family needs a signature over, and assembles + serializes the
//! result once an external [`signer::Signer`] has produced the signature.
//! It never holds a private scalar itself.
//!
//! # Supported families
//!
//! - EVM (legacy, EIP-1559, EIP-7702), via `wallet-chain-evm`
//! - Bitcoin (legacy, P2WPKH, Taproot key-path), via `wallet-chain-bitcoin`
//! - Cosmos SDK (`SIGN_MODE_DIRECT`), via `wallet-chain-cosmos`
//! - Solana (compiled `Message`), via `wallet-chain-solana`
//! - ERC-4337 user operations (v0.6/v0.7), via `wallet-chain-erc4337`
//!
//! # Modules
//!
//! - [`address`] — derives a family's canonical address from a
//!   [`signer::KeyProvider`]'s public key, never from a private scalar.
//! - [`intent`] — the unified `Intent`/`UnsignedTx`/`SignedTx`/`Preimage` sum
//!   types the orchestrator routes between family crates and a signer.
//! - [`signer`] — the `KeyProvider`/`Signer` contracts external collaborators
//!   (in-process, hardware, remote) implement.
//! - [`orchestrator`] — [`orchestrator::WalletCore`], the
//!   `build -> preimages -> sign -> assemble -> serialize` pipeline.

pub mod address;
pub mod intent;
pub mod orchestrator;
pub mod signer;
