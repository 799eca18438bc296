//! Shared, chain-agnostic types for the multi-chain transaction construction and
//! signing core.
//!
//! This crate provides the foundational pieces that every per-family chain crate
//! (`wallet-chain-evm`, `wallet-chain-bitcoin`, `wallet-chain-cosmos`,
//! `wallet-chain-solana`, `wallet-chain-erc4337`) builds on: the non-cryptographic
//! L0 primitives (variable-length integer codecs), the error taxonomy every
//! fallible boundary in the core converges on, and the `ChainConfig`/`ChainFamily`
//! discriminants that identify which family an `UnsignedTransaction` belongs to.
//!
//! # Modules
//!
//! - [`primitives`] — byte-order integer codecs and variable-length integer
//!   encodings (Bitcoin `VarInt`, protobuf/ULEB128 varint, Solana short-vec).
//! - [`error`] — the five-class error taxonomy (`CoreError`) shared across the
//!   workspace.
//! - [`config`] — `ChainFamily` and `ChainConfig`, the caller-supplied chain
//!   metadata described in `spec.md` §6.
//! - [`chain_id`] — a CAIP-2 `ChainId` newtype.

pub mod chain_id;
pub mod config;
pub mod error;
pub mod primitives;

pub use chain_id::ChainId;
pub use config::{ChainConfig, ChainFamily};
pub use error::CoreError;
