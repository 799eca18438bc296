//! L2 key derivation: BIP-39 mnemonics, BIP-32 secp256k1 HD trees, and
//! hand-rolled SLIP-0010 Ed25519 HD trees (`spec.md` §4.3).

pub mod bip32_secp256k1;
pub mod error;
pub mod mnemonic;
pub mod node;
pub mod path;
pub mod slip10;

pub use error::HdError;
pub use mnemonic::{validate_mnemonic, MnemonicPhrase};
pub use node::KeyNode;
pub use path::DerivationPath;
