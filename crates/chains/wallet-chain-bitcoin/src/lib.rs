//! Bitcoin transaction construction, sighash, and signing (`spec.md` §4.5,
//! §4.6, §4.7): legacy, SegWit v0 (BIP-143), and Taproot key-path spends
//! (BIP-341).

pub mod builder;
pub mod codec;
pub mod error;
pub mod script;
pub mod sighash;
pub mod signing;
pub mod taproot;
pub mod types;

pub use error::BitcoinError;
pub use types::{ScriptType, SigHashType, TxIn, TxOut, UnsignedTransaction};
