//! Cosmos SDK transaction construction, sighash, and signing (`spec.md`
//! §4.6, §4.7): `TxBody`/`AuthInfo`/`SignDoc` under `SIGN_MODE_DIRECT`.

pub mod builder;
pub mod error;
pub mod sighash;
pub mod signing;
pub mod types;

pub use error::CosmosError;
pub use types::{TxIntent, UnsignedSignDoc};
