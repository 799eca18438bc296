//! Cosmos SDK `Tx` data model (`spec.md` §4.6): a `TxIntent` carries exactly
//! what `TxBody`/`AuthInfo`/`SignDoc` need under `SIGN_MODE_DIRECT`.

/// A `google.protobuf.Any`-wrapped message, already protobuf-encoded by the
/// caller (this layer has no per-message-type schema knowledge).
#[derive(Debug, Clone)]
pub struct AnyMessage {
    pub type_url: String,
    pub value: Vec<u8>,
}

/// A single coin amount.
#[derive(Debug, Clone)]
pub struct Coin {
    pub denom: String,
    /// Decimal string, since Cosmos amounts can exceed `u64` (`Uint128`/`Uint256`).
    pub amount: String,
}

/// The transaction fee.
#[derive(Debug, Clone)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas_limit: u64,
    pub payer: String,
    pub granter: String,
}

/// Everything needed to build a `SIGN_MODE_DIRECT` `SignDoc` for a
/// single-signer transaction.
#[derive(Debug, Clone)]
pub struct TxIntent {
    pub messages: Vec<AnyMessage>,
    pub memo: String,
    pub timeout_height: u64,
    pub fee: Fee,
    /// The signer's compressed secp256k1 public key (33 bytes).
    pub public_key_compressed: [u8; 33],
    pub sequence: u64,
    pub chain_id: String,
    pub account_number: u64,
}

/// The unsigned `SignDoc`: `TxBody` and `AuthInfo`, each already
/// protobuf-encoded, ready for `SIGN_MODE_DIRECT` hashing.
#[derive(Debug, Clone)]
pub struct UnsignedSignDoc {
    pub body_bytes: Vec<u8>,
    pub auth_info_bytes: Vec<u8>,
    pub chain_id: String,
    pub account_number: u64,
}

/// A signed `TxRaw`, ready for protobuf serialization and broadcast.
#[derive(Debug, Clone)]
pub struct SignedTx {
    pub body_bytes: Vec<u8>,
    pub auth_info_bytes: Vec<u8>,
    pub signatures: Vec<Vec<u8>>,
}
