//! EVM transaction data model (`spec.md` §4.6).

use alloy_primitives::{Address, U256};

/// One entry of an EIP-2930/2718 access list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessListItem {
    pub address: Address,
    pub storage_keys: Vec<[u8; 32]>,
}

/// A signed EIP-7702 authorization tuple: `[chainId, address, nonce,
/// yParity, r, s]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedAuthorization {
    pub chain_id: u64,
    pub address: Address,
    pub nonce: u64,
    pub y_parity: u8,
    pub r: [u8; 32],
    pub s: [u8; 32],
}

/// An unsigned EIP-7702 authorization, the input to the per-authorization
/// signature (`spec.md` §4.6/§4.7: `keccak256(0x05 || rlp([chainId, address,
/// nonce]))`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedAuthorization {
    pub chain_id: u64,
    pub address: Address,
    pub nonce: u64,
}

/// Which envelope type a caller wants, or `None` to let the builder infer
/// one from the other fields present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    Legacy,
    Eip1559,
    Eip7702,
}

/// Gas pricing, either legacy single-price or EIP-1559 two-part fees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GasPricing {
    Legacy { gas_price: U256 },
    Eip1559 { max_fee_per_gas: U256, max_priority_fee_per_gas: U256 },
}

/// The semantic inputs to the EVM builder (`spec.md` §4.6's EVM builder
/// field list).
#[derive(Debug, Clone)]
pub struct TxIntent {
    pub to: Option<Address>,
    pub value: U256,
    pub data: Vec<u8>,
    pub gas_limit: u64,
    pub nonce: u64,
    pub chain_id: u64,
    pub type_hint: Option<TypeHint>,
    pub access_list: Vec<AccessListItem>,
    pub gas_pricing: GasPricing,
    pub authorization_list: Vec<SignedAuthorization>,
}

/// The builder's output: a fully-formed, not-yet-signed transaction of a
/// specific envelope type.
#[derive(Debug, Clone)]
pub enum UnsignedTransaction {
    Legacy(LegacyTx),
    Eip1559(Eip1559Tx),
    Eip7702(Eip7702Tx),
}

#[derive(Debug, Clone)]
pub struct LegacyTx {
    pub nonce: u64,
    pub gas_price: U256,
    pub gas_limit: u64,
    pub to: Option<Address>,
    pub value: U256,
    pub data: Vec<u8>,
    pub chain_id: u64,
}

#[derive(Debug, Clone)]
pub struct Eip1559Tx {
    pub chain_id: u64,
    pub nonce: u64,
    pub max_priority_fee_per_gas: U256,
    pub max_fee_per_gas: U256,
    pub gas_limit: u64,
    pub to: Option<Address>,
    pub value: U256,
    pub data: Vec<u8>,
    pub access_list: Vec<AccessListItem>,
}

#[derive(Debug, Clone)]
pub struct Eip7702Tx {
    pub chain_id: u64,
    pub nonce: u64,
    pub max_priority_fee_per_gas: U256,
    pub max_fee_per_gas: U256,
    pub gas_limit: u64,
    pub to: Option<Address>,
    pub value: U256,
    pub data: Vec<u8>,
    pub access_list: Vec<AccessListItem>,
    pub authorization_list: Vec<SignedAuthorization>,
}

/// A fully signed EVM transaction, ready for `rlp`/wire serialization.
#[derive(Debug, Clone)]
pub enum SignedTransaction {
    Legacy { tx: LegacyTx, v: u64, r: [u8; 32], s: [u8; 32] },
    Eip1559 { tx: Eip1559Tx, y_parity: u8, r: [u8; 32], s: [u8; 32] },
    Eip7702 { tx: Eip7702Tx, y_parity: u8, r: [u8; 32], s: [u8; 32] },
}
