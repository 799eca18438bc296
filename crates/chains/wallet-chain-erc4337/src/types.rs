//! ERC-4337 `UserOperation` data model: v0.6 unpacked, v0.7 separated, and
//! the v0.7 packed form actually hashed (`spec.md` §3, §4.6).

use alloy_primitives::{Address, U256};

/// The caller-supplied intent. Exactly one of `v06` / `v07` is populated
/// (`spec.md` §3 invariant 4); the builder rejects both-set and neither-set.
#[derive(Debug, Clone)]
pub struct TxIntent {
    pub sender: Address,
    pub nonce: U256,
    pub call_data: Vec<u8>,
    pub call_gas_limit: U256,
    pub verification_gas_limit: U256,
    pub pre_verification_gas: U256,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
    pub v06: Option<V06Fields>,
    pub v07: Option<V07Fields>,
}

/// v0.6 compatibility fields: `initCode` and `paymasterAndData` already
/// concatenated by the caller.
#[derive(Debug, Clone, Default)]
pub struct V06Fields {
    pub init_code: Vec<u8>,
    pub paymaster_and_data: Vec<u8>,
}

/// v0.7 separated fields, packed by the builder into the wire-level halves.
#[derive(Debug, Clone, Default)]
pub struct V07Fields {
    pub factory: Option<Address>,
    pub factory_data: Vec<u8>,
    pub paymaster: Option<Address>,
    pub paymaster_verification_gas_limit: U256,
    pub paymaster_post_op_gas_limit: U256,
    pub paymaster_data: Vec<u8>,
}

/// The unpacked v0.6 `UserOperation` struct EntryPoint v0.6 hashes.
#[derive(Debug, Clone)]
pub struct V06UserOperation {
    pub sender: Address,
    pub nonce: U256,
    pub init_code: Vec<u8>,
    pub call_data: Vec<u8>,
    pub call_gas_limit: U256,
    pub verification_gas_limit: U256,
    pub pre_verification_gas: U256,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
    pub paymaster_and_data: Vec<u8>,
}

/// The packed v0.7+ `PackedUserOperation` struct EntryPoint v0.7/v0.8 hash,
/// with `accountGasLimits`/`gasFees` already packed into 32-byte halves.
#[derive(Debug, Clone)]
pub struct PackedUserOperation {
    pub sender: Address,
    pub nonce: U256,
    pub init_code: Vec<u8>,
    pub call_data: Vec<u8>,
    pub account_gas_limits: [u8; 32],
    pub pre_verification_gas: U256,
    pub gas_fees: [u8; 32],
    pub paymaster_and_data: Vec<u8>,
}

/// Which EntryPoint revision's hashing rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V06,
    V07,
    /// v0.8 and later: same packed struct as v0.7, hashed via EIP-712.
    V08,
}

/// The builder's output: a version tag plus the struct that version hashes.
#[derive(Debug, Clone)]
pub enum UnsignedUserOperation {
    V06(V06UserOperation),
    V07Packed { version: Version, op: PackedUserOperation },
}

/// A signed `UserOperation`: the unsigned struct plus its trailing
/// `signature` field.
#[derive(Debug, Clone)]
pub struct SignedUserOperation {
    pub op: UnsignedUserOperation,
    pub signature: Vec<u8>,
}
