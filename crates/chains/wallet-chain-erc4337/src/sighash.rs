//! `userOpHash` computation for every EntryPoint revision (`spec.md` §4.7):
//! v0.6/v0.7 hash the ABI-packed struct then wrap with `(hash, entryPoint,
//! chainId)`; v0.8+ uses EIP-712 over the same packed struct directly.

use crate::abi::{address_word, bytes_digest, keccak_words, uint_word};
use crate::types::{PackedUserOperation, UnsignedUserOperation, V06UserOperation};
use alloy_primitives::{Address, U256};
use alloy_sol_types::{SolStruct, eip712_domain, sol};

fn wrap_with_entry_point(struct_hash: [u8; 32], entry_point: Address, chain_id: u64) -> [u8; 32] {
    keccak_words(&[
        struct_hash,
        address_word(entry_point),
        uint_word(U256::from(chain_id)),
    ])
}

fn v06_struct_hash(op: &V06UserOperation) -> [u8; 32] {
    keccak_words(&[
        address_word(op.sender),
        uint_word(op.nonce),
        bytes_digest(&op.init_code),
        bytes_digest(&op.call_data),
        uint_word(op.call_gas_limit),
        uint_word(op.verification_gas_limit),
        uint_word(op.pre_verification_gas),
        uint_word(op.max_fee_per_gas),
        uint_word(op.max_priority_fee_per_gas),
        bytes_digest(&op.paymaster_and_data),
    ])
}

fn v07_struct_hash(op: &PackedUserOperation) -> [u8; 32] {
    keccak_words(&[
        address_word(op.sender),
        uint_word(op.nonce),
        bytes_digest(&op.init_code),
        bytes_digest(&op.call_data),
        op.account_gas_limits,
        uint_word(op.pre_verification_gas),
        op.gas_fees,
        bytes_digest(&op.paymaster_and_data),
    ])
}

sol! {
    struct PackedUserOperationEip712 {
        address sender;
        uint256 nonce;
        bytes initCode;
        bytes callData;
        bytes32 accountGasLimits;
        uint256 preVerificationGas;
        bytes32 gasFees;
        bytes paymasterAndData;
    }
}

fn v08_eip712_hash(op: &PackedUserOperation, entry_point: Address, chain_id: u64) -> [u8; 32] {
    let typed = PackedUserOperationEip712 {
        sender: op.sender,
        nonce: op.nonce,
        initCode: op.init_code.clone().into(),
        callData: op.call_data.clone().into(),
        accountGasLimits: op.account_gas_limits.into(),
        preVerificationGas: op.pre_verification_gas,
        gasFees: op.gas_fees.into(),
        paymasterAndData: op.paymaster_and_data.clone().into(),
    };
    let domain = eip712_domain! {
        name: "ERC4337",
        version: "1",
        chain_id: chain_id,
        verifying_contract: entry_point,
    };
    typed.eip712_signing_hash(&domain).0
}

/// Computes `userOpHash` for the version-appropriate hashing rule.
pub fn user_op_hash(
    op: &UnsignedUserOperation,
    entry_point: Address,
    chain_id: u64,
) -> [u8; 32] {
    match op {
        UnsignedUserOperation::V06(v06) => {
            wrap_with_entry_point(v06_struct_hash(v06), entry_point, chain_id)
        }
        UnsignedUserOperation::V07Packed { version, op } => match version {
            crate::types::Version::V06 => unreachable!("v0.6 never carries a packed struct"),
            crate::types::Version::V07 => {
                wrap_with_entry_point(v07_struct_hash(op), entry_point, chain_id)
            }
            crate::types::Version::V08 => v08_eip712_hash(op, entry_point, chain_id),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Version;

    fn sample_v06() -> V06UserOperation {
        V06UserOperation {
            sender: Address::ZERO,
            nonce: U256::from(1u64),
            init_code: vec![],
            call_data: vec![0xaa],
            call_gas_limit: U256::from(1u64),
            verification_gas_limit: U256::from(1u64),
            pre_verification_gas: U256::from(1u64),
            max_fee_per_gas: U256::from(1u64),
            max_priority_fee_per_gas: U256::from(1u64),
            paymaster_and_data: vec![],
        }
    }

    fn sample_packed() -> PackedUserOperation {
        PackedUserOperation {
            sender: Address::ZERO,
            nonce: U256::from(1u64),
            init_code: vec![],
            call_data: vec![0xaa],
            account_gas_limits: [1u8; 32],
            pre_verification_gas: U256::from(1u64),
            gas_fees: [2u8; 32],
            paymaster_and_data: vec![],
        }
    }

    #[test]
    fn v06_hash_is_deterministic() {
        let op = UnsignedUserOperation::V06(sample_v06());
        let a = user_op_hash(&op, Address::ZERO, 1);
        let b = user_op_hash(&op, Address::ZERO, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn v06_and_v07_hashes_differ_for_same_logical_op() {
        let v06 = user_op_hash(&UnsignedUserOperation::V06(sample_v06()), Address::ZERO, 1);
        let v07 = user_op_hash(
            &UnsignedUserOperation::V07Packed { version: Version::V07, op: sample_packed() },
            Address::ZERO,
            1,
        );
        assert_ne!(v06, v07);
    }

    #[test]
    fn v08_eip712_hash_is_stable_under_reserialization() {
        let op = UnsignedUserOperation::V07Packed { version: Version::V08, op: sample_packed() };
        let a = user_op_hash(&op, Address::ZERO, 1);
        let b = user_op_hash(&op, Address::ZERO, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn v07_and_v08_hashes_differ_for_same_packed_struct() {
        let v07 = user_op_hash(
            &UnsignedUserOperation::V07Packed { version: Version::V07, op: sample_packed() },
            Address::ZERO,
            1,
        );
        let v08 = user_op_hash(
            &UnsignedUserOperation::V07Packed { version: Version::V08, op: sample_packed() },
            Address::ZERO,
            1,
        );
        assert_ne!(v07, v08);
    }
}
