//! `TxIntent` -> `UnsignedUserOperation` (`spec.md` §4.6's ERC-4337 builder).
//!
//! v0.7 packing concatenates 16-byte big-endian halves: `accountGasLimits =
//! verificationGasLimit ‖ callGasLimit`, `gasFees = maxPriorityFeePerGas ‖
//! maxFeePerGas`, `paymasterAndData = paymaster ‖ u128(paymasterVerificationGasLimit)
//! ‖ u128(paymasterPostOpGasLimit) ‖ paymasterData` (empty with no paymaster),
//! `initCode = factory ‖ factoryData` (empty with no factory).

use crate::error::Erc4337Error;
use crate::types::{PackedUserOperation, TxIntent, UnsignedUserOperation, V06UserOperation, Version};
use alloy_primitives::U256;

fn u128_be_half(value: U256) -> [u8; 16] {
    let bytes = value.to_be_bytes::<32>();
    let mut half = [0u8; 16];
    half.copy_from_slice(&bytes[16..]);
    half
}

fn pack_two_halves(hi: U256, lo: U256) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[..16].copy_from_slice(&u128_be_half(hi));
    out[16..].copy_from_slice(&u128_be_half(lo));
    out
}

fn pack_init_code(factory: Option<alloy_primitives::Address>, factory_data: &[u8]) -> Vec<u8> {
    match factory {
        Some(addr) => {
            let mut out = Vec::with_capacity(20 + factory_data.len());
            out.extend_from_slice(addr.as_slice());
            out.extend_from_slice(factory_data);
            out
        }
        None => Vec::new(),
    }
}

fn pack_paymaster_and_data(
    paymaster: Option<alloy_primitives::Address>,
    verification_gas_limit: U256,
    post_op_gas_limit: U256,
    data: &[u8],
) -> Vec<u8> {
    match paymaster {
        Some(addr) => {
            let mut out = Vec::with_capacity(20 + 16 + 16 + data.len());
            out.extend_from_slice(addr.as_slice());
            out.extend_from_slice(&u128_be_half(verification_gas_limit));
            out.extend_from_slice(&u128_be_half(post_op_gas_limit));
            out.extend_from_slice(data);
            out
        }
        None => Vec::new(),
    }
}

/// Builds an [`UnsignedUserOperation`] for the requested EntryPoint version.
/// `target_version` selects the hashing rule for a v0.7-shaped intent (v0.7
/// packed-ABI vs. v0.8 EIP-712); it is ignored when `intent.v06` is set.
pub fn build(
    intent: TxIntent,
    target_version: Version,
) -> Result<UnsignedUserOperation, Erc4337Error> {
    match (intent.v06, intent.v07) {
        (Some(_), Some(_)) => Err(Erc4337Error::BothVersionsSet),
        (None, None) => Err(Erc4337Error::NeitherVersionSet),
        (Some(v06), None) => Ok(UnsignedUserOperation::V06(V06UserOperation {
            sender: intent.sender,
            nonce: intent.nonce,
            init_code: v06.init_code,
            call_data: intent.call_data,
            call_gas_limit: intent.call_gas_limit,
            verification_gas_limit: intent.verification_gas_limit,
            pre_verification_gas: intent.pre_verification_gas,
            max_fee_per_gas: intent.max_fee_per_gas,
            max_priority_fee_per_gas: intent.max_priority_fee_per_gas,
            paymaster_and_data: v06.paymaster_and_data,
        })),
        (None, Some(v07)) => {
            let account_gas_limits =
                pack_two_halves(intent.verification_gas_limit, intent.call_gas_limit);
            let gas_fees =
                pack_two_halves(intent.max_priority_fee_per_gas, intent.max_fee_per_gas);
            let init_code = pack_init_code(v07.factory, &v07.factory_data);
            let paymaster_and_data = pack_paymaster_and_data(
                v07.paymaster,
                v07.paymaster_verification_gas_limit,
                v07.paymaster_post_op_gas_limit,
                &v07.paymaster_data,
            );
            Ok(UnsignedUserOperation::V07Packed {
                version: target_version,
                op: PackedUserOperation {
                    sender: intent.sender,
                    nonce: intent.nonce,
                    init_code,
                    call_data: intent.call_data,
                    account_gas_limits,
                    pre_verification_gas: intent.pre_verification_gas,
                    gas_fees,
                    paymaster_and_data,
                },
            })
        }
    }
}
