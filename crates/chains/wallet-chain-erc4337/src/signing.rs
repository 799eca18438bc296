//! Signature attachment and minimal RPC-JSON-shaped hex serialization
//! (`spec.md` §4.8's `signed -> serialized` step, §6's ERC-4337 RPC JSON
//! convention).

use crate::error::Erc4337Error;
use crate::types::{SignedUserOperation, UnsignedUserOperation};
use wallet_crypto::curve::Signature;

/// Attaches a 65-byte `r || s || v` signature to the trailing `signature`
/// field (`v = recId + 27`, the same convention `personal_sign` uses).
pub fn attach_signature(
    op: UnsignedUserOperation,
    signature: &Signature,
) -> Result<SignedUserOperation, Erc4337Error> {
    let Signature::Ecdsa { r, s, rec_id } = signature else {
        return Err(Erc4337Error::InvalidRecoveryId(0xff));
    };
    if *rec_id > 1 {
        return Err(Erc4337Error::InvalidRecoveryId(*rec_id));
    }
    let mut bytes = Vec::with_capacity(65);
    bytes.extend_from_slice(r);
    bytes.extend_from_slice(s);
    bytes.push(rec_id + 27);
    Ok(SignedUserOperation { op, signature: bytes })
}

fn hex0x(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

fn hex0x_minimal(value: &alloy_primitives::U256) -> String {
    if value.is_zero() {
        return "0x0".to_string();
    }
    let bytes = value.to_be_bytes::<32>();
    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(31);
    let trimmed = hex::encode(&bytes[first_nonzero..]);
    format!("0x{}", trimmed.trim_start_matches('0'))
}

/// Renders a signed `UserOperation` as the `0x`-prefixed hex fields the
/// `eth_sendUserOperation` RPC method expects (integers minimal hex, bytes
/// lowercase full-width hex).
pub fn serialize(signed: &SignedUserOperation) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    match &signed.op {
        UnsignedUserOperation::V06(op) => {
            fields.push(("sender", hex0x(op.sender.as_slice())));
            fields.push(("nonce", hex0x_minimal(&op.nonce)));
            fields.push(("initCode", hex0x(&op.init_code)));
            fields.push(("callData", hex0x(&op.call_data)));
            fields.push(("callGasLimit", hex0x_minimal(&op.call_gas_limit)));
            fields.push(("verificationGasLimit", hex0x_minimal(&op.verification_gas_limit)));
            fields.push(("preVerificationGas", hex0x_minimal(&op.pre_verification_gas)));
            fields.push(("maxFeePerGas", hex0x_minimal(&op.max_fee_per_gas)));
            fields.push(("maxPriorityFeePerGas", hex0x_minimal(&op.max_priority_fee_per_gas)));
            fields.push(("paymasterAndData", hex0x(&op.paymaster_and_data)));
        }
        UnsignedUserOperation::V07Packed { op, .. } => {
            fields.push(("sender", hex0x(op.sender.as_slice())));
            fields.push(("nonce", hex0x_minimal(&op.nonce)));
            fields.push(("initCode", hex0x(&op.init_code)));
            fields.push(("callData", hex0x(&op.call_data)));
            fields.push(("accountGasLimits", hex0x(&op.account_gas_limits)));
            fields.push(("preVerificationGas", hex0x_minimal(&op.pre_verification_gas)));
            fields.push(("gasFees", hex0x(&op.gas_fees)));
            fields.push(("paymasterAndData", hex0x(&op.paymaster_and_data)));
        }
    }
    fields.push(("signature", hex0x(&signed.signature)));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PackedUserOperation, Version};
    use alloy_primitives::{Address, U256};

    fn sample_packed_op() -> UnsignedUserOperation {
        UnsignedUserOperation::V07Packed {
            version: Version::V07,
            op: PackedUserOperation {
                sender: Address::ZERO,
                nonce: U256::from(5u64),
                init_code: vec![],
                call_data: vec![0xaa],
                account_gas_limits: [0u8; 32],
                pre_verification_gas: U256::from(0u64),
                gas_fees: [0u8; 32],
                paymaster_and_data: vec![],
            },
        }
    }

    #[test]
    fn attach_signature_applies_27_offset_to_recovery_id() {
        let signed = attach_signature(
            sample_packed_op(),
            &Signature::Ecdsa { r: [1u8; 32], s: [2u8; 32], rec_id: 1 },
        )
        .unwrap();
        assert_eq!(signed.signature.len(), 65);
        assert_eq!(signed.signature[64], 28);
    }

    #[test]
    fn attach_signature_rejects_non_ecdsa() {
        let result = attach_signature(sample_packed_op(), &Signature::Ed25519([0u8; 64]));
        assert!(result.is_err());
    }

    #[test]
    fn serialize_renders_minimal_hex_nonce_and_full_width_bytes() {
        let signed = attach_signature(
            sample_packed_op(),
            &Signature::Ecdsa { r: [0u8; 32], s: [0u8; 32], rec_id: 0 },
        )
        .unwrap();
        let fields = serialize(&signed);
        let nonce = fields.iter().find(|(k, _)| *k == "nonce").unwrap();
        assert_eq!(nonce.1, "0x5");
        let account_gas_limits = fields.iter().find(|(k, _)| *k == "accountGasLimits").unwrap();
        assert_eq!(account_gas_limits.1, format!("0x{}", "00".repeat(32)));
    }
}
