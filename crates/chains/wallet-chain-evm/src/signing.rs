//! Signature attachment, wire serialization, and txid (`spec.md` §4.6,
//! §4.7's state machine: `Signed(tx) -> Serialized(bytes)`).

use crate::error::EvmError;
use crate::rlp::Item;
use crate::types::{Eip1559Tx, Eip7702Tx, LegacyTx, SignedTransaction, UnsignedTransaction};
use wallet_crypto::curve::Signature;
use wallet_crypto::hashing::keccak256;

fn rec_id_to_y_parity(rec_id: u8) -> Result<u8, EvmError> {
    match rec_id {
        0 | 1 => Ok(rec_id),
        other => Err(EvmError::InvalidRecoveryId(other)),
    }
}

/// Attaches an ECDSA signature to an unsigned transaction, applying
/// EIP-155's `v = 35 + 2*chainId + recId` for legacy envelopes and the plain
/// `yParity` for typed envelopes.
pub fn attach_signature(
    tx: UnsignedTransaction,
    signature: &Signature,
) -> Result<SignedTransaction, EvmError> {
    let Signature::Ecdsa { r, s, rec_id } = signature else {
        return Err(EvmError::InvalidRecoveryId(0xff));
    };
    let y_parity = rec_id_to_y_parity(*rec_id)?;

    Ok(match tx {
        UnsignedTransaction::Legacy(legacy) => {
            let v = 35 + 2 * legacy.chain_id + y_parity as u64;
            SignedTransaction::Legacy { tx: legacy, v, r: *r, s: *s }
        }
        UnsignedTransaction::Eip1559(eip1559) => {
            SignedTransaction::Eip1559 { tx: eip1559, y_parity, r: *r, s: *s }
        }
        UnsignedTransaction::Eip7702(eip7702) => {
            SignedTransaction::Eip7702 { tx: eip7702, y_parity, r: *r, s: *s }
        }
    })
}

fn address_item(addr: Option<alloy_primitives::Address>) -> Item {
    match addr {
        Some(a) => Item::bytes(a.as_slice().to_vec()),
        None => Item::bytes(Vec::new()),
    }
}

fn legacy_signed_rlp(tx: &LegacyTx, v: u64, r: &[u8; 32], s: &[u8; 32]) -> Vec<u8> {
    crate::rlp::encode(&Item::List(vec![
        Item::uint(tx.nonce),
        Item::uint_be(&tx.gas_price.to_be_bytes::<32>()),
        Item::uint(tx.gas_limit),
        address_item(tx.to),
        Item::uint_be(&tx.value.to_be_bytes::<32>()),
        Item::bytes(tx.data.clone()),
        Item::uint(v),
        Item::uint_be(r),
        Item::uint_be(s),
    ]))
}

fn access_list_item(item: &crate::types::AccessListItem) -> Item {
    Item::List(vec![
        Item::bytes(item.address.as_slice().to_vec()),
        Item::List(item.storage_keys.iter().map(|k| Item::bytes(k.to_vec())).collect()),
    ])
}

fn eip1559_signed_rlp(tx: &Eip1559Tx, y_parity: u8, r: &[u8; 32], s: &[u8; 32]) -> Vec<u8> {
    let rlp = crate::rlp::encode(&Item::List(vec![
        Item::uint(tx.chain_id),
        Item::uint(tx.nonce),
        Item::uint_be(&tx.max_priority_fee_per_gas.to_be_bytes::<32>()),
        Item::uint_be(&tx.max_fee_per_gas.to_be_bytes::<32>()),
        Item::uint(tx.gas_limit),
        address_item(tx.to),
        Item::uint_be(&tx.value.to_be_bytes::<32>()),
        Item::bytes(tx.data.clone()),
        Item::List(tx.access_list.iter().map(access_list_item).collect()),
        Item::uint(y_parity as u64),
        Item::uint_be(r),
        Item::uint_be(s),
    ]));
    let mut out = Vec::with_capacity(1 + rlp.len());
    out.push(0x02);
    out.extend_from_slice(&rlp);
    out
}

fn authorization_item(auth: &crate::types::SignedAuthorization) -> Item {
    Item::List(vec![
        Item::uint(auth.chain_id),
        Item::bytes(auth.address.as_slice().to_vec()),
        Item::uint(auth.nonce),
        Item::uint(auth.y_parity as u64),
        Item::uint_be(&auth.r),
        Item::uint_be(&auth.s),
    ])
}

fn eip7702_signed_rlp(tx: &Eip7702Tx, y_parity: u8, r: &[u8; 32], s: &[u8; 32]) -> Vec<u8> {
    let rlp = crate::rlp::encode(&Item::List(vec![
        Item::uint(tx.chain_id),
        Item::uint(tx.nonce),
        Item::uint_be(&tx.max_priority_fee_per_gas.to_be_bytes::<32>()),
        Item::uint_be(&tx.max_fee_per_gas.to_be_bytes::<32>()),
        Item::uint(tx.gas_limit),
        address_item(tx.to),
        Item::uint_be(&tx.value.to_be_bytes::<32>()),
        Item::bytes(tx.data.clone()),
        Item::List(tx.access_list.iter().map(access_list_item).collect()),
        Item::List(tx.authorization_list.iter().map(authorization_item).collect()),
        Item::uint(y_parity as u64),
        Item::uint_be(r),
        Item::uint_be(s),
    ]));
    let mut out = Vec::with_capacity(1 + rlp.len());
    out.push(0x04);
    out.extend_from_slice(&rlp);
    out
}

/// Serializes a signed transaction to its wire bytes (the typed envelopes'
/// leading type byte included).
pub fn serialize(tx: &SignedTransaction) -> Vec<u8> {
    match tx {
        SignedTransaction::Legacy { tx, v, r, s } => legacy_signed_rlp(tx, *v, r, s),
        SignedTransaction::Eip1559 { tx, y_parity, r, s } => {
            eip1559_signed_rlp(tx, *y_parity, r, s)
        }
        SignedTransaction::Eip7702 { tx, y_parity, r, s } => {
            eip7702_signed_rlp(tx, *y_parity, r, s)
        }
    }
}

/// Computes the transaction hash (`keccak256` of the serialized wire form).
pub fn txid(tx: &SignedTransaction) -> [u8; 32] {
    keccak256(&serialize(tx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LegacyTx;
    use alloy_primitives::{Address, U256};

    fn sample_legacy() -> LegacyTx {
        LegacyTx {
            nonce: 0,
            gas_price: U256::from(1u64),
            gas_limit: 21_000,
            to: Some(Address::ZERO),
            value: U256::ZERO,
            data: Vec::new(),
            chain_id: 1,
        }
    }

    #[test]
    fn legacy_v_applies_eip155_formula() {
        let tx = UnsignedTransaction::Legacy(sample_legacy());
        let sig = Signature::Ecdsa { r: [1u8; 32], s: [2u8; 32], rec_id: 1 };
        let signed = attach_signature(tx, &sig).unwrap();
        match signed {
            SignedTransaction::Legacy { v, .. } => assert_eq!(v, 35 + 2 + 1),
            _ => panic!("expected legacy"),
        }
    }

    #[test]
    fn txid_is_deterministic_and_32_bytes() {
        let tx = UnsignedTransaction::Legacy(sample_legacy());
        let sig = Signature::Ecdsa { r: [1u8; 32], s: [2u8; 32], rec_id: 0 };
        let signed = attach_signature(tx, &sig).unwrap();
        let a = txid(&signed);
        let b = txid(&signed);
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn rejects_non_ecdsa_signature() {
        let tx = UnsignedTransaction::Legacy(sample_legacy());
        let sig = Signature::Ed25519([0u8; 64]);
        assert!(attach_signature(tx, &sig).is_err());
    }
}
