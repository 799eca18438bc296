//! EVM signing-hash construction (`spec.md` §4.7).

use crate::rlp::Item;
use crate::types::{
    AccessListItem, Eip1559Tx, Eip7702Tx, LegacyTx, SignedAuthorization, UnsignedAuthorization,
    UnsignedTransaction,
};
use wallet_crypto::hashing::keccak256;

fn address_item(addr: Option<alloy_primitives::Address>) -> Item {
    match addr {
        Some(a) => Item::bytes(a.as_slice().to_vec()),
        None => Item::bytes(Vec::new()),
    }
}

fn access_list_item(item: &AccessListItem) -> Item {
    Item::List(vec![
        Item::bytes(item.address.as_slice().to_vec()),
        Item::List(item.storage_keys.iter().map(|k| Item::bytes(k.to_vec())).collect()),
    ])
}

fn access_list(list: &[AccessListItem]) -> Item {
    Item::List(list.iter().map(access_list_item).collect())
}

fn authorization_item(auth: &SignedAuthorization) -> Item {
    Item::List(vec![
        Item::uint(auth.chain_id),
        Item::bytes(auth.address.as_slice().to_vec()),
        Item::uint(auth.nonce),
        Item::uint(auth.y_parity as u64),
        Item::uint_be(&auth.r),
        Item::uint_be(&auth.s),
    ])
}

fn legacy_payload(tx: &LegacyTx, chain_id_suffix: bool) -> Item {
    let mut fields = vec![
        Item::uint(tx.nonce),
        Item::uint_be(&tx.gas_price.to_be_bytes::<32>()),
        Item::uint(tx.gas_limit),
        address_item(tx.to),
        Item::uint_be(&tx.value.to_be_bytes::<32>()),
        Item::bytes(tx.data.clone()),
    ];
    if chain_id_suffix {
        fields.push(Item::uint(tx.chain_id));
        fields.push(Item::uint(0));
        fields.push(Item::uint(0));
    }
    Item::List(fields)
}

fn eip1559_payload(tx: &Eip1559Tx) -> Item {
    Item::List(vec![
        Item::uint(tx.chain_id),
        Item::uint(tx.nonce),
        Item::uint_be(&tx.max_priority_fee_per_gas.to_be_bytes::<32>()),
        Item::uint_be(&tx.max_fee_per_gas.to_be_bytes::<32>()),
        Item::uint(tx.gas_limit),
        address_item(tx.to),
        Item::uint_be(&tx.value.to_be_bytes::<32>()),
        Item::bytes(tx.data.clone()),
        access_list(&tx.access_list),
    ])
}

fn eip7702_payload(tx: &Eip7702Tx) -> Item {
    Item::List(vec![
        Item::uint(tx.chain_id),
        Item::uint(tx.nonce),
        Item::uint_be(&tx.max_priority_fee_per_gas.to_be_bytes::<32>()),
        Item::uint_be(&tx.max_fee_per_gas.to_be_bytes::<32>()),
        Item::uint(tx.gas_limit),
        address_item(tx.to),
        Item::uint_be(&tx.value.to_be_bytes::<32>()),
        Item::bytes(tx.data.clone()),
        access_list(&tx.access_list),
        Item::List(tx.authorization_list.iter().map(authorization_item).collect()),
    ])
}

/// Computes the 32-byte signing hash for `tx` (`spec.md` §4.7's EVM legacy
/// and typed sighash formulas).
pub fn preimage(tx: &UnsignedTransaction) -> [u8; 32] {
    match tx {
        UnsignedTransaction::Legacy(legacy) => {
            let rlp = crate::rlp::encode(&legacy_payload(legacy, true));
            keccak256(&rlp)
        }
        UnsignedTransaction::Eip1559(eip1559) => {
            let rlp = crate::rlp::encode(&eip1559_payload(eip1559));
            let mut buf = Vec::with_capacity(1 + rlp.len());
            buf.push(0x02);
            buf.extend_from_slice(&rlp);
            keccak256(&buf)
        }
        UnsignedTransaction::Eip7702(eip7702) => {
            let rlp = crate::rlp::encode(&eip7702_payload(eip7702));
            let mut buf = Vec::with_capacity(1 + rlp.len());
            buf.push(0x04);
            buf.extend_from_slice(&rlp);
            keccak256(&buf)
        }
    }
}

/// Computes an EIP-7702 authorization's own signing hash:
/// `keccak256(0x05 || rlp([chainId, address, nonce]))`.
pub fn authorization_preimage(auth: &UnsignedAuthorization) -> [u8; 32] {
    let rlp = crate::rlp::encode(&Item::List(vec![
        Item::uint(auth.chain_id),
        Item::bytes(auth.address.as_slice().to_vec()),
        Item::uint(auth.nonce),
    ]));
    let mut buf = Vec::with_capacity(1 + rlp.len());
    buf.push(0x05);
    buf.extend_from_slice(&rlp);
    keccak256(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LegacyTx;
    use alloy_primitives::{Address, U256};

    #[test]
    fn legacy_preimage_is_deterministic() {
        let tx = LegacyTx {
            nonce: 9,
            gas_price: U256::from(20_000_000_000u64),
            gas_limit: 21_000,
            to: Some(Address::ZERO),
            value: U256::from(1_000_000_000_000_000_000u64),
            data: Vec::new(),
            chain_id: 1,
        };
        let a = preimage(&UnsignedTransaction::Legacy(tx.clone()));
        let b = preimage(&UnsignedTransaction::Legacy(tx));
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn authorization_preimage_uses_0x05_prefix() {
        let auth = UnsignedAuthorization { chain_id: 1, address: Address::ZERO, nonce: 0 };
        let digest = authorization_preimage(&auth);
        assert_eq!(digest.len(), 32);
    }
}
