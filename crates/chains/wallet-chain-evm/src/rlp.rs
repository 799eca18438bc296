//! RLP encoding (`spec.md` §4.6), via `alloy_rlp`'s `Encodable`/`Header`
//! primitives — the same length-prefix mechanics `alloy-consensus`'s own
//! typed envelopes (`TxLegacy`, `TxEip1559`, ...) encode through, without
//! pulling in a full envelope type this crate's external-signer
//! architecture has no use for.

use alloy_rlp::{Encodable, Header};
use wallet_types::primitives::minimal_be;

/// An RLP value: either a byte string or a list of further items.
pub enum Item {
    Bytes(Vec<u8>),
    List(Vec<Item>),
}

impl Item {
    /// A byte string item from raw bytes.
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Item::Bytes(b.into())
    }

    /// A byte string item holding the minimal big-endian encoding of `v`
    /// (zero encodes as the empty string, matching RLP's canonical integer
    /// form).
    pub fn uint(v: u64) -> Self {
        Item::Bytes(minimal_be(v))
    }

    /// A byte string item holding the minimal big-endian encoding of a
    /// 256-bit value already supplied as big-endian bytes.
    pub fn uint_be(bytes_be: &[u8]) -> Self {
        let mut start = 0;
        while start < bytes_be.len() && bytes_be[start] == 0 {
            start += 1;
        }
        Item::Bytes(bytes_be[start..].to_vec())
    }
}

fn encode_into(item: &Item, out: &mut Vec<u8>) {
    match item {
        Item::Bytes(b) => b.as_slice().encode(out),
        Item::List(items) => {
            let mut payload = Vec::new();
            for it in items {
                encode_into(it, &mut payload);
            }
            Header { list: true, payload_length: payload.len() }.encode(out);
            out.extend_from_slice(&payload);
        }
    }
}

/// Encodes a single RLP item into its wire bytes.
pub fn encode(item: &Item) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(item, &mut out);
    out
}

/// Encodes a top-level list of items, the shape every EVM RLP structure in
/// this crate uses.
pub fn encode_list(items: Vec<Item>) -> Vec<u8> {
    encode(&Item::List(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_empty_string() {
        assert_eq!(encode(&Item::bytes(Vec::new())), vec![0x80]);
    }

    #[test]
    fn encodes_single_small_byte_as_itself() {
        assert_eq!(encode(&Item::bytes(vec![0x01])), vec![0x01]);
    }

    #[test]
    fn encodes_single_byte_ge_0x80_with_prefix() {
        assert_eq!(encode(&Item::bytes(vec![0x80])), vec![0x81, 0x80]);
    }

    #[test]
    fn encodes_short_string() {
        assert_eq!(encode(&Item::bytes(b"dog".to_vec())), vec![0x83, b'd', b'o', b'g']);
    }

    #[test]
    fn encodes_empty_list() {
        assert_eq!(encode(&Item::List(vec![])), vec![0xc0]);
    }

    #[test]
    fn encodes_list_of_strings() {
        let item = Item::List(vec![Item::bytes(b"cat".to_vec()), Item::bytes(b"dog".to_vec())]);
        assert_eq!(
            encode(&item),
            vec![0xc8, 0x83, b'c', b'a', b't', 0x83, b'd', b'o', b'g']
        );
    }

    #[test]
    fn uint_zero_encodes_as_empty_string() {
        assert_eq!(encode(&Item::uint(0)), vec![0x80]);
    }

    #[test]
    fn long_string_uses_length_of_length_prefix() {
        let data = vec![b'a'; 56];
        let encoded = encode(&Item::bytes(data.clone()));
        assert_eq!(encoded[0], 0xb7 + 1);
        assert_eq!(encoded[1], 56);
        assert_eq!(&encoded[2..], &data[..]);
    }
}
