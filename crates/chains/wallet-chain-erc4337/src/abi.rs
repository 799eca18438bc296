//! Minimal ABI word encoding for the EntryPoint's `pack()`/`getUserOpHash()`
//! functions (`spec.md` §4.7). Every field `pack()` feeds to `abi.encode` is
//! a static type (`address`, `uint256`, `bytes32`) or a `bytes32` digest of a
//! dynamic field, so the whole tuple is just a concatenation of 32-byte words
//! — no dynamic-type head/tail ABI encoding is needed here.

use alloy_primitives::{Address, U256};
use wallet_crypto::hashing::keccak256;

/// Left-pads an address into a 32-byte ABI word.
pub fn address_word(addr: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(addr.as_slice());
    word
}

/// A `uint256` as a 32-byte big-endian ABI word.
pub fn uint_word(value: U256) -> [u8; 32] {
    value.to_be_bytes::<32>()
}

/// `keccak256` of a dynamic `bytes` field, the digest `pack()` substitutes
/// for the field itself (Solidity's `calldataKeccak`).
pub fn bytes_digest(data: &[u8]) -> [u8; 32] {
    keccak256(data)
}

/// Concatenates 32-byte ABI words and hashes the result.
pub fn keccak_words(words: &[[u8; 32]]) -> [u8; 32] {
    let mut buf = Vec::with_capacity(words.len() * 32);
    for word in words {
        buf.extend_from_slice(word);
    }
    keccak256(&buf)
}
