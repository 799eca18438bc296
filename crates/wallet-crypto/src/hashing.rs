//! Pure hash functions (`spec.md` §4.2).

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// SHA-256.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// `sha256(sha256(data))`, as used by Bitcoin for checksums and sighashes.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Keccak-256 (the original Keccak padding, not NIST SHA3-256), as used by
/// every EVM hash: addresses, EIP-55 checksums, RLP sighashes, txids.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// RIPEMD-160.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// `ripemd160(sha256(data))`, Bitcoin's `HASH160`, used for P2PKH/P2SH/P2WPKH
/// scripts.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// BLAKE2b with a 256-bit (32-byte) digest, used by Cardano-style
/// BLAKE2b-224/256 address hashing in the address-codec layer.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    use blake2::Blake2b;
    use blake2::digest::consts::U32;
    use blake2::digest::Digest as _;
    Blake2b::<U32>::digest(data).into()
}

/// BLAKE2b with a 224-bit (28-byte) digest, used for Cardano key hashes
/// (CIP-19).
pub fn blake2b_224(data: &[u8]) -> [u8; 28] {
    use blake2::Blake2b;
    use blake2::digest::consts::U28;
    use blake2::digest::Digest as _;
    Blake2b::<U28>::digest(data).into()
}

/// BIP-340's tagged hash: `sha256(sha256(tag) || sha256(tag) || msg)`.
///
/// Used to domain-separate every Taproot-related hash (`TapLeaf`, `TapTweak`,
/// `TapSighash`) so that a hash computed for one purpose can never collide
/// with a hash computed for another.
pub fn tagged_hash(tag: &str, msg: &[u8]) -> [u8; 32] {
    let tag_hash = sha256(tag.as_bytes());
    let mut preimage = Vec::with_capacity(64 + msg.len());
    preimage.extend_from_slice(&tag_hash);
    preimage.extend_from_slice(&tag_hash);
    preimage.extend_from_slice(msg);
    sha256(&preimage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak256_is_deterministic_and_32_bytes() {
        let a = keccak256(b"hello");
        let b = keccak256(b"hello");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert_ne!(a, keccak256(b"world"));
    }

    #[test]
    fn hash160_matches_ripemd_of_sha256() {
        let data = b"hello world";
        let expected = ripemd160(&sha256(data));
        assert_eq!(hash160(data), expected);
    }

    #[test]
    fn tagged_hash_is_deterministic_and_domain_separated() {
        let a = tagged_hash("TapLeaf", b"abc");
        let b = tagged_hash("TapTweak", b"abc");
        assert_ne!(a, b);
        assert_eq!(a, tagged_hash("TapLeaf", b"abc"));
    }
}
