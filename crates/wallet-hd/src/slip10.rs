//! SLIP-0010 Ed25519 HD derivation (`spec.md` §4.3).
//!
//! No crate in the corpus implements SLIP-0010 Ed25519 derivation, so this is
//! hand-rolled from the SLIP-0010 reference algorithm: master key label
//! `"ed25519 seed"`, children derived by HMAC-SHA512 keyed on the parent
//! chain code. Only hardened derivation is defined for this curve; a
//! non-hardened step fails with [`HdError::UnsupportedDerivation`].

use crate::error::HdError;
use crate::node::KeyNode;
use crate::path::DerivationPath;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use wallet_crypto::curve::Curve;
use wallet_crypto::hashing::sha256;

type HmacSha512 = Hmac<Sha512>;

const MASTER_LABEL: &[u8] = b"ed25519 seed";

fn hmac_sha512(key: &[u8], data: &[u8]) -> [u8; 64] {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

fn master_node(seed: &[u8]) -> KeyNode {
    let i = hmac_sha512(MASTER_LABEL, seed);
    let mut private_key = [0u8; 32];
    let mut chain_code = [0u8; 32];
    private_key.copy_from_slice(&i[..32]);
    chain_code.copy_from_slice(&i[32..]);
    KeyNode {
        curve: Curve::Ed25519,
        private_key,
        chain_code,
        depth: 0,
        parent_fingerprint: [0u8; 4],
        child_number: 0,
    }
}

fn fingerprint(parent: &KeyNode) -> [u8; 4] {
    let public_key = wallet_crypto::curve::ed25519_public_key(&parent.private_key);
    let digest = sha256(&public_key);
    [digest[0], digest[1], digest[2], digest[3]]
}

fn child_node(parent: &KeyNode, raw_index: u32) -> Result<KeyNode, HdError> {
    if raw_index & 0x8000_0000 == 0 {
        return Err(HdError::UnsupportedDerivation(
            "SLIP-0010 Ed25519 only supports hardened derivation".to_string(),
        ));
    }
    let mut data = Vec::with_capacity(1 + 32 + 4);
    data.push(0u8);
    data.extend_from_slice(&parent.private_key);
    data.extend_from_slice(&raw_index.to_be_bytes());
    let i = hmac_sha512(&parent.chain_code, &data);
    let mut private_key = [0u8; 32];
    let mut chain_code = [0u8; 32];
    private_key.copy_from_slice(&i[..32]);
    chain_code.copy_from_slice(&i[32..]);
    Ok(KeyNode {
        curve: Curve::Ed25519,
        private_key,
        chain_code,
        depth: parent.depth + 1,
        parent_fingerprint: fingerprint(parent),
        child_number: raw_index,
    })
}

/// Derives an Ed25519 `KeyNode` from a BIP-39 seed by walking `path`. Every
/// step in `path` must be hardened.
pub fn derive(seed: &[u8; 64], path: &DerivationPath) -> Result<KeyNode, HdError> {
    let mut node = master_node(seed);
    for step in path.steps() {
        node = child_node(&node, step.to_raw_index())?;
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEED: [u8; 64] = [0x42; 64];

    #[test]
    fn derives_deterministic_master_node() {
        let a = master_node(&TEST_SEED);
        let b = master_node(&TEST_SEED);
        assert_eq!(a.private_key, b.private_key);
        assert_eq!(a.chain_code, b.chain_code);
    }

    #[test]
    fn hardened_path_derives_successfully() {
        let path: DerivationPath = "m/44'/501'/0'".parse().unwrap();
        let node = derive(&TEST_SEED, &path).unwrap();
        assert_eq!(node.depth, 3);
        assert_eq!(node.child_number, 0x8000_0000);
    }

    #[test]
    fn non_hardened_step_is_rejected() {
        let path: DerivationPath = "m/44'/501'/0".parse().unwrap();
        let err = derive(&TEST_SEED, &path).unwrap_err();
        assert!(matches!(err, HdError::UnsupportedDerivation(_)));
    }

    #[test]
    fn different_paths_give_different_keys() {
        let path_a: DerivationPath = "m/44'/501'/0'".parse().unwrap();
        let path_b: DerivationPath = "m/44'/501'/1'".parse().unwrap();
        let node_a = derive(&TEST_SEED, &path_a).unwrap();
        let node_b = derive(&TEST_SEED, &path_b).unwrap();
        assert_ne!(node_a.private_key, node_b.private_key);
    }
}
