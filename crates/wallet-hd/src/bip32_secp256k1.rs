//! BIP-32 secp256k1 HD derivation, wrapping the `bip32` crate
//! (`spec.md` §4.3: `KeyNode` carries a private scalar, a chain code, a
//! depth, a parent fingerprint, a child index, and a curve tag).

use crate::error::HdError;
use crate::node::KeyNode;
use crate::path::DerivationPath as OurPath;
use bip32::{Seed, XPrv};
use std::str::FromStr;
use wallet_crypto::curve::Curve;

/// Derives a secp256k1 `KeyNode` from a BIP-39 seed by walking `path`.
pub fn derive(seed: &[u8; 64], path: &OurPath) -> Result<KeyNode, HdError> {
    let seed = Seed::new(*seed);
    let bip32_path = bip32::DerivationPath::from_str(&path.to_string())
        .map_err(|e| HdError::Bip32(e.to_string()))?;
    let xprv = XPrv::derive_from_path(seed.as_bytes(), &bip32_path)
        .map_err(|e| HdError::Bip32(e.to_string()))?;

    let private_key: [u8; 32] = xprv.to_bytes();
    let attrs = xprv.attrs();
    let chain_code: [u8; 32] = attrs.chain_code;
    let child_number = path.steps().last().map(|s| s.to_raw_index()).unwrap_or(0);

    Ok(KeyNode {
        curve: Curve::Secp256k1,
        private_key,
        chain_code,
        depth: attrs.depth,
        parent_fingerprint: attrs.parent_fingerprint,
        child_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::MnemonicPhrase;

    const TEST_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn derives_deterministic_evm_account_zero() {
        let mnemonic = MnemonicPhrase::parse(TEST_PHRASE).unwrap();
        let seed = mnemonic.to_seed("");
        let path: OurPath = "m/44'/60'/0'/0/0".parse().unwrap();
        let node_a = derive(&seed, &path).unwrap();
        let node_b = derive(&seed, &path).unwrap();
        assert_eq!(node_a.private_key, node_b.private_key);
        assert_eq!(node_a.curve, Curve::Secp256k1);
    }

    #[test]
    fn different_indices_give_different_keys() {
        let mnemonic = MnemonicPhrase::parse(TEST_PHRASE).unwrap();
        let seed = mnemonic.to_seed("");
        let path0: OurPath = "m/44'/60'/0'/0/0".parse().unwrap();
        let path1: OurPath = "m/44'/60'/0'/0/1".parse().unwrap();
        let node0 = derive(&seed, &path0).unwrap();
        let node1 = derive(&seed, &path1).unwrap();
        assert_ne!(node0.private_key, node1.private_key);
    }
}
