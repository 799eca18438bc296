//! Address derivation across every family (`spec.md` §4.4, §6's
//! `addresses(mnemonic, {paths}) -> {path -> address}`).
//!
//! The orchestrator never touches a private scalar directly; every address
//! is derived from the public key a [`crate::signer::KeyProvider`] reports.

use crate::signer::KeyProvider;
use wallet_address::bitcoin::Network as BitcoinNetwork;
use wallet_crypto::curve::{secp256k1_decompress, Curve};
use wallet_hd::DerivationPath;
use wallet_types::error::CoreError;

/// Which template to encode a Bitcoin address under. Bitcoin has no single
/// canonical address per key, unlike every other supported family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitcoinAddressKind {
    P2pkh,
    P2wpkh,
    P2tr,
}

/// A single address-derivation request (`spec.md` §6).
#[derive(Debug, Clone)]
pub enum AddressRequest {
    Evm { path: DerivationPath },
    Bitcoin { path: DerivationPath, kind: BitcoinAddressKind, network: BitcoinNetwork },
    Cosmos { path: DerivationPath, hrp: String },
    Solana { path: DerivationPath },
}

fn compressed_pubkey<P: KeyProvider>(
    provider: &P,
    path: &DerivationPath,
    curve: Curve,
) -> Result<Vec<u8>, CoreError> {
    let key_ref = provider
        .derive(path, curve)
        .map_err(|e| CoreError::InputValidation(format!("{:?}", e)))?;
    provider
        .public_key(&key_ref, curve)
        .map_err(|e| CoreError::Crypto(format!("{:?}", e)))
}

/// Derives the address for a single request.
pub fn derive_address<P: KeyProvider>(
    provider: &P,
    request: &AddressRequest,
) -> Result<String, CoreError> {
    match request {
        AddressRequest::Evm { path } => {
            let compressed = compressed_pubkey(provider, path, Curve::Secp256k1)?;
            let compressed: [u8; 33] = compressed
                .try_into()
                .map_err(|_| CoreError::Crypto("expected 33-byte compressed public key".into()))?;
            let uncompressed = secp256k1_decompress(&compressed)
                .map_err(|e| CoreError::Crypto(e.to_string()))?;
            let addr = wallet_address::evm::from_uncompressed_public_key(&uncompressed);
            Ok(wallet_address::evm::to_checksum(&addr))
        }
        AddressRequest::Bitcoin { path, kind, network } => {
            let compressed = compressed_pubkey(provider, path, Curve::Secp256k1)?;
            let compressed: [u8; 33] = compressed
                .try_into()
                .map_err(|_| CoreError::Crypto("expected 33-byte compressed public key".into()))?;
            match kind {
                BitcoinAddressKind::P2pkh => {
                    let hash = wallet_crypto::hashing::hash160(&compressed);
                    Ok(wallet_address::bitcoin::p2pkh(&hash, *network))
                }
                BitcoinAddressKind::P2wpkh => {
                    let hash = wallet_crypto::hashing::hash160(&compressed);
                    wallet_address::bitcoin::p2wpkh(&hash, *network)
                        .map_err(|e| CoreError::Serialization(e.to_string()))
                }
                BitcoinAddressKind::P2tr => {
                    let mut internal_key = [0u8; 32];
                    internal_key.copy_from_slice(&compressed[1..33]);
                    let (output_key, _parity) =
                        wallet_chain_bitcoin::taproot::tap_tweak(&internal_key, None)
                            .map_err(|e| CoreError::Crypto(e.to_string()))?;
                    wallet_address::bitcoin::p2tr(&output_key, *network)
                        .map_err(|e| CoreError::Serialization(e.to_string()))
                }
            }
        }
        AddressRequest::Cosmos { path, hrp } => {
            let compressed = compressed_pubkey(provider, path, Curve::Secp256k1)?;
            let compressed: [u8; 33] = compressed
                .try_into()
                .map_err(|_| CoreError::Crypto("expected 33-byte compressed public key".into()))?;
            let hash = wallet_address::cosmos::from_compressed_public_key(&compressed);
            wallet_address::cosmos::encode(hrp, &hash).map_err(|e| CoreError::Serialization(e.to_string()))
        }
        AddressRequest::Solana { path } => {
            let pubkey = compressed_pubkey(provider, path, Curve::Ed25519)?;
            let pubkey: [u8; 32] = pubkey
                .try_into()
                .map_err(|_| CoreError::Crypto("expected 32-byte Ed25519 public key".into()))?;
            Ok(wallet_address::solana::encode(&pubkey))
        }
    }
}

/// Derives every requested address, in request order.
pub fn derive_addresses<P: KeyProvider>(
    provider: &P,
    requests: &[AddressRequest],
) -> Result<Vec<String>, CoreError> {
    requests.iter().map(|r| derive_address(provider, r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::LocalSigner;

    fn signer() -> LocalSigner {
        LocalSigner::new([11u8; 64])
    }

    fn path(s: &str) -> DerivationPath {
        s.parse().unwrap()
    }

    #[test]
    fn evm_address_is_a_checksummed_0x_string() {
        let addr = derive_address(
            &signer(),
            &AddressRequest::Evm { path: path("m/44'/60'/0'/0/0") },
        )
        .unwrap();
        assert!(addr.starts_with("0x"));
        assert_eq!(addr.len(), 42);
    }

    #[test]
    fn bitcoin_addresses_differ_by_template_for_the_same_key() {
        let p = path("m/84'/0'/0'/0/0");
        let p2pkh = derive_address(
            &signer(),
            &AddressRequest::Bitcoin { path: p.clone(), kind: BitcoinAddressKind::P2pkh, network: BitcoinNetwork::Mainnet },
        )
        .unwrap();
        let p2wpkh = derive_address(
            &signer(),
            &AddressRequest::Bitcoin { path: p.clone(), kind: BitcoinAddressKind::P2wpkh, network: BitcoinNetwork::Mainnet },
        )
        .unwrap();
        let p2tr = derive_address(
            &signer(),
            &AddressRequest::Bitcoin { path: p, kind: BitcoinAddressKind::P2tr, network: BitcoinNetwork::Mainnet },
        )
        .unwrap();
        assert!(p2pkh.starts_with('1'));
        assert!(p2wpkh.starts_with("bc1q"));
        assert!(p2tr.starts_with("bc1p"));
        assert_ne!(p2pkh, p2wpkh);
        assert_ne!(p2wpkh, p2tr);
    }

    #[test]
    fn cosmos_address_uses_the_requested_hrp() {
        let addr = derive_address(
            &signer(),
            &AddressRequest::Cosmos { path: path("m/44'/118'/0'/0/0"), hrp: "cosmos".into() },
        )
        .unwrap();
        assert!(addr.starts_with("cosmos1"));
    }

    #[test]
    fn solana_address_is_base58_with_no_zero_or_uppercase_o() {
        let addr = derive_address(&signer(), &AddressRequest::Solana { path: path("m/44'/501'/0'") }).unwrap();
        assert!(!addr.is_empty());
        assert!(addr.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(!addr.contains('0') && !addr.contains('O') && !addr.contains('I') && !addr.contains('l'));
    }

    #[test]
    fn derive_addresses_preserves_request_order() {
        let requests = vec![
            AddressRequest::Evm { path: path("m/44'/60'/0'/0/0") },
            AddressRequest::Solana { path: path("m/44'/501'/0'") },
        ];
        let addrs = derive_addresses(&signer(), &requests).unwrap();
        assert_eq!(addrs.len(), 2);
        assert!(addrs[0].starts_with("0x"));
        assert!(!addrs[1].starts_with("0x"));
    }

    // The standard Trezor/BIP-39 test mnemonic, used by golden vectors across
    // the corpus (e.g. `nconsigny-vanadium`'s `ethapp` golden_vectors.rs).
    const GOLDEN_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn golden_signer() -> LocalSigner {
        let mnemonic = wallet_hd::MnemonicPhrase::parse(GOLDEN_MNEMONIC).unwrap();
        LocalSigner::new(mnemonic.to_seed(""))
    }

    #[test]
    fn golden_vector_evm_account_zero_address() {
        let addr = derive_address(
            &golden_signer(),
            &AddressRequest::Evm { path: path("m/44'/60'/0'/0/0") },
        )
        .unwrap();
        assert_eq!(addr, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    }

    #[test]
    fn golden_vector_bitcoin_p2wpkh_account_zero_address() {
        let addr = derive_address(
            &golden_signer(),
            &AddressRequest::Bitcoin {
                path: path("m/84'/0'/0'/0/0"),
                kind: BitcoinAddressKind::P2wpkh,
                network: BitcoinNetwork::Mainnet,
            },
        )
        .unwrap();
        assert_eq!(addr, "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
    }

    #[test]
    fn golden_vector_solana_address_is_deterministic_and_well_formed() {
        let request = AddressRequest::Solana { path: path("m/44'/501'/0'/0'") };
        let addr_a = derive_address(&golden_signer(), &request).unwrap();
        let addr_b = derive_address(&golden_signer(), &request).unwrap();
        assert_eq!(addr_a, addr_b);
        assert_eq!(wallet_address::solana::decode(&addr_a).unwrap().len(), 32);
    }
}
