//! Bitcoin addresses: Base58Check (P2PKH/P2SH) and Bech32/Bech32m segwit
//! (P2WPKH/P2TR) (`spec.md` §4.4).

use crate::bech32;
use crate::error::AddressError;
use wallet_crypto::hashing::double_sha256;

/// Mainnet/testnet Base58Check version bytes and Bech32 HRPs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    fn p2pkh_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    fn p2sh_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet => 0xc4,
        }
    }

    fn hrp(self) -> &'static str {
        match self {
            Network::Mainnet => "bc",
            Network::Testnet => "tb",
        }
    }
}

fn base58check_encode(version: u8, payload: &[u8]) -> String {
    let mut full = Vec::with_capacity(1 + payload.len() + 4);
    full.push(version);
    full.extend_from_slice(payload);
    let checksum = double_sha256(&full);
    full.extend_from_slice(&checksum[..4]);
    bs58::encode(full).into_string()
}

fn base58check_decode(s: &str, expected_version: u8) -> Result<Vec<u8>, AddressError> {
    let full = bs58::decode(s)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;
    if full.len() < 5 {
        return Err(AddressError::InvalidLength {
            expected: 5,
            actual: full.len(),
        });
    }
    let (payload_with_version, checksum) = full.split_at(full.len() - 4);
    let expected_checksum = double_sha256(payload_with_version);
    if &expected_checksum[..4] != checksum {
        return Err(AddressError::InvalidBase58Check);
    }
    if payload_with_version[0] != expected_version {
        return Err(AddressError::InvalidBase58Check);
    }
    Ok(payload_with_version[1..].to_vec())
}

/// Encodes a P2PKH address from a 20-byte `HASH160(pubkey)`.
pub fn p2pkh(hash160: &[u8; 20], network: Network) -> String {
    base58check_encode(network.p2pkh_version(), hash160)
}

/// Decodes a P2PKH address into its 20-byte pubkey hash.
pub fn decode_p2pkh(s: &str, network: Network) -> Result<[u8; 20], AddressError> {
    let payload = base58check_decode(s, network.p2pkh_version())?;
    to_hash160(payload)
}

/// Encodes a P2SH address from a 20-byte `HASH160(redeemScript)`.
pub fn p2sh(hash160: &[u8; 20], network: Network) -> String {
    base58check_encode(network.p2sh_version(), hash160)
}

/// Decodes a P2SH address into its 20-byte script hash.
pub fn decode_p2sh(s: &str, network: Network) -> Result<[u8; 20], AddressError> {
    let payload = base58check_decode(s, network.p2sh_version())?;
    to_hash160(payload)
}

fn to_hash160(payload: Vec<u8>) -> Result<[u8; 20], AddressError> {
    if payload.len() != 20 {
        return Err(AddressError::InvalidLength {
            expected: 20,
            actual: payload.len(),
        });
    }
    let mut out = [0u8; 20];
    out.copy_from_slice(&payload);
    Ok(out)
}

/// Encodes a P2WPKH (witness v0) address from a 20-byte `HASH160(pubkey)`.
pub fn p2wpkh(hash160: &[u8; 20], network: Network) -> Result<String, AddressError> {
    Ok(bech32::encode_segwit(network.hrp(), 0, hash160)?)
}

/// Decodes a P2WPKH address into its 20-byte pubkey hash.
pub fn decode_p2wpkh(s: &str, network: Network) -> Result<[u8; 20], AddressError> {
    let (version, program) = bech32::decode_segwit(network.hrp(), s)?;
    if version != 0 || program.len() != 20 {
        return Err(AddressError::InvalidWitnessProgram {
            version,
            length: program.len(),
        });
    }
    let mut out = [0u8; 20];
    out.copy_from_slice(&program);
    Ok(out)
}

/// Encodes a P2TR (witness v1) address from a 32-byte x-only tweaked
/// output key.
pub fn p2tr(output_key: &[u8; 32], network: Network) -> Result<String, AddressError> {
    Ok(bech32::encode_segwit(network.hrp(), 1, output_key)?)
}

/// Decodes a P2TR address into its 32-byte x-only output key.
pub fn decode_p2tr(s: &str, network: Network) -> Result<[u8; 32], AddressError> {
    let (version, program) = bech32::decode_segwit(network.hrp(), s)?;
    if version != 1 || program.len() != 32 {
        return Err(AddressError::InvalidWitnessProgram {
            version,
            length: program.len(),
        });
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&program);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p2pkh_round_trips() {
        let hash = [0x11u8; 20];
        let addr = p2pkh(&hash, Network::Mainnet);
        assert!(addr.starts_with('1'));
        assert_eq!(decode_p2pkh(&addr, Network::Mainnet).unwrap(), hash);
    }

    #[test]
    fn p2sh_round_trips() {
        let hash = [0x22u8; 20];
        let addr = p2sh(&hash, Network::Mainnet);
        assert!(addr.starts_with('3'));
        assert_eq!(decode_p2sh(&addr, Network::Mainnet).unwrap(), hash);
    }

    #[test]
    fn p2pkh_rejects_wrong_network() {
        let hash = [0x11u8; 20];
        let addr = p2pkh(&hash, Network::Mainnet);
        assert!(decode_p2pkh(&addr, Network::Testnet).is_err());
    }

    #[test]
    fn p2wpkh_round_trips() {
        let hash = [0x33u8; 20];
        let addr = p2wpkh(&hash, Network::Mainnet).unwrap();
        assert!(addr.starts_with("bc1q"));
        assert_eq!(decode_p2wpkh(&addr, Network::Mainnet).unwrap(), hash);
    }

    #[test]
    fn p2tr_round_trips() {
        let key = [0x44u8; 32];
        let addr = p2tr(&key, Network::Mainnet).unwrap();
        assert!(addr.starts_with("bc1p"));
        assert_eq!(decode_p2tr(&addr, Network::Mainnet).unwrap(), key);
    }
}
