//! Cosmos SDK addresses: `Bech32(hrp, sha256(pubkey)[..20])` for secp256k1
//! accounts (`spec.md` §4.4). The HRP is a per-chain attribute
//! (`wallet-types::ChainConfig::hrp`).

use crate::bech32::{self, Variant};
use crate::error::AddressError;
use wallet_crypto::hashing::sha256;

/// Derives a Cosmos account address from a compressed secp256k1 public key.
pub fn from_compressed_public_key(pubkey: &[u8; 33]) -> [u8; 20] {
    let digest = sha256(pubkey);
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest[..20]);
    out
}

/// Encodes a 20-byte account address as Bech32 under `hrp`.
pub fn encode(hrp: &str, address: &[u8; 20]) -> Result<String, AddressError> {
    let data = bech32::convert_bits(address, 8, 5, true)?;
    Ok(bech32::encode(hrp, &data, Variant::Bech32)?)
}

/// Decodes a Bech32 Cosmos address, verifying it uses `hrp`.
pub fn decode(hrp: &str, s: &str) -> Result<[u8; 20], AddressError> {
    let (decoded_hrp, data, variant) = bech32::decode(s)?;
    if decoded_hrp != hrp {
        return Err(AddressError::Bech32(bech32::Bech32Error::HrpMismatch {
            expected: hrp.to_string(),
            actual: decoded_hrp,
        }));
    }
    if variant != Variant::Bech32 {
        return Err(AddressError::Bech32(::bech32::Error::InvalidChecksum.into()));
    }
    let bytes = bech32::convert_bits(&data, 5, 8, false)?;
    if bytes.len() != 20 {
        return Err(AddressError::InvalidLength {
            expected: 20,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; 20];
    out.copy_from_slice(&bytes);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let address = [0x66u8; 20];
        let encoded = encode("cosmos", &address).unwrap();
        assert!(encoded.starts_with("cosmos1"));
        assert_eq!(decode("cosmos", &encoded).unwrap(), address);
    }

    #[test]
    fn rejects_wrong_hrp() {
        let address = [0x66u8; 20];
        let encoded = encode("cosmos", &address).unwrap();
        assert!(decode("osmo", &encoded).is_err());
    }
}
