//! EVM addresses: `keccak256` of the uncompressed public key, with EIP-55
//! mixed-case checksums (`spec.md` §4.4).

use crate::error::AddressError;
use wallet_crypto::hashing::keccak256;

/// A 20-byte EVM address.
pub type EvmAddress = [u8; 20];

/// Derives an EVM address from a 65-byte uncompressed secp256k1 public key
/// (`0x04 || X || Y`).
pub fn from_uncompressed_public_key(pubkey: &[u8; 65]) -> EvmAddress {
    let digest = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    address
}

/// Renders `address` as an EIP-55 mixed-case checksummed hex string,
/// prefixed with `0x`.
pub fn to_checksum(address: &EvmAddress) -> String {
    let lower_hex = hex::encode(address);
    let digest = keccak256(lower_hex.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower_hex.chars().enumerate() {
        if c.is_ascii_digit() {
            out.push(c);
            continue;
        }
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Parses a `0x`-prefixed hex address, enforcing the EIP-55 checksum only
/// when the input is mixed-case (all-lowercase and all-uppercase inputs skip
/// checksum validation, matching the EIP-55 reference behavior).
pub fn parse(s: &str) -> Result<EvmAddress, AddressError> {
    let hex_part = s.strip_prefix("0x").unwrap_or(s);
    if hex_part.len() != 40 {
        return Err(AddressError::InvalidLength {
            expected: 20,
            actual: hex_part.len() / 2,
        });
    }
    let bytes = hex::decode(hex_part).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
    let mut address = [0u8; 20];
    address.copy_from_slice(&bytes);

    let is_all_lower = hex_part.chars().all(|c| !c.is_ascii_uppercase());
    let is_all_upper = hex_part.chars().all(|c| !c.is_ascii_lowercase());
    if !is_all_lower && !is_all_upper && to_checksum(&address) != format!("0x{hex_part}") {
        return Err(AddressError::InvalidChecksum);
    }
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_matches_eip55_reference_vector() {
        // From EIP-55's own test vectors.
        let address: EvmAddress = {
            let bytes = hex::decode("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
            let mut a = [0u8; 20];
            a.copy_from_slice(&bytes);
            a
        };
        assert_eq!(to_checksum(&address), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn parse_accepts_all_lowercase_without_checksum() {
        let parsed = parse("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(to_checksum(&parsed), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn parse_rejects_bad_mixed_case_checksum() {
        assert!(parse("0x5aAEB6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
    }

    #[test]
    fn address_from_pubkey_is_20_bytes_of_keccak_tail() {
        let pubkey = [4u8; 65];
        let address = from_uncompressed_public_key(&pubkey);
        let expected_tail = &keccak256(&pubkey[1..])[12..];
        assert_eq!(&address[..], expected_tail);
    }
}
