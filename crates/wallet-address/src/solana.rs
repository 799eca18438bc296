//! Solana addresses: base58 of the raw Ed25519 public key (`spec.md` §4.4).
//! The public key itself *is* the address; there is no hashing step.

use crate::error::AddressError;

/// Encodes a 32-byte Ed25519 public key as a Solana address.
pub fn encode(pubkey: &[u8; 32]) -> String {
    bs58::encode(pubkey).into_string()
}

/// Decodes a Solana address into its 32-byte Ed25519 public key.
pub fn decode(s: &str) -> Result<[u8; 32], AddressError> {
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;
    if bytes.len() != 32 {
        return Err(AddressError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let pubkey = [0x55u8; 32];
        let addr = encode(&pubkey);
        assert_eq!(decode(&addr).unwrap(), pubkey);
    }

    #[test]
    fn rejects_wrong_length() {
        let short = bs58::encode([1u8; 16]).into_string();
        assert!(decode(&short).is_err());
    }
}
