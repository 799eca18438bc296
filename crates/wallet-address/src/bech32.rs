//! BIP-173 Bech32 and BIP-350 Bech32m, via the `bech32` crate.
//!
//! This module adapts `bech32`'s `u5`/`ToBase32`/`FromBase32` surface (the
//! same API `forbole-cosmos-rust-wallet` and the Litecoin-address path of
//! `HawalaSupp-bitcoin-key-generator` call directly) to the byte-oriented
//! `encode`/`decode`/`encode_segwit`/`decode_segwit` calls the rest of this
//! crate makes.

use bech32::{u5, FromBase32};
use thiserror::Error;

pub use bech32::Variant;

/// BIP-173 caps a valid Bech32 string at 90 characters total.
const MAX_LENGTH: usize = 90;

/// Errors decoding or encoding a Bech32/Bech32m string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Bech32Error {
    #[error(transparent)]
    Bech32(#[from] bech32::Error),
    #[error("bech32 string exceeds the 90-character maximum (got {0})")]
    TooLong(usize),
    #[error("human-readable part mismatch: expected {expected}, got {actual}")]
    HrpMismatch { expected: String, actual: String },
}

fn check_length(s: &str) -> Result<(), Bech32Error> {
    if s.len() > MAX_LENGTH {
        return Err(Bech32Error::TooLong(s.len()));
    }
    Ok(())
}

/// Regroups bits between `from_bits`-wide and `to_bits`-wide words, as used
/// to go from 8-bit bytes to 5-bit Bech32 words and back (BIP-173).
pub fn convert_bits(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, Bech32Error> {
    Ok(bech32::convert_bits(data, from_bits, to_bits, pad)?)
}

/// Encodes `hrp` and 5-bit `data` words (already converted, e.g. via
/// [`convert_bits`]) into a Bech32 or Bech32m string.
pub fn encode(hrp: &str, data: &[u8], variant: Variant) -> Result<String, Bech32Error> {
    let words: Vec<u5> = data
        .iter()
        .map(|&b| u5::try_from_u8(b))
        .collect::<Result<_, _>>()?;
    Ok(bech32::encode(hrp, words, variant)?)
}

/// Decodes a Bech32/Bech32m string into `(hrp, 5-bit data, variant)`.
pub fn decode(s: &str) -> Result<(String, Vec<u8>, Variant), Bech32Error> {
    check_length(s)?;
    let (hrp, words, variant) = bech32::decode(s)?;
    Ok((hrp, words.into_iter().map(|w| w.to_u8()).collect(), variant))
}

/// Encodes a segwit address: `hrp` + witness version + witness program.
/// Witness version 0 uses Bech32; version 1 and above use Bech32m (BIP-350).
pub fn encode_segwit(hrp: &str, witness_version: u8, program: &[u8]) -> Result<String, Bech32Error> {
    let variant = if witness_version == 0 {
        Variant::Bech32
    } else {
        Variant::Bech32m
    };
    let version = u5::try_from_u8(witness_version)?;
    let converted = bech32::convert_bits(program, 8, 5, true)?;
    let mut data = Vec::with_capacity(1 + converted.len());
    data.push(version);
    for value in converted {
        data.push(u5::try_from_u8(value)?);
    }
    Ok(bech32::encode(hrp, data, variant)?)
}

/// Decodes a segwit address, returning `(witness_version, program)`.
pub fn decode_segwit(expected_hrp: &str, s: &str) -> Result<(u8, Vec<u8>), Bech32Error> {
    check_length(s)?;
    let (hrp, words, variant) = bech32::decode(s)?;
    if hrp != expected_hrp.to_ascii_lowercase() {
        return Err(Bech32Error::HrpMismatch {
            expected: expected_hrp.to_string(),
            actual: hrp,
        });
    }
    if words.is_empty() {
        return Err(bech32::Error::InvalidLength.into());
    }
    let witness_version = words[0].to_u8();
    let expected_variant = if witness_version == 0 {
        Variant::Bech32
    } else {
        Variant::Bech32m
    };
    if variant != expected_variant {
        return Err(bech32::Error::InvalidChecksum.into());
    }
    let program = Vec::<u8>::from_base32(&words[1..])?;
    Ok((witness_version, program))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_bech32_round_trips() {
        let data = convert_bits(&[1, 2, 3, 4, 5], 8, 5, true).unwrap();
        let encoded = encode("cosmos", &data, Variant::Bech32).unwrap();
        let (hrp, decoded, variant) = decode(&encoded).unwrap();
        assert_eq!(hrp, "cosmos");
        assert_eq!(decoded, data);
        assert_eq!(variant, Variant::Bech32);
    }

    #[test]
    fn segwit_v0_round_trips() {
        let program = [0x11u8; 20];
        let addr = encode_segwit("bc", 0, &program).unwrap();
        let (version, decoded) = decode_segwit("bc", &addr).unwrap();
        assert_eq!(version, 0);
        assert_eq!(decoded, program);
    }

    #[test]
    fn segwit_v1_uses_bech32m() {
        let program = [0x22u8; 32];
        let addr = encode_segwit("bc", 1, &program).unwrap();
        let (_, _, variant) = decode(&addr).unwrap();
        assert_eq!(variant, Variant::Bech32m);
    }

    #[test]
    fn rejects_mixed_case() {
        let err = decode("Bc1Qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4").unwrap_err();
        assert_eq!(err, Bech32Error::Bech32(bech32::Error::MixedCase));
    }

    #[test]
    fn rejects_wrong_hrp() {
        let program = [0x11u8; 20];
        let addr = encode_segwit("bc", 0, &program).unwrap();
        assert!(decode_segwit("tb", &addr).is_err());
    }

    #[test]
    fn accepts_length_90_rejects_91() {
        // "cosmos1" (7) + 77 data words + 6-word checksum = 90, the BIP-173 ceiling.
        let data = vec![0u8; 77];
        let addr = encode("cosmos", &data, Variant::Bech32).unwrap();
        assert_eq!(addr.len(), 90);
        assert!(decode(&addr).is_ok());

        let data = vec![0u8; 78];
        let addr = encode("cosmos", &data, Variant::Bech32).unwrap();
        assert_eq!(addr.len(), 91);
        assert_eq!(decode(&addr).unwrap_err(), Bech32Error::TooLong(91));
    }
}
