//! Bitcoin `CompactSize` ("VarInt") encoding.
//!
//! | Value range | Encoding |
//! |---|---|
//! | `< 0xfd` | single byte |
//! | `<= 0xffff` | `0xfd` + u16 little-endian |
//! | `<= 0xffff_ffff` | `0xfe` + u32 little-endian |
//! | else | `0xff` + u64 little-endian |
//!
//! Decoding enforces the *minimal* encoding: a value that fits in a smaller
//! form but is encoded in a larger one is rejected with
//! [`VarIntError::NonCanonical`].

use thiserror::Error;

/// Errors decoding a Bitcoin `VarInt`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VarIntError {
    /// The buffer ended before the full varint was read.
    #[error("truncated VarInt: expected {expected} more byte(s)")]
    Truncated {
        /// How many more bytes were required.
        expected: usize,
    },
    /// The varint was encoded in a wider form than its value requires.
    #[error("non-canonical VarInt: value {value} encoded with prefix 0x{prefix:02x}")]
    NonCanonical {
        /// The decoded value.
        value: u64,
        /// The prefix byte that should not have been used for this value.
        prefix: u8,
    },
}

/// Encodes `v` as a Bitcoin `VarInt`.
pub fn encode(v: u64) -> Vec<u8> {
    if v < 0xfd {
        vec![v as u8]
    } else if v <= 0xffff {
        let mut out = vec![0xfd];
        out.extend_from_slice(&(v as u16).to_le_bytes());
        out
    } else if v <= 0xffff_ffff {
        let mut out = vec![0xfe];
        out.extend_from_slice(&(v as u32).to_le_bytes());
        out
    } else {
        let mut out = vec![0xff];
        out.extend_from_slice(&v.to_le_bytes());
        out
    }
}

/// Decodes a Bitcoin `VarInt` from the front of `buf`, returning the value and
/// the number of bytes consumed.
pub fn decode(buf: &[u8]) -> Result<(u64, usize), VarIntError> {
    let prefix = *buf
        .first()
        .ok_or(VarIntError::Truncated { expected: 1 })?;
    match prefix {
        0xff => {
            let bytes = buf
                .get(1..9)
                .ok_or(VarIntError::Truncated { expected: 8 })?;
            let value = u64::from_le_bytes(bytes.try_into().unwrap());
            if value <= 0xffff_ffff {
                return Err(VarIntError::NonCanonical { value, prefix });
            }
            Ok((value, 9))
        }
        0xfe => {
            let bytes = buf
                .get(1..5)
                .ok_or(VarIntError::Truncated { expected: 4 })?;
            let value = u32::from_le_bytes(bytes.try_into().unwrap()) as u64;
            if value <= 0xffff {
                return Err(VarIntError::NonCanonical { value, prefix });
            }
            Ok((value, 5))
        }
        0xfd => {
            let bytes = buf
                .get(1..3)
                .ok_or(VarIntError::Truncated { expected: 2 })?;
            let value = u16::from_le_bytes(bytes.try_into().unwrap()) as u64;
            if value < 0xfd {
                return Err(VarIntError::NonCanonical { value, prefix });
            }
            Ok((value, 3))
        }
        _ => Ok((prefix as u64, 1)),
    }
}
