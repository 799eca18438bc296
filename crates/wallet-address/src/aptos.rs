//! Aptos address *encoding* only — no builder/signer support, since Aptos
//! transaction construction is out of scope (`spec.md` §1).
//!
//! A 32-byte address rendered as `0x` + compact hex, with leading zero
//! nibbles elided for display (but at least one digit always kept).

use crate::error::AddressError;

/// Renders a 32-byte Aptos address with leading-zero elision.
pub fn to_compact_hex(address: &[u8; 32]) -> String {
    let full = hex::encode(address);
    let trimmed = full.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };
    format!("0x{digits}")
}

/// Parses a `0x`-prefixed Aptos address in either compact or full (64-hex)
/// form, left-padding with zeros back to 32 bytes.
pub fn parse(s: &str) -> Result<[u8; 32], AddressError> {
    let hex_part = s.strip_prefix("0x").unwrap_or(s);
    if hex_part.is_empty() || hex_part.len() > 64 {
        return Err(AddressError::InvalidLength {
            expected: 64,
            actual: hex_part.len(),
        });
    }
    let padded = format!("{hex_part:0>64}");
    let bytes = hex::decode(&padded).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    Ok(out)
}
