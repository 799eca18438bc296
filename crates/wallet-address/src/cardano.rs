//! Cardano (CIP-19) address *encoding* only — no builder/signer support,
//! since Cardano transaction construction is out of scope (`spec.md` §1).
//!
//! Layout: `header_byte = (address_type << 4) | network_tag`, followed by up
//! to two 28-byte BLAKE2b-224 key hashes.

use crate::bech32::{self, Variant};
use crate::error::AddressError;

/// The CIP-19 network tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Testnet,
    Mainnet,
}

impl Network {
    fn tag(self) -> u8 {
        match self {
            Network::Testnet => 0b0000,
            Network::Mainnet => 0b0001,
        }
    }

    fn hrp(self) -> &'static str {
        match self {
            Network::Testnet => "addr_test",
            Network::Mainnet => "addr",
        }
    }
}

const ADDR_TYPE_BASE: u8 = 0b0000;
const ADDR_TYPE_ENTERPRISE: u8 = 0b0110;

/// Builds the raw bytes of a base address (payment key hash + staking key
/// hash), both 28-byte BLAKE2b-224 hashes.
pub fn base_address_bytes(
    network: Network,
    payment_key_hash: &[u8; 28],
    staking_key_hash: &[u8; 28],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + 28 + 28);
    out.push((ADDR_TYPE_BASE << 4) | network.tag());
    out.extend_from_slice(payment_key_hash);
    out.extend_from_slice(staking_key_hash);
    out
}

/// Builds the raw bytes of an enterprise address (payment key hash only, no
/// staking rights).
pub fn enterprise_address_bytes(network: Network, payment_key_hash: &[u8; 28]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + 28);
    out.push((ADDR_TYPE_ENTERPRISE << 4) | network.tag());
    out.extend_from_slice(payment_key_hash);
    out
}

/// Bech32-encodes raw CIP-19 address bytes under the network's HRP
/// (`addr`/`addr_test`), the display form used everywhere outside the wire
/// protocol.
pub fn to_bech32(network: Network, raw: &[u8]) -> Result<String, AddressError> {
    let data = bech32::convert_bits(raw, 8, 5, true)?;
    Ok(bech32::encode(network.hrp(), &data, Variant::Bech32)?)
}
