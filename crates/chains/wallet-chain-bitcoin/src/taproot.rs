//! Taproot leaf hashing and key tweaking (BIP-341, `spec.md` §4.5).

use crate::error::BitcoinError;
use secp256k1::{Scalar, Secp256k1, XOnlyPublicKey};
use std::sync::OnceLock;
use wallet_crypto::hashing::tagged_hash;
use wallet_types::primitives::var_int_bitcoin;

const LEAF_VERSION_TAPSCRIPT: u8 = 0xc0;

fn secp() -> &'static Secp256k1<secp256k1::VerifyOnly> {
    static CTX: OnceLock<Secp256k1<secp256k1::VerifyOnly>> = OnceLock::new();
    CTX.get_or_init(Secp256k1::verification_only)
}

/// `TapLeaf.hash = tagged_hash("TapLeaf", leafVersion || compact_size(len(script)) || script)`.
pub fn tap_leaf_hash(script: &[u8], leaf_version: u8) -> [u8; 32] {
    let mut msg = Vec::with_capacity(1 + 9 + script.len());
    msg.push(leaf_version);
    msg.extend_from_slice(&var_int_bitcoin::encode(script.len() as u64));
    msg.extend_from_slice(script);
    tagged_hash("TapLeaf", &msg)
}

/// The default tapscript leaf version, `0xc0`.
pub fn default_leaf_version() -> u8 {
    LEAF_VERSION_TAPSCRIPT
}

/// Applies BIP-341's key tweak: `t = int(tagged_hash("TapTweak", P || h))`,
/// `Q = lift_x(P) + t*G`. `merkle_root` is `None` for a key-path-only output
/// (no script path ever spendable).
///
/// Returns the 32-byte x-only output key and whether `Q` has odd y-parity
/// (needed by the signer to negate its private scalar before signing).
pub fn tap_tweak(
    internal_key: &[u8; 32],
    merkle_root: Option<[u8; 32]>,
) -> Result<([u8; 32], bool), BitcoinError> {
    let mut msg = internal_key.to_vec();
    if let Some(root) = merkle_root {
        msg.extend_from_slice(&root);
    }
    let tweak_hash = tagged_hash("TapTweak", &msg);

    let xonly = XOnlyPublicKey::from_slice(internal_key)
        .map_err(|e| BitcoinError::InvalidTaprootKey(e.to_string()))?;
    let scalar = Scalar::from_be_bytes(tweak_hash)
        .map_err(|e| BitcoinError::InvalidTaprootKey(e.to_string()))?;
    let (tweaked, parity) = xonly
        .add_tweak(secp(), &scalar)
        .map_err(|e| BitcoinError::InvalidTaprootKey(e.to_string()))?;
    Ok((tweaked.serialize(), parity == secp256k1::Parity::Odd))
}
