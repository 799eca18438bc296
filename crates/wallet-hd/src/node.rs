//! The `KeyNode` data model shared by both HD trees (`spec.md` §4.3).

use wallet_crypto::curve::Curve;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A single node in an HD tree: a private scalar plus the bookkeeping needed
/// to derive further children and to identify the node within its tree.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyNode {
    /// The curve this node's scalar is interpreted over.
    #[zeroize(skip)]
    pub curve: Curve,
    /// The 32-byte private scalar (secp256k1 scalar, or Ed25519 seed).
    pub private_key: [u8; 32],
    /// The 32-byte chain code used to derive children.
    pub chain_code: [u8; 32],
    /// Depth from the master node (the master node is depth 0).
    #[zeroize(skip)]
    pub depth: u8,
    /// The first 4 bytes of `HASH160(parent public key)` (secp256k1) or the
    /// SLIP-0010 equivalent, identifying this node's parent.
    #[zeroize(skip)]
    pub parent_fingerprint: [u8; 4],
    /// The raw (hardened-bit-inclusive) child index used to derive this node
    /// from its parent.
    #[zeroize(skip)]
    pub child_number: u32,
}

impl std::fmt::Debug for KeyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyNode")
            .field("curve", &self.curve)
            .field("private_key", &"<redacted>")
            .field("depth", &self.depth)
            .field("child_number", &self.child_number)
            .finish()
    }
}
