//! External collaborator contracts (L8, `spec.md` §4.9, §6): `KeyProvider`
//! and `Signer`. The orchestrator ([`crate::orchestrator`]) is polymorphic
//! over both; the only place an implementation may suspend is inside
//! `Signer::sign`.

use async_trait::async_trait;
use wallet_crypto::curve::{Curve, Signature};
use wallet_hd::{DerivationPath, KeyNode};
use wallet_types::error::SignerError;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An opaque handle a [`KeyProvider`] hands back for a derived key. Local
/// implementations may embed the full [`KeyNode`]; hardware/remote
/// implementations embed only what their transport needs to re-identify the
/// key (e.g. the path string itself).
#[derive(Debug, Clone)]
pub struct KeyRef(pub String);

impl KeyRef {
    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Derives keys and reports their public material. The core never inspects
/// a private scalar except through the paired [`Signer`] contract.
pub trait KeyProvider {
    type Error: std::fmt::Debug;

    /// Derives the key at `path`, returning an opaque reference to it.
    fn derive(&self, path: &DerivationPath, curve: Curve) -> Result<KeyRef, Self::Error>;

    /// The public key bytes for a previously derived reference (33 bytes
    /// compressed secp256k1, or 32 bytes Ed25519).
    fn public_key(&self, key_ref: &KeyRef, curve: Curve) -> Result<Vec<u8>, Self::Error>;
}

/// A signer whose capability set the orchestrator may probe before
/// requesting a signature (`spec.md` §4.9's "polymorphic over the capability
/// set" framing). Bitcoin Taproot key-path spends need Schnorr, every other
/// secp256k1 family needs ECDSA, and Solana needs Ed25519.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureKind {
    Ecdsa,
    Schnorr,
    Ed25519,
}

impl SignatureKind {
    /// The HD-derivation curve backing this signature scheme: both ECDSA
    /// and Schnorr are secp256k1 schemes, distinguished only at signing
    /// time, not at key-derivation time.
    pub fn curve(self) -> Curve {
        match self {
            SignatureKind::Ecdsa | SignatureKind::Schnorr => Curve::Secp256k1,
            SignatureKind::Ed25519 => Curve::Ed25519,
        }
    }
}

/// Signs a pre-image under a previously derived key. Implementations may
/// suspend indefinitely (hardware confirmation, a remote relay round trip);
/// the orchestrator has no other suspension points (`spec.md` §5).
#[async_trait]
pub trait Signer: Send + Sync {
    /// Requests a signature over `preimage` using the key `key_ref` refers
    /// to, producing the signature scheme `kind` names.
    async fn sign(
        &self,
        kind: SignatureKind,
        key_ref: &KeyRef,
        preimage: &[u8],
    ) -> Result<Signature, SignerError>;
}

/// An in-process signer holding derived [`KeyNode`]s directly. `KeyRef`s are
/// the derivation path string; both derivation and signing happen
/// synchronously in memory, with no suspension.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct LocalSigner {
    seed: [u8; 64],
}

impl LocalSigner {
    /// Builds a signer over a BIP-39 seed. The seed is zeroized when this
    /// signer is dropped ([`KeyNode`] carries the same guarantee per node).
    pub fn new(seed: [u8; 64]) -> Self {
        Self { seed }
    }

    fn derive_node(&self, path: &DerivationPath, curve: Curve) -> Result<KeyNode, SignerError> {
        match curve {
            Curve::Secp256k1 => wallet_hd::bip32_secp256k1::derive(&self.seed, path)
                .map_err(|e| SignerError::Backend(e.to_string())),
            Curve::Ed25519 => wallet_hd::slip10::derive(&self.seed, path)
                .map_err(|e| SignerError::Backend(e.to_string())),
        }
    }
}

impl KeyProvider for LocalSigner {
    type Error = SignerError;

    fn derive(&self, path: &DerivationPath, curve: Curve) -> Result<KeyRef, Self::Error> {
        self.derive_node(path, curve)?;
        Ok(KeyRef(path.to_string()))
    }

    fn public_key(&self, key_ref: &KeyRef, curve: Curve) -> Result<Vec<u8>, Self::Error> {
        let path: DerivationPath = key_ref
            .path()
            .parse()
            .map_err(|_| SignerError::Backend("malformed key ref".into()))?;
        let node = self.derive_node(&path, curve)?;
        Ok(match curve {
            Curve::Secp256k1 => wallet_crypto::curve::secp256k1_public_key_compressed(
                &node.private_key,
            )
            .map_err(|e| SignerError::Backend(e.to_string()))?
            .to_vec(),
            Curve::Ed25519 => {
                wallet_crypto::curve::ed25519_public_key(&node.private_key).to_vec()
            }
        })
    }
}

#[async_trait]
impl Signer for LocalSigner {
    async fn sign(
        &self,
        kind: SignatureKind,
        key_ref: &KeyRef,
        preimage: &[u8],
    ) -> Result<Signature, SignerError> {
        let path: DerivationPath = key_ref
            .path()
            .parse()
            .map_err(|_| SignerError::Backend("malformed key ref".into()))?;
        let node = self.derive_node(&path, kind.curve())?;
        match kind {
            SignatureKind::Ecdsa => {
                if preimage.len() == 32 {
                    wallet_crypto::curve::ecdsa_sign(preimage, &node.private_key)
                        .map_err(|e| SignerError::Backend(e.to_string()))
                } else {
                    Err(SignerError::Unsupported(
                        "secp256k1 pre-image must be a 32-byte digest".into(),
                    ))
                }
            }
            SignatureKind::Schnorr => {
                if preimage.len() == 32 {
                    wallet_crypto::curve::schnorr_sign(preimage, &node.private_key)
                        .map_err(|e| SignerError::Backend(e.to_string()))
                } else {
                    Err(SignerError::Unsupported(
                        "schnorr pre-image must be a 32-byte digest".into(),
                    ))
                }
            }
            SignatureKind::Ed25519 => {
                Ok(wallet_crypto::curve::ed25519_sign(preimage, &node.private_key))
            }
        }
    }
}

/// A signer that asks a hardware device via an opaque transport, scoped to a
/// derivation path (`spec.md` §4.9). The transport itself (APDU, QR/BC-UR,
/// protobuf framing) is an external collaborator's concern; this adapter only
/// describes the request/response shape the orchestrator depends on.
#[async_trait]
pub trait HardwareTransport: Send + Sync {
    async fn request_signature(
        &self,
        kind: SignatureKind,
        derivation_path: &str,
        preimage: &[u8],
    ) -> Result<Signature, SignerError>;

    async fn request_public_key(
        &self,
        curve: Curve,
        derivation_path: &str,
    ) -> Result<Vec<u8>, SignerError>;
}

/// Wraps a [`HardwareTransport`] to satisfy [`Signer`]/[`KeyProvider`]. Every
/// call may suspend until the user confirms on-device, and may fail with
/// [`SignerError::UserRejected`] or [`SignerError::CommunicationTimeout`].
pub struct HardwareSigner<T: HardwareTransport> {
    transport: T,
}

impl<T: HardwareTransport> HardwareSigner<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: HardwareTransport> KeyProvider for HardwareSigner<T> {
    type Error = SignerError;

    fn derive(&self, path: &DerivationPath, _curve: Curve) -> Result<KeyRef, Self::Error> {
        Ok(KeyRef(path.to_string()))
    }

    fn public_key(&self, key_ref: &KeyRef, _curve: Curve) -> Result<Vec<u8>, Self::Error> {
        // Hardware public keys require a device round trip; callers needing
        // one synchronously should call `Signer::sign`'s async counterpart
        // instead. Kept here only to satisfy the `KeyProvider` contract for
        // paths that were already resolved.
        Err(SignerError::Unsupported(format!(
            "public key for {} requires an async device round trip",
            key_ref.path()
        )))
    }
}

#[async_trait]
impl<T: HardwareTransport> Signer for HardwareSigner<T> {
    async fn sign(
        &self,
        kind: SignatureKind,
        key_ref: &KeyRef,
        preimage: &[u8],
    ) -> Result<Signature, SignerError> {
        self.transport
            .request_signature(kind, key_ref.path(), preimage)
            .await
    }
}

/// A signer backed by a network relay to a session-linked mobile wallet
/// (`spec.md` §4.9). Identical contract to [`HardwareSigner`]; kept as a
/// distinct type so callers can distinguish transports in logs and errors.
pub struct RemoteSigner<T: HardwareTransport> {
    transport: T,
}

impl<T: HardwareTransport> RemoteSigner<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: HardwareTransport> Signer for RemoteSigner<T> {
    async fn sign(
        &self,
        kind: SignatureKind,
        key_ref: &KeyRef,
        preimage: &[u8],
    ) -> Result<Signature, SignerError> {
        self.transport
            .request_signature(kind, key_ref.path(), preimage)
            .await
    }
}
