//! Curve operations: secp256k1 ECDSA (low-S, RFC-6979 deterministic nonces,
//! recoverable), BIP-340 Schnorr, and Ed25519 (`spec.md` §3, §4.2).

use crate::error::CryptoError;
use ed25519_dalek::Signer as _;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{All, Keypair as SchnorrKeypair, Message, Secp256k1, SecretKey};
use std::sync::OnceLock;
use zeroize::Zeroize;

/// The process-wide secp256k1 context, created once and reused by every
/// sign/derive call. `secp256k1::Secp256k1::new()` allocates the verification
/// tables up front, so callers should not construct a fresh context per call.
fn secp() -> &'static Secp256k1<All> {
    static CTX: OnceLock<Secp256k1<All>> = OnceLock::new();
    CTX.get_or_init(Secp256k1::new)
}

/// The curve an operation is parameterized over (`spec.md` §3's "curve tag").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// secp256k1, used by EVM, Bitcoin, and Cosmos.
    Secp256k1,
    /// Ed25519, used by Solana.
    Ed25519,
}

/// A signature in one of the three family-specific shapes `spec.md` §3 defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    /// secp256k1 ECDSA: 32-byte `r`, 32-byte low-S `s`, and a recovery id in
    /// `{0, 1, 2, 3}` (before any family-specific recovery-id transform, e.g.
    /// EIP-155's `v`).
    Ecdsa {
        /// The `r` component.
        r: [u8; 32],
        /// The low-S-normalized `s` component.
        s: [u8; 32],
        /// The ECDSA recovery id.
        rec_id: u8,
    },
    /// BIP-340 Schnorr: a 64-byte `(R.x, s)` pair.
    Schnorr([u8; 64]),
    /// Ed25519: a 64-byte `(R, s)` pair.
    Ed25519([u8; 64]),
}

impl Signature {
    /// The raw ECDSA `(r, s)` bytes concatenated, without the recovery id —
    /// the 64-byte shape most wire formats (EVM typed envelopes, Cosmos
    /// `SignDoc`) actually place on the wire.
    pub fn ecdsa_r_s_bytes(&self) -> Option<[u8; 64]> {
        match self {
            Signature::Ecdsa { r, s, .. } => {
                let mut out = [0u8; 64];
                out[..32].copy_from_slice(r);
                out[32..].copy_from_slice(s);
                Some(out)
            }
            _ => None,
        }
    }
}

/// Signs `msg32` with secp256k1 ECDSA using RFC-6979 deterministic nonces.
/// The resulting `s` is normalized to the low-S form required by BIP-62/EIP-2.
pub fn ecdsa_sign(msg32: &[u8], sk: &[u8; 32]) -> Result<Signature, CryptoError> {
    if msg32.len() != 32 {
        return Err(CryptoError::BadPreimage(msg32.len()));
    }
    let secret_key =
        SecretKey::from_slice(sk).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    let message = Message::from_digest_slice(msg32).expect("checked length above");
    let recoverable: RecoverableSignature =
        secp().sign_ecdsa_recoverable(&message, &secret_key);
    let (rec_id, compact) = recoverable.serialize_compact();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&compact[..32]);
    s.copy_from_slice(&compact[32..]);
    Ok(Signature::Ecdsa {
        r,
        s,
        rec_id: rec_id.to_i32() as u8,
    })
}

/// Signs `msg32` (the BIP-340 message, here always a 32-byte digest) with a
/// BIP-340 Schnorr signature. Auxiliary randomness is all-zero, which the
/// BIP-340 reference test vectors explicitly allow (`spec.md` §4.2).
pub fn schnorr_sign(msg32: &[u8], sk: &[u8; 32]) -> Result<Signature, CryptoError> {
    if msg32.len() != 32 {
        return Err(CryptoError::BadPreimage(msg32.len()));
    }
    let keypair =
        SchnorrKeypair::from_seckey_slice(secp(), sk)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    let aux_rand = [0u8; 32];
    let sig = secp().sign_schnorr_with_aux_rand(
        &Message::from_digest_slice(msg32).expect("checked length above"),
        &keypair,
        &aux_rand,
    );
    Ok(Signature::Schnorr(*sig.as_ref()))
}

/// Signs `msg` with Ed25519 (RFC 8032). Unlike the secp256k1 variants, Ed25519
/// hashes the message internally, so `msg` need not be pre-hashed.
pub fn ed25519_sign(msg: &[u8], sk: &[u8; 32]) -> Signature {
    let mut seed = *sk;
    let signing_key = ed25519_dalek::SigningKey::from_bytes(&seed);
    seed.zeroize();
    let sig = signing_key.sign(msg);
    Signature::Ed25519(sig.to_bytes())
}

/// Derives the Ed25519 public key for a given 32-byte seed.
pub fn ed25519_public_key(sk: &[u8; 32]) -> [u8; 32] {
    let signing_key = ed25519_dalek::SigningKey::from_bytes(sk);
    signing_key.verifying_key().to_bytes()
}

/// Verifies an Ed25519 signature against a 32-byte public key. Callers that
/// receive a signature from a hardware or remote [`crate::curve::Signature`]
/// source (`spec.md` §4.9) use this to confirm it before broadcast, without
/// re-deriving the signer's private key.
pub fn ed25519_verify(msg: &[u8], pubkey: &[u8; 32], signature: &[u8; 64]) -> bool {
    let Ok(verifying_key) = ed25519_dalek::VerifyingKey::from_bytes(pubkey) else {
        return false;
    };
    let sig = ed25519_dalek::Signature::from_bytes(signature);
    verifying_key.verify_strict(msg, &sig).is_ok()
}

/// Derives the compressed (33-byte) secp256k1 public key for a given scalar.
pub fn secp256k1_public_key_compressed(sk: &[u8; 32]) -> Result<[u8; 33], CryptoError> {
    let secret_key =
        SecretKey::from_slice(sk).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    let public_key = secret_key.public_key(secp());
    Ok(public_key.serialize())
}

/// Derives the uncompressed (65-byte, `0x04`-prefixed) secp256k1 public key,
/// the form EVM addresses are computed from (`spec.md` §4.4).
pub fn secp256k1_public_key_uncompressed(sk: &[u8; 32]) -> Result<[u8; 65], CryptoError> {
    let secret_key =
        SecretKey::from_slice(sk).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    let public_key = secret_key.public_key(secp());
    Ok(public_key.serialize_uncompressed())
}

/// Expands a 33-byte compressed secp256k1 public key to its 65-byte
/// uncompressed (`0x04`-prefixed) form, for callers that hold only a public
/// key (e.g. a hardware signer's response) and need the EVM address form.
pub fn secp256k1_decompress(compressed: &[u8; 33]) -> Result<[u8; 65], CryptoError> {
    let public_key = secp256k1::PublicKey::from_slice(compressed)
        .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
    Ok(public_key.serialize_uncompressed())
}

/// Derives the 32-byte x-only public key used by Taproot (`spec.md` §4.5).
pub fn secp256k1_xonly_public_key(sk: &[u8; 32]) -> Result<([u8; 32], bool), CryptoError> {
    let keypair = SchnorrKeypair::from_seckey_slice(secp(), sk)
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    let (xonly, parity) = keypair.x_only_public_key();
    Ok((
        xonly.serialize(),
        parity == secp256k1::Parity::Odd,
    ))
}

#[allow(dead_code)]
fn _assert_recovery_id_range(rec_id: RecoveryId) -> i32 {
    rec_id.to_i32()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sk() -> [u8; 32] {
        let mut sk = [0u8; 32];
        sk[31] = 0x01;
        sk
    }

    #[test]
    fn ecdsa_signature_is_deterministic() {
        let sk = test_sk();
        let msg = [7u8; 32];
        let sig1 = ecdsa_sign(&msg, &sk).unwrap();
        let sig2 = ecdsa_sign(&msg, &sk).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn ecdsa_low_s_is_below_half_order() {
        // secp256k1's n/2 starts with 0x7fff...; a low-S value's top byte must
        // never exceed that.
        let sk = test_sk();
        let msg = [9u8; 32];
        let sig = ecdsa_sign(&msg, &sk).unwrap();
        if let Signature::Ecdsa { s, .. } = sig {
            assert!(s[0] <= 0x7f);
        } else {
            panic!("expected ecdsa signature");
        }
    }

    #[test]
    fn schnorr_signature_is_64_bytes_and_deterministic() {
        let sk = test_sk();
        let msg = [3u8; 32];
        let sig1 = schnorr_sign(&msg, &sk).unwrap();
        let sig2 = schnorr_sign(&msg, &sk).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn ed25519_signature_round_trips_verification() {
        let sk = test_sk();
        let msg = b"hello solana";
        let sig = ed25519_sign(msg, &sk);
        let pk = ed25519_public_key(&sk);
        if let Signature::Ed25519(bytes) = sig {
            assert!(ed25519_verify(msg, &pk, &bytes));
        } else {
            panic!("expected ed25519 signature");
        }
    }

    #[test]
    fn ed25519_verify_rejects_wrong_message() {
        let sk = test_sk();
        let pk = ed25519_public_key(&sk);
        let Signature::Ed25519(bytes) = ed25519_sign(b"hello solana", &sk) else {
            panic!("expected ed25519 signature");
        };
        assert!(!ed25519_verify(b"goodbye solana", &pk, &bytes));
    }

    #[test]
    fn rejects_non_32_byte_preimage() {
        let sk = test_sk();
        assert!(ecdsa_sign(&[1, 2, 3], &sk).is_err());
    }

    #[test]
    fn decompress_round_trips_to_the_same_point() {
        let sk = test_sk();
        let compressed = secp256k1_public_key_compressed(&sk).unwrap();
        let uncompressed = secp256k1_public_key_uncompressed(&sk).unwrap();
        assert_eq!(secp256k1_decompress(&compressed).unwrap(), uncompressed);
    }
}
