//! Signature attachment and `TxRaw` wire serialization (`spec.md` §4.6, §4.7).

use cosmrs::tx::Raw;

use crate::error::CosmosError;
use crate::types::{SignedTx, UnsignedSignDoc};
use wallet_crypto::curve::Signature;

/// Attaches an ECDSA signature to an unsigned `SignDoc`. Cosmos SDK's
/// `SIGN_MODE_DIRECT` places the raw 64-byte `r || s` on the wire with no
/// recovery id and no DER wrapping.
pub fn attach_signature(
    doc: UnsignedSignDoc,
    signature: &Signature,
) -> Result<SignedTx, CosmosError> {
    let sig_bytes = signature.ecdsa_r_s_bytes().ok_or(CosmosError::IncompatibleSignature)?;
    Ok(SignedTx {
        body_bytes: doc.body_bytes,
        auth_info_bytes: doc.auth_info_bytes,
        signatures: vec![sig_bytes.to_vec()],
    })
}

/// Serializes a signed transaction as a `TxRaw` protobuf message, via
/// `cosmrs::tx::Raw` (the same type `mantra-dex-sdk`'s `sign_tx` produces).
///
/// `body_bytes`/`auth_info_bytes` were themselves produced by `builder::build`,
/// so re-encoding them inside a `TxRaw` cannot fail.
pub fn serialize(tx: &SignedTx) -> Vec<u8> {
    let raw = Raw {
        body_bytes: tx.body_bytes.clone(),
        auth_info_bytes: tx.auth_info_bytes.clone(),
        signatures: tx.signatures.clone(),
    };
    raw.to_bytes().expect("TxRaw of already-valid protobuf fields always encodes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_signature_rejects_non_ecdsa() {
        let doc = UnsignedSignDoc {
            body_bytes: vec![1],
            auth_info_bytes: vec![2],
            chain_id: "x".to_string(),
            account_number: 0,
        };
        let sig = Signature::Ed25519([0u8; 64]);
        assert!(attach_signature(doc, &sig).is_err());
    }

    #[test]
    fn serialize_round_trips_field_shape() {
        let doc = UnsignedSignDoc {
            body_bytes: vec![1, 2],
            auth_info_bytes: vec![3, 4],
            chain_id: "x".to_string(),
            account_number: 0,
        };
        let sig = Signature::Ecdsa { r: [9u8; 32], s: [8u8; 32], rec_id: 0 };
        let signed = attach_signature(doc, &sig).unwrap();
        let bytes = serialize(&signed);
        assert!(!bytes.is_empty());
        assert_eq!(signed.signatures[0].len(), 64);
    }
}
