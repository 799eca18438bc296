//! `SIGN_MODE_DIRECT` signing-hash construction (`spec.md` §4.7): the
//! protobuf-encoded `SignDoc` hashed with a single SHA-256.

use std::str::FromStr;

use cosmrs::tendermint::chain::Id as ChainId;
use cosmrs::tx::SignDoc;

use crate::error::CosmosError;
use crate::types::UnsignedSignDoc;
use wallet_crypto::hashing::sha256;

fn encode_sign_doc(doc: &UnsignedSignDoc) -> Result<Vec<u8>, CosmosError> {
    let chain_id = ChainId::from_str(&doc.chain_id).map_err(|e| CosmosError::Cosmrs(e.to_string()))?;
    let sign_doc = SignDoc {
        body_bytes: doc.body_bytes.clone(),
        auth_info_bytes: doc.auth_info_bytes.clone(),
        chain_id,
        account_number: doc.account_number,
    };
    sign_doc.into_bytes().map_err(|e| CosmosError::Cosmrs(e.to_string()))
}

/// Computes the `SIGN_MODE_DIRECT` signing hash: `sha256(serialize(SignDoc))`.
pub fn preimage(doc: &UnsignedSignDoc) -> Result<[u8; 32], CosmosError> {
    Ok(sha256(&encode_sign_doc(doc)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> UnsignedSignDoc {
        UnsignedSignDoc {
            body_bytes: vec![1, 2, 3],
            auth_info_bytes: vec![4, 5, 6],
            chain_id: "cosmoshub-4".to_string(),
            account_number: 1,
        }
    }

    #[test]
    fn preimage_is_deterministic() {
        let a = preimage(&sample_doc()).unwrap();
        let b = preimage(&sample_doc()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn preimage_changes_with_account_number() {
        let mut doc = sample_doc();
        let a = preimage(&doc).unwrap();
        doc.account_number = 2;
        let b = preimage(&doc).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_malformed_chain_id() {
        let mut doc = sample_doc();
        doc.chain_id = "".to_string();
        assert!(preimage(&doc).is_err());
    }
}
