//! Ed25519 signature attachment (`spec.md` §4.8). Unlike the secp256k1
//! families, the Solana preimage is the compiled message's own
//! `solana_message`-serialized bytes — Ed25519 hashes internally, so there
//! is no separate digest step.

use crate::codec::serialize_message;
use crate::error::SolanaError;
use crate::types::{Message, SignedTransaction};
use wallet_crypto::curve::Signature;

/// The exact bytes that must be fed to Ed25519 signing for this message.
pub fn preimage(message: &Message) -> Vec<u8> {
    serialize_message(message)
}

/// Assembles a [`SignedTransaction`] from a compiled message and one Ed25519
/// signature per required signer, in `account_keys` order.
pub fn assemble(message: Message, signatures: Vec<Signature>) -> Result<SignedTransaction, SolanaError> {
    let expected = message.header.num_required_signatures as usize;
    if signatures.len() != expected {
        return Err(SolanaError::SignatureCountMismatch { expected, got: signatures.len() });
    }
    let signatures = signatures
        .into_iter()
        .map(|sig| match sig {
            Signature::Ed25519(bytes) => Ok(bytes),
            _ => Err(SolanaError::IncompatibleSignature),
        })
        .collect::<Result<Vec<[u8; 64]>, SolanaError>>()?;
    Ok(SignedTransaction { signatures, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageHeader;

    fn sample_message(num_required_signatures: u8) -> Message {
        Message {
            header: MessageHeader {
                num_required_signatures,
                num_readonly_signed_accounts: 0,
                num_readonly_unsigned_accounts: 0,
            },
            account_keys: vec![[1u8; 32]],
            recent_blockhash: [0u8; 32],
            instructions: vec![],
        }
    }

    #[test]
    fn preimage_is_the_raw_serialized_message() {
        let message = sample_message(1);
        assert_eq!(preimage(&message), serialize_message(&message));
    }

    #[test]
    fn assemble_rejects_signature_count_mismatch() {
        let message = sample_message(2);
        let result = assemble(message, vec![Signature::Ed25519([0u8; 64])]);
        assert_eq!(
            result.unwrap_err(),
            SolanaError::SignatureCountMismatch { expected: 2, got: 1 }
        );
    }

    #[test]
    fn assemble_rejects_non_ed25519_signature() {
        let message = sample_message(1);
        let result = assemble(
            message,
            vec![Signature::Schnorr([0u8; 64])],
        );
        assert_eq!(result.unwrap_err(), SolanaError::IncompatibleSignature);
    }

    #[test]
    fn assemble_accepts_matching_signatures() {
        let message = sample_message(1);
        let result = assemble(message, vec![Signature::Ed25519([3u8; 64])]);
        assert!(result.is_ok());
    }
}
