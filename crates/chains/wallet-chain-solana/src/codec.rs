//! Wire serialization of a compiled [`Message`] / [`SignedTransaction`]
//! (`spec.md` §4.5, §4.6), via `solana_message`/`solana_transaction`'s own
//! `bincode`-based wire format (the same serialization `x402-rs`'s
//! `v1_solana_exact::client` relies on when it hands a `VersionedTransaction`
//! to `solana_client`).

use solana_message::{
    CompiledInstruction as SolCompiledInstruction, Hash as SolHash, Message as SolMessage,
    MessageHeader as SolMessageHeader,
};
use solana_pubkey::Pubkey as SolPubkey;
use solana_signature::Signature as SolSignature;
use solana_transaction::Transaction as SolTransaction;

use crate::types::{Message, SignedTransaction};

fn to_sol_message(message: &Message) -> SolMessage {
    SolMessage {
        header: SolMessageHeader {
            num_required_signatures: message.header.num_required_signatures,
            num_readonly_signed_accounts: message.header.num_readonly_signed_accounts,
            num_readonly_unsigned_accounts: message.header.num_readonly_unsigned_accounts,
        },
        account_keys: message.account_keys.iter().map(|k| SolPubkey::new_from_array(*k)).collect(),
        recent_blockhash: SolHash::new_from_array(message.recent_blockhash),
        instructions: message
            .instructions
            .iter()
            .map(|ci| SolCompiledInstruction {
                program_id_index: ci.program_id_index,
                accounts: ci.accounts.clone(),
                data: ci.data.clone(),
            })
            .collect(),
    }
}

/// Serializes a compiled [`Message`] into Solana's wire format.
pub fn serialize_message(message: &Message) -> Vec<u8> {
    bincode::serialize(&to_sol_message(message)).expect("Message always serializes")
}

/// Serializes a [`SignedTransaction`]: `short_vec`-prefixed signature list
/// followed by the serialized message.
pub fn serialize_transaction(tx: &SignedTransaction) -> Vec<u8> {
    let sol_tx = SolTransaction {
        signatures: tx.signatures.iter().map(|s| SolSignature::from(*s)).collect(),
        message: to_sol_message(&tx.message),
    };
    bincode::serialize(&sol_tx).expect("Transaction always serializes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompiledInstruction, MessageHeader};

    fn sample_message() -> Message {
        Message {
            header: MessageHeader {
                num_required_signatures: 1,
                num_readonly_signed_accounts: 0,
                num_readonly_unsigned_accounts: 1,
            },
            account_keys: vec![[1u8; 32], [2u8; 32]],
            recent_blockhash: [7u8; 32],
            instructions: vec![CompiledInstruction {
                program_id_index: 1,
                accounts: vec![0],
                data: vec![0xde, 0xad],
            }],
        }
    }

    #[test]
    fn message_round_trips_through_the_wire_format() {
        let bytes = serialize_message(&sample_message());
        assert!(!bytes.is_empty());
        let decoded: SolMessage = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded.account_keys.len(), 2);
        assert_eq!(decoded.recent_blockhash.to_bytes(), [7u8; 32]);
    }

    #[test]
    fn transaction_prefixes_signatures_before_message() {
        let message = sample_message();
        let tx = SignedTransaction { signatures: vec![[9u8; 64]], message: message.clone() };
        let bytes = serialize_transaction(&tx);
        let decoded: SolTransaction = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded.signatures.len(), 1);
        assert_eq!(decoded.signatures[0], SolSignature::from([9u8; 64]));
        assert_eq!(decoded.message.account_keys.len(), message.account_keys.len());
    }
}
