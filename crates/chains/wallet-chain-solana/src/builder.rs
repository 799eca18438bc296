//! Solana message compiling (`spec.md` §4.6), via `solana_message::Message`
//! (the teacher's own `solana-message` dependency, `x402-rs`'s
//! `v1_solana_exact::client` builds `solana_message::v0::Message` with).
//!
//! Account-key ordering, privilege collection, and de-duplication are
//! `Message::new_with_blockhash`'s job, not ours: the fee payer leads, the
//! rest are partitioned into signer/writable, signer/readonly,
//! non-signer/writable, non-signer/readonly, each sorted lexicographically —
//! exactly what lets a verifier reconstruct privileges from position alone
//! via the header's three counts.

use solana_instruction::{AccountMeta as SolAccountMeta, Instruction as SolInstruction};
use solana_message::{Hash as SolHash, Message as SolMessage};
use solana_pubkey::Pubkey as SolPubkey;

use crate::error::SolanaError;
use crate::types::{CompiledInstruction, Instruction, Message, MessageHeader, Pubkey, TxIntent};

fn to_sol_pubkey(pubkey: &Pubkey) -> SolPubkey {
    SolPubkey::new_from_array(*pubkey)
}

fn to_sol_instruction(instruction: &Instruction) -> SolInstruction {
    let accounts = instruction
        .accounts
        .iter()
        .map(|a| {
            if a.is_writable {
                SolAccountMeta::new(to_sol_pubkey(&a.pubkey), a.is_signer)
            } else {
                SolAccountMeta::new_readonly(to_sol_pubkey(&a.pubkey), a.is_signer)
            }
        })
        .collect();
    SolInstruction {
        program_id: to_sol_pubkey(&instruction.program_id),
        accounts,
        data: instruction.data.clone(),
    }
}

fn from_sol_message(message: SolMessage) -> Message {
    Message {
        header: MessageHeader {
            num_required_signatures: message.header.num_required_signatures,
            num_readonly_signed_accounts: message.header.num_readonly_signed_accounts,
            num_readonly_unsigned_accounts: message.header.num_readonly_unsigned_accounts,
        },
        account_keys: message.account_keys.iter().map(|k| k.to_bytes()).collect(),
        recent_blockhash: message.recent_blockhash.to_bytes(),
        instructions: message
            .instructions
            .into_iter()
            .map(|ci| CompiledInstruction {
                program_id_index: ci.program_id_index,
                accounts: ci.accounts,
                data: ci.data,
            })
            .collect(),
    }
}

/// Compiles a [`TxIntent`] into a legacy [`Message`].
pub fn build(intent: TxIntent) -> Result<Message, SolanaError> {
    if intent.instructions.is_empty() {
        return Err(SolanaError::EmptyInstructionList);
    }
    let sol_instructions: Vec<SolInstruction> = intent.instructions.iter().map(to_sol_instruction).collect();
    let payer = to_sol_pubkey(&intent.fee_payer);
    let blockhash = SolHash::new_from_array(intent.recent_blockhash);
    let sol_message = SolMessage::new_with_blockhash(&sol_instructions, Some(&payer), &blockhash);
    Ok(from_sol_message(sol_message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountMeta;

    fn pk(byte: u8) -> Pubkey {
        [byte; 32]
    }

    #[test]
    fn fee_payer_is_always_first_and_signer_writable() {
        let intent = TxIntent {
            fee_payer: pk(1),
            instructions: vec![Instruction {
                program_id: pk(9),
                accounts: vec![AccountMeta { pubkey: pk(1), is_signer: true, is_writable: true }],
                data: vec![],
            }],
            recent_blockhash: [0u8; 32],
        };
        let message = build(intent).unwrap();
        assert_eq!(message.account_keys[0], pk(1));
        assert_eq!(message.header.num_required_signatures, 1);
    }

    #[test]
    fn readonly_classes_are_sorted_lexicographically() {
        let intent = TxIntent {
            fee_payer: pk(1),
            instructions: vec![Instruction {
                program_id: pk(9),
                accounts: vec![
                    AccountMeta { pubkey: pk(5), is_signer: false, is_writable: false },
                    AccountMeta { pubkey: pk(3), is_signer: false, is_writable: false },
                ],
                data: vec![],
            }],
            recent_blockhash: [0u8; 32],
        };
        let message = build(intent).unwrap();
        // fee payer, then program id (non-signer readonly) and accounts 3,5 —
        // all three non-signer-readonly entries sorted lexicographically.
        let tail = &message.account_keys[1..];
        let mut sorted_tail = tail.to_vec();
        sorted_tail.sort();
        assert_eq!(tail, sorted_tail.as_slice());
    }

    #[test]
    fn rejects_empty_instruction_list() {
        let intent = TxIntent { fee_payer: pk(1), instructions: vec![], recent_blockhash: [0u8; 32] };
        assert_eq!(build(intent).unwrap_err(), SolanaError::EmptyInstructionList);
    }

    #[test]
    fn compiled_instruction_indices_reference_account_keys() {
        let intent = TxIntent {
            fee_payer: pk(1),
            instructions: vec![Instruction {
                program_id: pk(9),
                accounts: vec![AccountMeta { pubkey: pk(1), is_signer: true, is_writable: true }],
                data: vec![0xab],
            }],
            recent_blockhash: [0u8; 32],
        };
        let message = build(intent).unwrap();
        let ci = &message.instructions[0];
        assert_eq!(message.account_keys[ci.program_id_index as usize], pk(9));
        assert_eq!(message.account_keys[ci.accounts[0] as usize], pk(1));
        assert_eq!(ci.data, vec![0xab]);
    }
}
