//! Solana instruction/message data model (`spec.md` §4.5, §4.6).

/// A 32-byte Solana account address (itself Ed25519 key material, but opaque
/// at this layer — just bytes to be ordered and referenced by index).
pub type Pubkey = [u8; 32];

/// A single account reference within an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// An uncompiled instruction: a program id plus its account references and
/// opaque instruction data.
#[derive(Debug, Clone)]
pub struct Instruction {
    pub program_id: Pubkey,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

/// Everything needed to compile a legacy (non-versioned) Solana `Message`.
#[derive(Debug, Clone)]
pub struct TxIntent {
    pub fee_payer: Pubkey,
    pub instructions: Vec<Instruction>,
    pub recent_blockhash: [u8; 32],
}

/// `MessageHeader`: counts needed to reconstruct each account key's
/// signer/writable privileges from its position alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub num_required_signatures: u8,
    pub num_readonly_signed_accounts: u8,
    pub num_readonly_unsigned_accounts: u8,
}

/// A compiled instruction: account references as indices into the message's
/// `account_keys`.
#[derive(Debug, Clone)]
pub struct CompiledInstruction {
    pub program_id_index: u8,
    pub accounts: Vec<u8>,
    pub data: Vec<u8>,
}

/// A compiled legacy Solana `Message`, ready for `short_vec` serialization
/// and Ed25519 signing.
#[derive(Debug, Clone)]
pub struct Message {
    pub header: MessageHeader,
    pub account_keys: Vec<Pubkey>,
    pub recent_blockhash: [u8; 32],
    pub instructions: Vec<CompiledInstruction>,
}

/// A signed transaction: one 64-byte Ed25519 signature per required signer,
/// in `account_keys` order, plus the signed message.
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    pub signatures: Vec<[u8; 64]>,
    pub message: Message,
}
