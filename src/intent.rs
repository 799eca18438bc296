//! The orchestrator's unified intent/unsigned/signed sum types (`spec.md`
//! §4.8, §6). Each variant pairs a chain-family's own `TxIntent` with the
//! signer paths the orchestrator needs to route pre-images back to the right
//! key — information none of the per-family crates carry themselves, since
//! they have no concept of a signer.

use alloy_primitives::Address;
use wallet_hd::DerivationPath;

/// One Bitcoin input plus the signer path and sighash type that apply to it.
/// Bitcoin inputs may be owned by different keys, so this is carried
/// per-input rather than once for the whole transaction.
#[derive(Debug, Clone)]
pub struct BitcoinInputIntent {
    pub tx_in: wallet_chain_bitcoin::TxIn,
    pub signer_path: DerivationPath,
    pub sighash_type: wallet_chain_bitcoin::SigHashType,
}

/// The caller's transaction-construction request, one variant per supported
/// chain family (`spec.md` §2's layer table).
#[derive(Debug, Clone)]
pub enum Intent {
    Evm {
        intent: wallet_chain_evm::TxIntent,
        signer_path: DerivationPath,
    },
    Bitcoin {
        version: i32,
        inputs: Vec<BitcoinInputIntent>,
        outputs: Vec<wallet_chain_bitcoin::TxOut>,
        locktime: u32,
    },
    Cosmos {
        intent: wallet_chain_cosmos::TxIntent,
        signer_path: DerivationPath,
    },
    Solana {
        intent: wallet_chain_solana::TxIntent,
        signer_path: DerivationPath,
    },
    Erc4337 {
        intent: wallet_chain_erc4337::TxIntent,
        version: wallet_chain_erc4337::Version,
        entry_point: Address,
        chain_id: u64,
        signer_path: DerivationPath,
    },
}

/// A built, not-yet-signed transaction, still carrying the signer-routing
/// metadata `build` consumed from the [`Intent`].
#[derive(Debug, Clone)]
pub enum UnsignedTx {
    Evm {
        tx: wallet_chain_evm::UnsignedTransaction,
        signer_path: DerivationPath,
    },
    Bitcoin {
        tx: wallet_chain_bitcoin::UnsignedTransaction,
        inputs: Vec<(DerivationPath, wallet_chain_bitcoin::SigHashType)>,
    },
    Cosmos {
        doc: wallet_chain_cosmos::UnsignedSignDoc,
        signer_path: DerivationPath,
    },
    Solana {
        message: wallet_chain_solana::Message,
        signer_path: DerivationPath,
    },
    Erc4337 {
        op: wallet_chain_erc4337::UnsignedUserOperation,
        entry_point: Address,
        chain_id: u64,
        signer_path: DerivationPath,
    },
}

/// A fully signed transaction, one variant per family, ready for
/// [`crate::orchestrator::WalletCore::serialize`].
#[derive(Debug, Clone)]
pub enum SignedTx {
    Evm(wallet_chain_evm::SignedTransaction),
    Bitcoin(wallet_chain_bitcoin::signing::Assembled),
    Cosmos(wallet_chain_cosmos::types::SignedTx),
    Solana(wallet_chain_solana::SignedTransaction),
    Erc4337(wallet_chain_erc4337::types::SignedUserOperation),
}

/// A pre-image the orchestrator needs a [`crate::signer::Signer`] to sign,
/// routed back to the key that must produce it (`spec.md` §4.8 step 3).
#[derive(Debug, Clone)]
pub struct Preimage {
    pub signer_path: DerivationPath,
    pub kind: crate::signer::SignatureKind,
    pub data: Vec<u8>,
}

/// The final wire-serialized transaction plus its id, in whatever shape is
/// canonical for the family (32-byte hash for EVM/Bitcoin/Cosmos/ERC-4337,
/// the raw first Ed25519 signature for Solana).
#[derive(Debug, Clone)]
pub struct Serialized {
    pub wire_bytes: Vec<u8>,
    pub txid: Vec<u8>,
}
