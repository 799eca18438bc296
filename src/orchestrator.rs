//! The L7 signer orchestrator (`spec.md` §4.8): `build -> preimages ->
//! (external signing) -> assemble -> serialize`. This module owns no key
//! material and performs no I/O; it only routes bytes between the
//! per-family chain crates and a caller-supplied [`crate::signer::Signer`].

use crate::intent::{Intent, Preimage, SignedTx, Serialized, UnsignedTx};
use crate::signer::{KeyProvider, SignatureKind, Signer};
use wallet_chain_bitcoin::types::ScriptType;
use wallet_chain_bitcoin::{sighash as btc_sighash, signing as btc_signing};
use wallet_crypto::curve::{Curve, Signature};
use wallet_crypto::hashing::sha256;
use wallet_hd::DerivationPath;
use wallet_types::error::CoreError;

/// Coordinates construction, hashing, and signing across every supported
/// chain family, wired to a concrete [`KeyProvider`]/[`Signer`] pair.
pub struct WalletCore<P, S> {
    provider: P,
    signer: S,
}

impl<P, S> WalletCore<P, S>
where
    P: KeyProvider,
    S: Signer,
{
    pub fn new(provider: P, signer: S) -> Self {
        Self { provider, signer }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The compressed secp256k1 public key at `path`, needed to build a
    /// legacy or P2WPKH witness (`spec.md` §4.7: these scripts commit to the
    /// spender's public key, not just their signature).
    fn compressed_pubkey(&self, path: &DerivationPath) -> Result<[u8; 33], CoreError> {
        let key_ref = self
            .provider
            .derive(path, Curve::Secp256k1)
            .map_err(|e| CoreError::InputValidation(format!("{:?}", e)))?;
        let bytes = self
            .provider
            .public_key(&key_ref, Curve::Secp256k1)
            .map_err(|e| CoreError::Crypto(format!("{:?}", e)))?;
        bytes
            .try_into()
            .map_err(|_| CoreError::Crypto("expected 33-byte compressed public key".into()))
    }

    /// `spec.md` §6: `build(intent) -> UnsignedTx`. Delegates to the
    /// family's own builder, then reattaches the signer-routing metadata the
    /// per-family crates have no concept of.
    pub fn build(&self, intent: Intent) -> Result<UnsignedTx, CoreError> {
        match intent {
            Intent::Evm { intent, signer_path } => {
                tracing::debug!(path = %signer_path, "building EVM transaction");
                let tx = wallet_chain_evm::builder::build(intent)
                    .inspect_err(|e| tracing::warn!(error = %e, "EVM build failed"))
                    .map_err(|e| CoreError::InputValidation(e.to_string()))?;
                Ok(UnsignedTx::Evm { tx, signer_path })
            }
            Intent::Bitcoin { version, inputs, outputs, locktime } => {
                tracing::debug!(inputs = inputs.len(), outputs = outputs.len(), "building Bitcoin transaction");
                let routing: Vec<(DerivationPath, wallet_chain_bitcoin::SigHashType)> = inputs
                    .iter()
                    .map(|i| (i.signer_path.clone(), i.sighash_type))
                    .collect();
                let tx_ins = inputs.into_iter().map(|i| i.tx_in).collect();
                let tx = wallet_chain_bitcoin::builder::build(version, tx_ins, outputs, locktime)
                    .inspect_err(|e| tracing::warn!(error = %e, "Bitcoin build failed"))
                    .map_err(|e| CoreError::InputValidation(e.to_string()))?;
                Ok(UnsignedTx::Bitcoin { tx, inputs: routing })
            }
            Intent::Cosmos { intent, signer_path } => {
                tracing::debug!(path = %signer_path, "building Cosmos transaction");
                let doc = wallet_chain_cosmos::builder::build(intent)
                    .inspect_err(|e| tracing::warn!(error = %e, "Cosmos build failed"))
                    .map_err(|e| CoreError::InputValidation(e.to_string()))?;
                Ok(UnsignedTx::Cosmos { doc, signer_path })
            }
            Intent::Solana { intent, signer_path } => {
                tracing::debug!(path = %signer_path, "building Solana message");
                let message = wallet_chain_solana::builder::build(intent)
                    .inspect_err(|e| tracing::warn!(error = %e, "Solana build failed"))
                    .map_err(|e| CoreError::InputValidation(e.to_string()))?;
                if message.header.num_required_signatures != 1 {
                    tracing::warn!(
                        signers = message.header.num_required_signatures,
                        "rejecting multi-signer Solana message"
                    );
                    return Err(CoreError::Invariant(
                        "only single-signer Solana messages are supported by this core".into(),
                    ));
                }
                Ok(UnsignedTx::Solana { message, signer_path })
            }
            Intent::Erc4337 { intent, version, entry_point, chain_id, signer_path } => {
                tracing::debug!(path = %signer_path, chain_id, "building ERC-4337 UserOperation");
                let op = wallet_chain_erc4337::builder::build(intent, version)
                    .inspect_err(|e| tracing::warn!(error = %e, "ERC-4337 build failed"))
                    .map_err(|e| CoreError::InputValidation(e.to_string()))?;
                Ok(UnsignedTx::Erc4337 { op, entry_point, chain_id, signer_path })
            }
        }
    }

    /// `spec.md` §6: `preimages(unsignedTx) -> [(signerPath, digest, kind)]`.
    pub fn preimages(&self, tx: &UnsignedTx) -> Result<Vec<Preimage>, CoreError> {
        match tx {
            UnsignedTx::Evm { tx, signer_path } => {
                tracing::debug!(path = %signer_path, "computing EVM sighash");
                Ok(vec![Preimage {
                    signer_path: signer_path.clone(),
                    kind: SignatureKind::Ecdsa,
                    data: wallet_chain_evm::sighash::preimage(tx).to_vec(),
                }])
            }
            UnsignedTx::Bitcoin { tx, inputs } => {
                tracing::debug!(inputs = inputs.len(), "computing Bitcoin sighashes");
                inputs
                    .iter()
                    .enumerate()
                    .map(|(index, (path, sighash_type))| bitcoin_preimage(tx, index, *sighash_type, path))
                    .collect()
            }
            UnsignedTx::Cosmos { doc, signer_path } => {
                tracing::debug!(path = %signer_path, "computing Cosmos SIGN_MODE_DIRECT sighash");
                Ok(vec![Preimage {
                    signer_path: signer_path.clone(),
                    kind: SignatureKind::Ecdsa,
                    data: wallet_chain_cosmos::sighash::preimage(doc)
                        .inspect_err(|e| tracing::warn!(error = %e, "Cosmos sighash failed"))
                        .map_err(|e| CoreError::InputValidation(e.to_string()))?
                        .to_vec(),
                }])
            }
            UnsignedTx::Solana { message, signer_path } => {
                tracing::debug!(path = %signer_path, "computing Solana Ed25519 preimage");
                Ok(vec![Preimage {
                    signer_path: signer_path.clone(),
                    kind: SignatureKind::Ed25519,
                    data: wallet_chain_solana::signing::preimage(message),
                }])
            }
            UnsignedTx::Erc4337 { op, entry_point, chain_id, signer_path } => {
                tracing::debug!(path = %signer_path, chain_id, "computing ERC-4337 userOpHash");
                Ok(vec![Preimage {
                    signer_path: signer_path.clone(),
                    kind: SignatureKind::Ecdsa,
                    data: wallet_chain_erc4337::sighash::user_op_hash(op, *entry_point, *chain_id).to_vec(),
                }])
            }
        }
    }

    /// Requests every pre-image's signature from the configured [`Signer`],
    /// in the same order [`Self::preimages`] returned them.
    pub async fn sign(&self, preimages: &[Preimage]) -> Result<Vec<Signature>, CoreError> {
        tracing::debug!(count = preimages.len(), "requesting signatures");
        let mut signatures = Vec::with_capacity(preimages.len());
        for preimage in preimages {
            let key_ref = self
                .provider
                .derive(&preimage.signer_path, preimage.kind.curve())
                .inspect_err(|e| tracing::warn!(path = %preimage.signer_path, error = ?e, "key derivation failed"))
                .map_err(|e| CoreError::InputValidation(format!("{:?}", e)))?;
            let signature = self
                .signer
                .sign(preimage.kind, &key_ref, &preimage.data)
                .await
                .inspect_err(|e| tracing::warn!(path = %preimage.signer_path, error = %e, "signer rejected request"))
                .map_err(|source| CoreError::Signer { family: "signer", source })?;
            signatures.push(signature);
        }
        Ok(signatures)
    }

    /// `spec.md` §6: `assemble(unsignedTx, signatures) -> SignedTx`.
    pub fn assemble(&self, tx: UnsignedTx, signatures: Vec<Signature>) -> Result<SignedTx, CoreError> {
        tracing::debug!(signatures = signatures.len(), "assembling signed transaction");
        match tx {
            UnsignedTx::Evm { tx, .. } => {
                let sig = single(signatures)?;
                let signed = wallet_chain_evm::signing::attach_signature(tx, &sig)
                    .inspect_err(|e| tracing::warn!(error = %e, "EVM signature attachment failed"))
                    .map_err(|e| CoreError::Crypto(e.to_string()))?;
                Ok(SignedTx::Evm(signed))
            }
            UnsignedTx::Bitcoin { tx, inputs } => {
                if signatures.len() != inputs.len() {
                    tracing::warn!(
                        expected = inputs.len(),
                        got = signatures.len(),
                        "Bitcoin signature count mismatch"
                    );
                    return Err(CoreError::Invariant(format!(
                        "expected {} Bitcoin signatures, got {}",
                        inputs.len(),
                        signatures.len()
                    )));
                }
                let mut witnesses = Vec::with_capacity(inputs.len());
                for (input, (signature, (path, sighash_type))) in
                    tx.inputs.iter().zip(signatures.into_iter().zip(inputs.iter()))
                {
                    let witness = match input.script_type {
                        ScriptType::Legacy => {
                            let pubkey = self.compressed_pubkey(path)?;
                            btc_signing::legacy_script_sig(&signature, *sighash_type, &pubkey)
                        }
                        ScriptType::P2wpkh => {
                            let pubkey = self.compressed_pubkey(path)?;
                            btc_signing::p2wpkh_witness(&signature, *sighash_type, &pubkey)
                        }
                        ScriptType::P2tr => btc_signing::p2tr_witness(&signature, *sighash_type),
                    }
                    .map_err(|e| CoreError::InputValidation(e.to_string()))?;
                    witnesses.push(witness);
                }
                let assembled = btc_signing::assemble(tx, witnesses)
                    .map_err(|e| CoreError::InputValidation(e.to_string()))?;
                Ok(SignedTx::Bitcoin(assembled))
            }
            UnsignedTx::Cosmos { doc, .. } => {
                let sig = single(signatures)?;
                let signed = wallet_chain_cosmos::signing::attach_signature(doc, &sig)
                    .inspect_err(|e| tracing::warn!(error = %e, "Cosmos signature attachment failed"))
                    .map_err(|e| CoreError::InputValidation(e.to_string()))?;
                Ok(SignedTx::Cosmos(signed))
            }
            UnsignedTx::Solana { message, .. } => {
                let signed = wallet_chain_solana::signing::assemble(message, signatures)
                    .inspect_err(|e| tracing::warn!(error = %e, "Solana signature attachment failed"))
                    .map_err(|e| CoreError::InputValidation(e.to_string()))?;
                Ok(SignedTx::Solana(signed))
            }
            UnsignedTx::Erc4337 { op, .. } => {
                let sig = single(signatures)?;
                let signed = wallet_chain_erc4337::signing::attach_signature(op, &sig)
                    .inspect_err(|e| tracing::warn!(error = %e, "ERC-4337 signature attachment failed"))
                    .map_err(|e| CoreError::InputValidation(e.to_string()))?;
                Ok(SignedTx::Erc4337(signed))
            }
        }
    }

    /// `spec.md` §6: `serialize(signedTx) -> {wireBytes, txid}`.
    pub fn serialize(&self, tx: &SignedTx) -> Serialized {
        tracing::debug!("serializing signed transaction to wire bytes");
        match tx {
            SignedTx::Evm(signed) => {
                let wire_bytes = wallet_chain_evm::signing::serialize(signed);
                let txid = wallet_chain_evm::signing::txid(signed).to_vec();
                Serialized { wire_bytes, txid }
            }
            SignedTx::Bitcoin(signed) => {
                let wire_bytes = btc_signing::serialize(signed);
                let txid = btc_signing::txid(signed).to_vec();
                Serialized { wire_bytes, txid }
            }
            SignedTx::Cosmos(signed) => {
                let wire_bytes = wallet_chain_cosmos::signing::serialize(signed);
                let txid = sha256(&wire_bytes).to_vec();
                Serialized { wire_bytes, txid }
            }
            SignedTx::Solana(signed) => {
                let wire_bytes = wallet_chain_solana::codec::serialize_transaction(signed);
                let txid = signed.signatures.first().map(|s| s.to_vec()).unwrap_or_default();
                Serialized { wire_bytes, txid }
            }
            SignedTx::Erc4337(signed) => {
                let fields = wallet_chain_erc4337::signing::serialize(signed);
                let wire_bytes = fields
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join("&")
                    .into_bytes();
                Serialized { wire_bytes, txid: Vec::new() }
            }
        }
    }
}

fn single(mut signatures: Vec<Signature>) -> Result<Signature, CoreError> {
    if signatures.len() != 1 {
        tracing::warn!(got = signatures.len(), "expected exactly one signature");
        return Err(CoreError::Invariant(format!(
            "expected exactly one signature, got {}",
            signatures.len()
        )));
    }
    Ok(signatures.remove(0))
}

fn bitcoin_preimage(
    tx: &wallet_chain_bitcoin::UnsignedTransaction,
    input_index: usize,
    sighash_type: wallet_chain_bitcoin::SigHashType,
    signer_path: &DerivationPath,
) -> Result<Preimage, CoreError> {
    let input = &tx.inputs[input_index];
    let (kind, data) = match input.script_type {
        ScriptType::Legacy => {
            let script_code = input.prev_script_pubkey.clone();
            (SignatureKind::Ecdsa, btc_sighash::legacy_sighash(tx, input_index, &script_code).to_vec())
        }
        ScriptType::P2wpkh => {
            let script_code = wallet_chain_bitcoin::script::p2wpkh_program(&input.prev_script_pubkey)
                .map(|hash| wallet_chain_bitcoin::script::p2wpkh_script_code(&hash))
                .ok_or_else(|| CoreError::InputValidation("input is not a P2WPKH prevout".into()))?;
            (
                SignatureKind::Ecdsa,
                btc_sighash::bip143_sighash(tx, input_index, &script_code, sighash_type).to_vec(),
            )
        }
        ScriptType::P2tr => {
            (SignatureKind::Schnorr, btc_sighash::bip341_sighash(tx, input_index, sighash_type).to_vec())
        }
    };
    Ok(Preimage { signer_path: signer_path.clone(), kind, data })
}
