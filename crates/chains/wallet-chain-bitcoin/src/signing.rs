//! Signature attachment (DER-encoded scriptSig / witness stacks), wire
//! serialization, and txid/wtxid (`spec.md` §4.6, §4.7's
//! `Signed(tx) -> Serialized(bytes)` step).

use crate::codec::{serialize_outpoint, serialize_script, serialize_tx_out};
use crate::error::BitcoinError;
use crate::script;
use crate::types::{InputWitness, SigHashType, TxIn, TxOut, UnsignedTransaction};
use wallet_crypto::curve::Signature;
use wallet_crypto::hashing::double_sha256;
use wallet_types::primitives::var_int_bitcoin;

/// Strips leading zero bytes (keeping one if the value is zero) and prepends
/// a `0x00` pad byte if the high bit is set, per DER's minimal signed-integer
/// encoding.
fn der_minimal_int(bytes: &[u8; 32]) -> Vec<u8> {
    let first_nonzero = bytes.iter().position(|&b| b != 0);
    let trimmed = match first_nonzero {
        Some(i) => &bytes[i..],
        None => &bytes[31..],
    };
    if trimmed[0] & 0x80 != 0 {
        let mut out = Vec::with_capacity(trimmed.len() + 1);
        out.push(0x00);
        out.extend_from_slice(trimmed);
        out
    } else {
        trimmed.to_vec()
    }
}

/// DER-encodes an ECDSA `(r, s)` pair as Bitcoin expects in a scriptSig or
/// witness stack (a `SEQUENCE` of two `INTEGER`s).
pub fn der_encode_ecdsa(r: &[u8; 32], s: &[u8; 32]) -> Vec<u8> {
    let r_enc = der_minimal_int(r);
    let s_enc = der_minimal_int(s);
    let mut body = Vec::with_capacity(4 + r_enc.len() + s_enc.len());
    body.push(0x02);
    body.push(r_enc.len() as u8);
    body.extend_from_slice(&r_enc);
    body.push(0x02);
    body.push(s_enc.len() as u8);
    body.extend_from_slice(&s_enc);
    let mut out = Vec::with_capacity(2 + body.len());
    out.push(0x30);
    out.push(body.len() as u8);
    out.extend_from_slice(&body);
    out
}

/// Builds a legacy P2PKH `scriptSig`: `<sig><sighashtype> <pubkey>`.
pub fn legacy_script_sig(
    signature: &Signature,
    sighash_type: SigHashType,
    pubkey_compressed: &[u8; 33],
) -> Result<InputWitness, BitcoinError> {
    let Signature::Ecdsa { r, s, .. } = signature else {
        return Err(BitcoinError::IncompatibleSignature);
    };
    let mut der = der_encode_ecdsa(r, s);
    der.push(sighash_type.0 as u8);
    let mut out = script::push_bytes(&der)?;
    out.extend_from_slice(&script::push_bytes(pubkey_compressed)?);
    Ok(InputWitness::ScriptSig(out))
}

/// Builds a BIP-143 P2WPKH witness stack: `[sig||sighashtype, pubkey]`.
pub fn p2wpkh_witness(
    signature: &Signature,
    sighash_type: SigHashType,
    pubkey_compressed: &[u8; 33],
) -> Result<InputWitness, BitcoinError> {
    let Signature::Ecdsa { r, s, .. } = signature else {
        return Err(BitcoinError::IncompatibleSignature);
    };
    let mut der = der_encode_ecdsa(r, s);
    der.push(sighash_type.0 as u8);
    Ok(InputWitness::Witness(vec![der, pubkey_compressed.to_vec()]))
}

/// Builds a BIP-341 key-path witness stack: `[sig]`, or `[sig||sighashtype]`
/// when the sighash type is not `SIGHASH_DEFAULT` (0x00).
pub fn p2tr_witness(signature: &Signature, sighash_type: SigHashType) -> Result<InputWitness, BitcoinError> {
    let Signature::Schnorr(sig) = signature else {
        return Err(BitcoinError::IncompatibleSignature);
    };
    let mut sig_bytes = sig.to_vec();
    if sighash_type.0 != 0 {
        sig_bytes.push(sighash_type.0 as u8);
    }
    Ok(InputWitness::Witness(vec![sig_bytes]))
}

/// A fully assembled signed transaction, paired inputs with their attached
/// signature material, outputs, and locktime.
pub struct Assembled {
    pub version: i32,
    pub inputs: Vec<(TxIn, InputWitness)>,
    pub outputs: Vec<TxOut>,
    pub locktime: u32,
}

/// Pairs an [`UnsignedTransaction`]'s inputs with their attached
/// [`InputWitness`] values, one per input in order.
pub fn assemble(
    tx: UnsignedTransaction,
    witnesses: Vec<InputWitness>,
) -> Result<Assembled, BitcoinError> {
    if witnesses.len() != tx.inputs.len() {
        return Err(BitcoinError::IncompatibleSignature);
    }
    Ok(Assembled {
        version: tx.version,
        inputs: tx.inputs.into_iter().zip(witnesses).collect(),
        outputs: tx.outputs,
        locktime: tx.locktime,
    })
}

fn has_witness_input(tx: &Assembled) -> bool {
    tx.inputs.iter().any(|(_, w)| matches!(w, InputWitness::Witness(_)))
}

fn serialize_inner(tx: &Assembled, include_witness: bool) -> Vec<u8> {
    let segwit = include_witness && has_witness_input(tx);
    let mut out = Vec::new();
    out.extend_from_slice(&tx.version.to_le_bytes());
    if segwit {
        out.push(0x00);
        out.push(0x01);
    }
    out.extend_from_slice(&var_int_bitcoin::encode(tx.inputs.len() as u64));
    for (input, witness) in &tx.inputs {
        serialize_outpoint(&mut out, &input.prevout);
        let script_sig: &[u8] = match witness {
            InputWitness::ScriptSig(s) => s,
            InputWitness::Witness(_) => &[],
        };
        serialize_script(&mut out, script_sig);
        out.extend_from_slice(&input.sequence.to_le_bytes());
    }
    out.extend_from_slice(&var_int_bitcoin::encode(tx.outputs.len() as u64));
    for output in &tx.outputs {
        serialize_tx_out(&mut out, output);
    }
    if segwit {
        for (_, witness) in &tx.inputs {
            match witness {
                InputWitness::Witness(stack) => {
                    out.extend_from_slice(&var_int_bitcoin::encode(stack.len() as u64));
                    for item in stack {
                        serialize_script(&mut out, item);
                    }
                }
                InputWitness::ScriptSig(_) => out.push(0x00),
            }
        }
    }
    out.extend_from_slice(&tx.locktime.to_le_bytes());
    out
}

/// Full wire serialization, including the segwit marker/flag and witness
/// stacks if any input carries one.
pub fn serialize(tx: &Assembled) -> Vec<u8> {
    serialize_inner(tx, true)
}

/// Legacy (non-witness) serialization, used to compute `txid`.
pub fn serialize_without_witness(tx: &Assembled) -> Vec<u8> {
    serialize_inner(tx, false)
}

/// The transaction id: `dSHA256` of the non-witness serialization. Unaffected
/// by witness data (BIP-141's malleability fix).
pub fn txid(tx: &Assembled) -> [u8; 32] {
    double_sha256(&serialize_without_witness(tx))
}

/// The witness transaction id: `dSHA256` of the full (witness-inclusive)
/// serialization.
pub fn wtxid(tx: &Assembled) -> [u8; 32] {
    double_sha256(&serialize(tx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutPoint, ScriptType};

    fn sample_unsigned() -> UnsignedTransaction {
        UnsignedTransaction {
            version: 2,
            inputs: vec![TxIn {
                prevout: OutPoint { txid: [9u8; 32], vout: 1 },
                prev_script_pubkey: script::p2wpkh(&[7u8; 20]),
                value: 50_000,
                sequence: 0xffff_ffff,
                script_type: ScriptType::P2wpkh,
            }],
            outputs: vec![TxOut { value: 40_000, script_pubkey: script::p2wpkh(&[8u8; 20]) }],
            locktime: 0,
        }
    }

    #[test]
    fn der_encoding_strips_leading_zeros_and_pads_high_bit() {
        let mut r = [0u8; 32];
        r[31] = 0x01;
        let mut s = [0u8; 32];
        s[0] = 0x80; // high bit set, needs a 0x00 pad
        let der = der_encode_ecdsa(&r, &s);
        assert_eq!(der[0], 0x30);
        // r is a single minimal byte; s is 33 bytes (0x00 pad + 32).
        assert_eq!(der[2], 0x02);
        assert_eq!(der[3], 1);
        let s_tag_offset = 4 + 1;
        assert_eq!(der[s_tag_offset], 0x02);
        assert_eq!(der[s_tag_offset + 1], 33);
        assert_eq!(der[s_tag_offset + 2], 0x00);
    }

    #[test]
    fn txid_ignores_witness_data() {
        let unsigned = sample_unsigned();
        let sig = Signature::Ecdsa { r: [1u8; 32], s: [2u8; 32], rec_id: 0 };
        let witness = p2wpkh_witness(&sig, SigHashType::ALL, &[3u8; 33]).unwrap();
        let assembled = assemble(unsigned, vec![witness]).unwrap();
        let legacy_bytes = serialize_without_witness(&assembled);
        let full_bytes = serialize(&assembled);
        assert_ne!(legacy_bytes, full_bytes);
        assert_eq!(txid(&assembled).len(), 32);
    }

    #[test]
    fn p2tr_witness_omits_sighash_byte_for_default() {
        let sig = Signature::Schnorr([5u8; 64]);
        let witness = p2tr_witness(&sig, SigHashType(0)).unwrap();
        match witness {
            InputWitness::Witness(stack) => assert_eq!(stack[0].len(), 64),
            _ => panic!("expected witness"),
        }
    }

    #[test]
    fn legacy_script_sig_rejects_non_ecdsa() {
        let sig = Signature::Ed25519([0u8; 64]);
        assert!(legacy_script_sig(&sig, SigHashType::ALL, &[0u8; 33]).is_err());
    }
}
