//! Sighash / signing-preimage construction (`spec.md` §4.7): legacy,
//! BIP-143 (SegWit v0), and BIP-341 (Taproot key-path spend, no annex).

use crate::codec::{serialize_outpoint, serialize_script, serialize_tx_out};
use crate::types::{SigHashType, UnsignedTransaction};
use wallet_crypto::hashing::{double_sha256, sha256, tagged_hash};

const ZERO_HASH: [u8; 32] = [0u8; 32];

/// Classic pre-SegWit sighash (SIGHASH_ALL only): the target input's
/// `scriptSig` is replaced with `script_code`, every other input's is
/// emptied, the whole transaction is serialized with a trailing 4-byte
/// little-endian sighash type, and double-SHA-256'd.
pub fn legacy_sighash(tx: &UnsignedTransaction, input_index: usize, script_code: &[u8]) -> [u8; 32] {
    let mut buf = Vec::new();
    buf.extend_from_slice(&tx.version.to_le_bytes());
    buf.extend_from_slice(&wallet_types::primitives::var_int_bitcoin::encode(
        tx.inputs.len() as u64,
    ));
    for (i, input) in tx.inputs.iter().enumerate() {
        serialize_outpoint(&mut buf, &input.prevout);
        if i == input_index {
            serialize_script(&mut buf, script_code);
        } else {
            serialize_script(&mut buf, &[]);
        }
        buf.extend_from_slice(&input.sequence.to_le_bytes());
    }
    buf.extend_from_slice(&wallet_types::primitives::var_int_bitcoin::encode(
        tx.outputs.len() as u64,
    ));
    for output in &tx.outputs {
        serialize_tx_out(&mut buf, output);
    }
    buf.extend_from_slice(&tx.locktime.to_le_bytes());
    buf.extend_from_slice(&(SigHashType::ALL.0).to_le_bytes());
    double_sha256(&buf)
}

fn hash_prevouts(tx: &UnsignedTransaction) -> [u8; 32] {
    let mut buf = Vec::new();
    for input in &tx.inputs {
        serialize_outpoint(&mut buf, &input.prevout);
    }
    double_sha256(&buf)
}

fn hash_sequences(tx: &UnsignedTransaction) -> [u8; 32] {
    let mut buf = Vec::new();
    for input in &tx.inputs {
        buf.extend_from_slice(&input.sequence.to_le_bytes());
    }
    double_sha256(&buf)
}

fn hash_outputs(tx: &UnsignedTransaction, sighash_type: SigHashType, input_index: usize) -> [u8; 32] {
    if sighash_type.is_single() {
        return match tx.outputs.get(input_index) {
            Some(out) => {
                let mut buf = Vec::new();
                serialize_tx_out(&mut buf, out);
                double_sha256(&buf)
            }
            None => ZERO_HASH,
        };
    }
    if sighash_type.is_none() {
        return ZERO_HASH;
    }
    let mut buf = Vec::new();
    for output in &tx.outputs {
        serialize_tx_out(&mut buf, output);
    }
    double_sha256(&buf)
}

/// BIP-143 SegWit v0 sighash, for a P2WPKH input.
///
/// `script_code` is the length-prefixed `scriptCode` (for P2WPKH, the legacy
/// P2PKH script of the pubkey hash — see [`crate::script::p2wpkh_script_code`]).
pub fn bip143_sighash(
    tx: &UnsignedTransaction,
    input_index: usize,
    script_code: &[u8],
    sighash_type: SigHashType,
) -> [u8; 32] {
    let input = &tx.inputs[input_index];

    let hash_prevouts = if sighash_type.anyone_can_pay() { ZERO_HASH } else { hash_prevouts(tx) };
    let hash_sequence = if sighash_type.anyone_can_pay() || sighash_type.is_none() || sighash_type.is_single()
    {
        ZERO_HASH
    } else {
        hash_sequences(tx)
    };
    let hash_outs = hash_outputs(tx, sighash_type, input_index);

    let mut buf = Vec::new();
    buf.extend_from_slice(&tx.version.to_le_bytes());
    buf.extend_from_slice(&hash_prevouts);
    buf.extend_from_slice(&hash_sequence);
    serialize_outpoint(&mut buf, &input.prevout);
    buf.extend_from_slice(script_code);
    buf.extend_from_slice(&input.value.to_le_bytes());
    buf.extend_from_slice(&input.sequence.to_le_bytes());
    buf.extend_from_slice(&hash_outs);
    buf.extend_from_slice(&tx.locktime.to_le_bytes());
    buf.extend_from_slice(&sighash_type.0.to_le_bytes());
    double_sha256(&buf)
}

/// BIP-341 Taproot key-path sighash, without an annex (`spec.md` §4.7).
/// Requires every input's prevout amount and `scriptPubKey`, since Taproot's
/// sighash commits to the whole spent-output set.
pub fn bip341_sighash(tx: &UnsignedTransaction, input_index: usize, sighash_type: SigHashType) -> [u8; 32] {
    let mut msg = Vec::new();
    msg.push(0x00); // epoch
    msg.push(sighash_type.0 as u8);
    msg.extend_from_slice(&tx.version.to_le_bytes());
    msg.extend_from_slice(&tx.locktime.to_le_bytes());

    if !sighash_type.anyone_can_pay() {
        let mut prevouts = Vec::new();
        let mut amounts = Vec::new();
        let mut scriptpubkeys = Vec::new();
        let mut sequences = Vec::new();
        for input in &tx.inputs {
            serialize_outpoint(&mut prevouts, &input.prevout);
            amounts.extend_from_slice(&input.value.to_le_bytes());
            serialize_script(&mut scriptpubkeys, &input.prev_script_pubkey);
            sequences.extend_from_slice(&input.sequence.to_le_bytes());
        }
        msg.extend_from_slice(&sha256(&prevouts));
        msg.extend_from_slice(&sha256(&amounts));
        msg.extend_from_slice(&sha256(&scriptpubkeys));
        msg.extend_from_slice(&sha256(&sequences));
    }

    if sighash_type.base() == SigHashType::ALL.0 || sighash_type.base() == 0 {
        let mut outputs = Vec::new();
        for output in &tx.outputs {
            serialize_tx_out(&mut outputs, output);
        }
        msg.extend_from_slice(&sha256(&outputs));
    }

    let spend_type: u8 = 0; // ext_flag = 0 (key-path spend), annex never present
    msg.push(spend_type);

    if sighash_type.anyone_can_pay() {
        let input = &tx.inputs[input_index];
        serialize_outpoint(&mut msg, &input.prevout);
        msg.extend_from_slice(&input.value.to_le_bytes());
        serialize_script(&mut msg, &input.prev_script_pubkey);
        msg.extend_from_slice(&input.sequence.to_le_bytes());
    } else {
        msg.extend_from_slice(&(input_index as u32).to_le_bytes());
    }

    if sighash_type.is_single() {
        let mut single_output = Vec::new();
        if let Some(out) = tx.outputs.get(input_index) {
            serialize_tx_out(&mut single_output, out);
        }
        msg.extend_from_slice(&sha256(&single_output));
    }

    tagged_hash("TapSighash", &msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutPoint, ScriptType, TxIn, TxOut};

    fn sample_tx() -> UnsignedTransaction {
        UnsignedTransaction {
            version: 2,
            inputs: vec![TxIn {
                prevout: OutPoint { txid: [1u8; 32], vout: 0 },
                prev_script_pubkey: crate::script::p2wpkh(&[0xaa; 20]),
                value: 100_000,
                sequence: 0xffff_ffff,
                script_type: ScriptType::P2wpkh,
            }],
            outputs: vec![TxOut { value: 90_000, script_pubkey: vec![0x00, 0x14, 0xbb] }],
            locktime: 0,
        }
    }

    #[test]
    fn legacy_sighash_is_deterministic() {
        let tx = sample_tx();
        let code = crate::script::p2pkh(&[0xaa; 20]);
        let a = legacy_sighash(&tx, 0, &code);
        let b = legacy_sighash(&tx, 0, &code);
        assert_eq!(a, b);
    }

    #[test]
    fn bip143_sighash_differs_with_anyonecanpay() {
        let tx = sample_tx();
        let code = crate::script::p2wpkh_script_code(&[0xaa; 20]);
        let all = bip143_sighash(&tx, 0, &code, SigHashType::ALL);
        let acp = bip143_sighash(
            &tx,
            0,
            &code,
            SigHashType(SigHashType::ALL.0 | SigHashType::ANYONECANPAY),
        );
        assert_ne!(all, acp);
    }

    #[test]
    fn bip341_sighash_is_32_bytes_and_deterministic() {
        let tx = sample_tx();
        let a = bip341_sighash(&tx, 0, SigHashType(0));
        let b = bip341_sighash(&tx, 0, SigHashType(0));
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn bip341_sighash_changes_with_input_set() {
        let tx = sample_tx();
        let mut tx2 = tx.clone();
        tx2.inputs[0].value = 1;
        assert_ne!(
            bip341_sighash(&tx, 0, SigHashType(0)),
            bip341_sighash(&tx2, 0, SigHashType(0))
        );
    }
}
