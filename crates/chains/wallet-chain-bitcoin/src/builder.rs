//! The Bitcoin transaction builder (`spec.md` §4.6).
//!
//! The caller supplies ordered, fully-specified inputs (with UTxO metadata)
//! and outputs; the builder only enforces that outputs never exceed inputs.
//! Change output construction is the caller's responsibility.

use crate::error::BitcoinError;
use crate::types::{TxIn, TxOut, UnsignedTransaction};

/// Builds an [`UnsignedTransaction`], rejecting an output total that exceeds
/// the input total.
pub fn build(
    version: i32,
    inputs: Vec<TxIn>,
    outputs: Vec<TxOut>,
    locktime: u32,
) -> Result<UnsignedTransaction, BitcoinError> {
    let input_total: u64 = inputs.iter().map(|i| i.value).sum();
    let output_total: u64 = outputs.iter().map(|o| o.value).sum();
    if output_total > input_total {
        return Err(BitcoinError::InsufficientInput { input_total, output_total });
    }
    Ok(UnsignedTransaction { version, inputs, outputs, locktime })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutPoint, ScriptType};

    fn sample_input(value: u64) -> TxIn {
        TxIn {
            prevout: OutPoint { txid: [0u8; 32], vout: 0 },
            prev_script_pubkey: crate::script::p2wpkh(&[0u8; 20]),
            value,
            sequence: 0xffff_ffff,
            script_type: ScriptType::P2wpkh,
        }
    }

    fn sample_output(value: u64) -> TxOut {
        TxOut { value, script_pubkey: crate::script::p2wpkh(&[1u8; 20]) }
    }

    #[test]
    fn accepts_outputs_under_input_total() {
        let tx = build(2, vec![sample_input(100_000)], vec![sample_output(90_000)], 0).unwrap();
        assert_eq!(tx.inputs.len(), 1);
    }

    #[test]
    fn rejects_outputs_exceeding_input_total() {
        let result = build(2, vec![sample_input(100_000)], vec![sample_output(200_000)], 0);
        assert!(matches!(result, Err(BitcoinError::InsufficientInput { .. })));
    }

    #[test]
    fn accepts_exact_match() {
        let tx = build(2, vec![sample_input(100_000)], vec![sample_output(100_000)], 0).unwrap();
        assert_eq!(tx.outputs[0].value, 100_000);
    }
}
