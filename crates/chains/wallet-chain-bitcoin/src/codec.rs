//! Legacy (non-segwit) transaction byte serialization shared by sighash
//! computation and final wire serialization.

use crate::types::{OutPoint, TxOut};
use wallet_types::primitives::var_int_bitcoin;

pub fn serialize_outpoint(out: &mut Vec<u8>, outpoint: &OutPoint) {
    out.extend_from_slice(&outpoint.txid);
    out.extend_from_slice(&outpoint.vout.to_le_bytes());
}

pub fn serialize_tx_out(out: &mut Vec<u8>, txout: &TxOut) {
    out.extend_from_slice(&txout.value.to_le_bytes());
    out.extend_from_slice(&var_int_bitcoin::encode(txout.script_pubkey.len() as u64));
    out.extend_from_slice(&txout.script_pubkey);
}

pub fn serialize_script(out: &mut Vec<u8>, script: &[u8]) {
    out.extend_from_slice(&var_int_bitcoin::encode(script.len() as u64));
    out.extend_from_slice(script);
}
