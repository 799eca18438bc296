//! Script construction and template recognition (`spec.md` §4.5).
//!
//! Only the handful of opcodes the supported templates need are named; this
//! is not a general script interpreter.

use crate::error::BitcoinError;

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1: u8 = 0x51;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;

/// Compiles a single data push per Bitcoin's minimal-push rules: a bare
/// length byte for data under 0x4c bytes, otherwise the matching
/// `OP_PUSHDATA{1,2,4}` plus a little-endian length field.
pub fn push_bytes(data: &[u8]) -> Result<Vec<u8>, BitcoinError> {
    let len = data.len();
    let mut out = Vec::with_capacity(len + 5);
    if len < 0x4c {
        out.push(len as u8);
    } else if len <= 0xff {
        out.push(OP_PUSHDATA1);
        out.push(len as u8);
    } else if len <= 0xffff {
        out.push(OP_PUSHDATA2);
        out.extend_from_slice(&(len as u16).to_le_bytes());
    } else if len <= 0xffff_ffff {
        out.push(OP_PUSHDATA4);
        out.extend_from_slice(&(len as u32).to_le_bytes());
    } else {
        return Err(BitcoinError::PushDataTooLarge(len));
    }
    out.extend_from_slice(data);
    Ok(out)
}

/// `OP_DUP OP_HASH160 <20-byte hash> OP_EQUALVERIFY OP_CHECKSIG`.
pub fn p2pkh(pubkey_hash: &[u8; 20]) -> Vec<u8> {
    let mut out = Vec::with_capacity(25);
    out.push(OP_DUP);
    out.push(OP_HASH160);
    out.extend_from_slice(&push_bytes(pubkey_hash).expect("20 bytes is always a short push"));
    out.push(OP_EQUALVERIFY);
    out.push(OP_CHECKSIG);
    out
}

/// `OP_HASH160 <20-byte hash> OP_EQUAL`.
pub fn p2sh(script_hash: &[u8; 20]) -> Vec<u8> {
    let mut out = Vec::with_capacity(23);
    out.push(OP_HASH160);
    out.extend_from_slice(&push_bytes(script_hash).expect("20 bytes is always a short push"));
    out.push(OP_EQUAL);
    out
}

/// `OP_0 <20-byte hash>` (witness version 0, program length 20).
pub fn p2wpkh(pubkey_hash: &[u8; 20]) -> Vec<u8> {
    let mut out = Vec::with_capacity(22);
    out.push(OP_0);
    out.extend_from_slice(&push_bytes(pubkey_hash).expect("20 bytes is always a short push"));
    out
}

/// `OP_1 <32-byte x-only output key>` (witness version 1, program length 32).
pub fn p2tr(output_key: &[u8; 32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(34);
    out.push(OP_1);
    out.extend_from_slice(&push_bytes(output_key).expect("32 bytes is always a short push"));
    out
}

pub fn is_p2pkh(script: &[u8]) -> bool {
    script.len() == 25
        && script[0] == OP_DUP
        && script[1] == OP_HASH160
        && script[2] == 0x14
        && script[23] == OP_EQUALVERIFY
        && script[24] == OP_CHECKSIG
}

pub fn is_p2sh(script: &[u8]) -> bool {
    script.len() == 23 && script[0] == OP_HASH160 && script[1] == 0x14 && script[22] == OP_EQUAL
}

pub fn is_p2wpkh(script: &[u8]) -> bool {
    script.len() == 22 && script[0] == OP_0 && script[1] == 0x14
}

pub fn is_p2tr(script: &[u8]) -> bool {
    script.len() == 34 && script[0] == OP_1 && script[1] == 0x20
}

/// Extracts the P2WPKH `scriptCode` BIP-143 requires for a given pubkey hash:
/// a length-prefixed legacy P2PKH script, `0x1976a914{hash160}88ac`.
pub fn p2wpkh_script_code(pubkey_hash: &[u8; 20]) -> Vec<u8> {
    let script = p2pkh(pubkey_hash);
    let mut out = Vec::with_capacity(1 + script.len());
    out.push(script.len() as u8);
    out.extend_from_slice(&script);
    out
}

/// Recovers the 20-byte witness program from a P2WPKH `scriptPubKey`, the
/// input the orchestrator needs to build BIP-143's `scriptCode` without
/// asking the caller to carry the hash separately.
pub fn p2wpkh_program(script_pubkey: &[u8]) -> Option<[u8; 20]> {
    if !is_p2wpkh(script_pubkey) {
        return None;
    }
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&script_pubkey[2..22]);
    Some(hash)
}

/// Recovers the 32-byte x-only output key from a P2TR `scriptPubKey`.
pub fn p2tr_program(script_pubkey: &[u8]) -> Option<[u8; 32]> {
    if !is_p2tr(script_pubkey) {
        return None;
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&script_pubkey[2..34]);
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p2pkh_has_expected_shape() {
        let hash = [0x11u8; 20];
        let script = p2pkh(&hash);
        assert!(is_p2pkh(&script));
        assert_eq!(script.len(), 25);
    }

    #[test]
    fn p2sh_has_expected_shape() {
        let hash = [0x22u8; 20];
        let script = p2sh(&hash);
        assert!(is_p2sh(&script));
    }

    #[test]
    fn p2wpkh_has_expected_shape() {
        let hash = [0x33u8; 20];
        let script = p2wpkh(&hash);
        assert!(is_p2wpkh(&script));
        assert_eq!(script, vec![OP_0, 0x14, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33]);
    }

    #[test]
    fn p2tr_has_expected_shape() {
        let key = [0x44u8; 32];
        let script = p2tr(&key);
        assert!(is_p2tr(&script));
        assert_eq!(script.len(), 34);
    }

    #[test]
    fn push_bytes_uses_pushdata1_boundary() {
        let data = vec![0u8; 0x4c];
        let pushed = push_bytes(&data).unwrap();
        assert_eq!(pushed[0], OP_PUSHDATA1);
        assert_eq!(pushed[1], 0x4c);
    }

    #[test]
    fn push_bytes_short_form_below_0x4c() {
        let data = vec![0u8; 10];
        let pushed = push_bytes(&data).unwrap();
        assert_eq!(pushed[0], 10);
    }

    #[test]
    fn script_code_is_length_prefixed_p2pkh() {
        let hash = [0x55u8; 20];
        let code = p2wpkh_script_code(&hash);
        assert_eq!(code[0], 0x19);
        assert_eq!(code.len(), 26);
    }

    #[test]
    fn p2wpkh_program_round_trips() {
        let hash = [0x66u8; 20];
        assert_eq!(p2wpkh_program(&p2wpkh(&hash)), Some(hash));
        assert_eq!(p2wpkh_program(&p2pkh(&hash)), None);
    }

    #[test]
    fn p2tr_program_round_trips() {
        let key = [0x77u8; 32];
        assert_eq!(p2tr_program(&p2tr(&key)), Some(key));
        assert_eq!(p2tr_program(&p2wpkh(&[0u8; 20])), None);
    }
}
