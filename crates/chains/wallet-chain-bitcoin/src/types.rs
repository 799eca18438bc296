//! Bitcoin transaction data model (`spec.md` §4.5, §4.6): inputs carry the
//! UTxO metadata (prevout script, value, script-type hint) the sighash layer
//! needs, since Bitcoin has no global state to look that up from.

/// A previous transaction output being spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutPoint {
    /// The spent transaction's id, in internal (wire) byte order — the same
    /// order it appears serialized inside this transaction's inputs, which is
    /// the reverse of the conventional user-facing hex display.
    pub txid: [u8; 32],
    /// The spent output's index within that transaction.
    pub vout: u32,
}

/// Which script template an input's `prev_script_pubkey` follows, determining
/// which sighash algorithm applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptType {
    /// Pre-SegWit: legacy sighash, signature goes in `scriptSig`.
    Legacy,
    /// P2WPKH: BIP-143 sighash, signature goes in the witness stack.
    P2wpkh,
    /// P2TR key-path spend: BIP-341 sighash, signature goes in the witness stack.
    P2tr,
}

/// An input being spent, carrying the UTxO metadata (`spec.md` §4.6) needed
/// to compute its sighash without a network round-trip.
#[derive(Debug, Clone)]
pub struct TxIn {
    /// The outpoint being spent.
    pub prevout: OutPoint,
    /// The spent output's `scriptPubKey`.
    pub prev_script_pubkey: Vec<u8>,
    /// The spent output's value, in satoshis.
    pub value: u64,
    /// `nSequence`.
    pub sequence: u32,
    /// Which sighash algorithm this input requires.
    pub script_type: ScriptType,
}

/// An output being created.
#[derive(Debug, Clone)]
pub struct TxOut {
    /// Value, in satoshis.
    pub value: u64,
    /// The output's `scriptPubKey`.
    pub script_pubkey: Vec<u8>,
}

/// An unsigned transaction: inputs and outputs with no `scriptSig`/witness
/// data attached yet.
#[derive(Debug, Clone)]
pub struct UnsignedTransaction {
    /// `nVersion`.
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    /// `nLockTime`.
    pub locktime: u32,
}

/// The signature material attached to a single input once signed.
#[derive(Debug, Clone)]
pub enum InputWitness {
    /// Legacy `scriptSig`, e.g. `<sig> <pubkey>` for P2PKH.
    ScriptSig(Vec<u8>),
    /// Segwit witness stack, e.g. `[sig, pubkey]` for P2WPKH or `[sig]` for a
    /// P2TR key-path spend.
    Witness(Vec<Vec<u8>>),
}

/// A fully signed transaction, ready for serialization.
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    pub version: i32,
    pub inputs: Vec<(TxIn, InputWitness)>,
    pub outputs: Vec<TxOut>,
    pub locktime: u32,
}

/// Bitcoin's sighash type flags (`spec.md` §4.7's BIP-143 variants).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigHashType(pub u32);

impl SigHashType {
    pub const ALL: SigHashType = SigHashType(0x01);
    pub const NONE: SigHashType = SigHashType(0x02);
    pub const SINGLE: SigHashType = SigHashType(0x03);
    pub const ANYONECANPAY: u32 = 0x80;

    pub fn base(self) -> u32 {
        self.0 & 0x1f
    }

    pub fn anyone_can_pay(self) -> bool {
        self.0 & Self::ANYONECANPAY != 0
    }

    pub fn is_none(self) -> bool {
        self.base() == Self::NONE.0
    }

    pub fn is_single(self) -> bool {
        self.base() == Self::SINGLE.0
    }
}
