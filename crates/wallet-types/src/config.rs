//! `ChainFamily` and `ChainConfig`: the caller-supplied chain metadata the
//! core takes instead of performing any chain discovery or RPC calls itself
//! (`spec.md` §1, §6).

use crate::chain_id::ChainId;
use serde::{Deserialize, Serialize};

/// The closed set of transaction families this core can build and sign for
/// (`spec.md` §9's "Dynamic dispatch across chain families" design note: a
/// closed sum type, not open polymorphism).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainFamily {
    /// EVM chains: legacy, EIP-1559, and EIP-7702 transactions.
    Evm,
    /// Bitcoin and Bitcoin-derived UTXO chains.
    Bitcoin,
    /// Cosmos SDK chains using `SIGN_MODE_DIRECT`.
    Cosmos,
    /// Solana.
    Solana,
    /// ERC-4337 smart-contract accounts (layered on top of an EVM chain).
    Erc4337,
}

impl ChainFamily {
    /// The CAIP-2 namespace this family is usually identified by.
    pub fn caip2_namespace(&self) -> &'static str {
        match self {
            ChainFamily::Evm | ChainFamily::Erc4337 => "eip155",
            ChainFamily::Bitcoin => "bip122",
            ChainFamily::Cosmos => "cosmos",
            ChainFamily::Solana => "solana",
        }
    }
}

/// Caller-supplied metadata identifying a specific chain within a family.
///
/// The core performs no chain discovery: every numeric id, HRP, and coin type
/// is supplied by the caller up front. A registry mapping human names to
/// these values is explicitly an external collaborator's concern, not the
/// core's (`spec.md` §1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// The transaction family this configuration applies to.
    pub family: ChainFamily,
    /// Numeric EVM chain id, required for EIP-155/EIP-1559/EIP-7702 and for
    /// ERC-4337 `UserOperation` hashing.
    pub chain_id: Option<u64>,
    /// Bech32/Bech32m human-readable part, required for Bitcoin SegWit/Taproot
    /// and Cosmos addresses.
    pub hrp: Option<String>,
    /// SLIP-44 coin type used for the default HD derivation path account
    /// level.
    pub coin_type: Option<u32>,
    /// The native currency's ticker symbol, e.g. `ETH`, `BTC`, `ATOM`, `SOL`.
    pub symbol: String,
    /// The native currency's decimal places.
    pub decimals: u8,
    /// An opaque hint for a block-explorer URL template; the core never
    /// dereferences it.
    pub explorer_hint: Option<String>,
}

impl ChainConfig {
    /// The CAIP-2 chain id this configuration identifies, when enough
    /// information is present to construct one.
    pub fn chain_id_caip2(&self) -> Option<ChainId> {
        match self.family {
            ChainFamily::Evm | ChainFamily::Erc4337 => {
                self.chain_id.map(|id| ChainId::new("eip155", id.to_string()))
            }
            ChainFamily::Solana => Some(ChainId::new("solana", self.hrp.clone().unwrap_or_default())),
            ChainFamily::Cosmos => self
                .hrp
                .clone()
                .map(|hrp| ChainId::new("cosmos", hrp)),
            ChainFamily::Bitcoin => Some(ChainId::new("bip122", self.hrp.clone().unwrap_or_default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evm_chain_config_produces_eip155_caip2() {
        let cfg = ChainConfig {
            family: ChainFamily::Evm,
            chain_id: Some(137),
            hrp: None,
            coin_type: Some(60),
            symbol: "MATIC".into(),
            decimals: 18,
            explorer_hint: None,
        };
        assert_eq!(cfg.chain_id_caip2().unwrap().to_string(), "eip155:137");
    }
}
