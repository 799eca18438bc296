//! CAIP-2 chain identifiers.
//!
//! A CAIP-2 id is `namespace:reference`, e.g. `eip155:1` for Ethereum mainnet
//! or `bip122:000000000019d6689c085ae165831e93` for Bitcoin mainnet. This core
//! uses it only as the human-readable string form of [`crate::ChainFamily`]; it
//! plays no role in signing itself.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// A CAIP-2 compliant chain identifier: `namespace:reference`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainId {
    /// The blockchain namespace, e.g. `eip155`, `bip122`, `solana`, `cosmos`.
    pub namespace: String,
    /// The chain-specific reference within that namespace.
    pub reference: String,
}

impl ChainId {
    /// Builds a `ChainId` from its two components.
    pub fn new<N: Into<String>, R: Into<String>>(namespace: N, reference: R) -> Self {
        Self {
            namespace: namespace.into(),
            reference: reference.into(),
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.reference)
    }
}

/// Error parsing a [`ChainId`] from its string form.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid CAIP-2 chain id: {0:?}")]
pub struct ChainIdParseError(pub String);

impl FromStr for ChainId {
    type Err = ChainIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, reference) = s
            .split_once(':')
            .ok_or_else(|| ChainIdParseError(s.to_string()))?;
        if namespace.is_empty() || reference.is_empty() {
            return Err(ChainIdParseError(s.to_string()));
        }
        Ok(ChainId::new(namespace, reference))
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
