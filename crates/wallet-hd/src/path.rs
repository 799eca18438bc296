//! Derivation path parsing: `m/a'/b/c'…` (`spec.md` §4.3).
//!
//! `'` and `h` are both accepted as the hardened marker. Indices are
//! `0..2^31 - 1` before the hardened bit is applied.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const HARDENED_BIT: u32 = 0x8000_0000;

/// A single step in a derivation path: an index plus whether it is hardened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildIndex {
    index: u32,
    hardened: bool,
}

impl ChildIndex {
    /// Builds a child index, returning an error if `index` does not fit in 31
    /// bits.
    pub fn new(index: u32, hardened: bool) -> Result<Self, PathParseError> {
        if index & HARDENED_BIT != 0 {
            return Err(PathParseError::IndexOutOfRange(index));
        }
        Ok(Self { index, hardened })
    }

    /// Whether this step uses hardened derivation.
    pub fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// The raw 31-bit index (without the hardened bit applied).
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The index with the hardened bit (`0x8000_0000`) set if hardened, i.e.
    /// the 32-bit value BIP-32 actually uses as HMAC input.
    pub fn to_raw_index(self) -> u32 {
        if self.hardened {
            self.index | HARDENED_BIT
        } else {
            self.index
        }
    }
}

/// A parsed HD derivation path, e.g. `m/44'/60'/0'/0/0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath {
    steps: Vec<ChildIndex>,
}

impl DerivationPath {
    /// The path's steps, in order from the master key.
    pub fn steps(&self) -> &[ChildIndex] {
        &self.steps
    }
}

/// Errors parsing a derivation path string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathParseError {
    /// The path did not start with `m`.
    #[error("derivation path must start with 'm': {0:?}")]
    MissingRoot(String),
    /// A path segment was not a valid index.
    #[error("invalid path segment: {0:?}")]
    InvalidSegment(String),
    /// An index did not fit in 31 bits.
    #[error("index out of range: {0}")]
    IndexOutOfRange(u32),
}

impl FromStr for DerivationPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let root = parts.next().unwrap_or("");
        if root != "m" {
            return Err(PathParseError::MissingRoot(s.to_string()));
        }
        let mut steps = Vec::new();
        for part in parts {
            if part.is_empty() {
                return Err(PathParseError::InvalidSegment(s.to_string()));
            }
            let (digits, hardened) = if let Some(d) = part
                .strip_suffix('\'')
                .or_else(|| part.strip_suffix('h'))
                .or_else(|| part.strip_suffix('H'))
            {
                (d, true)
            } else {
                (part, false)
            };
            let index: u32 = digits
                .parse()
                .map_err(|_| PathParseError::InvalidSegment(part.to_string()))?;
            steps.push(ChildIndex::new(index, hardened)?);
        }
        Ok(DerivationPath { steps })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for step in &self.steps {
            write!(f, "/{}", step.index)?;
            if step.hardened {
                write!(f, "'")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_evm_path() {
        let path: DerivationPath = "m/44'/60'/0'/0/0".parse().unwrap();
        let steps = path.steps();
        assert_eq!(steps.len(), 5);
        assert!(steps[0].is_hardened());
        assert_eq!(steps[0].index(), 44);
        assert!(!steps[4].is_hardened());
        assert_eq!(steps[4].index(), 0);
    }

    #[test]
    fn accepts_h_marker() {
        let a: DerivationPath = "m/44h/60h".parse().unwrap();
        let b: DerivationPath = "m/44'/60'".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_missing_root() {
        assert!("44'/60'/0'/0/0".parse::<DerivationPath>().is_err());
    }

    #[test]
    fn round_trips_through_display() {
        let path: DerivationPath = "m/84'/0'/0'/0/0".parse().unwrap();
        assert_eq!(path.to_string(), "m/84'/0'/0'/0/0");
    }
}
