//! BIP-39 mnemonic generation, validation, and seed derivation
//! (`spec.md` §4.3).
//!
//! Supplemented vs. the bare spec: `generate_mnemonic` for new-wallet
//! creation, since every wallet core in the corpus exposes it alongside
//! validation.

use crate::error::HdError;
use bip39::{Language, Mnemonic};

/// A validated BIP-39 mnemonic phrase.
#[derive(Debug, Clone)]
pub struct MnemonicPhrase(Mnemonic);

impl MnemonicPhrase {
    /// Parses and validates a mnemonic phrase (wordlist membership + checksum).
    pub fn parse(phrase: &str) -> Result<Self, HdError> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)
            .map_err(|e| HdError::InvalidMnemonic(e.to_string()))?;
        Ok(Self(mnemonic))
    }

    /// Generates a new random mnemonic with the given word count
    /// (12, 15, 18, 21, or 24).
    pub fn generate(word_count: usize) -> Result<Self, HdError> {
        let mnemonic = Mnemonic::generate(word_count)
            .map_err(|e| HdError::InvalidMnemonic(e.to_string()))?;
        Ok(Self(mnemonic))
    }

    /// Derives the 64-byte BIP-39 seed, applying an optional BIP-39
    /// passphrase (the 25th word).
    pub fn to_seed(&self, passphrase: &str) -> [u8; 64] {
        self.0.to_seed_normalized(passphrase)
    }

    /// The phrase's words joined by single spaces.
    pub fn phrase(&self) -> String {
        self.0.to_string()
    }
}

/// Validates a mnemonic phrase without retaining it, for callers that only
/// need a yes/no answer (e.g. UI form validation).
pub fn validate_mnemonic(phrase: &str) -> Result<(), HdError> {
    MnemonicPhrase::parse(phrase).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn parses_known_test_vector_phrase() {
        let mnemonic = MnemonicPhrase::parse(TEST_PHRASE).unwrap();
        assert_eq!(mnemonic.phrase(), TEST_PHRASE);
    }

    #[test]
    fn rejects_bad_checksum() {
        let bad = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(MnemonicPhrase::parse(bad).is_err());
    }

    #[test]
    fn seed_derivation_is_deterministic_and_passphrase_sensitive() {
        let mnemonic = MnemonicPhrase::parse(TEST_PHRASE).unwrap();
        let seed_a = mnemonic.to_seed("");
        let seed_b = mnemonic.to_seed("");
        let seed_c = mnemonic.to_seed("TREZOR");
        assert_eq!(seed_a, seed_b);
        assert_ne!(seed_a, seed_c);
        assert_eq!(seed_a.len(), 64);
    }

    #[test]
    fn generate_produces_requested_word_count() {
        let mnemonic = MnemonicPhrase::generate(12).unwrap();
        assert_eq!(mnemonic.phrase().split(' ').count(), 12);
    }

    #[test]
    fn validate_mnemonic_accepts_known_phrase() {
        assert!(validate_mnemonic(TEST_PHRASE).is_ok());
    }
}
