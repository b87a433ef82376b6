//! # Vigenère Cryptanalysis Library
//!
//! This library implements the analysis engine behind an interactive tool for
//! breaking classical polyalphabetic ciphers by hand.
//!
//! ## Supported Ciphers
//!
//! - **Classic Vigenère** - The key repeats unchanged over the text
//! - **Stream Vigenère** - A non-standard variant where the key ring-shifts
//!   by one every time it rolls over, adding confusion but no diffusion
//!
//! ## Analysis Toolkit
//!
//! - Ring-arithmetic decryption (and encryption) over Z_m via a cyclic,
//!   optionally drifting [`KeyStream`]
//! - Ciphertext division into interleaved substrings, with de-drifting for
//!   the stream variant ([`divide`])
//! - Index-of-coincidence statistics for key-period inference
//!   ([`indices_of_coincidence`])
//! - Frequency-correlation key guessing with combinatorial expansion
//!   ([`find_possible_keys`])
//! - Deduplicated exhaustive key search filtered by known plaintext keywords
//!   ([`exhaustive_search`])
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{decrypt, KeyMaterial, KeyMode, KeyStream, DEFAULT_MODULUS};
//!
//! let material = KeyMaterial::new("LEMON", DEFAULT_MODULUS)?;
//! let mut key = KeyStream::new(material, KeyMode::Classic);
//! let plaintext = decrypt(&mut key, "LXFOPVEFRNHR")?;
//! assert_eq!(plaintext, "attackatdawn");
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```
//!
//! Ciphertext and key symbols are uppercase, recovered plaintext is
//! lowercase. The engine performs no I/O; the calling layer owns all
//! interaction, normalization, and presentation.

// Public modules
pub mod analysis;
pub mod decrypt;
pub mod error;
pub mod freq;
pub mod key;
pub mod ring;
pub mod segment;

// Re-exports for easy access
pub use analysis::{
    exhaustive_search, find_possible_keys, indices_of_coincidence, AcceptanceBand,
    CandidateConfig, SearchOptions,
};
pub use decrypt::{decrypt, encrypt};
pub use error::{AnalysisError, Result};
pub use freq::FrequencyTable;
pub use key::{KeyMaterial, KeyMode, KeyStream};
pub use ring::DEFAULT_MODULUS;
pub use segment::divide;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// End-to-end property tests spanning several modules
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_stream_re_emits_first_symbol_after_full_cycle() {
        let material = KeyMaterial::new("CIPHER", DEFAULT_MODULUS).unwrap();
        let period = material.len();
        let mut key = KeyStream::new(material, KeyMode::Classic);
        key.reset();
        for _ in 0..period {
            key.next_symbol();
        }
        assert_eq!(key.next_symbol(), 'C');
    }

    #[test]
    fn test_stream_drift_after_full_blocks() {
        // After L·r emissions the drift is r mod m, so block r starts with
        // the classic symbol shifted by +r.
        let mut classic = KeyStream::from_text("KEY", KeyMode::Classic, 26).unwrap();
        let mut stream = KeyStream::from_text("KEY", KeyMode::Stream, 26).unwrap();
        for r in 0u8..30 {
            let c = classic.next_symbol() as u8 - b'A';
            let s = stream.next_symbol() as u8 - b'A';
            assert_eq!(s, (c + r % 26) % 26);
            for _ in 0..2 {
                classic.next_symbol();
                stream.next_symbol();
            }
        }
    }

    #[test]
    fn test_divide_then_coincidence_flags_true_period() {
        // A 3-periodic ciphertext: every substring of the true division is a
        // single repeated letter, so each index of coincidence is 1.0.
        let ciphertext = "KEYKEYKEYKEYKEYKEY";
        let substrings = divide(ciphertext, 3, KeyMode::Classic, DEFAULT_MODULUS).unwrap();
        let indices = indices_of_coincidence(&substrings, DEFAULT_MODULUS).unwrap();
        assert_eq!(indices, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_stream_encryption_divides_like_classic() {
        // De-drifting in divide must cancel the stream variant's rollover
        // shift, giving the same substrings the classic cipher would.
        let plaintext = "onemorningwhengregorsamsawokefromtroubleddreams";
        let mut classic_key = KeyStream::from_text("ABC", KeyMode::Classic, 26).unwrap();
        let mut stream_key = KeyStream::from_text("ABC", KeyMode::Stream, 26).unwrap();
        let classic_cipher = encrypt(&mut classic_key, plaintext).unwrap();
        let stream_cipher = encrypt(&mut stream_key, plaintext).unwrap();

        let from_classic = divide(&classic_cipher, 3, KeyMode::Classic, 26).unwrap();
        let from_stream = divide(&stream_cipher, 3, KeyMode::Stream, 26).unwrap();
        assert_eq!(from_classic, from_stream);
    }

    #[test]
    fn test_full_analysis_recovers_candidate_key() {
        // End to end: encrypt a long English text, divide by the true
        // period, and the candidate search must offer the real key.
        let plaintext = concat!(
            "itisatruthuniversallyacknowledgedthatasinglemaninpossession",
            "ofagoodfortunemustbeinwantofawifehoweverlittleknownthefeelings",
            "orviewsofsuchamanmaybeonhisfirstenteringaneighbourhoodthistruth",
            "issowellfixedinthemindsofthesurroundingfamiliesthatheisconsidered",
            "astherightfulpropertyofsomeoneorotheroftheirdaughters"
        );
        let mut key = KeyStream::from_text("BED", KeyMode::Classic, 26).unwrap();
        let ciphertext = encrypt(&mut key, plaintext).unwrap();

        let substrings = divide(&ciphertext, 3, KeyMode::Classic, 26).unwrap();
        let candidates = find_possible_keys(
            &substrings,
            &FrequencyTable::english(),
            26,
            &CandidateConfig::default(),
        )
        .unwrap();
        assert!(candidates.contains(&"BED".to_string()));
    }

    #[test]
    fn test_bruteforce_round_trip() {
        let plaintext = "meetmeatmidnightbytheoldbridge";
        let mut key = KeyStream::from_text("IT", KeyMode::Classic, 26).unwrap();
        let ciphertext = encrypt(&mut key, plaintext).unwrap();

        let keywords = vec!["midnight".to_string(), "bridge".to_string()];
        let matches: Vec<_> = exhaustive_search(
            2,
            26,
            &keywords,
            &ciphertext,
            KeyMode::Classic,
            SearchOptions::default(),
        )
        .unwrap()
        .collect();
        assert!(matches
            .iter()
            .any(|(key, decryption)| key.as_str() == "IT" && decryption.as_str() == plaintext));
    }
}
