//! Vigenère key material and the cyclic key stream.
//!
//! [`KeyMaterial`] is a validated, immutable key; [`KeyStream`] turns it into
//! an infinite symbol source. In classic mode the stream simply cycles over
//! the key. In stream mode every completed cycle ring-shifts the whole key by
//! one, so block r of the emitted stream is the key shifted by +r (mod m).

use std::fmt;

use crate::error::{AnalysisError, Result};
use crate::ring;

/// Which variant of the Vigenère cipher a key applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// The classic cipher: the key repeats unchanged.
    Classic,
    /// The stream variant: the key ring-shifts by one each time it rolls over.
    Stream,
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Stream => write!(f, "stream"),
        }
    }
}

/// A validated Vigenère key: a non-empty sequence of alphabet symbols.
///
/// Validation happens once, in the constructor; every later access may rely
/// on the symbols being uppercase letters inside the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    symbols: Vec<char>,
    modulus: u8,
}

impl KeyMaterial {
    /// Creates key material from a string of alphabet symbols.
    ///
    /// Symbols are stored uppercase regardless of input case.
    ///
    /// # Arguments
    ///
    /// * `text` - The key word, e.g. `"VIGENERE"`.
    /// * `modulus` - The size of the integer ring Z_m.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidKey`] if the key is empty or contains
    /// a symbol outside the alphabet.
    pub fn new(text: &str, modulus: u8) -> Result<Self> {
        ring::validate_modulus(modulus)?;
        if text.is_empty() {
            return Err(AnalysisError::InvalidKey(
                "key must contain at least one symbol".to_string(),
            ));
        }
        let mut symbols = Vec::with_capacity(text.len());
        for c in text.chars() {
            if ring::symbol_value(c, modulus).is_err() {
                return Err(AnalysisError::InvalidKey(format!(
                    "key symbol '{c}' is outside the alphabet of size {modulus}"
                )));
            }
            symbols.push(c.to_ascii_uppercase());
        }
        Ok(Self { symbols, modulus })
    }

    /// The number of key positions (the key period).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; kept for the conventional `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The validated key symbols, uppercase.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The ring size this key was validated against.
    pub fn modulus(&self) -> u8 {
        self.modulus
    }
}

impl fmt::Display for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A cyclic, optionally drifting key-symbol generator.
///
/// The cursor advances by one per emitted symbol and wraps at the key length.
/// In [`KeyMode::Stream`] the drift increments (mod m) every time the cursor
/// wraps back to position 0. Two streams built from identical material and
/// mode, each reset and invoked the same number of times, emit identical
/// sequences.
#[derive(Debug, Clone)]
pub struct KeyStream {
    material: KeyMaterial,
    mode: KeyMode,
    cursor: usize,
    drift: u8,
}

impl KeyStream {
    /// Creates a fresh stream (cursor and drift at zero).
    pub fn new(material: KeyMaterial, mode: KeyMode) -> Self {
        Self {
            material,
            mode,
            cursor: 0,
            drift: 0,
        }
    }

    /// Convenience constructor that validates the key text first.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidKey`] for empty or malformed keys.
    pub fn from_text(text: &str, mode: KeyMode, modulus: u8) -> Result<Self> {
        Ok(Self::new(KeyMaterial::new(text, modulus)?, mode))
    }

    /// Emits the next key symbol. Loops over the key infinitely.
    pub fn next_symbol(&mut self) -> char {
        let m = self.material.modulus;
        let base = self.material.symbols[self.cursor] as u8 - b'A';
        let symbol = ring::cipher_symbol((base + self.drift) % m, m);
        self.cursor = (self.cursor + 1) % self.material.len();
        if self.cursor == 0 && self.mode == KeyMode::Stream {
            self.drift = (self.drift + 1) % m;
        }
        symbol
    }

    /// Sets the cursor and the drift back to zero.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.drift = 0;
    }

    /// The key material this stream cycles over.
    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    /// The cipher variant this stream applies to.
    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// The ring size of the underlying key material.
    pub fn modulus(&self) -> u8 {
        self.material.modulus
    }
}

impl fmt::Display for KeyStream {
    /// Format: `(stream|classic) [SYMBOLS]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) [{}]", self.mode, self.material)
    }
}
