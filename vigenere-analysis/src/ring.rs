//! Modular symbol arithmetic over the integer ring Z_m.
//!
//! Ciphertext and key symbols map to the uppercase alphabet (`'A' + value`),
//! plaintext symbols to the lowercase alphabet (`'a' + value`). All functions
//! are pure and stateless.

use crate::error::{AnalysisError, Result};

/// Default ring size: the Latin alphabet.
pub const DEFAULT_MODULUS: u8 = 26;

/// Largest supported ring size (the alphabet mapping only has 26 letters).
pub const MAX_MODULUS: u8 = 26;

/// Checks that a modulus describes a usable alphabet.
///
/// # Arguments
///
/// * `m` - The size of the integer ring Z_m.
pub fn validate_modulus(m: u8) -> Result<()> {
    if m < 1 || m > MAX_MODULUS {
        return Err(AnalysisError::InvalidArgument(format!(
            "modulus must be between 1 and {MAX_MODULUS}, got {m}"
        )));
    }
    Ok(())
}

/// Maps a symbol to its ring value in [0, m).
///
/// Accepts both cases; the case only matters for output mapping.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidSymbol`] if the character is not a letter
/// of the configured alphabet.
pub fn symbol_value(symbol: char, m: u8) -> Result<u8> {
    if !symbol.is_ascii_alphabetic() {
        return Err(AnalysisError::InvalidSymbol(symbol, m));
    }
    let value = symbol.to_ascii_uppercase() as u8 - b'A';
    if value >= m {
        return Err(AnalysisError::InvalidSymbol(symbol, m));
    }
    Ok(value)
}

/// Maps a ring value to its ciphertext (uppercase) symbol.
pub fn cipher_symbol(value: u8, m: u8) -> char {
    ((value % m) + b'A') as char
}

/// Maps a ring value to its plaintext (lowercase) symbol.
pub fn plain_symbol(value: u8, m: u8) -> char {
    ((value % m) + b'a') as char
}

/// Decrypts one symbol: plain = (cipher − key) mod m.
///
/// # Arguments
///
/// * `cipher` - The ciphertext symbol.
/// * `key` - The key symbol to subtract.
/// * `m` - The size of the integer ring Z_m.
///
/// # Returns
///
/// The plaintext (lowercase) symbol.
pub fn shift_decrypt(cipher: char, key: char, m: u8) -> Result<char> {
    let c = symbol_value(cipher, m)?;
    let k = symbol_value(key, m)?;
    Ok(plain_symbol((c + m - k) % m, m))
}

/// Encrypts one symbol: cipher = (plain + key) mod m.
///
/// # Arguments
///
/// * `plain` - The plaintext symbol.
/// * `key` - The key symbol to add.
/// * `m` - The size of the integer ring Z_m.
///
/// # Returns
///
/// The ciphertext (uppercase) symbol.
pub fn shift_encrypt(plain: char, key: char, m: u8) -> Result<char> {
    let p = symbol_value(plain, m)?;
    let k = symbol_value(key, m)?;
    Ok(cipher_symbol((p + k) % m, m))
}
