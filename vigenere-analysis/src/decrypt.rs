//! Applying a key stream to a whole text.
//!
//! Both directions advance the stream by one symbol per text symbol. A
//! repeated decryption therefore needs a caller-invoked [`KeyStream::reset`];
//! the stream's position is owned by the caller, not restored here.

use crate::error::{AnalysisError, Result};
use crate::key::KeyStream;
use crate::ring;

/// Decrypts a ciphertext with the given key stream.
///
/// # Arguments
///
/// * `key` - The key stream to consume; advanced by `ciphertext.len()` symbols.
/// * `ciphertext` - Uppercase, whitespace-free ciphertext.
///
/// # Returns
///
/// The lowercase plaintext.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] if the ciphertext is empty and
/// [`AnalysisError::InvalidSymbol`] if it contains a character outside the
/// alphabet.
pub fn decrypt(key: &mut KeyStream, ciphertext: &str) -> Result<String> {
    if ciphertext.is_empty() {
        return Err(AnalysisError::InvalidArgument(
            "ciphertext must contain at least one symbol".to_string(),
        ));
    }
    let m = key.modulus();
    ciphertext
        .chars()
        .map(|c| {
            let k = key.next_symbol();
            ring::shift_decrypt(c, k, m)
        })
        .collect()
}

/// Encrypts a plaintext with the given key stream.
///
/// The inverse of [`decrypt`]; shares its error and stream-advance behavior.
///
/// # Returns
///
/// The uppercase ciphertext.
pub fn encrypt(key: &mut KeyStream, plaintext: &str) -> Result<String> {
    if plaintext.is_empty() {
        return Err(AnalysisError::InvalidArgument(
            "plaintext must contain at least one symbol".to_string(),
        ));
    }
    let m = key.modulus();
    plaintext
        .chars()
        .map(|p| {
            let k = key.next_symbol();
            ring::shift_encrypt(p, k, m)
        })
        .collect()
}
