//! Brute-force key search filtered by known plaintext keywords.

use itertools::Itertools;

use crate::decrypt::decrypt;
use crate::error::{AnalysisError, Result};
use crate::key::{KeyMode, KeyStream};
use crate::ring;

/// Switches for [`exhaustive_search`].
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Skip keys whose first half repeats as the second half, e.g. `ABAB`.
    ///
    /// Keys like that decrypt identically to their half-length form, which a
    /// shorter search already covers, so the full-length pass drops them.
    /// Disable to enumerate the complete key space.
    pub half_duplicate_filter: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            half_duplicate_filter: true,
        }
    }
}

/// Enumerates every key of the given length and yields the ones whose
/// decryption contains all required keywords.
///
/// The search space holds m^length keys; the returned iterator is lazy, so
/// the caller can stop after the first hit or bound the work any other way.
/// Keys are yielded together with their full decryption. With the
/// [`SearchOptions::half_duplicate_filter`] enabled (the default), keys whose
/// first ⌊length/2⌋ symbols equal the remaining symbols truncated to the same
/// length are skipped before any decryption work.
///
/// Keywords are matched as literal substrings of the lowercase decryption;
/// an empty keyword list accepts every key.
///
/// # Arguments
///
/// * `length` - The key length to enumerate.
/// * `m` - The size of the integer ring Z_m.
/// * `keywords` - Lowercase words the plaintext must contain.
/// * `ciphertext` - Uppercase, whitespace-free ciphertext.
/// * `mode` - Which cipher variant to decrypt with.
/// * `options` - Search switches.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] if `length < 1`, the modulus is
/// unusable, or the ciphertext is empty, and [`AnalysisError::InvalidSymbol`]
/// if the ciphertext contains non-alphabet content.
pub fn exhaustive_search<'a>(
    length: usize,
    m: u8,
    keywords: &'a [String],
    ciphertext: &'a str,
    mode: KeyMode,
    options: SearchOptions,
) -> Result<impl Iterator<Item = (String, String)> + 'a> {
    ring::validate_modulus(m)?;
    if length < 1 {
        return Err(AnalysisError::InvalidArgument(
            "key length must be at least 1".to_string(),
        ));
    }
    if ciphertext.is_empty() {
        return Err(AnalysisError::InvalidArgument(
            "ciphertext must contain at least one symbol".to_string(),
        ));
    }
    // Validate the ciphertext once up front so the per-key decryptions below
    // cannot fail.
    for c in ciphertext.chars() {
        ring::symbol_value(c, m)?;
    }

    let half = length / 2;
    let iter = (0..length)
        .map(|_| 0..m)
        .multi_cartesian_product()
        .filter(move |values| {
            !(options.half_duplicate_filter
                && half > 0
                && values[..half] == values[half..2 * half])
        })
        .filter_map(move |values| {
            let key: String = values.into_iter().map(|v| ring::cipher_symbol(v, m)).collect();
            let mut stream = KeyStream::from_text(&key, mode, m).ok()?;
            let decryption = decrypt(&mut stream, ciphertext).ok()?;
            keywords
                .iter()
                .all(|keyword| decryption.contains(keyword.as_str()))
                .then_some((key, decryption))
        });
    Ok(iter)
}
