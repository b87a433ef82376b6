//! The index of coincidence, for inferring the key period.

use crate::error::{AnalysisError, Result};
use crate::ring;

/// Computes the index of coincidence for each substring.
///
/// For a substring of length L with f_g occurrences of ring value g, the
/// index is Σ f_g·(f_g − 1) / (L·(L − 1)): the probability that two randomly
/// drawn symbols match. English text scores around 0.065; a flat random
/// distribution over Z_26 scores around 0.038. When a division for key
/// length n yields substrings that all score near English, n is a plausible
/// key period. The value is advisory; no thresholding happens here.
///
/// # Arguments
///
/// * `substrings` - The division of the ciphertext, e.g. from
///   [`crate::segment::divide`].
/// * `m` - The size of the integer ring Z_m.
///
/// # Returns
///
/// One index per substring, in input order.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] if the list is empty or any
/// substring has fewer than two symbols (the index is undefined there), and
/// [`AnalysisError::InvalidSymbol`] for content outside the alphabet.
pub fn indices_of_coincidence(substrings: &[String], m: u8) -> Result<Vec<f64>> {
    ring::validate_modulus(m)?;
    if substrings.is_empty() {
        return Err(AnalysisError::InvalidArgument(
            "substrings must contain at least one element".to_string(),
        ));
    }

    let mut indices = Vec::with_capacity(substrings.len());
    for substring in substrings {
        let mut counts = vec![0u64; m as usize];
        let mut length = 0u64;
        for c in substring.chars() {
            counts[ring::symbol_value(c, m)? as usize] += 1;
            length += 1;
        }
        if length < 2 {
            return Err(AnalysisError::InvalidArgument(format!(
                "substring \"{substring}\" is too short for a coincidence index"
            )));
        }
        let pairs: u64 = counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
        indices.push(pairs as f64 / (length * (length - 1)) as f64);
    }
    Ok(indices)
}
