//! Splitting a ciphertext into interleaved substrings for period analysis.

use crate::error::{AnalysisError, Result};
use crate::key::KeyMode;
use crate::ring;

/// Divides a ciphertext into `n` round-robin substrings.
///
/// Symbol i of the ciphertext lands in substring i mod n, so for a key of
/// period n each substring collects the symbols encrypted under one key
/// position. For example `divide("ABCDEFGHI", 3, ..)` gives `["ADG", "BEH",
/// "CFI"]`.
///
/// In [`KeyMode::Stream`] a running offset is subtracted from every symbol
/// before it is appended; the offset grows by one (mod m) per completed block
/// of `n` symbols. This removes the stream variant's per-cycle drift so that
/// coincidence statistics on the substrings remain meaningful.
///
/// # Arguments
///
/// * `ciphertext` - Uppercase, whitespace-free ciphertext.
/// * `n` - The number of substrings (the presumed key period).
/// * `mode` - Which cipher variant produced the ciphertext.
/// * `m` - The size of the integer ring Z_m.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] if `n < 1`, the modulus is not
/// a usable alphabet size, the ciphertext is shorter than `n`, or the
/// ciphertext contains non-alphabet content.
pub fn divide(ciphertext: &str, n: usize, mode: KeyMode, m: u8) -> Result<Vec<String>> {
    if n < 1 {
        return Err(AnalysisError::InvalidArgument(
            "at least one substring must be requested".to_string(),
        ));
    }
    ring::validate_modulus(m)?;
    if ciphertext.chars().count() < n {
        return Err(AnalysisError::InvalidArgument(format!(
            "ciphertext is shorter than the {n} requested substrings"
        )));
    }

    let mut substrings = vec![String::new(); n];
    let mut k = 0;
    let mut offset = 0;
    for c in ciphertext.chars() {
        let value = ring::symbol_value(c, m).map_err(|_| {
            AnalysisError::InvalidArgument(format!(
                "ciphertext symbol '{c}' is outside the alphabet of size {m}"
            ))
        })?;
        substrings[k].push(ring::cipher_symbol((value + m - offset) % m, m));
        k = (k + 1) % n;
        if k == 0 && mode == KeyMode::Stream {
            offset = (offset + 1) % m;
        }
    }
    Ok(substrings)
}
