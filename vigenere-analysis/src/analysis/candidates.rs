//! Frequency-correlation key guessing.
//!
//! Once a likely key period is known, each substring from the division was
//! encrypted under a single key letter. Correlating a substring's symbol
//! distribution against the language's letter frequencies under every
//! possible shift yields the plausible key letters for that position; the
//! cross-product of the per-position sets yields the candidate keys.

use std::collections::HashSet;

use crate::error::{AnalysisError, Result};
use crate::freq::FrequencyTable;
use crate::ring;

/// The correlation interval a shift must fall in to count as plausible.
///
/// The default open interval (0.06, 0.07) brackets the self-correlation of
/// English at m = 26; other languages or alphabets need their own band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptanceBand {
    low: f64,
    high: f64,
}

impl AcceptanceBand {
    /// Creates a band with the given open bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidArgument`] unless `low < high` and
    /// both bounds are finite.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(AnalysisError::InvalidArgument(format!(
                "acceptance band ({low}, {high}) is not a valid open interval"
            )));
        }
        Ok(Self { low, high })
    }

    /// The empirical band for English text.
    pub fn english() -> Self {
        Self {
            low: 0.06,
            high: 0.07,
        }
    }

    /// Whether a correlation value falls strictly inside the band.
    pub fn contains(&self, value: f64) -> bool {
        value > self.low && value < self.high
    }
}

impl Default for AcceptanceBand {
    fn default() -> Self {
        Self::english()
    }
}

/// Tuning knobs for [`find_possible_keys`].
#[derive(Debug, Clone, Default)]
pub struct CandidateConfig {
    /// The correlation band a shift must hit to be accepted.
    pub band: AcceptanceBand,
    /// Stop after this many candidate keys and return what was found.
    /// `None` builds the full cross-product.
    pub max_candidates: Option<usize>,
}

/// Infers candidate keys from the substrings of a division.
///
/// For every substring and every shift g in [0, m), the correlation
/// mg = Σ_i table[i]·f_{(i+g) mod m} / L is computed, where f_v counts the
/// substring symbols with ring value v. Shifts whose mg falls inside the
/// configured band become that position's plausible key letters; a position
/// where no shift qualifies falls back to accepting the whole alphabet
/// rather than failing. Duplicate per-position letter sets are collapsed,
/// and the surviving sets are expanded into full keys in
/// first-position-major order with duplicate keys dropped.
///
/// The expansion is exponential in the worst case (every position
/// ambiguous); `config.max_candidates` bounds it by truncating the result.
///
/// # Arguments
///
/// * `substrings` - One substring per presumed key position.
/// * `table` - Letter frequencies of the plaintext language.
/// * `m` - The size of the integer ring Z_m.
/// * `config` - Acceptance band and expansion cap.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] if the substring list is empty,
/// any substring is empty, or the table length does not match `m`.
pub fn find_possible_keys(
    substrings: &[String],
    table: &FrequencyTable,
    m: u8,
    config: &CandidateConfig,
) -> Result<Vec<String>> {
    ring::validate_modulus(m)?;
    if substrings.is_empty() {
        return Err(AnalysisError::InvalidArgument(
            "substrings must contain at least one element".to_string(),
        ));
    }
    if table.len() != m as usize {
        return Err(AnalysisError::InvalidArgument(format!(
            "frequency table has {} entries but the modulus is {m}",
            table.len()
        )));
    }

    let mut position_sets: Vec<Vec<char>> = Vec::new();
    for substring in substrings {
        let letters = plausible_shifts(substring, table, m, config.band)?;
        if !position_sets.contains(&letters) {
            position_sets.push(letters);
        }
    }
    Ok(build_keys(&position_sets, config.max_candidates))
}

/// Key letters whose shift correlation lands inside the band, in ring order.
/// Falls back to the whole alphabet when nothing qualifies.
fn plausible_shifts(
    substring: &str,
    table: &FrequencyTable,
    m: u8,
    band: AcceptanceBand,
) -> Result<Vec<char>> {
    let mut counts = vec![0u32; m as usize];
    let mut length = 0u32;
    for c in substring.chars() {
        counts[ring::symbol_value(c, m)? as usize] += 1;
        length += 1;
    }
    if length == 0 {
        return Err(AnalysisError::InvalidArgument(
            "substrings must not be empty".to_string(),
        ));
    }

    let mut letters = Vec::new();
    for g in 0..m {
        let mut correlation = 0.0;
        for i in 0..m {
            let shifted = counts[usize::from((i + g) % m)];
            correlation += table.get(usize::from(i)) * f64::from(shifted) / f64::from(length);
        }
        if band.contains(correlation) {
            letters.push(ring::cipher_symbol(g, m));
        }
    }
    if letters.is_empty() {
        letters = (0..m).map(|g| ring::cipher_symbol(g, m)).collect();
    }
    Ok(letters)
}

/// Expands per-position letter sets into full keys.
///
/// Iterative depth-first walk over an explicit stack instead of recursing to
/// the key length; emits keys in first-position-major order and drops
/// duplicates. Stops early once `cap` keys have been collected.
fn build_keys(position_sets: &[Vec<char>], cap: Option<usize>) -> Vec<String> {
    let mut keys = Vec::new();
    let mut seen = HashSet::new();
    let mut stack: Vec<(usize, String)> = vec![(0, String::new())];
    while let Some((depth, prefix)) = stack.pop() {
        if depth == position_sets.len() {
            if seen.insert(prefix.clone()) {
                keys.push(prefix);
                if cap.is_some_and(|limit| keys.len() >= limit) {
                    break;
                }
            }
            continue;
        }
        // Reverse push order so the alphabetically first letter is expanded
        // first, preserving first-position-major output order.
        for &letter in position_sets[depth].iter().rev() {
            let mut next = prefix.clone();
            next.push(letter);
            stack.push((depth + 1, next));
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A substring whose symbol counts are exactly 1000x the English table.
    fn english_distributed_substring() -> String {
        let table = FrequencyTable::english();
        let mut text = String::new();
        for value in 0..26u8 {
            let count = (table.get(usize::from(value)) * 1000.0).round() as usize;
            for _ in 0..count {
                text.push(ring::cipher_symbol(value, 26));
            }
        }
        text
    }

    #[test]
    fn test_unshifted_english_accepts_shift_zero() {
        let substrings = vec![english_distributed_substring()];
        let keys = find_possible_keys(
            &substrings,
            &FrequencyTable::english(),
            26,
            &CandidateConfig::default(),
        )
        .unwrap();
        assert!(keys.contains(&"A".to_string()));
    }

    #[test]
    fn test_shifted_english_accepts_the_shift() {
        // Shift every symbol by +3 ('D'); the correlation must recover it.
        let shifted: String = english_distributed_substring()
            .chars()
            .map(|c| ring::cipher_symbol((ring::symbol_value(c, 26).unwrap() + 3) % 26, 26))
            .collect();
        let keys = find_possible_keys(
            &[shifted],
            &FrequencyTable::english(),
            26,
            &CandidateConfig::default(),
        )
        .unwrap();
        assert!(keys.contains(&"D".to_string()));
    }

    #[test]
    fn test_fallback_accepts_whole_alphabet() {
        // A uniform substring correlates near 1/26 at every shift, so no
        // shift qualifies and the fallback kicks in.
        let alphabet: String = ('A'..='Z').collect();
        let keys = find_possible_keys(
            &[alphabet],
            &FrequencyTable::english(),
            26,
            &CandidateConfig::default(),
        )
        .unwrap();
        assert_eq!(keys.len(), 26);
        assert_eq!(keys[0], "A");
        assert_eq!(keys[25], "Z");
    }

    #[test]
    fn test_duplicate_position_sets_collapse() {
        let substring = english_distributed_substring();
        let keys = find_possible_keys(
            &[substring.clone(), substring],
            &FrequencyTable::english(),
            26,
            &CandidateConfig::default(),
        )
        .unwrap();
        // Both positions produce the same letter set, which is kept once.
        assert!(keys.iter().all(|k| k.len() == 1));
    }

    #[test]
    fn test_max_candidates_truncates() {
        let config = CandidateConfig {
            band: AcceptanceBand::english(),
            max_candidates: Some(5),
        };
        let alphabet: String = ('A'..='Z').collect();
        let keys = find_possible_keys(&[alphabet], &FrequencyTable::english(), 26, &config).unwrap();
        assert_eq!(keys, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_rejects_mismatched_table() {
        let table = FrequencyTable::new(vec![0.5, 0.5]).unwrap();
        assert!(matches!(
            find_possible_keys(
                &["ABAB".to_string()],
                &table,
                26,
                &CandidateConfig::default()
            ),
            Err(AnalysisError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_empty_substring_list() {
        assert!(matches!(
            find_possible_keys(&[], &FrequencyTable::english(), 26, &CandidateConfig::default()),
            Err(AnalysisError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_band_validation() {
        assert!(AcceptanceBand::new(0.07, 0.06).is_err());
        assert!(AcceptanceBand::new(0.06, f64::INFINITY).is_err());
        let band = AcceptanceBand::new(0.0, 1.0).unwrap();
        assert!(band.contains(0.5));
        assert!(!band.contains(0.0));
    }

    #[test]
    fn test_cross_product_order_is_first_position_major() {
        let sets = vec![vec!['A', 'B'], vec!['X', 'Y']];
        let keys = build_keys(&sets, None);
        assert_eq!(keys, vec!["AX", "AY", "BX", "BY"]);
    }
}
