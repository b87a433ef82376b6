//! Language letter-frequency tables.

use crate::error::{AnalysisError, Result};

/// Standard English unigram frequencies for A-Z.
const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.082, 0.015, 0.028, 0.043, 0.127, 0.022, 0.020, 0.061, 0.070, 0.002, 0.008, 0.040, 0.024,
    0.067, 0.075, 0.019, 0.001, 0.060, 0.063, 0.091, 0.028, 0.010, 0.023, 0.001, 0.020, 0.001,
];

/// How far the probabilities may drift from summing to exactly 1.
const SUM_TOLERANCE: f64 = 0.02;

/// A validated table of per-letter probabilities, indexed by ring value.
///
/// The table length fixes the alphabet it describes; analysis functions check
/// it against their modulus.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    probabilities: Vec<f64>,
}

impl FrequencyTable {
    /// Builds a table from raw probabilities.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidArgument`] if the table is empty, any
    /// entry is not a probability in [0, 1], or the entries do not sum to
    /// approximately 1.
    pub fn new(probabilities: Vec<f64>) -> Result<Self> {
        if probabilities.is_empty() {
            return Err(AnalysisError::InvalidArgument(
                "frequency table must contain at least one entry".to_string(),
            ));
        }
        for &p in &probabilities {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(AnalysisError::InvalidArgument(format!(
                    "frequency table entry {p} is not a probability in [0, 1]"
                )));
            }
        }
        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(AnalysisError::InvalidArgument(format!(
                "frequency table entries sum to {sum}, expected approximately 1"
            )));
        }
        Ok(Self { probabilities })
    }

    /// The standard 26-entry English letter distribution.
    pub fn english() -> Self {
        Self {
            probabilities: ENGLISH_FREQUENCIES.to_vec(),
        }
    }

    /// The number of entries (the alphabet size this table describes).
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// True only for a table that failed construction; kept for convention.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// The probability of the letter with ring value `value`.
    pub fn get(&self, value: usize) -> f64 {
        self.probabilities[value]
    }

    /// The raw probabilities, indexed by ring value.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::english()
    }
}
