//! Conversion between error probabilities and PHRED scaled quality scores.

use anyhow::{bail, Result};
use ndarray::{Array1, ArrayView1};

use crate::errors;

/// Convert a single error probability into a truncated PHRED scaled quality score.
///
/// The caller has to ensure that `prob` is within `[0, 1]`. A probability of exactly
/// zero yields positive infinity (`f64::log10` returns negative infinity for zero,
/// no special casing needed).
pub fn error_prob_to_phred(prob: f64) -> f64 {
    // + 0.0 turns the -0.0 arising at prob = 1 into +0.0
    (-10.0 * prob.log10()).trunc() + 0.0
}

/// Convert a PHRED scaled quality score into the corresponding linear error
/// probability.
pub fn phred_to_error_prob(phred: f64) -> f64 {
    10.0f64.powf(-phred / 10.0)
}

/// Convert error probabilities into truncated PHRED scaled quality scores.
///
/// The entire input is validated before any score is computed: every value has to be
/// within `[0, 1]`, and NaN is rejected. On failure, no partial output is produced.
/// The fractional part of each score is truncated toward zero (not rounded), matching
/// what downstream consumers of integral quality scores expect.
///
/// # Returns
///
/// An array of the same length as `probs`. All scores are integral valued, except
/// that a probability of exactly zero maps to positive infinity.
pub fn error_probs_to_phred(probs: ArrayView1<f64>) -> Result<Array1<f64>> {
    for (index, &value) in probs.iter().enumerate() {
        if value.is_nan() {
            bail!(errors::Error::NanErrorProbability { index });
        } else if value < 0.0 || value > 1.0 {
            bail!(errors::Error::InvalidErrorProbability { index, value });
        }
    }

    Ok(probs.mapv(error_prob_to_phred))
}

/// Decode PHRED scaled quality scores into linear error probabilities.
///
/// The entire input is validated before any probability is computed: every score has
/// to be non-negative, and NaN is rejected. Positive infinity decodes to a
/// probability of zero. Since encoding truncates, decoding is not a value-for-value
/// inverse of `error_probs_to_phred`, only a monotone counterpart.
pub fn phred_to_error_probs(scores: ArrayView1<f64>) -> Result<Array1<f64>> {
    for (index, &value) in scores.iter().enumerate() {
        if value.is_nan() || value < 0.0 {
            bail!(errors::Error::InvalidPhredScore { index, value });
        }
    }

    Ok(scores.mapv(phred_to_error_prob))
}
