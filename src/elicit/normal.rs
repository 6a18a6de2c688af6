//! Normal hyperparameters from a mean and one quantile statement.
//!
//! Closed form: if `percentile` is the value with cumulative probability
//! `confidence_level`, then `sd = (percentile - mean) / z` where `z` is the
//! standard-normal quantile at that level.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use crate::config::{validate_level, DEFAULT_CONFIDENCE_LEVEL};
use crate::error::{PriorkitError, Result};

/// Location, spread and precision of a Normal prior.
///
/// Serializes with the labels `mean`, `sd` and `precision`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalParameters {
    /// Prior mean.
    pub mean: f64,
    /// Standard deviation.
    pub sd: f64,
    /// Inverse variance, `1 / sd^2`.
    pub precision: f64,
}

impl NormalParameters {
    /// Prior variance `sd^2`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.sd * self.sd
    }

    /// Value below which a fraction `p` of the prior mass lies.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is outside `(0, 1)`.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        validate_level("p", p)?;
        Ok(Normal::new(self.mean, self.sd)?.inverse_cdf(p))
    }
}

/// Derives a Normal prior from its mean and the value at `confidence_level`.
///
/// # Errors
///
/// - [`PriorkitError::Domain`] if `mean` or `percentile` is not finite, or
///   the implied standard deviation is zero, negative or not finite
/// - [`PriorkitError::InvalidHyperparameter`] if `confidence_level` is not in `(0, 1)`
///
/// A `percentile` on the wrong side of `mean` for its level (below the mean
/// at a level above 0.5, or above it at a level below 0.5) is rejected. The
/// closed form alone would return a negative `sd` there, which no Normal
/// prior has.
///
/// # Example
///
/// ```
/// use priorkit::find_normal;
///
/// // Prior mean 0, 95% sure the value is below 1.645
/// let params = find_normal(0.0, 1.645, 0.95).unwrap();
/// assert!((params.sd - 1.0).abs() < 1e-3);
/// assert!((params.precision - 1.0).abs() < 1e-2);
/// ```
pub fn find_normal(mean: f64, percentile: f64, confidence_level: f64) -> Result<NormalParameters> {
    if !mean.is_finite() {
        return Err(PriorkitError::domain("mean", mean, "finite"));
    }
    if !percentile.is_finite() {
        return Err(PriorkitError::domain("percentile", percentile, "finite"));
    }
    validate_level("confidence_level", confidence_level)?;

    if percentile == mean {
        return Err(PriorkitError::domain(
            "percentile",
            percentile,
            "!= mean (zero spread has no finite precision)",
        ));
    }

    let z = Normal::new(0.0, 1.0)?.inverse_cdf(confidence_level);
    if z.abs() < f64::EPSILON {
        return Err(PriorkitError::domain(
            "confidence_level",
            confidence_level,
            "!= 0.5 (the median carries no spread information)",
        ));
    }
    let sd = (percentile - mean) / z;

    // sign of z must agree with percentile - mean
    if !(sd.is_finite() && sd > 0.0) {
        return Err(PriorkitError::Domain {
            param: "sd".to_string(),
            value: sd.to_string(),
            constraint: format!(
                "finite and > 0 (percentile {percentile} must lie on the {} side of mean {mean} \
                 at level {confidence_level})",
                if z > 0.0 { "upper" } else { "lower" }
            ),
        });
    }

    let precision = 1.0 / (sd * sd);
    debug!(mean, sd, precision, "normal prior derived");

    Ok(NormalParameters {
        mean,
        sd,
        precision,
    })
}

/// [`find_normal`] at the default 0.95 level.
///
/// # Errors
///
/// See [`find_normal`].
pub fn find_normal_default(mean: f64, percentile: f64) -> Result<NormalParameters> {
    find_normal(mean, percentile, DEFAULT_CONFIDENCE_LEVEL)
}

#[cfg(test)]
#[path = "normal_tests.rs"]
mod tests;
