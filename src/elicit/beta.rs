//! Beta hyperparameters from an elicited mode and upper quantile.
//!
//! There is no closed form linking a Beta distribution's mode and an
//! arbitrary quantile to its two shape parameters. The mode pins `a` as a
//! function of `b`:
//!
//! ```text
//! mode = (a - 1) / (a + b - 2)   =>   a = (1 + mode * (b - 2)) / (1 - mode)
//! ```
//!
//! which leaves a one-dimensional search over `b`. Candidates are scanned in
//! ascending order and the first one whose quantile at the requested level
//! falls strictly below the elicited bound is returned.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, ContinuousCDF};
use tracing::{debug, warn};

use crate::config::{validate_level, BetaGrid, DEFAULT_CONFIDENCE_LEVEL};
use crate::error::{PriorkitError, Result};

/// Shape parameters of a Beta(a, b) distribution.
///
/// Serializes with the labels `a` and `b`.
///
/// # Example
///
/// ```
/// use priorkit::BetaParameters;
///
/// let params = BetaParameters::new(3.0, 19.0).unwrap();
/// assert!((params.mode().unwrap() - 0.1).abs() < 1e-12);
/// assert!((params.mean() - 3.0 / 22.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaParameters {
    a: f64,
    b: f64,
}

impl BetaParameters {
    /// Creates a parameter pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either shape is not a finite positive number.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !(a.is_finite() && a > 0.0) {
            return Err(PriorkitError::domain("a", a, "finite and > 0"));
        }
        if !(b.is_finite() && b > 0.0) {
            return Err(PriorkitError::domain("b", b, "finite and > 0"));
        }
        Ok(Self { a, b })
    }

    /// Returns the first shape parameter.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the second shape parameter.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Mode `(a-1)/(a+b-2)`, defined only when both shapes exceed 1.
    #[must_use]
    pub fn mode(&self) -> Option<f64> {
        if self.a > 1.0 && self.b > 1.0 {
            Some((self.a - 1.0) / (self.a + self.b - 2.0))
        } else {
            None
        }
    }

    /// Mean `a/(a+b)`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.a / (self.a + self.b)
    }

    /// Variance `ab / ((a+b)^2 (a+b+1))`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        let sum = self.a + self.b;
        (self.a * self.b) / (sum * sum * (sum + 1.0))
    }

    /// Builds the `statrs` distribution for these shapes.
    ///
    /// # Errors
    ///
    /// Returns an error if `statrs` rejects the shapes.
    pub fn distribution(&self) -> Result<Beta> {
        Ok(Beta::new(self.a, self.b)?)
    }

    /// Value below which a fraction `p` of the probability mass lies.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is outside `[0, 1]`.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(PriorkitError::domain("p", p, "in [0, 1]"));
        }
        Ok(self.distribution()?.inverse_cdf(p))
    }
}

/// One evaluated grid point of the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaCandidate {
    /// Shape forced by the mode constraint.
    pub a: f64,
    /// Grid value.
    pub b: f64,
    /// Beta(a, b) quantile at the requested level.
    pub quantile: f64,
}

/// Shape `a` implied by `mode` for a given `b`.
///
/// `mode == 0` collapses to `a = 1` for every `b`.
#[must_use]
pub fn shape_a_for_mode(mode: f64, b: f64) -> f64 {
    (1.0 + mode * (b - 2.0)) / (1.0 - mode)
}

/// Grid-search elicitor for Beta priors.
///
/// # Example
///
/// ```
/// use priorkit::BetaElicitor;
///
/// // Expert: most likely 0.1, 95% sure it is below 0.25
/// let elicitor = BetaElicitor::new();
/// let params = elicitor.elicit(0.1, 0.25, 0.95).unwrap();
///
/// assert!((params.mode().unwrap() - 0.1).abs() < 1e-9);
/// let q95 = params.quantile(0.95).unwrap();
/// assert!(q95 < 0.25 && q95 > 0.24);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BetaElicitor {
    grid: BetaGrid,
}

impl BetaElicitor {
    /// Creates an elicitor over the default grid (`b` in [1, 100], 1000 points).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the search grid.
    #[must_use]
    pub fn with_grid(mut self, grid: BetaGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Returns the search grid.
    #[must_use]
    pub fn grid(&self) -> &BetaGrid {
        &self.grid
    }

    /// Evaluates every grid point in ascending `b` order.
    ///
    /// Each item is the candidate for one grid point, or the error raised
    /// while building its distribution.
    ///
    /// # Errors
    ///
    /// Returns an error up front for an invalid mode, level or grid, or for
    /// a `b_range_start` so small that the mode forces `a <= 0`.
    pub fn candidates(
        &self,
        mode: f64,
        confidence_level: f64,
    ) -> Result<impl Iterator<Item = Result<BetaCandidate>> + '_> {
        validate_mode(mode)?;
        validate_level("confidence_level", confidence_level)?;
        self.grid.validate()?;

        // a grows with b, so the first grid point bounds the whole scan
        let b_start = self.grid.b_range_start;
        if shape_a_for_mode(mode, b_start) <= 0.0 {
            return Err(PriorkitError::invalid_hyperparameter(
                "b_range_start",
                b_start,
                &format!("> {} so that a > 0 at mode {mode}", 2.0 - 1.0 / mode),
            ));
        }

        Ok(self.grid.points().map(move |b| {
            let a = shape_a_for_mode(mode, b);
            let quantile = Beta::new(a, b)?.inverse_cdf(confidence_level);
            Ok(BetaCandidate { a, b, quantile })
        }))
    }

    /// Finds Beta shapes whose mode is `mode` and whose quantile at
    /// `confidence_level` lies just below `percentile`.
    ///
    /// # Errors
    ///
    /// - [`PriorkitError::Domain`] if `mode` is outside `[0, 1)` or
    ///   `percentile` is outside `(0, 1)`
    /// - [`PriorkitError::InvalidHyperparameter`] for a bad level or grid
    /// - [`PriorkitError::NoSolutionFound`] if no grid point qualifies
    pub fn elicit(
        &self,
        mode: f64,
        percentile: f64,
        confidence_level: f64,
    ) -> Result<BetaParameters> {
        if !(percentile > 0.0 && percentile < 1.0) {
            return Err(PriorkitError::domain("percentile", percentile, "in (0, 1)"));
        }

        let candidates = self.candidates(mode, confidence_level)?;

        if mode == 0.0 {
            warn!("mode = 0 pins a = 1; searching the boundary Beta(1, b) family");
        }
        if percentile <= mode {
            warn!(
                mode,
                percentile,
                "percentile does not exceed the mode; result may not match intent"
            );
        }
        debug!(
            mode,
            percentile,
            confidence_level,
            b_start = self.grid.b_range_start,
            b_end = self.grid.b_range_end,
            grid_size = self.grid.b_grid_size,
            "scanning Beta grid"
        );

        for candidate in candidates {
            let candidate = candidate?;
            if candidate.quantile < percentile {
                debug!(
                    a = candidate.a,
                    b = candidate.b,
                    quantile = candidate.quantile,
                    "grid point accepted"
                );
                return BetaParameters::new(candidate.a, candidate.b);
            }
        }

        Err(PriorkitError::NoSolutionFound {
            percentile,
            confidence_level,
            b_start: self.grid.b_range_start,
            b_end: self.grid.b_range_end,
            grid_size: self.grid.b_grid_size,
        })
    }
}

/// Elicits a Beta prior over the default grid.
///
/// # Errors
///
/// See [`BetaElicitor::elicit`].
///
/// # Example
///
/// ```
/// let params = priorkit::find_beta(0.1, 0.25, priorkit::DEFAULT_CONFIDENCE_LEVEL).unwrap();
/// assert!(params.a() > 1.0 && params.b() > 1.0);
/// ```
pub fn find_beta(mode: f64, percentile: f64, confidence_level: f64) -> Result<BetaParameters> {
    BetaElicitor::new().elicit(mode, percentile, confidence_level)
}

/// [`find_beta`] at the default 0.95 level.
///
/// # Errors
///
/// See [`BetaElicitor::elicit`].
pub fn find_beta_default(mode: f64, percentile: f64) -> Result<BetaParameters> {
    find_beta(mode, percentile, DEFAULT_CONFIDENCE_LEVEL)
}

fn validate_mode(mode: f64) -> Result<()> {
    if mode == 1.0 {
        return Err(PriorkitError::domain(
            "mode",
            mode,
            "!= 1 (a = (1 + mode*(b-2)) / (1 - mode) divides by zero)",
        ));
    }
    if !(0.0..1.0).contains(&mode) {
        return Err(PriorkitError::domain("mode", mode, "in [0, 1)"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "beta_tests.rs"]
mod tests;
