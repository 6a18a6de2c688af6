//! Configuration for the Beta hyperparameter grid search.

use serde::{Deserialize, Serialize};

use crate::error::{PriorkitError, Result};

/// Probability level used when the caller does not state one.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Grid of candidate `b` shape parameters scanned by the Beta elicitor.
///
/// The grid is evenly spaced and includes both endpoints, so its resolution
/// is `(b_range_end - b_range_start) / (b_grid_size - 1)`.
///
/// # Examples
///
/// ```
/// use priorkit::BetaGrid;
///
/// let grid = BetaGrid::default().with_range(1.0, 50.0).with_grid_size(50);
/// assert!(grid.validate().is_ok());
/// assert!((grid.step() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BetaGrid {
    /// Smallest candidate `b` (default: 1.0).
    pub b_range_start: f64,

    /// Largest candidate `b` (default: 100.0).
    pub b_range_end: f64,

    /// Number of candidates (default: 1000).
    pub b_grid_size: usize,
}

impl Default for BetaGrid {
    fn default() -> Self {
        Self {
            b_range_start: 1.0,
            b_range_end: 100.0,
            b_grid_size: 1000,
        }
    }
}

impl BetaGrid {
    /// Sets the closed range of candidate `b` values.
    #[must_use]
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.b_range_start = start;
        self.b_range_end = end;
        self
    }

    /// Sets the number of candidates.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.b_grid_size = size;
        self
    }

    /// Checks that the grid describes at least two positive, ascending points.
    ///
    /// # Errors
    ///
    /// Returns [`PriorkitError::InvalidHyperparameter`] for a non-finite or
    /// non-positive start, an end not above the start, or fewer than two points.
    pub fn validate(&self) -> Result<()> {
        if !self.b_range_start.is_finite() || self.b_range_start <= 0.0 {
            return Err(PriorkitError::invalid_hyperparameter(
                "b_range_start",
                self.b_range_start,
                "finite and > 0",
            ));
        }
        if !self.b_range_end.is_finite() || self.b_range_end <= self.b_range_start {
            return Err(PriorkitError::invalid_hyperparameter(
                "b_range_end",
                self.b_range_end,
                "finite and > b_range_start",
            ));
        }
        if self.b_grid_size < 2 {
            return Err(PriorkitError::invalid_hyperparameter(
                "b_grid_size",
                self.b_grid_size,
                ">= 2",
            ));
        }
        Ok(())
    }

    /// Spacing between neighbouring candidates.
    #[must_use]
    pub fn step(&self) -> f64 {
        if self.b_grid_size < 2 {
            return 0.0;
        }
        (self.b_range_end - self.b_range_start) / (self.b_grid_size - 1) as f64
    }

    /// Candidate values in ascending order, endpoints included.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let last = self.b_grid_size.saturating_sub(1);
        let step = self.step();
        (0..self.b_grid_size).map(move |i| {
            // Pin the last point so rounding never overshoots the range.
            if i == last {
                self.b_range_end
            } else {
                self.b_range_start + i as f64 * step
            }
        })
    }
}

/// Checks a probability level lies in the open interval (0, 1).
pub(crate) fn validate_level(param: &str, value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(PriorkitError::invalid_hyperparameter(param, value, "in (0, 1)"))
    }
}
