//! Descriptive statistics for posterior draws.
//!
//! - Quantiles and percentiles using the R-7 method (Hyndman & Fan 1996),
//!   the linear interpolation used by R, `NumPy` and Pandas
//! - Five-number summary (min, Q1, median, Q3, max)
//! - Highest-posterior-density intervals ([`hpd_interval`])
//!
//! # Examples
//!
//! ```
//! use priorkit::stats::DescriptiveStats;
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(&data);
//!
//! assert_eq!(stats.quantile(0.5).unwrap(), 3.0); // median
//! assert_eq!(stats.quantile(0.0).unwrap(), 1.0); // min
//! assert_eq!(stats.quantile(1.0).unwrap(), 5.0); // max
//! ```

mod hpd;

pub use hpd::hpd_interval;
pub(crate) use hpd::hpd_sorted;

use serde::{Deserialize, Serialize};

use crate::error::{PriorkitError, Result};

/// Descriptive statistics computed on a slice of draws.
///
/// Holds a reference to the data to avoid copying.
#[derive(Debug, Clone, Copy)]
pub struct DescriptiveStats<'a> {
    data: &'a [f64],
}

/// Five-number summary: minimum, Q1, median, Q3, maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl<'a> DescriptiveStats<'a> {
    /// Create a new `DescriptiveStats` instance over `data`.
    #[must_use]
    pub fn new(data: &'a [f64]) -> Self {
        Self { data }
    }

    /// Number of draws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when there are no draws.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Arithmetic mean.
    ///
    /// # Errors
    ///
    /// Returns [`PriorkitError::EmptyInput`] for an empty slice.
    pub fn mean(&self) -> Result<f64> {
        if self.data.is_empty() {
            return Err(PriorkitError::empty_input("cannot compute mean of empty sample"));
        }
        Ok(self.data.iter().sum::<f64>() / self.data.len() as f64)
    }

    /// Compute quantile using linear interpolation (R-7 method).
    ///
    /// Uses `select_nth_unstable_by` for O(n) average time instead of a full sort.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is empty or `q` is not in [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use priorkit::stats::DescriptiveStats;
    ///
    /// let data = [4.0, 1.0, 3.0, 2.0];
    /// let stats = DescriptiveStats::new(&data);
    /// assert_eq!(stats.quantile(0.5).unwrap(), 2.5);
    /// ```
    pub fn quantile(&self, q: f64) -> Result<f64> {
        if self.data.is_empty() {
            return Err(PriorkitError::empty_input(
                "cannot compute quantile of empty sample",
            ));
        }
        if !(0.0..=1.0).contains(&q) {
            return Err(PriorkitError::domain("q", q, "in [0, 1]"));
        }

        let n = self.data.len();
        if n == 1 {
            return Ok(self.data[0]);
        }

        // R-7: h = (n - 1) * q, 0-indexed position in sorted order
        let h = (n - 1) as f64 * q;
        let h_floor = h.floor() as usize;
        let h_ceil = h.ceil() as usize;

        let mut working = self.data.to_vec();
        let (_, &mut lower, upper) = working.select_nth_unstable_by(h_floor, f64::total_cmp);

        if h_floor == h_ceil {
            return Ok(lower);
        }

        // Smallest element of the upper partition is the next order statistic
        let next = upper
            .iter()
            .copied()
            .min_by(f64::total_cmp)
            .unwrap_or(lower);

        Ok(lower + (h - h_floor as f64) * (next - lower))
    }

    /// Compute multiple percentiles with a single sort.
    ///
    /// # Arguments
    /// * `percentiles` - Percentile values in [0, 100]
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is empty or a percentile is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use priorkit::stats::DescriptiveStats;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let stats = DescriptiveStats::new(&data);
    /// let p = stats.percentiles(&[25.0, 50.0, 75.0]).unwrap();
    /// assert_eq!(p, vec![2.0, 3.0, 4.0]);
    /// ```
    pub fn percentiles(&self, percentiles: &[f64]) -> Result<Vec<f64>> {
        if self.data.is_empty() {
            return Err(PriorkitError::empty_input(
                "cannot compute percentiles of empty sample",
            ));
        }
        for &p in percentiles {
            if !(0.0..=100.0).contains(&p) {
                return Err(PriorkitError::domain("percentile", p, "in [0, 100]"));
            }
        }

        let mut sorted = self.data.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);

        Ok(percentiles
            .iter()
            .map(|&p| interpolate_sorted(&sorted, p / 100.0))
            .collect())
    }

    /// Compute five-number summary: min, Q1, median, Q3, max.
    ///
    /// # Errors
    ///
    /// Returns [`PriorkitError::EmptyInput`] for an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use priorkit::stats::DescriptiveStats;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let summary = DescriptiveStats::new(&data).five_number_summary().unwrap();
    ///
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.q1, 2.0);
    /// assert_eq!(summary.median, 3.0);
    /// assert_eq!(summary.q3, 4.0);
    /// assert_eq!(summary.max, 5.0);
    /// ```
    pub fn five_number_summary(&self) -> Result<FiveNumberSummary> {
        let values = self.percentiles(&[0.0, 25.0, 50.0, 75.0, 100.0])?;

        Ok(FiveNumberSummary {
            min: values[0],
            q1: values[1],
            median: values[2],
            q3: values[3],
            max: values[4],
        })
    }

    /// Interquartile range Q3 - Q1.
    ///
    /// # Errors
    ///
    /// Returns [`PriorkitError::EmptyInput`] for an empty slice.
    pub fn iqr(&self) -> Result<f64> {
        let summary = self.five_number_summary()?;
        Ok(summary.q3 - summary.q1)
    }
}

/// R-7 interpolation on data already sorted ascending. `q` must be in [0, 1].
pub(crate) fn interpolate_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    let h = (n - 1) as f64 * q;
    let h_floor = h.floor() as usize;
    let h_ceil = h.ceil() as usize;

    if h_floor == h_ceil || h_ceil >= n {
        sorted[h_floor.min(n - 1)]
    } else {
        sorted[h_floor] + (h - h_floor as f64) * (sorted[h_ceil] - sorted[h_floor])
    }
}

/// Rejects NaN and infinite draws.
pub(crate) fn ensure_finite(data: &[f64]) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(idx) => Err(PriorkitError::domain(
            &format!("sample[{idx}]"),
            data[idx],
            "finite",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
