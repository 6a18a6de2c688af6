//! Posterior summaries: order statistics plus an HPD interval.
//!
//! Each summary row is built field by field from named statistics:
//! `min, Q1, median, mean, Q3, max, hpd_lwr, hpd_upr`.
//!
//! # Example
//!
//! ```
//! use priorkit::summary::bayes_summary;
//!
//! let draws: Vec<f64> = (1..=99).map(|i| i as f64 / 100.0).collect();
//! let row = bayes_summary(&draws, 0.95).unwrap();
//!
//! assert!((row.median - 0.5).abs() < 1e-12);
//! assert!(row.hpd_lower >= row.min && row.hpd_upper <= row.max);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{validate_level, DEFAULT_CONFIDENCE_LEVEL};
use crate::data::DataFrame;
use crate::error::{PriorkitError, Result};
use crate::stats::{ensure_finite, hpd_sorted, interpolate_sorted};

/// Column labels of a summary, in output order.
pub const SUMMARY_COLUMNS: [&str; 8] = [
    "min", "Q1", "median", "mean", "Q3", "max", "hpd_lwr", "hpd_upr",
];

/// Summary of one posterior sample.
///
/// Serializes with the labels of [`SUMMARY_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Smallest draw.
    pub min: f64,
    /// 25th percentile.
    #[serde(rename = "Q1")]
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// 75th percentile.
    #[serde(rename = "Q3")]
    pub q3: f64,
    /// Largest draw.
    pub max: f64,
    /// Lower HPD bound.
    #[serde(rename = "hpd_lwr")]
    pub hpd_lower: f64,
    /// Upper HPD bound.
    #[serde(rename = "hpd_upr")]
    pub hpd_upper: f64,
}

impl SummaryRow {
    /// Values in [`SUMMARY_COLUMNS`] order.
    #[must_use]
    pub fn values(&self) -> [f64; 8] {
        [
            self.min,
            self.q1,
            self.median,
            self.mean,
            self.q3,
            self.max,
            self.hpd_lower,
            self.hpd_upper,
        ]
    }
}

/// Summarizes one sample of posterior draws.
///
/// # Errors
///
/// - [`PriorkitError::EmptyInput`] for an empty sample
/// - [`PriorkitError::InvalidHyperparameter`] if `confidence_level` is not in `(0, 1)`
/// - [`PriorkitError::Domain`] if a draw is NaN or infinite
pub fn bayes_summary(sample: &[f64], confidence_level: f64) -> Result<SummaryRow> {
    if sample.is_empty() {
        return Err(PriorkitError::empty_input(
            "cannot summarize empty posterior sample",
        ));
    }
    validate_level("confidence_level", confidence_level)?;
    ensure_finite(sample)?;

    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let (hpd_lower, hpd_upper) = hpd_sorted(&sorted, confidence_level);

    Ok(SummaryRow {
        min: sorted[0],
        q1: interpolate_sorted(&sorted, 0.25),
        median: interpolate_sorted(&sorted, 0.5),
        mean,
        q3: interpolate_sorted(&sorted, 0.75),
        max: sorted[n - 1],
        hpd_lower,
        hpd_upper,
    })
}

/// [`bayes_summary`] at the default 0.95 level.
///
/// # Errors
///
/// See [`bayes_summary`].
pub fn bayes_summary_default(sample: &[f64]) -> Result<SummaryRow> {
    bayes_summary(sample, DEFAULT_CONFIDENCE_LEVEL)
}

/// Summarizes every column of a table, one row per column.
///
/// # Errors
///
/// Returns the first column's error, annotated with its name for empty columns.
///
/// # Example
///
/// ```
/// use priorkit::data::DataFrame;
/// use priorkit::summary::bayes_summary_table;
///
/// let df = DataFrame::new(vec![
///     ("alpha".to_string(), vec![1.0, 2.0, 3.0]),
///     ("beta".to_string(), vec![0.5, 0.5, 0.5]),
/// ]).unwrap();
///
/// let table = bayes_summary_table(&df, 0.9).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.row("beta").unwrap().mean, 0.5);
/// ```
pub fn bayes_summary_table(table: &DataFrame, confidence_level: f64) -> Result<SummaryTable> {
    validate_level("confidence_level", confidence_level)?;

    let rows = table
        .iter_columns()
        .map(|(name, draws)| {
            if draws.is_empty() {
                return Err(PriorkitError::empty_input(&format!(
                    "column '{name}' has no draws"
                )));
            }
            bayes_summary(draws, confidence_level).map(|row| (name.to_string(), row))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        columns = rows.len(),
        draws = table.n_rows(),
        confidence_level,
        "posterior table summarized"
    );

    Ok(SummaryTable { rows })
}

/// Named summary rows, one per input column, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    rows: Vec<(String, SummaryRow)>,
}

impl SummaryTable {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a named column.
    #[must_use]
    pub fn row(&self, name: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    /// Row names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterates over (name, row) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SummaryRow)> {
        self.rows.iter().map(|(n, r)| (n.as_str(), r))
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .rows
            .iter()
            .map(|(n, _)| n.len())
            .max()
            .unwrap_or(0);

        write!(f, "{:name_width$}", "")?;
        for label in SUMMARY_COLUMNS {
            write!(f, " {label:>10}")?;
        }
        writeln!(f)?;

        for (name, row) in &self.rows {
            write!(f, "{name:<name_width$}")?;
            for value in row.values() {
                write!(f, " {value:>10.4}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
