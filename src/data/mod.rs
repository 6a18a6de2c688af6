//! `DataFrame` module for named columns of posterior draws.
//!
//! A sampler typically returns one column of draws per parameter. This is a
//! minimal container for that shape; heavy data wrangling belongs elsewhere.

use crate::error::{PriorkitError, Result};

/// A minimal `DataFrame` with named columns of draws.
///
/// This is a thin wrapper around `Vec<(String, Vec<f64>)>`. Column order is
/// preserved, so summaries come out in the order the columns went in.
///
/// # Examples
///
/// ```
/// use priorkit::data::DataFrame;
///
/// let columns = vec![
///     ("theta".to_string(), vec![0.1, 0.2, 0.3]),
///     ("sigma".to_string(), vec![1.0, 1.1, 0.9]),
/// ];
/// let df = DataFrame::new(columns).unwrap();
/// assert_eq!(df.shape(), (3, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    columns: Vec<(String, Vec<f64>)>,
    n_rows: usize,
}

impl DataFrame {
    /// Creates a new `DataFrame` from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns, if columns have different
    /// lengths, or if a name is empty or repeated.
    pub fn new(columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        if columns.is_empty() {
            return Err(PriorkitError::empty_input(
                "DataFrame must have at least one column",
            ));
        }

        let n_rows = columns[0].1.len();

        for (name, col) in &columns {
            if col.len() != n_rows {
                return Err(PriorkitError::dimension_mismatch(
                    &format!("rows of column '{name}'"),
                    n_rows,
                    col.len(),
                ));
            }
            if name.is_empty() {
                return Err("Column names cannot be empty".into());
            }
        }

        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(format!("Duplicate column name '{}'", pair[0]).into());
        }

        Ok(Self { columns, n_rows })
    }

    /// Wraps a single unnamed sample as a one-column frame named `"0"`.
    ///
    /// # Errors
    ///
    /// Never fails for a single column; kept fallible for symmetry with [`DataFrame::new`].
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        Self::new(vec![("0".to_string(), sample.to_vec())])
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns a column by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the column doesn't exist.
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
            .ok_or_else(|| format!("Column '{name}' not found").into())
    }

    /// Returns an iterator over columns as (name, draws) pairs.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Adds a new column.
    ///
    /// # Errors
    ///
    /// Returns an error if the length doesn't match or the name is empty or taken.
    pub fn add_column(&mut self, name: String, data: Vec<f64>) -> Result<()> {
        if data.len() != self.n_rows {
            return Err(PriorkitError::dimension_mismatch(
                &format!("rows of column '{name}'"),
                self.n_rows,
                data.len(),
            ));
        }
        if name.is_empty() {
            return Err("Column name cannot be empty".into());
        }
        if self.columns.iter().any(|(n, _)| n == &name) {
            return Err(format!("Column name '{name}' already exists").into());
        }

        self.columns.push((name, data));
        Ok(())
    }
}
