//! Error types for priorkit operations.
//!
//! Every public operation returns [`Result`], so callers can tell a bad
//! elicitation statement apart from a grid that is too coarse or an empty
//! posterior sample.

use thiserror::Error;

/// Main error type for priorkit operations.
///
/// # Examples
///
/// ```
/// use priorkit::error::PriorkitError;
///
/// let err = PriorkitError::domain("mode", 1.0, "in [0, 1)");
/// assert!(err.to_string().contains("Domain error"));
/// ```
#[derive(Debug, Error)]
pub enum PriorkitError {
    /// An input lies outside the domain where the formula is defined.
    #[error("Domain error: {param} = {value}, expected {constraint}")]
    Domain {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// The grid search never reached the requested quantile.
    #[error(
        "No solution found: Beta quantile at {confidence_level} never drops below \
         {percentile} for b in [{b_start}, {b_end}] ({grid_size} grid points)"
    )]
    NoSolutionFound {
        /// Target upper quantile value
        percentile: f64,
        /// Probability level of the quantile
        confidence_level: f64,
        /// First grid value of b
        b_start: f64,
        /// Last grid value of b
        b_end: f64,
        /// Number of grid points scanned
        grid_size: usize,
    },

    /// A sample or table had no values to summarize.
    #[error("Empty input: {context}")]
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// Invalid search or summary configuration.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Sample columns of a table have different lengths.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// The Beta backend rejected its shapes.
    #[error("Distribution error: Beta {0}")]
    BetaShape(#[from] statrs::distribution::BetaError),

    /// The Normal backend rejected its location or scale.
    #[error("Distribution error: Normal {0}")]
    NormalParams(#[from] statrs::distribution::NormalError),

    /// Generic error with string message.
    #[error("{0}")]
    Other(String),
}

impl From<&str> for PriorkitError {
    fn from(msg: &str) -> Self {
        PriorkitError::Other(msg.to_string())
    }
}

impl From<String> for PriorkitError {
    fn from(msg: String) -> Self {
        PriorkitError::Other(msg)
    }
}

impl PriorkitError {
    /// Create a domain error for a numeric input.
    #[must_use]
    pub fn domain(param: &str, value: f64, constraint: &str) -> Self {
        Self::Domain {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create an invalid hyperparameter error.
    #[must_use]
    pub fn invalid_hyperparameter(param: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }

    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PriorkitError>;
