//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use priorkit::prelude::*;
//! ```

pub use crate::config::{BetaGrid, DEFAULT_CONFIDENCE_LEVEL};
pub use crate::data::DataFrame;
pub use crate::elicit::{
    find_beta, find_beta_default, find_normal, find_normal_default, BetaElicitor, BetaParameters,
    NormalParameters,
};
pub use crate::error::{PriorkitError, Result};
pub use crate::stats::{hpd_interval, DescriptiveStats};
pub use crate::summary::{
    bayes_summary, bayes_summary_default, bayes_summary_table, SummaryRow, SummaryTable,
};
