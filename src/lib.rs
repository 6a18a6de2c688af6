//! Priorkit: prior elicitation and posterior summaries for Bayesian workflows.
//!
//! Priorkit turns expert judgments into prior hyperparameters and condenses
//! posterior draws into labeled summary rows.
//!
//! # Quick Start
//!
//! ```
//! use priorkit::prelude::*;
//!
//! // "Most likely 10%, and 95% sure it is below 25%"
//! let prior = find_beta(0.1, 0.25, 0.95).unwrap();
//! assert!((prior.b() - 23.0).abs() < 1e-6);
//!
//! // Summarize draws from a posterior
//! let draws: Vec<f64> = (0..200).map(|i| 0.1 + 0.001 * i as f64).collect();
//! let row = bayes_summary(&draws, 0.95).unwrap();
//! assert!(row.min <= row.hpd_lower && row.hpd_upper <= row.max);
//! ```
//!
//! # Modules
//!
//! - [`elicit`]: Beta and Normal hyperparameters from a mode/mean and a quantile
//! - [`summary`]: Posterior summary rows and tables with HPD intervals
//! - [`stats`]: Quantiles, five-number summaries and HPD intervals
//! - [`data`]: `DataFrame` for named columns of draws
//! - [`config`]: Search grid and default confidence level
//! - [`error`]: Error type shared by every module

pub mod config;
pub mod data;
pub mod elicit;
pub mod error;
pub mod prelude;
pub mod stats;
pub mod summary;

pub use config::{BetaGrid, DEFAULT_CONFIDENCE_LEVEL};
pub use data::DataFrame;
pub use elicit::{
    find_beta, find_beta_default, find_normal, find_normal_default, BetaElicitor, BetaParameters,
    NormalParameters,
};
pub use error::{PriorkitError, Result};
pub use summary::{
    bayes_summary, bayes_summary_default, bayes_summary_table, SummaryRow, SummaryTable,
};
