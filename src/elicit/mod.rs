//! Prior elicitation: hyperparameters from expert judgments.
//!
//! An expert rarely states shape parameters directly. They state a most
//! likely value and a bound they are fairly sure the quantity stays under.
//! This module turns such statements into distribution parameters:
//!
//! - [`find_beta`]: Beta(a, b) from a mode and an upper quantile (grid search)
//! - [`find_normal`]: Normal(mean, sd) from a mean and a quantile (closed form)
//!
//! # Example: Binomial success probability
//!
//! ```
//! use priorkit::elicit::find_beta;
//!
//! // The most likely value for p is 0.1, and the expert is 95% sure
//! // that p is no larger than 0.25.
//! let prior = find_beta(0.1, 0.25, 0.95).unwrap();
//! assert!(prior.a() > 3.0 && prior.a() < 4.0);
//! assert!(prior.b() > 20.0 && prior.b() < 25.0);
//! ```

mod beta;
mod normal;

pub use beta::{
    find_beta, find_beta_default, shape_a_for_mode, BetaCandidate, BetaElicitor, BetaParameters,
};
pub use normal::{find_normal, find_normal_default, NormalParameters};
