//! Highest-posterior-density intervals from posterior draws.
//!
//! For unimodal posteriors the HPD interval is the narrowest interval that
//! holds the requested share of the draws. With `n` sorted draws and level
//! `p`, every window spanning `k = floor(p * n)` index steps is a candidate,
//! and the narrowest one wins (first one on ties).

use crate::config::validate_level;
use crate::error::{PriorkitError, Result};

/// Narrowest interval containing a share `level` of the draws.
///
/// # Errors
///
/// - [`PriorkitError::EmptyInput`] for an empty sample
/// - [`PriorkitError::InvalidHyperparameter`] if `level` is not in `(0, 1)`
/// - [`PriorkitError::Domain`] if a draw is NaN or infinite
///
/// # Examples
///
/// ```
/// use priorkit::stats::hpd_interval;
///
/// let draws: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
/// let (lower, upper) = hpd_interval(&draws, 0.9).unwrap();
/// assert!(upper - lower <= 0.9 + 1e-12);
/// ```
pub fn hpd_interval(sample: &[f64], level: f64) -> Result<(f64, f64)> {
    if sample.is_empty() {
        return Err(PriorkitError::empty_input(
            "cannot compute HPD interval of empty sample",
        ));
    }
    validate_level("level", level)?;
    super::ensure_finite(sample)?;

    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Ok(hpd_sorted(&sorted, level))
}

/// HPD on data already sorted ascending and validated.
pub(crate) fn hpd_sorted(sorted: &[f64], level: f64) -> (f64, f64) {
    let n = sorted.len();
    let span = ((level * n as f64).floor() as usize).min(n - 1);

    let mut best = 0;
    let mut best_width = f64::INFINITY;
    for start in 0..n - span {
        let width = sorted[start + span] - sorted[start];
        if width < best_width {
            best_width = width;
            best = start;
        }
    }

    (sorted[best], sorted[best + span])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hpd_single_draw() {
        let (lower, upper) = hpd_interval(&[2.5], 0.95).expect("valid sample");
        assert_eq!(lower, 2.5);
        assert_eq!(upper, 2.5);
    }

    #[test]
    fn test_hpd_identical_draws() {
        let draws = vec![0.75; 40];
        let (lower, upper) = hpd_interval(&draws, 0.95).expect("valid sample");
        assert_eq!(lower, 0.75);
        assert_eq!(upper, 0.75);
    }

    #[test]
    fn test_hpd_uniform_grid() {
        // 0, 1, ..., 99: floor(0.9 * 100) = 90 steps, every window has width 90
        let draws: Vec<f64> = (0..100).map(f64::from).collect();
        let (lower, upper) = hpd_interval(&draws, 0.9).expect("valid sample");
        assert_eq!(lower, 0.0);
        assert_eq!(upper, 90.0);
    }

    #[test]
    fn test_hpd_skewed_prefers_dense_region() {
        // Dense cluster near 0, long sparse tail
        let mut draws: Vec<f64> = (0..90).map(|i| i as f64 * 0.01).collect();
        draws.extend((1..=10).map(|i| 10.0 * i as f64));
        let (lower, upper) = hpd_interval(&draws, 0.8).expect("valid sample");
        assert!(lower < 0.1, "lower={lower} should start in the dense region");
        assert!(upper < 1.0, "upper={upper} should stay in the dense region");
    }

    #[test]
    fn test_hpd_order_independent() {
        let draws = [5.0, 1.0, 4.0, 2.0, 3.0, 2.5, 3.5];
        let mut shuffled = draws;
        shuffled.reverse();
        assert_eq!(
            hpd_interval(&draws, 0.5).expect("valid sample"),
            hpd_interval(&shuffled, 0.5).expect("valid sample")
        );
    }

    #[test]
    fn test_hpd_contains_requested_share() {
        let draws: Vec<f64> = (0..200).map(|i| ((i as f64) * 0.37).sin()).collect();
        let (lower, upper) = hpd_interval(&draws, 0.8).expect("valid sample");
        let inside = draws.iter().filter(|&&x| x >= lower && x <= upper).count();
        assert!(inside >= 160, "inside={inside}");
    }

    #[test]
    fn test_hpd_empty_sample() {
        assert!(matches!(
            hpd_interval(&[], 0.95),
            Err(PriorkitError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_hpd_invalid_level() {
        assert!(hpd_interval(&[1.0, 2.0], 0.0).is_err());
        assert!(hpd_interval(&[1.0, 2.0], 1.0).is_err());
    }

    #[test]
    fn test_hpd_rejects_nan() {
        assert!(matches!(
            hpd_interval(&[1.0, f64::NAN], 0.5),
            Err(PriorkitError::Domain { .. })
        ));
    }
}
