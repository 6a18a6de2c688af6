//! Integration tests for Priorkit.
//!
//! These tests verify end-to-end workflows combining multiple components.

use priorkit::prelude::*;

#[test]
fn test_elicit_then_summarize_workflow() {
    // Expert: success rate most likely 10%, 95% sure it is under 25%
    let prior = find_beta(0.1, 0.25, 0.95).expect("Failed to elicit prior");
    assert!((prior.b() - 23.0).abs() < 0.2, "b = {}", prior.b());
    assert!((prior.mode().expect("interior mode") - 0.1).abs() < 1e-9);

    // Deterministic stand-in for posterior draws: prior quantiles on a fine grid
    let draws: Vec<f64> = (1..1000)
        .map(|i| prior.quantile(i as f64 / 1000.0).expect("valid probability"))
        .collect();

    let row = bayes_summary(&draws, 0.95).expect("Failed to summarize");
    assert!(row.min <= row.q1 && row.q1 <= row.median && row.median <= row.q3);
    assert!(row.q3 <= row.max);
    assert!((row.mean - prior.mean()).abs() < 0.01, "mean {}", row.mean);
    assert!(row.hpd_lower >= row.min && row.hpd_upper <= row.max);
    // Right-skewed prior: HPD upper bound sits below the equal-tailed 97.5% point
    let q975 = prior.quantile(0.975).expect("valid probability");
    assert!(row.hpd_upper < q975, "{} vs {q975}", row.hpd_upper);
}

#[test]
fn test_custom_grid_matches_default_when_identical() {
    let default = find_beta(0.2, 0.4, 0.9).expect("default grid");
    let explicit = BetaElicitor::new()
        .with_grid(BetaGrid::default())
        .elicit(0.2, 0.4, 0.9)
        .expect("explicit grid");
    assert_eq!(default, explicit);
}

#[test]
fn test_narrow_grid_reports_no_solution() {
    let elicitor = BetaElicitor::new().with_grid(BetaGrid::default().with_range(1.0, 5.0));
    match elicitor.elicit(0.5, 0.51, 0.99) {
        Err(PriorkitError::NoSolutionFound { b_end, .. }) => assert_eq!(b_end, 5.0),
        other => panic!("expected NoSolutionFound, got {other:?}"),
    }
}

#[test]
fn test_normal_prior_workflow() {
    // Mean 10, 95% sure below 13.29
    let prior = find_normal(10.0, 13.29, 0.95).expect("Failed to elicit normal");
    assert!((prior.sd - 2.0).abs() < 0.01, "sd = {}", prior.sd);
    assert!((prior.precision - 1.0 / (prior.sd * prior.sd)).abs() < 1e-12);

    let upper = prior.quantile(0.95).expect("valid probability");
    assert!((upper - 13.29).abs() < 1e-3);
}

#[test]
fn test_table_summary_workflow() {
    let mut df = DataFrame::new(vec![(
        "theta".to_string(),
        (0..100).map(|i| f64::from(i) / 100.0).collect(),
    )])
    .expect("valid frame");
    df.add_column("sigma".to_string(), vec![1.5; 100])
        .expect("valid column");

    let table = bayes_summary_table(&df, 0.9).expect("Failed to summarize table");
    assert_eq!(table.names(), vec!["theta", "sigma"]);

    let sigma = table.row("sigma").expect("sigma row");
    assert!(sigma.values().iter().all(|v| (v - 1.5).abs() < 1e-12));

    let theta = table.row("theta").expect("theta row");
    assert!((theta.hpd_upper - theta.hpd_lower - 0.9).abs() < 1e-9);

    let rendered = table.to_string();
    assert!(rendered.contains("hpd_lwr") && rendered.contains("sigma"));
}

#[test]
fn test_labeled_json_output() {
    let row = bayes_summary(&[0.1, 0.2, 0.3, 0.4], 0.5).expect("valid sample");
    let value = serde_json::to_value(row).expect("serializable");

    for key in ["min", "Q1", "median", "mean", "Q3", "max", "hpd_lwr", "hpd_upr"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }

    let prior = find_beta(0.1, 0.25, 0.95).expect("valid prior");
    let json = serde_json::to_value(prior).expect("serializable");
    assert!(json.get("a").is_some() && json.get("b").is_some());
}

#[test]
fn test_grid_from_json_config() {
    let grid: BetaGrid =
        serde_json::from_str(r#"{ "b_range_end": 50.0 }"#).expect("valid config");
    assert_eq!(grid.b_range_start, 1.0);
    assert_eq!(grid.b_grid_size, 1000);

    let params = BetaElicitor::new()
        .with_grid(grid)
        .elicit(0.1, 0.25, DEFAULT_CONFIDENCE_LEVEL)
        .expect("solution inside narrowed range");
    assert!(params.b() <= 50.0);
}

#[test]
fn test_default_level_helpers_from_prelude() {
    assert_eq!(
        find_beta_default(0.1, 0.25).expect("valid prior"),
        find_beta(0.1, 0.25, DEFAULT_CONFIDENCE_LEVEL).expect("valid prior")
    );
    assert_eq!(
        find_normal_default(0.0, 1.645).expect("valid prior"),
        find_normal(0.0, 1.645, DEFAULT_CONFIDENCE_LEVEL).expect("valid prior")
    );

    let draws = [0.3, 0.1, 0.2, 0.5];
    assert_eq!(
        bayes_summary_default(&draws).expect("valid sample"),
        priorkit::bayes_summary_default(&draws).expect("valid sample")
    );
}
