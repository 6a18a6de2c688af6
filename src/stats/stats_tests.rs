use super::*;

#[test]
fn test_quantile_median_odd() {
    let data = [3.0, 1.0, 5.0, 2.0, 4.0];
    let stats = DescriptiveStats::new(&data);
    assert_eq!(stats.quantile(0.5).expect("valid quantile"), 3.0);
}

#[test]
fn test_quantile_interpolates() {
    let data = [1.0, 2.0, 3.0, 4.0];
    let stats = DescriptiveStats::new(&data);
    // h = 3 * 0.25 = 0.75 -> 1 + 0.75 * (2 - 1)
    assert!((stats.quantile(0.25).expect("valid quantile") - 1.75).abs() < 1e-12);
}

#[test]
fn test_quantile_single_element() {
    let data = [7.0];
    let stats = DescriptiveStats::new(&data);
    assert_eq!(stats.quantile(0.3).expect("valid quantile"), 7.0);
}

#[test]
fn test_quantile_matches_percentiles() {
    let data: Vec<f64> = (0..37).map(|i| ((i as f64) * 1.7).cos() * 10.0).collect();
    let stats = DescriptiveStats::new(&data);
    let batch = stats
        .percentiles(&[10.0, 33.0, 50.0, 90.0])
        .expect("valid percentiles");
    for (p, value) in [10.0, 33.0, 50.0, 90.0].iter().zip(batch) {
        let single = stats.quantile(p / 100.0).expect("valid quantile");
        assert!((single - value).abs() < 1e-12, "p={p}: {single} vs {value}");
    }
}

#[test]
fn test_quantile_errors() {
    let empty: [f64; 0] = [];
    assert!(matches!(
        DescriptiveStats::new(&empty).quantile(0.5),
        Err(PriorkitError::EmptyInput { .. })
    ));

    let data = [1.0, 2.0];
    let stats = DescriptiveStats::new(&data);
    assert!(stats.quantile(-0.1).is_err());
    assert!(stats.quantile(1.1).is_err());
    assert!(stats.percentiles(&[101.0]).is_err());
}

#[test]
fn test_mean() {
    let data = [1.0, 2.0, 3.0, 4.0];
    let stats = DescriptiveStats::new(&data);
    assert!((stats.mean().expect("non-empty") - 2.5).abs() < 1e-12);

    let empty: [f64; 0] = [];
    assert!(DescriptiveStats::new(&empty).mean().is_err());
}

#[test]
fn test_five_number_summary_and_iqr() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let stats = DescriptiveStats::new(&data);
    let summary = stats.five_number_summary().expect("non-empty");
    assert_eq!(
        summary,
        FiveNumberSummary {
            min: 1.0,
            q1: 2.0,
            median: 3.0,
            q3: 4.0,
            max: 5.0,
        }
    );
    assert_eq!(stats.iqr().expect("non-empty"), 2.0);
}

#[test]
fn test_len_and_is_empty() {
    let data = [1.0, 2.0];
    let stats = DescriptiveStats::new(&data);
    assert_eq!(stats.len(), 2);
    assert!(!stats.is_empty());
}

#[test]
fn test_interpolate_sorted_endpoints() {
    let sorted = [1.0, 4.0, 9.0];
    assert_eq!(interpolate_sorted(&sorted, 0.0), 1.0);
    assert_eq!(interpolate_sorted(&sorted, 1.0), 9.0);
    assert_eq!(interpolate_sorted(&sorted, 0.75), 6.5);
}

#[test]
fn test_ensure_finite() {
    assert!(ensure_finite(&[1.0, 2.0]).is_ok());
    match ensure_finite(&[1.0, f64::INFINITY]) {
        Err(PriorkitError::Domain { param, .. }) => assert_eq!(param, "sample[1]"),
        other => panic!("expected Domain error, got {other:?}"),
    }
}

/// FALSIFY-DS-001: Q1 <= median <= Q3 and all inside [min, max]
#[test]
fn falsify_ds_001_summary_ordering() {
    let data: Vec<f64> = (0..51).map(|i| ((i as f64) * 0.61).sin() * 3.0).collect();
    let s = DescriptiveStats::new(&data)
        .five_number_summary()
        .expect("non-empty");
    assert!(
        s.min <= s.q1 && s.q1 <= s.median && s.median <= s.q3 && s.q3 <= s.max,
        "FALSIFIED DS-001: {s:?}"
    );
}
