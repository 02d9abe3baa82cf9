use super::*;

#[test]
fn sample_interpolates_between_stops() {
    let m = PiecewiseLinear::new(vec![0.0, 0.1, 1.0], vec![0.0, 1.0, 1.0]).unwrap();
    assert!((m.sample(0.05) - 0.5).abs() < 1e-12);
    assert_eq!(m.sample(0.5), 1.0);
}

#[test]
fn sample_clamps_outside_domain() {
    let m = PiecewiseLinear::linear((0.2, 0.6), (0.0, 1.0)).unwrap();
    assert_eq!(m.sample(-3.0), 0.0);
    assert_eq!(m.sample(0.2), 0.0);
    assert_eq!(m.sample(0.6), 1.0);
    assert_eq!(m.sample(9.0), 1.0);
}

#[test]
fn zero_width_segment_steps() {
    let m = PiecewiseLinear::linear((0.5, 0.5), (0.0, 1.0)).unwrap();
    assert_eq!(m.sample(0.49), 0.0);
    assert_eq!(m.sample(0.5), 1.0);
}

#[test]
fn single_stop_is_constant() {
    let m = PiecewiseLinear::new(vec![0.3], vec![0.7]).unwrap();
    assert_eq!(m.sample(0.0), 0.7);
    assert_eq!(m.sample(1.0), 0.7);
}

#[test]
fn validate_rejects_bad_stops() {
    assert!(PiecewiseLinear::new(vec![], vec![]).is_err());
    assert!(PiecewiseLinear::new(vec![0.0, 1.0], vec![0.0]).is_err());
    assert!(PiecewiseLinear::new(vec![1.0, 0.0], vec![0.0, 1.0]).is_err());
    assert!(PiecewiseLinear::new(vec![0.0, f64::NAN], vec![0.0, 1.0]).is_err());
}

#[test]
fn deserialize_runs_validation() {
    assert!(serde_json::from_str::<PiecewiseLinear>(r#"{"domain":[],"codomain":[]}"#).is_err());
    assert!(
        serde_json::from_str::<PiecewiseLinear>(r#"{"domain":[0,1],"codomain":[0]}"#).is_err()
    );
    assert!(
        serde_json::from_str::<PiecewiseLinear>(r#"{"domain":[1,0],"codomain":[0,1]}"#).is_err()
    );

    let m: PiecewiseLinear =
        serde_json::from_str(r#"{"domain":[0,0.1,1],"codomain":[0,1,1]}"#).unwrap();
    assert!((m.sample(0.05) - 0.5).abs() < 1e-12);
}
