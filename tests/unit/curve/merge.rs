use super::*;
use crate::curve::path::to_polyline;

#[test]
fn first_point_is_the_join_for_many_parameters() {
    let joins = [
        Point::new(252.0, 1800.0),
        Point::new(13.37, 42.5),
        Point::new(-4.0, 3390.0),
    ];
    let specs = [
        MergeSpec::default(),
        MergeSpec {
            phase: 0.3,
            taper: Taper::Constant,
            amp_ramp: Ramp::Linear,
            ..MergeSpec::default()
        },
        MergeSpec {
            steps: 5,
            tension: 1.0,
            amplitude_base: 400.0,
            ..MergeSpec::default()
        },
    ];
    for join in joins {
        for spec in &specs {
            let merge = build_merge(join, 3400.0, 252.0, spec).unwrap();
            assert_eq!(merge.join, join);
            assert_eq!(merge.descriptor.start_point(), join);
        }
    }
}

#[test]
fn sample_count_respects_minimum() {
    let merge = build_merge(
        Point::new(0.0, 0.0),
        1000.0,
        0.0,
        &MergeSpec {
            steps: 10,
            ..MergeSpec::default()
        },
    )
    .unwrap();
    assert_eq!(merge.descriptor.segment_count(), MIN_MERGE_SAMPLES as usize);

    let merge = build_merge(Point::new(0.0, 0.0), 1000.0, 0.0, &MergeSpec::default()).unwrap();
    assert_eq!(merge.descriptor.segment_count(), 180);
}

#[test]
fn ends_above_bottom_margin() {
    let merge = build_merge(Point::new(252.0, 1800.0), 3400.0, 252.0, &MergeSpec::default())
        .unwrap();
    let end = merge.descriptor.terminal_point();
    assert!((end.y - 3380.0).abs() < 1e-9);
}

#[test]
fn span_never_collapses_below_one_unit() {
    let merge = build_merge(Point::new(10.0, 500.0), 100.0, 10.0, &MergeSpec::default())
        .unwrap();
    let end = merge.descriptor.terminal_point();
    assert!((end.y - 501.0).abs() < 1e-9);
}

#[test]
fn wave_grows_away_from_join() {
    let spec = MergeSpec {
        taper: Taper::Up,
        amp_ramp: Ramp::Linear,
        ..MergeSpec::default()
    };
    let merge = build_merge(Point::new(252.0, 0.0), 2020.0, 252.0, &spec).unwrap();
    let PathDescriptor::Spline { segments, .. } = &merge.descriptor else {
        panic!("expected spline");
    };
    let early = segments[..20]
        .iter()
        .map(|s| (s.to.x - 252.0).abs())
        .fold(0.0, f64::max);
    let late = segments[segments.len() - 20..]
        .iter()
        .map(|s| (s.to.x - 252.0).abs())
        .fold(0.0, f64::max);
    assert!(early < late);
}

#[test]
fn rejects_non_finite_join_and_bad_tension() {
    assert!(build_merge(Point::new(f64::NAN, 0.0), 10.0, 0.0, &MergeSpec::default()).is_err());
    let spec = MergeSpec {
        tension: 2.0,
        ..MergeSpec::default()
    };
    assert!(build_merge(Point::new(0.0, 0.0), 10.0, 0.0, &spec).is_err());
}

#[test]
fn rejects_oversized_step_count() {
    let spec = MergeSpec {
        steps: u32::MAX,
        ..MergeSpec::default()
    };
    assert!(spec.validate().is_err());
    assert!(build_merge(Point::new(0.0, 0.0), 10.0, 0.0, &spec).is_err());
    let spec = MergeSpec {
        steps: crate::curve::sampler::MAX_SAMPLES,
        ..MergeSpec::default()
    };
    assert!(spec.validate().is_ok());
}

#[test]
fn deferred_until_base_exists() {
    let spec = MergeSpec::default();
    assert!(build_merge_after(None, 3400.0, 252.0, &spec).unwrap().is_none());

    let base = to_polyline(&[Point::new(252.0, 0.0), Point::new(260.0, 1800.0)]).unwrap();
    let merge = build_merge_after(Some(&base), 3400.0, 252.0, &spec)
        .unwrap()
        .unwrap();
    assert_eq!(merge.join, Point::new(260.0, 1800.0));
}
