use super::*;

fn geom(container_top: f64, scrollable_height: f64, anchor_top: f64) -> StaticProbe {
    StaticProbe(Some(AnchorGeometry {
        container_top,
        scrollable_height,
        anchor_top,
    }))
}

#[test]
fn measure_normalizes_and_clamps() {
    assert_eq!(measure_breakpoint(100.0, 1000.0, 600.0), Some(0.5));
    assert_eq!(measure_breakpoint(100.0, 1000.0, 50.0), Some(0.0));
    assert_eq!(measure_breakpoint(0.0, 1000.0, 5000.0), Some(MAX_BREAKPOINT));
}

#[test]
fn measure_skips_unlaid_out_container() {
    assert_eq!(measure_breakpoint(0.0, 0.0, 500.0), None);
    assert_eq!(measure_breakpoint(0.0, -20.0, 500.0), None);
    assert_eq!(measure_breakpoint(0.0, f64::NAN, 500.0), None);
    assert_eq!(measure_breakpoint(f64::INFINITY, 100.0, 500.0), None);
}

#[test]
fn measure_stays_in_range_for_tiny_heights() {
    for h in [f64::MIN_POSITIVE, 1e-300, 1e-9, 1e-3] {
        for delta in [-1e6, -1.0, 0.0, 1.0, 1e6] {
            if let Some(b) = measure_breakpoint(0.0, h, delta) {
                assert!((0.0..=MAX_BREAKPOINT).contains(&b));
            }
        }
    }
}

#[test]
fn measure_is_idempotent() {
    let a = measure_breakpoint(37.5, 2911.0, 1804.25);
    let b = measure_breakpoint(37.5, 2911.0, 1804.25);
    assert_eq!(a, b);
}

#[test]
fn tracker_uses_fallback_until_layout_is_measurable() {
    let mut tracker = BreakpointTracker::new(0.62);
    assert!(!tracker.remeasure(LayoutTrigger::Mount, &geom(0.0, 0.0, 500.0)));
    assert_eq!(tracker.current(), 0.62);
    assert!(!tracker.is_measured());

    assert!(!tracker.remeasure(LayoutTrigger::Mount, &StaticProbe(None)));
    assert_eq!(tracker.current(), 0.62);

    assert!(tracker.remeasure(LayoutTrigger::AssetLoaded, &geom(200.0, 1000.0, 700.0)));
    assert_eq!(tracker.current(), 0.5);
    assert!(tracker.is_measured());
}

#[test]
fn tracker_remeasure_is_idempotent_and_last_write_wins() {
    let mut tracker = BreakpointTracker::new(0.62);
    assert!(tracker.remeasure(LayoutTrigger::Mount, &geom(0.0, 1000.0, 400.0)));
    assert!(!tracker.remeasure(LayoutTrigger::Resize, &geom(0.0, 1000.0, 400.0)));
    assert_eq!(tracker.current(), 0.4);

    assert!(tracker.remeasure(LayoutTrigger::Resize, &geom(0.0, 1000.0, 700.0)));
    assert_eq!(tracker.current(), 0.7);
}

#[test]
fn tracker_clamps_fallback() {
    assert_eq!(BreakpointTracker::new(1.4).current(), MAX_BREAKPOINT);
    assert_eq!(BreakpointTracker::new(-0.2).current(), 0.0);
    assert_eq!(BreakpointTracker::new(f64::NAN).current(), 0.0);
}

#[test]
fn closures_act_as_probes() {
    let probe = || {
        Some(AnchorGeometry {
            container_top: 0.0,
            scrollable_height: 800.0,
            anchor_top: 200.0,
        })
    };
    let mut tracker = BreakpointTracker::new(0.62);
    assert!(tracker.remeasure(LayoutTrigger::Mount, &probe));
    assert_eq!(tracker.current(), 0.25);
}
