use super::*;

#[test]
fn defaults_validate_and_match_page_layout() {
    let cfg = SceneConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas.total_height(), 3400.0);
    assert!((cfg.center_x() - 252.0).abs() < 1e-9);
    assert_eq!(cfg.fallback_breakpoint, 0.62);
}

#[test]
fn empty_json_yields_defaults() {
    let cfg = SceneConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, SceneConfig::default());
}

#[test]
fn partial_json_overrides_selected_fields() {
    let cfg = SceneConfig::from_json_str(
        r##"{
            "canvas": { "width": 1200 },
            "colors": { "merge": "#112233" },
            "primary": { "amplitude": 90, "taper": "down" },
            "timeline": { "merge_end": 0.98 }
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.canvas.width, 1200.0);
    assert_eq!(cfg.canvas.meet_y, 1800.0);
    assert_eq!(cfg.colors.merge, Rgba8::rgb(0x11, 0x22, 0x33));
    assert_eq!(cfg.primary.amplitude, 90.0);
    assert_eq!(cfg.primary.taper, Taper::Down);
    assert_eq!(cfg.primary.sample_count, 40);
    assert_eq!(cfg.timeline.merge_end, 0.98);
    assert_eq!(cfg.timeline.content_fade_end, 0.1);
}

#[test]
fn invalid_json_values_are_rejected() {
    assert!(SceneConfig::from_json_str(r#"{"primary": {"sample_count": 1}}"#).is_err());
    assert!(SceneConfig::from_json_str(r#"{"canvas": {"width": 0}}"#).is_err());
    assert!(SceneConfig::from_json_str(r#"{"center_x_pct": 1.5}"#).is_err());
    assert!(SceneConfig::from_json_str(r#"{"colors": {"grid": "grey"}}"#).is_err());
    assert!(SceneConfig::from_json_str("not json").is_err());
}

#[test]
fn oversized_sample_counts_are_rejected() {
    assert!(SceneConfig::from_json_str(r#"{"merge": {"steps": 4294967295}}"#).is_err());
    assert!(SceneConfig::from_json_str(r#"{"primary": {"sample_count": 4294967295}}"#).is_err());
    assert!(SceneConfig::from_json_str(r#"{"secondary": {"sample_count": 70000}}"#).is_err());
}

#[test]
fn json_round_trip_preserves_config() {
    let cfg = SceneConfig::default();
    let s = cfg.to_json_pretty().unwrap();
    assert_eq!(SceneConfig::from_json_str(&s).unwrap(), cfg);
}

#[test]
fn compact_class_scales_amplitudes() {
    let cfg = SceneConfig::default();
    let regular = cfg
        .curve_spec(BaseCurve::Secondary, ViewportClass::Regular)
        .unwrap();
    let compact = cfg
        .curve_spec(BaseCurve::Secondary, ViewportClass::Compact)
        .unwrap();
    assert_eq!(regular.amplitude(), 150.0);
    assert!((compact.amplitude() - 90.0).abs() < 1e-9);
    assert_eq!(compact.height(), 1800.0);
    assert!((cfg.merge_spec(ViewportClass::Compact).amplitude_base - 66.0).abs() < 1e-9);
}
