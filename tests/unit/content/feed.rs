use super::*;

fn event(id: &str, title: &str, lane: Lane, position: f64) -> ContentEvent {
    ContentEvent {
        id: id.to_string(),
        title: title.to_string(),
        date: String::new(),
        description: String::new(),
        image: None,
        lane,
        side: Side::Left,
        position,
        anchor: false,
    }
}

#[test]
fn anchor_prefers_explicit_flag() {
    let mut flagged = event("e3", "Proposal", Lane::Merge, 0.82);
    flagged.anchor = true;
    let feed = ContentFeed::new(vec![
        event("e1", "Childhood", Lane::Primary, 0.08),
        event("e2", "First date", Lane::Merge, 0.62),
        flagged,
    ])
    .unwrap();
    assert_eq!(feed.anchor_event().unwrap().id, "e3");
    assert_eq!(feed.fallback_breakpoint(DEFAULT_FALLBACK_BREAKPOINT), 0.82);
}

#[test]
fn anchor_falls_back_to_first_date_title() {
    let feed = ContentFeed::new(vec![
        event("e1", "Childhood", Lane::Primary, 0.08),
        event("e7", "First Date (we finally meet)", Lane::Merge, 0.62),
    ])
    .unwrap();
    assert_eq!(feed.anchor_event().unwrap().id, "e7");
    assert_eq!(feed.fallback_breakpoint(0.5), 0.62);
}

#[test]
fn missing_anchor_uses_default() {
    let feed = ContentFeed::new(vec![event("e1", "Childhood", Lane::Primary, 0.08)]).unwrap();
    assert!(feed.anchor_event().is_none());
    assert_eq!(
        feed.fallback_breakpoint(DEFAULT_FALLBACK_BREAKPOINT),
        DEFAULT_FALLBACK_BREAKPOINT
    );
}

#[test]
fn validate_rejects_duplicates_and_bad_positions() {
    assert!(
        ContentFeed::new(vec![
            event("e1", "a", Lane::Primary, 0.1),
            event("e1", "b", Lane::Secondary, 0.2),
        ])
        .is_err()
    );
    assert!(ContentFeed::new(vec![event("e1", "a", Lane::Primary, 1.2)]).is_err());
    assert!(ContentFeed::new(vec![event("", "a", Lane::Primary, 0.2)]).is_err());
}

#[test]
fn lead_spacing_has_floor() {
    assert_eq!(lead_spacing_vh(0.0), 10);
    assert_eq!(lead_spacing_vh(0.08), 10);
    assert_eq!(lead_spacing_vh(0.18), 22);
    assert_eq!(lead_spacing_vh(0.62), 74);
    assert_eq!(event("x", "y", Lane::Merge, 0.82).lead_spacing_vh(), 98);
}

#[test]
fn json_feed_parses_with_defaults() {
    let feed = ContentFeed::from_json_str(
        r#"[
            {"id": "e1", "title": "Childhood", "lane": "primary", "position": 0.08},
            {"id": "e2", "title": "Grad school", "lane": "secondary", "side": "right", "position": 0.18},
            {"id": "e7", "title": "Meet", "lane": "merge", "side": "center", "position": 0.62, "anchor": true}
        ]"#,
    )
    .unwrap();
    assert_eq!(feed.events.len(), 3);
    assert_eq!(feed.events[1].side, Side::Right);
    assert_eq!(feed.in_lane(Lane::Merge).count(), 1);
    assert_eq!(feed.fallback_breakpoint(0.0), 0.62);
}
