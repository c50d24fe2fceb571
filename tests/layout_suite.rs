use std::collections::HashMap;
use std::path::Path;

use day_layout::{
    DayLayout, Event, LayoutConfig, Rect, RenderConfig, Theme, ValidationError, compute_day_layout,
    layout_day, layout_day_value, parse_events, render_html, render_svg,
};

fn load_fixture(rel: &str) -> serde_json::Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    parse_events(&input).expect("fixture parse failed")
}

fn layout_fixture(rel: &str) -> DayLayout {
    let events = day_layout::layout::events_from_value(&load_fixture(rel)).expect("fixture invalid");
    compute_day_layout(&events, &LayoutConfig::default()).expect("layout failed")
}

fn by_id(rects: &[Rect]) -> HashMap<i64, (f32, f32, f32, f32)> {
    rects
        .iter()
        .map(|r| (r.id, (r.top, r.left, r.width, r.height)))
        .collect()
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let fixtures = [
        "adjacent.json",
        "challenge.json",
        "empty.json",
        "full_day.json",
        "standup_week.json5",
    ];

    for rel in fixtures {
        let layout = layout_fixture(rel);
        let svg = render_svg(&layout, &Theme::classic(), &RenderConfig::default());
        assert!(svg.contains("<svg"), "{rel}: missing <svg tag");
        assert!(svg.contains("</svg>"), "{rel}: missing </svg tag");
        assert_eq!(
            render_html(&layout).matches("class=\"event\"").count(),
            layout.rects.len(),
            "{rel}: one div per event"
        );
    }
}

#[test]
fn challenge_layout_is_reproduced() {
    let layout = layout_fixture("challenge.json");
    let rects = by_id(&layout.rects);

    assert_eq!(rects[&1], (30.0, 10.0, 600.0, 120.0));
    assert_eq!(rects[&2], (540.0, 10.0, 300.0, 60.0));
    assert_eq!(rects[&3], (560.0, 310.0, 300.0, 60.0));
    assert_eq!(rects[&4], (610.0, 10.0, 300.0, 60.0));

    assert_eq!(layout.clusters.len(), 2);
    assert_eq!(layout.clusters[0].events, vec![1]);
    assert_eq!(layout.clusters[1].events, vec![2, 3, 4]);
    assert_eq!(layout.clusters[1].max_crowd_size, 2);
}

#[test]
fn late_start_is_rejected() {
    let mut errors = Vec::new();
    let rects = layout_day(
        &[Event::new(1, 700, 710)],
        &LayoutConfig::default(),
        &mut |error: &ValidationError| errors.push(error.clone()),
    );
    assert!(rects.is_empty());
    assert_eq!(
        errors,
        vec![ValidationError::InvalidStart {
            index: 0,
            found: "700".to_string()
        }]
    );
}

#[test]
fn duplicate_id_is_reported_on_second_occurrence() {
    let mut errors = Vec::new();
    let rects = layout_day(
        &[Event::new(1, 0, 30), Event::new(1, 60, 90)],
        &LayoutConfig::default(),
        &mut |error: &ValidationError| errors.push(error.clone()),
    );
    assert!(rects.is_empty());
    assert_eq!(errors, vec![ValidationError::DuplicateId { index: 1, id: 1 }]);
}

#[test]
fn full_day_event_takes_whole_board() {
    let layout = layout_fixture("full_day.json");
    assert_eq!(layout.clusters.len(), 1);
    assert_eq!(layout.clusters[0].width, 600.0);
    assert_eq!(layout.rects, vec![Rect {
        id: 1,
        top: 0.0,
        left: 10.0,
        width: 600.0,
        height: 720.0,
    }]);
}

#[test]
fn touching_events_never_collide() {
    let layout = layout_fixture("adjacent.json");
    // 1 and 2 touch at minute 60 without sharing it; minute 120 is idle.
    assert_eq!(layout.clusters.len(), 2);
    assert_eq!(layout.clusters[0].events, vec![1, 2]);
    assert_eq!(layout.clusters[1].events, vec![3]);
    for rect in &layout.rects {
        assert_eq!(rect.width, 600.0);
        assert_eq!(rect.left, 10.0);
    }
}

#[test]
fn dense_morning_uses_three_slots() {
    let layout = layout_fixture("standup_week.json5");
    let rects = by_id(&layout.rects);

    assert_eq!(layout.clusters.len(), 2);
    assert_eq!(layout.clusters[0].max_crowd_size, 3);
    assert_eq!(layout.clusters[0].width, 200.0);

    let lefts: Vec<f32> = [10, 11, 12, 13, 14, 15, 16]
        .iter()
        .map(|id| rects[id].1)
        .collect();
    assert_eq!(lefts, vec![10.0, 210.0, 410.0, 10.0, 10.0, 210.0, 10.0]);
    assert_eq!(rects[&16].2, 600.0);
}

#[test]
fn structural_errors_come_from_untyped_input() {
    let mut errors = Vec::new();
    let rects = layout_day_value(
        &serde_json::json!({ "events": [] }),
        &LayoutConfig::default(),
        &mut |error: &ValidationError| errors.push(error.clone()),
    );
    assert!(rects.is_empty());
    assert!(matches!(errors.as_slice(), [ValidationError::Structural { .. }]));
}

#[test]
fn every_defect_is_reported() {
    let value = serde_json::json!([
        { "id": 1, "start": 30, "end": 150 },
        { "id": 1, "start": 700, "end": 800 },
        { "id": -2, "start": 10, "end": 5 },
        "breakfast"
    ]);
    let mut errors = Vec::new();
    layout_day_value(&value, &LayoutConfig::default(), &mut |error: &ValidationError| {
        errors.push(error.clone())
    });
    assert_eq!(errors.len(), 6, "{errors:?}");
}

#[test]
fn board_width_and_padding_follow_config() {
    let events = parse_events(&std::fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/challenge.json"),
    )
    .unwrap())
    .unwrap();
    let config = LayoutConfig {
        board_width: 900.0,
        padding: 0.0,
    };
    let rects = layout_day_value(&events, &config, &mut day_layout::NoopReporter);
    let rects = by_id(&rects);
    assert_eq!(rects[&1].2, 900.0);
    assert_eq!(rects[&3], (560.0, 450.0, 450.0, 60.0));
}
