mod common;

use common::init_logger;
use common::synthetic_frame::{blank_frame, paint_disc, paint_rect, vga_with_square};
use hand_boundary::image::ImageBgr8;
use hand_boundary::{ProximityState, ProximityTracker, TrackerParams};
use nalgebra::Point2;

// Default boundary on a 640×480 frame is (348, 165)–(548, 315).

#[test]
fn far_hand_is_safe() {
    init_logger();
    let frame = vga_with_square(100, 200, 60);
    let report = ProximityTracker::default().process(&frame.as_view());

    assert_eq!(report.fingertip, Some(Point2::new(98, 198)));
    assert_eq!(report.distance, Some(250.0));
    assert_eq!(report.state, ProximityState::Safe);
    assert!(report.hand_found());
    assert_eq!(report.color, [0, 255, 0]);
}

#[test]
fn approaching_hand_is_warning_then_danger() {
    init_logger();
    let tracker = ProximityTracker::default();

    let warning = tracker.process(&vga_with_square(250, 200, 60).as_view());
    assert_eq!(warning.distance, Some(100.0));
    assert_eq!(warning.state, ProximityState::Warning);
    assert_eq!(warning.label(), "WARNING");

    let danger = tracker.process(&vga_with_square(300, 200, 60).as_view());
    assert_eq!(danger.distance, Some(50.0));
    assert_eq!(danger.state, ProximityState::Danger);
    assert_eq!(danger.color, [0, 0, 255]);
}

#[test]
fn fingertip_inside_rectangle_is_danger_at_zero() {
    init_logger();
    let frame = vga_with_square(400, 200, 60);
    let report = ProximityTracker::default().process(&frame.as_view());
    assert_eq!(report.distance, Some(0.0));
    assert_eq!(report.state, ProximityState::Danger);
}

#[test]
fn small_blob_is_ignored() {
    init_logger();
    // 24×24 after cleanup: contour area 23² < 800
    let frame = vga_with_square(100, 100, 20);
    let report = ProximityTracker::default().process(&frame.as_view());
    assert_eq!(report.state, ProximityState::NoHand);
    assert!(!report.hand_found());
    assert_eq!(report.center, None);
    assert_eq!(report.radius, 0);
    assert_eq!(report.trace.selection.rejected_area, 1);
    assert!(report.mask.count_set() > 0);
}

#[test]
fn blob_near_the_rectangle_beats_a_larger_one() {
    init_logger();
    let mut frame = blank_frame(640, 480);
    paint_rect(&mut frame, 20, 20, 120, 120);
    paint_rect(&mut frame, 260, 200, 40, 40);

    let report = ProximityTracker::default().process(&frame.as_view());
    assert_eq!(report.trace.selection.candidates.len(), 2);
    assert_eq!(report.fingertip, Some(Point2::new(258, 198)));
    assert_eq!(report.distance, Some(90.0));
    assert_eq!(report.state, ProximityState::Warning);
}

#[test]
fn disc_hand_reports_circle_and_topmost_point() {
    init_logger();
    let mut frame = blank_frame(640, 480);
    paint_disc(&mut frame, 200, 240, 30);
    let report = ProximityTracker::default().process(&frame.as_view());

    let center = report.center.expect("disc is a candidate");
    assert!((center.x - 200).abs() <= 1 && (center.y - 240).abs() <= 1);
    assert!((31..=33).contains(&report.radius), "radius={}", report.radius);
    let tip = report.fingertip.expect("fingertip");
    assert_eq!(tip, Point2::new(191, 209));
    assert_eq!(report.hand_point, Some(tip));
}

#[test]
fn mirroring_moves_the_hand_to_the_other_side() {
    init_logger();
    let frame = vga_with_square(560, 200, 40);

    let plain = ProximityTracker::default().process(&frame.as_view());
    assert_eq!(plain.fingertip, Some(Point2::new(558, 198)));
    assert_eq!(plain.state, ProximityState::Danger);

    let mirrored = ProximityTracker::new(TrackerParams {
        mirror: true,
        ..Default::default()
    })
    .process(&frame.as_view());
    assert_eq!(mirrored.fingertip, Some(Point2::new(38, 198)));
    assert_eq!(mirrored.state, ProximityState::Safe);
    assert_eq!(mirrored.rect, plain.rect);
}

#[test]
fn batch_matches_sequential_processing() {
    init_logger();
    let frames = [
        vga_with_square(100, 200, 60),
        vga_with_square(250, 200, 60),
        vga_with_square(300, 200, 60),
        blank_frame(640, 480),
    ];
    let views: Vec<ImageBgr8<'_>> = frames.iter().map(|f| f.as_view()).collect();
    let tracker = ProximityTracker::default();

    let batch = tracker.process_batch(&views);
    assert_eq!(batch.len(), frames.len());
    for (view, report) in views.iter().zip(&batch) {
        let single = tracker.process(view);
        assert_eq!(single.state, report.state);
        assert_eq!(single.distance, report.distance);
        assert_eq!(single.fingertip, report.fingertip);
    }
    let states: Vec<_> = batch.iter().map(|r| r.state).collect();
    assert_eq!(
        states,
        [
            ProximityState::Safe,
            ProximityState::Warning,
            ProximityState::Danger,
            ProximityState::NoHand
        ]
    );
}

#[test]
fn report_serializes_to_camel_case_json() {
    init_logger();
    let frame = vga_with_square(300, 200, 60);
    let report = ProximityTracker::default().process(&frame.as_view());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["state"], "DANGER");
    assert_eq!(json["handPoint"], serde_json::json!([298, 198]));
    assert_eq!(json["rect"]["x1"], 348);
    assert!(json.get("mask").is_none());
    assert_eq!(json["trace"]["input"]["width"], 640);
    assert!(json["trace"]["timings"]["stages"].is_array());
}
