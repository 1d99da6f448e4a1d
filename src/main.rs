use hand_boundary::image::BgrImage;
use hand_boundary::{ProximityTracker, TrackerParams};

fn main() {
    // Demo stub: paints a skin-coloured square next to the boundary and runs the tracker
    let (w, h) = (640usize, 480usize);
    let mut frame = BgrImage::filled(w, h, [40, 40, 40]);
    for y in 150..230 {
        for x in 220..300 {
            frame.set(x, y, [120, 160, 220]);
        }
    }

    let tracker = ProximityTracker::new(TrackerParams::default());
    let report = tracker.process(&frame.as_view());
    println!(
        "state={} distance={:?} latency_ms={:.3}",
        report.state, report.distance, report.trace.timings.total_ms
    );
}
