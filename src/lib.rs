#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod proximity;
pub mod tracker;

// Building blocks – public so tools can run stages on their own.
pub mod color;
pub mod contours;
pub mod geometry;
pub mod morphology;
pub mod segmentation;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracker + results.
pub use crate::diagnostics::{DetectionTrace, FrameReport};
pub use crate::error::{Error, Result};
pub use crate::proximity::{classify_state, ProximityState, ProximityThresholds};
pub use crate::tracker::{ProximityTracker, TrackerParams};

// Geometry helpers that are useful on their own.
pub use crate::geometry::{get_centered_rectangle, point_to_rect_distance, VirtualRect};
pub use crate::segmentation::{detect_hand, HandDetection, SegmentationParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hand_boundary::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let bgr = vec![0u8; w * h * 3];
/// let frame = ImageBgr8::from_raw(w, h, &bgr).unwrap();
///
/// let tracker = ProximityTracker::new(TrackerParams {
///     mirror: true,
///     ..Default::default()
/// });
///
/// let report = tracker.process(&frame);
/// println!("{} latency_ms={:.3}", report.state, report.trace.timings.total_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{BgrImage, ImageBgr8};
    pub use crate::{FrameReport, ProximityState, ProximityTracker, TrackerParams};
}
