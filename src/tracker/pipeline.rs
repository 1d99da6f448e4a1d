//! Frame pipeline composing segmentation, rectangle placement and
//! classification.
//!
//! Typical usage:
//! ```no_run
//! use hand_boundary::image::ImageBgr8;
//! use hand_boundary::{ProximityTracker, TrackerParams};
//!
//! # fn example(frame: ImageBgr8<'_>) {
//! let tracker = ProximityTracker::new(TrackerParams::default());
//! let report = tracker.process(&frame);
//! println!("{} at {:?}", report.state, report.distance);
//! # }
//! ```
use super::params::TrackerParams;
use crate::diagnostics::{
    elapsed_ms, DetectionTrace, FrameReport, InputDescriptor, MaskStage, TimingBreakdown,
};
use crate::error::Result;
use crate::geometry::get_centered_rectangle;
use crate::image::{BgrImage, ImageBgr8};
use crate::proximity::classify_state;
use crate::segmentation::{detect_hand_in_mask, skin_mask};
use log::debug;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Stateless hand/boundary proximity tracker.
///
/// Holds only immutable parameters, so one instance can be shared across
/// threads and frames are independent of each other.
#[derive(Clone, Debug, Default)]
pub struct ProximityTracker {
    params: TrackerParams,
}

impl ProximityTracker {
    /// Build a tracker without validating `params`.
    ///
    /// Any parameter set still processes frames without panicking, but
    /// out-of-range values (even kernel sizes, inverted HSV bounds, swapped
    /// thresholds) give meaningless states. Use [`ProximityTracker::try_new`]
    /// for parameters from an untrusted source.
    pub fn new(params: TrackerParams) -> Self {
        Self { params }
    }

    /// Like [`ProximityTracker::new`] but rejects invalid parameters.
    pub fn try_new(params: TrackerParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::new(params))
    }

    pub fn params(&self) -> &TrackerParams {
        &self.params
    }

    /// Run the full pipeline on one BGR frame.
    pub fn process(&self, frame: &ImageBgr8<'_>) -> FrameReport {
        let (width, height) = (frame.width(), frame.height());
        debug!(
            "ProximityTracker::process start w={} h={} mirror={}",
            width, height, self.params.mirror
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let flipped: Option<BgrImage> = if self.params.mirror {
            Some(timings.time("mirror", || frame.mirrored()))
        } else {
            None
        };
        let view = flipped.as_ref().map_or(*frame, BgrImage::as_view);

        let rect = get_centered_rectangle(width, height, &self.params.boundary);
        let seg = &self.params.segmentation;
        let mask = timings.time("mask", || skin_mask(&view, seg));
        let mask_stage = MaskStage::from_mask(&mask);
        let detection = timings.time("contours", || detect_hand_in_mask(mask, Some(&rect), seg));

        let hand_point = detection.fingertip.or(detection.center);
        let distance = hand_point.map(|p| rect.distance_to(p));
        let state = classify_state(distance, &self.params.thresholds);
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "ProximityTracker::process done state={} distance={:?} candidates={} total_ms={:.3}",
            state,
            distance,
            detection.stats.candidates.len(),
            timings.total_ms
        );

        FrameReport {
            rect,
            center: detection.center,
            radius: detection.radius,
            fingertip: detection.fingertip,
            hand_point,
            distance,
            state,
            color: state.color(),
            trace: DetectionTrace {
                input: InputDescriptor {
                    width,
                    height,
                    mirrored: self.params.mirror,
                },
                timings,
                mask: mask_stage,
                selection: detection.stats,
            },
            mask: detection.mask,
        }
    }

    /// Process independent frames; results keep the input order.
    pub fn process_batch(&self, frames: &[ImageBgr8<'_>]) -> Vec<FrameReport> {
        #[cfg(feature = "parallel")]
        {
            frames.par_iter().map(|frame| self.process(frame)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            frames.iter().map(|frame| self.process(frame)).collect()
        }
    }
}
