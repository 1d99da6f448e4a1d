use super::mask::MaskStage;
use super::timing::TimingBreakdown;
use crate::geometry::VirtualRect;
use crate::image::Mask;
use crate::proximity::{Bgr, ProximityState};
use crate::segmentation::SelectionStats;
use nalgebra::Point2;
use serde::Serialize;

/// Everything the rendering side needs for one processed frame.
///
/// Returned by [`ProximityTracker::process`](crate::ProximityTracker::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub rect: VirtualRect,
    pub center: Option<Point2<i32>>,
    pub radius: i32,
    pub fingertip: Option<Point2<i32>>,
    /// Point measured against the rectangle: fingertip, else centre.
    pub hand_point: Option<Point2<i32>>,
    pub distance: Option<f64>,
    pub state: ProximityState,
    pub color: Bgr,
    pub trace: DetectionTrace,
    /// Cleaned skin mask, same size as the input frame.
    #[serde(skip)]
    pub mask: Mask,
}

impl FrameReport {
    pub fn label(&self) -> &'static str {
        self.state.label()
    }

    pub fn hand_found(&self) -> bool {
        self.state != ProximityState::NoHand
    }
}

/// Stage-level trace of one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub mask: MaskStage,
    pub selection: SelectionStats,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub mirrored: bool,
}
