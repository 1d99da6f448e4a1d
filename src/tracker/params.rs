//! Parameters for the frame pipeline.
//!
//! All groups deserialize with `#[serde(default)]`, so a partial JSON object
//! only overrides the fields it names.
use crate::error::Result;
use crate::geometry::BoundaryParams;
use crate::proximity::ProximityThresholds;
use crate::segmentation::SegmentationParams;
use serde::{Deserialize, Serialize};

/// Tracker-wide parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerParams {
    /// Skin threshold, mask cleanup and contour filters.
    pub segmentation: SegmentationParams,
    /// Size and anchor of the virtual rectangle.
    pub boundary: BoundaryParams,
    /// Distance bands for the proximity state.
    pub thresholds: ProximityThresholds,
    /// Flip each frame horizontally before processing (selfie view).
    pub mirror: bool,
}

impl TrackerParams {
    pub fn validate(&self) -> Result<()> {
        self.segmentation.validate()?;
        self.boundary.validate()?;
        self.thresholds.validate()
    }
}
