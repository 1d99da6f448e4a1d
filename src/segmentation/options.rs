use crate::color::HsvRange;
use crate::error::{Error, Result};
use crate::morphology::RectKernel;
use serde::{Deserialize, Serialize};

/// Knobs of the skin segmentation and candidate filtering stages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationParams {
    /// Inclusive lower HSV bound (H in [0, 180), S and V in [0, 255]).
    pub lower_hsv: [u8; 3],
    /// Inclusive upper HSV bound.
    pub upper_hsv: [u8; 3],
    /// Side of the square structuring element (odd).
    pub kernel_size: usize,
    pub erode_iterations: usize,
    pub dilate_iterations: usize,
    /// Contours enclosing less area than this (px²) are noise.
    pub min_contour_area: f64,
    /// Enclosing circles smaller than this radius (px) are dropped.
    pub min_radius: f64,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self {
            lower_hsv: HsvRange::SKIN.lower,
            upper_hsv: HsvRange::SKIN.upper,
            kernel_size: 5,
            erode_iterations: 1,
            dilate_iterations: 2,
            min_contour_area: 800.0,
            min_radius: 5.0,
        }
    }
}

impl SegmentationParams {
    pub fn hsv_range(&self) -> HsvRange {
        HsvRange {
            lower: self.lower_hsv,
            upper: self.upper_hsv,
        }
    }

    pub fn kernel(&self) -> RectKernel {
        RectKernel::square(self.kernel_size)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.hsv_range().is_ordered() {
            return Err(Error::invalid(format!(
                "lower_hsv {:?} exceeds upper_hsv {:?}",
                self.lower_hsv, self.upper_hsv
            )));
        }
        if self.kernel_size == 0 || self.kernel_size % 2 == 0 {
            return Err(Error::invalid(format!(
                "kernel_size must be a positive odd number, got {}",
                self.kernel_size
            )));
        }
        if !self.min_contour_area.is_finite() || self.min_contour_area < 0.0 {
            return Err(Error::invalid("min_contour_area must be a finite, non-negative area"));
        }
        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return Err(Error::invalid("min_radius must be a finite, non-negative radius"));
        }
        Ok(())
    }
}
