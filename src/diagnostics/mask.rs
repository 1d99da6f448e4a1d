use crate::image::{ImageView, Mask};
use serde::{Deserialize, Serialize};

/// Coverage statistics of the cleaned skin mask.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskStage {
    pub width: usize,
    pub height: usize,
    pub skin_pixels: usize,
    /// Fraction of the frame classified as skin, in `[0, 1]`.
    pub coverage: f32,
}

impl MaskStage {
    pub fn from_mask(mask: &Mask) -> Self {
        let skin_pixels = match mask.as_slice() {
            Some(slice) => slice.iter().filter(|&&v| v != 0).count(),
            None => mask
                .rows()
                .map(|r| r.iter().filter(|&&v| v != 0).count())
                .sum(),
        };
        let denom = (mask.w * mask.h).max(1) as f32;
        Self {
            width: mask.w,
            height: mask.h,
            skin_pixels,
            coverage: skin_pixels as f32 / denom,
        }
    }
}
