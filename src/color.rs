//! BGR → HSV conversion and inclusive HSV range thresholding.
//!
//! Uses the 8-bit conventions common to camera pipelines:
//! - `V = max(b, g, r)`
//! - `S = round(255 · (V − min) / V)`, `0` when `V == 0`
//! - `H = round(hue_deg / 2)` in `[0, 180)`, `0` for grey pixels
//!
//! Rounding is half-up (`floor(x + 0.5)`), so a hue of −0.5 maps to 0 rather
//! than wrapping to 179.
use crate::image::{ImageBgr8, ImageViewMut, Mask};
use serde::{Deserialize, Serialize};

/// One HSV pixel, each channel 8-bit (`h` in `[0, 180)`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl From<[u8; 3]> for Hsv {
    fn from(c: [u8; 3]) -> Self {
        Self {
            h: c[0],
            s: c[1],
            v: c[2],
        }
    }
}

#[inline]
fn round_half_up(x: f32) -> i32 {
    (x + 0.5).floor() as i32
}

/// Convert a single BGR pixel to HSV.
#[inline]
pub fn bgr_to_hsv(bgr: [u8; 3]) -> Hsv {
    let b = bgr[0] as i32;
    let g = bgr[1] as i32;
    let r = bgr[2] as i32;
    let v = b.max(g).max(r);
    let min = b.min(g).min(r);
    let diff = v - min;

    let s = if v == 0 {
        0
    } else {
        round_half_up(255.0 * diff as f32 / v as f32)
    };

    let h = if diff == 0 {
        0
    } else {
        // sector offsets in units of 60 degrees
        let sextant = if v == r {
            (g - b) as f32 / diff as f32
        } else if v == g {
            2.0 + (b - r) as f32 / diff as f32
        } else {
            4.0 + (r - g) as f32 / diff as f32
        };
        let h = round_half_up(sextant * 30.0);
        if h < 0 {
            h + 180
        } else {
            h
        }
    };

    Hsv {
        h: h as u8,
        s: s as u8,
        v: v as u8,
    }
}

/// Inclusive per-channel HSV bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl Default for HsvRange {
    fn default() -> Self {
        Self::SKIN
    }
}

impl HsvRange {
    /// Approximate skin tone band.
    pub const SKIN: HsvRange = HsvRange {
        lower: [0, 48, 80],
        upper: [20, 255, 255],
    };

    #[inline]
    pub fn contains(&self, hsv: Hsv) -> bool {
        let px = [hsv.h, hsv.s, hsv.v];
        (0..3).all(|c| self.lower[c] <= px[c] && px[c] <= self.upper[c])
    }

    /// True when every lower bound is at most the matching upper bound.
    pub fn is_ordered(&self) -> bool {
        (0..3).all(|c| self.lower[c] <= self.upper[c])
    }
}

/// Threshold a BGR frame in HSV space into a fresh binary mask.
pub fn hsv_in_range(frame: &ImageBgr8<'_>, range: &HsvRange) -> Mask {
    let mut mask = Mask::new(frame.w, frame.h);
    for y in 0..frame.h {
        let src = frame.row(y);
        let dst = mask.row_mut(y);
        for (out, px) in dst.iter_mut().zip(src.chunks_exact(3)) {
            if range.contains(bgr_to_hsv([px[0], px[1], px[2]])) {
                *out = Mask::ON;
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::BgrImage;

    #[test]
    fn primary_colours() {
        assert_eq!(bgr_to_hsv([0, 0, 255]), Hsv { h: 0, s: 255, v: 255 });
        assert_eq!(bgr_to_hsv([0, 255, 0]), Hsv { h: 60, s: 255, v: 255 });
        assert_eq!(bgr_to_hsv([255, 0, 0]), Hsv { h: 120, s: 255, v: 255 });
        assert_eq!(bgr_to_hsv([0, 255, 255]), Hsv { h: 30, s: 255, v: 255 });
    }

    #[test]
    fn grey_and_black_have_no_hue_or_saturation() {
        assert_eq!(bgr_to_hsv([0, 0, 0]), Hsv { h: 0, s: 0, v: 0 });
        assert_eq!(bgr_to_hsv([128, 128, 128]), Hsv { h: 0, s: 0, v: 128 });
    }

    #[test]
    fn negative_hue_wraps() {
        // magenta-ish red: r max, b > g
        let hsv = bgr_to_hsv([100, 0, 255]);
        assert!(hsv.h > 150, "h={}", hsv.h);
        assert_eq!(hsv.s, 255);
    }

    #[test]
    fn typical_skin_tone_is_in_default_range() {
        // BGR (120, 160, 220): r max, hue ~ 12 deg -> 12 in 8-bit units
        let hsv = bgr_to_hsv([120, 160, 220]);
        assert_eq!(hsv.v, 220);
        assert_eq!(hsv.s, 116);
        assert_eq!(hsv.h, 12);
        assert!(HsvRange::SKIN.contains(hsv));
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = HsvRange {
            lower: [10, 50, 50],
            upper: [20, 60, 60],
        };
        assert!(range.contains(Hsv { h: 10, s: 50, v: 50 }));
        assert!(range.contains(Hsv { h: 20, s: 60, v: 60 }));
        assert!(!range.contains(Hsv { h: 21, s: 60, v: 60 }));
        assert!(!range.contains(Hsv { h: 9, s: 55, v: 55 }));
    }

    #[test]
    fn threshold_marks_only_skin_pixels() {
        let mut frame = BgrImage::filled(4, 2, [255, 0, 0]);
        frame.set(1, 0, [120, 160, 220]);
        frame.set(3, 1, [120, 160, 220]);
        let mask = hsv_in_range(&frame.as_view(), &HsvRange::SKIN);
        assert_eq!(mask.count_set(), 2);
        assert!(mask.is_set(1, 0));
        assert!(mask.is_set(3, 1));
    }
}
