//! Virtual boundary rectangle and its placement in the frame.
//!
//! The rectangle has a fixed size and is centred at a fixed fraction of the
//! frame dimensions (70 % of the width, 50 % of the height by default), which
//! keeps it clear of a centrally framed face. Placement is a pure function of
//! the current frame size and is recomputed every frame.
use super::distance::point_to_rect_distance;
use crate::error::{Error, Result};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle `(x1, y1)`–`(x2, y2)` in pixel coordinates.
///
/// Corners may fall outside the frame when the frame is smaller than the
/// rectangle; all operations stay well defined in that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl VirtualRect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> i32 {
        self.y2.saturating_sub(self.y1)
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.x1 as f64 + self.x2 as f64) * 0.5,
            (self.y1 as f64 + self.y2 as f64) * 0.5,
        )
    }

    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Inclusive containment (edges count as inside).
    pub fn contains(&self, p: Point2<i32>) -> bool {
        (self.x1..=self.x2).contains(&p.x) && (self.y1..=self.y2).contains(&p.y)
    }

    /// Distance from `p` to the nearest point of the rectangle.
    pub fn distance_to(&self, p: Point2<i32>) -> f64 {
        point_to_rect_distance(
            p.x as f64,
            p.y as f64,
            self.x1 as f64,
            self.y1 as f64,
            self.x2 as f64,
            self.y2 as f64,
        )
    }
}

/// Size and anchor of the virtual boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryParams {
    /// Rectangle width in pixels (> 0).
    pub rect_width: u32,
    /// Rectangle height in pixels (> 0).
    pub rect_height: u32,
    /// Horizontal centre as a fraction of the frame width, in `[0, 1]`.
    pub center_x_frac: f64,
    /// Vertical centre as a fraction of the frame height, in `[0, 1]`.
    pub center_y_frac: f64,
}

impl Default for BoundaryParams {
    fn default() -> Self {
        Self {
            rect_width: 200,
            rect_height: 150,
            center_x_frac: 0.7,
            center_y_frac: 0.5,
        }
    }
}

impl BoundaryParams {
    pub fn validate(&self) -> Result<()> {
        if self.rect_width == 0 || self.rect_height == 0 {
            return Err(Error::invalid(format!(
                "boundary rectangle must have a positive size, got {}x{}",
                self.rect_width, self.rect_height
            )));
        }
        if self.rect_width > i32::MAX as u32 / 2 || self.rect_height > i32::MAX as u32 / 2 {
            return Err(Error::invalid("boundary rectangle is too large"));
        }
        for (name, v) in [
            ("center_x_frac", self.center_x_frac),
            ("center_y_frac", self.center_y_frac),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(Error::invalid(format!("{name} must lie in [0, 1], got {v}")));
            }
        }
        Ok(())
    }
}

/// Place the boundary rectangle for a `frame_width × frame_height` frame.
///
/// Placement runs in `i64` and the corners are clamped into `i32`, so
/// parameters that skipped [`BoundaryParams::validate`] still yield a
/// rectangle instead of overflowing.
pub fn get_centered_rectangle(
    frame_width: usize,
    frame_height: usize,
    params: &BoundaryParams,
) -> VirtualRect {
    let (x1, x2) = place_span(frame_width, params.center_x_frac, params.rect_width);
    let (y1, y2) = place_span(frame_height, params.center_y_frac, params.rect_height);
    VirtualRect { x1, y1, x2, y2 }
}

// NaN maps to 0 and infinities saturate in the float-to-int cast.
fn place_span(frame_len: usize, frac: f64, len: u32) -> (i32, i32) {
    let center = (frame_len as f64 * frac) as i64;
    let len = i64::from(len);
    let lo = center.saturating_sub(len / 2);
    let hi = lo.saturating_add(len);
    (clamp_i32(lo), clamp_i32(hi))
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vga_frame_places_rectangle_right_of_centre() {
        let rect = get_centered_rectangle(640, 480, &BoundaryParams::default());
        assert_eq!(rect.as_tuple(), (348, 165, 548, 315));
        assert_eq!(rect.center(), Point2::new(448.0, 240.0));
        assert_eq!(rect.width(), 200);
        assert_eq!(rect.height(), 150);
    }

    #[test]
    fn odd_dimensions_truncate_like_integer_division() {
        let params = BoundaryParams {
            rect_width: 51,
            rect_height: 31,
            ..Default::default()
        };
        let rect = get_centered_rectangle(333, 101, &params);
        // cx = trunc(233.1) = 233, cy = trunc(50.5) = 50
        assert_eq!(rect.as_tuple(), (208, 35, 259, 66));
        assert_eq!(rect.width(), 51);
        assert_eq!(rect.height(), 31);
    }

    #[test]
    fn tiny_frame_yields_oversized_but_ordered_rectangle() {
        let rect = get_centered_rectangle(10, 8, &BoundaryParams::default());
        assert!(rect.x1 < 0 && rect.y1 < 0);
        assert!(rect.x1 < rect.x2 && rect.y1 < rect.y2);
        assert_eq!(rect.width(), 200);
    }

    #[test]
    fn zero_sized_frame_is_well_defined() {
        let rect = get_centered_rectangle(0, 0, &BoundaryParams::default());
        assert_eq!(rect.as_tuple(), (-100, -75, 100, 75));
    }

    #[test]
    fn distance_to_matches_free_function() {
        let rect = VirtualRect::new(0, 0, 10, 10);
        assert_eq!(rect.distance_to(Point2::new(5, 5)), 0.0);
        assert_eq!(rect.distance_to(Point2::new(13, 14)), 5.0);
        assert!(rect.contains(Point2::new(10, 0)));
        assert!(!rect.contains(Point2::new(11, 0)));
    }

    #[test]
    fn extreme_fractions_fail_validation_but_never_overflow() {
        for frac in [1e12, -1e12, f64::INFINITY, f64::NAN, 1.5, -0.1] {
            let params = BoundaryParams {
                center_x_frac: frac,
                center_y_frac: frac,
                ..Default::default()
            };
            assert!(params.validate().is_err(), "frac={frac}");
            let rect = get_centered_rectangle(640, 480, &params);
            assert!(rect.x1 <= rect.x2 && rect.y1 <= rect.y2, "frac={frac}");
        }

        let far = BoundaryParams {
            center_x_frac: 1e12,
            ..Default::default()
        };
        let rect = get_centered_rectangle(640, 480, &far);
        assert_eq!(rect.x2, i32::MAX);
        assert_eq!(rect.distance_to(Point2::new(0, 240)), rect.x1 as f64);
    }

    #[test]
    fn oversized_unvalidated_rectangle_is_clamped() {
        let params = BoundaryParams {
            rect_width: u32::MAX,
            rect_height: u32::MAX,
            ..Default::default()
        };
        assert!(params.validate().is_err());
        let rect = get_centered_rectangle(640, 480, &params);
        // 448 - (2^32 - 1) / 2 still fits; the far corner saturates
        assert_eq!(rect.x1, 448 - i32::MAX);
        assert_eq!((rect.x2, rect.y2), (i32::MAX, i32::MAX));
        assert_eq!(rect.width(), i32::MAX);
        assert_eq!(rect.height(), i32::MAX);
        assert!(rect.contains(Point2::new(320, 240)));
    }

    #[test]
    fn boundary_fractions_are_accepted() {
        for frac in [0.0, 1.0] {
            let params = BoundaryParams {
                center_x_frac: frac,
                center_y_frac: frac,
                ..Default::default()
            };
            assert!(params.validate().is_ok());
        }
    }

    #[test]
    fn validation_rejects_empty_rectangle() {
        let params = BoundaryParams {
            rect_width: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
        assert!(BoundaryParams::default().validate().is_ok());
    }
}
