//! External contour extraction from binary masks.
//!
//! Overview
//! - Labels 8-connected foreground regions in raster order.
//! - Floods the background reachable from the image border (4-connected) to
//!   find which regions are external; regions sitting inside a hole of
//!   another region are skipped, holes themselves are never reported.
//! - Traces the outer border of each external region into an ordered
//!   polygon of pixel centres.
//!
//! The polygon area (shoelace) of a traced border is the "enclosed area" of a
//! region: a filled `w × h` rectangle has area `(w − 1)(h − 1)`.

mod components;
mod trace;

use crate::geometry::polygon_area;
use crate::image::Mask;
use nalgebra::Point2;

/// Outer border of one external mask region.
#[derive(Clone, Debug)]
pub struct Contour {
    /// Border pixels in tracing order, starting at the topmost-leftmost one.
    pub points: Vec<Point2<i32>>,
    /// Number of mask pixels in the region (holes excluded).
    pub pixel_count: usize,
}

impl Contour {
    /// Area enclosed by the border polygon.
    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }

    /// Topmost border point; ties resolve to the leftmost.
    pub fn topmost(&self) -> Option<Point2<i32>> {
        self.points.iter().copied().min_by_key(|p| (p.y, p.x))
    }
}

/// Find the outer borders of all external 8-connected regions in `mask`,
/// ordered by the raster position of each region's first pixel.
pub fn find_external_contours(mask: &Mask) -> Vec<Contour> {
    let labeling = components::label_components(mask);
    labeling
        .components
        .iter()
        .filter(|c| c.external)
        .map(|c| Contour {
            points: trace::trace_outer_border(&labeling, c.label, c.start),
            pixel_count: c.pixel_count,
        })
        .collect()
}
