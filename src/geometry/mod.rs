//! Planar geometry used by the segmentation and proximity stages.
//!
//! - [`rect`] – the virtual boundary rectangle and its placement.
//! - [`distance`] – nearest-point distance from a point to a rectangle.
//! - [`polygon`] – shoelace area and convex hull of integer polygons.
//! - [`circle`] – minimal enclosing circle of a point set.

pub mod circle;
pub mod distance;
pub mod polygon;
pub mod rect;

pub use circle::{min_enclosing_circle, EnclosingCircle};
pub use distance::point_to_rect_distance;
pub use polygon::{convex_hull, polygon_area};
pub use rect::{get_centered_rectangle, BoundaryParams, VirtualRect};
