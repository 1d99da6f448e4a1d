/// Shortest Euclidean distance from `(px, py)` to the axis-aligned rectangle
/// `[x1, x2] × [y1, y2]`; exactly `0.0` on or inside it.
///
/// The point is clamped into the rectangle per axis and the distance to the
/// clamped point is returned.
#[inline]
pub fn point_to_rect_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let cx = px.max(x1).min(x2);
    let cy = py.max(y1).min(y2);
    (px - cx).hypot(py - cy)
}
