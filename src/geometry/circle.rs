//! Minimal enclosing circle.
//!
//! The input is reduced to its convex hull first (the enclosing circle of a
//! set equals that of its hull), then the incremental Welzl construction runs
//! over the hull vertices. Hull sizes for mask contours stay small, so the
//! deterministic (non-shuffled) order is fast enough in practice.
use super::polygon::convex_hull;
use nalgebra::{Point2, Vector2};
use serde::Serialize;

const REL_EPS: f64 = 1e-9;

/// Circle with a floating-point centre, in pixel units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnclosingCircle {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl EnclosingCircle {
    fn point(p: Point2<f64>) -> Self {
        Self {
            center: p,
            radius: 0.0,
        }
    }

    fn diameter(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self {
            center: nalgebra::center(&a, &b),
            radius: (a - b).norm() * 0.5,
        }
    }

    /// Circumcircle of three points; collinear triples fall back to the
    /// circle spanning the farthest pair.
    fn circumscribed(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Self {
        let ab: Vector2<f64> = b - a;
        let ac: Vector2<f64> = c - a;
        let d = 2.0 * (ab.x * ac.y - ab.y * ac.x);
        if d.abs() < 1e-12 {
            let candidates = [
                Self::diameter(a, b),
                Self::diameter(a, c),
                Self::diameter(b, c),
            ];
            return candidates
                .into_iter()
                .max_by(|l, r| l.radius.total_cmp(&r.radius))
                .unwrap_or_else(|| Self::point(a));
        }
        let ab2 = ab.norm_squared();
        let ac2 = ac.norm_squared();
        let ux = (ac.y * ab2 - ab.y * ac2) / d;
        let uy = (ab.x * ac2 - ac.x * ab2) / d;
        let offset = Vector2::new(ux, uy);
        Self {
            center: a + offset,
            radius: offset.norm(),
        }
    }

    /// True when `p` lies inside or on the circle (with a small tolerance).
    pub fn contains(&self, p: &Point2<f64>) -> bool {
        (p - self.center).norm() <= self.radius * (1.0 + REL_EPS) + REL_EPS
    }
}

/// Smallest circle containing every point; `None` for an empty input.
pub fn min_enclosing_circle(points: &[Point2<i32>]) -> Option<EnclosingCircle> {
    let hull: Vec<Point2<f64>> = convex_hull(points)
        .into_iter()
        .map(|p| Point2::new(p.x as f64, p.y as f64))
        .collect();
    let first = *hull.first()?;

    let mut circle = EnclosingCircle::point(first);
    for i in 1..hull.len() {
        if circle.contains(&hull[i]) {
            continue;
        }
        circle = EnclosingCircle::point(hull[i]);
        for j in 0..i {
            if circle.contains(&hull[j]) {
                continue;
            }
            circle = EnclosingCircle::diameter(hull[i], hull[j]);
            for k in 0..j {
                if !circle.contains(&hull[k]) {
                    circle = EnclosingCircle::circumscribed(hull[i], hull[j], hull[k]);
                }
            }
        }
    }
    Some(circle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(v: &[(i32, i32)]) -> Vec<Point2<i32>> {
        v.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn empty_and_single_point() {
        assert!(min_enclosing_circle(&[]).is_none());
        let c = min_enclosing_circle(&pts(&[(4, 7)])).unwrap();
        assert_eq!(c.center, Point2::new(4.0, 7.0));
        assert_eq!(c.radius, 0.0);
    }

    #[test]
    fn two_points_span_a_diameter() {
        let c = min_enclosing_circle(&pts(&[(0, 0), (10, 0)])).unwrap();
        assert_relative_eq!(c.center.x, 5.0);
        assert_relative_eq!(c.center.y, 0.0);
        assert_relative_eq!(c.radius, 5.0);
    }

    #[test]
    fn rectangle_uses_half_diagonal() {
        let c = min_enclosing_circle(&pts(&[(0, 0), (6, 0), (6, 8), (0, 8), (3, 4)])).unwrap();
        assert_relative_eq!(c.center.x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(c.center.y, 4.0, epsilon = 1e-9);
        assert_relative_eq!(c.radius, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn acute_triangle_uses_circumcircle() {
        // equilateral-ish triangle: circumcircle, not a diameter circle
        let c = min_enclosing_circle(&pts(&[(0, 0), (10, 0), (5, 8)])).unwrap();
        for p in pts(&[(0, 0), (10, 0), (5, 8)]) {
            let d = (Point2::new(p.x as f64, p.y as f64) - c.center).norm();
            assert_relative_eq!(d, c.radius, epsilon = 1e-9);
        }
        assert!(c.radius > 5.0);
    }

    #[test]
    fn obtuse_triangle_uses_longest_side() {
        let c = min_enclosing_circle(&pts(&[(0, 0), (10, 0), (5, 1)])).unwrap();
        assert_relative_eq!(c.center.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(c.center.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(c.radius, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn every_input_point_is_enclosed() {
        let input: Vec<Point2<i32>> = (0..40)
            .map(|i| {
                let t = i as f64 * 0.37;
                Point2::new((20.0 * t.cos()) as i32 + 50, (13.0 * (1.7 * t).sin()) as i32 + 40)
            })
            .collect();
        let c = min_enclosing_circle(&input).unwrap();
        for p in &input {
            assert!(c.contains(&Point2::new(p.x as f64, p.y as f64)), "{:?} outside", p);
        }
    }
}
