use nalgebra::Point2;

/// Absolute shoelace area of a closed polygon (the last vertex connects back
/// to the first). Fewer than three vertices enclose nothing.
pub fn polygon_area(points: &[Point2<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0i64;
    let mut prev = points[points.len() - 1];
    for &p in points {
        twice += prev.x as i64 * p.y as i64 - p.x as i64 * prev.y as i64;
        prev = p;
    }
    twice.abs() as f64 * 0.5
}

#[inline]
fn cross(o: Point2<i64>, a: Point2<i64>, b: Point2<i64>) -> i64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Convex hull (Andrew's monotone chain), counter-clockwise in a y-up frame,
/// without collinear vertices. Duplicates in the input are tolerated.
pub fn convex_hull(points: &[Point2<i32>]) -> Vec<Point2<i32>> {
    let mut pts: Vec<Point2<i64>> = points
        .iter()
        .map(|p| Point2::new(p.x as i64, p.y as i64))
        .collect();
    pts.sort_by_key(|p| (p.x, p.y));
    pts.dedup();
    if pts.len() < 3 {
        return pts
            .into_iter()
            .map(|p| Point2::new(p.x as i32, p.y as i32))
            .collect();
    }

    let mut hull: Vec<Point2<i64>> = Vec::with_capacity(2 * pts.len());
    for &p in &pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull.into_iter()
        .map(|p| Point2::new(p.x as i32, p.y as i32))
        .collect()
}
