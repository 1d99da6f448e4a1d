//! Outer border following for one labelled region.
//!
//! Follows the border-following scheme of Suzuki & Abe: the start pixel is the
//! region's first pixel in raster order (its west neighbour is background);
//! the first neighbour is found by a clockwise sweep starting west, and each
//! subsequent border pixel by a counter-clockwise sweep starting just past the
//! previously visited pixel. Tracing stops when the walk returns to the start
//! pixel about to revisit the first neighbour.
use super::components::Labeling;
use nalgebra::Point2;

/// Neighbour offsets in counter-clockwise order (image y axis points down):
/// E, NE, N, NW, W, SW, S, SE.
const DIRS: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const WEST: usize = 4;

#[inline]
fn step(p: Point2<i32>, dir: usize) -> Point2<i32> {
    Point2::new(p.x + DIRS[dir].0, p.y + DIRS[dir].1)
}

#[inline]
fn dir_between(from: Point2<i32>, to: Point2<i32>) -> usize {
    let d = (to.x - from.x, to.y - from.y);
    DIRS.iter().position(|&o| o == d).unwrap_or(WEST)
}

/// Ordered outer border of region `label` starting at its raster-first pixel.
///
/// A single isolated pixel yields a one-point contour; one-pixel-wide strokes
/// are walked out and back, so interior stroke pixels appear twice.
pub(crate) fn trace_outer_border(
    labeling: &Labeling,
    label: u32,
    start: (usize, usize),
) -> Vec<Point2<i32>> {
    let inside = |p: Point2<i32>| labeling.label_at(p.x as isize, p.y as isize) == label;
    let p0 = Point2::new(start.0 as i32, start.1 as i32);

    let first = (0..8)
        .map(|k| (WEST + 8 - k) % 8)
        .find(|&d| inside(step(p0, d)));
    let Some(first_dir) = first else {
        return vec![p0];
    };
    let p1 = step(p0, first_dir);

    let mut points = Vec::new();
    let mut prev = p1;
    let mut cur = p0;
    loop {
        let back = dir_between(cur, prev);
        // `prev` is inside, so the sweep always succeeds by k == 8
        let next = (1..=8)
            .map(|k| step(cur, (back + k) % 8))
            .find(|&p| inside(p))
            .unwrap_or(prev);
        points.push(cur);
        if next == p0 && cur == p1 {
            break;
        }
        prev = cur;
        cur = next;
    }
    points
}
