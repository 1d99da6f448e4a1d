//! 8-connected component labelling and outer-background flood fill.
use crate::image::{ImageView, Mask};

/// Offsets of the 8-neighbourhood.
pub(crate) const NEIGH8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const NEIGH4: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// One labelled foreground region.
#[derive(Clone, Debug)]
pub(crate) struct Component {
    pub label: u32,
    /// First pixel in raster order (topmost, then leftmost).
    pub start: (usize, usize),
    pub pixel_count: usize,
    /// False when the region sits inside a hole of another region.
    pub external: bool,
}

/// Per-pixel labels (`0` = background) plus the component table.
pub(crate) struct Labeling {
    pub width: usize,
    pub height: usize,
    pub labels: Vec<u32>,
    pub components: Vec<Component>,
}

impl Labeling {
    #[inline]
    pub fn label_at(&self, x: isize, y: isize) -> u32 {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            0
        } else {
            self.labels[y as usize * self.width + x as usize]
        }
    }
}

#[inline]
fn neighbour(x: usize, y: usize, d: (isize, isize), w: usize, h: usize) -> Option<usize> {
    let nx = x as isize + d.0;
    let ny = y as isize + d.1;
    if nx < 0 || ny < 0 || nx as usize >= w || ny as usize >= h {
        None
    } else {
        Some(ny as usize * w + nx as usize)
    }
}

/// Label the 8-connected foreground regions of `mask` in raster order.
pub(crate) fn label_components(mask: &Mask) -> Labeling {
    let (w, h) = (mask.width(), mask.height());
    let mut labels = vec![0u32; w * h];
    let mut components = Vec::new();
    let mut stack: Vec<usize> = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            if labels[idx] != 0 || !mask.is_set(x, y) {
                continue;
            }
            let label = components.len() as u32 + 1;
            labels[idx] = label;
            stack.push(idx);
            let mut pixel_count = 0usize;
            while let Some(cur) = stack.pop() {
                pixel_count += 1;
                let (cx, cy) = (cur % w, cur / w);
                for d in NEIGH8 {
                    if let Some(n) = neighbour(cx, cy, d, w, h) {
                        if labels[n] == 0 && mask.data[n] != 0 {
                            labels[n] = label;
                            stack.push(n);
                        }
                    }
                }
            }
            components.push(Component {
                label,
                start: (x, y),
                pixel_count,
                external: false,
            });
        }
    }

    let mut labeling = Labeling {
        width: w,
        height: h,
        labels,
        components,
    };
    mark_external(&mut labeling);
    labeling
}

/// Flood the background reachable from the image border (4-connected, the
/// dual of 8-connected foreground) and flag every region touching it.
fn mark_external(labeling: &mut Labeling) {
    let (w, h) = (labeling.width, labeling.height);
    if w == 0 || h == 0 {
        return;
    }
    let labels = &labeling.labels;
    let mut outside = vec![false; w * h];
    let mut stack: Vec<usize> = Vec::new();

    let seed = |idx: usize, outside: &mut [bool], stack: &mut Vec<usize>| {
        if labels[idx] == 0 && !outside[idx] {
            outside[idx] = true;
            stack.push(idx);
        }
    };
    for x in 0..w {
        seed(x, &mut outside, &mut stack);
        seed((h - 1) * w + x, &mut outside, &mut stack);
    }
    for y in 0..h {
        seed(y * w, &mut outside, &mut stack);
        seed(y * w + w - 1, &mut outside, &mut stack);
    }
    while let Some(cur) = stack.pop() {
        let (cx, cy) = (cur % w, cur / w);
        for d in NEIGH4 {
            if let Some(n) = neighbour(cx, cy, d, w, h) {
                seed(n, &mut outside, &mut stack);
            }
        }
    }

    let mut external = vec![false; labeling.components.len() + 1];
    for y in 0..h {
        for x in 0..w {
            let label = labels[y * w + x];
            if label == 0 || external[label as usize] {
                continue;
            }
            let on_border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
            let touches_outside = NEIGH4.iter().any(|&d| {
                neighbour(x, y, d, w, h).map_or(false, |n| outside[n])
            });
            if on_border || touches_outside {
                external[label as usize] = true;
            }
        }
    }
    for comp in &mut labeling.components {
        comp.external = external[comp.label as usize];
    }
}
