//! Binary erosion and dilation with a rectangular structuring element.
//!
//! A rectangle is separable, so each operation runs as a horizontal pass
//! followed by a vertical pass over a sliding window count. Pixels outside the
//! image never influence the result: erosion only looks at in-bounds
//! neighbours and dilation cannot grow from outside.
//!
//! Complexity: O(W·H) per pass, independent of the kernel size.
use crate::image::{ImageView, ImageViewMut, Mask};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MorphOp {
    Erode,
    Dilate,
}

/// Rectangular structuring element anchored at its centre
/// (`width / 2`, `height / 2`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectKernel {
    pub width: usize,
    pub height: usize,
}

impl RectKernel {
    pub const fn square(size: usize) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    // (reach before the anchor, reach after it)
    fn reach(len: usize) -> (usize, usize) {
        let before = len / 2;
        (before, len.saturating_sub(1) - before)
    }
}

/// Erode `mask` `iterations` times.
pub fn erode(mask: &Mask, kernel: RectKernel, iterations: usize) -> Mask {
    apply(mask, kernel, iterations, MorphOp::Erode)
}

/// Dilate `mask` `iterations` times.
pub fn dilate(mask: &Mask, kernel: RectKernel, iterations: usize) -> Mask {
    apply(mask, kernel, iterations, MorphOp::Dilate)
}

fn apply(mask: &Mask, kernel: RectKernel, iterations: usize, op: MorphOp) -> Mask {
    let mut out = mask.clone();
    if mask.is_empty() || kernel.width == 0 || kernel.height == 0 {
        return out;
    }
    let mut scratch = Mask::new(mask.w, mask.h);
    for _ in 0..iterations {
        horizontal_pass(&out, &mut scratch, kernel.width, op);
        vertical_pass(&scratch, &mut out, kernel.height, op);
    }
    out
}

#[inline]
fn decide(count: usize, in_bounds: usize, op: MorphOp) -> u8 {
    let on = match op {
        MorphOp::Erode => count == in_bounds,
        MorphOp::Dilate => count > 0,
    };
    if on {
        Mask::ON
    } else {
        0
    }
}

fn horizontal_pass(src: &Mask, dst: &mut Mask, len: usize, op: MorphOp) {
    let (before, after) = RectKernel::reach(len);
    let w = src.w;
    let mut prefix = vec![0usize; w + 1];
    for y in 0..src.h {
        let row = src.row(y);
        for (x, &v) in row.iter().enumerate() {
            prefix[x + 1] = prefix[x] + usize::from(v != 0);
        }
        let out = dst.row_mut(y);
        for (x, px) in out.iter_mut().enumerate() {
            let lo = x.saturating_sub(before);
            let hi = (x + after).min(w - 1);
            *px = decide(prefix[hi + 1] - prefix[lo], hi + 1 - lo, op);
        }
    }
}

fn vertical_pass(src: &Mask, dst: &mut Mask, len: usize, op: MorphOp) {
    let (before, after) = RectKernel::reach(len);
    let h = src.h;
    let mut prefix = vec![0usize; h + 1];
    for x in 0..src.w {
        for y in 0..h {
            prefix[y + 1] = prefix[y] + usize::from(src.is_set(x, y));
        }
        for y in 0..h {
            let lo = y.saturating_sub(before);
            let hi = (y + after).min(h - 1);
            let i = dst.idx(x, y);
            dst.data[i] = decide(prefix[hi + 1] - prefix[lo], hi + 1 - lo, op);
        }
    }
}
