//! Owned binary mask in row-major layout (stride == width).
//!
//! Pixels are stored as `0` (background) or [`Mask::ON`] (skin), which keeps
//! the buffer directly writable as an 8-bit grayscale PNG.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    /// Mask width in pixels
    pub w: usize,
    /// Mask height in pixels
    pub h: usize,
    /// Elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<u8>,
}

impl Mask {
    /// Value stored for set pixels.
    pub const ON: u8 = 255;

    /// All-background mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Build a mask by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut mask = Self::new(w, h);
        for y in 0..h {
            for x in 0..w {
                if f(x, y) {
                    mask.data[y * w + x] = Self::ON;
                }
            }
        }
        mask
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.data[self.idx(x, y)] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        let i = self.idx(x, y);
        self.data[i] = if on { Self::ON } else { 0 };
    }

    /// Number of set pixels.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl crate::image::traits::ImageView for Mask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data[..self.w * self.h])
    }
}

impl crate::image::traits::ImageViewMut for Mask {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        Some(&mut self.data[..self.w * self.h])
    }
}
