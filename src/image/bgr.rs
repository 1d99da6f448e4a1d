//! 3-channel 8-bit colour frames in BGR channel order.
//!
//! [`ImageBgr8`] is the borrowed view the pipeline consumes; [`BgrImage`]
//! owns its buffer and is what the loaders and the mirroring step produce.
use crate::error::{Error, Result};

/// Bytes per pixel of a BGR frame.
pub const CHANNELS: usize = 3;

/// Borrowed BGR frame with an explicit row stride (in bytes).
#[derive(Clone, Copy, Debug)]
pub struct ImageBgr8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows, >= 3 * w
    pub data: &'a [u8],
}

impl<'a> ImageBgr8<'a> {
    /// Wrap a tightly packed BGR buffer, checking its length.
    pub fn from_raw(w: usize, h: usize, data: &'a [u8]) -> Result<Self> {
        Self::with_stride(w, h, w * CHANNELS, data)
    }

    /// Wrap a BGR buffer whose rows are `stride` bytes apart.
    pub fn with_stride(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self> {
        if stride < w * CHANNELS {
            return Err(Error::invalid(format!(
                "stride {stride} is smaller than one row of {w} BGR pixels"
            )));
        }
        let expected = if h == 0 {
            0
        } else {
            (h - 1) * stride + w * CHANNELS
        };
        if data.len() < expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, stride, data })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Packed `[b, g, r, b, g, r, ..]` bytes of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * CHANNELS]
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Copy into an owned, horizontally flipped image (mirror view).
    pub fn mirrored(&self) -> BgrImage {
        let mut out = BgrImage::new(self.w, self.h);
        for y in 0..self.h {
            let src = self.row(y);
            let dst = out.row_mut(y);
            for (dst_px, src_px) in dst
                .chunks_exact_mut(CHANNELS)
                .zip(src.chunks_exact(CHANNELS).rev())
            {
                dst_px.copy_from_slice(src_px);
            }
        }
        out
    }
}

/// Owned, tightly packed BGR frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BgrImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BgrImage {
    /// Black frame of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
        }
    }

    /// Frame filled with a single BGR colour.
    pub fn filled(width: usize, height: usize, bgr: [u8; 3]) -> Self {
        let mut img = Self::new(width, height);
        for px in img.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&bgr);
        }
        img
    }

    /// Take ownership of packed BGR bytes, checking their length.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.as_view().get(x, y)
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, bgr: [u8; 3]) {
        let i = (y * self.width + x) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&bgr);
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width * CHANNELS;
        &mut self.data[start..start + self.width * CHANNELS]
    }

    /// Borrow as a read-only `ImageBgr8` view.
    pub fn as_view(&self) -> ImageBgr8<'_> {
        ImageBgr8 {
            w: self.width,
            h: self.height,
            stride: self.width * CHANNELS,
            data: &self.data,
        }
    }
}
