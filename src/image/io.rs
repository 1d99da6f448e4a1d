//! I/O helpers for colour frames, masks and JSON.
//!
//! - `load_bgr_image`: read a PNG/JPEG/etc. into an owned BGR frame.
//! - `save_bgr_image`: write an owned BGR frame back to disk.
//! - `save_mask`: write a binary mask to a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BgrImage, ImageView, Mask};
use crate::error::{Error, Result};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and reorder its channels to BGR.
pub fn load_bgr_image(path: &Path) -> Result<BgrImage> {
    let img = image::open(path)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut data = img.into_raw();
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    BgrImage::from_raw(width, height, data)
}

/// Save a BGR frame as an RGB image (format chosen from the extension).
pub fn save_bgr_image(frame: &BgrImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut data = frame.as_bytes().to_vec();
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    let out = RgbImage::from_raw(frame.width() as u32, frame.height() as u32, data)
        .ok_or(Error::BufferSize {
            expected: frame.width() * frame.height() * 3,
            actual: frame.as_bytes().len(),
        })?;
    out.save(path).map_err(|source| Error::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a mask to a grayscale PNG (skin pixels white).
pub fn save_mask(mask: &Mask, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.w as u32, mask.h as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, image::Luma([v]));
        }
    }
    out.save(path).map_err(|source| Error::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| Error::io("Failed to write JSON", path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io("Failed to create directory", parent, e))?;
        }
    }
    Ok(())
}
