//! PNG and JSON I/O helpers.
//!
//! - `read_dimensions`: read width/height from an image header without decoding pixels.
//! - `save_rgb_png`: write an `RgbCanvas` as an 8-bit RGB PNG.
//! - `with_png_extension`: append `.png` to paths that lack it.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbCanvas;
use crate::error::{CheckerError, Result};
use crate::types::Dimensions;
use image::{ImageFormat, RgbImage};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the pixel size of an image file from its header.
pub fn read_dimensions(path: &Path) -> Result<Dimensions> {
    let (w, h) = image::image_dimensions(path).map_err(|e| CheckerError::image(path, e))?;
    Dimensions::new(i64::from(w), i64::from(h))
}

/// Save an RGB canvas as PNG, creating parent directories.
pub fn save_rgb_png(canvas: &RgbCanvas, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let buffer = RgbImage::from_raw(canvas.w as u32, canvas.h as u32, canvas.to_raw())
        .ok_or_else(|| {
            CheckerError::InvalidDimensions(format!(
                "{}x{}: buffer does not match canvas size",
                canvas.w, canvas.h
            ))
        })?;
    buffer
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| CheckerError::image(path, e))?;
    log::debug!("wrote {}x{} PNG to {}", canvas.w, canvas.h, path.display());
    Ok(())
}

/// True when the path ends in `.png`, ignoring case.
pub fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Return `path` with `.png` appended unless it already has that extension.
///
/// Any other extension is kept, so `out.jpg` becomes `out.jpg.png`.
pub fn with_png_extension(path: &Path) -> PathBuf {
    if has_png_extension(path) {
        return path.to_path_buf();
    }
    let mut s = OsString::from(path.as_os_str());
    s.push(".png");
    PathBuf::from(s)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| CheckerError::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CheckerError::io(parent, e))?;
        }
    }
    Ok(())
}
