//! Single-image mode: one checkerboard written to one PNG file.
use crate::checker::generate_dims;
use crate::error::Result;
use crate::image::io::{save_rgb_png, with_png_extension};
use crate::scaling::upscale_nearest;
use crate::types::Dimensions;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct SingleOptions {
    pub dims: Dimensions,
    pub output: PathBuf,
    /// Optional nearest-neighbor upscale applied after generation.
    pub upscale: Option<Dimensions>,
}

impl SingleOptions {
    pub fn new(dims: Dimensions, output: impl Into<PathBuf>) -> Self {
        Self {
            dims,
            output: output.into(),
            upscale: None,
        }
    }

    pub fn with_upscale(mut self, upscale: Option<Dimensions>) -> Self {
        self.upscale = upscale;
        self
    }

    /// Final file path, with `.png` appended when missing.
    pub fn output_path(&self) -> PathBuf {
        with_png_extension(&self.output)
    }
}

/// Generate, optionally upscale, and save. Returns the path written.
pub fn write_single(opts: &SingleOptions) -> Result<PathBuf> {
    let path = opts.output_path();
    if path.as_path() != opts.output.as_path() {
        log::info!("appending .png: {} -> {}", opts.output.display(), path.display());
    }

    let mut canvas = generate_dims(opts.dims);
    if let Some(target) = opts.upscale {
        canvas = upscale_nearest(&canvas, target)?;
    }
    save_rgb_png(&canvas, &path)?;
    Ok(path)
}
