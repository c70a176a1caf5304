//! Owned RGB canvas in row-major layout (stride == width).
//!
//! Pixels are stored as `[u8; 3]` triples. The canvas is filled once by a
//! generator, optionally resampled, then handed to [`super::io`] for
//! encoding.
use super::traits::{ImageView, ImageViewMut};
use crate::types::Dimensions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbCanvas {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<[u8; 3]>,
}

impl RgbCanvas {
    /// Construct a black canvas of the given size.
    pub fn new(dims: Dimensions) -> Self {
        let w = dims.width as usize;
        let h = dims.height as usize;
        Self {
            w,
            h,
            stride: w,
            data: vec![[0; 3]; w * h],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.w as u32,
            height: self.h as u32,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: [u8; 3]) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Flatten into interleaved `RGBRGB...` bytes.
    pub fn to_raw(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.w * self.h * 3);
        for row in self.rows() {
            for px in row {
                raw.extend_from_slice(px);
            }
        }
        raw
    }
}

impl ImageView for RgbCanvas {
    type Pixel = [u8; 3];

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
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for RgbCanvas {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [[u8; 3]] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
