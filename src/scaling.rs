//! Nearest-neighbor upscaling.
//!
//! Every target pixel copies exactly one source pixel, so an integer scale
//! factor turns each source pixel into a uniform block. No blending.
use crate::error::{CheckerError, Result};
use crate::image::{ImageView, ImageViewMut, RgbCanvas};
use crate::types::Dimensions;

/// Coordinate mapping from a target pixel back to the source pixel it copies.
pub trait ScaleMap {
    fn source(&self, target: [usize; 2]) -> [usize; 2];
}

/// Integer nearest-neighbor map: `src = dst * src_len / dst_len`.
#[derive(Clone, Copy, Debug)]
pub struct NearestMap {
    src_w: usize,
    src_h: usize,
    dst_w: usize,
    dst_h: usize,
}

impl NearestMap {
    pub fn new(source: Dimensions, target: Dimensions) -> Self {
        Self {
            src_w: source.width as usize,
            src_h: source.height as usize,
            dst_w: target.width as usize,
            dst_h: target.height as usize,
        }
    }

}

impl ScaleMap for NearestMap {
    #[inline]
    fn source(&self, target: [usize; 2]) -> [usize; 2] {
        [
            target[0] * self.src_w / self.dst_w,
            target[1] * self.src_h / self.dst_h,
        ]
    }
}

/// Upscale `src` to `target` by pixel replication.
///
/// The target must be at least as large as the source along both axes.
pub fn upscale_nearest(src: &RgbCanvas, target: Dimensions) -> Result<RgbCanvas> {
    let source = src.dimensions();
    if target.width < source.width || target.height < source.height {
        return Err(CheckerError::InvalidDimensions(format!(
            "{target}: upscale target is smaller than the {source} source"
        )));
    }

    let map = NearestMap::new(source, target);
    let mut out = RgbCanvas::new(target);
    for y in 0..out.h {
        for (x, px) in out.row_mut(y).iter_mut().enumerate() {
            let [sx, sy] = map.source([x, y]);
            *px = src.row(sy)[sx];
        }
    }
    log::debug!("upscaled {source} -> {target}");
    Ok(out)
}
