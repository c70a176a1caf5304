//! Checkerboard generation.
//!
//! Cells are one pixel wide. Pixel `(x, y)` is white iff `x + y` is even, so
//! the origin is white and every row starts with the opposite color of the
//! row above it.
use crate::error::Result;
use crate::image::{ImageViewMut, RgbCanvas};
use crate::types::{Color, Dimensions};

/// Color of the checkerboard at `(x, y)`.
#[inline]
pub fn color_at(x: usize, y: usize) -> Color {
    if (x + y) % 2 == 0 {
        Color::White
    } else {
        Color::Black
    }
}

/// Generate a checkerboard, validating the requested size first.
///
/// Zero or negative sides are rejected before anything is allocated.
pub fn generate(width: i64, height: i64) -> Result<RgbCanvas> {
    let dims = Dimensions::new(width, height)?;
    Ok(generate_dims(dims))
}

/// Generate a checkerboard for already validated dimensions.
pub fn generate_dims(dims: Dimensions) -> RgbCanvas {
    let mut canvas = RgbCanvas::new(dims);
    let mut lead = Color::White;
    for y in 0..canvas.h {
        let (even, odd) = (lead.rgb(), lead.inverted().rgb());
        for (x, px) in canvas.row_mut(y).iter_mut().enumerate() {
            *px = if x % 2 == 0 { even } else { odd };
        }
        lead = lead.inverted();
    }
    log::debug!("generated {dims} checkerboard");
    canvas
}
