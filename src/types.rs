use crate::error::{CheckerError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the two checkerboard colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const WHITE_RGB: [u8; 3] = [255, 255, 255];
    pub const BLACK_RGB: [u8; 3] = [0, 0, 0];

    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::White => Self::WHITE_RGB,
            Color::Black => Self::BLACK_RGB,
        }
    }

    #[inline]
    pub fn inverted(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Map an RGB triple back to a checkerboard color, if it is one.
    pub fn from_rgb(rgb: [u8; 3]) -> Option<Self> {
        match rgb {
            Self::WHITE_RGB => Some(Color::White),
            Self::BLACK_RGB => Some(Color::Black),
            _ => None,
        }
    }
}

/// Validated image size; both sides are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Largest side a PNG header can declare.
    pub const MAX_SIDE: u32 = (1 << 31) - 1;
    /// Largest canvas we allocate: 2^28 pixels, about 805 MB of RGB.
    pub const MAX_PIXELS: u64 = 1 << 28;

    /// Validate signed user input.
    ///
    /// Zero and negative sides are rejected, as are sizes beyond the PNG
    /// side limit or [`Self::MAX_PIXELS`].
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(CheckerError::InvalidDimensions(format!(
                "{width}x{height}: width and height must be positive integers"
            )));
        }
        let max_side = i64::from(Self::MAX_SIDE);
        if width > max_side || height > max_side {
            return Err(CheckerError::InvalidDimensions(format!(
                "{width}x{height}: side exceeds the PNG limit of {max_side}"
            )));
        }
        let dims = Self {
            width: width as u32,
            height: height as u32,
        };
        if dims.pixel_count() > Self::MAX_PIXELS {
            return Err(CheckerError::InvalidDimensions(format!(
                "{dims}: more than {} pixels",
                Self::MAX_PIXELS
            )));
        }
        Ok(dims)
    }

    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl FromStr for Dimensions {
    type Err = CheckerError;

    /// Parse a `<width>x<height>` token, e.g. `640x480`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed =
            || CheckerError::InvalidDimensions(format!("'{s}': expected <width>x<height>"));
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(malformed)?;
        let w: i64 = w.trim().parse().map_err(|_| malformed())?;
        let h: i64 = h.trim().parse().map_err(|_| malformed())?;
        Dimensions::new(w, h)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
