pub mod io;
pub mod rgb;
pub mod traits;

pub use self::rgb::RgbCanvas;
pub use self::traits::{ImageView, ImageViewMut, Rows};
