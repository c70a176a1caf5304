#![doc = include_str!("../README.md")]

pub mod batch;
pub mod checker;
pub mod cli;
pub mod error;
pub mod image;
pub mod scaling;
pub mod single;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::batch::{run_batch, BatchOptions, BatchReport};
pub use crate::checker::{color_at, generate, generate_dims};
pub use crate::error::CheckerError;
pub use crate::scaling::upscale_nearest;
pub use crate::single::{write_single, SingleOptions};
pub use crate::types::{Color, Dimensions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use checker_gen::prelude::*;
///
/// # fn main() -> Result<(), CheckerError> {
/// let dims: Dimensions = "8x8".parse()?;
/// let board = generate_dims(dims);
/// assert_eq!(board.get(0, 0), Color::White.rgb());
/// write_single(&SingleOptions::new(dims, "board"))?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageView, RgbCanvas};
    pub use crate::{
        generate, generate_dims, write_single, CheckerError, Color, Dimensions, SingleOptions,
    };
}
