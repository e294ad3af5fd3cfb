//! Character-cell canvas and boot image format for the Cerberus 2100 splash screen.
//!
//! The splash is drawn into a fixed [`Canvas`] from the declarative
//! [`SPLASH`] table and serialized into the raw [`ScreenImage`] the BIOS
//! displays at start-up.

mod artwork;
mod canvas;
mod error;
mod image;
mod position;

pub use artwork::{DrawOp, SPLASH, Stroke, render, render_splash};
pub use canvas::Canvas;
pub use error::Error;
pub use image::{CellMismatch, ScreenImage, write_image};
pub use position::CellPosition;
