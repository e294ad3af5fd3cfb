use std::path::{Path, PathBuf};

/// Error categories for rendering and serializing the splash screen.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A logical coordinate that does not map into the canvas grid.
    #[error("Invalid coordinate ({x}, {y}): outside the {width}x{height} canvas")]
    InvalidCoordinate {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// Reading or writing an image file failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A serialized image whose length does not match the screen geometry.
    #[error("Invalid image size: expected {expected} bytes, got {actual}")]
    ImageSize { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn invalid_coordinate(x: i32, y: i32) -> Self {
        Self::InvalidCoordinate {
            x,
            y,
            width: crate::Canvas::WIDTH,
            height: crate::Canvas::HEIGHT,
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    pub(crate) fn image_size(actual: usize) -> Self {
        Self::ImageSize {
            expected: crate::ScreenImage::LEN,
            actual,
        }
    }
}
