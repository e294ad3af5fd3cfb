use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{Canvas, Error};

/// The raw boot image read by the Cerberus 2100 BIOS.
///
/// Rows [`FIRST_ROW`](Self::FIRST_ROW) through `Canvas::HEIGHT - 1` of the
/// canvas, row-major, one byte per cell, with no header or delimiters.
/// Unset cells are stored as [`BLANK`](Self::BLANK). The top canvas row is
/// not part of the image.
#[derive(Clone, PartialEq, Eq)]
pub struct ScreenImage {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for ScreenImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenImage")
            .field("rows", &Self::ROWS)
            .field("columns", &Canvas::WIDTH)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A cell that differs between two images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMismatch {
    /// 0-based line in the serialized image
    pub line: usize,
    /// 0-based column
    pub column: usize,
    pub expected: u8,
    pub actual: u8,
}

impl ScreenImage {
    /// First canvas row included in the image.
    pub const FIRST_ROW: usize = 1;
    /// Number of serialized rows.
    pub const ROWS: usize = Canvas::HEIGHT - Self::FIRST_ROW;
    /// Exact image length in bytes.
    pub const LEN: usize = Self::ROWS * Canvas::WIDTH;
    /// Byte written for cells that were never drawn.
    pub const BLANK: u8 = b' ';

    /// Serializes `canvas`.
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let bytes = canvas
            .rows()
            .skip(Self::FIRST_ROW)
            .flatten()
            .map(|&cell| if cell == Canvas::UNSET { Self::BLANK } else { cell })
            .collect();

        Self { bytes }
    }

    /// Wraps an already serialized image.
    ///
    /// # Errors
    /// Returns [`Error::ImageSize`] unless `serialized` is exactly
    /// [`LEN`](Self::LEN) bytes long.
    pub fn from_binary(serialized: &[u8]) -> Result<Self, Error> {
        if serialized.len() != Self::LEN {
            return Err(Error::image_size(serialized.len()));
        }

        Ok(Self { bytes: serialized.to_vec() })
    }

    /// Reads an image file from disk.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::ImageSize`] if it has the wrong length.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let serialized = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::from_binary(&serialized)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterates over the serialized rows, [`Canvas::WIDTH`] bytes each.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(Canvas::WIDTH)
    }

    /// Streams the image bytes into `writer`.
    ///
    /// # Errors
    /// Propagates any error returned by `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.bytes)
    }

    /// Writes the image to `path`, creating or truncating the file.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;

        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io(path, e))
    }

    /// Lists every cell where `actual` differs from `self`.
    ///
    /// Both images always have the same geometry, so cells are compared
    /// position by position.
    pub fn diff(&self, actual: &ScreenImage) -> Vec<CellMismatch> {
        self.bytes
            .iter()
            .zip(actual.bytes.iter())
            .enumerate()
            .filter(|(_, (expected, actual))| expected != actual)
            .map(|(idx, (&expected, &actual))| CellMismatch {
                line: idx / Canvas::WIDTH,
                column: idx % Canvas::WIDTH,
                expected,
                actual,
            })
            .collect()
    }
}

impl AsRef<[u8]> for ScreenImage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Serializes `canvas` and writes it to `path`.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn write_image(path: impl AsRef<Path>, canvas: &Canvas) -> Result<(), Error> {
    ScreenImage::from_canvas(canvas).save(path)
}
