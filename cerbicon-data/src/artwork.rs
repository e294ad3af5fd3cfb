use crate::{Canvas, CellPosition, Error};

/// What a [`DrawOp`] puts on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// A single byte, typically a platform glyph code with no ASCII meaning.
    Glyph(u8),
    /// A horizontal run of characters, clipped to the canvas columns.
    Text(&'static str),
}

/// One entry of a declarative drawing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOp {
    pub position: CellPosition,
    pub stroke: Stroke,
}

impl DrawOp {
    pub const fn glyph(x: i32, y: i32, code: u8) -> Self {
        Self { position: CellPosition::new(x, y), stroke: Stroke::Glyph(code) }
    }

    pub const fn text(x: i32, y: i32, text: &'static str) -> Self {
        Self { position: CellPosition::new(x, y), stroke: Stroke::Text(text) }
    }

    /// Draws this entry onto `canvas`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCoordinate`] if the entry addresses a cell or
    /// row outside the canvas.
    pub fn apply(&self, canvas: &mut Canvas) -> Result<(), Error> {
        let CellPosition { x, y } = self.position;
        match self.stroke {
            Stroke::Glyph(code) => canvas.set_cell(x, y, code),
            Stroke::Text(text) => canvas.draw_text(x, y, text),
        }
    }
}

/// The Cerberus 2100 boot splash: the glyph header, the "CERBERUS" and
/// "2100" logotypes, and the BIOS instructions.
#[rustfmt::skip]
pub const SPLASH: &[DrawOp] = &[
    // header row of platform glyphs
    DrawOp::glyph(14, 4, 13),
    DrawOp::glyph(16, 4, 22),
    DrawOp::glyph(18, 4, 23),
    DrawOp::glyph(20, 4, 24),
    DrawOp::glyph(22, 4, 25),
    DrawOp::glyph(24, 4, 26),
    DrawOp::glyph(26, 4, 27),

    DrawOp::text(2, 6,  r"  ___ ___ ___  ___ ___ ___ _   _ ___"),
    DrawOp::text(2, 7,  r" / __| __| _ \| _ ) __| _ \ | | / __|"),
    DrawOp::text(2, 8,  r" |(__| _||   /| _ \ _||   / |_| \__ \"),
    DrawOp::text(2, 9,  r" \___|___|_|_\|___/___|_|_\\___/|___|"),

    DrawOp::text(2, 11, r"   ________  ___________  _______      "),
    DrawOp::text(2, 12, r"   \_____  \/_   \   _  \ \   _  \     "),
    DrawOp::text(2, 13, r"    /  ____/ |   /  / \  \/  / \  \    "),
    DrawOp::text(2, 14, r"   /       \ |   \  \_/   \  \_/   \   "),
    DrawOp::text(2, 15, r"   \_______ \|___|\_____  /\_____  /   "),
    DrawOp::text(2, 16, r"           \/           \/       \/    "),

    DrawOp::text(2, 20,   "      Created at The Byte Attic!"),
    DrawOp::text(2, 22,   "     Type basicz80 for Z80 BASIC"),
    DrawOp::text(2, 23,   "    Type basic6502 for 6502 BASIC"),
    DrawOp::text(2, 24,   "   Type help or ? for BIOS commands"),
];

/// Renders `ops` in order onto a fresh canvas.
///
/// # Errors
/// Stops at the first entry that fails and returns its error.
pub fn render(ops: &[DrawOp]) -> Result<Canvas, Error> {
    let mut canvas = Canvas::new();
    for op in ops {
        op.apply(&mut canvas)?;
    }

    Ok(canvas)
}

/// Renders the [`SPLASH`] table.
///
/// # Errors
/// Only fails if the table addresses a cell outside the canvas.
pub fn render_splash() -> Result<Canvas, Error> {
    render(SPLASH)
}
