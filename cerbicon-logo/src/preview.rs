use std::fmt::Write;

use cerbicon_data::{Canvas, CellMismatch, ScreenImage};

/// Placeholder for bytes without a printable ASCII representation.
const GLYPH_MARKER: char = '·';

/// Renders the image as framed text, one terminal line per image line.
///
/// Platform glyph codes have no terminal equivalent and are shown as `·`.
pub fn render_preview(image: &ScreenImage) -> String {
    let mut output = String::new();

    // Column ruler, one digit per column
    write!(&mut output, "    ").ok();
    for col in 0..Canvas::WIDTH {
        write!(&mut output, "{}", col % 10).ok();
    }
    writeln!(&mut output).ok();

    writeln!(&mut output, "   +{}+", "-".repeat(Canvas::WIDTH)).ok();
    for (line_idx, line) in image.lines().enumerate() {
        let text: String = line.iter().map(|&b| display_char(b)).collect();
        writeln!(&mut output, "{line_idx:>2} |{text}|").ok();
    }
    writeln!(&mut output, "   +{}+", "-".repeat(Canvas::WIDTH)).ok();

    output
}

/// Formats a mismatch as `line:column expected -> actual`.
pub fn describe_mismatch(mismatch: &CellMismatch) -> String {
    format!(
        "line {:>2}, column {:>2}: expected {} got {}",
        mismatch.line,
        mismatch.column,
        describe_byte(mismatch.expected),
        describe_byte(mismatch.actual),
    )
}

fn display_char(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' { byte as char } else { GLYPH_MARKER }
}

fn describe_byte(byte: u8) -> String {
    match display_char(byte) {
        GLYPH_MARKER => format!("0x{byte:02X}"),
        ch => format!("'{ch}' (0x{byte:02X})"),
    }
}
