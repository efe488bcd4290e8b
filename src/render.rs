//! Serializes a glyph grid to text.

use std::io::{self, Write};

use crate::Grid;

/// Terminal cells are roughly three times taller than wide, so each glyph is
/// printed this many times side by side.
pub const STRETCH: usize = 3;

fn push_row(line: &mut String, row: &[char]) {
    for &glyph in row {
        for _ in 0..STRETCH {
            line.push(glyph);
        }
    }
    line.push('\n');
}

/// Render the whole grid into one string, one `\n`-terminated line per row.
pub fn render(glyphs: &Grid<char>) -> String {
    let mut out = String::with_capacity((glyphs.width() * STRETCH + 1) * glyphs.height());
    for row in glyphs.rows() {
        push_row(&mut out, row);
    }
    out
}

/// Same as [`render`], but streams each line to `out` as it is built.
pub fn render_to<W: Write>(glyphs: &Grid<char>, mut out: W) -> io::Result<()> {
    let mut line = String::with_capacity(glyphs.width() * STRETCH + 1);
    for row in glyphs.rows() {
        line.clear();
        push_row(&mut line, row);
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}
