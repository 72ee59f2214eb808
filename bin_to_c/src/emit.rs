/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Rendering of a byte slice as a C `unsigned char` array declaration.

use std::fmt::Write as _;
use std::io::{self, Write};

pub const BYTES_PER_LINE: usize = 12;

pub const INDENT: &str = "    ";

/// Number of data lines emitted for an input of `len` bytes.
pub fn line_count(len: usize) -> usize {
    len.div_ceil(BYTES_PER_LINE)
}

/// Formats one chunk as an indented line, e.g. `    0x00, 0xff, 0x10,`.
///
/// The trailing comma is always present, including on the last line.
pub fn format_chunk(chunk: &[u8]) -> String {
    let mut line = String::with_capacity(INDENT.len() + chunk.len() * 6);
    line.push_str(INDENT);
    for (i, byte) in chunk.iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        // writing into a String cannot fail
        let _ = write!(line, "0x{byte:02x}");
    }
    line.push(',');
    line
}

/// Writes the whole declaration for `data` under the identifier `name`.
///
/// `name` is used verbatim.
pub fn write_array<W: Write>(out: &mut W, name: &str, data: &[u8]) -> io::Result<()> {
    writeln!(out, "unsigned char {name}[] = {{")?;
    for chunk in data.chunks(BYTES_PER_LINE) {
        writeln!(out, "{}", format_chunk(chunk))?;
    }
    writeln!(out, "}};")?;
    Ok(())
}
