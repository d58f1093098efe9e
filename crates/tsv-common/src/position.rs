//! Position and location utilities.
//!
//! Editors speak in line/column positions and UTF-16 offsets, while the AST
//! uses byte offsets. This module provides conversion utilities.

use serde::{Deserialize, Serialize};

/// Zero-based line and UTF-16 column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// Byte offsets of line starts, for converting between offsets and
/// `Position`s. `\n`, `\r\n` and a lone `\r` all end a line.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let breaks = memchr::memchr2_iter(b'\n', b'\r', bytes)
            .filter(|&i| !(bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n')))
            .map(|i| (i + 1) as u32);

        LineMap {
            line_starts: std::iter::once(0).chain(breaks).collect(),
        }
    }

    /// Line and UTF-16 column of a byte offset. Offsets past the end land on
    /// the last line.
    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let offset = offset.min(source.len() as u32);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_text = source.get(self.line_starts[line] as usize..).unwrap_or("");
        let character = byte_to_utf16_offset(line_text, offset - self.line_starts[line]);
        Position::new(line as u32, character)
    }

    /// Byte offset of a `Position`, or `None` when the line does not exist.
    /// A column past the end of the line clamps to the line end.
    pub fn position_to_offset(&self, position: Position, source: &str) -> Option<u32> {
        let line = position.line as usize;
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(source.len() as u32);
        let line_text = source
            .get(start as usize..end as usize)
            .unwrap_or("")
            .trim_end_matches(['\n', '\r']);
        Some(start + utf16_to_byte_offset(line_text, position.character))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line_start(&self, line: usize) -> Option<u32> {
        self.line_starts.get(line).copied()
    }
}

/// Convert a UTF-16 code unit offset into a byte offset.
///
/// Offsets past the end of the text clamp to `source.len()`. An offset that
/// lands inside a surrogate pair rounds down to the start of that character.
pub fn utf16_to_byte_offset(source: &str, utf16_offset: u32) -> u32 {
    if source.is_ascii() {
        return utf16_offset.min(source.len() as u32);
    }
    let mut utf16 = 0u32;
    for (byte_idx, ch) in source.char_indices() {
        let next = utf16 + ch.len_utf16() as u32;
        if next > utf16_offset {
            return byte_idx as u32;
        }
        utf16 = next;
    }
    source.len() as u32
}

/// Convert a byte offset into a UTF-16 code unit offset.
pub fn byte_to_utf16_offset(source: &str, byte_offset: u32) -> u32 {
    let end = (byte_offset as usize).min(source.len());
    if source.is_ascii() {
        return end as u32;
    }
    source
        .char_indices()
        .take_while(|(idx, _)| *idx < end)
        .map(|(_, ch)| ch.len_utf16() as u32)
        .sum()
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod tests;
