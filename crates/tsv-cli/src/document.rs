//! Parsed documents and editor-coordinate translation.
//!
//! The arena works in byte offsets. Editors send UTF-16 offsets or 1-based
//! tsserver `line`/`offset` pairs, and expect UTF-16 spans back.

use serde::{Deserialize, Serialize};
use tsv_common::position::{byte_to_utf16_offset, utf16_to_byte_offset};
use tsv_common::{LineMap, Position, TextSpan};
use tsv_lsp::{InlineValue, InlineValuesProvider, ScopeLimits};
use tsv_parser::{NodeIndex, ParserState};

/// Where execution is paused, in editor coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// tsserver style: 1-based line, 1-based UTF-16 column.
    LineOffset { line: u32, offset: u32 },
    /// 0-based UTF-16 offset from the start of the file.
    Position(u32),
}

/// An inline value as sent over the wire, with UTF-16 `start`/`length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WireInlineValue {
    VariableLookup {
        start: u32,
        length: u32,
        #[serde(rename = "variableName")]
        variable_name: String,
    },
    EvaluatableExpression {
        start: u32,
        length: u32,
        expression: String,
    },
}

/// A source file held open by the server or loaded by the CLI.
pub struct Document {
    parser: ParserState,
    root: NodeIndex,
    line_map: LineMap,
}

impl Document {
    pub fn new(file_name: &str, text: String) -> Self {
        let line_map = LineMap::build(&text);
        let mut parser = ParserState::new(file_name.to_string(), text);
        let root = parser.parse_source_file();
        if !parser.get_diagnostics().is_empty() {
            tracing::debug!(
                file = file_name,
                count = parser.get_diagnostics().len(),
                "document parsed with errors"
            );
        }
        Document {
            parser,
            root,
            line_map,
        }
    }

    pub fn file_name(&self) -> &str {
        self.parser.get_file_name()
    }

    pub fn text(&self) -> &str {
        self.parser.get_source_text()
    }

    /// Replace the whole text and reparse.
    pub fn replace(&mut self, text: String) {
        let file_name = self.file_name().to_string();
        *self = Document::new(&file_name, text);
    }

    /// Replace the text between two tsserver locations with `insert`.
    pub fn splice(&mut self, start: Location, end: Location, insert: &str) {
        let start = self.byte_offset(start) as usize;
        let end = (self.byte_offset(end) as usize).max(start);
        let text = self.text();
        let mut updated = String::with_capacity(text.len() - (end - start) + insert.len());
        updated.push_str(&text[..start]);
        updated.push_str(insert);
        updated.push_str(&text[end..]);
        self.replace(updated);
    }

    /// Byte offset of an editor location, clamped to the text.
    pub fn byte_offset(&self, location: Location) -> u32 {
        let text = self.text();
        match location {
            Location::Position(utf16) => utf16_to_byte_offset(text, utf16),
            Location::LineOffset { line, offset } => {
                let position = Position::new(line.saturating_sub(1), offset.saturating_sub(1));
                self.line_map
                    .position_to_offset(position, text)
                    .unwrap_or(text.len() as u32)
            }
        }
    }

    /// Byte span for a UTF-16 `start`/`length` pair.
    pub fn byte_span(&self, start: u32, length: u32) -> TextSpan {
        let text = self.text();
        TextSpan::from_bounds(
            utf16_to_byte_offset(text, start),
            utf16_to_byte_offset(text, start.saturating_add(length)),
        )
    }

    /// UTF-16 `(start, length)` for a byte span.
    pub fn utf16_span(&self, span: TextSpan) -> (u32, u32) {
        let text = self.text();
        let start = byte_to_utf16_offset(text, span.start);
        let end = byte_to_utf16_offset(text, span.end());
        (start, end - start)
    }

    /// Inline values in arena coordinates.
    pub fn inline_values(
        &self,
        position: u32,
        visible_span: TextSpan,
        limits: ScopeLimits,
    ) -> Vec<InlineValue> {
        InlineValuesProvider::new(self.parser.get_arena(), self.root)
            .with_limits(limits)
            .provide_inline_values(position, visible_span)
    }

    /// Inline values for an editor request. A missing `visible` span means
    /// the whole file.
    pub fn wire_inline_values(
        &self,
        location: Location,
        visible: Option<(u32, u32)>,
        limits: ScopeLimits,
    ) -> Vec<WireInlineValue> {
        let position = self.byte_offset(location);
        let visible_span = match visible {
            Some((start, length)) => self.byte_span(start, length),
            None => TextSpan::everything(),
        };
        self.inline_values(position, visible_span, limits)
            .into_iter()
            .map(|value| self.to_wire(value))
            .collect()
    }

    fn to_wire(&self, value: InlineValue) -> WireInlineValue {
        let (start, length) = self.utf16_span(value.span());
        match value {
            InlineValue::VariableLookup { variable_name, .. } => WireInlineValue::VariableLookup {
                start,
                length,
                variable_name,
            },
            InlineValue::EvaluatableExpression { expression, .. } => {
                WireInlineValue::EvaluatableExpression {
                    start,
                    length,
                    expression,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/document_tests.rs"]
mod tests;
