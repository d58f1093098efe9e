//! One-shot inline values query for the `tsv` binary.

use crate::args::{CliArgs, OutputFormat};
use crate::document::{Document, Location, WireInlineValue};
use anyhow::{Context, Result, bail};
use std::fmt::Write as _;
use tsv_common::Position;

/// Load the file, run the query and render the result.
pub fn run(args: &CliArgs) -> Result<String> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let file_name = args.file.display().to_string();
    let document = Document::new(&file_name, text);

    let location = match (args.line, args.offset, args.position) {
        (Some(line), Some(offset), _) => Location::LineOffset { line, offset },
        (_, _, Some(position)) => Location::Position(position),
        _ => bail!("expected --line/--offset or --position"),
    };
    let visible = args.start.zip(args.length);
    let values = document.wire_inline_values(location, visible, args.limits.scope_limits());
    tracing::debug!(file = %file_name, count = values.len(), "inline values");

    match args.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&values).context("failed to serialize inline values")
        }
        OutputFormat::Text => Ok(render_text(&document, &values)),
    }
}

/// `line:column  kind  text`, 1-based like tsserver.
pub fn render_text(document: &Document, values: &[WireInlineValue]) -> String {
    let text = document.text();
    let line_map = tsv_common::LineMap::build(text);
    let mut out = String::new();
    for value in values {
        let (start, kind, label) = match value {
            WireInlineValue::VariableLookup {
                start,
                variable_name,
                ..
            } => (*start, "lookup", variable_name),
            WireInlineValue::EvaluatableExpression {
                start, expression, ..
            } => (*start, "expr", expression),
        };
        let byte = tsv_common::position::utf16_to_byte_offset(text, start);
        let Position { line, character } = line_map.offset_to_position(byte, text);
        let _ = writeln!(out, "{}:{}\t{kind}\t{label}", line + 1, character + 1);
    }
    out
}

#[cfg(test)]
#[path = "../tests/query_tests.rs"]
mod tests;
