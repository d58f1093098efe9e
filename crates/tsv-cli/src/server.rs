//! tsserver-compatible request handling.
//!
//! The server keeps open documents in memory and answers
//! `typescript/extra/provideInlineValues`. Two framings are supported:
//!
//! - tsserver (default): `Content-Length: N\r\n\r\n{json}` in both directions
//! - legacy: one JSON object per line in both directions

use crate::document::{Document, Location};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use tsv_lsp::ScopeLimits;

/// Command name for inline values requests.
pub const PROVIDE_INLINE_VALUES: &str = "typescript/extra/provideInlineValues";

/// Incoming request.
#[derive(Debug, Deserialize)]
pub struct TsServerRequest {
    pub seq: u64,
    #[serde(rename = "type", default)]
    pub msg_type: String,
    pub command: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// Outgoing response.
#[derive(Debug, Serialize)]
pub struct TsServerResponse {
    pub seq: u64,
    #[serde(rename = "type")]
    pub msg_type: String,
    pub command: String,
    pub request_seq: u64,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

/// Message framing on stdin/stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Protocol {
    /// Content-Length framed JSON.
    Tsserver,
    /// One JSON object per line.
    Legacy,
}

// =============================================================================
// Server State
// =============================================================================

pub struct Server {
    pub(crate) open_files: FxHashMap<String, Document>,
    response_seq: u64,
    limits: ScopeLimits,
}

impl Default for Server {
    fn default() -> Self {
        Self::new(ScopeLimits::default())
    }
}

impl Server {
    pub fn new(limits: ScopeLimits) -> Self {
        Server {
            open_files: FxHashMap::default(),
            response_seq: 0,
            limits,
        }
    }

    pub fn document(&self, file: &str) -> Option<&Document> {
        self.open_files.get(file)
    }

    fn next_seq(&mut self) -> u64 {
        self.response_seq += 1;
        self.response_seq
    }

    fn response(
        &mut self,
        request: &TsServerRequest,
        success: bool,
        message: Option<String>,
        body: Option<serde_json::Value>,
    ) -> TsServerResponse {
        TsServerResponse {
            seq: self.next_seq(),
            msg_type: "response".to_string(),
            command: request.command.clone(),
            request_seq: request.seq,
            success,
            message,
            body,
        }
    }

    fn ok(&mut self, request: &TsServerRequest, body: Option<serde_json::Value>) -> TsServerResponse {
        self.response(request, true, None, body)
    }

    fn error(&mut self, request: &TsServerRequest, message: String) -> TsServerResponse {
        warn!(command = %request.command, %message, "request failed");
        self.response(request, false, Some(message), None)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub fn handle_request(&mut self, request: &TsServerRequest) -> TsServerResponse {
        debug!(seq = request.seq, command = %request.command, "request");
        match request.command.as_str() {
            "open" => self.handle_open(request),
            "close" => self.handle_close(request),
            "change" => self.handle_change(request),
            PROVIDE_INLINE_VALUES => self.handle_provide_inline_values(request),
            "exit" => self.ok(request, None),
            _ => self.error(request, format!("Unrecognized command: {}", request.command)),
        }
    }

    fn handle_open(&mut self, request: &TsServerRequest) -> TsServerResponse {
        let args = &request.arguments;
        let Some(file) = args.get("file").and_then(|v| v.as_str()) else {
            return self.error(request, "open: missing 'file'".to_string());
        };
        let text = match args.get("fileContent").and_then(|v| v.as_str()) {
            Some(content) => content.to_string(),
            None => match std::fs::read_to_string(file) {
                Ok(content) => content,
                Err(err) => return self.error(request, format!("open: cannot read {file}: {err}")),
            },
        };
        info!(file, bytes = text.len(), "open");
        self.open_files
            .insert(file.to_string(), Document::new(file, text));
        self.ok(request, None)
    }

    fn handle_close(&mut self, request: &TsServerRequest) -> TsServerResponse {
        if let Some(file) = request.arguments.get("file").and_then(|v| v.as_str()) {
            if self.open_files.remove(file).is_some() {
                info!(file, "close");
            }
        }
        self.ok(request, None)
    }

    /// Either `fileContent` replaces the document, or `insertString` is
    /// spliced between `line`/`offset` and `endLine`/`endOffset`.
    fn handle_change(&mut self, request: &TsServerRequest) -> TsServerResponse {
        let args = &request.arguments;
        let Some(file) = args.get("file").and_then(|v| v.as_str()) else {
            return self.error(request, "change: missing 'file'".to_string());
        };
        let Some(document) = self.open_files.get_mut(file) else {
            debug!(file, "change for a file that is not open");
            return self.ok(request, None);
        };

        if let Some(content) = args.get("fileContent").and_then(|v| v.as_str()) {
            document.replace(content.to_string());
        } else {
            let line = arg_u32(args, "line").unwrap_or(1);
            let offset = arg_u32(args, "offset").unwrap_or(1);
            let end_line = arg_u32(args, "endLine").unwrap_or(line);
            let end_offset = arg_u32(args, "endOffset").unwrap_or(offset);
            let insert = args
                .get("insertString")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            document.splice(
                Location::LineOffset { line, offset },
                Location::LineOffset {
                    line: end_line,
                    offset: end_offset,
                },
                insert,
            );
        }
        self.ok(request, None)
    }

    fn handle_provide_inline_values(&mut self, request: &TsServerRequest) -> TsServerResponse {
        let args = &request.arguments;
        let Some(file) = args.get("file").and_then(|v| v.as_str()) else {
            return self.error(request, "provideInlineValues: missing 'file'".to_string());
        };
        let location = match (
            arg_u32(args, "line"),
            arg_u32(args, "offset"),
            arg_u32(args, "position"),
        ) {
            (Some(line), Some(offset), _) => Location::LineOffset { line, offset },
            (_, _, Some(position)) => Location::Position(position),
            _ => {
                return self.error(
                    request,
                    "provideInlineValues: expected 'line'/'offset' or 'position'".to_string(),
                );
            }
        };
        let visible = arg_u32(args, "start").zip(arg_u32(args, "length"));

        // The editor can ask before `open` lands
        let Some(document) = self.open_files.get(file) else {
            debug!(file, "inline values for a file that is not open");
            return self.ok(request, Some(serde_json::Value::Array(Vec::new())));
        };

        let values = document.wire_inline_values(location, visible, self.limits);
        debug!(file, count = values.len(), "inline values");
        match serde_json::to_value(values) {
            Ok(body) => self.ok(request, Some(body)),
            Err(err) => self.error(request, format!("provideInlineValues: {err}")),
        }
    }

    // =========================================================================
    // Protocol loops
    // =========================================================================

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        protocol: Protocol,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<()> {
        loop {
            let message = match protocol {
                Protocol::Tsserver => read_content_length_message(reader)?,
                Protocol::Legacy => read_line_message(reader)?,
            };
            let Some(message) = message else {
                debug!("input closed");
                break;
            };
            if message.trim().is_empty() {
                continue;
            }

            let request = match serde_json::from_str::<TsServerRequest>(&message) {
                Ok(request) => request,
                Err(err) => {
                    warn!(%err, "invalid request");
                    let response = TsServerResponse {
                        seq: self.next_seq(),
                        msg_type: "response".to_string(),
                        command: "unknown".to_string(),
                        request_seq: 0,
                        success: false,
                        message: Some(format!("invalid request: {err}")),
                        body: None,
                    };
                    write_message(protocol, writer, &response)?;
                    continue;
                }
            };

            let response = self.handle_request(&request);
            write_message(protocol, writer, &response)?;
            if request.command == "exit" {
                info!("exit requested");
                break;
            }
        }
        Ok(())
    }
}

fn arg_u32(args: &serde_json::Value, key: &str) -> Option<u32> {
    args.get(key)
        .and_then(serde_json::Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
}

// =============================================================================
// Framing
// =============================================================================

/// Read one `Content-Length` framed message. A bare JSON line is accepted
/// too. Returns `None` at end of input.
pub fn read_content_length_message<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut header_line = String::new();
    loop {
        header_line.clear();
        if reader.read_line(&mut header_line)? == 0 {
            return Ok(None);
        }
        if !header_line.trim().is_empty() {
            break;
        }
    }

    let header = header_line.trim();
    let Some(length) = header.strip_prefix("Content-Length:") else {
        return Ok(Some(header.to_string()));
    };
    let length = length
        .trim()
        .parse::<usize>()
        .with_context(|| format!("invalid Content-Length: {}", length.trim()))?;

    // Remaining headers up to the blank separator
    let mut separator = String::new();
    loop {
        separator.clear();
        if reader.read_line(&mut separator)? == 0 || separator.trim().is_empty() {
            break;
        }
    }

    let mut body = vec![0u8; length];
    reader
        .read_exact(&mut body)
        .context("message body shorter than Content-Length")?;
    String::from_utf8(body)
        .map(Some)
        .context("invalid UTF-8 in message body")
}

fn read_line_message<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader
        .read_line(&mut line)
        .context("failed to read from stdin")?
        == 0
    {
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn write_message<W: Write>(
    protocol: Protocol,
    writer: &mut W,
    response: &TsServerResponse,
) -> Result<()> {
    let json = serde_json::to_string(response)?;
    match protocol {
        Protocol::Tsserver => write!(writer, "Content-Length: {}\r\n\r\n{}", json.len(), json)?,
        Protocol::Legacy => writeln!(writer, "{json}")?,
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/server_tests.rs"]
mod tests;
