//! Single-line output buffer for the printer.
//!
//! Everything the printer writes ends up on one line: line breaks collapse
//! to a single space and indentation is ignored. A trailing semicolon can be
//! deferred so that the last one of the output is dropped while the ones
//! followed by more text are kept.

/// Output buffer that keeps everything on one line.
#[derive(Debug, Default)]
pub struct SourceWriter {
    output: String,
    pending_semicolon: bool,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SourceWriter {
            output: String::with_capacity(capacity),
            pending_semicolon: false,
        }
    }

    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.commit_pending_semicolon();
        self.output.push_str(text);
    }

    pub fn write_char(&mut self, ch: char) {
        self.commit_pending_semicolon();
        self.output.push(ch);
    }

    pub fn write_space(&mut self) {
        self.write_char(' ');
    }

    /// A line break. Collapses to one space and never doubles one.
    pub fn write_line(&mut self) {
        self.commit_pending_semicolon();
        if !self.output.is_empty() && !self.output.ends_with(' ') {
            self.output.push(' ');
        }
    }

    /// Defer a `;` until something else is written.
    pub fn write_trailing_semicolon(&mut self) {
        self.commit_pending_semicolon();
        self.pending_semicolon = true;
    }

    fn commit_pending_semicolon(&mut self) {
        if self.pending_semicolon {
            self.pending_semicolon = false;
            self.output.push(';');
        }
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    /// Take the written text, dropping a deferred trailing semicolon.
    pub fn take_output(&mut self) -> String {
        self.pending_semicolon = false;
        let mut text = std::mem::take(&mut self.output);
        let trimmed = text.trim_end_matches(' ').len();
        text.truncate(trimmed);
        text
    }

    pub fn clear(&mut self) {
        self.output.clear();
        self.pending_semicolon = false;
    }
}

#[cfg(test)]
#[path = "../tests/source_writer_tests.rs"]
mod tests;
