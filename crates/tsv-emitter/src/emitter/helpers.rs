use super::Printer;
use super::comments::{CommentKind, get_leading_comment_ranges};
use tsv_parser::parser::{NodeIndex, NodeList};

impl<'a> Printer<'a> {
    // =========================================================================
    // Output Helpers (delegate to SourceWriter)
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(super) fn write_space(&mut self) {
        self.writer.write_space();
    }

    /// Line breaks collapse to one space on single-line output.
    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    /// Write a semicolon (respecting options).
    pub(super) fn write_semicolon(&mut self) {
        if self.options.omit_trailing_semicolon {
            self.writer.write_trailing_semicolon();
        } else {
            self.write(";");
        }
    }

    /// Source text between two offsets, empty when out of range.
    pub(super) fn source_slice(&self, start: u32, end: u32) -> &'a str {
        self.source_text
            .and_then(|text| text.get(start as usize..end as usize))
            .unwrap_or("")
    }

    // =========================================================================
    // Emitter Helpers
    // =========================================================================

    pub(super) fn emit_comma_separated(&mut self, nodes: &[NodeIndex]) {
        let mut first = true;
        for &idx in nodes {
            if !first {
                self.write(", ");
            }
            first = false;
            self.emit(idx);
        }
    }

    /// Comma list that keeps a trailing comma written in source.
    pub(super) fn emit_comma_list(&mut self, list: &NodeList) {
        self.emit_comma_separated(&list.nodes);
        if list.has_trailing_comma && !list.is_empty() {
            self.write(",");
        }
    }

    /// `<T, U>` when present.
    pub(super) fn emit_type_arguments(&mut self, list: &Option<NodeList>) {
        if let Some(list) = list {
            self.write("<");
            self.emit_comma_separated(&list.nodes);
            self.write(">");
        }
    }

    /// `: T` when the annotation is present.
    pub(super) fn emit_type_annotation(&mut self, type_node: NodeIndex) {
        if type_node.is_some() {
            self.write(": ");
            self.emit(type_node);
        }
    }

    /// ` = expr` when the initializer is present.
    pub(super) fn emit_initializer(&mut self, initializer: NodeIndex) {
        if initializer.is_some() {
            self.write(" = ");
            self.emit(initializer);
        }
    }

    /// Statements of a block-like body, one per (collapsed) line.
    pub(super) fn emit_statement_list(&mut self, statements: &NodeList) {
        for &statement in &statements.nodes {
            self.write_line();
            self.emit_leading_comments(statement);
            self.emit(statement);
        }
    }

    /// `{ ... }` around a statement list; an empty list prints `{ }`.
    pub(super) fn emit_braced_statements(&mut self, statements: &NodeList) {
        self.write("{");
        if statements.is_empty() {
            self.write_space();
        } else {
            self.emit_statement_list(statements);
            self.write_line();
        }
        self.write("}");
    }

    /// A statement nested under `if`/`while`/`for`/labels.
    pub(super) fn emit_embedded_statement(&mut self, statement: NodeIndex) {
        self.write_space();
        self.emit(statement);
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Block comments between a node's full start and its first token.
    pub(super) fn emit_leading_comments(&mut self, idx: NodeIndex) {
        if self.options.remove_comments {
            return;
        }
        let (Some(text), Some(node)) = (self.source_text, self.arena.get(idx)) else {
            return;
        };
        let start = self.arena.get_start(idx);
        for comment in get_leading_comment_ranges(text, node.pos as usize) {
            if comment.end > start {
                break;
            }
            if comment.kind == CommentKind::MultiLine {
                let text = self.source_slice(comment.pos, comment.end);
                for (i, line) in text.lines().enumerate() {
                    if i > 0 {
                        self.write_line();
                    }
                    self.write(line.trim());
                }
                self.write_space();
            }
        }
    }

    // =========================================================================
    // Modifier Helpers
    // =========================================================================

    /// Decorators and modifier keywords, each followed by a space.
    pub(super) fn emit_modifiers(&mut self, modifiers: &Option<NodeList>) {
        let Some(list) = modifiers else {
            return;
        };
        for &idx in &list.nodes {
            if self.arena.get(idx).is_some() {
                self.emit(idx);
                self.write_space();
            }
        }
    }
}
