use super::Printer;
use tsv_parser::parser::node::Node;
use tsv_scanner::{SyntaxKind, skip_trivia};

impl<'a> Printer<'a> {
    // =========================================================================
    // Literals
    // =========================================================================

    pub(super) fn emit_identifier(&mut self, node: &Node) {
        if let Some(ident) = self.arena.get_identifier(node) {
            self.write(&ident.escaped_text);
        }
    }

    /// Start of a node's first token, leading trivia skipped.
    pub(super) fn token_start(&self, node: &Node) -> u32 {
        match self.source_text {
            Some(text) if (node.pos as usize) < text.len() => {
                (skip_trivia(text, node.pos as usize) as u32).min(node.end)
            }
            _ => node.pos,
        }
    }

    /// Literal tokens keep their source spelling (quotes, escapes, numeric
    /// separators, regex flags, raw template text).
    pub(super) fn emit_literal(&mut self, node: &Node) {
        let raw = self.source_slice(self.token_start(node), node.end);
        if !raw.is_empty() {
            self.write(raw);
            return;
        }
        let Some(lit) = self.arena.get_literal(node) else {
            return;
        };
        if node.kind == SyntaxKind::StringLiteral as u16 {
            self.write("\"");
            self.emit_escaped_string(&lit.text, '"');
            self.write("\"");
        } else {
            self.write(&lit.text);
        }
    }

    fn emit_escaped_string(&mut self, s: &str, quote_char: char) {
        for ch in s.chars() {
            match ch {
                '\n' => self.write("\\n"),
                '\r' => self.write("\\r"),
                '\t' => self.write("\\t"),
                '\\' => self.write("\\\\"),
                c if c == quote_char => {
                    self.writer.write_char('\\');
                    self.writer.write_char(c);
                }
                c => self.writer.write_char(c),
            }
        }
    }

    // =========================================================================
    // Names
    // =========================================================================

    pub(super) fn emit_qualified_name(&mut self, node: &Node) {
        let Some(name) = self.arena.get_qualified_name(node) else {
            return;
        };
        self.emit(name.left);
        self.write(".");
        self.emit(name.right);
    }

    pub(super) fn emit_computed_property_name(&mut self, node: &Node) {
        let Some(computed) = self.arena.get_computed_property(node) else {
            return;
        };
        self.write("[");
        self.emit(computed.expression);
        self.write("]");
    }

    pub(super) fn emit_decorator(&mut self, node: &Node) {
        let Some(decorator) = self.arena.get_decorator(node) else {
            return;
        };
        self.write("@");
        self.emit(decorator.expression);
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Template expressions and template literal types share one shape:
    /// the head, then `${ expr }` spans each closed by a middle or tail.
    pub(super) fn emit_template_expression(&mut self, node: &Node) {
        let Some(template) = self.arena.get_template_expr(node) else {
            return;
        };
        self.emit(template.head);
        for &span in &template.template_spans.nodes {
            self.emit(span);
        }
    }

    pub(super) fn emit_template_span(&mut self, node: &Node) {
        let Some(span) = self.arena.get_template_span(node) else {
            return;
        };
        self.emit(span.expression);
        self.emit(span.literal);
    }

    // =========================================================================
    // Array and object literals
    // =========================================================================

    pub(super) fn emit_array_literal(&mut self, node: &Node) {
        let Some(literal) = self.arena.get_literal_expr(node) else {
            return;
        };
        self.write("[");
        self.emit_comma_list(&literal.elements);
        self.write("]");
    }

    pub(super) fn emit_object_literal(&mut self, node: &Node) {
        let Some(literal) = self.arena.get_literal_expr(node) else {
            return;
        };
        if literal.elements.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        self.emit_comma_list(&literal.elements);
        self.write(" }");
    }

    pub(super) fn emit_property_assignment(&mut self, node: &Node) {
        let Some(prop) = self.arena.get_property_assignment(node) else {
            return;
        };
        self.emit(prop.name);
        self.write(": ");
        self.emit(prop.initializer);
    }

    pub(super) fn emit_shorthand_property(&mut self, node: &Node) {
        let Some(prop) = self.arena.get_shorthand_property(node) else {
            return;
        };
        self.emit(prop.name);
        self.emit_initializer(prop.object_assignment_initializer);
    }
}
