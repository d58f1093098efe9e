//! Destructuring in declarations, parameters and catch clauses.

use super::Printer;
use tsv_parser::parser::node::Node;
use tsv_parser::syntax_kind_ext::OBJECT_BINDING_PATTERN;

impl<'a> Printer<'a> {
    /// `{ a, b: c }` or `[a, , ...rest]`.
    pub(super) fn emit_binding_pattern(&mut self, node: &Node) {
        let Some(pattern) = self.arena.get_binding_pattern(node) else {
            return;
        };
        let elements = &pattern.elements;

        if node.kind != OBJECT_BINDING_PATTERN {
            self.write("[");
            self.emit_comma_list(elements);
            self.write("]");
        } else if elements.nodes.is_empty() {
            self.write("{}");
        } else {
            self.write("{ ");
            self.emit_comma_list(elements);
            self.write(" }");
        }
    }

    /// `name`, `name = init`, `key: name` or `...rest`.
    pub(super) fn emit_binding_element(&mut self, node: &Node) {
        let Some(element) = self.arena.get_binding_element(node) else {
            return;
        };

        if element.dot_dot_dot_token {
            self.write("...");
        }
        if element.property_name.is_some() {
            self.emit(element.property_name);
            self.write(": ");
        }
        self.emit(element.name);
        self.emit_initializer(element.initializer);
    }
}
