use super::{Printer, get_operator_text};
use tsv_parser::parser::node::Node;
use tsv_parser::parser::syntax_kind_ext;
use tsv_scanner::SyntaxKind;

impl<'a> Printer<'a> {
    // =========================================================================
    // Type References and Composites
    // =========================================================================

    pub(super) fn emit_type_reference(&mut self, node: &Node) {
        let Some(type_ref) = self.arena.get_type_ref(node) else {
            return;
        };
        self.emit(type_ref.type_name);
        self.emit_type_arguments(&type_ref.type_arguments);
    }

    /// Union and intersection members joined by `sep`.
    pub(super) fn emit_composite_type(&mut self, node: &Node, sep: &str) {
        let Some(composite) = self.arena.get_composite_type(node) else {
            return;
        };
        for (i, &member) in composite.types.nodes.iter().enumerate() {
            if i > 0 {
                self.write(sep);
            }
            self.emit(member);
        }
    }

    pub(super) fn emit_array_type(&mut self, node: &Node) {
        let Some(array) = self.arena.get_array_type(node) else {
            return;
        };
        self.emit(array.element_type);
        self.write("[]");
    }

    pub(super) fn emit_tuple_type(&mut self, node: &Node) {
        let Some(tuple) = self.arena.get_tuple_type(node) else {
            return;
        };
        self.write("[");
        self.emit_comma_list(&tuple.elements);
        self.write("]");
    }

    /// `...name?: T`
    pub(super) fn emit_named_tuple_member(&mut self, node: &Node) {
        let Some(member) = self.arena.get_named_tuple_member(node) else {
            return;
        };
        if member.dot_dot_dot_token {
            self.write("...");
        }
        self.emit(member.name);
        if member.question_token {
            self.write("?");
        }
        self.write(": ");
        self.emit(member.type_node);
    }

    pub(super) fn emit_optional_type(&mut self, node: &Node) {
        let Some(wrapped) = self.arena.get_wrapped_type(node) else {
            return;
        };
        self.emit(wrapped.type_node);
        self.write("?");
    }

    pub(super) fn emit_rest_type(&mut self, node: &Node) {
        let Some(wrapped) = self.arena.get_wrapped_type(node) else {
            return;
        };
        self.write("...");
        self.emit(wrapped.type_node);
    }

    pub(super) fn emit_parenthesized_type(&mut self, node: &Node) {
        let Some(wrapped) = self.arena.get_wrapped_type(node) else {
            return;
        };
        self.write("(");
        self.emit(wrapped.type_node);
        self.write(")");
    }

    // =========================================================================
    // Signatures
    // =========================================================================

    /// `(a: T) => R`, `abstract new () => R`
    pub(super) fn emit_function_type(&mut self, node: &Node) {
        let Some(func) = self.arena.get_function_type(node) else {
            return;
        };
        if func.is_abstract {
            self.write("abstract ");
        }
        if node.kind == syntax_kind_ext::CONSTRUCTOR_TYPE {
            self.write("new ");
        }
        self.emit_type_parameters(&func.type_parameters);
        self.emit_parameter_list(&func.parameters);
        self.write(" => ");
        self.emit(func.type_annotation);
    }

    pub(super) fn emit_type_query(&mut self, node: &Node) {
        let Some(query) = self.arena.get_type_query(node) else {
            return;
        };
        self.write("typeof ");
        self.emit(query.expr_name);
        self.emit_type_arguments(&query.type_arguments);
    }

    /// `{ a: string; b(): void; }`, an empty literal prints `{}`.
    pub(super) fn emit_type_literal(&mut self, node: &Node) {
        let Some(literal) = self.arena.get_type_literal(node) else {
            return;
        };
        if literal.members.nodes.is_empty() {
            self.write("{}");
            return;
        }
        self.emit_members(&literal.members);
    }

    pub(super) fn emit_property_signature(&mut self, node: &Node) {
        let Some(signature) = self.arena.get_signature(node) else {
            return;
        };
        self.emit_modifiers(&signature.modifiers);
        self.emit(signature.name);
        if signature.question_token {
            self.write("?");
        }
        self.emit_type_annotation(signature.type_annotation);
        self.write_semicolon();
    }

    /// Method, call and construct signatures.
    pub(super) fn emit_signature_member(&mut self, node: &Node) {
        let Some(signature) = self.arena.get_signature(node) else {
            return;
        };
        self.emit_modifiers(&signature.modifiers);
        match node.kind {
            syntax_kind_ext::METHOD_SIGNATURE => {
                self.emit(signature.name);
                if signature.question_token {
                    self.write("?");
                }
            }
            syntax_kind_ext::CONSTRUCT_SIGNATURE => self.write("new "),
            _ => {}
        }
        self.emit_type_parameters(&signature.type_parameters);
        self.write("(");
        if let Some(parameters) = &signature.parameters {
            self.emit_comma_separated(&parameters.nodes);
        }
        self.write(")");
        self.emit_type_annotation(signature.type_annotation);
        self.write_semicolon();
    }

    /// `T is string`, `asserts x`, `asserts this is T`
    pub(super) fn emit_type_predicate(&mut self, node: &Node) {
        let Some(predicate) = self.arena.get_type_predicate(node) else {
            return;
        };
        if predicate.asserts_modifier {
            self.write("asserts ");
        }
        self.emit(predicate.parameter_name);
        if predicate.type_node.is_some() {
            self.write(" is ");
            self.emit(predicate.type_node);
        }
    }

    // =========================================================================
    // Type Operators
    // =========================================================================

    /// `keyof T`, `unique symbol`, `readonly T[]`
    pub(super) fn emit_type_operator(&mut self, node: &Node) {
        let Some(operator) = self.arena.get_type_operator(node) else {
            return;
        };
        self.write(get_operator_text(operator.operator));
        self.write_space();
        self.emit(operator.type_node);
    }

    pub(super) fn emit_indexed_access_type(&mut self, node: &Node) {
        let Some(access) = self.arena.get_indexed_access_type(node) else {
            return;
        };
        self.emit(access.object_type);
        self.write("[");
        self.emit(access.index_type);
        self.write("]");
    }

    /// `{ -readonly [K in keyof T as N]+?: T[K]; }`
    pub(super) fn emit_mapped_type(&mut self, node: &Node) {
        let Some(mapped) = self.arena.get_mapped_type(node) else {
            return;
        };
        self.write("{ ");
        if mapped.readonly_token != 0 {
            self.write_modifier_sign(mapped.readonly_token);
            self.write("readonly ");
        }

        self.write("[");
        if let Some(param) = self
            .arena
            .get(mapped.type_parameter)
            .and_then(|n| self.arena.get_type_parameter(n))
        {
            self.emit(param.name);
            self.write(" in ");
            self.emit(param.constraint);
        }
        if mapped.name_type.is_some() {
            self.write(" as ");
            self.emit(mapped.name_type);
        }
        self.write("]");

        if mapped.question_token != 0 {
            self.write_modifier_sign(mapped.question_token);
            self.write("?");
        }
        if mapped.type_node.is_some() {
            self.write(": ");
            self.emit(mapped.type_node);
        }
        self.write("; }");
    }

    /// Writes the `+`/`-` in front of a mapped type modifier, if any.
    fn write_modifier_sign(&mut self, token: u16) {
        if token == SyntaxKind::PlusToken as u16 {
            self.write("+");
        } else if token == SyntaxKind::MinusToken as u16 {
            self.write("-");
        }
    }

    /// `C extends E ? T : F`
    pub(super) fn emit_conditional_type(&mut self, node: &Node) {
        let Some(conditional) = self.arena.get_conditional_type(node) else {
            return;
        };
        self.emit(conditional.check_type);
        self.write(" extends ");
        self.emit(conditional.extends_type);
        self.write(" ? ");
        self.emit(conditional.true_type);
        self.write(" : ");
        self.emit(conditional.false_type);
    }

    pub(super) fn emit_infer_type(&mut self, node: &Node) {
        let Some(infer) = self.arena.get_infer_type(node) else {
            return;
        };
        self.write("infer ");
        self.emit(infer.type_parameter);
    }

    /// Literal types print their literal, including `-1`.
    pub(super) fn emit_literal_type(&mut self, node: &Node) {
        let Some(literal) = self.arena.get_literal_type(node) else {
            return;
        };
        self.emit(literal.literal);
    }
}
