use super::{Printer, get_operator_text};
use tsv_parser::parser::node::Node;
use tsv_parser::parser::{NodeIndex, syntax_kind_ext};
use tsv_scanner::SyntaxKind;

impl<'a> Printer<'a> {
    // =========================================================================
    // Expressions
    // =========================================================================

    pub(super) fn emit_binary_expression(&mut self, node: &Node) {
        let Some(binary) = self.arena.get_binary_expr(node) else {
            return;
        };

        self.emit(binary.left);
        // Comma operator: no space before, space after (e.g., `(1, 2, 3)`)
        if binary.operator_token == SyntaxKind::CommaToken as u16 {
            self.write(", ");
        } else {
            self.write_space();
            self.write(get_operator_text(binary.operator_token));
            self.write_space();
        }
        self.emit(binary.right);
    }

    pub(super) fn emit_prefix_unary(&mut self, node: &Node) {
        let Some(unary) = self.arena.get_unary_expr(node) else {
            return;
        };

        self.write(get_operator_text(unary.operator));
        // `- -x` and `+ ++x` must not fuse into `--x` / `+++x`
        if self.needs_space_before_operand(unary.operator, unary.operand) {
            self.write_space();
        }
        self.emit(unary.operand);
    }

    fn needs_space_before_operand(&self, operator: u16, operand: NodeIndex) -> bool {
        let Some(operand_node) = self.arena.get(operand) else {
            return false;
        };
        if operand_node.kind != syntax_kind_ext::PREFIX_UNARY_EXPRESSION {
            return false;
        }
        let Some(inner) = self.arena.get_unary_expr(operand_node) else {
            return false;
        };
        let plus = SyntaxKind::PlusToken as u16;
        let minus = SyntaxKind::MinusToken as u16;
        (operator == plus
            && (inner.operator == plus || inner.operator == SyntaxKind::PlusPlusToken as u16))
            || (operator == minus
                && (inner.operator == minus
                    || inner.operator == SyntaxKind::MinusMinusToken as u16))
    }

    pub(super) fn emit_postfix_unary(&mut self, node: &Node) {
        let Some(unary) = self.arena.get_unary_expr(node) else {
            return;
        };

        self.emit(unary.operand);
        self.write(get_operator_text(unary.operator));
    }

    /// `delete x`, `typeof x`, `void x`, `await x`.
    pub(super) fn emit_keyword_unary(&mut self, node: &Node) {
        let Some(unary) = self.arena.get_unary_expr_ex(node) else {
            return;
        };
        let keyword = match node.kind {
            syntax_kind_ext::DELETE_EXPRESSION => "delete ",
            syntax_kind_ext::TYPE_OF_EXPRESSION => "typeof ",
            syntax_kind_ext::VOID_EXPRESSION => "void ",
            _ => "await ",
        };
        self.write(keyword);
        self.emit(unary.expression);
    }

    pub(super) fn emit_yield(&mut self, node: &Node) {
        let Some(unary) = self.arena.get_unary_expr_ex(node) else {
            return;
        };
        self.write("yield");
        if unary.asterisk_token {
            self.write("*");
        }
        if unary.expression.is_some() {
            self.write_space();
            self.emit(unary.expression);
        }
    }

    pub(super) fn emit_spread(&mut self, node: &Node) {
        let Some(unary) = self.arena.get_unary_expr_ex(node) else {
            return;
        };
        self.write("...");
        self.emit(unary.expression);
    }

    pub(super) fn emit_non_null(&mut self, node: &Node) {
        let Some(unary) = self.arena.get_unary_expr_ex(node) else {
            return;
        };
        self.emit(unary.expression);
        self.write("!");
    }

    pub(super) fn emit_call_expression(&mut self, node: &Node) {
        let Some(call) = self.arena.get_call_expr(node) else {
            return;
        };

        self.emit(call.expression);
        if call.question_dot_token {
            self.write("?.");
        }
        self.emit_type_arguments(&call.type_arguments);
        self.write("(");
        if let Some(ref args) = call.arguments {
            self.emit_comma_separated(&args.nodes);
        }
        self.write(")");
    }

    pub(super) fn emit_new_expression(&mut self, node: &Node) {
        let Some(call) = self.arena.get_call_expr(node) else {
            return;
        };

        self.write("new ");
        self.emit(call.expression);
        self.emit_type_arguments(&call.type_arguments);
        // Only emit parentheses if they were present in source (arguments is Some)
        if let Some(ref args) = call.arguments {
            self.write("(");
            self.emit_comma_separated(&args.nodes);
            self.write(")");
        }
    }

    pub(super) fn emit_property_access(&mut self, node: &Node) {
        let Some(access) = self.arena.get_access_expr(node) else {
            return;
        };

        self.emit(access.expression);
        self.write(if access.question_dot_token { "?." } else { "." });
        self.emit(access.name_or_argument);
    }

    pub(super) fn emit_element_access(&mut self, node: &Node) {
        let Some(access) = self.arena.get_access_expr(node) else {
            return;
        };

        self.emit(access.expression);
        self.write(if access.question_dot_token { "?.[" } else { "[" });
        self.emit(access.name_or_argument);
        self.write("]");
    }

    pub(super) fn emit_tagged_template(&mut self, node: &Node) {
        let Some(tagged) = self.arena.get_tagged_template(node) else {
            return;
        };
        self.emit(tagged.tag);
        self.emit_type_arguments(&tagged.type_arguments);
        self.emit(tagged.template);
    }

    /// `<T>expr`
    pub(super) fn emit_type_assertion(&mut self, node: &Node) {
        let Some(assertion) = self.arena.get_type_assertion(node) else {
            return;
        };
        self.write("<");
        self.emit(assertion.type_node);
        self.write(">");
        self.emit(assertion.expression);
    }

    /// `expr as T` and `expr satisfies T`
    pub(super) fn emit_as_or_satisfies(&mut self, node: &Node) {
        let Some(assertion) = self.arena.get_type_assertion(node) else {
            return;
        };
        self.emit(assertion.expression);
        self.write(if node.kind == syntax_kind_ext::AS_EXPRESSION {
            " as "
        } else {
            " satisfies "
        });
        self.emit(assertion.type_node);
    }

    pub(super) fn emit_parenthesized(&mut self, node: &Node) {
        let Some(paren) = self.arena.get_parenthesized(node) else {
            return;
        };
        self.write("(");
        self.emit(paren.expression);
        self.write(")");
    }

    pub(super) fn emit_conditional(&mut self, node: &Node) {
        let Some(cond) = self.arena.get_conditional_expr(node) else {
            return;
        };
        self.emit(cond.condition);
        self.write(" ? ");
        self.emit(cond.when_true);
        self.write(" : ");
        self.emit(cond.when_false);
    }

    /// `Base<T>` in heritage clauses.
    pub(super) fn emit_expression_with_type_arguments(&mut self, node: &Node) {
        let Some(expr) = self.arena.get_expr_with_type_args(node) else {
            return;
        };
        self.emit(expr.expression);
        self.emit_type_arguments(&expr.type_arguments);
    }
}
