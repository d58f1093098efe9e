use super::Printer;
use tsv_parser::parser::node::Node;
use tsv_parser::parser::{NodeIndex, node_flags, syntax_kind_ext};

impl<'a> Printer<'a> {
    // =========================================================================
    // Blocks
    // =========================================================================

    pub(super) fn emit_source_file(&mut self, node: &Node) {
        let Some(source) = self.arena.get_source_file(node) else {
            return;
        };
        self.emit_statement_list(&source.statements);
    }

    pub(super) fn emit_block(&mut self, node: &Node) {
        let Some(block) = self.arena.get_block(node) else {
            return;
        };
        self.emit_braced_statements(&block.statements);
    }

    // =========================================================================
    // Variables and expressions
    // =========================================================================

    pub(super) fn emit_variable_statement(&mut self, node: &Node) {
        let Some(var_stmt) = self.arena.get_variable(node) else {
            return;
        };
        self.emit_modifiers(&var_stmt.modifiers);
        for &list in &var_stmt.declarations.nodes {
            self.emit(list);
        }
        self.write_semicolon();
    }

    pub(super) fn emit_variable_declaration_list(&mut self, node: &Node) {
        let Some(list) = self.arena.get_variable(node) else {
            return;
        };
        let keyword = if node.flags & node_flags::AWAIT_USING == node_flags::AWAIT_USING {
            "await using"
        } else if node.flags & node_flags::USING != 0 {
            "using"
        } else if node.flags & node_flags::CONST != 0 {
            "const"
        } else if node.flags & node_flags::LET != 0 {
            "let"
        } else {
            "var"
        };
        self.write(keyword);
        self.write_space();
        self.emit_comma_separated(&list.declarations.nodes);
    }

    pub(super) fn emit_variable_declaration(&mut self, node: &Node) {
        let Some(decl) = self.arena.get_variable_declaration(node) else {
            return;
        };
        self.emit(decl.name);
        if decl.exclamation_token {
            self.write("!");
        }
        self.emit_type_annotation(decl.type_annotation);
        self.emit_initializer(decl.initializer);
    }

    pub(super) fn emit_expression_statement(&mut self, node: &Node) {
        let Some(stmt) = self.arena.get_expression_statement(node) else {
            return;
        };
        self.emit(stmt.expression);
        self.write_semicolon();
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    pub(super) fn emit_if_statement(&mut self, node: &Node) {
        let Some(if_stmt) = self.arena.get_if_statement(node) else {
            return;
        };

        self.write("if (");
        self.emit(if_stmt.expression);
        self.write(")");
        self.emit_embedded_statement(if_stmt.then_statement);

        if if_stmt.else_statement.is_some() {
            self.write_line();
            self.write("else");
            self.emit_embedded_statement(if_stmt.else_statement);
        }
    }

    pub(super) fn emit_do_statement(&mut self, node: &Node) {
        let Some(loop_stmt) = self.arena.get_loop(node) else {
            return;
        };
        self.write("do");
        self.emit_embedded_statement(loop_stmt.statement);
        self.write_line();
        self.write("while (");
        self.emit(loop_stmt.condition);
        self.write(")");
        self.write_semicolon();
    }

    pub(super) fn emit_while_statement(&mut self, node: &Node) {
        let Some(loop_stmt) = self.arena.get_loop(node) else {
            return;
        };
        self.write("while (");
        self.emit(loop_stmt.condition);
        self.write(")");
        self.emit_embedded_statement(loop_stmt.statement);
    }

    /// `for (init; cond; incr) body`, empty parts print as `for (;;)`.
    pub(super) fn emit_for_statement(&mut self, node: &Node) {
        let Some(loop_stmt) = self.arena.get_loop(node) else {
            return;
        };
        self.write("for (");
        self.emit(loop_stmt.initializer);
        self.write(";");
        self.emit_with_leading_space(loop_stmt.condition);
        self.write(";");
        self.emit_with_leading_space(loop_stmt.incrementor);
        self.write(")");
        self.emit_embedded_statement(loop_stmt.statement);
    }

    fn emit_with_leading_space(&mut self, idx: NodeIndex) {
        if idx.is_some() {
            self.write_space();
            self.emit(idx);
        }
    }

    pub(super) fn emit_for_in_or_of(&mut self, node: &Node) {
        let Some(for_stmt) = self.arena.get_for_in_of(node) else {
            return;
        };
        self.write("for");
        if for_stmt.await_modifier {
            self.write(" await");
        }
        self.write(" (");
        self.emit(for_stmt.initializer);
        self.write(if node.kind == syntax_kind_ext::FOR_IN_STATEMENT {
            " in "
        } else {
            " of "
        });
        self.emit(for_stmt.expression);
        self.write(")");
        self.emit_embedded_statement(for_stmt.statement);
    }

    pub(super) fn emit_jump_statement(&mut self, node: &Node) {
        let Some(jump) = self.arena.get_jump_data(node) else {
            return;
        };
        self.write(if node.kind == syntax_kind_ext::BREAK_STATEMENT {
            "break"
        } else {
            "continue"
        });
        self.emit_with_leading_space(jump.label);
        self.write_semicolon();
    }

    pub(super) fn emit_return_or_throw(&mut self, node: &Node) {
        let Some(stmt) = self.arena.get_return_statement(node) else {
            return;
        };
        self.write(if node.kind == syntax_kind_ext::RETURN_STATEMENT {
            "return"
        } else {
            "throw"
        });
        self.emit_with_leading_space(stmt.expression);
        self.write_semicolon();
    }

    pub(super) fn emit_with_statement(&mut self, node: &Node) {
        let Some(with_stmt) = self.arena.get_with_statement(node) else {
            return;
        };
        self.write("with (");
        self.emit(with_stmt.expression);
        self.write(")");
        self.emit_embedded_statement(with_stmt.statement);
    }

    pub(super) fn emit_switch_statement(&mut self, node: &Node) {
        let Some(switch) = self.arena.get_switch(node) else {
            return;
        };
        self.write("switch (");
        self.emit(switch.expression);
        self.write(") ");
        self.emit(switch.case_block);
    }

    pub(super) fn emit_case_block(&mut self, node: &Node) {
        let Some(block) = self.arena.get_block(node) else {
            return;
        };
        self.emit_braced_statements(&block.statements);
    }

    pub(super) fn emit_case_clause(&mut self, node: &Node) {
        let Some(clause) = self.arena.get_case_clause(node) else {
            return;
        };
        if node.kind == syntax_kind_ext::DEFAULT_CLAUSE {
            self.write("default");
        } else {
            self.write("case ");
            self.emit(clause.expression);
        }
        self.write(":");
        self.emit_statement_list(&clause.statements);
    }

    pub(super) fn emit_labeled_statement(&mut self, node: &Node) {
        let Some(labeled) = self.arena.get_labeled_statement(node) else {
            return;
        };
        self.emit(labeled.label);
        self.write(":");
        self.emit_embedded_statement(labeled.statement);
    }

    pub(super) fn emit_try_statement(&mut self, node: &Node) {
        let Some(try_stmt) = self.arena.get_try(node) else {
            return;
        };
        self.write("try ");
        self.emit(try_stmt.try_block);
        self.emit_with_leading_space(try_stmt.catch_clause);
        if try_stmt.finally_block.is_some() {
            self.write(" finally ");
            self.emit(try_stmt.finally_block);
        }
    }

    pub(super) fn emit_catch_clause(&mut self, node: &Node) {
        let Some(catch) = self.arena.get_catch_clause(node) else {
            return;
        };
        self.write("catch ");
        if catch.variable_declaration.is_some() {
            self.write("(");
            self.emit(catch.variable_declaration);
            self.write(") ");
        }
        self.emit(catch.block);
    }
}
