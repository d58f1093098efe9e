//! Value extraction over the outermost located scope.

use super::InlineValue;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};
use tsv_common::TextSpan;
use tsv_common::limits::MAX_AST_DEPTH;
use tsv_emitter::{Printer, PrinterOptions};
use tsv_parser::parser::node::Node;
use tsv_parser::syntax_kind_ext::{self, is_type_node_kind};
use tsv_parser::{NodeArena, NodeIndex};
use tsv_scanner::{SyntaxKind, is_assignment_operator};

/// Constructs the extractor treats specially; everything else is walked
/// through its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueConstruct {
    /// Variable declaration, parameter or binding element.
    VariableLike,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    /// Function declaration, function expression or arrow function.
    FunctionLike,
    ClassLike,
    ForInOrOf,
    If,
    For,
    While,
    Do,
    Switch,
    CatchClause,
    CaseOrDefaultClause,
    UnaryExpression,
    BinaryExpression,
    Other,
}

impl ValueConstruct {
    fn classify(kind: u16) -> Self {
        use syntax_kind_ext::*;

        match kind {
            VARIABLE_DECLARATION | PARAMETER | BINDING_ELEMENT => ValueConstruct::VariableLike,
            PROPERTY_ASSIGNMENT => ValueConstruct::PropertyAssignment,
            SHORTHAND_PROPERTY_ASSIGNMENT => ValueConstruct::ShorthandPropertyAssignment,
            FUNCTION_DECLARATION | FUNCTION_EXPRESSION | ARROW_FUNCTION => {
                ValueConstruct::FunctionLike
            }
            CLASS_DECLARATION | CLASS_EXPRESSION => ValueConstruct::ClassLike,
            FOR_IN_STATEMENT | FOR_OF_STATEMENT => ValueConstruct::ForInOrOf,
            IF_STATEMENT => ValueConstruct::If,
            FOR_STATEMENT => ValueConstruct::For,
            WHILE_STATEMENT => ValueConstruct::While,
            DO_STATEMENT => ValueConstruct::Do,
            SWITCH_STATEMENT => ValueConstruct::Switch,
            CATCH_CLAUSE => ValueConstruct::CatchClause,
            CASE_CLAUSE | DEFAULT_CLAUSE => ValueConstruct::CaseOrDefaultClause,
            PREFIX_UNARY_EXPRESSION | POSTFIX_UNARY_EXPRESSION => ValueConstruct::UnaryExpression,
            BINARY_EXPRESSION => ValueConstruct::BinaryExpression,
            _ => ValueConstruct::Other,
        }
    }
}

/// Traversal state for one inline values query.
pub(super) struct ValueCollector<'a> {
    arena: &'a NodeArena,
    printer: Printer<'a>,
    scopes: FxHashSet<NodeIndex>,
    /// Full start of the token under the cursor.
    token_pos: u32,
    visible_span: TextSpan,
    values: Vec<InlineValue>,
    depth: u32,
    depth_exceeded: bool,
}

impl<'a> ValueCollector<'a> {
    pub(super) fn new(
        arena: &'a NodeArena,
        scopes: &[NodeIndex],
        token_pos: u32,
        visible_span: TextSpan,
    ) -> Self {
        let options = PrinterOptions {
            remove_comments: true,
            omit_trailing_semicolon: true,
        };
        ValueCollector {
            arena,
            printer: Printer::new(arena, options),
            scopes: scopes.iter().copied().collect(),
            token_pos,
            visible_span,
            values: Vec::new(),
            depth: 0,
            depth_exceeded: false,
        }
    }

    pub(super) fn into_values(self) -> Vec<InlineValue> {
        self.values
    }

    fn is_scope(&self, idx: NodeIndex) -> bool {
        self.scopes.contains(&idx)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub(super) fn visit(&mut self, idx: NodeIndex) {
        if self.depth >= MAX_AST_DEPTH {
            if !self.depth_exceeded {
                debug!(depth = self.depth, "ast depth limit reached, subtree skipped");
                self.depth_exceeded = true;
            }
            return;
        }
        self.depth += 1;
        self.visit_node(idx);
        self.depth -= 1;
    }

    fn visit_node(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };
        if node.full_width() == 0 {
            return;
        }

        if !self.is_scope(idx) {
            // Code after the cursor has not run yet
            if node.pos > self.token_pos {
                return;
            }
            if node.kind == syntax_kind_ext::BLOCK {
                return;
            }
        }

        if !self
            .visible_span
            .intersects_with(node.pos, node.full_width())
        {
            return;
        }

        if is_type_node_kind(node.kind) {
            return;
        }

        match ValueConstruct::classify(node.kind) {
            ValueConstruct::VariableLike => self.visit_variable_like(idx),
            ValueConstruct::PropertyAssignment => {
                if let Some(prop) = arena.get_property_assignment(node) {
                    self.append_evaluatable(prop.initializer, false);
                }
            }
            ValueConstruct::ShorthandPropertyAssignment => {
                if let Some(prop) = arena.get_shorthand_property(node) {
                    self.append_evaluatable(prop.name, false);
                }
            }
            ValueConstruct::FunctionLike => self.visit_function_like(idx, node),
            ValueConstruct::ClassLike => self.visit_class_like(idx, node),
            ValueConstruct::ForInOrOf => self.visit_for_in_or_of(idx, node),
            ValueConstruct::If => self.visit_if_statement(idx, node),
            ValueConstruct::For => self.visit_for_statement(idx, node),
            ValueConstruct::While | ValueConstruct::Do => self.visit_while_or_do(idx, node),
            ValueConstruct::Switch => self.visit_switch_statement(idx, node),
            ValueConstruct::CatchClause => self.visit_catch_clause(idx, node),
            ValueConstruct::CaseOrDefaultClause => self.visit_case_or_default_clause(idx),
            ValueConstruct::UnaryExpression | ValueConstruct::BinaryExpression => {
                if self.is_assignment_like(node) {
                    self.visit_assignment_like(node);
                } else {
                    self.visit_children(idx);
                }
            }
            ValueConstruct::Other => self.visit_children(idx),
        }
    }

    fn visit_children(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        arena.for_each_child(idx, &mut |child| self.visit(child));
    }

    // =========================================================================
    // Emission
    // =========================================================================

    fn append_evaluatable(&mut self, idx: NodeIndex, ignore_position: bool) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };
        if !ignore_position && node.end > self.token_pos {
            return;
        }
        let expression = self.printer.print_node(idx);
        if expression.is_empty() || self.printer.was_truncated() {
            return;
        }
        let span = TextSpan::from_bounds(self.arena.get_start(idx), node.end);
        trace!(start = span.start, length = span.length, %expression, "evaluatable expression");
        self.values
            .push(InlineValue::evaluatable_expression(span, expression));
    }

    fn append_variable_lookup(&mut self, name: NodeIndex) {
        let Some(node) = self.arena.get(name) else {
            return;
        };
        if node.end > self.token_pos {
            return;
        }
        let Some(text) = self.arena.get_identifier_text(name) else {
            return;
        };
        if text.is_empty() {
            return;
        }
        let span = TextSpan::from_bounds(self.arena.get_start(name), node.end);
        trace!(start = span.start, length = span.length, name = text, "variable lookup");
        self.values.push(InlineValue::variable_lookup(span, text));
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Variable declarations, parameters and binding elements.
    fn visit_variable_like(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };
        let parts = match node.kind {
            syntax_kind_ext::VARIABLE_DECLARATION => arena
                .get_variable_declaration(node)
                .map(|decl| (decl.name, decl.initializer)),
            syntax_kind_ext::PARAMETER => arena
                .get_parameter(node)
                .map(|param| (param.name, param.initializer)),
            syntax_kind_ext::BINDING_ELEMENT => arena
                .get_binding_element(node)
                .map(|elem| (elem.name, elem.initializer)),
            _ => None,
        };
        let Some((name, initializer)) = parts else {
            return;
        };
        if name.is_none() {
            return;
        }

        if self.is_identifier(name) {
            self.append_variable_lookup(name);
        } else {
            self.visit(name);
        }
        self.visit(initializer);
    }

    fn visit_function_like(&mut self, idx: NodeIndex, node: &Node) {
        let arena = self.arena;
        let Some(func) = arena.get_function(node) else {
            return;
        };
        if node.kind == syntax_kind_ext::FUNCTION_DECLARATION && func.name.is_some() {
            self.append_variable_lookup(func.name);
        }

        if !self.is_scope(idx) {
            return;
        }

        for &param in &func.parameters.nodes {
            self.visit_variable_like(param);
        }
        self.visit(func.body);
    }

    /// Class names only; members are walked when the class is a located scope.
    fn visit_class_like(&mut self, idx: NodeIndex, node: &Node) {
        let arena = self.arena;
        let Some(class) = arena.get_class(node) else {
            return;
        };
        if node.kind == syntax_kind_ext::CLASS_DECLARATION && class.name.is_some() {
            self.append_variable_lookup(class.name);
        }

        if !self.is_scope(idx) {
            return;
        }

        for &member in &class.members.nodes {
            self.visit(member);
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn visit_if_statement(&mut self, idx: NodeIndex, node: &Node) {
        let arena = self.arena;
        let Some(stmt) = arena.get_if_statement(node) else {
            return;
        };

        // `if ((m = next()))`: report the assignment, not the whole condition
        if self.is_parenthesized_assignment(stmt.expression) {
            self.visit(stmt.expression);
        } else {
            self.append_evaluatable(stmt.expression, self.is_scope(idx));
        }

        if !self.is_scope(idx) {
            return;
        }

        self.visit(stmt.then_statement);
        self.visit(stmt.else_statement);
    }

    fn visit_for_statement(&mut self, idx: NodeIndex, node: &Node) {
        if !self.is_scope(idx) {
            return;
        }
        let arena = self.arena;
        let Some(stmt) = arena.get_loop(node) else {
            return;
        };

        if stmt.initializer.is_some() {
            self.visit_for_initializer(stmt.initializer);
        }
        if stmt.condition.is_some() {
            self.append_evaluatable(stmt.condition, true);
        }
        if stmt.incrementor.is_some() {
            // `i++, j--` combines several incrementors
            let structural = arena.get(stmt.incrementor).is_some_and(|inc| {
                self.is_assignment_like(inc) || self.is_comma_expression(inc)
            });
            if structural {
                self.visit(stmt.incrementor);
            } else {
                self.append_evaluatable(stmt.incrementor, false);
            }
        }

        self.visit(stmt.statement);
    }

    fn visit_for_in_or_of(&mut self, idx: NodeIndex, node: &Node) {
        if !self.is_scope(idx) {
            return;
        }
        let arena = self.arena;
        let Some(stmt) = arena.get_for_in_of(node) else {
            return;
        };

        self.visit_for_initializer(stmt.initializer);
        self.append_evaluatable(stmt.expression, true);
        self.visit(stmt.statement);
    }

    /// Declaration lists bind each declaration; a bare expression is
    /// reported as a whole.
    fn visit_for_initializer(&mut self, initializer: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(initializer) else {
            return;
        };
        if node.kind == syntax_kind_ext::VARIABLE_DECLARATION_LIST {
            if let Some(list) = arena.get_variable(node) {
                for &decl in &list.declarations.nodes {
                    self.visit_variable_like(decl);
                }
            }
        } else {
            self.append_evaluatable(initializer, false);
        }
    }

    fn visit_while_or_do(&mut self, idx: NodeIndex, node: &Node) {
        let arena = self.arena;
        let Some(stmt) = arena.get_loop(node) else {
            return;
        };
        // Conditions of a located scope are shown even after the cursor
        self.append_evaluatable(stmt.condition, self.is_scope(idx));

        if !self.is_scope(idx) {
            return;
        }

        self.visit(stmt.statement);
    }

    fn visit_switch_statement(&mut self, idx: NodeIndex, node: &Node) {
        let arena = self.arena;
        let Some(stmt) = arena.get_switch(node) else {
            return;
        };
        self.append_evaluatable(stmt.expression, self.is_scope(idx));

        if !self.is_scope(idx) {
            return;
        }

        let Some(case_block) = arena
            .get(stmt.case_block)
            .and_then(|block| arena.get_block(block))
        else {
            return;
        };
        for &clause in &case_block.statements.nodes {
            self.visit_case_or_default_clause(clause);
        }
    }

    /// Case labels are reported even when they sit after the cursor.
    fn visit_case_or_default_clause(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(clause) = arena.get(idx).and_then(|node| arena.get_case_clause(node)) else {
            return;
        };
        if clause.expression.is_some() {
            self.append_evaluatable(clause.expression, true);
        }
        for &statement in &clause.statements.nodes {
            self.visit(statement);
        }
    }

    fn visit_catch_clause(&mut self, idx: NodeIndex, node: &Node) {
        if !self.is_scope(idx) {
            return;
        }
        let arena = self.arena;
        let Some(clause) = arena.get_catch_clause(node) else {
            return;
        };
        if clause.variable_declaration.is_some() {
            self.visit_variable_like(clause.variable_declaration);
        }
        self.visit(clause.block);
    }

    // =========================================================================
    // Assignments
    // =========================================================================

    /// `target = value`, `target += value`, `++target`, `target--`.
    fn visit_assignment_like(&mut self, node: &Node) {
        debug_assert!(
            self.is_assignment_like(node),
            "expected an assignment-like expression, got {}",
            syntax_kind_ext::kind_name(node.kind)
        );
        let arena = self.arena;

        let (target, value) = match node.kind {
            syntax_kind_ext::BINARY_EXPRESSION => match arena.get_binary_expr(node) {
                Some(binary) => (binary.left, Some(binary.right)),
                None => return,
            },
            _ => match arena.get_unary_expr(node) {
                Some(unary) => (unary.operand, None),
                None => return,
            },
        };

        if self.is_identifier(target) {
            self.append_variable_lookup(target);
        } else if self.is_access_expression(target) {
            self.append_evaluatable(target, false);
        }

        if let Some(value) = value {
            self.visit(value);
        }
    }

    // =========================================================================
    // Classification helpers
    // =========================================================================

    fn is_identifier(&self, idx: NodeIndex) -> bool {
        self.arena
            .get(idx)
            .is_some_and(|node| node.kind == SyntaxKind::Identifier as u16)
    }

    fn is_access_expression(&self, idx: NodeIndex) -> bool {
        self.arena.get(idx).is_some_and(|node| {
            node.kind == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION
                || node.kind == syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION
        })
    }

    /// Assignment operators and `++`/`--` in either position.
    fn is_assignment_like(&self, node: &Node) -> bool {
        match node.kind {
            syntax_kind_ext::BINARY_EXPRESSION => {
                self.arena.get_binary_expr(node).is_some_and(|binary| {
                    SyntaxKind::try_from_u16(binary.operator_token)
                        .is_some_and(is_assignment_operator)
                })
            }
            syntax_kind_ext::PREFIX_UNARY_EXPRESSION | syntax_kind_ext::POSTFIX_UNARY_EXPRESSION => {
                self.arena.get_unary_expr(node).is_some_and(|unary| {
                    unary.operator == SyntaxKind::PlusPlusToken as u16
                        || unary.operator == SyntaxKind::MinusMinusToken as u16
                })
            }
            _ => false,
        }
    }

    fn is_comma_expression(&self, node: &Node) -> bool {
        self.arena
            .get_binary_expr(node)
            .is_some_and(|binary| binary.operator_token == SyntaxKind::CommaToken as u16)
    }

    fn is_parenthesized_assignment(&self, idx: NodeIndex) -> bool {
        self.arena
            .get(idx)
            .and_then(|node| self.arena.get_parenthesized(node))
            .and_then(|paren| self.arena.get(paren.expression))
            .is_some_and(|inner| self.is_assignment_like(inner))
    }
}
