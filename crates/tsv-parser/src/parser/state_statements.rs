//! Parser state - statement and declaration parsing methods
use super::state::{
    CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_DISALLOW_IN, CONTEXT_FLAG_GENERATOR,
    CONTEXT_FLAG_IN_CONDITIONAL_TRUE, ParseDiagnostic, ParserState,
};
use crate::parser::{
    NodeIndex, NodeList,
    node::{
        BindingElementData, BindingPatternData, BlockData, CaseClauseData, CatchClauseData,
        EnumData, EnumMemberData, ExportAssignmentData, ExportDeclData, ExprStatementData,
        ForInOfData, FunctionData, IfStatementData, ImportClauseData, ImportDeclData,
        InterfaceData, JumpData, LabeledData, LoopData, ModuleData, NamedImportsData, ReturnData,
        SourceFileData, SpecifierData, SwitchData, TryData, TypeAliasData, VariableData,
        VariableDeclarationData, WithData,
    },
    node_flags, syntax_kind_ext,
};
use tsv_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use tsv_scanner::SyntaxKind;

impl ParserState {
    // =========================================================================
    // Source file
    // =========================================================================

    /// Parse a source file
    pub fn parse_source_file(&mut self) -> NodeIndex {
        let _span = tracing::debug_span!("parse_source_file", file = %self.file_name).entered();

        // Skip shebang (#!) if present at start of file
        self.scanner.scan_shebang_trivia();
        self.next_token();

        let statements = self.parse_source_file_statements();

        // Fold scanner diagnostics (unterminated literals, invalid characters)
        // into the parse diagnostics, ordered by position.
        for diag in self.scanner.get_scanner_diagnostics() {
            self.parse_diagnostics.push(ParseDiagnostic {
                start: diag.pos as u32,
                length: diag.length as u32,
                message: diag.message.to_string(),
                code: diag.code,
            });
        }
        self.parse_diagnostics.sort_by_key(|d| d.start);

        let text_len = self.scanner.source_text().len() as u32;
        let eof_token = self.arena.add_token(
            SyntaxKind::EndOfFileToken as u16,
            self.token_pos(),
            text_len,
        );

        let root = self.arena.add_source_file(
            syntax_kind_ext::SOURCE_FILE,
            0,
            text_len,
            SourceFileData {
                statements,
                end_of_file_token: eof_token,
                file_name: self.file_name.clone(),
                text: self.scanner.source_text_arc(),
            },
        );
        tracing::debug!(
            nodes = self.arena.len(),
            diagnostics = self.parse_diagnostics.len(),
            "parsed source file"
        );
        root
    }

    /// Top-level statements. Stray `}` is reported and skipped.
    pub(crate) fn parse_source_file_statements(&mut self) -> NodeList {
        let mut statements = Vec::new();
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            if self.is_token(SyntaxKind::CloseBraceToken) {
                self.error_declaration_or_statement_expected();
                self.next_token();
                continue;
            }
            self.parse_statement_into(&mut statements);
        }
        self.make_node_list(statements)
    }

    /// Statements up to (not including) `}` or EOF.
    pub(crate) fn parse_statements(&mut self) -> NodeList {
        let mut statements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            self.parse_statement_into(&mut statements);
        }
        self.make_node_list(statements)
    }

    /// Parse one statement; skips a token when nothing could be parsed.
    fn parse_statement_into(&mut self, statements: &mut Vec<NodeIndex>) {
        let pos_before = self.token_pos();
        let statement = self.parse_statement();
        if statement.is_some() {
            statements.push(statement);
        }
        if self.token_pos() == pos_before && !self.is_token(SyntaxKind::EndOfFileToken) {
            // Resynchronize: drop the offending token
            self.next_token();
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn parse_statement(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let statement = self.parse_statement_worker();
        self.exit_recursion();
        statement
    }

    fn parse_statement_worker(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_block(),
            SyntaxKind::SemicolonToken => self.parse_empty_statement(),
            SyntaxKind::VarKeyword => self.parse_variable_statement(self.token_pos(), None),
            SyntaxKind::LetKeyword if self.look_ahead_is_let_declaration() => {
                self.parse_variable_statement(self.token_pos(), None)
            }
            SyntaxKind::ConstKeyword => {
                if self.look_ahead_is_const_enum() {
                    self.parse_declaration_with_modifiers(self.token_pos(), Vec::new())
                } else {
                    self.parse_variable_statement(self.token_pos(), None)
                }
            }
            SyntaxKind::UsingKeyword if self.look_ahead_is_using_declaration() => {
                self.parse_variable_statement(self.token_pos(), None)
            }
            SyntaxKind::AwaitKeyword if self.look_ahead_is_await_using() => {
                self.parse_variable_statement(self.token_pos(), None)
            }
            SyntaxKind::FunctionKeyword | SyntaxKind::ClassKeyword | SyntaxKind::EnumKeyword => {
                self.parse_declaration_with_modifiers(self.token_pos(), Vec::new())
            }
            SyntaxKind::AsyncKeyword
                if self.next_token_on_same_line_is(|p| p.is_token(SyntaxKind::FunctionKeyword)) =>
            {
                self.parse_declaration_with_modifiers(self.token_pos(), Vec::new())
            }
            SyntaxKind::AbstractKeyword
                if self.next_token_on_same_line_is(|p| p.is_token(SyntaxKind::ClassKeyword)) =>
            {
                self.parse_declaration_with_modifiers(self.token_pos(), Vec::new())
            }
            SyntaxKind::InterfaceKeyword | SyntaxKind::TypeKeyword
                if self.next_token_on_same_line_is(|p| p.is_identifier()) =>
            {
                self.parse_declaration_with_modifiers(self.token_pos(), Vec::new())
            }
            SyntaxKind::NamespaceKeyword | SyntaxKind::ModuleKeyword
                if self.look_ahead_is_module_declaration() =>
            {
                self.parse_declaration_with_modifiers(self.token_pos(), Vec::new())
            }
            SyntaxKind::DeclareKeyword if self.look_ahead_is_declare_declaration() => {
                self.parse_declaration_with_modifiers(self.token_pos(), Vec::new())
            }
            SyntaxKind::AtToken => {
                let start_pos = self.token_pos();
                let decorators = self.parse_decorators();
                if self.is_token(SyntaxKind::ExportKeyword) {
                    self.parse_export_declaration_or_assignment(start_pos, decorators)
                } else {
                    self.parse_declaration_with_modifiers(start_pos, decorators)
                }
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::DoKeyword => self.parse_do_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::ContinueKeyword => {
                self.parse_break_or_continue(syntax_kind_ext::CONTINUE_STATEMENT)
            }
            SyntaxKind::BreakKeyword => self.parse_break_or_continue(syntax_kind_ext::BREAK_STATEMENT),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::WithKeyword => self.parse_with_statement(),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::TryKeyword => self.parse_try_statement(),
            SyntaxKind::DebuggerKeyword => self.parse_debugger_statement(),
            SyntaxKind::ImportKeyword
                if !self.look_ahead(|p| {
                    p.next_token();
                    p.is_token(SyntaxKind::OpenParenToken) || p.is_token(SyntaxKind::DotToken)
                }) =>
            {
                self.parse_import_declaration()
            }
            SyntaxKind::ExportKeyword => {
                self.parse_export_declaration_or_assignment(self.token_pos(), Vec::new())
            }
            _ => {
                if self.is_identifier() && self.look_ahead_is_labeled_statement() {
                    self.parse_labeled_statement()
                } else if self.is_start_of_expression() {
                    self.parse_expression_statement()
                } else {
                    self.error_declaration_or_statement_expected();
                    NodeIndex::NONE
                }
            }
        }
    }

    pub(crate) fn error_declaration_or_statement_expected(&mut self) {
        self.error_at_current_token(
            diagnostic_messages::DECLARATION_OR_STATEMENT_EXPECTED,
            diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
        );
    }

    /// Parse a block `{ statements }`
    pub(crate) fn parse_block(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let open_brace_end = self.scanner.get_token_end();
        self.parse_expected(SyntaxKind::OpenBraceToken);

        let statements = self.with_context(0, CONTEXT_FLAG_IN_CONDITIONAL_TRUE, |p| {
            p.parse_statements()
        });
        let close_brace_start = self.token_start() as usize;
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let end_pos = self.token_end();

        let multi_line = self
            .get_source_text()
            .get(open_brace_end..close_brace_start.max(open_brace_end))
            .is_some_and(|between| between.contains('\n'));

        self.arena.add_block(
            syntax_kind_ext::BLOCK,
            start_pos,
            end_pos,
            BlockData {
                statements,
                multi_line,
            },
        )
    }

    /// Function and method bodies: a block parsed with the function's
    /// async/generator context.
    pub(crate) fn parse_function_block(&mut self, is_async: bool, is_generator: bool) -> NodeIndex {
        let mut set = 0;
        if is_async {
            set |= CONTEXT_FLAG_ASYNC;
        }
        if is_generator {
            set |= CONTEXT_FLAG_GENERATOR;
        }
        let clear = (CONTEXT_FLAG_ASYNC | CONTEXT_FLAG_GENERATOR | CONTEXT_FLAG_DISALLOW_IN) & !set;
        self.with_context(set, clear, |p| p.parse_block())
    }

    pub(crate) fn parse_empty_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::SemicolonToken);
        let end_pos = self.token_end();
        self.arena
            .add_token(syntax_kind_ext::EMPTY_STATEMENT, start_pos, end_pos)
    }

    pub(crate) fn parse_debugger_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::DebuggerKeyword);
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena
            .add_token(syntax_kind_ext::DEBUGGER_STATEMENT, start_pos, end_pos)
    }

    pub(crate) fn parse_expression_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let expression = self.parse_expression();
        if expression.is_none() {
            return NodeIndex::NONE;
        }
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_expr_statement(
            syntax_kind_ext::EXPRESSION_STATEMENT,
            start_pos,
            end_pos,
            ExprStatementData { expression },
        )
    }

    /// Parse labeled statement: label: statement
    pub(crate) fn parse_labeled_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let label = self.parse_identifier();
        self.parse_expected(SyntaxKind::ColonToken);
        let statement = self.parse_statement();
        let end_pos = self.token_end();
        self.arena.add_labeled(
            syntax_kind_ext::LABELED_STATEMENT,
            start_pos,
            end_pos,
            LabeledData { label, statement },
        )
    }

    pub(crate) fn parse_if_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::IfKeyword);
        let expression = self.parse_parenthesized_condition();
        let then_statement = self.parse_statement();
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            self.parse_statement()
        } else {
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_if_statement(
            syntax_kind_ext::IF_STATEMENT,
            start_pos,
            end_pos,
            IfStatementData {
                expression,
                then_statement,
                else_statement,
            },
        )
    }

    /// `( expression )` of if/while/do/switch/with.
    fn parse_parenthesized_condition(&mut self) -> NodeIndex {
        self.parse_expected(SyntaxKind::OpenParenToken);
        let expression = self.with_context(
            0,
            CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_IN_CONDITIONAL_TRUE,
            |p| p.parse_expression(),
        );
        self.parse_expected(SyntaxKind::CloseParenToken);
        expression
    }

    pub(crate) fn parse_do_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::DoKeyword);
        let statement = self.parse_statement();
        self.parse_expected(SyntaxKind::WhileKeyword);
        let condition = self.parse_parenthesized_condition();
        // `do x; while (c) y` is valid: the semicolon after `)` is optional
        self.parse_optional(SyntaxKind::SemicolonToken);
        let end_pos = self.token_end();
        self.arena.add_loop(
            syntax_kind_ext::DO_STATEMENT,
            start_pos,
            end_pos,
            LoopData {
                initializer: NodeIndex::NONE,
                condition,
                incrementor: NodeIndex::NONE,
                statement,
            },
        )
    }

    pub(crate) fn parse_while_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::WhileKeyword);
        let condition = self.parse_parenthesized_condition();
        let statement = self.parse_statement();
        let end_pos = self.token_end();
        self.arena.add_loop(
            syntax_kind_ext::WHILE_STATEMENT,
            start_pos,
            end_pos,
            LoopData {
                initializer: NodeIndex::NONE,
                condition,
                incrementor: NodeIndex::NONE,
                statement,
            },
        )
    }

    /// for, for-in, for-of and for-await-of.
    pub(crate) fn parse_for_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::ForKeyword);
        let await_modifier = self.parse_optional(SyntaxKind::AwaitKeyword);
        self.parse_expected(SyntaxKind::OpenParenToken);

        let initializer = if self.is_token(SyntaxKind::SemicolonToken) {
            NodeIndex::NONE
        } else if self.is_start_of_variable_declaration_list() {
            self.with_context(CONTEXT_FLAG_DISALLOW_IN, 0, |p| {
                p.parse_variable_declaration_list()
            })
        } else {
            self.with_context(CONTEXT_FLAG_DISALLOW_IN, 0, |p| p.parse_expression())
        };

        let for_in_or_of = if await_modifier || self.is_token(SyntaxKind::OfKeyword) {
            Some(syntax_kind_ext::FOR_OF_STATEMENT)
        } else if self.is_token(SyntaxKind::InKeyword) {
            Some(syntax_kind_ext::FOR_IN_STATEMENT)
        } else {
            None
        };

        if let Some(kind) = for_in_or_of {
            self.next_token();
            let expression = self.with_context(0, CONTEXT_FLAG_DISALLOW_IN, |p| {
                if kind == syntax_kind_ext::FOR_OF_STATEMENT {
                    p.parse_assignment_expression_or_higher()
                } else {
                    p.parse_expression()
                }
            });
            self.parse_expected(SyntaxKind::CloseParenToken);
            let statement = self.parse_statement();
            let end_pos = self.token_end();
            return self.arena.add_for_in_of(
                kind,
                start_pos,
                end_pos,
                ForInOfData {
                    await_modifier,
                    initializer,
                    expression,
                    statement,
                },
            );
        }

        self.parse_expected(SyntaxKind::SemicolonToken);
        let condition = if self.is_token(SyntaxKind::SemicolonToken)
            || self.is_token(SyntaxKind::CloseParenToken)
        {
            NodeIndex::NONE
        } else {
            self.with_context(0, CONTEXT_FLAG_DISALLOW_IN, |p| p.parse_expression())
        };
        self.parse_expected(SyntaxKind::SemicolonToken);
        let incrementor = if self.is_token(SyntaxKind::CloseParenToken) {
            NodeIndex::NONE
        } else {
            self.with_context(0, CONTEXT_FLAG_DISALLOW_IN, |p| p.parse_expression())
        };
        self.parse_expected(SyntaxKind::CloseParenToken);
        let statement = self.parse_statement();
        let end_pos = self.token_end();
        self.arena.add_loop(
            syntax_kind_ext::FOR_STATEMENT,
            start_pos,
            end_pos,
            LoopData {
                initializer,
                condition,
                incrementor,
                statement,
            },
        )
    }

    fn parse_break_or_continue(&mut self, kind: u16) -> NodeIndex {
        let start_pos = self.token_pos();
        self.next_token();
        let label = if !self.can_parse_semicolon() && self.is_identifier() {
            self.parse_identifier()
        } else {
            NodeIndex::NONE
        };
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena
            .add_jump(kind, start_pos, end_pos, JumpData { label })
    }

    pub(crate) fn parse_return_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::ReturnKeyword);
        let expression = if self.can_parse_semicolon() {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_return(
            syntax_kind_ext::RETURN_STATEMENT,
            start_pos,
            end_pos,
            ReturnData { expression },
        )
    }

    pub(crate) fn parse_throw_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::ThrowKeyword);
        let expression = if self.has_preceding_line_break() {
            self.error_expression_expected();
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_return(
            syntax_kind_ext::THROW_STATEMENT,
            start_pos,
            end_pos,
            ReturnData { expression },
        )
    }

    pub(crate) fn parse_with_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::WithKeyword);
        let expression = self.parse_parenthesized_condition();
        let statement = self.parse_statement();
        let end_pos = self.token_end();
        self.arena.add_with(
            syntax_kind_ext::WITH_STATEMENT,
            start_pos,
            end_pos,
            WithData {
                expression,
                statement,
            },
        )
    }

    pub(crate) fn parse_switch_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::SwitchKeyword);
        let expression = self.parse_parenthesized_condition();

        let block_start = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let mut clauses = Vec::new();
        while matches!(
            self.token(),
            SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword
        ) {
            clauses.push(self.parse_case_or_default_clause());
        }
        let clauses = self.make_node_list(clauses);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let block_end = self.token_end();
        let case_block = self.arena.add_block(
            syntax_kind_ext::CASE_BLOCK,
            block_start,
            block_end,
            BlockData {
                statements: clauses,
                multi_line: true,
            },
        );

        let end_pos = self.token_end();
        self.arena.add_switch(
            syntax_kind_ext::SWITCH_STATEMENT,
            start_pos,
            end_pos,
            SwitchData {
                expression,
                case_block,
            },
        )
    }

    fn parse_case_or_default_clause(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let (kind, expression) = if self.parse_optional(SyntaxKind::CaseKeyword) {
            (syntax_kind_ext::CASE_CLAUSE, self.parse_expression())
        } else {
            self.parse_expected(SyntaxKind::DefaultKeyword);
            (syntax_kind_ext::DEFAULT_CLAUSE, NodeIndex::NONE)
        };
        self.parse_expected(SyntaxKind::ColonToken);

        let mut statements = Vec::new();
        while !matches!(
            self.token(),
            SyntaxKind::CaseKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::EndOfFileToken
        ) {
            self.parse_statement_into(&mut statements);
        }
        let statements = self.make_node_list(statements);
        let end_pos = self.token_end();
        self.arena.add_case_clause(
            kind,
            start_pos,
            end_pos,
            CaseClauseData {
                expression,
                statements,
            },
        )
    }

    pub(crate) fn parse_try_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::TryKeyword);
        let try_block = self.parse_block();

        let catch_clause = if self.is_token(SyntaxKind::CatchKeyword) {
            self.parse_catch_clause()
        } else {
            NodeIndex::NONE
        };
        let finally_block = if catch_clause.is_none() || self.is_token(SyntaxKind::FinallyKeyword)
        {
            self.parse_expected(SyntaxKind::FinallyKeyword);
            self.parse_block()
        } else {
            NodeIndex::NONE
        };

        let end_pos = self.token_end();
        self.arena.add_try(
            syntax_kind_ext::TRY_STATEMENT,
            start_pos,
            end_pos,
            TryData {
                try_block,
                catch_clause,
                finally_block,
            },
        )
    }

    fn parse_catch_clause(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::CatchKeyword);
        let variable_declaration = if self.parse_optional(SyntaxKind::OpenParenToken) {
            let decl_start = self.token_pos();
            let name = self.parse_binding_name();
            let type_annotation = self.parse_type_annotation();
            let decl_end = self.token_end();
            self.parse_expected(SyntaxKind::CloseParenToken);
            self.arena.add_variable_declaration(
                syntax_kind_ext::VARIABLE_DECLARATION,
                decl_start,
                decl_end,
                VariableDeclarationData {
                    name,
                    exclamation_token: false,
                    type_annotation,
                    initializer: NodeIndex::NONE,
                },
            )
        } else {
            NodeIndex::NONE
        };
        let block = self.parse_block();
        let end_pos = self.token_end();
        self.arena.add_catch_clause(
            syntax_kind_ext::CATCH_CLAUSE,
            start_pos,
            end_pos,
            CatchClauseData {
                variable_declaration,
                block,
            },
        )
    }

    // =========================================================================
    // Variables and binding patterns
    // =========================================================================

    fn look_ahead_is_let_declaration(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            p.is_identifier()
                || p.is_token(SyntaxKind::OpenBracketToken)
                || p.is_token(SyntaxKind::OpenBraceToken)
        })
    }

    fn look_ahead_is_using_declaration(&mut self) -> bool {
        self.next_token_on_same_line_is(|p| p.is_identifier())
    }

    fn look_ahead_is_await_using(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if !p.is_token(SyntaxKind::UsingKeyword) || p.has_preceding_line_break() {
                return false;
            }
            p.next_token();
            !p.has_preceding_line_break() && p.is_identifier()
        })
    }

    fn look_ahead_is_const_enum(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            p.is_token(SyntaxKind::EnumKeyword)
        })
    }

    pub(crate) fn is_start_of_variable_declaration_list(&mut self) -> bool {
        match self.token() {
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => true,
            SyntaxKind::LetKeyword => self.look_ahead_is_let_declaration(),
            SyntaxKind::UsingKeyword => self.look_ahead_is_using_declaration(),
            SyntaxKind::AwaitKeyword => self.look_ahead_is_await_using(),
            _ => false,
        }
    }

    /// Parse variable statement (var/let/const/using)
    pub(crate) fn parse_variable_statement(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
    ) -> NodeIndex {
        let list = self.parse_variable_declaration_list();
        self.parse_semicolon();
        let end_pos = self.token_end();
        let declarations = self.make_node_list(vec![list]);
        self.arena.add_variable(
            syntax_kind_ext::VARIABLE_STATEMENT,
            start_pos,
            end_pos,
            VariableData {
                modifiers,
                declarations,
            },
        )
    }

    /// `var|let|const|using|await using` followed by declarations.
    pub(crate) fn parse_variable_declaration_list(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let flags = match self.token() {
            SyntaxKind::LetKeyword => node_flags::LET,
            SyntaxKind::ConstKeyword => node_flags::CONST,
            SyntaxKind::UsingKeyword => node_flags::USING,
            SyntaxKind::AwaitKeyword => {
                self.next_token();
                node_flags::AWAIT_USING
            }
            _ => node_flags::NONE,
        };
        self.next_token();

        let mut declarations = Vec::new();
        loop {
            let declaration = self.parse_variable_declaration();
            if declaration.is_some() {
                declarations.push(declaration);
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        let declarations = self.make_node_list(declarations);
        let end_pos = self.token_end();
        let list = self.arena.add_variable(
            syntax_kind_ext::VARIABLE_DECLARATION_LIST,
            start_pos,
            end_pos,
            VariableData {
                modifiers: None,
                declarations,
            },
        );
        self.arena.set_flags(list, flags);
        list
    }

    fn parse_variable_declaration(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let name = self.parse_binding_name();
        if name.is_none() {
            return NodeIndex::NONE;
        }
        let exclamation_token = !self.has_preceding_line_break()
            && self.parse_optional(SyntaxKind::ExclamationToken);
        let type_annotation = self.parse_type_annotation();
        let initializer = self.parse_initializer();
        let end_pos = self.token_end();
        self.arena.add_variable_declaration(
            syntax_kind_ext::VARIABLE_DECLARATION,
            start_pos,
            end_pos,
            VariableDeclarationData {
                name,
                exclamation_token,
                type_annotation,
                initializer,
            },
        )
    }

    /// `= expression` or NONE.
    pub(crate) fn parse_initializer(&mut self) -> NodeIndex {
        if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_assignment_expression_or_higher()
        } else {
            NodeIndex::NONE
        }
    }

    /// Identifier or destructuring pattern.
    pub(crate) fn parse_binding_name(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_object_binding_pattern(),
            SyntaxKind::OpenBracketToken => self.parse_array_binding_pattern(),
            _ => self.parse_identifier(),
        }
    }

    fn parse_object_binding_pattern(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let elements = self.parse_delimited_list(
            SyntaxKind::OpenBraceToken,
            SyntaxKind::CloseBraceToken,
            |p| p.parse_object_binding_element(),
        );
        let end_pos = self.token_end();
        self.arena.add_binding_pattern(
            syntax_kind_ext::OBJECT_BINDING_PATTERN,
            start_pos,
            end_pos,
            BindingPatternData { elements },
        )
    }

    fn parse_object_binding_element(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
        let (property_name, name) = if dot_dot_dot_token {
            (NodeIndex::NONE, self.parse_identifier())
        } else {
            let is_plain_identifier = self.is_identifier();
            let property = self.parse_property_name();
            if self.parse_optional(SyntaxKind::ColonToken) {
                (property, self.parse_binding_name())
            } else {
                if !is_plain_identifier {
                    self.parse_expected(SyntaxKind::ColonToken);
                }
                (NodeIndex::NONE, property)
            }
        };
        if property_name.is_none() && name.is_none() {
            return NodeIndex::NONE;
        }
        let initializer = self.parse_initializer();
        let end_pos = self.token_end();
        self.arena.add_binding_element(
            syntax_kind_ext::BINDING_ELEMENT,
            start_pos,
            end_pos,
            BindingElementData {
                dot_dot_dot_token,
                property_name,
                name,
                initializer,
            },
        )
    }

    fn parse_array_binding_pattern(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let elements = self.parse_delimited_list(
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
            |p| p.parse_array_binding_element(),
        );
        let end_pos = self.token_end();
        self.arena.add_binding_pattern(
            syntax_kind_ext::ARRAY_BINDING_PATTERN,
            start_pos,
            end_pos,
            BindingPatternData { elements },
        )
    }

    fn parse_array_binding_element(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        if self.is_token(SyntaxKind::CommaToken) {
            return self
                .arena
                .add_token(syntax_kind_ext::OMITTED_EXPRESSION, start_pos, start_pos);
        }
        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
        let name = self.parse_binding_name();
        if name.is_none() {
            return NodeIndex::NONE;
        }
        let initializer = self.parse_initializer();
        let end_pos = self.token_end();
        self.arena.add_binding_element(
            syntax_kind_ext::BINDING_ELEMENT,
            start_pos,
            end_pos,
            BindingElementData {
                dot_dot_dot_token,
                property_name: NodeIndex::NONE,
                name,
                initializer,
            },
        )
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn look_ahead_is_module_declaration(&mut self) -> bool {
        self.next_token_on_same_line_is(|p| {
            p.is_identifier() || p.is_token(SyntaxKind::StringLiteral)
        })
    }

    fn look_ahead_is_declare_declaration(&mut self) -> bool {
        self.next_token_on_same_line_is(|p| {
            matches!(
                p.token(),
                SyntaxKind::VarKeyword
                    | SyntaxKind::LetKeyword
                    | SyntaxKind::ConstKeyword
                    | SyntaxKind::FunctionKeyword
                    | SyntaxKind::ClassKeyword
                    | SyntaxKind::AbstractKeyword
                    | SyntaxKind::InterfaceKeyword
                    | SyntaxKind::TypeKeyword
                    | SyntaxKind::EnumKeyword
                    | SyntaxKind::NamespaceKeyword
                    | SyntaxKind::ModuleKeyword
                    | SyntaxKind::GlobalKeyword
                    | SyntaxKind::AsyncKeyword
            )
        })
    }

    fn parse_modifier_token(&mut self) -> NodeIndex {
        self.parse_token_node()
    }

    /// Parse a declaration after any already-collected modifiers
    /// (`export`, `default`, decorators).
    pub(crate) fn parse_declaration_with_modifiers(
        &mut self,
        start_pos: u32,
        mut modifiers: Vec<NodeIndex>,
    ) -> NodeIndex {
        // declare / abstract / const (enum) prefixes
        loop {
            match self.token() {
                SyntaxKind::DeclareKeyword if self.look_ahead_is_declare_declaration() => {
                    modifiers.push(self.parse_modifier_token());
                }
                SyntaxKind::AbstractKeyword
                    if self
                        .next_token_on_same_line_is(|p| p.is_token(SyntaxKind::ClassKeyword)) =>
                {
                    modifiers.push(self.parse_modifier_token());
                }
                SyntaxKind::ConstKeyword if self.look_ahead_is_const_enum() => {
                    modifiers.push(self.parse_modifier_token());
                }
                _ => break,
            }
        }

        let modifier_list = if modifiers.is_empty() {
            None
        } else {
            Some(self.make_node_list(modifiers))
        };

        match self.token() {
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(start_pos, modifier_list, false),
            SyntaxKind::AsyncKeyword => {
                self.next_token();
                self.parse_function_declaration(start_pos, modifier_list, true)
            }
            SyntaxKind::ClassKeyword => self.parse_class_declaration(start_pos, modifier_list),
            SyntaxKind::InterfaceKeyword => {
                self.parse_interface_declaration(start_pos, modifier_list)
            }
            SyntaxKind::TypeKeyword => self.parse_type_alias_declaration(start_pos, modifier_list),
            SyntaxKind::EnumKeyword => self.parse_enum_declaration(start_pos, modifier_list),
            SyntaxKind::NamespaceKeyword | SyntaxKind::ModuleKeyword | SyntaxKind::GlobalKeyword => {
                self.parse_module_declaration(start_pos, modifier_list)
            }
            SyntaxKind::VarKeyword
            | SyntaxKind::LetKeyword
            | SyntaxKind::ConstKeyword
            | SyntaxKind::UsingKeyword => self.parse_variable_statement(start_pos, modifier_list),
            _ => {
                self.error_declaration_or_statement_expected();
                NodeIndex::NONE
            }
        }
    }

    /// `function [*] name <T>(params): R { body }`, `async` already consumed.
    pub(crate) fn parse_function_declaration(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
        is_async: bool,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);
        // `export default function () {}` has no name
        let name = if self.is_identifier() {
            self.parse_identifier()
        } else {
            NodeIndex::NONE
        };
        let (type_parameters, parameters, type_annotation) =
            self.parse_signature(is_async, asterisk_token);
        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_function_block(is_async, asterisk_token)
        } else {
            // Overload or ambient declaration
            self.parse_semicolon();
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_function(
            syntax_kind_ext::FUNCTION_DECLARATION,
            start_pos,
            end_pos,
            FunctionData {
                modifiers,
                is_async,
                asterisk_token,
                name,
                type_parameters,
                parameters,
                type_annotation,
                body,
            },
        )
    }

    /// Type parameters, parameters and return type shared by every function-like.
    pub(crate) fn parse_signature(
        &mut self,
        is_async: bool,
        is_generator: bool,
    ) -> (Option<NodeList>, NodeList, NodeIndex) {
        let type_parameters = self.parse_type_parameters();
        let mut set = 0;
        if is_async {
            set |= CONTEXT_FLAG_ASYNC;
        }
        if is_generator {
            set |= CONTEXT_FLAG_GENERATOR;
        }
        let parameters = self.with_context(
            set,
            (CONTEXT_FLAG_ASYNC | CONTEXT_FLAG_GENERATOR | CONTEXT_FLAG_DISALLOW_IN) & !set,
            |p| p.parse_parameters(),
        );
        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_return_type()
        } else {
            NodeIndex::NONE
        };
        (type_parameters, parameters, type_annotation)
    }

    pub(crate) fn parse_interface_declaration(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::InterfaceKeyword);
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameters();
        let heritage_clauses = self.parse_heritage_clauses();
        let members = self.parse_type_members();
        let end_pos = self.token_end();
        self.arena.add_interface(
            syntax_kind_ext::INTERFACE_DECLARATION,
            start_pos,
            end_pos,
            InterfaceData {
                modifiers,
                name,
                type_parameters,
                heritage_clauses,
                members,
            },
        )
    }

    pub(crate) fn parse_type_alias_declaration(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::TypeKeyword);
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameters();
        self.parse_expected(SyntaxKind::EqualsToken);
        let type_node = self.parse_type();
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_type_alias(
            syntax_kind_ext::TYPE_ALIAS_DECLARATION,
            start_pos,
            end_pos,
            TypeAliasData {
                modifiers,
                name,
                type_parameters,
                type_node,
            },
        )
    }

    pub(crate) fn parse_enum_declaration(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::EnumKeyword);
        let name = self.parse_identifier();
        let members = self.parse_delimited_list(
            SyntaxKind::OpenBraceToken,
            SyntaxKind::CloseBraceToken,
            |p| {
                let member_start = p.token_pos();
                let member_name = p.parse_property_name();
                if member_name.is_none() {
                    return NodeIndex::NONE;
                }
                let initializer = p.parse_initializer();
                let member_end = p.token_end();
                p.arena.add_enum_member(
                    syntax_kind_ext::ENUM_MEMBER,
                    member_start,
                    member_end,
                    EnumMemberData {
                        name: member_name,
                        initializer,
                    },
                )
            },
        );
        let end_pos = self.token_end();
        self.arena.add_enum(
            syntax_kind_ext::ENUM_DECLARATION,
            start_pos,
            end_pos,
            EnumData {
                modifiers,
                name,
                members,
            },
        )
    }

    /// `namespace A.B { }`, `module "m" { }`, `declare global { }`.
    pub(crate) fn parse_module_declaration(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
    ) -> NodeIndex {
        let is_global = self.is_token(SyntaxKind::GlobalKeyword);
        let name = if is_global {
            self.parse_identifier_name()
        } else {
            self.next_token();
            if self.is_token(SyntaxKind::StringLiteral) {
                self.parse_literal_node()
            } else {
                self.parse_identifier()
            }
        };
        self.parse_module_rest(start_pos, modifiers, name)
    }

    fn parse_module_rest(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
        name: NodeIndex,
    ) -> NodeIndex {
        let body = if self.is_token(SyntaxKind::DotToken) {
            self.next_token();
            let inner_start = self.token_pos();
            let inner_name = self.parse_identifier();
            self.parse_module_rest(inner_start, None, inner_name)
        } else if self.is_token(SyntaxKind::OpenBraceToken) {
            let block_start = self.token_pos();
            self.next_token();
            let statements = self.parse_statements();
            self.parse_expected(SyntaxKind::CloseBraceToken);
            let block_end = self.token_end();
            self.arena.add_block(
                syntax_kind_ext::MODULE_BLOCK,
                block_start,
                block_end,
                BlockData {
                    statements,
                    multi_line: true,
                },
            )
        } else {
            self.parse_semicolon();
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_module(
            syntax_kind_ext::MODULE_DECLARATION,
            start_pos,
            end_pos,
            ModuleData {
                modifiers,
                name,
                body,
            },
        )
    }

    // =========================================================================
    // Imports and exports
    // =========================================================================

    pub(crate) fn parse_import_declaration(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::ImportKeyword);

        let import_clause = if self.is_token(SyntaxKind::StringLiteral) {
            NodeIndex::NONE
        } else {
            let clause_start = self.token_pos();
            let is_type_only = self.is_token(SyntaxKind::TypeKeyword)
                && self.look_ahead(|p| {
                    p.next_token();
                    (p.is_identifier() && !p.is_token(SyntaxKind::FromKeyword))
                        || p.is_token(SyntaxKind::OpenBraceToken)
                        || p.is_token(SyntaxKind::AsteriskToken)
                });
            if is_type_only {
                self.next_token();
            }
            let name = if self.is_identifier() {
                self.parse_identifier()
            } else {
                NodeIndex::NONE
            };
            let named_bindings = if name.is_none() || self.parse_optional(SyntaxKind::CommaToken) {
                self.parse_named_bindings()
            } else {
                NodeIndex::NONE
            };
            let clause_end = self.token_end();
            self.parse_expected(SyntaxKind::FromKeyword);
            self.arena.add_import_clause(
                syntax_kind_ext::IMPORT_CLAUSE,
                clause_start,
                clause_end,
                ImportClauseData {
                    is_type_only,
                    name,
                    named_bindings,
                },
            )
        };

        let module_specifier = if self.is_token(SyntaxKind::StringLiteral) {
            self.parse_literal_node()
        } else {
            self.error_at_current_token(
                diagnostic_messages::EXPRESSION_EXPECTED,
                diagnostic_codes::EXPRESSION_EXPECTED,
            );
            NodeIndex::NONE
        };
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_import_decl(
            syntax_kind_ext::IMPORT_DECLARATION,
            start_pos,
            end_pos,
            ImportDeclData {
                modifiers: None,
                import_clause,
                module_specifier,
            },
        )
    }

    /// `* as ns` or `{ a, b as c }`.
    fn parse_named_bindings(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        if self.parse_optional(SyntaxKind::AsteriskToken) {
            self.parse_expected(SyntaxKind::AsKeyword);
            let name = self.parse_identifier();
            let end_pos = self.token_end();
            return self.arena.add_named_imports(
                syntax_kind_ext::NAMESPACE_IMPORT,
                start_pos,
                end_pos,
                NamedImportsData {
                    name,
                    elements: NodeList::new(),
                },
            );
        }
        self.parse_named_imports_or_exports(
            syntax_kind_ext::NAMED_IMPORTS,
            syntax_kind_ext::IMPORT_SPECIFIER,
        )
    }

    fn parse_named_imports_or_exports(&mut self, kind: u16, specifier_kind: u16) -> NodeIndex {
        let start_pos = self.token_pos();
        let elements = self.parse_delimited_list(
            SyntaxKind::OpenBraceToken,
            SyntaxKind::CloseBraceToken,
            |p| p.parse_specifier(specifier_kind),
        );
        let end_pos = self.token_end();
        self.arena.add_named_imports(
            kind,
            start_pos,
            end_pos,
            NamedImportsData {
                name: NodeIndex::NONE,
                elements,
            },
        )
    }

    fn parse_specifier(&mut self, kind: u16) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_type_only = self.is_token(SyntaxKind::TypeKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                p.is_identifier_or_keyword() || p.is_token(SyntaxKind::StringLiteral)
            });
        if is_type_only {
            self.next_token();
        }
        let first = if self.is_token(SyntaxKind::StringLiteral) {
            self.parse_literal_node()
        } else {
            self.parse_identifier_name()
        };
        if first.is_none() {
            return NodeIndex::NONE;
        }
        let (property_name, name) = if self.parse_optional(SyntaxKind::AsKeyword) {
            let alias = if self.is_token(SyntaxKind::StringLiteral) {
                self.parse_literal_node()
            } else {
                self.parse_identifier_name()
            };
            (first, alias)
        } else {
            (NodeIndex::NONE, first)
        };
        let end_pos = self.token_end();
        self.arena.add_specifier(
            kind,
            start_pos,
            end_pos,
            SpecifierData {
                is_type_only,
                property_name,
                name,
            },
        )
    }

    pub(crate) fn parse_export_declaration_or_assignment(
        &mut self,
        start_pos: u32,
        mut modifiers: Vec<NodeIndex>,
    ) -> NodeIndex {
        let export_modifier = self.parse_modifier_token();

        // export = expr;
        if self.parse_optional(SyntaxKind::EqualsToken) {
            return self.parse_export_assignment_rest(start_pos, modifiers, true);
        }

        if self.is_token(SyntaxKind::DefaultKeyword) {
            let is_declaration = self.look_ahead(|p| {
                p.next_token();
                match p.token() {
                    SyntaxKind::FunctionKeyword
                    | SyntaxKind::ClassKeyword
                    | SyntaxKind::InterfaceKeyword => true,
                    SyntaxKind::AsyncKeyword | SyntaxKind::AbstractKeyword => {
                        p.next_token();
                        !p.has_preceding_line_break()
                            && (p.is_token(SyntaxKind::FunctionKeyword)
                                || p.is_token(SyntaxKind::ClassKeyword))
                    }
                    _ => false,
                }
            });
            if is_declaration {
                modifiers.push(export_modifier);
                modifiers.push(self.parse_modifier_token());
                return self.parse_declaration_with_modifiers(start_pos, modifiers);
            }
            self.next_token();
            return self.parse_export_assignment_rest(start_pos, modifiers, false);
        }

        let is_type_only = self.is_token(SyntaxKind::TypeKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                p.is_token(SyntaxKind::OpenBraceToken) || p.is_token(SyntaxKind::AsteriskToken)
            });
        if is_type_only {
            self.next_token();
        }

        if self.is_token(SyntaxKind::OpenBraceToken) || self.is_token(SyntaxKind::AsteriskToken) {
            let export_clause = if self.is_token(SyntaxKind::AsteriskToken) {
                let clause_start = self.token_pos();
                self.next_token();
                if self.parse_optional(SyntaxKind::AsKeyword) {
                    let name = self.parse_identifier_name();
                    let clause_end = self.token_end();
                    self.arena.add_named_imports(
                        syntax_kind_ext::NAMESPACE_IMPORT,
                        clause_start,
                        clause_end,
                        NamedImportsData {
                            name,
                            elements: NodeList::new(),
                        },
                    )
                } else {
                    NodeIndex::NONE
                }
            } else {
                self.parse_named_imports_or_exports(
                    syntax_kind_ext::NAMED_EXPORTS,
                    syntax_kind_ext::EXPORT_SPECIFIER,
                )
            };
            let module_specifier = if self.parse_optional(SyntaxKind::FromKeyword) {
                self.parse_literal_node()
            } else {
                NodeIndex::NONE
            };
            self.parse_semicolon();
            let end_pos = self.token_end();
            let modifiers = if modifiers.is_empty() {
                None
            } else {
                Some(self.make_node_list(modifiers))
            };
            return self.arena.add_export_decl(
                syntax_kind_ext::EXPORT_DECLARATION,
                start_pos,
                end_pos,
                ExportDeclData {
                    modifiers,
                    is_type_only,
                    export_clause,
                    module_specifier,
                },
            );
        }

        modifiers.push(export_modifier);
        self.parse_declaration_with_modifiers(start_pos, modifiers)
    }

    fn parse_export_assignment_rest(
        &mut self,
        start_pos: u32,
        modifiers: Vec<NodeIndex>,
        is_export_equals: bool,
    ) -> NodeIndex {
        let expression = self.parse_assignment_expression_or_higher();
        self.parse_semicolon();
        let end_pos = self.token_end();
        let modifiers = if modifiers.is_empty() {
            None
        } else {
            Some(self.make_node_list(modifiers))
        };
        self.arena.add_export_assignment(
            syntax_kind_ext::EXPORT_ASSIGNMENT,
            start_pos,
            end_pos,
            ExportAssignmentData {
                modifiers,
                is_export_equals,
                expression,
            },
        )
    }
}

#[cfg(test)]
#[path = "../../tests/state_statement_tests.rs"]
mod tests;
