//! Parser state - expression parsing methods
use super::state::{
    CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_DISALLOW_IN, CONTEXT_FLAG_GENERATOR,
    CONTEXT_FLAG_IN_CONDITIONAL_TRUE, ParserState,
};
use crate::parser::{
    NodeIndex, NodeList,
    node::{
        AccessExprData, BinaryExprData, CallExprData, ConditionalExprData, FunctionData,
        LiteralData, LiteralExprData, ParameterData, ParenthesizedData, PropertyAssignmentData,
        ShorthandPropertyData, TaggedTemplateData, TemplateExprData, TemplateSpanData,
        TypeAssertionData, UnaryExprData, UnaryExprDataEx,
    },
    node_flags, syntax_kind_ext,
};
use tsv_scanner::{SyntaxKind, is_assignment_operator, is_keyword};

/// Binary operator precedence; 0 means "not a binary operator".
fn binary_operator_precedence(kind: SyntaxKind) -> u8 {
    use SyntaxKind::*;
    match kind {
        QuestionQuestionToken => 4,
        BarBarToken => 5,
        AmpersandAmpersandToken => 6,
        BarToken => 7,
        CaretToken => 8,
        AmpersandToken => 9,
        EqualsEqualsToken
        | ExclamationEqualsToken
        | EqualsEqualsEqualsToken
        | ExclamationEqualsEqualsToken => 10,
        LessThanToken
        | GreaterThanToken
        | LessThanEqualsToken
        | GreaterThanEqualsToken
        | InstanceOfKeyword
        | InKeyword
        | AsKeyword
        | SatisfiesKeyword => 11,
        LessThanLessThanToken
        | GreaterThanGreaterThanToken
        | GreaterThanGreaterThanGreaterThanToken => 12,
        PlusToken | MinusToken => 13,
        AsteriskToken | SlashToken | PercentToken => 14,
        AsteriskAsteriskToken => 15,
        _ => 0,
    }
}

/// Node kinds that can appear on the left of an assignment operator.
fn is_left_hand_side_kind(kind: u16) -> bool {
    use syntax_kind_ext::*;
    matches!(
        kind,
        PROPERTY_ACCESS_EXPRESSION
            | ELEMENT_ACCESS_EXPRESSION
            | CALL_EXPRESSION
            | NEW_EXPRESSION
            | TAGGED_TEMPLATE_EXPRESSION
            | ARRAY_LITERAL_EXPRESSION
            | OBJECT_LITERAL_EXPRESSION
            | PARENTHESIZED_EXPRESSION
            | NON_NULL_EXPRESSION
            | FUNCTION_EXPRESSION
            | CLASS_EXPRESSION
            | TEMPLATE_EXPRESSION
    ) || kind == SyntaxKind::Identifier as u16
        || kind == SyntaxKind::ThisKeyword as u16
        || kind == SyntaxKind::SuperKeyword as u16
}

impl ParserState {
    // =========================================================================
    // Expression entry points
    // =========================================================================

    /// Comma expression: `a, b, c`
    pub(crate) fn parse_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut left = self.parse_assignment_expression_or_higher();
        while self.is_token(SyntaxKind::CommaToken) {
            if left.is_none() {
                break;
            }
            self.next_token();
            let right = self.parse_assignment_expression_or_higher();
            let end_pos = self.token_end();
            left = self.arena.add_binary_expr(
                syntax_kind_ext::BINARY_EXPRESSION,
                start_pos,
                end_pos,
                BinaryExprData {
                    left,
                    operator_token: SyntaxKind::CommaToken as u16,
                    right,
                },
            );
        }
        left
    }

    pub(crate) fn parse_assignment_expression_or_higher(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let result = self.parse_assignment_expression_worker();
        self.exit_recursion();
        result
    }

    fn parse_assignment_expression_worker(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::YieldKeyword) && self.in_generator_context() {
            return self.parse_yield_expression();
        }
        if let Some(arrow) = self.try_parse_arrow_function() {
            return arrow;
        }

        let start_pos = self.token_pos();
        let expr = self.parse_binary_expression_or_higher(0);
        if expr.is_none() {
            return expr;
        }

        let expr_kind = self.arena.get(expr).map_or(0, |n| n.kind);
        if expr_kind == SyntaxKind::Identifier as u16
            && self.is_token(SyntaxKind::EqualsGreaterThanToken)
        {
            return self.parse_simple_arrow_function(start_pos, expr, false);
        }

        if is_left_hand_side_kind(expr_kind) && is_assignment_operator(self.token()) {
            let operator = self.token();
            self.next_token();
            let right = self.parse_assignment_expression_or_higher();
            let end_pos = self.token_end();
            return self.arena.add_binary_expr(
                syntax_kind_ext::BINARY_EXPRESSION,
                start_pos,
                end_pos,
                BinaryExprData {
                    left: expr,
                    operator_token: operator as u16,
                    right,
                },
            );
        }

        self.parse_conditional_expression_rest(start_pos, expr)
    }

    fn parse_conditional_expression_rest(&mut self, start_pos: u32, condition: NodeIndex) -> NodeIndex {
        if !self.parse_optional(SyntaxKind::QuestionToken) {
            return condition;
        }
        let when_true = self.with_context(
            CONTEXT_FLAG_IN_CONDITIONAL_TRUE,
            CONTEXT_FLAG_DISALLOW_IN,
            |p| p.parse_assignment_expression_or_higher(),
        );
        self.parse_expected(SyntaxKind::ColonToken);
        let when_false = self.with_context(0, CONTEXT_FLAG_IN_CONDITIONAL_TRUE, |p| {
            p.parse_assignment_expression_or_higher()
        });
        let end_pos = self.token_end();
        self.arena.add_conditional_expr(
            syntax_kind_ext::CONDITIONAL_EXPRESSION,
            start_pos,
            end_pos,
            ConditionalExprData {
                condition,
                when_true,
                when_false,
            },
        )
    }

    fn parse_yield_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.next_token();
        let (asterisk_token, expression) = if !self.has_preceding_line_break()
            && (self.is_token(SyntaxKind::AsteriskToken) || self.is_start_of_expression())
        {
            let asterisk = self.parse_optional(SyntaxKind::AsteriskToken);
            (asterisk, self.parse_assignment_expression_or_higher())
        } else {
            (false, NodeIndex::NONE)
        };
        let end_pos = self.token_end();
        self.arena.add_unary_expr_ex(
            syntax_kind_ext::YIELD_EXPRESSION,
            start_pos,
            end_pos,
            UnaryExprDataEx {
                expression,
                asterisk_token,
            },
        )
    }

    // =========================================================================
    // Binary and unary
    // =========================================================================

    fn parse_binary_expression_or_higher(&mut self, precedence: u8) -> NodeIndex {
        let start_pos = self.token_pos();
        let left = self.parse_unary_expression_or_higher();
        if left.is_none() {
            return left;
        }
        self.parse_binary_expression_rest(precedence, start_pos, left)
    }

    fn parse_binary_expression_rest(
        &mut self,
        precedence: u8,
        start_pos: u32,
        mut left: NodeIndex,
    ) -> NodeIndex {
        loop {
            if self.is_token(SyntaxKind::GreaterThanToken) {
                self.re_scan_greater_token();
            }
            let operator = self.token();
            let new_precedence = binary_operator_precedence(operator);
            // `**` is right-associative
            let consume = if operator == SyntaxKind::AsteriskAsteriskToken {
                new_precedence >= precedence
            } else {
                new_precedence > precedence
            };
            if new_precedence == 0 || !consume {
                break;
            }
            if operator == SyntaxKind::InKeyword && self.in_disallow_in_context() {
                break;
            }

            if matches!(operator, SyntaxKind::AsKeyword | SyntaxKind::SatisfiesKeyword) {
                if self.has_preceding_line_break() {
                    break;
                }
                self.next_token();
                let type_node = self.parse_type();
                let end_pos = self.token_end();
                let kind = if operator == SyntaxKind::AsKeyword {
                    syntax_kind_ext::AS_EXPRESSION
                } else {
                    syntax_kind_ext::SATISFIES_EXPRESSION
                };
                left = self.arena.add_type_assertion(
                    kind,
                    start_pos,
                    end_pos,
                    TypeAssertionData {
                        expression: left,
                        type_node,
                    },
                );
                continue;
            }

            self.next_token();
            let right = self.parse_binary_expression_or_higher(new_precedence);
            let end_pos = self.token_end();
            left = self.arena.add_binary_expr(
                syntax_kind_ext::BINARY_EXPRESSION,
                start_pos,
                end_pos,
                BinaryExprData {
                    left,
                    operator_token: operator as u16,
                    right,
                },
            );
        }
        left
    }

    pub(crate) fn parse_unary_expression_or_higher(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let result = self.parse_unary_expression_worker();
        self.exit_recursion();
        result
    }

    fn parse_unary_expression_worker(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        match self.token() {
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken => {
                let operator = self.token();
                self.next_token();
                let operand = self.parse_left_hand_side_expression_or_higher();
                self.finish_prefix_unary(start_pos, operator, operand)
            }
            SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken => {
                let operator = self.token();
                self.next_token();
                let operand = self.parse_unary_expression_or_higher();
                self.finish_prefix_unary(start_pos, operator, operand)
            }
            SyntaxKind::DeleteKeyword => {
                self.parse_keyword_unary(start_pos, syntax_kind_ext::DELETE_EXPRESSION)
            }
            SyntaxKind::TypeOfKeyword => {
                self.parse_keyword_unary(start_pos, syntax_kind_ext::TYPE_OF_EXPRESSION)
            }
            SyntaxKind::VoidKeyword => {
                self.parse_keyword_unary(start_pos, syntax_kind_ext::VOID_EXPRESSION)
            }
            SyntaxKind::AwaitKeyword if self.is_await_expression() => {
                self.parse_keyword_unary(start_pos, syntax_kind_ext::AWAIT_EXPRESSION)
            }
            SyntaxKind::LessThanToken => self.parse_type_assertion(),
            _ => self.parse_update_expression(),
        }
    }

    fn finish_prefix_unary(&mut self, start_pos: u32, operator: SyntaxKind, operand: NodeIndex) -> NodeIndex {
        let end_pos = self.token_end();
        self.arena.add_unary_expr(
            syntax_kind_ext::PREFIX_UNARY_EXPRESSION,
            start_pos,
            end_pos,
            UnaryExprData {
                operator: operator as u16,
                operand,
            },
        )
    }

    fn parse_keyword_unary(&mut self, start_pos: u32, kind: u16) -> NodeIndex {
        self.next_token();
        let expression = self.parse_unary_expression_or_higher();
        let end_pos = self.token_end();
        self.arena.add_unary_expr_ex(
            kind,
            start_pos,
            end_pos,
            UnaryExprDataEx {
                expression,
                asterisk_token: false,
            },
        )
    }

    /// `await` is an operator in async bodies, and at top level when an
    /// operand follows on the same line.
    fn is_await_expression(&mut self) -> bool {
        if self.in_async_context() {
            return true;
        }
        self.next_token_on_same_line_is(|p| {
            p.is_identifier_or_keyword()
                || matches!(
                    p.token(),
                    SyntaxKind::NumericLiteral
                        | SyntaxKind::BigIntLiteral
                        | SyntaxKind::StringLiteral
                        | SyntaxKind::NoSubstitutionTemplateLiteral
                        | SyntaxKind::TemplateHead
                )
        })
    }

    /// `<T>expr`
    fn parse_type_assertion(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::LessThanToken);
        let type_node = self.parse_type();
        self.parse_expected(SyntaxKind::GreaterThanToken);
        let expression = self.parse_unary_expression_or_higher();
        let end_pos = self.token_end();
        self.arena.add_type_assertion(
            syntax_kind_ext::TYPE_ASSERTION,
            start_pos,
            end_pos,
            TypeAssertionData {
                expression,
                type_node,
            },
        )
    }

    fn parse_update_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let expression = self.parse_left_hand_side_expression_or_higher();
        if expression.is_some()
            && matches!(
                self.token(),
                SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
            )
            && !self.has_preceding_line_break()
        {
            let operator = self.token();
            self.next_token();
            let end_pos = self.token_end();
            return self.arena.add_unary_expr(
                syntax_kind_ext::POSTFIX_UNARY_EXPRESSION,
                start_pos,
                end_pos,
                UnaryExprData {
                    operator: operator as u16,
                    operand: expression,
                },
            );
        }
        expression
    }

    // =========================================================================
    // Member and call expressions
    // =========================================================================

    pub(crate) fn parse_left_hand_side_expression_or_higher(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let expression = match self.token() {
            SyntaxKind::ImportKeyword | SyntaxKind::SuperKeyword => self.parse_token_node(),
            _ => self.parse_primary_expression(),
        };
        if expression.is_none() {
            return expression;
        }
        self.parse_member_or_call_rest(start_pos, expression, true)
    }

    /// `.name`, `?.`, `[index]`, `!`, tagged templates and (when allowed) calls.
    fn parse_member_or_call_rest(
        &mut self,
        start_pos: u32,
        mut expression: NodeIndex,
        allow_call: bool,
    ) -> NodeIndex {
        loop {
            match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let name = self.parse_member_name();
                    expression = self.finish_property_access(start_pos, expression, false, name);
                }
                SyntaxKind::QuestionDotToken if allow_call => {
                    self.next_token();
                    expression = if self.is_token(SyntaxKind::OpenBracketToken) {
                        self.parse_element_access_rest(start_pos, expression, true)
                    } else if self.is_token(SyntaxKind::OpenParenToken)
                        || (self.is_token(SyntaxKind::LessThanToken)
                            && self.is_type_arguments_in_expression())
                    {
                        self.parse_call_rest(start_pos, expression, true)
                    } else {
                        let name = self.parse_member_name();
                        self.finish_property_access(start_pos, expression, true, name)
                    };
                    self.arena.add_flags(expression, node_flags::OPTIONAL_CHAIN);
                }
                SyntaxKind::OpenBracketToken => {
                    expression = self.parse_element_access_rest(start_pos, expression, false);
                }
                SyntaxKind::ExclamationToken if !self.has_preceding_line_break() => {
                    self.next_token();
                    let end_pos = self.token_end();
                    expression = self.arena.add_unary_expr_ex(
                        syntax_kind_ext::NON_NULL_EXPRESSION,
                        start_pos,
                        end_pos,
                        UnaryExprDataEx {
                            expression,
                            asterisk_token: false,
                        },
                    );
                }
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    expression = self.parse_tagged_template_rest(start_pos, expression, None);
                }
                SyntaxKind::OpenParenToken if allow_call => {
                    expression = self.parse_call_rest(start_pos, expression, false);
                }
                SyntaxKind::LessThanToken
                    if allow_call && self.is_type_arguments_in_expression() =>
                {
                    expression = self.parse_call_rest(start_pos, expression, false);
                }
                _ => break,
            }
        }
        expression
    }

    fn parse_member_name(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::PrivateIdentifier) {
            self.parse_private_identifier()
        } else {
            self.parse_identifier_name()
        }
    }

    fn finish_property_access(
        &mut self,
        start_pos: u32,
        expression: NodeIndex,
        question_dot_token: bool,
        name: NodeIndex,
    ) -> NodeIndex {
        let end_pos = self.token_end();
        self.arena.add_access_expr(
            syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION,
            start_pos,
            end_pos,
            AccessExprData {
                expression,
                question_dot_token,
                name_or_argument: name,
            },
        )
    }

    fn parse_element_access_rest(
        &mut self,
        start_pos: u32,
        expression: NodeIndex,
        question_dot_token: bool,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let argument = self.with_context(
            0,
            CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_IN_CONDITIONAL_TRUE,
            |p| p.parse_expression(),
        );
        if argument.is_none() {
            self.error_expression_expected();
        }
        self.parse_expected(SyntaxKind::CloseBracketToken);
        let end_pos = self.token_end();
        self.arena.add_access_expr(
            syntax_kind_ext::ELEMENT_ACCESS_EXPRESSION,
            start_pos,
            end_pos,
            AccessExprData {
                expression,
                question_dot_token,
                name_or_argument: argument,
            },
        )
    }

    /// `<T>(args)`, `(args)` or a tagged template with type arguments.
    fn parse_call_rest(
        &mut self,
        start_pos: u32,
        expression: NodeIndex,
        question_dot_token: bool,
    ) -> NodeIndex {
        let type_arguments = if self.is_token(SyntaxKind::LessThanToken) {
            self.parse_type_arguments()
        } else {
            None
        };
        if matches!(
            self.token(),
            SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead
        ) {
            return self.parse_tagged_template_rest(start_pos, expression, type_arguments);
        }
        let arguments = self.parse_argument_list();
        let end_pos = self.token_end();
        self.arena.add_call_expr(
            syntax_kind_ext::CALL_EXPRESSION,
            start_pos,
            end_pos,
            CallExprData {
                expression,
                question_dot_token,
                type_arguments,
                arguments: Some(arguments),
            },
        )
    }

    fn parse_tagged_template_rest(
        &mut self,
        start_pos: u32,
        tag: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        let template = if self.is_token(SyntaxKind::NoSubstitutionTemplateLiteral) {
            self.parse_literal_node()
        } else {
            self.parse_template_expression()
        };
        let end_pos = self.token_end();
        self.arena.add_tagged_template(
            syntax_kind_ext::TAGGED_TEMPLATE_EXPRESSION,
            start_pos,
            end_pos,
            TaggedTemplateData {
                tag,
                type_arguments,
                template,
            },
        )
    }

    pub(crate) fn parse_argument_list(&mut self) -> NodeList {
        self.with_context(
            0,
            CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_IN_CONDITIONAL_TRUE,
            |p| {
                p.parse_delimited_list(
                    SyntaxKind::OpenParenToken,
                    SyntaxKind::CloseParenToken,
                    |p| p.parse_spread_or_assignment_expression(),
                )
            },
        )
    }

    fn parse_spread_or_assignment_expression(&mut self) -> NodeIndex {
        if !self.is_token(SyntaxKind::DotDotDotToken) {
            return self.parse_assignment_expression_or_higher();
        }
        let start_pos = self.token_pos();
        self.next_token();
        let expression = self.parse_assignment_expression_or_higher();
        let end_pos = self.token_end();
        self.arena.add_unary_expr_ex(
            syntax_kind_ext::SPREAD_ELEMENT,
            start_pos,
            end_pos,
            UnaryExprDataEx {
                expression,
                asterisk_token: false,
            },
        )
    }

    /// `f<T>(x)` versus `a < b`: the angle brackets must balance over
    /// type-like tokens and be followed by `(` or a template.
    pub(crate) fn is_type_arguments_in_expression(&mut self) -> bool {
        self.look_ahead(|p| {
            let mut angle_depth = 0u32;
            let mut nest_depth = 0u32;
            loop {
                match p.token() {
                    SyntaxKind::LessThanToken => angle_depth += 1,
                    SyntaxKind::GreaterThanToken => {
                        angle_depth = angle_depth.saturating_sub(1);
                        if angle_depth == 0 {
                            p.next_token();
                            return matches!(
                                p.token(),
                                SyntaxKind::OpenParenToken
                                    | SyntaxKind::NoSubstitutionTemplateLiteral
                                    | SyntaxKind::TemplateHead
                            );
                        }
                    }
                    SyntaxKind::OpenParenToken
                    | SyntaxKind::OpenBracketToken
                    | SyntaxKind::OpenBraceToken => nest_depth += 1,
                    SyntaxKind::CloseParenToken
                    | SyntaxKind::CloseBracketToken
                    | SyntaxKind::CloseBraceToken => {
                        if nest_depth == 0 {
                            return false;
                        }
                        nest_depth -= 1;
                    }
                    SyntaxKind::Identifier
                    | SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::BigIntLiteral
                    | SyntaxKind::NoSubstitutionTemplateLiteral
                    | SyntaxKind::DotToken
                    | SyntaxKind::DotDotDotToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::BarToken
                    | SyntaxKind::AmpersandToken
                    | SyntaxKind::ColonToken
                    | SyntaxKind::QuestionToken
                    | SyntaxKind::EqualsGreaterThanToken
                    | SyntaxKind::MinusToken => {}
                    SyntaxKind::SemicolonToken if nest_depth > 0 => {}
                    kind if is_keyword(kind) => {}
                    _ => return false,
                }
                p.next_token();
            }
        })
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    fn parse_primary_expression(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral => self.parse_literal_node(),
            SyntaxKind::TemplateHead => self.parse_template_expression(),
            SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::ImportKeyword => self.parse_token_node(),
            SyntaxKind::OpenParenToken => self.parse_parenthesized_expression(),
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::AsyncKeyword
                if self.next_token_on_same_line_is(|p| p.is_token(SyntaxKind::FunctionKeyword)) =>
            {
                self.parse_function_expression()
            }
            SyntaxKind::FunctionKeyword => self.parse_function_expression(),
            SyntaxKind::ClassKeyword | SyntaxKind::AtToken => self.parse_class_expression(),
            SyntaxKind::NewKeyword => self.parse_new_expression(),
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                if self.re_scan_slash_token() == SyntaxKind::RegularExpressionLiteral {
                    self.parse_literal_node()
                } else {
                    self.error_expression_expected();
                    NodeIndex::NONE
                }
            }
            SyntaxKind::PrivateIdentifier => self.parse_private_identifier(),
            _ if self.is_identifier() => self.parse_identifier(),
            _ => {
                self.error_expression_expected();
                NodeIndex::NONE
            }
        }
    }

    /// Literal token (numeric, string, regex, template piece) as a node.
    pub(crate) fn parse_literal_node(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let kind = self.token() as u16;
        let text = self.token_value().to_string();
        self.next_token();
        let end_pos = self.token_end();
        self.arena
            .add_literal(kind, start_pos, end_pos, LiteralData { text })
    }

    fn parse_template_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let head = self.parse_literal_node();
        let mut spans = Vec::new();
        loop {
            let span_start = self.token_pos();
            let expression = self.with_context(
                0,
                CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_IN_CONDITIONAL_TRUE,
                |p| p.parse_expression(),
            );
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                self.parse_expected(SyntaxKind::CloseBraceToken);
                break;
            }
            let piece = self.re_scan_template_token();
            let literal = self.parse_literal_node();
            let end_pos = self.token_end();
            spans.push(self.arena.add_template_span(
                syntax_kind_ext::TEMPLATE_SPAN,
                span_start,
                end_pos,
                TemplateSpanData {
                    expression,
                    literal,
                },
            ));
            if piece != SyntaxKind::TemplateMiddle {
                break;
            }
        }
        let template_spans = self.make_node_list(spans);
        let end_pos = self.token_end();
        self.arena.add_template_expr(
            syntax_kind_ext::TEMPLATE_EXPRESSION,
            start_pos,
            end_pos,
            TemplateExprData {
                head,
                template_spans,
            },
        )
    }

    fn parse_parenthesized_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenParenToken);
        let expression = self.with_context(
            0,
            CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_IN_CONDITIONAL_TRUE,
            |p| p.parse_expression(),
        );
        self.parse_expected(SyntaxKind::CloseParenToken);
        let end_pos = self.token_end();
        self.arena.add_parenthesized(
            syntax_kind_ext::PARENTHESIZED_EXPRESSION,
            start_pos,
            end_pos,
            ParenthesizedData { expression },
        )
    }

    fn spans_multiple_lines(&self, start: u32, end: u32) -> bool {
        self.get_source_text()
            .get(start as usize..end as usize)
            .is_some_and(|text| text.trim_start().contains('\n'))
    }

    fn parse_array_literal(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let elements = self.with_context(
            0,
            CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_IN_CONDITIONAL_TRUE,
            |p| {
                p.parse_delimited_list(
                    SyntaxKind::OpenBracketToken,
                    SyntaxKind::CloseBracketToken,
                    |p| {
                        if p.is_token(SyntaxKind::CommaToken) {
                            let pos = p.token_pos();
                            p.arena
                                .add_token(syntax_kind_ext::OMITTED_EXPRESSION, pos, pos)
                        } else {
                            p.parse_spread_or_assignment_expression()
                        }
                    },
                )
            },
        );
        let end_pos = self.token_end();
        let multi_line = self.spans_multiple_lines(start_pos, end_pos);
        self.arena.add_literal_expr(
            syntax_kind_ext::ARRAY_LITERAL_EXPRESSION,
            start_pos,
            end_pos,
            LiteralExprData {
                elements,
                multi_line,
            },
        )
    }

    fn parse_object_literal(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let elements = self.with_context(
            0,
            CONTEXT_FLAG_DISALLOW_IN | CONTEXT_FLAG_IN_CONDITIONAL_TRUE,
            |p| {
                p.parse_delimited_list(
                    SyntaxKind::OpenBraceToken,
                    SyntaxKind::CloseBraceToken,
                    |p| p.parse_object_literal_element(),
                )
            },
        );
        let end_pos = self.token_end();
        let multi_line = self.spans_multiple_lines(start_pos, end_pos);
        self.arena.add_literal_expr(
            syntax_kind_ext::OBJECT_LITERAL_EXPRESSION,
            start_pos,
            end_pos,
            LiteralExprData {
                elements,
                multi_line,
            },
        )
    }

    fn parse_object_literal_element(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            let expression = self.parse_assignment_expression_or_higher();
            let end_pos = self.token_end();
            return self.arena.add_unary_expr_ex(
                syntax_kind_ext::SPREAD_ASSIGNMENT,
                start_pos,
                end_pos,
                UnaryExprDataEx {
                    expression,
                    asterisk_token: false,
                },
            );
        }

        let mut modifiers = Vec::new();
        if self.is_token(SyntaxKind::AsyncKeyword)
            && self.next_token_on_same_line_is(|p| {
                p.is_token(SyntaxKind::AsteriskToken) || p.is_start_of_property_name()
            })
        {
            modifiers.push(self.parse_token_node());
        }

        if matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
            && modifiers.is_empty()
            && self.look_ahead(|p| {
                p.next_token();
                p.is_start_of_property_name()
            })
        {
            let kind = if self.is_token(SyntaxKind::GetKeyword) {
                syntax_kind_ext::GET_ACCESSOR
            } else {
                syntax_kind_ext::SET_ACCESSOR
            };
            self.next_token();
            return self.parse_accessor_declaration(start_pos, None, kind);
        }

        let asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);
        let is_plain_identifier = self.is_identifier();
        let name = self.parse_property_name();
        if name.is_none() {
            return NodeIndex::NONE;
        }

        if asterisk_token
            || self.is_token(SyntaxKind::OpenParenToken)
            || self.is_token(SyntaxKind::LessThanToken)
        {
            let modifiers = if modifiers.is_empty() {
                None
            } else {
                Some(self.make_node_list(modifiers))
            };
            return self.parse_method_declaration_rest(
                start_pos,
                modifiers,
                asterisk_token,
                name,
                false,
            );
        }

        if is_plain_identifier
            && matches!(
                self.token(),
                SyntaxKind::CommaToken | SyntaxKind::CloseBraceToken | SyntaxKind::EqualsToken
            )
        {
            let object_assignment_initializer = self.parse_initializer();
            let end_pos = self.token_end();
            return self.arena.add_shorthand_property(
                syntax_kind_ext::SHORTHAND_PROPERTY_ASSIGNMENT,
                start_pos,
                end_pos,
                ShorthandPropertyData {
                    modifiers: None,
                    name,
                    object_assignment_initializer,
                },
            );
        }

        self.parse_expected(SyntaxKind::ColonToken);
        let initializer = self.parse_assignment_expression_or_higher();
        let end_pos = self.token_end();
        self.arena.add_property_assignment(
            syntax_kind_ext::PROPERTY_ASSIGNMENT,
            start_pos,
            end_pos,
            PropertyAssignmentData {
                modifiers: None,
                name,
                initializer,
            },
        )
    }

    fn parse_function_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_async = self.parse_optional(SyntaxKind::AsyncKeyword);
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);
        let name = if self.is_token(SyntaxKind::OpenParenToken)
            || self.is_token(SyntaxKind::LessThanToken)
        {
            NodeIndex::NONE
        } else {
            self.with_context(0, CONTEXT_FLAG_ASYNC | CONTEXT_FLAG_GENERATOR, |p| {
                p.parse_identifier()
            })
        };
        let (type_parameters, parameters, type_annotation) =
            self.parse_signature(is_async, asterisk_token);
        let body = self.parse_function_block(is_async, asterisk_token);
        let end_pos = self.token_end();
        self.arena.add_function(
            syntax_kind_ext::FUNCTION_EXPRESSION,
            start_pos,
            end_pos,
            FunctionData {
                modifiers: None,
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

    /// `new X<T>(args)` and `new.target`.
    fn parse_new_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_meta_property = self.look_ahead(|p| {
            p.next_token();
            p.is_token(SyntaxKind::DotToken)
        });
        if is_meta_property {
            let new_keyword = self.parse_token_node();
            self.parse_expected(SyntaxKind::DotToken);
            let name = self.parse_identifier_name();
            return self.finish_property_access(start_pos, new_keyword, false, name);
        }

        self.parse_expected(SyntaxKind::NewKeyword);
        let expression_start = self.token_pos();
        let expression = match self.token() {
            SyntaxKind::SuperKeyword | SyntaxKind::ImportKeyword => self.parse_token_node(),
            _ => self.parse_primary_expression(),
        };
        let expression = if expression.is_some() {
            self.parse_member_or_call_rest(expression_start, expression, false)
        } else {
            expression
        };
        let type_arguments = if self.is_token(SyntaxKind::LessThanToken)
            && self.is_type_arguments_in_expression()
        {
            self.parse_type_arguments()
        } else {
            None
        };
        let arguments = if self.is_token(SyntaxKind::OpenParenToken) {
            Some(self.parse_argument_list())
        } else {
            None
        };
        let end_pos = self.token_end();
        self.arena.add_call_expr(
            syntax_kind_ext::NEW_EXPRESSION,
            start_pos,
            end_pos,
            CallExprData {
                expression,
                question_dot_token: false,
                type_arguments,
                arguments,
            },
        )
    }

    // =========================================================================
    // Arrow functions
    // =========================================================================

    fn try_parse_arrow_function(&mut self) -> Option<NodeIndex> {
        match self.token() {
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => self
                .is_parenthesized_arrow_function()
                .then(|| self.parse_parenthesized_arrow_function()),
            SyntaxKind::AsyncKeyword => {
                if self.is_async_simple_arrow_function() {
                    let start_pos = self.token_pos();
                    self.next_token();
                    let parameter = self.parse_identifier();
                    Some(self.parse_simple_arrow_function(start_pos, parameter, true))
                } else if self.is_parenthesized_arrow_function() {
                    Some(self.parse_parenthesized_arrow_function())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn is_async_simple_arrow_function(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if p.has_preceding_line_break() || !p.is_identifier() {
                return false;
            }
            p.next_token();
            p.is_token(SyntaxKind::EqualsGreaterThanToken)
        })
    }

    /// Token-level scan: `[async] [<T>] ( ... ) [: R] =>`.
    fn is_parenthesized_arrow_function(&mut self) -> bool {
        let allow_return_type = self.context_flags & CONTEXT_FLAG_IN_CONDITIONAL_TRUE == 0;
        self.look_ahead(|p| {
            if p.is_token(SyntaxKind::AsyncKeyword) {
                p.next_token();
                if p.has_preceding_line_break() {
                    return false;
                }
            }
            if p.is_token(SyntaxKind::LessThanToken) {
                if !p.skip_balanced(SyntaxKind::LessThanToken, SyntaxKind::GreaterThanToken) {
                    return false;
                }
            }
            if !p.is_token(SyntaxKind::OpenParenToken)
                || !p.skip_balanced(SyntaxKind::OpenParenToken, SyntaxKind::CloseParenToken)
            {
                return false;
            }
            match p.token() {
                SyntaxKind::EqualsGreaterThanToken => true,
                SyntaxKind::ColonToken if allow_return_type => {
                    p.next_token();
                    p.skip_return_type_to_arrow()
                }
                _ => false,
            }
        })
    }

    /// Lookahead helper: skip from `open` to just past its matching `close`.
    fn skip_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) -> bool {
        let mut depth = 0u32;
        let mut braces = Vec::new();
        loop {
            let token = self.token();
            if token == SyntaxKind::EndOfFileToken {
                return false;
            }
            if token == open {
                depth += 1;
            } else if token == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    self.next_token();
                    return true;
                }
            }
            self.advance_lookahead_token(&mut braces);
        }
    }

    /// Lookahead helper: skip a return type annotation and report whether
    /// `=>` follows it.
    fn skip_return_type_to_arrow(&mut self) -> bool {
        let mut depth = 0u32;
        let mut braces = Vec::new();
        let mut first = true;
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken => return false,
                SyntaxKind::EqualsGreaterThanToken if depth == 0 => return true,
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::LessThanToken => depth += 1,
                SyntaxKind::OpenBraceToken => {
                    if depth == 0 && !first {
                        return false;
                    }
                    depth += 1;
                }
                SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::GreaterThanToken => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                }
                SyntaxKind::SemicolonToken | SyntaxKind::CommaToken | SyntaxKind::EqualsToken
                    if depth == 0 =>
                {
                    return false;
                }
                _ => {}
            }
            first = false;
            self.advance_lookahead_token(&mut braces);
        }
    }

    /// Advance one token during a lookahead scan, re-scanning template
    /// continuations so `${ ... }` pieces are not read as code.
    fn advance_lookahead_token(&mut self, braces: &mut Vec<bool>) {
        match self.token() {
            SyntaxKind::OpenBraceToken => braces.push(false),
            SyntaxKind::TemplateHead => braces.push(true),
            SyntaxKind::CloseBraceToken => {
                if braces.pop() == Some(true)
                    && self.re_scan_template_token() == SyntaxKind::TemplateMiddle
                {
                    braces.push(true);
                }
            }
            _ => {}
        }
        self.next_token();
    }

    fn parse_parenthesized_arrow_function(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_async = self.parse_optional(SyntaxKind::AsyncKeyword);
        let (type_parameters, parameters, type_annotation) = self.parse_signature(is_async, false);
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken);
        let body = self.parse_arrow_function_body(is_async);
        let end_pos = self.token_end();
        self.arena.add_function(
            syntax_kind_ext::ARROW_FUNCTION,
            start_pos,
            end_pos,
            FunctionData {
                modifiers: None,
                is_async,
                asterisk_token: false,
                name: NodeIndex::NONE,
                type_parameters,
                parameters,
                type_annotation,
                body,
            },
        )
    }

    /// `x => body`, the identifier already parsed.
    fn parse_simple_arrow_function(
        &mut self,
        start_pos: u32,
        identifier: NodeIndex,
        is_async: bool,
    ) -> NodeIndex {
        let (param_pos, param_end) = self
            .arena
            .get(identifier)
            .map_or((start_pos, start_pos), |n| (n.pos, n.end));
        let parameter = self.arena.add_parameter(
            syntax_kind_ext::PARAMETER,
            param_pos,
            param_end,
            ParameterData {
                modifiers: None,
                dot_dot_dot_token: false,
                name: identifier,
                question_token: false,
                type_annotation: NodeIndex::NONE,
                initializer: NodeIndex::NONE,
            },
        );
        let parameters = self.make_node_list(vec![parameter]);
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken);
        let body = self.parse_arrow_function_body(is_async);
        let end_pos = self.token_end();
        self.arena.add_function(
            syntax_kind_ext::ARROW_FUNCTION,
            start_pos,
            end_pos,
            FunctionData {
                modifiers: None,
                is_async,
                asterisk_token: false,
                name: NodeIndex::NONE,
                type_parameters: None,
                parameters,
                type_annotation: NodeIndex::NONE,
                body,
            },
        )
    }

    fn parse_arrow_function_body(&mut self, is_async: bool) -> NodeIndex {
        if self.is_token(SyntaxKind::OpenBraceToken) {
            return self.parse_function_block(is_async, false);
        }
        let (set, clear) = if is_async {
            (CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_GENERATOR)
        } else {
            (0, CONTEXT_FLAG_ASYNC | CONTEXT_FLAG_GENERATOR)
        };
        self.with_context(set, clear, |p| p.parse_assignment_expression_or_higher())
    }

    // =========================================================================
    // Classification
    // =========================================================================

    pub(crate) fn is_start_of_property_name(&self) -> bool {
        self.is_identifier_or_keyword()
            || matches!(
                self.token(),
                SyntaxKind::StringLiteral
                    | SyntaxKind::NumericLiteral
                    | SyntaxKind::BigIntLiteral
                    | SyntaxKind::OpenBracketToken
                    | SyntaxKind::PrivateIdentifier
            )
    }

    pub(crate) fn is_start_of_expression(&self) -> bool {
        if self.is_identifier() {
            return true;
        }
        matches!(
            self.token(),
            SyntaxKind::NumericLiteral
                | SyntaxKind::BigIntLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::NoSubstitutionTemplateLiteral
                | SyntaxKind::TemplateHead
                | SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::NewKeyword
                | SyntaxKind::SlashToken
                | SyntaxKind::SlashEqualsToken
                | SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::TildeToken
                | SyntaxKind::ExclamationToken
                | SyntaxKind::DeleteKeyword
                | SyntaxKind::TypeOfKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::PlusPlusToken
                | SyntaxKind::MinusMinusToken
                | SyntaxKind::LessThanToken
                | SyntaxKind::AwaitKeyword
                | SyntaxKind::YieldKeyword
                | SyntaxKind::ThisKeyword
                | SyntaxKind::SuperKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::ImportKeyword
                | SyntaxKind::PrivateIdentifier
                | SyntaxKind::AtToken
        )
    }
}

#[cfg(test)]
#[path = "../../tests/state_expression_tests.rs"]
mod tests;
