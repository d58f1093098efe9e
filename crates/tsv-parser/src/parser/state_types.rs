//! Parser state - type annotations, type parameters and type members.
//!
//! Types are parsed only so that expression positions are known; the
//! inline-value walk skips every type node.
use super::state::ParserState;
use crate::parser::{
    NodeIndex, NodeList,
    node::{
        ArrayTypeData, CompositeTypeData, ConditionalTypeData, FunctionTypeData,
        IndexedAccessTypeData, InferTypeData, LiteralTypeData, MappedTypeData,
        NamedTupleMemberData, QualifiedNameData, SignatureData, TemplateExprData,
        TemplateSpanData, TupleTypeData, TypeLiteralData, TypeOperatorData, TypeParameterData,
        TypePredicateData, TypeQueryData, TypeRefData, UnaryExprData, WrappedTypeData,
    },
    syntax_kind_ext,
};
use tsv_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use tsv_scanner::SyntaxKind;

impl ParserState {
    /// `: Type` or NONE.
    pub(crate) fn parse_type_annotation(&mut self) -> NodeIndex {
        if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        }
    }

    /// Return type position: also accepts `x is T`, `asserts x [is T]`.
    pub(crate) fn parse_return_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_predicate = (self.is_identifier() || self.is_token(SyntaxKind::ThisKeyword))
            && self.next_token_on_same_line_is(|p| p.is_token(SyntaxKind::IsKeyword));
        if is_predicate {
            let parameter_name = self.parse_predicate_parameter_name();
            self.parse_expected(SyntaxKind::IsKeyword);
            let type_node = self.parse_type();
            return self.finish_type_predicate(start_pos, false, parameter_name, type_node);
        }

        let is_asserts = self.is_token(SyntaxKind::AssertsKeyword)
            && self.next_token_on_same_line_is(|p| {
                p.is_identifier() || p.is_token(SyntaxKind::ThisKeyword)
            });
        if is_asserts {
            self.next_token();
            let parameter_name = self.parse_predicate_parameter_name();
            let type_node = if self.parse_optional(SyntaxKind::IsKeyword) {
                self.parse_type()
            } else {
                NodeIndex::NONE
            };
            return self.finish_type_predicate(start_pos, true, parameter_name, type_node);
        }

        self.parse_type()
    }

    fn parse_predicate_parameter_name(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::ThisKeyword) {
            let start_pos = self.token_pos();
            self.next_token();
            let end_pos = self.token_end();
            self.arena
                .add_token(syntax_kind_ext::THIS_TYPE, start_pos, end_pos)
        } else {
            self.parse_identifier()
        }
    }

    fn finish_type_predicate(
        &mut self,
        start_pos: u32,
        asserts_modifier: bool,
        parameter_name: NodeIndex,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let end_pos = self.token_end();
        self.arena.add_type_predicate(
            syntax_kind_ext::TYPE_PREDICATE,
            start_pos,
            end_pos,
            TypePredicateData {
                asserts_modifier,
                parameter_name,
                type_node,
            },
        )
    }

    pub(crate) fn parse_type(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let result = self.parse_type_worker();
        self.exit_recursion();
        result
    }

    fn parse_type_worker(&mut self) -> NodeIndex {
        if self.is_start_of_function_or_constructor_type() {
            return self.parse_function_or_constructor_type();
        }
        let start_pos = self.token_pos();
        let check_type = self.parse_union_type_or_higher();
        if check_type.is_none()
            || self.has_preceding_line_break()
            || !self.parse_optional(SyntaxKind::ExtendsKeyword)
        {
            return check_type;
        }
        let extends_type = self.parse_union_type_or_higher();
        self.parse_expected(SyntaxKind::QuestionToken);
        let true_type = self.parse_type();
        self.parse_expected(SyntaxKind::ColonToken);
        let false_type = self.parse_type();
        let end_pos = self.token_end();
        self.arena.add_conditional_type(
            syntax_kind_ext::CONDITIONAL_TYPE,
            start_pos,
            end_pos,
            ConditionalTypeData {
                check_type,
                extends_type,
                true_type,
                false_type,
            },
        )
    }

    fn is_start_of_function_or_constructor_type(&mut self) -> bool {
        match self.token() {
            SyntaxKind::LessThanToken | SyntaxKind::NewKeyword => true,
            SyntaxKind::AbstractKeyword => self.look_ahead(|p| {
                p.next_token();
                p.is_token(SyntaxKind::NewKeyword)
            }),
            SyntaxKind::OpenParenToken => {
                self.look_ahead(|p| p.is_unambiguously_start_of_function_type())
            }
            _ => false,
        }
    }

    /// At `(`: `()`, `(...`, `(a:`, `(a,`, `(a?`, `(a=` or `(a) =>`.
    fn is_unambiguously_start_of_function_type(&mut self) -> bool {
        self.next_token();
        if matches!(
            self.token(),
            SyntaxKind::CloseParenToken | SyntaxKind::DotDotDotToken
        ) {
            return true;
        }
        if !self.skip_parameter_start() {
            return false;
        }
        match self.token() {
            SyntaxKind::ColonToken
            | SyntaxKind::CommaToken
            | SyntaxKind::QuestionToken
            | SyntaxKind::EqualsToken => true,
            SyntaxKind::CloseParenToken => {
                self.next_token();
                self.is_token(SyntaxKind::EqualsGreaterThanToken)
            }
            _ => false,
        }
    }

    fn skip_parameter_start(&mut self) -> bool {
        if self.is_identifier() || self.is_token(SyntaxKind::ThisKeyword) {
            self.next_token();
            return true;
        }
        let (open, close) = match self.token() {
            SyntaxKind::OpenBraceToken => (SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken),
            SyntaxKind::OpenBracketToken => {
                (SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken)
            }
            _ => return false,
        };
        let mut depth = 0u32;
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
            self.next_token();
        }
    }

    fn parse_function_or_constructor_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_abstract = self.parse_optional(SyntaxKind::AbstractKeyword);
        let kind = if self.parse_optional(SyntaxKind::NewKeyword) {
            syntax_kind_ext::CONSTRUCTOR_TYPE
        } else {
            syntax_kind_ext::FUNCTION_TYPE
        };
        let type_parameters = self.parse_type_parameters();
        let parameters = self.parse_parameters();
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken);
        let type_annotation = self.parse_return_type();
        let end_pos = self.token_end();
        self.arena.add_function_type(
            kind,
            start_pos,
            end_pos,
            FunctionTypeData {
                type_parameters,
                parameters,
                type_annotation,
                is_abstract,
            },
        )
    }

    fn parse_union_type_or_higher(&mut self) -> NodeIndex {
        self.parse_composite_type(
            syntax_kind_ext::UNION_TYPE,
            SyntaxKind::BarToken,
            Self::parse_intersection_type_or_higher,
        )
    }

    fn parse_intersection_type_or_higher(&mut self) -> NodeIndex {
        self.parse_composite_type(
            syntax_kind_ext::INTERSECTION_TYPE,
            SyntaxKind::AmpersandToken,
            Self::parse_type_operator_or_higher,
        )
    }

    /// `A | B | C`; a leading operator makes a one-element union.
    fn parse_composite_type(
        &mut self,
        kind: u16,
        operator: SyntaxKind,
        parse_constituent: fn(&mut Self) -> NodeIndex,
    ) -> NodeIndex {
        let start_pos = self.token_pos();
        let has_leading_operator = self.parse_optional(operator);
        let first = if self.is_start_of_function_or_constructor_type() {
            self.parse_function_or_constructor_type()
        } else {
            parse_constituent(self)
        };
        if !has_leading_operator && !self.is_token(operator) {
            return first;
        }
        let mut types = vec![first];
        while self.parse_optional(operator) {
            types.push(parse_constituent(self));
        }
        let types = self.make_node_list(types);
        let end_pos = self.token_end();
        self.arena
            .add_composite_type(kind, start_pos, end_pos, CompositeTypeData { types })
    }

    fn parse_type_operator_or_higher(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        match self.token() {
            SyntaxKind::KeyOfKeyword | SyntaxKind::UniqueKeyword | SyntaxKind::ReadonlyKeyword => {
                let operator = self.token() as u16;
                self.next_token();
                let type_node = self.parse_type_operator_or_higher();
                let end_pos = self.token_end();
                self.arena.add_type_operator(
                    syntax_kind_ext::TYPE_OPERATOR,
                    start_pos,
                    end_pos,
                    TypeOperatorData {
                        operator,
                        type_node,
                    },
                )
            }
            SyntaxKind::InferKeyword => {
                self.next_token();
                let parameter_start = self.token_pos();
                let name = self.parse_identifier();
                let parameter_end = self.token_end();
                let type_parameter = self.arena.add_type_parameter(
                    syntax_kind_ext::TYPE_PARAMETER,
                    parameter_start,
                    parameter_end,
                    TypeParameterData {
                        modifiers: None,
                        name,
                        constraint: NodeIndex::NONE,
                        default: NodeIndex::NONE,
                    },
                );
                let end_pos = self.token_end();
                self.arena.add_infer_type(
                    syntax_kind_ext::INFER_TYPE,
                    start_pos,
                    end_pos,
                    InferTypeData { type_parameter },
                )
            }
            _ => self.parse_postfix_type_or_higher(),
        }
    }

    /// `T[]` and `T[K]`
    fn parse_postfix_type_or_higher(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut type_node = self.parse_non_array_type();
        while type_node.is_some()
            && !self.has_preceding_line_break()
            && self.is_token(SyntaxKind::OpenBracketToken)
        {
            self.next_token();
            if self.parse_optional(SyntaxKind::CloseBracketToken) {
                let end_pos = self.token_end();
                type_node = self.arena.add_array_type(
                    syntax_kind_ext::ARRAY_TYPE,
                    start_pos,
                    end_pos,
                    ArrayTypeData {
                        element_type: type_node,
                    },
                );
            } else {
                let index_type = self.parse_type();
                self.parse_expected(SyntaxKind::CloseBracketToken);
                let end_pos = self.token_end();
                type_node = self.arena.add_indexed_access_type(
                    syntax_kind_ext::INDEXED_ACCESS_TYPE,
                    start_pos,
                    end_pos,
                    IndexedAccessTypeData {
                        object_type: type_node,
                        index_type,
                    },
                );
            }
        }
        type_node
    }

    fn parse_non_array_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        match self.token() {
            SyntaxKind::AnyKeyword
            | SyntaxKind::UnknownKeyword
            | SyntaxKind::StringKeyword
            | SyntaxKind::NumberKeyword
            | SyntaxKind::BigIntKeyword
            | SyntaxKind::SymbolKeyword
            | SyntaxKind::BooleanKeyword
            | SyntaxKind::UndefinedKeyword
            | SyntaxKind::NeverKeyword
            | SyntaxKind::ObjectKeyword
                if !self.look_ahead(|p| {
                    p.next_token();
                    p.is_token(SyntaxKind::DotToken)
                }) =>
            {
                self.parse_token_node()
            }
            SyntaxKind::VoidKeyword => self.parse_token_node(),
            SyntaxKind::NullKeyword | SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                let literal = self.parse_token_node();
                self.finish_literal_type(start_pos, literal)
            }
            SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral => {
                let literal = self.parse_literal_node();
                self.finish_literal_type(start_pos, literal)
            }
            SyntaxKind::MinusToken => {
                self.next_token();
                let operand = self.parse_literal_node();
                let end_pos = self.token_end();
                let literal = self.arena.add_unary_expr(
                    syntax_kind_ext::PREFIX_UNARY_EXPRESSION,
                    start_pos,
                    end_pos,
                    UnaryExprData {
                        operator: SyntaxKind::MinusToken as u16,
                        operand,
                    },
                );
                self.finish_literal_type(start_pos, literal)
            }
            SyntaxKind::TemplateHead => self.parse_template_literal_type(),
            SyntaxKind::ThisKeyword => {
                self.next_token();
                let end_pos = self.token_end();
                self.arena
                    .add_token(syntax_kind_ext::THIS_TYPE, start_pos, end_pos)
            }
            SyntaxKind::TypeOfKeyword => {
                self.next_token();
                let expr_name = self.parse_entity_name();
                let type_arguments = if !self.has_preceding_line_break()
                    && self.is_token(SyntaxKind::LessThanToken)
                {
                    self.parse_type_arguments()
                } else {
                    None
                };
                let end_pos = self.token_end();
                self.arena.add_type_query(
                    syntax_kind_ext::TYPE_QUERY,
                    start_pos,
                    end_pos,
                    TypeQueryData {
                        expr_name,
                        type_arguments,
                    },
                )
            }
            SyntaxKind::OpenBraceToken => {
                if self.is_start_of_mapped_type() {
                    self.parse_mapped_type()
                } else {
                    let members = self.parse_type_members();
                    let end_pos = self.token_end();
                    self.arena.add_type_literal(
                        syntax_kind_ext::TYPE_LITERAL,
                        start_pos,
                        end_pos,
                        TypeLiteralData { members },
                    )
                }
            }
            SyntaxKind::OpenBracketToken => self.parse_tuple_type(),
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let type_node = self.parse_type();
                self.parse_expected(SyntaxKind::CloseParenToken);
                let end_pos = self.token_end();
                self.arena.add_wrapped_type(
                    syntax_kind_ext::PARENTHESIZED_TYPE,
                    start_pos,
                    end_pos,
                    WrappedTypeData { type_node },
                )
            }
            _ if self.is_identifier_or_keyword() && !self.is_token(SyntaxKind::ExtendsKeyword) => {
                self.parse_type_reference()
            }
            _ => {
                self.error_at_current_token(
                    diagnostic_messages::TYPE_EXPECTED,
                    diagnostic_codes::TYPE_EXPECTED,
                );
                NodeIndex::NONE
            }
        }
    }

    fn finish_literal_type(&mut self, start_pos: u32, literal: NodeIndex) -> NodeIndex {
        let end_pos = self.token_end();
        self.arena.add_literal_type(
            syntax_kind_ext::LITERAL_TYPE,
            start_pos,
            end_pos,
            LiteralTypeData { literal },
        )
    }

    /// `` `prefix${T}suffix` `` in type position.
    fn parse_template_literal_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let head = self.parse_literal_node();
        let mut spans = Vec::new();
        loop {
            let span_start = self.token_pos();
            let type_node = self.parse_type();
            if !self.is_token(SyntaxKind::CloseBraceToken) {
                self.parse_expected(SyntaxKind::CloseBraceToken);
                break;
            }
            let piece = self.re_scan_template_token();
            let literal = self.parse_literal_node();
            let end_pos = self.token_end();
            spans.push(self.arena.add_template_span(
                syntax_kind_ext::TEMPLATE_LITERAL_TYPE_SPAN,
                span_start,
                end_pos,
                TemplateSpanData {
                    expression: type_node,
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
            syntax_kind_ext::TEMPLATE_LITERAL_TYPE,
            start_pos,
            end_pos,
            TemplateExprData {
                head,
                template_spans,
            },
        )
    }

    fn parse_type_reference(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let type_name = self.parse_entity_name();
        let type_arguments =
            if !self.has_preceding_line_break() && self.is_token(SyntaxKind::LessThanToken) {
                self.parse_type_arguments()
            } else {
                None
            };
        let end_pos = self.token_end();
        self.arena.add_type_ref(
            syntax_kind_ext::TYPE_REFERENCE,
            start_pos,
            end_pos,
            TypeRefData {
                type_name,
                type_arguments,
            },
        )
    }

    /// `A.B.C`
    fn parse_entity_name(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut name = if self.is_token(SyntaxKind::ThisKeyword) {
            self.parse_token_node()
        } else {
            self.parse_identifier_name()
        };
        while name.is_some() && self.parse_optional(SyntaxKind::DotToken) {
            let right = self.parse_identifier_name();
            let end_pos = self.token_end();
            name = self.arena.add_qualified_name(
                syntax_kind_ext::QUALIFIED_NAME,
                start_pos,
                end_pos,
                QualifiedNameData { left: name, right },
            );
        }
        name
    }

    fn parse_tuple_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let elements = self.parse_delimited_list(
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
            |p| p.parse_tuple_element(),
        );
        let end_pos = self.token_end();
        self.arena.add_tuple_type(
            syntax_kind_ext::TUPLE_TYPE,
            start_pos,
            end_pos,
            TupleTypeData { elements },
        )
    }

    fn parse_tuple_element(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_named = self.look_ahead(|p| {
            p.parse_optional(SyntaxKind::DotDotDotToken);
            if !p.is_identifier_or_keyword() {
                return false;
            }
            p.next_token();
            p.parse_optional(SyntaxKind::QuestionToken);
            p.is_token(SyntaxKind::ColonToken)
        });
        if is_named {
            let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
            let name = self.parse_identifier_name();
            let question_token = self.parse_optional(SyntaxKind::QuestionToken);
            self.parse_expected(SyntaxKind::ColonToken);
            let type_node = self.parse_type();
            let end_pos = self.token_end();
            return self.arena.add_named_tuple_member(
                syntax_kind_ext::NAMED_TUPLE_MEMBER,
                start_pos,
                end_pos,
                NamedTupleMemberData {
                    dot_dot_dot_token,
                    name,
                    question_token,
                    type_node,
                },
            );
        }

        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            let type_node = self.parse_type();
            let end_pos = self.token_end();
            return self.arena.add_wrapped_type(
                syntax_kind_ext::REST_TYPE,
                start_pos,
                end_pos,
                WrappedTypeData { type_node },
            );
        }

        let type_node = self.parse_type();
        if type_node.is_some() && self.parse_optional(SyntaxKind::QuestionToken) {
            let end_pos = self.token_end();
            return self.arena.add_wrapped_type(
                syntax_kind_ext::OPTIONAL_TYPE,
                start_pos,
                end_pos,
                WrappedTypeData { type_node },
            );
        }
        type_node
    }

    /// `{ [+|-]readonly [K in T as N][+|-]?: X }`
    fn is_start_of_mapped_type(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if p.is_token(SyntaxKind::PlusToken) || p.is_token(SyntaxKind::MinusToken) {
                p.next_token();
                if !p.is_token(SyntaxKind::ReadonlyKeyword) {
                    return false;
                }
            }
            if p.is_token(SyntaxKind::ReadonlyKeyword) {
                p.next_token();
            }
            if !p.is_token(SyntaxKind::OpenBracketToken) {
                return false;
            }
            p.next_token();
            if !p.is_identifier() {
                return false;
            }
            p.next_token();
            p.is_token(SyntaxKind::InKeyword)
        })
    }

    fn parse_mapped_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let readonly_token = match self.token() {
            SyntaxKind::PlusToken | SyntaxKind::MinusToken => {
                let sign = self.token() as u16;
                self.next_token();
                self.parse_expected(SyntaxKind::ReadonlyKeyword);
                sign
            }
            SyntaxKind::ReadonlyKeyword => {
                self.next_token();
                SyntaxKind::ReadonlyKeyword as u16
            }
            _ => 0,
        };
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let parameter_start = self.token_pos();
        let name = self.parse_identifier();
        self.parse_expected(SyntaxKind::InKeyword);
        let constraint = self.parse_type();
        let parameter_end = self.token_end();
        let type_parameter = self.arena.add_type_parameter(
            syntax_kind_ext::TYPE_PARAMETER,
            parameter_start,
            parameter_end,
            TypeParameterData {
                modifiers: None,
                name,
                constraint,
                default: NodeIndex::NONE,
            },
        );
        let name_type = if self.parse_optional(SyntaxKind::AsKeyword) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };
        self.parse_expected(SyntaxKind::CloseBracketToken);
        let question_token = match self.token() {
            SyntaxKind::PlusToken | SyntaxKind::MinusToken => {
                let sign = self.token() as u16;
                self.next_token();
                self.parse_expected(SyntaxKind::QuestionToken);
                sign
            }
            SyntaxKind::QuestionToken => {
                self.next_token();
                SyntaxKind::QuestionToken as u16
            }
            _ => 0,
        };
        let type_node = self.parse_type_annotation();
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let end_pos = self.token_end();
        self.arena.add_mapped_type(
            syntax_kind_ext::MAPPED_TYPE,
            start_pos,
            end_pos,
            MappedTypeData {
                readonly_token,
                type_parameter,
                name_type,
                question_token,
                type_node,
            },
        )
    }

    // =========================================================================
    // Type parameters and arguments
    // =========================================================================

    /// `<T extends C = D, ...>` or None.
    pub(crate) fn parse_type_parameters(&mut self) -> Option<NodeList> {
        if !self.is_token(SyntaxKind::LessThanToken) {
            return None;
        }
        Some(self.parse_delimited_list(
            SyntaxKind::LessThanToken,
            SyntaxKind::GreaterThanToken,
            |p| p.parse_type_parameter(),
        ))
    }

    fn parse_type_parameter(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut modifiers = Vec::new();
        loop {
            let is_variance_or_const = matches!(
                self.token(),
                SyntaxKind::ConstKeyword | SyntaxKind::InKeyword
            ) || (self.is_token(SyntaxKind::Identifier) && self.token_value() == "out");
            if is_variance_or_const && self.next_token_on_same_line_is(|p| p.is_identifier()) {
                modifiers.push(self.parse_token_node());
            } else {
                break;
            }
        }
        let name = self.parse_identifier();
        if name.is_none() {
            return NodeIndex::NONE;
        }
        let constraint = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };
        let default = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        let modifiers = if modifiers.is_empty() {
            None
        } else {
            Some(self.make_node_list(modifiers))
        };
        self.arena.add_type_parameter(
            syntax_kind_ext::TYPE_PARAMETER,
            start_pos,
            end_pos,
            TypeParameterData {
                modifiers,
                name,
                constraint,
                default,
            },
        )
    }

    /// `<A, B>`; the caller has checked for `<`.
    pub(crate) fn parse_type_arguments(&mut self) -> Option<NodeList> {
        Some(self.parse_delimited_list(
            SyntaxKind::LessThanToken,
            SyntaxKind::GreaterThanToken,
            |p| p.parse_type(),
        ))
    }

    // =========================================================================
    // Type members (interfaces and type literals)
    // =========================================================================

    pub(crate) fn parse_type_members(&mut self) -> NodeList {
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let before = self.token_pos();
            let member = self.parse_type_member();
            if member.is_some() {
                members.push(member);
            }
            if !self.parse_optional(SyntaxKind::SemicolonToken) {
                self.parse_optional(SyntaxKind::CommaToken);
            }
            if self.token_pos() == before {
                self.error_unexpected_token();
                self.next_token();
            }
        }
        let members = self.make_node_list(members);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        members
    }

    fn parse_type_member(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        if self.is_token(SyntaxKind::OpenParenToken) || self.is_token(SyntaxKind::LessThanToken) {
            return self.parse_signature_member(
                syntax_kind_ext::CALL_SIGNATURE,
                start_pos,
                None,
                NodeIndex::NONE,
                false,
            );
        }
        if self.is_token(SyntaxKind::NewKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                p.is_token(SyntaxKind::OpenParenToken) || p.is_token(SyntaxKind::LessThanToken)
            })
        {
            self.next_token();
            return self.parse_signature_member(
                syntax_kind_ext::CONSTRUCT_SIGNATURE,
                start_pos,
                None,
                NodeIndex::NONE,
                false,
            );
        }

        let mut modifiers = Vec::new();
        if self.is_token(SyntaxKind::ReadonlyKeyword)
            && self.next_token_on_same_line_is(|p| p.is_start_of_property_name())
        {
            modifiers.push(self.parse_token_node());
        }
        let modifiers = if modifiers.is_empty() {
            None
        } else {
            Some(self.make_node_list(modifiers))
        };

        if self.is_token(SyntaxKind::OpenBracketToken) && self.is_index_signature() {
            return self.parse_index_signature(start_pos, modifiers);
        }

        if matches!(self.token(), SyntaxKind::GetKeyword | SyntaxKind::SetKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                !p.has_preceding_line_break() && p.is_start_of_property_name()
            })
        {
            let kind = if self.is_token(SyntaxKind::GetKeyword) {
                syntax_kind_ext::GET_ACCESSOR
            } else {
                syntax_kind_ext::SET_ACCESSOR
            };
            self.next_token();
            return self.parse_accessor_declaration(start_pos, modifiers, kind);
        }

        let name = self.parse_property_name();
        if name.is_none() {
            return NodeIndex::NONE;
        }
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);
        if self.is_token(SyntaxKind::OpenParenToken) || self.is_token(SyntaxKind::LessThanToken) {
            return self.parse_signature_member(
                syntax_kind_ext::METHOD_SIGNATURE,
                start_pos,
                modifiers,
                name,
                question_token,
            );
        }

        let type_annotation = self.parse_type_annotation();
        // Property signatures cannot have initializers; skip one if present.
        if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_assignment_expression_or_higher();
        }
        let end_pos = self.token_end();
        self.arena.add_signature(
            syntax_kind_ext::PROPERTY_SIGNATURE,
            start_pos,
            end_pos,
            SignatureData {
                modifiers,
                name,
                question_token,
                type_parameters: None,
                parameters: None,
                type_annotation,
            },
        )
    }

    fn parse_signature_member(
        &mut self,
        kind: u16,
        start_pos: u32,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        question_token: bool,
    ) -> NodeIndex {
        let (type_parameters, parameters, type_annotation) = self.parse_signature(false, false);
        let end_pos = self.token_end();
        self.arena.add_signature(
            kind,
            start_pos,
            end_pos,
            SignatureData {
                modifiers,
                name,
                question_token,
                type_parameters,
                parameters: Some(parameters),
                type_annotation,
            },
        )
    }
}

#[cfg(test)]
#[path = "../../tests/state_type_tests.rs"]
mod tests;
