//! Parser state - class declarations, class members, parameters and
//! property names.
use super::state::{CONTEXT_FLAG_DISALLOW_IN, ParserState};
use crate::parser::{
    NodeIndex, NodeList,
    node::{
        AccessorData, ClassData, ComputedPropertyData, ConstructorData, DecoratorData,
        ExprWithTypeArgsData, HeritageData, IndexSignatureData, MethodDeclData, ParameterData,
        PropertyDeclData, StaticBlockData,
    },
    syntax_kind_ext,
};
use tsv_scanner::SyntaxKind;

fn is_class_member_modifier(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PublicKeyword
            | SyntaxKind::PrivateKeyword
            | SyntaxKind::ProtectedKeyword
            | SyntaxKind::StaticKeyword
            | SyntaxKind::ReadonlyKeyword
            | SyntaxKind::AbstractKeyword
            | SyntaxKind::OverrideKeyword
            | SyntaxKind::DeclareKeyword
            | SyntaxKind::AccessorKeyword
            | SyntaxKind::AsyncKeyword
    )
}

fn is_parameter_modifier(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PublicKeyword
            | SyntaxKind::PrivateKeyword
            | SyntaxKind::ProtectedKeyword
            | SyntaxKind::ReadonlyKeyword
            | SyntaxKind::OverrideKeyword
    )
}

impl ParserState {
    // =========================================================================
    // Decorators and modifiers
    // =========================================================================

    /// Zero or more `@expr` decorators.
    pub(crate) fn parse_decorators(&mut self) -> Vec<NodeIndex> {
        let mut decorators = Vec::new();
        while self.is_token(SyntaxKind::AtToken) {
            let start_pos = self.token_pos();
            self.next_token();
            let expression = self.parse_left_hand_side_expression_or_higher();
            let end_pos = self.token_end();
            decorators.push(self.arena.add_decorator(
                syntax_kind_ext::DECORATOR,
                start_pos,
                end_pos,
                DecoratorData { expression },
            ));
        }
        decorators
    }

    /// A modifier keyword is only a modifier when a member name (or `*`,
    /// `[`, `{`) follows it on the same line; `static() {}` is a method.
    fn next_token_can_follow_modifier(&mut self) -> bool {
        self.next_token_on_same_line_is(|p| {
            p.is_start_of_property_name()
                || matches!(
                    p.token(),
                    SyntaxKind::AsteriskToken
                        | SyntaxKind::OpenBraceToken
                        | SyntaxKind::DotDotDotToken
                        | SyntaxKind::AtToken
                )
        })
    }

    fn modifiers_contain(&self, modifiers: Option<&NodeList>, kind: SyntaxKind) -> bool {
        modifiers.is_some_and(|list| {
            list.nodes
                .iter()
                .any(|&m| self.arena.get(m).is_some_and(|n| n.kind == kind as u16))
        })
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub(crate) fn parse_class_declaration(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
    ) -> NodeIndex {
        self.parse_class_like(syntax_kind_ext::CLASS_DECLARATION, start_pos, modifiers)
    }

    pub(crate) fn parse_class_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let decorators = self.parse_decorators();
        let modifiers = if decorators.is_empty() {
            None
        } else {
            Some(self.make_node_list(decorators))
        };
        self.parse_class_like(syntax_kind_ext::CLASS_EXPRESSION, start_pos, modifiers)
    }

    fn parse_class_like(
        &mut self,
        kind: u16,
        start_pos: u32,
        modifiers: Option<NodeList>,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::ClassKeyword);
        let name = if self.is_identifier() && !self.is_token(SyntaxKind::ImplementsKeyword) {
            self.parse_identifier()
        } else {
            NodeIndex::NONE
        };
        let type_parameters = self.parse_type_parameters();
        let heritage_clauses = self.parse_heritage_clauses();
        let members = self.parse_class_members();
        let end_pos = self.token_end();
        self.arena.add_class(
            kind,
            start_pos,
            end_pos,
            ClassData {
                modifiers,
                name,
                type_parameters,
                heritage_clauses,
                members,
            },
        )
    }

    /// `extends A<T>, B implements C` for classes and interfaces.
    pub(crate) fn parse_heritage_clauses(&mut self) -> Option<NodeList> {
        let mut clauses = Vec::new();
        while matches!(
            self.token(),
            SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword
        ) {
            let start_pos = self.token_pos();
            let token = self.token() as u16;
            self.next_token();
            let mut types = Vec::new();
            loop {
                let type_start = self.token_pos();
                let expression = self.parse_left_hand_side_expression_or_higher();
                if expression.is_none() {
                    break;
                }
                let type_arguments = if self.is_token(SyntaxKind::LessThanToken) {
                    self.parse_type_arguments()
                } else {
                    None
                };
                let type_end = self.token_end();
                types.push(self.arena.add_expr_with_type_args(
                    syntax_kind_ext::EXPRESSION_WITH_TYPE_ARGUMENTS,
                    type_start,
                    type_end,
                    ExprWithTypeArgsData {
                        expression,
                        type_arguments,
                    },
                ));
                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
            }
            let types = self.make_node_list(types);
            let end_pos = self.token_end();
            clauses.push(self.arena.add_heritage_clause(
                syntax_kind_ext::HERITAGE_CLAUSE,
                start_pos,
                end_pos,
                HeritageData { token, types },
            ));
        }
        if clauses.is_empty() {
            None
        } else {
            Some(self.make_node_list(clauses))
        }
    }

    fn parse_class_members(&mut self) -> NodeList {
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let before = self.token_pos();
            let member = self.parse_class_member();
            if member.is_some() {
                members.push(member);
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

    fn parse_class_member(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        if self.is_token(SyntaxKind::SemicolonToken) {
            self.next_token();
            let end_pos = self.token_end();
            return self
                .arena
                .add_token(syntax_kind_ext::SEMICOLON_CLASS_ELEMENT, start_pos, end_pos);
        }

        if self.is_token(SyntaxKind::StaticKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                p.is_token(SyntaxKind::OpenBraceToken)
            })
        {
            self.next_token();
            let body = self.parse_function_block(false, false);
            let end_pos = self.token_end();
            return self.arena.add_static_block(
                syntax_kind_ext::CLASS_STATIC_BLOCK_DECLARATION,
                start_pos,
                end_pos,
                StaticBlockData { body },
            );
        }

        let mut modifiers = self.parse_decorators();
        while is_class_member_modifier(self.token()) && self.next_token_can_follow_modifier() {
            modifiers.push(self.parse_token_node());
        }
        let modifiers = if modifiers.is_empty() {
            None
        } else {
            Some(self.make_node_list(modifiers))
        };

        if self.is_token(SyntaxKind::ConstructorKeyword)
            && self.look_ahead(|p| {
                p.next_token();
                p.is_token(SyntaxKind::OpenParenToken) || p.is_token(SyntaxKind::LessThanToken)
            })
        {
            return self.parse_constructor_declaration(start_pos, modifiers);
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

        if self.is_token(SyntaxKind::OpenBracketToken) && self.is_index_signature() {
            let signature = self.parse_index_signature(start_pos, modifiers);
            self.parse_semicolon();
            return signature;
        }

        let asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);
        let name = self.parse_property_name();
        if name.is_none() {
            return NodeIndex::NONE;
        }
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);

        if asterisk_token
            || self.is_token(SyntaxKind::OpenParenToken)
            || self.is_token(SyntaxKind::LessThanToken)
        {
            return self.parse_method_declaration_rest(
                start_pos,
                modifiers,
                asterisk_token,
                name,
                question_token,
            );
        }

        let exclamation_token = !question_token && self.parse_optional(SyntaxKind::ExclamationToken);
        let type_annotation = self.parse_type_annotation();
        let initializer = self.with_context(0, CONTEXT_FLAG_DISALLOW_IN, |p| p.parse_initializer());
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_property_decl(
            syntax_kind_ext::PROPERTY_DECLARATION,
            start_pos,
            end_pos,
            PropertyDeclData {
                modifiers,
                name,
                question_token,
                exclamation_token,
                type_annotation,
                initializer,
            },
        )
    }

    fn parse_constructor_declaration(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
    ) -> NodeIndex {
        self.parse_expected(SyntaxKind::ConstructorKeyword);
        let (type_parameters, parameters, _return_type) = self.parse_signature(false, false);
        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_function_block(false, false)
        } else {
            self.parse_semicolon();
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_constructor(
            syntax_kind_ext::CONSTRUCTOR,
            start_pos,
            end_pos,
            ConstructorData {
                modifiers,
                type_parameters,
                parameters,
                body,
            },
        )
    }

    /// Method after its name: signature and optional body. Shared by class
    /// members and object literal methods.
    pub(crate) fn parse_method_declaration_rest(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
        asterisk_token: bool,
        name: NodeIndex,
        question_token: bool,
    ) -> NodeIndex {
        let is_async = self.modifiers_contain(modifiers.as_ref(), SyntaxKind::AsyncKeyword);
        let (type_parameters, parameters, type_annotation) =
            self.parse_signature(is_async, asterisk_token);
        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_function_block(is_async, asterisk_token)
        } else {
            self.parse_semicolon();
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_method_decl(
            syntax_kind_ext::METHOD_DECLARATION,
            start_pos,
            end_pos,
            MethodDeclData {
                modifiers,
                asterisk_token,
                name,
                question_token,
                type_parameters,
                parameters,
                type_annotation,
                body,
            },
        )
    }

    /// `get name() {}` / `set name(v) {}`, the `get`/`set` keyword consumed.
    /// Interface accessors have no body.
    pub(crate) fn parse_accessor_declaration(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
        kind: u16,
    ) -> NodeIndex {
        let name = self.parse_property_name();
        let (type_parameters, parameters, type_annotation) = self.parse_signature(false, false);
        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_function_block(false, false)
        } else {
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_accessor(
            kind,
            start_pos,
            end_pos,
            AccessorData {
                modifiers,
                name,
                type_parameters,
                parameters,
                type_annotation,
                body,
            },
        )
    }

    /// `[key: string]` versus a computed property name.
    pub(crate) fn is_index_signature(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if p.is_token(SyntaxKind::DotDotDotToken) || p.is_token(SyntaxKind::CloseBracketToken) {
                return true;
            }
            if !p.is_identifier_or_keyword() {
                return false;
            }
            p.next_token();
            matches!(
                p.token(),
                SyntaxKind::ColonToken | SyntaxKind::CommaToken | SyntaxKind::QuestionToken
            )
        })
    }

    pub(crate) fn parse_index_signature(
        &mut self,
        start_pos: u32,
        modifiers: Option<NodeList>,
    ) -> NodeIndex {
        let parameters = self.parse_delimited_list(
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
            |p| p.parse_parameter(),
        );
        let type_annotation = self.parse_type_annotation();
        let end_pos = self.token_end();
        self.arena.add_index_signature(
            syntax_kind_ext::INDEX_SIGNATURE,
            start_pos,
            end_pos,
            IndexSignatureData {
                modifiers,
                parameters,
                type_annotation,
            },
        )
    }

    // =========================================================================
    // Property names and parameters
    // =========================================================================

    /// Identifier (keywords allowed), string/numeric literal, `#private`
    /// or `[computed]`.
    pub(crate) fn parse_property_name(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                self.parse_literal_node()
            }
            SyntaxKind::PrivateIdentifier => self.parse_private_identifier(),
            SyntaxKind::OpenBracketToken => {
                let start_pos = self.token_pos();
                self.next_token();
                let expression =
                    self.with_context(0, CONTEXT_FLAG_DISALLOW_IN, |p| p.parse_expression());
                self.parse_expected(SyntaxKind::CloseBracketToken);
                let end_pos = self.token_end();
                self.arena.add_computed_property(
                    syntax_kind_ext::COMPUTED_PROPERTY_NAME,
                    start_pos,
                    end_pos,
                    ComputedPropertyData { expression },
                )
            }
            _ => self.parse_identifier_name(),
        }
    }

    pub(crate) fn parse_parameters(&mut self) -> NodeList {
        self.parse_delimited_list(
            SyntaxKind::OpenParenToken,
            SyntaxKind::CloseParenToken,
            |p| p.parse_parameter(),
        )
    }

    fn parse_parameter(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut modifiers = self.parse_decorators();
        while is_parameter_modifier(self.token())
            && self.next_token_on_same_line_is(|p| {
                p.is_identifier()
                    || matches!(
                        p.token(),
                        SyntaxKind::OpenBraceToken
                            | SyntaxKind::OpenBracketToken
                            | SyntaxKind::DotDotDotToken
                            | SyntaxKind::ThisKeyword
                    )
            })
        {
            modifiers.push(self.parse_token_node());
        }

        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
        let name = if self.is_token(SyntaxKind::ThisKeyword) {
            self.parse_token_node()
        } else {
            self.parse_binding_name()
        };
        if name.is_none() && modifiers.is_empty() && !dot_dot_dot_token {
            return NodeIndex::NONE;
        }
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);
        let type_annotation = self.parse_type_annotation();
        let initializer = self.parse_initializer();
        let end_pos = self.token_end();
        let modifiers = if modifiers.is_empty() {
            None
        } else {
            Some(self.make_node_list(modifiers))
        };
        self.arena.add_parameter(
            syntax_kind_ext::PARAMETER,
            start_pos,
            end_pos,
            ParameterData {
                modifiers,
                dot_dot_dot_token,
                name,
                question_token,
                type_annotation,
                initializer,
            },
        )
    }
}

#[cfg(test)]
#[path = "../../tests/state_class_member_tests.rs"]
mod tests;
