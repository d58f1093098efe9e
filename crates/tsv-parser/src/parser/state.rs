//! Parser state: token cursor, diagnostics, recursion guard and lookahead.
//!
//! The parse methods themselves live in `state_statements`,
//! `state_class_members`, `state_expressions` and `state_types`.

use super::base::{NodeIndex, NodeList};
use super::node::{IdentifierData, NodeArena};
use tsv_common::diagnostics::{diagnostic_codes, diagnostic_messages, format_message};
use tsv_common::limits::MAX_PARSER_RECURSION_DEPTH;
use tsv_scanner::{ScannerState, SyntaxKind, is_keyword, is_reserved_word, token_to_text};

/// `in` is not a binary operator here (for-statement initializers).
pub const CONTEXT_FLAG_DISALLOW_IN: u32 = 1 << 0;
/// Inside an async function body: `await` is an operator.
pub const CONTEXT_FLAG_ASYNC: u32 = 1 << 1;
/// Inside a generator body: `yield` is an operator.
pub const CONTEXT_FLAG_GENERATOR: u32 = 1 << 2;
/// Parsing the `when_true` branch of a conditional; `(a): b` is not an
/// arrow function head there.
pub const CONTEXT_FLAG_IN_CONDITIONAL_TRUE: u32 = 1 << 3;

/// A syntax error found while parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub start: u32,
    pub length: u32,
    pub message: String,
    pub code: u32,
}

/// Recursive-descent parser producing a `NodeArena`.
pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) arena: NodeArena,
    pub(crate) file_name: String,
    pub(crate) context_flags: u32,
    pub(crate) current_token: SyntaxKind,
    pub(crate) parse_diagnostics: Vec<ParseDiagnostic>,
    pub(crate) recursion_depth: u32,
    /// End of the most recently consumed token.
    pub(crate) prev_token_end: u32,
    /// Position of the last reported error, to avoid cascades at one spot.
    last_error_pos: Option<u32>,
}

impl ParserState {
    pub fn new(file_name: String, source_text: String) -> ParserState {
        let estimated_nodes = source_text.len() / 20;
        ParserState {
            scanner: ScannerState::new(source_text),
            arena: NodeArena::with_capacity(estimated_nodes),
            file_name,
            context_flags: 0,
            current_token: SyntaxKind::Unknown,
            parse_diagnostics: Vec::new(),
            recursion_depth: 0,
            prev_token_end: 0,
            last_error_pos: None,
        }
    }

    pub fn get_arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn get_diagnostics(&self) -> &[ParseDiagnostic] {
        &self.parse_diagnostics
    }

    pub fn get_file_name(&self) -> &str {
        &self.file_name
    }

    pub fn get_source_text(&self) -> &str {
        self.scanner.source_text()
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    /// Full start of the current token; new nodes start here.
    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.get_token_full_start() as u32
    }

    /// Start of the current token with trivia skipped (for diagnostics).
    #[inline]
    pub(crate) fn token_start(&self) -> u32 {
        self.scanner.get_token_start() as u32
    }

    /// End of the last consumed token; nodes end here.
    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        self.prev_token_end
    }

    #[inline]
    pub(crate) fn token_value(&self) -> &str {
        self.scanner.get_token_value()
    }

    #[inline]
    pub(crate) fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.prev_token_end = self.scanner.get_token_end() as u32;
        self.current_token = self.scanner.scan();
        self.current_token
    }

    pub(crate) fn re_scan_greater_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_greater_token();
        self.current_token
    }

    pub(crate) fn re_scan_slash_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_slash_token();
        self.current_token
    }

    pub(crate) fn re_scan_template_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.re_scan_template_token();
        self.current_token
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or report "'x' expected." without consuming.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.parse_optional(kind) {
            return true;
        }
        let text = token_to_text(kind).unwrap_or("token");
        self.error_at_current_token(
            &format_message(diagnostic_messages::EXPECTED, &[text]),
            diagnostic_codes::EXPECTED,
        );
        false
    }

    /// Automatic semicolon insertion: `;`, `}`, EOF or a preceding newline.
    pub(crate) fn can_parse_semicolon(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) || self.has_preceding_line_break()
    }

    pub(crate) fn parse_semicolon(&mut self) -> bool {
        if self.can_parse_semicolon() {
            self.parse_optional(SyntaxKind::SemicolonToken);
            true
        } else {
            self.parse_expected(SyntaxKind::SemicolonToken)
        }
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// Identifier or a keyword usable as one (contextual and strict-mode words).
    pub(crate) fn is_identifier(&self) -> bool {
        let token = self.token();
        if token == SyntaxKind::Identifier {
            return true;
        }
        if token == SyntaxKind::YieldKeyword && self.in_generator_context() {
            return false;
        }
        if token == SyntaxKind::AwaitKeyword && self.in_async_context() {
            return false;
        }
        is_keyword(token) && !is_reserved_word(token)
    }

    /// Identifier or any keyword (property names, `a.class`).
    pub(crate) fn is_identifier_or_keyword(&self) -> bool {
        self.token() == SyntaxKind::Identifier || is_keyword(self.token())
    }

    fn create_identifier_node(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let text = self.token_value().to_string();
        self.next_token();
        let end_pos = self.token_end();
        self.arena.add_identifier(
            SyntaxKind::Identifier as u16,
            start_pos,
            end_pos,
            IdentifierData { escaped_text: text },
        )
    }

    /// Parse a binding identifier; reports and returns NONE when missing.
    pub(crate) fn parse_identifier(&mut self) -> NodeIndex {
        if self.is_identifier() {
            self.create_identifier_node()
        } else {
            self.error_identifier_expected();
            NodeIndex::NONE
        }
    }

    pub(crate) fn parse_identifier_name(&mut self) -> NodeIndex {
        if self.is_identifier_or_keyword() {
            self.create_identifier_node()
        } else {
            self.error_identifier_expected();
            NodeIndex::NONE
        }
    }

    pub(crate) fn parse_private_identifier(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let text = self.token_value().to_string();
        self.next_token();
        let end_pos = self.token_end();
        self.arena.add_identifier(
            SyntaxKind::PrivateIdentifier as u16,
            start_pos,
            end_pos,
            IdentifierData { escaped_text: text },
        )
    }

    /// Consume the current token as a data-less leaf node of its own kind.
    pub(crate) fn parse_token_node(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let kind = self.token() as u16;
        self.next_token();
        let end_pos = self.token_end();
        self.arena.add_token(kind, start_pos, end_pos)
    }

    // =========================================================================
    // Context flags
    // =========================================================================

    #[inline]
    pub(crate) fn in_async_context(&self) -> bool {
        self.context_flags & CONTEXT_FLAG_ASYNC != 0
    }

    #[inline]
    pub(crate) fn in_generator_context(&self) -> bool {
        self.context_flags & CONTEXT_FLAG_GENERATOR != 0
    }

    #[inline]
    pub(crate) fn in_disallow_in_context(&self) -> bool {
        self.context_flags & CONTEXT_FLAG_DISALLOW_IN != 0
    }

    /// Run `f` with `set` flags added and `clear` flags removed.
    pub(crate) fn with_context<T>(
        &mut self,
        set: u32,
        clear: u32,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context_flags;
        self.context_flags = (saved | set) & !clear;
        let result = f(self);
        self.context_flags = saved;
        result
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    /// Returns false (and reports once) when nesting is too deep to parse.
    pub(crate) fn enter_recursion(&mut self) -> bool {
        if self.recursion_depth >= MAX_PARSER_RECURSION_DEPTH {
            if !self
                .parse_diagnostics
                .iter()
                .any(|d| d.code == diagnostic_codes::EXCESSIVE_NESTING)
            {
                self.error_at_current_token(
                    diagnostic_messages::EXCESSIVE_NESTING,
                    diagnostic_codes::EXCESSIVE_NESTING,
                );
            }
            tracing::warn!(
                depth = self.recursion_depth,
                file = %self.file_name,
                "parser recursion limit reached"
            );
            return false;
        }
        self.recursion_depth += 1;
        true
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }

    // =========================================================================
    // Lookahead
    // =========================================================================

    /// Run `f` speculatively and rewind the scanner afterwards.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.scanner.save_state();
        let current = self.current_token;
        let prev_end = self.prev_token_end;
        let diagnostics = self.parse_diagnostics.len();
        let last_error = self.last_error_pos;

        let result = f(self);

        self.scanner.restore_state(snapshot);
        self.current_token = current;
        self.prev_token_end = prev_end;
        self.parse_diagnostics.truncate(diagnostics);
        self.last_error_pos = last_error;
        result
    }

    /// Next token is on the same line and satisfies `pred`.
    pub(crate) fn next_token_on_same_line_is(&mut self, pred: impl FnOnce(&Self) -> bool) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            !p.has_preceding_line_break() && pred(p)
        })
    }

    pub(crate) fn look_ahead_is_labeled_statement(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            p.is_token(SyntaxKind::ColonToken)
        })
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    pub(crate) fn parse_error_at(&mut self, start: u32, length: u32, message: &str, code: u32) {
        if self.last_error_pos == Some(start) {
            return;
        }
        self.last_error_pos = Some(start);
        tracing::trace!(start, code, message, "parse error");
        self.parse_diagnostics.push(ParseDiagnostic {
            start,
            length,
            message: message.to_string(),
            code,
        });
    }

    pub(crate) fn error_at_current_token(&mut self, message: &str, code: u32) {
        let start = self.token_start();
        let length = (self.scanner.get_token_end() as u32).saturating_sub(start);
        self.parse_error_at(start, length, message, code);
    }

    pub(crate) fn error_identifier_expected(&mut self) {
        self.error_at_current_token(
            diagnostic_messages::IDENTIFIER_EXPECTED,
            diagnostic_codes::IDENTIFIER_EXPECTED,
        );
    }

    pub(crate) fn error_expression_expected(&mut self) {
        self.error_at_current_token(
            diagnostic_messages::EXPRESSION_EXPECTED,
            diagnostic_codes::EXPRESSION_EXPECTED,
        );
    }

    pub(crate) fn error_unexpected_token(&mut self) {
        self.error_at_current_token(
            diagnostic_messages::UNEXPECTED_TOKEN,
            diagnostic_codes::UNEXPECTED_TOKEN,
        );
    }

    // =========================================================================
    // Lists
    // =========================================================================

    pub(crate) fn make_node_list(&self, nodes: Vec<NodeIndex>) -> NodeList {
        let pos = nodes
            .first()
            .and_then(|&n| self.arena.get(n))
            .map_or(self.token_pos(), |n| n.pos);
        let end = nodes
            .last()
            .and_then(|&n| self.arena.get(n))
            .map_or(pos, |n| n.end);
        NodeList::with_nodes(nodes, pos, end)
    }

    /// Parse `open element (, element)* [,] close`.
    ///
    /// Stops at `close` or EOF; an element parser that consumes nothing
    /// ends the list so malformed input cannot loop.
    pub(crate) fn parse_delimited_list(
        &mut self,
        open: SyntaxKind,
        close: SyntaxKind,
        mut parse_element: impl FnMut(&mut Self) -> NodeIndex,
    ) -> NodeList {
        self.parse_expected(open);
        let mut nodes = Vec::new();
        let mut has_trailing_comma = false;
        while !self.is_token(close) && !self.is_token(SyntaxKind::EndOfFileToken) {
            let before = self.token_pos();
            let element = parse_element(self);
            if element.is_some() {
                nodes.push(element);
            }
            has_trailing_comma = false;
            if self.parse_optional(SyntaxKind::CommaToken) {
                has_trailing_comma = true;
                continue;
            }
            if self.is_token(close) || self.token_pos() == before {
                break;
            }
            // Missing comma between elements
            self.parse_expected(SyntaxKind::CommaToken);
        }
        let mut list = self.make_node_list(nodes);
        list.has_trailing_comma = has_trailing_comma;
        self.parse_expected(close);
        list
    }
}
