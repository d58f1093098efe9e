//! Scanner state machine.
//!
//! `ScannerState` turns source text into a token stream on demand. The parser
//! drives it one token at a time via `scan()` and asks for context-sensitive
//! re-scans (`>`-sequences, regular expressions, template continuations)
//! when the grammar needs them.
//!
//! Positions are byte offsets into the source text. Every token records:
//! - `full_start`: where leading trivia (whitespace/comments) begins
//! - `token_start`: where the token text itself begins
//! - `token_end`: one past the last byte of the token

use crate::char_codes::{
    is_binary_digit, is_digit, is_hex_digit, is_identifier_part, is_identifier_start,
    is_line_break, is_octal_digit, is_white_space_single_line,
};
use crate::syntax_kind::{SyntaxKind, text_to_keyword};
use std::sync::Arc;
use tsv_common::diagnostics::{diagnostic_codes, diagnostic_messages};

/// Flags describing the most recently scanned token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenFlags(u32);

impl TokenFlags {
    pub const NONE: TokenFlags = TokenFlags(0);
    pub const PRECEDING_LINE_BREAK: TokenFlags = TokenFlags(1 << 0);
    pub const UNTERMINATED: TokenFlags = TokenFlags(1 << 1);

    #[inline]
    pub fn contains(self, other: TokenFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: TokenFlags) {
        self.0 |= other.0;
    }
}

/// A lexical error found while scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerDiagnostic {
    pub pos: usize,
    pub length: usize,
    pub message: &'static str,
    pub code: u32,
}

/// Saved scanner position for look-ahead.
#[derive(Clone, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    full_start_pos: usize,
    token_start: usize,
    token: SyntaxKind,
    token_value: String,
    token_flags: TokenFlags,
    diagnostics_len: usize,
}

pub struct ScannerState {
    text: Arc<str>,
    pos: usize,
    end: usize,
    full_start_pos: usize,
    token_start: usize,
    token: SyntaxKind,
    token_value: String,
    token_flags: TokenFlags,
    diagnostics: Vec<ScannerDiagnostic>,
}

impl ScannerState {
    pub fn new(text: String) -> Self {
        Self::from_arc(Arc::from(text))
    }

    pub fn from_arc(text: Arc<str>) -> Self {
        let end = text.len();
        ScannerState {
            text,
            pos: 0,
            end,
            full_start_pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            token_flags: TokenFlags::NONE,
            diagnostics: Vec::new(),
        }
    }

    /// Move the scanner to `pos` and forget the current token.
    pub fn set_text_pos(&mut self, pos: usize) {
        let pos = pos.min(self.end);
        self.pos = pos;
        self.full_start_pos = pos;
        self.token_start = pos;
        self.token = SyntaxKind::Unknown;
        self.token_value.clear();
        self.token_flags = TokenFlags::NONE;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn source_text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn source_text_arc(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    #[inline]
    pub fn get_token(&self) -> SyntaxKind {
        self.token
    }

    /// Start of the current token including its leading trivia.
    #[inline]
    pub fn get_token_full_start(&self) -> usize {
        self.full_start_pos
    }

    /// Start of the current token text (trivia skipped).
    #[inline]
    pub fn get_token_start(&self) -> usize {
        self.token_start
    }

    #[inline]
    pub fn get_token_end(&self) -> usize {
        self.pos
    }

    /// Identifier name, literal text or raw token text.
    #[inline]
    pub fn get_token_value(&self) -> &str {
        &self.token_value
    }

    #[inline]
    pub fn get_token_text(&self) -> &str {
        self.text.get(self.token_start..self.pos).unwrap_or("")
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    #[inline]
    pub fn is_unterminated(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNTERMINATED)
    }

    pub fn get_scanner_diagnostics(&self) -> &[ScannerDiagnostic] {
        &self.diagnostics
    }

    // =========================================================================
    // Look-ahead support
    // =========================================================================

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            full_start_pos: self.full_start_pos,
            token_start: self.token_start,
            token: self.token,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            diagnostics_len: self.diagnostics.len(),
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.full_start_pos = snapshot.full_start_pos;
        self.token_start = snapshot.token_start;
        self.token = snapshot.token;
        self.token_value = snapshot.token_value;
        self.token_flags = snapshot.token_flags;
        self.diagnostics.truncate(snapshot.diagnostics_len);
    }

    // =========================================================================
    // Character access
    // =========================================================================

    #[inline]
    fn byte_at(&self, pos: usize) -> Option<u8> {
        if pos < self.end {
            self.text.as_bytes().get(pos).copied()
        } else {
            None
        }
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        match self.byte_at(pos) {
            Some(b) if b.is_ascii() => Some(b as char),
            Some(_) => self.text.get(pos..self.end)?.chars().next(),
            None => None,
        }
    }

    fn error(&mut self, pos: usize, length: usize, message: &'static str, code: u32) {
        self.diagnostics.push(ScannerDiagnostic {
            pos,
            length,
            message,
            code,
        });
    }

    /// Skip a leading `#!` line at the start of the file.
    pub fn scan_shebang_trivia(&mut self) {
        if self.pos == 0 && self.text.starts_with("#!") {
            self.pos = memchr::memchr2(b'\n', b'\r', self.text.as_bytes()).unwrap_or(self.end);
        }
    }

    // =========================================================================
    // Main scan loop
    // =========================================================================

    /// Scan the next token, skipping any leading trivia.
    pub fn scan(&mut self) -> SyntaxKind {
        self.full_start_pos = self.pos;
        self.token_flags = TokenFlags::NONE;
        self.token_value.clear();

        loop {
            self.token_start = self.pos;
            let Some(ch) = self.char_at(self.pos) else {
                self.token = SyntaxKind::EndOfFileToken;
                return self.token;
            };

            if is_line_break(ch) {
                self.token_flags.insert(TokenFlags::PRECEDING_LINE_BREAK);
                self.pos += ch.len_utf8();
                continue;
            }
            if is_white_space_single_line(ch) {
                self.pos += ch.len_utf8();
                continue;
            }
            if ch == '/' {
                match self.byte_at(self.pos + 1) {
                    Some(b'/') => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some(b'*') => {
                        self.skip_block_comment();
                        continue;
                    }
                    _ => {}
                }
            }

            self.token = self.scan_token(ch);
            return self.token;
        }
    }

    fn skip_line_comment(&mut self) {
        let rest = &self.text.as_bytes()[self.pos..self.end];
        self.pos += memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
    }

    fn skip_block_comment(&mut self) {
        let body_start = self.pos + 2;
        let rest = &self.text.as_bytes()[body_start.min(self.end)..self.end];
        let (body_len, closed) = match memchr::memmem::find(rest, b"*/") {
            Some(idx) => (idx, true),
            None => (rest.len(), false),
        };
        let body = &rest[..body_len];
        if memchr::memchr2(b'\n', b'\r', body).is_some() {
            self.token_flags.insert(TokenFlags::PRECEDING_LINE_BREAK);
        }
        if closed {
            self.pos = body_start + body_len + 2;
        } else {
            self.pos = self.end;
            self.error(
                self.end,
                0,
                diagnostic_messages::ASTERISK_SLASH_EXPECTED,
                diagnostic_codes::ASTERISK_SLASH_EXPECTED,
            );
        }
    }

    /// Scan one token starting at `self.pos` (trivia already skipped).
    fn scan_token(&mut self, ch: char) -> SyntaxKind {
        use SyntaxKind::*;
        let next = self.byte_at(self.pos + 1);
        let next2 = self.byte_at(self.pos + 2);

        macro_rules! punct {
            ($len:expr, $kind:expr) => {{
                self.pos += $len;
                $kind
            }};
        }

        match ch {
            '!' => match (next, next2) {
                (Some(b'='), Some(b'=')) => punct!(3, ExclamationEqualsEqualsToken),
                (Some(b'='), _) => punct!(2, ExclamationEqualsToken),
                _ => punct!(1, ExclamationToken),
            },
            '"' | '\'' => self.scan_string(ch),
            '`' => {
                self.pos += 1;
                self.scan_template(true)
            }
            '%' => match next {
                Some(b'=') => punct!(2, PercentEqualsToken),
                _ => punct!(1, PercentToken),
            },
            '&' => match (next, next2) {
                (Some(b'&'), Some(b'=')) => punct!(3, AmpersandAmpersandEqualsToken),
                (Some(b'&'), _) => punct!(2, AmpersandAmpersandToken),
                (Some(b'='), _) => punct!(2, AmpersandEqualsToken),
                _ => punct!(1, AmpersandToken),
            },
            '(' => punct!(1, OpenParenToken),
            ')' => punct!(1, CloseParenToken),
            '[' => punct!(1, OpenBracketToken),
            ']' => punct!(1, CloseBracketToken),
            '{' => punct!(1, OpenBraceToken),
            '}' => punct!(1, CloseBraceToken),
            ',' => punct!(1, CommaToken),
            ';' => punct!(1, SemicolonToken),
            ':' => punct!(1, ColonToken),
            '~' => punct!(1, TildeToken),
            '@' => punct!(1, AtToken),
            '*' => match (next, next2) {
                (Some(b'*'), Some(b'=')) => punct!(3, AsteriskAsteriskEqualsToken),
                (Some(b'*'), _) => punct!(2, AsteriskAsteriskToken),
                (Some(b'='), _) => punct!(2, AsteriskEqualsToken),
                _ => punct!(1, AsteriskToken),
            },
            '+' => match next {
                Some(b'+') => punct!(2, PlusPlusToken),
                Some(b'=') => punct!(2, PlusEqualsToken),
                _ => punct!(1, PlusToken),
            },
            '-' => match next {
                Some(b'-') => punct!(2, MinusMinusToken),
                Some(b'=') => punct!(2, MinusEqualsToken),
                _ => punct!(1, MinusToken),
            },
            '.' => match (next, next2) {
                (Some(d), _) if d.is_ascii_digit() => self.scan_number(),
                (Some(b'.'), Some(b'.')) => punct!(3, DotDotDotToken),
                _ => punct!(1, DotToken),
            },
            '/' => match next {
                Some(b'=') => punct!(2, SlashEqualsToken),
                _ => punct!(1, SlashToken),
            },
            '0'..='9' => self.scan_number(),
            '<' => match (next, next2) {
                (Some(b'<'), Some(b'=')) => punct!(3, LessThanLessThanEqualsToken),
                (Some(b'<'), _) => punct!(2, LessThanLessThanToken),
                (Some(b'='), _) => punct!(2, LessThanEqualsToken),
                _ => punct!(1, LessThanToken),
            },
            '=' => match (next, next2) {
                (Some(b'='), Some(b'=')) => punct!(3, EqualsEqualsEqualsToken),
                (Some(b'='), _) => punct!(2, EqualsEqualsToken),
                (Some(b'>'), _) => punct!(2, EqualsGreaterThanToken),
                _ => punct!(1, EqualsToken),
            },
            // `>>`, `>=` etc. are produced on demand by `re_scan_greater_token`
            '>' => punct!(1, GreaterThanToken),
            '?' => match (next, next2) {
                (Some(b'.'), Some(d)) if !d.is_ascii_digit() => punct!(2, QuestionDotToken),
                (Some(b'.'), None) => punct!(2, QuestionDotToken),
                (Some(b'?'), Some(b'=')) => punct!(3, QuestionQuestionEqualsToken),
                (Some(b'?'), _) => punct!(2, QuestionQuestionToken),
                _ => punct!(1, QuestionToken),
            },
            '^' => match next {
                Some(b'=') => punct!(2, CaretEqualsToken),
                _ => punct!(1, CaretToken),
            },
            '|' => match (next, next2) {
                (Some(b'|'), Some(b'=')) => punct!(3, BarBarEqualsToken),
                (Some(b'|'), _) => punct!(2, BarBarToken),
                (Some(b'='), _) => punct!(2, BarEqualsToken),
                _ => punct!(1, BarToken),
            },
            '#' => match self.char_at(self.pos + 1) {
                Some(c) if is_identifier_start(c) => {
                    self.pos += 1;
                    self.scan_identifier_rest();
                    self.token_value = self.text[self.token_start..self.pos].to_string();
                    PrivateIdentifier
                }
                _ => self.scan_invalid_character(ch),
            },
            c if is_identifier_start(c) => {
                self.pos += c.len_utf8();
                self.scan_identifier_rest();
                self.token_value = self.text[self.token_start..self.pos].to_string();
                text_to_keyword(&self.token_value).unwrap_or(Identifier)
            }
            c => self.scan_invalid_character(c),
        }
    }

    fn scan_invalid_character(&mut self, ch: char) -> SyntaxKind {
        let len = ch.len_utf8();
        self.error(
            self.pos,
            len,
            diagnostic_messages::INVALID_CHARACTER,
            diagnostic_codes::INVALID_CHARACTER,
        );
        self.pos += len;
        SyntaxKind::Unknown
    }

    fn scan_identifier_rest(&mut self) {
        while let Some(c) = self.char_at(self.pos) {
            if !is_identifier_part(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    // =========================================================================
    // Literals
    // =========================================================================

    fn scan_digits(&mut self, is_valid: fn(char) -> bool) -> usize {
        let start = self.pos;
        while let Some(c) = self.char_at(self.pos) {
            if is_valid(c) || (c == '_' && self.pos > start) {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.pos - start
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;

        if self.byte_at(self.pos) == Some(b'0') {
            let radix_digit: Option<fn(char) -> bool> = match self.byte_at(self.pos + 1) {
                Some(b'x' | b'X') => Some(is_hex_digit as fn(char) -> bool),
                Some(b'o' | b'O') => Some(is_octal_digit as fn(char) -> bool),
                Some(b'b' | b'B') => Some(is_binary_digit as fn(char) -> bool),
                _ => None,
            };
            if let Some(is_valid) = radix_digit {
                self.pos += 2;
                if self.scan_digits(is_valid) == 0 {
                    self.error(
                        self.pos,
                        0,
                        diagnostic_messages::DIGIT_EXPECTED,
                        diagnostic_codes::DIGIT_EXPECTED,
                    );
                }
                return self.finish_number(start, true);
            }
        }

        let mut is_integer = true;
        self.scan_digits(is_digit);
        if self.byte_at(self.pos) == Some(b'.') {
            is_integer = false;
            self.pos += 1;
            self.scan_digits(is_digit);
        }
        if matches!(self.byte_at(self.pos), Some(b'e' | b'E')) {
            is_integer = false;
            self.pos += 1;
            if matches!(self.byte_at(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.scan_digits(is_digit) == 0 {
                self.error(
                    self.pos,
                    0,
                    diagnostic_messages::DIGIT_EXPECTED,
                    diagnostic_codes::DIGIT_EXPECTED,
                );
            }
        }
        self.finish_number(start, is_integer)
    }

    fn finish_number(&mut self, start: usize, is_integer: bool) -> SyntaxKind {
        let kind = if is_integer && self.byte_at(self.pos) == Some(b'n') {
            self.pos += 1;
            SyntaxKind::BigIntLiteral
        } else {
            SyntaxKind::NumericLiteral
        };
        self.token_value = self.text[start..self.pos].to_string();
        kind
    }

    fn scan_string(&mut self, quote: char) -> SyntaxKind {
        self.pos += 1;
        let content_start = self.pos;
        loop {
            let Some(c) = self.char_at(self.pos) else {
                self.report_unterminated_string();
                break;
            };
            if c == quote {
                self.token_value = self.text[content_start..self.pos].to_string();
                self.pos += 1;
                return SyntaxKind::StringLiteral;
            }
            if c == '\\' {
                self.pos += 1;
                if let Some(escaped) = self.char_at(self.pos) {
                    self.pos += escaped.len_utf8();
                    if escaped == '\r' && self.byte_at(self.pos) == Some(b'\n') {
                        self.pos += 1;
                    }
                }
                continue;
            }
            if c == '\n' || c == '\r' {
                self.report_unterminated_string();
                break;
            }
            self.pos += c.len_utf8();
        }
        self.token_value = self.text[content_start..self.pos].to_string();
        SyntaxKind::StringLiteral
    }

    fn report_unterminated_string(&mut self) {
        self.token_flags.insert(TokenFlags::UNTERMINATED);
        self.error(
            self.pos,
            0,
            diagnostic_messages::UNTERMINATED_STRING_LITERAL,
            diagnostic_codes::UNTERMINATED_STRING_LITERAL,
        );
    }

    /// Scan a template chunk. `self.pos` is just past the opening `` ` `` or `}`.
    fn scan_template(&mut self, started_with_backtick: bool) -> SyntaxKind {
        let content_start = self.pos;
        let kind = loop {
            let Some(c) = self.char_at(self.pos) else {
                self.token_flags.insert(TokenFlags::UNTERMINATED);
                self.error(
                    self.pos,
                    0,
                    diagnostic_messages::UNTERMINATED_TEMPLATE_LITERAL,
                    diagnostic_codes::UNTERMINATED_TEMPLATE_LITERAL,
                );
                self.token_value = self.text[content_start..self.pos].to_string();
                break if started_with_backtick {
                    SyntaxKind::NoSubstitutionTemplateLiteral
                } else {
                    SyntaxKind::TemplateTail
                };
            };
            match c {
                '`' => {
                    self.token_value = self.text[content_start..self.pos].to_string();
                    self.pos += 1;
                    break if started_with_backtick {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                '$' if self.byte_at(self.pos + 1) == Some(b'{') => {
                    self.token_value = self.text[content_start..self.pos].to_string();
                    self.pos += 2;
                    break if started_with_backtick {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                }
                '\\' => {
                    self.pos += 1;
                    if let Some(escaped) = self.char_at(self.pos) {
                        self.pos += escaped.len_utf8();
                    }
                }
                _ => self.pos += c.len_utf8(),
            }
        };
        kind
    }

    // =========================================================================
    // Re-scans requested by the parser
    // =========================================================================

    /// Extend a `>` token into `>=`, `>>`, `>>=`, `>>>` or `>>>=`.
    pub fn re_scan_greater_token(&mut self) -> SyntaxKind {
        use SyntaxKind::*;
        if self.token != GreaterThanToken {
            return self.token;
        }
        let following = (
            self.byte_at(self.pos),
            self.byte_at(self.pos + 1),
            self.byte_at(self.pos + 2),
        );
        let kind = match following {
            (Some(b'>'), Some(b'>'), Some(b'=')) => {
                self.pos += 3;
                GreaterThanGreaterThanGreaterThanEqualsToken
            }
            (Some(b'>'), Some(b'>'), _) => {
                self.pos += 2;
                GreaterThanGreaterThanGreaterThanToken
            }
            (Some(b'>'), Some(b'='), _) => {
                self.pos += 2;
                GreaterThanGreaterThanEqualsToken
            }
            (Some(b'>'), _, _) => {
                self.pos += 1;
                GreaterThanGreaterThanToken
            }
            (Some(b'='), _, _) => {
                self.pos += 1;
                GreaterThanEqualsToken
            }
            _ => GreaterThanToken,
        };
        self.token = kind;
        kind
    }

    /// Re-scan a `/` or `/=` token as a regular expression literal.
    pub fn re_scan_slash_token(&mut self) -> SyntaxKind {
        if !matches!(self.token, SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken) {
            return self.token;
        }
        self.pos = self.token_start + 1;
        let mut in_class = false;
        loop {
            let Some(c) = self.char_at(self.pos) else {
                self.report_unterminated_regex();
                break;
            };
            if is_line_break(c) {
                self.report_unterminated_regex();
                break;
            }
            match c {
                '\\' => {
                    self.pos += 1;
                    if let Some(escaped) = self.char_at(self.pos) {
                        if is_line_break(escaped) {
                            continue;
                        }
                        self.pos += escaped.len_utf8();
                    }
                }
                '/' if !in_class => {
                    self.pos += 1;
                    break;
                }
                '[' => {
                    in_class = true;
                    self.pos += 1;
                }
                ']' => {
                    in_class = false;
                    self.pos += 1;
                }
                _ => self.pos += c.len_utf8(),
            }
        }
        // Flags
        self.scan_identifier_rest();
        self.token_value = self.text[self.token_start..self.pos].to_string();
        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }

    fn report_unterminated_regex(&mut self) {
        self.token_flags.insert(TokenFlags::UNTERMINATED);
        self.error(
            self.token_start,
            self.pos - self.token_start,
            diagnostic_messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
            diagnostic_codes::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
        );
    }

    /// Re-scan a `}` token as a template middle or tail.
    pub fn re_scan_template_token(&mut self) -> SyntaxKind {
        self.pos = self.token_start + 1;
        self.token_value.clear();
        self.token = self.scan_template(false);
        self.token
    }
}

/// Skip whitespace, line breaks and comments starting at `pos`.
///
/// Returns the offset of the first non-trivia character (or `text.len()`).
pub fn skip_trivia(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = pos.min(bytes.len());
    if pos == 0 && text.starts_with("#!") {
        pos = memchr::memchr2(b'\n', b'\r', bytes).unwrap_or(bytes.len());
    }
    loop {
        let Some(&b) = bytes.get(pos) else {
            return pos;
        };
        if b == b'/' {
            match bytes.get(pos + 1) {
                Some(b'/') => {
                    pos += memchr::memchr2(b'\n', b'\r', &bytes[pos..]).unwrap_or(bytes.len() - pos);
                    continue;
                }
                Some(b'*') => {
                    pos = match memchr::memmem::find(&bytes[pos + 2..], b"*/") {
                        Some(idx) => pos + 2 + idx + 2,
                        None => bytes.len(),
                    };
                    continue;
                }
                _ => return pos,
            }
        }
        let Some(ch) = text.get(pos..).and_then(|rest| rest.chars().next()) else {
            return pos;
        };
        if is_line_break(ch) || is_white_space_single_line(ch) {
            pos += ch.len_utf8();
        } else {
            return pos;
        }
    }
}

#[cfg(test)]
#[path = "../tests/scanner_tests.rs"]
mod tests;
