//! Diagnostic types, codes and message templates used by the scanner and parser.
//!
//! Codes follow the TypeScript numbering so diagnostics read the same as
//! `tsc` output.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            message_text: message.into(),
            code,
            file: file.into(),
            start,
            length,
        }
    }
}

pub mod diagnostic_codes {
    pub const INVALID_CHARACTER: u32 = 1127;
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1002;
    pub const IDENTIFIER_EXPECTED: u32 = 1003;
    pub const EXPECTED: u32 = 1005;
    pub const UNEXPECTED_TOKEN: u32 = 1012;
    pub const EXPRESSION_EXPECTED: u32 = 1109;
    pub const DECLARATION_OR_STATEMENT_EXPECTED: u32 = 1128;
    pub const DIGIT_EXPECTED: u32 = 1124;
    pub const UNTERMINATED_TEMPLATE_LITERAL: u32 = 1160;
    pub const UNTERMINATED_REGULAR_EXPRESSION_LITERAL: u32 = 1161;
    pub const ASTERISK_SLASH_EXPECTED: u32 = 1010;
    pub const TYPE_EXPECTED: u32 = 1110;
    pub const PROPERTY_ASSIGNMENT_EXPECTED: u32 = 1136;
    pub const EXCESSIVE_NESTING: u32 = 1359;
}

pub mod diagnostic_messages {
    pub const INVALID_CHARACTER: &str = "Invalid character.";
    pub const UNTERMINATED_STRING_LITERAL: &str = "Unterminated string literal.";
    pub const IDENTIFIER_EXPECTED: &str = "Identifier expected.";
    pub const EXPECTED: &str = "'{0}' expected.";
    pub const UNEXPECTED_TOKEN: &str = "Unexpected token.";
    pub const EXPRESSION_EXPECTED: &str = "Expression expected.";
    pub const DECLARATION_OR_STATEMENT_EXPECTED: &str = "Declaration or statement expected.";
    pub const DIGIT_EXPECTED: &str = "Digit expected.";
    pub const UNTERMINATED_TEMPLATE_LITERAL: &str = "Unterminated template literal.";
    pub const UNTERMINATED_REGULAR_EXPRESSION_LITERAL: &str =
        "Unterminated regular expression literal.";
    pub const ASTERISK_SLASH_EXPECTED: &str = "'*/' expected.";
    pub const TYPE_EXPECTED: &str = "Type expected.";
    pub const PROPERTY_ASSIGNMENT_EXPECTED: &str = "Property assignment expected.";
    pub const EXCESSIVE_NESTING: &str = "Source is nested too deeply to parse.";
}

/// Look up the full message descriptor for a code.
pub fn get_message_template(code: u32) -> Option<DiagnosticMessage> {
    use diagnostic_codes as c;
    use diagnostic_messages as m;
    let message = match code {
        c::INVALID_CHARACTER => m::INVALID_CHARACTER,
        c::UNTERMINATED_STRING_LITERAL => m::UNTERMINATED_STRING_LITERAL,
        c::IDENTIFIER_EXPECTED => m::IDENTIFIER_EXPECTED,
        c::EXPECTED => m::EXPECTED,
        c::UNEXPECTED_TOKEN => m::UNEXPECTED_TOKEN,
        c::EXPRESSION_EXPECTED => m::EXPRESSION_EXPECTED,
        c::DECLARATION_OR_STATEMENT_EXPECTED => m::DECLARATION_OR_STATEMENT_EXPECTED,
        c::DIGIT_EXPECTED => m::DIGIT_EXPECTED,
        c::UNTERMINATED_TEMPLATE_LITERAL => m::UNTERMINATED_TEMPLATE_LITERAL,
        c::UNTERMINATED_REGULAR_EXPRESSION_LITERAL => m::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
        c::ASTERISK_SLASH_EXPECTED => m::ASTERISK_SLASH_EXPECTED,
        c::TYPE_EXPECTED => m::TYPE_EXPECTED,
        c::PROPERTY_ASSIGNMENT_EXPECTED => m::PROPERTY_ASSIGNMENT_EXPECTED,
        c::EXCESSIVE_NESTING => m::EXCESSIVE_NESTING,
        _ => return None,
    };
    Some(DiagnosticMessage {
        code,
        category: DiagnosticCategory::Error,
        message,
    })
}

/// Substitute `{0}`, `{1}`, ... placeholders in a message template.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_message_replaces_placeholders() {
        assert_eq!(
            format_message(diagnostic_messages::EXPECTED, &[")"]),
            "')' expected."
        );
    }

    #[test]
    fn message_template_lookup_matches_code() {
        let msg = get_message_template(diagnostic_codes::EXPRESSION_EXPECTED).unwrap();
        assert_eq!(msg.message, "Expression expected.");
        assert_eq!(msg.category, DiagnosticCategory::Error);
        assert!(get_message_template(9999).is_none());
    }
}
