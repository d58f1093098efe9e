use super::*;
use crate::token_to_text;

fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = ScannerState::new(source.to_string());
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.get_token_text().to_string()));
    }
    tokens
}

fn kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_scan_variable_statement() {
    use SyntaxKind::*;
    assert_eq!(
        kinds("let total = a + 1;"),
        vec![
            LetKeyword,
            Identifier,
            EqualsToken,
            Identifier,
            PlusToken,
            NumericLiteral,
            SemicolonToken
        ]
    );
}

#[test]
fn test_scan_compound_assignment_operators() {
    use SyntaxKind::*;
    assert_eq!(
        kinds("a += b -= c **= d ??= e ||= f &&= g"),
        vec![
            Identifier,
            PlusEqualsToken,
            Identifier,
            MinusEqualsToken,
            Identifier,
            AsteriskAsteriskEqualsToken,
            Identifier,
            QuestionQuestionEqualsToken,
            Identifier,
            BarBarEqualsToken,
            Identifier,
            AmpersandAmpersandEqualsToken,
            Identifier
        ]
    );
}

#[test]
fn test_scan_positions_include_leading_trivia() {
    let mut scanner = ScannerState::new("a  /* note */ b".to_string());
    scanner.scan();
    assert_eq!(scanner.get_token_full_start(), 0);
    assert_eq!(scanner.get_token_end(), 1);

    scanner.scan();
    assert_eq!(scanner.get_token(), SyntaxKind::Identifier);
    assert_eq!(scanner.get_token_full_start(), 1);
    assert_eq!(scanner.get_token_start(), 14);
    assert_eq!(scanner.get_token_end(), 15);
    assert_eq!(scanner.get_token_value(), "b");
}

#[test]
fn test_scan_preceding_line_break() {
    let mut scanner = ScannerState::new("a\n// comment\nb /* x */ c".to_string());
    scanner.scan();
    assert!(!scanner.has_preceding_line_break());
    scanner.scan();
    assert!(scanner.has_preceding_line_break());
    scanner.scan();
    assert!(!scanner.has_preceding_line_break());
}

#[test]
fn test_scan_numbers() {
    let tokens = scan_all("0x1F 1_000 .5 1e10 42n 0b101");
    let kinds: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::NumericLiteral,
            SyntaxKind::NumericLiteral,
            SyntaxKind::NumericLiteral,
            SyntaxKind::NumericLiteral,
            SyntaxKind::BigIntLiteral,
            SyntaxKind::NumericLiteral
        ]
    );
    assert_eq!(tokens[1].1, "1_000");
    assert_eq!(tokens[2].1, ".5");
}

#[test]
fn test_scan_string_with_escapes() {
    let tokens = scan_all(r#"'it\'s' "a\"b""#);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0], (SyntaxKind::StringLiteral, r"'it\'s'".to_string()));
    assert_eq!(tokens[1], (SyntaxKind::StringLiteral, r#""a\"b""#.to_string()));
}

#[test]
fn test_scan_unterminated_string_reports_diagnostic() {
    let mut scanner = ScannerState::new("'abc\nx".to_string());
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert!(scanner.is_unterminated());
    assert_eq!(scanner.get_scanner_diagnostics()[0].code, 1002);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_scan_template_pieces() {
    let mut scanner = ScannerState::new("`a${b}c${d}e`".to_string());
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    assert_eq!(scanner.get_token_value(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateMiddle);
    assert_eq!(scanner.get_token_text(), "}c${");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.re_scan_template_token(), SyntaxKind::TemplateTail);
    assert_eq!(scanner.get_token_value(), "e");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_scan_no_substitution_template() {
    let tokens = scan_all("`plain text`");
    assert_eq!(
        tokens,
        vec![(
            SyntaxKind::NoSubstitutionTemplateLiteral,
            "`plain text`".to_string()
        )]
    );
}

#[test]
fn test_re_scan_greater_token() {
    let mut scanner = ScannerState::new("a >>>= b".to_string());
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
    assert_eq!(
        scanner.re_scan_greater_token(),
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
    );
    assert_eq!(scanner.get_token_text(), ">>>=");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_re_scan_slash_token_as_regex() {
    let mut scanner = ScannerState::new("/[/]ab\\/c/gi.test(s)".to_string());
    assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
    assert_eq!(
        scanner.re_scan_slash_token(),
        SyntaxKind::RegularExpressionLiteral
    );
    assert_eq!(scanner.get_token_text(), "/[/]ab\\/c/gi");
    assert_eq!(scanner.scan(), SyntaxKind::DotToken);
}

#[test]
fn test_keywords_and_private_identifiers() {
    use SyntaxKind::*;
    assert_eq!(
        kinds("class #count of instanceof constructor"),
        vec![
            ClassKeyword,
            PrivateIdentifier,
            OfKeyword,
            InstanceOfKeyword,
            ConstructorKeyword
        ]
    );
}

#[test]
fn test_optional_chain_vs_conditional_number() {
    use SyntaxKind::*;
    assert_eq!(kinds("a?.b"), vec![Identifier, QuestionDotToken, Identifier]);
    assert_eq!(
        kinds("a?.5:1"),
        vec![Identifier, QuestionToken, NumericLiteral, ColonToken, NumericLiteral]
    );
}

#[test]
fn test_save_and_restore_state() {
    let mut scanner = ScannerState::new("foo bar baz".to_string());
    scanner.scan();
    let snapshot = scanner.save_state();
    scanner.scan();
    scanner.scan();
    assert_eq!(scanner.get_token_value(), "baz");
    scanner.restore_state(snapshot);
    assert_eq!(scanner.get_token_value(), "foo");
    scanner.scan();
    assert_eq!(scanner.get_token_value(), "bar");
}

#[test]
fn test_invalid_character_diagnostic() {
    let mut scanner = ScannerState::new("a § b".to_string());
    scanner.scan();
    assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    assert_eq!(scanner.get_scanner_diagnostics().len(), 1);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
}

#[test]
fn test_skip_trivia() {
    let text = "  // line\n  /* block */  x";
    assert_eq!(skip_trivia(text, 0), text.len() - 1);
    assert_eq!(skip_trivia("#!/usr/bin/env node\nx", 0), 20);
    assert_eq!(skip_trivia("abc", 1), 1);
}

#[test]
fn test_token_text_round_trip_for_punctuation() {
    for kind in [
        SyntaxKind::DotDotDotToken,
        SyntaxKind::ExclamationEqualsEqualsToken,
        SyntaxKind::QuestionQuestionToken,
        SyntaxKind::EqualsGreaterThanToken,
    ] {
        let text = token_to_text(kind).unwrap();
        assert_eq!(kinds(text), vec![kind], "token text {text:?}");
    }
}

#[test]
fn test_try_from_u16_covers_all_tokens() {
    assert_eq!(SyntaxKind::try_from_u16(0), Some(SyntaxKind::Unknown));
    assert_eq!(
        SyntaxKind::try_from_u16(SyntaxKind::OfKeyword as u16),
        Some(SyntaxKind::OfKeyword)
    );
    assert_eq!(
        SyntaxKind::try_from_u16(SyntaxKind::Identifier as u16),
        Some(SyntaxKind::Identifier)
    );
    assert_eq!(SyntaxKind::try_from_u16(SyntaxKind::OfKeyword as u16 + 1), None);
}
