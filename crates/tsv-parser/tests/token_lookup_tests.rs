//! Tests for finding the token at a source position.
use crate::parser::{NodeIndex, ParserState, syntax_kind_ext};
use tsv_scanner::SyntaxKind;

fn parse_source(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.ts".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

fn offset_of(source: &str, needle: &str) -> u32 {
    source.find(needle).unwrap() as u32
}

#[test]
fn token_at_identifier_is_the_leaf_node() {
    let source = "let value = other;";
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    let token = arena
        .find_token_at_position(root, offset_of(source, "other") + 2)
        .unwrap();
    assert_eq!(token.kind, SyntaxKind::Identifier as u16);
    assert!(token.node.is_some());
    assert_eq!(arena.get_identifier_text(token.node), Some("other"));
    assert_eq!(token.containing_node(), token.node);
    assert_eq!(
        arena.get(token.parent).unwrap().kind,
        syntax_kind_ext::VARIABLE_DECLARATION
    );
}

#[test]
fn token_at_punctuation_is_rescanned_from_gap() {
    let source = "let value = other;";
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    let token = arena
        .find_token_at_position(root, offset_of(source, "="))
        .unwrap();
    assert_eq!(token.kind, SyntaxKind::EqualsToken as u16);
    assert!(token.node.is_none());
    assert_eq!(token.containing_node(), token.parent);
    assert_eq!(
        arena.get(token.parent).unwrap().kind,
        syntax_kind_ext::VARIABLE_DECLARATION
    );
}

#[test]
fn token_in_leading_trivia_belongs_to_following_token() {
    let source = "a;\n   b;";
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    let token = arena
        .find_token_at_position(root, offset_of(source, "b") - 1)
        .unwrap();
    assert_eq!(arena.get_identifier_text(token.node), Some("b"));
    assert_eq!(token.pos, 2);
}

#[test]
fn token_at_end_of_text_is_end_of_file() {
    let source = "let a = 1;\n";
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    for position in [source.len() as u32, source.len() as u32 + 100] {
        let token = arena.find_token_at_position(root, position).unwrap();
        assert_eq!(token.kind, SyntaxKind::EndOfFileToken as u16);
        assert_eq!(token.parent, root);
    }
}

#[test]
fn token_for_compound_greater_than_in_binary_expression() {
    let source = "x = a >>= b;";
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    let token = arena
        .find_token_at_position(root, offset_of(source, ">>="))
        .unwrap();
    assert_eq!(
        token.kind,
        SyntaxKind::GreaterThanGreaterThanEqualsToken as u16
    );
    assert_eq!(
        arena.get(token.parent).unwrap().kind,
        syntax_kind_ext::BINARY_EXPRESSION
    );
}

#[test]
fn token_at_keyword_inside_function_body() {
    let source = "function f() {\n  return 1;\n}";
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    let token = arena
        .find_token_at_position(root, offset_of(source, "return"))
        .unwrap();
    assert_eq!(token.kind, SyntaxKind::ReturnKeyword as u16);
    let kinds: Vec<u16> = arena
        .ancestors(token.containing_node())
        .map(|i| arena.get(i).unwrap().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            syntax_kind_ext::RETURN_STATEMENT,
            syntax_kind_ext::BLOCK,
            syntax_kind_ext::FUNCTION_DECLARATION,
            syntax_kind_ext::SOURCE_FILE,
        ]
    );
}

#[test]
fn token_lookup_on_empty_file() {
    let (parser, root) = parse_source("");
    let token = parser.get_arena().find_token_at_position(root, 0).unwrap();
    assert_eq!(token.kind, SyntaxKind::EndOfFileToken as u16);
}
