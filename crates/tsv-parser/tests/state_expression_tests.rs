//! Tests for expression parsing in the parser.
use crate::parser::{NodeArena, NodeIndex, ParserState, node_flags, syntax_kind_ext};
use tsv_scanner::SyntaxKind;

fn parse_source(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.ts".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

/// Expression of the first statement, which must be an expression statement.
fn first_expression(parser: &ParserState, root: NodeIndex) -> NodeIndex {
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let statement = arena.get(sf.statements.nodes[0]).unwrap();
    arena.get_expression_statement(statement).unwrap().expression
}

fn kind_of(arena: &NodeArena, index: NodeIndex) -> u16 {
    arena.get(index).unwrap().kind
}

fn text_of<'a>(parser: &'a ParserState, index: NodeIndex) -> &'a str {
    let arena = parser.get_arena();
    let node = arena.get(index).unwrap();
    let start = arena.get_start(index) as usize;
    &parser.get_source_text()[start..node.end as usize]
}

#[test]
fn parse_binary_precedence_multiplication_binds_tighter() {
    let (parser, root) = parse_source("a + b * c;");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let binary = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(binary.operator_token, SyntaxKind::PlusToken as u16);
    assert_eq!(text_of(&parser, binary.right), "b * c");
}

#[test]
fn parse_exponent_is_right_associative() {
    let (parser, root) = parse_source("a ** b ** c;");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let binary = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(text_of(&parser, binary.left), "a");
    assert_eq!(text_of(&parser, binary.right), "b ** c");
}

#[test]
fn parse_assignment_is_right_associative() {
    let (parser, root) = parse_source("a = b += c;");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let binary = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(binary.operator_token, SyntaxKind::EqualsToken as u16);
    assert_eq!(text_of(&parser, binary.right), "b += c");
}

#[test]
fn parse_comma_expression_is_binary() {
    let (parser, root) = parse_source("i++, j--;");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let binary = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(binary.operator_token, SyntaxKind::CommaToken as u16);
    assert_eq!(
        kind_of(arena, binary.left),
        syntax_kind_ext::POSTFIX_UNARY_EXPRESSION
    );
}

#[test]
fn parse_greater_than_family_is_recombined() {
    for (source, operator) in [
        ("a >= b;", SyntaxKind::GreaterThanEqualsToken),
        ("a >> b;", SyntaxKind::GreaterThanGreaterThanToken),
        ("a >>> b;", SyntaxKind::GreaterThanGreaterThanGreaterThanToken),
        ("a >>= b;", SyntaxKind::GreaterThanGreaterThanEqualsToken),
    ] {
        let (parser, root) = parse_source(source);
        assert!(parser.get_diagnostics().is_empty(), "{source}");
        let arena = parser.get_arena();
        let expr = first_expression(&parser, root);
        let binary = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
        assert_eq!(binary.operator_token, operator as u16, "{source}");
    }
}

#[test]
fn parse_member_and_call_chains() {
    let (parser, root) = parse_source("a.b[c](d)?.e!;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    assert_eq!(kind_of(arena, expr), syntax_kind_ext::NON_NULL_EXPRESSION);
    let inner = arena.get_unary_expr_ex(arena.get(expr).unwrap()).unwrap().expression;
    let access = arena.get(inner).unwrap();
    assert_eq!(access.kind, syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION);
    assert_ne!(access.flags & node_flags::OPTIONAL_CHAIN, 0);
    assert_eq!(text_of(&parser, inner), "a.b[c](d)?.e");
}

#[test]
fn parse_property_access_allows_keyword_names() {
    let (parser, root) = parse_source("obj.class.default;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let expr = first_expression(&parser, root);
    assert_eq!(
        kind_of(parser.get_arena(), expr),
        syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION
    );
}

#[test]
fn parse_arrow_functions() {
    let (parser, _) = parse_source(
        "const f = x => x + 1;\n\
         const g = (a, b = 2) => { return a; };\n\
         const h = async (x: number): Promise<void> => {};\n\
         const i = async y => y;\n\
         const j = <T,>(v: T) => v;",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let arrows = arena
        .nodes
        .iter()
        .filter(|n| n.kind == syntax_kind_ext::ARROW_FUNCTION)
        .count();
    assert_eq!(arrows, 5);
}

#[test]
fn parse_parenthesized_expression_is_not_an_arrow() {
    let (parser, root) = parse_source("(a, b);");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let expr = first_expression(&parser, root);
    assert_eq!(
        kind_of(parser.get_arena(), expr),
        syntax_kind_ext::PARENTHESIZED_EXPRESSION
    );
}

#[test]
fn parse_conditional_with_parenthesized_true_branch() {
    let (parser, root) = parse_source("x = a ? (b) : c;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let binary = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(
        kind_of(arena, binary.right),
        syntax_kind_ext::CONDITIONAL_EXPRESSION
    );
}

#[test]
fn parse_object_literal_members() {
    let (parser, root) = parse_source(
        "o = { a: 1, b, ...rest, [k]: v, m() {}, get g() { return 1; }, set s(v) {}, async *gen() {} };",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let binary = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    let literal = arena.get_literal_expr(arena.get(binary.right).unwrap()).unwrap();
    let kinds: Vec<u16> = literal.elements.iter().map(|e| kind_of(arena, e)).collect();
    assert_eq!(
        kinds,
        vec![
            syntax_kind_ext::PROPERTY_ASSIGNMENT,
            syntax_kind_ext::SHORTHAND_PROPERTY_ASSIGNMENT,
            syntax_kind_ext::SPREAD_ASSIGNMENT,
            syntax_kind_ext::PROPERTY_ASSIGNMENT,
            syntax_kind_ext::METHOD_DECLARATION,
            syntax_kind_ext::GET_ACCESSOR,
            syntax_kind_ext::SET_ACCESSOR,
            syntax_kind_ext::METHOD_DECLARATION,
        ]
    );
}

#[test]
fn parse_array_literal_with_holes_and_spread() {
    let (parser, root) = parse_source("[a, , ...b];");
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let literal = arena.get_literal_expr(arena.get(expr).unwrap()).unwrap();
    let kinds: Vec<u16> = literal.elements.iter().map(|e| kind_of(arena, e)).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::Identifier as u16,
            syntax_kind_ext::OMITTED_EXPRESSION,
            syntax_kind_ext::SPREAD_ELEMENT,
        ]
    );
}

#[test]
fn parse_template_expression_spans() {
    let (parser, root) = parse_source("`a${b}c${d + 1}e`;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let template = arena.get_template_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(template.template_spans.len(), 2);
    let last = arena
        .get_template_span(arena.get(template.template_spans.nodes[1]).unwrap())
        .unwrap();
    assert_eq!(text_of(&parser, last.expression), "d + 1");
    assert_eq!(kind_of(arena, last.literal), SyntaxKind::TemplateTail as u16);
}

#[test]
fn parse_regex_literal_after_operator() {
    let (parser, root) = parse_source("r = /ab+c/gi;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let binary = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(
        kind_of(arena, binary.right),
        SyntaxKind::RegularExpressionLiteral as u16
    );
}

#[test]
fn parse_as_and_satisfies_expressions() {
    let (parser, root) = parse_source("(x as unknown as T) satisfies U;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let expr = first_expression(&parser, root);
    assert_eq!(
        kind_of(parser.get_arena(), expr),
        syntax_kind_ext::SATISFIES_EXPRESSION
    );
}

#[test]
fn parse_generic_call_versus_comparison() {
    let (parser, root) = parse_source("f<string>(x);\na < b > c;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let first = arena
        .get_expression_statement(arena.get(sf.statements.nodes[0]).unwrap())
        .unwrap();
    let second = arena
        .get_expression_statement(arena.get(sf.statements.nodes[1]).unwrap())
        .unwrap();
    assert_eq!(kind_of(arena, first.expression), syntax_kind_ext::CALL_EXPRESSION);
    assert_eq!(kind_of(arena, second.expression), syntax_kind_ext::BINARY_EXPRESSION);
}

#[test]
fn parse_unary_and_update_expressions() {
    let (parser, root) = parse_source("!--x;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let expr = first_expression(&parser, root);
    let not = arena.get_unary_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(not.operator, SyntaxKind::ExclamationToken as u16);
    let decrement = arena.get_unary_expr(arena.get(not.operand).unwrap()).unwrap();
    assert_eq!(decrement.operator, SyntaxKind::MinusMinusToken as u16);
}

#[test]
fn parse_new_expression_and_new_target() {
    let (parser, root) = parse_source("function F() { new.target; return new Map<string, number>(); }");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    assert!(arena.nodes.iter().any(|n| n.kind == syntax_kind_ext::NEW_EXPRESSION));
    assert!(
        arena
            .nodes
            .iter()
            .any(|n| n.kind == syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION)
    );
    let _ = root;
}

#[test]
fn parse_await_and_yield_in_their_contexts() {
    let (parser, _root) = parse_source(
        "async function a() { await p; }\nfunction* g() { yield 1; yield* other(); }",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    assert!(arena.nodes.iter().any(|n| n.kind == syntax_kind_ext::AWAIT_EXPRESSION));
    assert_eq!(
        arena
            .nodes
            .iter()
            .filter(|n| n.kind == syntax_kind_ext::YIELD_EXPRESSION)
            .count(),
        2
    );
}

#[test]
fn parse_missing_operand_reports_expression_expected() {
    let (parser, _root) = parse_source("a = ;");
    assert!(!parser.get_diagnostics().is_empty());
}
