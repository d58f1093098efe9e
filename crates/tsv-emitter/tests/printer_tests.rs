//! Tests for the single-line printer.
use super::*;
use tsv_common::limits::MAX_PRINT_DEPTH;
use tsv_parser::parser::node::{IdentifierData, NodeArena, ParenthesizedData};
use tsv_parser::parser::{NodeIndex, ParserState, syntax_kind_ext};
use tsv_scanner::SyntaxKind;

fn parse(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.ts".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

fn first_statement(parser: &ParserState, root: NodeIndex) -> NodeIndex {
    let sf = parser.get_arena().get_source_file_at(root).unwrap();
    sf.statements.nodes[0]
}

fn print_statement_with(source: &str, options: PrinterOptions) -> String {
    let (parser, root) = parse(source);
    let statement = first_statement(&parser, root);
    print_node(parser.get_arena(), statement, options)
}

fn print_statement(source: &str) -> String {
    print_statement_with(source, PrinterOptions::default())
}

/// Print the expression of a leading expression statement.
fn print_expression(source: &str) -> String {
    let (parser, root) = parse(source);
    let arena = parser.get_arena();
    let statement = first_statement(&parser, root);
    let node = arena.get(statement).unwrap();
    let expression = arena.get_expression_statement(node).unwrap().expression;
    print_node(arena, expression, PrinterOptions::default())
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn binary_operators_get_canonical_spacing() {
    assert_eq!(print_expression("a+b*c"), "a + b * c");
    assert_eq!(print_expression("x>0&&y<=1"), "x > 0 && y <= 1");
}

#[test]
fn comma_operator_has_no_space_before() {
    assert_eq!(print_expression("(1,2,3)"), "(1, 2, 3)");
}

#[test]
fn object_literals_have_spaces_inside_braces() {
    assert_eq!(print_expression("x = {a:1, b}"), "x = { a: 1, b }");
    assert_eq!(print_expression("x = {}"), "x = {}");
    assert_eq!(print_expression("x = [1, , 3]"), "x = [1, , 3]");
}

#[test]
fn trailing_commas_survive() {
    assert_eq!(print_expression("x = [1, 2,]"), "x = [1, 2,]");
    assert_eq!(print_expression("x = {a: 1,}"), "x = { a: 1, }");
}

#[test]
fn prefix_operators_do_not_fuse() {
    assert_eq!(print_expression("-(-x)"), "-(-x)");
    assert_eq!(print_expression("- -x"), "- -x");
    assert_eq!(print_expression("+ ++x"), "+ ++x");
    assert_eq!(print_expression("!x"), "!x");
}

#[test]
fn member_access_and_calls() {
    assert_eq!(print_expression("a . b [ 0 ] ( 1 , 2 )"), "a.b[0](1, 2)");
    assert_eq!(print_expression("a?.b?.[0]"), "a?.b?.[0]");
    assert_eq!(print_expression("new Foo"), "new Foo");
    assert_eq!(print_expression("new Foo<T>(1)"), "new Foo<T>(1)");
}

#[test]
fn arrow_heads_keep_their_source_shape() {
    assert_eq!(print_expression("f(x=>x)"), "f(x => x)");
    assert_eq!(print_expression("f((x)=>x)"), "f((x) => x)");
    assert_eq!(
        print_expression("f(async (a, b) => {\n  return a;\n})"),
        "f(async (a, b) => { return a; })"
    );
}

#[test]
fn conditional_and_type_assertions() {
    assert_eq!(print_expression("a?b:c"), "a ? b : c");
    assert_eq!(print_expression("x as string"), "x as string");
    assert_eq!(print_expression("y!"), "y!");
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn literals_keep_source_spelling() {
    assert_eq!(
        print_expression("x = 'a\\'b' + 0x1F + 1_000"),
        "x = 'a\\'b' + 0x1F + 1_000"
    );
    assert_eq!(print_expression("r = /ab+c/gi"), "r = /ab+c/gi");
}

#[test]
fn template_literals_print_raw_pieces() {
    assert_eq!(print_expression("`a${ b }c${d}`"), "`a${b}c${d}`");
}

// =============================================================================
// Functions and classes
// =============================================================================

#[test]
fn function_declarations() {
    assert_eq!(
        print_statement("function foo(a: number, b?: string): void {}"),
        "function foo(a: number, b?: string): void { }"
    );
    assert_eq!(
        print_statement("function* g() {\n  yield 1;\n}"),
        "function* g() { yield 1; }"
    );
}

#[test]
fn anonymous_function_expression() {
    assert_eq!(print_expression("x = function () {}"), "x = function () { }");
}

#[test]
fn class_members_collapse_to_one_line() {
    assert_eq!(
        print_statement("class A extends B {\n  x = 1;\n  get y() { return 2; }\n  static {}\n}"),
        "class A extends B { x = 1; get y() { return 2; } static { } }"
    );
    assert_eq!(print_statement("class E {}"), "class E { }");
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn variable_statements_pick_their_keyword() {
    assert_eq!(print_statement("let a = 1, b;"), "let a = 1, b");
    assert_eq!(print_statement("const { p, q: r } = o;"), "const { p, q: r } = o");
    assert_eq!(print_statement("var [m, ...n] = list;"), "var [m, ...n] = list");
}

#[test]
fn if_else_blocks_collapse() {
    assert_eq!(
        print_statement("if (a) {\n  b();\n} else {\n  c();\n}"),
        "if (a) { b(); } else { c(); }"
    );
    assert_eq!(print_statement("if (a) b(); else c();"), "if (a) b(); else c()");
}

#[test]
fn loops() {
    assert_eq!(
        print_statement("for (let i = 0; i < n; i++) sum += i;"),
        "for (let i = 0; i < n; i++) sum += i"
    );
    assert_eq!(print_statement("for (;;) {}"), "for (;;) { }");
    assert_eq!(
        print_statement("for (const k of list) {}"),
        "for (const k of list) { }"
    );
    assert_eq!(
        print_statement("do { x--; } while (x > 0);"),
        "do { x--; } while (x > 0)"
    );
}

#[test]
fn switch_clauses() {
    assert_eq!(
        print_statement("switch (x) {\n  case 1:\n    a();\n    break;\n  default:\n}"),
        "switch (x) { case 1: a(); break; default: }"
    );
}

#[test]
fn try_catch_finally() {
    assert_eq!(
        print_statement("try { a(); } catch (e) {} finally { b(); }"),
        "try { a(); } catch (e) { } finally { b(); }"
    );
}

#[test]
fn trailing_semicolon_is_optional() {
    let keep = PrinterOptions {
        omit_trailing_semicolon: false,
        ..PrinterOptions::default()
    };
    assert_eq!(print_statement_with("a();", keep), "a();");
    assert_eq!(print_statement("a();"), "a()");
    assert_eq!(
        print_statement_with("if (a) b(); else c();", keep),
        "if (a) b(); else c();"
    );
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn comments_are_removed_by_default() {
    let (parser, root) = parse("/* lead */ a(); // trailing\n");
    assert_eq!(
        print_node(parser.get_arena(), root, PrinterOptions::default()),
        "a()"
    );
}

#[test]
fn leading_block_comments_can_be_kept() {
    let options = PrinterOptions {
        remove_comments: false,
        ..PrinterOptions::default()
    };
    let (parser, root) = parse("/* lead */ a(); // trailing\n");
    assert_eq!(print_node(parser.get_arena(), root, options), "/* lead */ a()");

    let (parser, root) = parse("/* a\n   b */\nx;\n// gone\ny;");
    assert_eq!(print_node(parser.get_arena(), root, options), "/* a b */ x; y");
}

// =============================================================================
// Types
// =============================================================================

#[test]
fn type_annotations() {
    assert_eq!(
        print_statement("let v: Array<string> | number[] = [];"),
        "let v: Array<string> | number[] = []"
    );
    assert_eq!(
        print_statement("let o: { a: string } = x;"),
        "let o: { a: string; } = x"
    );
}

#[test]
fn type_aliases() {
    assert_eq!(
        print_statement("type F = (a: number) => void;"),
        "type F = (a: number) => void"
    );
    assert_eq!(
        print_statement("type M = { readonly [K in keyof T]?: T[K] };"),
        "type M = { readonly [K in keyof T]?: T[K]; }"
    );
    assert_eq!(
        print_statement("type C<T> = T extends string ? 'a' : never;"),
        "type C<T> = T extends string ? 'a' : never"
    );
}

#[test]
fn interfaces_terminate_members() {
    assert_eq!(
        print_statement("interface I {\n  a: string\n  b(): void\n}"),
        "interface I { a: string; b(): void; }"
    );
}

#[test]
fn enums_and_imports() {
    assert_eq!(print_statement("enum E { A = 1, B }"), "enum E { A = 1, B }");
    assert_eq!(
        print_statement("import { a as b, c } from \"m\";"),
        "import { a as b, c } from \"m\""
    );
    assert_eq!(
        print_statement("import * as ns from 'm';"),
        "import * as ns from 'm'"
    );
}

// =============================================================================
// Depth guard
// =============================================================================

#[test]
fn print_depth_limit_truncates_instead_of_overflowing() {
    let handle = std::thread::Builder::new()
        .stack_size(32 * 1024 * 1024)
        .spawn(|| {
            let mut arena = NodeArena::new();
            let mut idx = arena.add_identifier(
                SyntaxKind::Identifier as u16,
                0,
                1,
                IdentifierData {
                    escaped_text: "x".to_string(),
                },
            );
            for _ in 0..MAX_PRINT_DEPTH + 200 {
                idx = arena.add_parenthesized(
                    syntax_kind_ext::PARENTHESIZED_EXPRESSION,
                    0,
                    1,
                    ParenthesizedData { expression: idx },
                );
            }
            print_node(&arena, idx, PrinterOptions::default())
        })
        .unwrap();
    let printed = handle.join().unwrap();
    let depth = MAX_PRINT_DEPTH as usize;
    assert_eq!(printed, format!("{}{}", "(".repeat(depth), ")".repeat(depth)));
}

#[test]
fn printer_reports_truncation_until_next_print() {
    let handle = std::thread::Builder::new()
        .stack_size(32 * 1024 * 1024)
        .spawn(|| {
            let terms = vec!["a"; MAX_PRINT_DEPTH as usize + 500];
            let source = format!("{};\nb + 1;", terms.join(" + "));
            let (parser, root) = parse(&source);
            let arena = parser.get_arena();
            let sf = arena.get_source_file_at(root).unwrap();
            let mut printer = Printer::new(arena, PrinterOptions::default());

            printer.print_node(sf.statements.nodes[0]);
            let deep_truncated = printer.was_truncated();
            let shallow = printer.print_node(sf.statements.nodes[1]);
            (deep_truncated, shallow, printer.was_truncated())
        })
        .unwrap();
    let (deep_truncated, shallow, shallow_truncated) = handle.join().unwrap();
    assert!(deep_truncated);
    assert_eq!(shallow, "b + 1");
    assert!(!shallow_truncated);
}

#[test]
fn printer_is_reusable_between_nodes() {
    let (parser, root) = parse("a + 1;\nb * 2;");
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let mut printer = Printer::new(arena, PrinterOptions::default());
    assert_eq!(printer.print_node(sf.statements.nodes[0]), "a + 1");
    assert_eq!(printer.print_node(sf.statements.nodes[1]), "b * 2");
    assert_eq!(printer.print_node(NodeIndex::NONE), "");
}
