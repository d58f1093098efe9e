//! Tests for statement parsing in the parser.
use crate::parser::{NodeIndex, ParserState, node_flags, syntax_kind_ext};

fn parse_source(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.ts".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

fn statement_kinds(parser: &ParserState, root: NodeIndex) -> Vec<u16> {
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    sf.statements
        .iter()
        .map(|s| arena.get(s).unwrap().kind)
        .collect()
}

#[test]
fn parse_source_file_spans_whole_text_and_ends_with_eof() {
    let source = "let a = 1;\n";
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    let node = arena.get(root).unwrap();
    assert_eq!(node.kind, syntax_kind_ext::SOURCE_FILE);
    assert_eq!((node.pos, node.end), (0, source.len() as u32));

    let sf = arena.get_source_file_at(root).unwrap();
    let eof = arena.get(sf.end_of_file_token).unwrap();
    assert_eq!(eof.end, source.len() as u32);
    assert_eq!(arena.parent_of(sf.end_of_file_token), root);
}

#[test]
fn parse_statement_recovery_on_malformed_top_level_diagnostics() {
    let (parser, root) = parse_source("const x = 1\nconst y = ;\nconst z = 3;");
    let sf = parser.get_arena().get_source_file_at(root).unwrap();
    assert!(sf.statements.nodes.len() >= 2);
    assert!(!parser.get_diagnostics().is_empty());
}

#[test]
fn parse_stray_close_brace_is_reported_and_skipped() {
    let (parser, root) = parse_source("}\nlet ok = 1;");
    assert_eq!(
        statement_kinds(&parser, root),
        vec![syntax_kind_ext::VARIABLE_STATEMENT]
    );
    assert_eq!(parser.get_diagnostics().len(), 1);
}

#[test]
fn parse_control_flow_statements_without_errors() {
    let (parser, root) = parse_source(
        "if (a) { b(); } else c();\n\
         while (x) x--;\n\
         do { y++; } while (y < 10);\n\
         for (let i = 0; i < n; i++) {}\n\
         for (const k in obj) {}\n\
         for (const v of list) {}\n\
         switch (s) { case 1: break; default: f(); }\n\
         try { g(); } catch (e) { h(e); } finally { done(); }\n\
         label: for (;;) { continue label; }\n\
         throw new Error('x');\n\
         debugger;",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(
        statement_kinds(&parser, root),
        vec![
            syntax_kind_ext::IF_STATEMENT,
            syntax_kind_ext::WHILE_STATEMENT,
            syntax_kind_ext::DO_STATEMENT,
            syntax_kind_ext::FOR_STATEMENT,
            syntax_kind_ext::FOR_IN_STATEMENT,
            syntax_kind_ext::FOR_OF_STATEMENT,
            syntax_kind_ext::SWITCH_STATEMENT,
            syntax_kind_ext::TRY_STATEMENT,
            syntax_kind_ext::LABELED_STATEMENT,
            syntax_kind_ext::THROW_STATEMENT,
            syntax_kind_ext::DEBUGGER_STATEMENT,
        ]
    );
}

#[test]
fn parse_variable_declaration_list_flags() {
    let (parser, root) = parse_source("var a; let b; const c = 1; using d = r();");
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let flags: Vec<u16> = sf
        .statements
        .iter()
        .map(|s| {
            let statement = arena.get_variable(arena.get(s).unwrap()).unwrap();
            let list = statement.declarations.nodes[0];
            arena.get(list).unwrap().flags
        })
        .collect();
    assert_eq!(
        flags,
        vec![
            node_flags::NONE,
            node_flags::LET,
            node_flags::CONST,
            node_flags::USING
        ]
    );
}

#[test]
fn parse_destructuring_declarations() {
    let (parser, root) = parse_source("const { a, b: [c, , d = 1], ...rest } = value;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let statement = arena.get_variable(arena.get(sf.statements.nodes[0]).unwrap()).unwrap();
    let list = arena.get_variable(arena.get(statement.declarations.nodes[0]).unwrap()).unwrap();
    let decl = arena
        .get_variable_declaration(arena.get(list.declarations.nodes[0]).unwrap())
        .unwrap();
    let pattern = arena.get(decl.name).unwrap();
    assert_eq!(pattern.kind, syntax_kind_ext::OBJECT_BINDING_PATTERN);
    assert_eq!(arena.get_binding_pattern(pattern).unwrap().elements.len(), 3);
}

#[test]
fn parse_catch_clause_variable_is_a_variable_declaration() {
    let (parser, root) = parse_source("try {} catch ({ message }) {}");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let try_data = arena.get_try(arena.get(sf.statements.nodes[0]).unwrap()).unwrap();
    let catch = arena.get_catch_clause(arena.get(try_data.catch_clause).unwrap()).unwrap();
    let variable = arena.get(catch.variable_declaration).unwrap();
    assert_eq!(variable.kind, syntax_kind_ext::VARIABLE_DECLARATION);
}

#[test]
fn parse_switch_clauses_live_in_case_block() {
    let (parser, root) = parse_source("switch (x) { case 1: case 2: a(); break; default: }");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let switch = arena.get_switch(arena.get(sf.statements.nodes[0]).unwrap()).unwrap();
    let case_block = arena.get(switch.case_block).unwrap();
    assert_eq!(case_block.kind, syntax_kind_ext::CASE_BLOCK);
    let clauses: Vec<u16> = arena
        .get_block(case_block)
        .unwrap()
        .statements
        .iter()
        .map(|c| arena.get(c).unwrap().kind)
        .collect();
    assert_eq!(
        clauses,
        vec![
            syntax_kind_ext::CASE_CLAUSE,
            syntax_kind_ext::CASE_CLAUSE,
            syntax_kind_ext::DEFAULT_CLAUSE
        ]
    );
}

#[test]
fn parse_declarations_and_module_syntax() {
    let (parser, root) = parse_source(
        "import def, { a as b, type C } from './m';\n\
         import * as ns from 'ns';\n\
         export const x = 1;\n\
         export default function () {}\n\
         export { x as y } from './z';\n\
         export * from './all';\n\
         interface I { a: string }\n\
         type T = I | null;\n\
         const enum E { A = 1, B }\n\
         declare module 'ext' { export const v: number; }\n\
         namespace A.B { let inner = 1; }",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(
        statement_kinds(&parser, root),
        vec![
            syntax_kind_ext::IMPORT_DECLARATION,
            syntax_kind_ext::IMPORT_DECLARATION,
            syntax_kind_ext::VARIABLE_STATEMENT,
            syntax_kind_ext::FUNCTION_DECLARATION,
            syntax_kind_ext::EXPORT_DECLARATION,
            syntax_kind_ext::EXPORT_DECLARATION,
            syntax_kind_ext::INTERFACE_DECLARATION,
            syntax_kind_ext::TYPE_ALIAS_DECLARATION,
            syntax_kind_ext::ENUM_DECLARATION,
            syntax_kind_ext::MODULE_DECLARATION,
            syntax_kind_ext::MODULE_DECLARATION,
        ]
    );
}

#[test]
fn parse_let_as_identifier_is_an_expression_statement() {
    let (parser, root) = parse_source("let;\nlet = 1;");
    assert_eq!(
        statement_kinds(&parser, root),
        vec![
            syntax_kind_ext::EXPRESSION_STATEMENT,
            syntax_kind_ext::EXPRESSION_STATEMENT
        ]
    );
}

#[test]
fn parse_block_parent_links_reach_source_file() {
    let source = "function f() { if (a) { return b; } }";
    let b_end = source.find("b;").unwrap() as u32 + 1;
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    let b = arena
        .nodes
        .iter()
        .position(|n| n.kind == tsv_scanner::SyntaxKind::Identifier as u16 && n.end == b_end)
        .map(|i| NodeIndex(i as u32))
        .unwrap();
    let kinds: Vec<u16> = arena
        .ancestors(b)
        .map(|i| arena.get(i).unwrap().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            tsv_scanner::SyntaxKind::Identifier as u16,
            syntax_kind_ext::RETURN_STATEMENT,
            syntax_kind_ext::BLOCK,
            syntax_kind_ext::IF_STATEMENT,
            syntax_kind_ext::BLOCK,
            syntax_kind_ext::FUNCTION_DECLARATION,
            syntax_kind_ext::SOURCE_FILE,
        ]
    );
    assert_eq!(arena.ancestors(b).last(), Some(root));
}
