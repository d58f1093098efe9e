//! Tests for type expression parsing in the parser.
use crate::parser::{NodeIndex, ParserState, syntax_kind_ext};
use tsv_scanner::SyntaxKind;

fn parse_source(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.ts".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

/// Kind of the aliased type in `type X = ...;` (first statement).
fn alias_type_kind(parser: &ParserState, root: NodeIndex) -> u16 {
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let alias = arena
        .get_type_alias(arena.get(sf.statements.nodes[0]).unwrap())
        .unwrap();
    arena.get(alias.type_node).unwrap().kind
}

fn count_kind(parser: &ParserState, kind: u16) -> usize {
    parser
        .get_arena()
        .nodes
        .iter()
        .filter(|n| n.kind == kind)
        .count()
}

#[test]
fn parse_complex_type_expressions_have_no_errors() {
    let (parser, _root) = parse_source(
        "type T = { [K in keyof O]: O[K] } & Partial<{ a: string; b: number }>;\ntype U<T> = T extends { a: infer V } ? V : never;",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(count_kind(&parser, syntax_kind_ext::MAPPED_TYPE), 1);
    assert_eq!(count_kind(&parser, syntax_kind_ext::INFER_TYPE), 1);
}

#[test]
fn parse_alias_kinds() {
    for (source, kind) in [
        ("type A = string | number;", syntax_kind_ext::UNION_TYPE),
        ("type A = | 'a' | 'b';", syntax_kind_ext::UNION_TYPE),
        ("type A = B & C;", syntax_kind_ext::INTERSECTION_TYPE),
        ("type A = string[][];", syntax_kind_ext::ARRAY_TYPE),
        ("type A = T['key'];", syntax_kind_ext::INDEXED_ACCESS_TYPE),
        ("type A = keyof T;", syntax_kind_ext::TYPE_OPERATOR),
        ("type A = typeof value.prop;", syntax_kind_ext::TYPE_QUERY),
        ("type A = [x: number, y?: string, ...rest: boolean[]];", syntax_kind_ext::TUPLE_TYPE),
        ("type A = (a: number) => void;", syntax_kind_ext::FUNCTION_TYPE),
        ("type A = new () => Foo;", syntax_kind_ext::CONSTRUCTOR_TYPE),
        ("type A = abstract new () => Foo;", syntax_kind_ext::CONSTRUCTOR_TYPE),
        ("type A = (string);", syntax_kind_ext::PARENTHESIZED_TYPE),
        ("type A = -1;", syntax_kind_ext::LITERAL_TYPE),
        ("type A = null;", syntax_kind_ext::LITERAL_TYPE),
        ("type A = ns.Inner<T>;", syntax_kind_ext::TYPE_REFERENCE),
        ("type A = `a${string}b`;", syntax_kind_ext::TEMPLATE_LITERAL_TYPE),
        ("type A = unknown;", SyntaxKind::UnknownKeyword as u16),
        ("type A = void;", SyntaxKind::VoidKeyword as u16),
    ] {
        let (parser, root) = parse_source(source);
        assert!(
            parser.get_diagnostics().is_empty(),
            "{source}: {:?}",
            parser.get_diagnostics()
        );
        assert_eq!(
            alias_type_kind(&parser, root),
            kind,
            "{source}: got {}",
            syntax_kind_ext::kind_name(alias_type_kind(&parser, root))
        );
    }
}

#[test]
fn parse_type_predicates_in_return_position() {
    let (parser, _root) = parse_source(
        "function isString(x: unknown): x is string { return true; }\n\
         function assertDefined(v: unknown): asserts v {}\n\
         class Guard { isSelf(): this is Guard { return true; } }",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(count_kind(&parser, syntax_kind_ext::TYPE_PREDICATE), 3);
}

#[test]
fn parse_interface_members() {
    let (parser, root) = parse_source(
        "interface I {\n\
             (x: number): string;\n\
             new (x: number): I;\n\
             readonly [key: string]: unknown;\n\
             method?<T>(arg: T): void;\n\
             prop: number,\n\
             get size(): number;\n\
         }",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let interface = arena
        .get_interface(arena.get(sf.statements.nodes[0]).unwrap())
        .unwrap();
    let kinds: Vec<u16> = interface
        .members
        .iter()
        .map(|m| arena.get(m).unwrap().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            syntax_kind_ext::CALL_SIGNATURE,
            syntax_kind_ext::CONSTRUCT_SIGNATURE,
            syntax_kind_ext::INDEX_SIGNATURE,
            syntax_kind_ext::METHOD_SIGNATURE,
            syntax_kind_ext::PROPERTY_SIGNATURE,
            syntax_kind_ext::GET_ACCESSOR,
        ]
    );
}

#[test]
fn parse_type_parameters_with_modifiers_constraints_and_defaults() {
    let (parser, root) =
        parse_source("function f<const T extends readonly unknown[], in out U = T>() {}");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let function = arena.get_function(arena.get(sf.statements.nodes[0]).unwrap()).unwrap();
    let type_parameters = function.type_parameters.as_ref().unwrap();
    assert_eq!(type_parameters.len(), 2);
    let second = arena
        .get_type_parameter(arena.get(type_parameters.nodes[1]).unwrap())
        .unwrap();
    assert_eq!(second.modifiers.as_ref().map(|m| m.len()), Some(2));
    assert!(second.default.is_some());
}

#[test]
fn parse_nested_generic_arguments_close_with_single_greater_than() {
    let (parser, _root) = parse_source("let m: Map<string, Array<Set<number>>> = new Map();");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(count_kind(&parser, syntax_kind_ext::TYPE_REFERENCE), 3);
}

#[test]
fn parse_conditional_type_needs_same_line_extends() {
    let (parser, root) = parse_source("type A = B extends C ? D : E;");
    assert_eq!(alias_type_kind(&parser, root), syntax_kind_ext::CONDITIONAL_TYPE);
}

#[test]
fn parse_mapped_type_modifiers() {
    let (parser, _root) = parse_source("type R<T> = { -readonly [K in keyof T as `get${K & string}`]+?: T[K] };");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let mapped = arena.mapped_types.first().unwrap();
    assert_eq!(mapped.readonly_token, SyntaxKind::MinusToken as u16);
    assert_eq!(mapped.question_token, SyntaxKind::PlusToken as u16);
    assert!(mapped.name_type.is_some());
}

#[test]
fn parse_invalid_type_member_reports_diagnostics() {
    let (parser, _root) = parse_source("type T = <; ");
    assert!(!parser.get_diagnostics().is_empty());
}

#[test]
fn parse_missing_type_reports_type_expected() {
    let (parser, _root) = parse_source("let x: = 1;");
    let codes: Vec<u32> = parser.get_diagnostics().iter().map(|d| d.code).collect();
    assert!(
        codes.contains(&tsv_common::diagnostics::diagnostic_codes::TYPE_EXPECTED),
        "{codes:?}"
    );
}

#[test]
fn parse_type_nodes_are_classified_as_types() {
    let (parser, root) = parse_source("let x: Array<number> | undefined;");
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let statement = arena.get_variable(arena.get(sf.statements.nodes[0]).unwrap()).unwrap();
    let list = arena.get_variable(arena.get(statement.declarations.nodes[0]).unwrap()).unwrap();
    let decl = arena
        .get_variable_declaration(arena.get(list.declarations.nodes[0]).unwrap())
        .unwrap();
    assert!(arena.is_type_node(decl.type_annotation));
    assert!(!arena.is_type_node(decl.name));
}
