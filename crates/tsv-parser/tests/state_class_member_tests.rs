//! Tests for class, member and parameter parsing in the parser.
use crate::parser::{NodeIndex, ParserState, syntax_kind_ext};
use tsv_scanner::SyntaxKind;

fn parse_source(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.ts".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

fn class_member_kinds(parser: &ParserState, root: NodeIndex) -> Vec<u16> {
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let class = arena.get_class(arena.get(sf.statements.nodes[0]).unwrap()).unwrap();
    class
        .members
        .iter()
        .map(|m| arena.get(m).unwrap().kind)
        .collect()
}

#[test]
fn parse_class_members_of_every_kind() {
    let (parser, root) = parse_source(
        "class C extends Base implements I, J {\n\
             static count = 0;\n\
             #secret?: string;\n\
             readonly name!: string;\n\
             [key: string]: unknown;\n\
             constructor(private readonly a: number, b = 1) { super(); }\n\
             get value() { return this.a; }\n\
             set value(v) {}\n\
             async *items() {}\n\
             static { C.count++; }\n\
             ;\n\
         }",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(
        class_member_kinds(&parser, root),
        vec![
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::INDEX_SIGNATURE,
            syntax_kind_ext::CONSTRUCTOR,
            syntax_kind_ext::GET_ACCESSOR,
            syntax_kind_ext::SET_ACCESSOR,
            syntax_kind_ext::METHOD_DECLARATION,
            syntax_kind_ext::CLASS_STATIC_BLOCK_DECLARATION,
            syntax_kind_ext::SEMICOLON_CLASS_ELEMENT,
        ]
    );
}

#[test]
fn parse_modifier_keywords_used_as_member_names() {
    let (parser, root) = parse_source("class C { static() {} get = 1; async: boolean; readonly }");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let kinds = class_member_kinds(&parser, root);
    assert_eq!(
        kinds,
        vec![
            syntax_kind_ext::METHOD_DECLARATION,
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::PROPERTY_DECLARATION,
        ]
    );
    let sf = arena.get_source_file_at(root).unwrap();
    let class = arena.get_class(arena.get(sf.statements.nodes[0]).unwrap()).unwrap();
    let method = arena.get_method_decl(arena.get(class.members.nodes[0]).unwrap()).unwrap();
    assert_eq!(arena.get_identifier_text(method.name), Some("static"));
    assert!(method.modifiers.is_none());
}

#[test]
fn parse_heritage_clauses_use_expression_with_type_arguments() {
    let (parser, root) = parse_source("class A extends mixin(B)<T> implements ns.I<U> {}");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let class = arena.get_class(arena.get(sf.statements.nodes[0]).unwrap()).unwrap();
    let clauses = class.heritage_clauses.as_ref().unwrap();
    assert_eq!(clauses.len(), 2);
    for clause in clauses.iter() {
        let heritage = arena.get_heritage_clause(arena.get(clause).unwrap()).unwrap();
        for ty in heritage.types.iter() {
            assert_eq!(
                arena.get(ty).unwrap().kind,
                syntax_kind_ext::EXPRESSION_WITH_TYPE_ARGUMENTS
            );
            assert!(arena.is_type_node(ty));
        }
    }
}

#[test]
fn parse_parameters_with_modifiers_rest_and_this() {
    let (parser, root) =
        parse_source("function f(this: Window, { a, b }: P, [c]?: Q, ...rest: number[]) {}");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let function = sf.statements.nodes[0];
    let parameters = arena.function_parameters(function).unwrap();
    assert_eq!(parameters.len(), 4);

    let this_param = arena.get_parameter(arena.get(parameters.nodes[0]).unwrap()).unwrap();
    assert_eq!(
        arena.get(this_param.name).unwrap().kind,
        SyntaxKind::ThisKeyword as u16
    );
    let pattern = arena.get_parameter(arena.get(parameters.nodes[1]).unwrap()).unwrap();
    assert_eq!(
        arena.get(pattern.name).unwrap().kind,
        syntax_kind_ext::OBJECT_BINDING_PATTERN
    );
    let optional = arena.get_parameter(arena.get(parameters.nodes[2]).unwrap()).unwrap();
    assert!(optional.question_token);
    let rest = arena.get_parameter(arena.get(parameters.nodes[3]).unwrap()).unwrap();
    assert!(rest.dot_dot_dot_token);
}

#[test]
fn parse_decorated_class_and_members() {
    let (parser, root) = parse_source(
        "@component({ selector: 'x' })\nclass Widget {\n  @input() label = '';\n  run(@inject(T) dep: T) {}\n}",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let decorators = arena
        .nodes
        .iter()
        .filter(|n| n.kind == syntax_kind_ext::DECORATOR)
        .count();
    assert_eq!(decorators, 3);
    assert_eq!(
        class_member_kinds(&parser, root),
        vec![
            syntax_kind_ext::PROPERTY_DECLARATION,
            syntax_kind_ext::METHOD_DECLARATION
        ]
    );
}

#[test]
fn parse_class_expression_without_name() {
    let (parser, root) = parse_source("const K = class extends Base { m() {} };");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let class = arena
        .nodes
        .iter()
        .position(|n| n.kind == syntax_kind_ext::CLASS_EXPRESSION)
        .map(|i| NodeIndex(i as u32))
        .unwrap();
    let data = arena.get_class(arena.get(class).unwrap()).unwrap();
    assert!(data.name.is_none());
    assert_eq!(data.members.len(), 1);
    assert_eq!(arena.ancestors(class).last(), Some(root));
}

#[test]
fn parse_computed_and_literal_member_names() {
    let (parser, root) = parse_source("class C { [Symbol.iterator]() {} 'quoted' = 1; 42() {} }");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let class = arena.get_class(arena.get(sf.statements.nodes[0]).unwrap()).unwrap();
    let first = arena.get_method_decl(arena.get(class.members.nodes[0]).unwrap()).unwrap();
    assert_eq!(
        arena.get(first.name).unwrap().kind,
        syntax_kind_ext::COMPUTED_PROPERTY_NAME
    );
}

#[test]
fn parse_unterminated_class_body_reports_error() {
    let (parser, _root) = parse_source("class C { m() {}");
    assert!(!parser.get_diagnostics().is_empty());
}
