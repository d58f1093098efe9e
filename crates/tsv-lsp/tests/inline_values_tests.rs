use super::*;
use tsv_parser::ParserState;

fn parse(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.ts".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

fn values_in(source: &str, position: u32, visible_span: TextSpan) -> Vec<InlineValue> {
    let (parser, root) = parse(source);
    InlineValuesProvider::new(parser.get_arena(), root).provide_inline_values(position, visible_span)
}

fn values_at(source: &str, position: usize) -> Vec<InlineValue> {
    values_in(source, position as u32, TextSpan::everything())
}

/// `(is_lookup, text)` pairs, in emission order.
fn summarize(values: &[InlineValue]) -> Vec<(bool, &str)> {
    values
        .iter()
        .map(|value| (matches!(value, InlineValue::VariableLookup { .. }), value.text()))
        .collect()
}

fn lookup(name: &str) -> (bool, &str) {
    (true, name)
}

fn expr(text: &str) -> (bool, &str) {
    (false, text)
}

// =============================================================================
// Functions and declarations
// =============================================================================

#[test]
fn test_function_parameters_and_locals() {
    let source = "function f(a) { let b = a + 1; return b; }";
    let values = values_at(source, source.find("return").unwrap());

    assert_eq!(summarize(&values), vec![lookup("f"), lookup("a"), lookup("b")]);
    assert_eq!(values[0].span(), TextSpan::new(9, 1));
    assert_eq!(values[1].span(), TextSpan::new(11, 1));
}

#[test]
fn test_unlocated_function_only_reports_its_name() {
    let source = "function outer(){ function inner(){ let z=1; } }";
    let values = values_at(source, source.rfind('}').unwrap());

    assert_eq!(summarize(&values), vec![lookup("outer"), lookup("inner")]);
}

#[test]
fn test_function_expression_is_not_named() {
    let source = "const g = function (p) { return p; };";
    let values = values_at(source, source.find("return").unwrap());

    assert_eq!(summarize(&values), vec![lookup("g"), lookup("p")]);
}

#[test]
fn test_object_literal_properties() {
    let source = "const o = { p: a + 1, q }; use(o);";
    let values = values_at(source, source.find("use").unwrap());

    assert_eq!(
        summarize(&values),
        vec![lookup("o"), expr("a + 1"), expr("q")]
    );
}

#[test]
fn test_class_static_block() {
    let source = "class K { static { let s = 1; s; } }";
    let values = values_at(source, source.find("s; }").unwrap());

    assert_eq!(summarize(&values), vec![lookup("K"), lookup("s")]);
}

// =============================================================================
// Control flow
// =============================================================================

#[test]
fn test_if_condition_then_body() {
    let source = "if (x > 0) { y = x; }";
    let values = values_at(source, source.rfind('}').unwrap());

    assert_eq!(summarize(&values), vec![expr("x > 0"), lookup("y")]);
    assert_eq!(values[0].span(), TextSpan::new(4, 5));
}

#[test]
fn test_parenthesized_assignment_condition() {
    let source = "let m; if ((m = next())) { m; }";
    let values = values_at(source, source.find("m; }").unwrap());

    assert_eq!(summarize(&values), vec![lookup("m"), lookup("m")]);
    assert_eq!(values[1].span(), TextSpan::new(12, 1));
}

#[test]
fn test_for_loop_parts() {
    let source = "for (let i = 0; i < n; i++) { sum += i; }";
    let values = values_at(source, source.rfind('}').unwrap());

    assert_eq!(
        summarize(&values),
        vec![lookup("i"), expr("i < n"), lookup("i"), lookup("sum")]
    );
}

#[test]
fn test_for_of_binding_and_iterable() {
    let source = "for (const item of items) { use(item); }";
    let values = values_at(source, source.find("use").unwrap());

    assert_eq!(summarize(&values), vec![lookup("item"), expr("items")]);
}

#[test]
fn test_while_condition_and_body() {
    let source = "while (n > 0) { n--; }";
    let values = values_at(source, source.rfind('}').unwrap());

    assert_eq!(summarize(&values), vec![expr("n > 0"), lookup("n")]);
}

#[test]
fn test_do_condition_after_cursor_is_reported() {
    let source = "let n = 3; do { n--; } while (n > 0);";
    let values = values_at(source, source.find("} while").unwrap());

    assert_eq!(
        summarize(&values),
        vec![lookup("n"), expr("n > 0"), lookup("n")]
    );
}

#[test]
fn test_while_condition_at_cursor() {
    let source = "while (i < n) { i++; }";
    let values = values_at(source, source.find("i <").unwrap());

    assert_eq!(summarize(&values), vec![expr("i < n")]);
}

#[test]
fn test_switch_reports_every_case_label() {
    let source = "switch (k) { case 1: a = 1; break; case 2: b = 2; }";
    let values = values_at(source, source.find("break").unwrap());

    // Case labels are reported past the cursor; statements are not.
    assert_eq!(
        summarize(&values),
        vec![expr("k"), expr("1"), lookup("a"), expr("2")]
    );
}

#[test]
fn test_catch_variable() {
    let source = "try { risky(); } catch (err) { log(err); }";
    let values = values_at(source, source.find("log").unwrap());

    assert_eq!(summarize(&values), vec![lookup("err")]);
}

// =============================================================================
// Assignments
// =============================================================================

#[test]
fn test_member_assignment_targets() {
    let source = "obj.count += 1; arr[i]++; done();";
    let values = values_at(source, source.find("done").unwrap());

    assert_eq!(summarize(&values), vec![expr("obj.count"), expr("arr[i]")]);
    assert_eq!(values[0].span(), TextSpan::new(0, 9));
}

#[test]
fn test_non_assignment_unary_is_walked() {
    let source = "let t = 1; !(u = t); stop();";
    let values = values_at(source, source.find("stop").unwrap());

    assert_eq!(summarize(&values), vec![lookup("t"), lookup("u")]);
}

// =============================================================================
// Scope bounds
// =============================================================================

#[test]
fn test_scope_chain_is_bounded() {
    let source = "function a() { function b() { function c() { x; } } }";
    let position = source.find("x;").unwrap() as u32;
    let (parser, root) = parse(source);
    let arena = parser.get_arena();
    let provider = InlineValuesProvider::new(arena, root);

    let token = arena.find_token_at_position(root, position).unwrap();
    let scopes = provider.find_scopes(&token);
    assert_eq!(scopes.len(), 4);
    let strong = scopes
        .iter()
        .filter(|&&idx| arena.get(idx).unwrap().kind != syntax_kind_ext::BLOCK)
        .count();
    assert_eq!(strong, 2);

    let values = provider.provide_inline_values(position, TextSpan::everything());
    assert_eq!(summarize(&values), vec![lookup("b"), lookup("c")]);
}

#[test]
fn test_wider_limits_reach_outer_function() {
    let source = "function a() { function b() { function c() { x; } } }";
    let position = source.find("x;").unwrap() as u32;
    let (parser, root) = parse(source);
    let provider = InlineValuesProvider::new(parser.get_arena(), root).with_limits(ScopeLimits {
        max_strong_scopes: 10,
        max_scopes: 10,
    });

    let values = provider.provide_inline_values(position, TextSpan::everything());
    assert_eq!(
        summarize(&values),
        vec![lookup("a"), lookup("b"), lookup("c")]
    );
}

#[test]
fn test_default_limits() {
    let limits = ScopeLimits::default();
    assert_eq!(limits.max_strong_scopes, 2);
    assert_eq!(limits.max_scopes, 4);
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_visible_span_filters_statements() {
    let source = "let a = 1;\nlet b = 2;\nlet c = 3;\nfoo();";
    let position = source.find("foo").unwrap() as u32;
    let values = values_in(source, position, TextSpan::new(11, 9));

    assert_eq!(summarize(&values), vec![lookup("b")]);
}

#[test]
fn test_visible_span_is_checked_on_visited_nodes() {
    // Only `k` is visible. The assignment and the property are visited
    // because they touch it, so their target and initializer are reported.
    let source = "o = { k: a + b };\nend;";
    let position = source.find("end").unwrap() as u32;
    let values = values_in(source, position, TextSpan::new(6, 1));

    assert_eq!(summarize(&values), vec![lookup("o"), expr("a + b")]);
    assert_eq!(values[1].span(), TextSpan::new(9, 5));
}

#[test]
fn test_values_end_before_cursor() {
    let source = "let p = 1;\nlet q = p * 2;\nlet r = q;\nfunction f(s) { return s + r; }";
    let position = source.find("let r").unwrap();
    let (parser, root) = parse(source);
    let arena = parser.get_arena();
    let token = arena.find_token_at_position(root, position as u32).unwrap();

    let values = values_at(source, position);
    assert_eq!(summarize(&values), vec![lookup("p"), lookup("q")]);
    for value in &values {
        assert!(value.span().end() <= token.pos, "{value:?} ends after the cursor");
    }
}

#[test]
fn test_type_annotations_are_ignored() {
    let source = "let v: Map<K, V> = make(); type T = typeof v; check();";
    let values = values_at(source, source.find("check").unwrap());

    assert_eq!(summarize(&values), vec![lookup("v")]);
}

#[test]
fn test_empty_source() {
    assert!(values_at("", 0).is_empty());
}

// =============================================================================
// Malformed and deep trees
// =============================================================================

#[test]
fn test_missing_names_do_not_stop_traversal() {
    let source = "let = 1; function (q) {} class {} x = 2; y;";
    let values = values_at(source, source.find("y;").unwrap());

    assert_eq!(summarize(&values), vec![lookup("let"), lookup("x")]);
    assert!(values.iter().all(|value| !value.text().is_empty()));
}

#[test]
fn test_nameless_declarations_in_function_scope() {
    let source = "function f(p) { class {} let r = p; stop(); }";
    let values = values_at(source, source.find("stop").unwrap());

    assert_eq!(
        summarize(&values),
        vec![lookup("f"), lookup("p"), lookup("r")]
    );
}

/// Run on a large stack so that debug builds of the parser have room.
fn on_large_stack<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(32 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}

#[test]
fn test_long_binary_chain_is_walked_partially() {
    let values = on_large_stack(|| {
        let terms = vec!["a"; 50_000];
        let source = format!("let x = {};\nx;", terms.join(" + "));
        let position = source.rfind('x').unwrap();
        summarize(&values_at(&source, position))
            .into_iter()
            .map(|(is_lookup, text)| (is_lookup, text.to_string()))
            .collect::<Vec<_>>()
    });

    assert_eq!(values, vec![(true, "x".to_string())]);
}

#[test]
fn test_truncated_expressions_are_not_reported() {
    let values = on_large_stack(|| {
        let terms = vec!["a"; 3_000];
        let source = format!("o = {{ k: {} }};\nend;", terms.join(" + "));
        let position = source.find("end").unwrap();
        values_at(&source, position)
    });

    assert_eq!(summarize(&values), vec![lookup("o")]);
}

#[test]
fn test_short_property_initializer_next_to_long_one() {
    let values = on_large_stack(|| {
        let terms = vec!["a"; 3_000];
        let source = format!("o = {{ k: {}, j: b + 1 }};\nend;", terms.join(" + "));
        let position = source.find("end").unwrap();
        values_at(&source, position)
    });

    assert_eq!(summarize(&values), vec![lookup("o"), expr("b + 1")]);
}

#[test]
fn test_queries_are_idempotent() {
    let source = "for (let i = 0; i < n; i++) { sum += i; }";
    let position = source.rfind('}').unwrap() as u32;
    let (parser, root) = parse(source);
    let provider = InlineValuesProvider::new(parser.get_arena(), root);

    let first = provider.provide_inline_values(position, TextSpan::everything());
    let second = provider.provide_inline_values(position, TextSpan::everything());
    assert_eq!(first, second);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_serialized_shape() {
    let lookup = InlineValue::variable_lookup(TextSpan::new(4, 1), "x");
    assert_eq!(
        serde_json::to_string(&lookup).unwrap(),
        r#"{"type":"VariableLookup","span":{"start":4,"length":1},"variableName":"x"}"#
    );

    let expression = InlineValue::evaluatable_expression(TextSpan::new(0, 5), "a + b");
    let json = serde_json::to_value(&expression).unwrap();
    assert_eq!(json["type"], "EvaluatableExpression");
    assert_eq!(json["expression"], "a + b");

    let back: InlineValue = serde_json::from_value(json).unwrap();
    assert_eq!(back, expression);
}
