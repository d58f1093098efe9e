use super::*;

fn lookup(start: u32, length: u32, name: &str) -> WireInlineValue {
    WireInlineValue::VariableLookup {
        start,
        length,
        variable_name: name.to_string(),
    }
}

#[test]
fn test_line_offset_is_one_based() {
    let document = Document::new("a.ts", "let a = 1;\nlet b = 2;".to_string());
    assert_eq!(document.byte_offset(Location::LineOffset { line: 1, offset: 1 }), 0);
    assert_eq!(document.byte_offset(Location::LineOffset { line: 2, offset: 5 }), 15);
    // Past the last line clamps to the end of the text
    assert_eq!(document.byte_offset(Location::LineOffset { line: 9, offset: 1 }), 21);
}

#[test]
fn test_utf16_offsets_on_the_wire() {
    let source = "let s = \"\u{1F600}\"; let t = s;\nt;";
    let document = Document::new("a.ts", source.to_string());

    // The emoji is 4 bytes but 2 UTF-16 units
    assert_eq!(document.byte_offset(Location::Position(18)), 20);
    assert_eq!(document.byte_span(9, 2), TextSpan::new(9, 4));
    assert_eq!(document.utf16_span(TextSpan::new(20, 1)), (18, 1));

    let values = document.wire_inline_values(
        Location::LineOffset { line: 2, offset: 1 },
        None,
        ScopeLimits::default(),
    );
    assert_eq!(values, vec![lookup(4, 1, "s"), lookup(18, 1, "t")]);
}

#[test]
fn test_visible_range_is_utf16() {
    let source = "let a = 1;\nlet b = 2;\nlet c = 3;\nfoo();";
    let document = Document::new("a.ts", source.to_string());
    let position = source.find("foo").unwrap() as u32;

    let values =
        document.wire_inline_values(Location::Position(position), Some((11, 9)), ScopeLimits::default());
    assert_eq!(values, vec![lookup(15, 1, "b")]);
}

#[test]
fn test_splice_reparses() {
    let mut document = Document::new("a.ts", "const x = 1;".to_string());
    document.splice(
        Location::LineOffset { line: 1, offset: 7 },
        Location::LineOffset { line: 1, offset: 8 },
        "renamed",
    );
    assert_eq!(document.text(), "const renamed = 1;");

    document.splice(
        Location::LineOffset { line: 1, offset: 19 },
        Location::LineOffset { line: 1, offset: 19 },
        "\nrenamed;",
    );
    let values = document.wire_inline_values(
        Location::LineOffset { line: 2, offset: 1 },
        None,
        ScopeLimits::default(),
    );
    assert_eq!(values, vec![lookup(6, 7, "renamed")]);
}

#[test]
fn test_replace_keeps_file_name() {
    let mut document = Document::new("/src/a.ts", "let a = 1;".to_string());
    document.replace("let b = 2;".to_string());
    assert_eq!(document.file_name(), "/src/a.ts");
    assert_eq!(document.text(), "let b = 2;");
}

#[test]
fn test_wire_shape() {
    let value = WireInlineValue::EvaluatableExpression {
        start: 4,
        length: 5,
        expression: "x > 0".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        serde_json::json!({"type": "EvaluatableExpression", "start": 4, "length": 5, "expression": "x > 0"})
    );
    assert_eq!(
        serde_json::to_value(lookup(0, 1, "y")).unwrap(),
        serde_json::json!({"type": "VariableLookup", "start": 0, "length": 1, "variableName": "y"})
    );
}
