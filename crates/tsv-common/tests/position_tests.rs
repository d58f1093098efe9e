use super::*;

#[test]
fn test_line_map_simple() {
    let source = "let x = 1;\nlet y = 2;\n";
    let map = LineMap::build(source);
    assert_eq!(map.line_count(), 3);
    assert_eq!(map.line_start(1), Some(11));

    assert_eq!(map.offset_to_position(0, source), Position::new(0, 0));
    assert_eq!(map.offset_to_position(15, source), Position::new(1, 4));
}

#[test]
fn test_line_map_crlf() {
    let source = "a\r\nb\rc";
    let map = LineMap::build(source);
    assert_eq!(map.line_count(), 3);
    assert_eq!(map.line_start(1), Some(3));
    assert_eq!(map.line_start(2), Some(5));
}

#[test]
fn test_position_to_offset_round_trip() {
    let source = "function f() {\n  return 1;\n}";
    let map = LineMap::build(source);
    let offset = source.find("return").unwrap() as u32;
    let pos = map.offset_to_position(offset, source);
    assert_eq!(pos, Position::new(1, 2));
    assert_eq!(map.position_to_offset(pos, source), Some(offset));
}

#[test]
fn test_position_to_offset_clamps_to_line_end() {
    let source = "ab\ncd";
    let map = LineMap::build(source);
    assert_eq!(map.position_to_offset(Position::new(0, 99), source), Some(2));
    assert_eq!(map.position_to_offset(Position::new(5, 0), source), None);
}

#[test]
fn test_position_counts_utf16_units() {
    // The emoji takes two UTF-16 units and four bytes.
    let source = "let s = \"😀\"; x";
    let map = LineMap::build(source);
    let x_byte = source.find('x').unwrap() as u32;
    let pos = map.offset_to_position(x_byte, source);
    assert_eq!(pos, Position::new(0, 14));
    assert_eq!(map.position_to_offset(pos, source), Some(x_byte));
}

#[test]
fn test_utf16_byte_conversions() {
    let source = "é = 😀 + 1";
    // "é" is 2 bytes / 1 unit, the emoji is 4 bytes / 2 units.
    let plus_byte = source.find('+').unwrap() as u32;
    let plus_utf16 = byte_to_utf16_offset(source, plus_byte);
    assert_eq!(plus_utf16, 7);
    assert_eq!(utf16_to_byte_offset(source, plus_utf16), plus_byte);
}

#[test]
fn test_utf16_conversion_ascii_fast_path_clamps() {
    let source = "abc";
    assert_eq!(utf16_to_byte_offset(source, 2), 2);
    assert_eq!(utf16_to_byte_offset(source, 50), 3);
    assert_eq!(byte_to_utf16_offset(source, 50), 3);
}
