use super::*;

#[test]
fn line_breaks_collapse_to_one_space() {
    let mut writer = SourceWriter::new();
    writer.write("{");
    writer.write_line();
    writer.write_line();
    writer.write("a();");
    writer.write_line();
    writer.write("}");
    assert_eq!(writer.take_output(), "{ a(); }");
}

#[test]
fn line_break_at_start_writes_nothing() {
    let mut writer = SourceWriter::new();
    writer.write_line();
    assert!(writer.is_empty());
    writer.write("x");
    assert_eq!(writer.get_output(), "x");
}

#[test]
fn deferred_semicolon_is_kept_when_followed_by_text() {
    let mut writer = SourceWriter::new();
    writer.write("a()");
    writer.write_trailing_semicolon();
    writer.write_line();
    writer.write("b()");
    writer.write_trailing_semicolon();
    assert_eq!(writer.take_output(), "a(); b()");
}

#[test]
fn take_output_resets_the_writer() {
    let mut writer = SourceWriter::with_capacity(16);
    writer.write("x");
    writer.write_trailing_semicolon();
    assert_eq!(writer.take_output(), "x");
    assert!(writer.is_empty());
    writer.write("y");
    assert_eq!(writer.take_output(), "y");
}
