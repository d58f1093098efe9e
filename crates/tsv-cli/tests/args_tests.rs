use clap::Parser;

use super::*;

#[test]
fn parses_line_and_offset() {
    let args = CliArgs::try_parse_from(["tsv", "a.ts", "--line", "3", "--offset", "5"])
        .expect("line/offset should parse");

    assert_eq!(args.file, PathBuf::from("a.ts"));
    assert_eq!(args.line, Some(3));
    assert_eq!(args.offset, Some(5));
    assert_eq!(args.position, None);
    assert_eq!(args.format, OutputFormat::Text);
}

#[test]
fn parses_position_span_and_format() {
    let args = CliArgs::try_parse_from([
        "tsv",
        "a.ts",
        "--position",
        "42",
        "--start",
        "10",
        "--length",
        "20",
        "--format",
        "JSON",
    ])
    .expect("position args should parse");

    assert_eq!(args.position, Some(42));
    assert_eq!(args.start.zip(args.length), Some((10, 20)));
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn requires_a_location() {
    assert!(CliArgs::try_parse_from(["tsv", "a.ts"]).is_err());
    assert!(CliArgs::try_parse_from(["tsv", "a.ts", "--line", "1"]).is_err());
    assert!(
        CliArgs::try_parse_from(["tsv", "a.ts", "--line", "1", "--offset", "1", "--position", "0"])
            .is_err()
    );
}

#[test]
fn span_needs_both_ends() {
    assert!(CliArgs::try_parse_from(["tsv", "a.ts", "--position", "0", "--start", "1"]).is_err());
}

#[test]
fn limits_default_to_library_bounds() {
    let args = CliArgs::try_parse_from(["tsv", "a.ts", "--position", "0", "--maxScopes", "8"])
        .expect("limits should parse");
    let limits = args.limits.scope_limits();
    assert_eq!(limits.max_scopes, 8);
    assert_eq!(limits.max_strong_scopes, 2);
}

#[test]
fn server_protocol_flag() {
    let args = ServerArgs::try_parse_from(["tsv-server"]).expect("defaults should parse");
    assert_eq!(args.protocol, Protocol::Tsserver);

    let args = ServerArgs::try_parse_from(["tsv-server", "--protocol", "legacy"])
        .expect("legacy should parse");
    assert_eq!(args.protocol, Protocol::Legacy);
}
