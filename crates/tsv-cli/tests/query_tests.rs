use super::*;
use clap::Parser;
use std::path::Path;
use tempfile::TempDir;

fn write_source(dir: &Path, content: &str) -> String {
    let path = dir.join("main.ts");
    std::fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn test_text_output_is_line_column() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_source(temp_dir.path(), "let n = 3;\nwhile (n > 0) {\n  n--;\n}\n");
    let args = CliArgs::try_parse_from(["tsv", &file, "--line", "4", "--offset", "1"]).unwrap();

    assert_eq!(
        run(&args).unwrap(),
        "1:5\tlookup\tn\n2:8\texpr\tn > 0\n3:3\tlookup\tn\n"
    );
}

#[test]
fn test_json_output_is_the_response_body() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_source(temp_dir.path(), "if (x > 0) { y = x; }");
    let args =
        CliArgs::try_parse_from(["tsv", &file, "--position", "19", "--format", "json"]).unwrap();

    let output: serde_json::Value = serde_json::from_str(&run(&args).unwrap()).unwrap();
    assert_eq!(
        output,
        serde_json::json!([
            {"type": "EvaluatableExpression", "start": 4, "length": 5, "expression": "x > 0"},
            {"type": "VariableLookup", "start": 13, "length": 1, "variableName": "y"},
        ])
    );
}

#[test]
fn test_missing_file_reports_the_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.ts").display().to_string();
    let args = CliArgs::try_parse_from(["tsv", &missing, "--position", "0"]).unwrap();

    let err = run(&args).unwrap_err();
    assert!(format!("{err:#}").contains("nope.ts"));
}
