use super::*;
use serde_json::json;
use std::io::Cursor;

const SOURCE: &str = "function f(a) { let b = a + 1; return b; }";

fn make_request(command: &str, arguments: serde_json::Value) -> TsServerRequest {
    TsServerRequest {
        seq: 1,
        msg_type: "request".to_string(),
        command: command.to_string(),
        arguments,
    }
}

fn open_server() -> Server {
    let mut server = Server::default();
    let resp = server.handle_request(&make_request(
        "open",
        json!({"file": "/test.ts", "fileContent": SOURCE}),
    ));
    assert!(resp.success);
    server
}

fn expected_body() -> serde_json::Value {
    json!([
        {"type": "VariableLookup", "start": 9, "length": 1, "variableName": "f"},
        {"type": "VariableLookup", "start": 11, "length": 1, "variableName": "a"},
        {"type": "VariableLookup", "start": 20, "length": 1, "variableName": "b"},
    ])
}

fn frame(message: &str) -> String {
    format!("Content-Length: {}\r\n\r\n{}", message.len(), message)
}

fn read_frames(output: Vec<u8>) -> Vec<serde_json::Value> {
    let mut reader = Cursor::new(output);
    let mut frames = Vec::new();
    while let Some(message) = read_content_length_message(&mut reader).unwrap() {
        frames.push(serde_json::from_str(&message).unwrap());
    }
    frames
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn test_provide_inline_values_by_line_offset() {
    let mut server = open_server();
    let position = SOURCE.find("return").unwrap() as u64;
    let resp = server.handle_request(&make_request(
        PROVIDE_INLINE_VALUES,
        json!({"file": "/test.ts", "line": 1, "offset": position + 1, "start": 0, "length": SOURCE.len()}),
    ));
    assert!(resp.success);
    assert_eq!(resp.command, PROVIDE_INLINE_VALUES);
    assert_eq!(resp.body, Some(expected_body()));
}

#[test]
fn test_provide_inline_values_by_position() {
    let mut server = open_server();
    let position = SOURCE.find("return").unwrap();
    let resp = server.handle_request(&make_request(
        PROVIDE_INLINE_VALUES,
        json!({"file": "/test.ts", "position": position}),
    ));
    assert_eq!(resp.body, Some(expected_body()));
}

#[test]
fn test_unknown_file_is_an_empty_success() {
    let mut server = Server::default();
    let resp = server.handle_request(&make_request(
        PROVIDE_INLINE_VALUES,
        json!({"file": "/missing.ts", "line": 1, "offset": 1}),
    ));
    assert!(resp.success);
    assert_eq!(resp.body, Some(json!([])));
}

#[test]
fn test_missing_location_is_an_error() {
    let mut server = open_server();
    let resp = server.handle_request(&make_request(
        PROVIDE_INLINE_VALUES,
        json!({"file": "/test.ts", "line": 1}),
    ));
    assert!(!resp.success);
    assert!(resp.message.unwrap().contains("position"));
}

#[test]
fn test_unrecognized_command() {
    let mut server = Server::default();
    let resp = server.handle_request(&make_request("quickinfo", json!({})));
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Unrecognized command: quickinfo"));
}

#[test]
fn test_change_replaces_content() {
    let mut server = open_server();
    let resp = server.handle_request(&make_request(
        "change",
        json!({"file": "/test.ts", "fileContent": "let z = 1;\nz;"}),
    ));
    assert!(resp.success);
    assert_eq!(server.document("/test.ts").unwrap().text(), "let z = 1;\nz;");
}

#[test]
fn test_change_splices_insert_string() {
    let mut server = Server::default();
    server.handle_request(&make_request(
        "open",
        json!({"file": "/test.ts", "fileContent": "const x = 1;"}),
    ));
    let resp = server.handle_request(&make_request(
        "change",
        json!({
            "file": "/test.ts",
            "line": 1, "offset": 11,
            "endLine": 1, "endOffset": 12,
            "insertString": "2"
        }),
    ));
    assert!(resp.success);
    assert_eq!(server.document("/test.ts").unwrap().text(), "const x = 2;");
}

#[test]
fn test_close_forgets_the_file() {
    let mut server = open_server();
    server.handle_request(&make_request("close", json!({"file": "/test.ts"})));
    assert!(server.document("/test.ts").is_none());
}

#[test]
fn test_response_seq_increments() {
    let mut server = Server::default();
    let first = server.handle_request(&make_request("exit", json!({})));
    let second = server.handle_request(&make_request("exit", json!({})));
    assert_eq!(first.seq + 1, second.seq);
    assert_eq!(first.request_seq, 1);
}

// =============================================================================
// Framing
// =============================================================================

#[test]
fn test_tsserver_protocol_round_trip() {
    let open = json!({"seq": 1, "type": "request", "command": "open",
        "arguments": {"file": "/test.ts", "fileContent": SOURCE}});
    let query = json!({"seq": 2, "type": "request", "command": PROVIDE_INLINE_VALUES,
        "arguments": {"file": "/test.ts", "position": SOURCE.find("return").unwrap()}});
    let exit = json!({"seq": 3, "type": "request", "command": "exit"});
    let ignored = json!({"seq": 4, "type": "request", "command": "open"});
    let input: String = [open, query, exit, ignored]
        .iter()
        .map(|message| frame(&message.to_string()))
        .collect();

    let mut output = Vec::new();
    Server::default()
        .run(Protocol::Tsserver, &mut Cursor::new(input), &mut output)
        .unwrap();

    let frames = read_frames(output);
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[1]["request_seq"], 2);
    assert_eq!(frames[1]["body"], expected_body());
    assert_eq!(frames[2]["command"], "exit");
}

#[test]
fn test_legacy_protocol_is_line_delimited() {
    let input = format!(
        "{}\n\n{}\n",
        json!({"seq": 1, "command": "open", "arguments": {"file": "/a.ts", "fileContent": "let q = 1;\nq;"}}),
        json!({"seq": 2, "command": PROVIDE_INLINE_VALUES, "arguments": {"file": "/a.ts", "line": 2, "offset": 1}}),
    );
    let mut output = Vec::new();
    Server::default()
        .run(Protocol::Legacy, &mut Cursor::new(input), &mut output)
        .unwrap();

    let lines: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1]["body"],
        json!([{"type": "VariableLookup", "start": 4, "length": 1, "variableName": "q"}])
    );
}

#[test]
fn test_invalid_json_gets_an_error_response() {
    let mut output = Vec::new();
    Server::default()
        .run(Protocol::Tsserver, &mut Cursor::new(frame("{not json")), &mut output)
        .unwrap();

    let frames = read_frames(output);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0]["success"], false);
    assert_eq!(frames[0]["command"], "unknown");
}

#[test]
fn test_bare_json_line_is_accepted() {
    let mut reader = Cursor::new("\r\n{\"seq\":1}\n");
    assert_eq!(
        read_content_length_message(&mut reader).unwrap().as_deref(),
        Some("{\"seq\":1}")
    );
    assert_eq!(read_content_length_message(&mut reader).unwrap(), None);
}

#[test]
fn test_bad_content_length_is_an_error() {
    let mut reader = Cursor::new("Content-Length: abc\r\n\r\n{}");
    assert!(read_content_length_message(&mut reader).is_err());
}
