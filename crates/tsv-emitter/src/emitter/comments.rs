// Comment scanning for the printer's optional comment output.

use memchr::{memchr2, memmem};

/// A comment range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentRange {
    pub pos: u32,
    pub end: u32,
    pub kind: CommentKind,
    pub has_trailing_newline: bool,
}

/// Kind of comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    SingleLine, // // comment
    MultiLine,  // /* comment */
}

fn is_whitespace_single_line(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | 0x0B | 0x0C)
}

/// End of the line starting the search at `from`, or the text length.
fn line_end(bytes: &[u8], from: usize) -> usize {
    memchr2(b'\n', b'\r', &bytes[from..]).map_or(bytes.len(), |i| from + i)
}

/// Leading comments from `pos` up to the next token.
///
/// Comments on preceding lines are included; a shebang at offset zero is
/// skipped. Non-ASCII whitespace ends the scan like any other token.
pub fn get_leading_comment_ranges(text: &str, pos: usize) -> Vec<CommentRange> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut comments: Vec<CommentRange> = Vec::new();
    let mut i = pos.min(len);

    if i == 0 && bytes.starts_with(b"#!") {
        i = line_end(bytes, 0);
    }

    while i < len {
        let byte = bytes[i];
        if is_whitespace_single_line(byte) {
            i += 1;
            continue;
        }
        if byte == b'\n' || byte == b'\r' {
            if let Some(last) = comments.last_mut()
                && last.end as usize <= i
            {
                last.has_trailing_newline = true;
            }
            i += 1;
            continue;
        }
        if byte != b'/' || i + 1 >= len {
            break;
        }
        let start = i;
        let kind = match bytes[i + 1] {
            b'/' => {
                i = line_end(bytes, i + 2);
                CommentKind::SingleLine
            }
            b'*' => {
                i = memmem::find(&bytes[i + 2..], b"*/").map_or(len, |end| i + 2 + end + 2);
                CommentKind::MultiLine
            }
            _ => break,
        };
        comments.push(CommentRange {
            pos: start as u32,
            end: i as u32,
            kind,
            has_trailing_newline: false,
        });
    }

    comments
}
