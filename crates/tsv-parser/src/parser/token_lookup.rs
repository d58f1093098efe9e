//! Token at a source position.
//!
//! The arena only holds tokens that became leaf nodes (identifiers,
//! literals, keywords). Punctuation between children is recovered by
//! re-scanning the gap the position falls into.

use super::base::NodeIndex;
use super::node::NodeArena;
use super::syntax_kind_ext::{self, is_token_kind};
use tsv_scanner::{ScannerState, SyntaxKind};

/// The token covering a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAtPosition {
    /// Token kind (`SyntaxKind` as u16).
    pub kind: u16,
    /// Full start, leading trivia included.
    pub pos: u32,
    pub end: u32,
    /// The leaf node, or NONE when the token was re-scanned from a gap.
    pub node: NodeIndex,
    /// Innermost node containing the token.
    pub parent: NodeIndex,
}

impl TokenAtPosition {
    /// Node to start an upward walk from.
    pub fn containing_node(&self) -> NodeIndex {
        if self.node.is_some() {
            self.node
        } else {
            self.parent
        }
    }
}

impl NodeArena {
    /// Find the token whose `[pos, end)` range contains `position`.
    ///
    /// Positions past the end of the text resolve to the end-of-file token.
    pub fn find_token_at_position(&self, root: NodeIndex, position: u32) -> Option<TokenAtPosition> {
        let text = self.source_text()?;
        let position = position.min(text.len() as u32);
        let mut current = root;
        self.get(current)?;

        'descend: loop {
            let mut gap_start = self.get(current)?.pos;
            for child in self.get_children(current) {
                let Some(node) = self.get(child) else {
                    continue;
                };
                if node.pos > position {
                    break;
                }
                let contains = position < node.end
                    || (position == node.end && node.kind == SyntaxKind::EndOfFileToken as u16);
                if contains && node.pos <= position {
                    if is_token_kind(node.kind) {
                        return Some(TokenAtPosition {
                            kind: node.kind,
                            pos: node.pos,
                            end: node.end,
                            node: child,
                            parent: current,
                        });
                    }
                    current = child;
                    continue 'descend;
                }
                if node.end <= position {
                    gap_start = gap_start.max(node.end);
                }
            }
            return Some(self.scan_gap(text, current, gap_start, position));
        }
    }

    fn scan_gap(&self, text: &str, parent: NodeIndex, gap_start: u32, position: u32) -> TokenAtPosition {
        let mut scanner = ScannerState::from_arc(text.into());
        scanner.set_text_pos(gap_start as usize);
        let in_binary = self
            .get(parent)
            .is_some_and(|node| node.kind == syntax_kind_ext::BINARY_EXPRESSION);
        loop {
            let mut kind = scanner.scan();
            if kind == SyntaxKind::GreaterThanToken && in_binary {
                kind = scanner.re_scan_greater_token();
            }
            let end = scanner.get_token_end() as u32;
            if position < end || kind == SyntaxKind::EndOfFileToken {
                return TokenAtPosition {
                    kind: kind as u16,
                    pos: scanner.get_token_full_start() as u32,
                    end,
                    node: NodeIndex::NONE,
                    parent,
                };
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/token_lookup_tests.rs"]
mod tests;
