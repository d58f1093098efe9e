//! TypeScript scanner/tokenizer for the tsv crates.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine
//! - `char_codes` - Character classification utilities

pub mod char_codes;

mod syntax_kind;
pub use syntax_kind::{
    SyntaxKind, is_assignment_operator, is_keyword, is_reserved_word, text_to_keyword,
    token_to_text,
};

mod scanner_impl;
pub use scanner_impl::{ScannerDiagnostic, ScannerSnapshot, ScannerState, TokenFlags, skip_trivia};
