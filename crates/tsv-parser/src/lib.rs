//! TypeScript parser and AST types for the tsv crates.
//!
//! - `parser::ParserState` - Recursive-descent parser producing a `NodeArena`
//! - `parser::NodeArena` - Thin 16-byte nodes with typed data pools
//! - `parser::syntax_kind_ext` - Composite node kinds above the token range

pub mod parser;

pub use parser::{
    NodeArena, NodeIndex, NodeList, ParseDiagnostic, ParserState, TokenAtPosition, node_flags,
    syntax_kind_ext,
};
