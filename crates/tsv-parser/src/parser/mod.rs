//! Parser: thin node arena plus a recursive-descent `ParserState`.

pub mod base;
pub mod node;
mod node_access;
mod node_arena;
pub mod node_flags;
pub mod state;
mod state_class_members;
mod state_expressions;
mod state_statements;
mod state_types;
pub mod syntax_kind_ext;
mod token_lookup;

pub use base::{NodeIndex, NodeList};
pub use node::*;
pub use state::{ParseDiagnostic, ParserState};
pub use token_lookup::TokenAtPosition;
