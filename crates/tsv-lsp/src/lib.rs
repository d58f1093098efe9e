//! Editor-facing queries over a parsed TypeScript file.
//!
//! This crate provides:
//! - Inline values: variables and already-evaluated expressions a paused
//!   debugger can render next to the code being viewed

pub mod inline_values;

pub use inline_values::{InlineValue, InlineValuesProvider, ScopeChain, ScopeLimits};
