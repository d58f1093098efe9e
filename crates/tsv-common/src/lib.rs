//! Common types and utilities for the tsv crates.
//!
//! This crate provides foundational types used across all tsv crates:
//! - Text spans over source text (`TextSpan`)
//! - Position/LineMap types for line/column source locations
//! - Traversal and parser limits
//! - Parser diagnostic codes and messages

// TextSpan - (start, length) ranges over source text
pub mod span;
pub use span::TextSpan;

// Centralized limits and thresholds
pub mod limits;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostic codes and messages
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage};
