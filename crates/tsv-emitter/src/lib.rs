//! Printer that turns parsed TypeScript nodes back into source text.
//!
//! The inline values provider uses it to spell evaluatable expressions:
//! - `Printer` - walks a `NodeArena` subtree and writes canonical TypeScript
//! - `PrinterOptions` - comment and trailing semicolon handling
//! - `SourceWriter` - single-line output buffer (line breaks become spaces)

pub mod emitter;
pub mod source_writer;

pub use emitter::{Printer, PrinterOptions, print_node};
pub use source_writer::SourceWriter;
