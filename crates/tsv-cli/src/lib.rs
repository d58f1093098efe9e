//! Server and command-line front ends for debugger inline values.
//!
//! - `server` - tsserver-compatible request loop (`tsv-server`)
//! - `query` - one-shot file query (`tsv`)
//! - `document` - parsed files and UTF-16 / line-offset translation

pub mod args;
pub mod document;
pub mod query;
pub mod server;
pub mod tracing_config;

pub use document::{Document, Location, WireInlineValue};
pub use server::{Protocol, Server};
