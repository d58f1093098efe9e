use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

use crate::server::Protocol;

/// CLI arguments for the `tsv` binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsv",
    version,
    about = "Print debugger inline values for a TypeScript file"
)]
pub struct CliArgs {
    /// Source file to inspect.
    pub file: PathBuf,

    /// 1-based line where execution is paused (tsserver convention).
    #[arg(long, requires = "offset", conflicts_with = "position")]
    pub line: Option<u32>,

    /// 1-based UTF-16 column on `--line`.
    #[arg(long, requires = "line")]
    pub offset: Option<u32>,

    /// 0-based UTF-16 offset where execution is paused.
    #[arg(long, required_unless_present = "line")]
    pub position: Option<u32>,

    /// Start of the visible range (UTF-16 offset). Defaults to the whole file.
    #[arg(long, requires = "length")]
    pub start: Option<u32>,

    /// Length of the visible range in UTF-16 code units.
    #[arg(long, requires = "start")]
    pub length: Option<u32>,

    #[command(flatten)]
    pub limits: LimitArgs,

    /// Output format.
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Bounds on the scope search, shared by both binaries.
#[derive(Args, Debug, Clone, Copy)]
pub struct LimitArgs {
    /// Maximum number of non-block scopes to climb through.
    #[arg(long = "maxStrongScopes", alias = "max-strong-scopes")]
    pub max_strong_scopes: Option<usize>,

    /// Maximum number of scopes to climb through.
    #[arg(long = "maxScopes", alias = "max-scopes")]
    pub max_scopes: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line: `line:column kind text`.
    Text,
    /// The tsserver response body.
    Json,
}

/// CLI arguments for the `tsv-server` binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsv-server",
    version,
    about = "tsserver-compatible inline values server"
)]
pub struct ServerArgs {
    /// Protocol mode: 'tsserver' (Content-Length framed, default) or 'legacy' (JSON per line).
    #[arg(long, value_enum, default_value = "tsserver")]
    pub protocol: Protocol,

    #[command(flatten)]
    pub limits: LimitArgs,
}

impl LimitArgs {
    pub fn scope_limits(&self) -> tsv_lsp::ScopeLimits {
        let defaults = tsv_lsp::ScopeLimits::default();
        tsv_lsp::ScopeLimits {
            max_strong_scopes: self.max_strong_scopes.unwrap_or(defaults.max_strong_scopes),
            max_scopes: self.max_scopes.unwrap_or(defaults.max_scopes),
        }
    }
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod tests;
