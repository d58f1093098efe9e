//! tsv-server: inline values over the tsserver protocol.
//!
//! ```bash
//! printf '%s\n' \
//!   '{"seq":1,"type":"request","command":"open","arguments":{"file":"a.ts","fileContent":"let x = 1;\nx;"}}' \
//!   '{"seq":2,"type":"request","command":"typescript/extra/provideInlineValues","arguments":{"file":"a.ts","line":2,"offset":1}}' \
//!   | tsv-server --protocol legacy
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::BufReader;

use tsv_cli::args::ServerArgs;
use tsv_cli::{Server, tracing_config};

fn main() -> Result<()> {
    // stderr only; stdout carries the protocol
    tracing_config::init_tracing();

    let args = ServerArgs::parse();
    let mut server = Server::new(args.limits.scope_limits());
    tracing::info!(protocol = ?args.protocol, "tsv-server ready");

    let mut stdin = BufReader::new(std::io::stdin().lock());
    let mut stdout = std::io::stdout().lock();
    server
        .run(args.protocol, &mut stdin, &mut stdout)
        .context("server loop failed")
}
