use anyhow::Result;
use clap::Parser;
use std::io::Write;

use tsv_cli::args::CliArgs;
use tsv_cli::{query, tracing_config};

fn main() -> Result<()> {
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let output = query::run(&args)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}
