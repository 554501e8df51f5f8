mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // warn unless RUST_LOG is set; stdout is reserved for documents
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ksh2kson=warn,ksh2kson_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if args.inputs.is_empty() {
        eprintln!("{}", Args::command().render_usage());
        return Ok(ExitCode::SUCCESS);
    }

    commands::convert::run(&args.inputs, args.pretty)
}
