//! CLI argument definitions for ksh2kson.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ksh2kson")]
#[command(about = "Convert KSH charts to KSON", version)]
pub struct Args {
    /// Chart files to convert, in order
    #[arg(value_name = "KSH_FILE")]
    pub inputs: Vec<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, env = "KSH2KSON_PRETTY")]
    pub pretty: bool,
}
