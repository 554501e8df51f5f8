//! CLI argument parsing tests.

use std::path::PathBuf;

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "ksh2kson")]
struct Args {
    #[arg(value_name = "KSH_FILE")]
    inputs: Vec<PathBuf>,

    #[arg(long, env = "KSH2KSON_PRETTY")]
    pretty: bool,
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["ksh2kson"]).unwrap();
    assert!(args.inputs.is_empty());
    assert!(!args.pretty);
}

#[test]
fn test_parse_inputs_keep_order() {
    let args = Args::try_parse_from(["ksh2kson", "b.ksh", "a.ksh", "c.ksh"]).unwrap();
    assert_eq!(
        args.inputs,
        vec![
            PathBuf::from("b.ksh"),
            PathBuf::from("a.ksh"),
            PathBuf::from("c.ksh")
        ]
    );
}

#[test]
fn test_parse_pretty() {
    let args = Args::try_parse_from(["ksh2kson", "--pretty", "chart.ksh"]).unwrap();
    assert!(args.pretty);
    assert_eq!(args.inputs, vec![PathBuf::from("chart.ksh")]);
}

#[test]
fn test_unknown_flag_fails() {
    let result = Args::try_parse_from(["ksh2kson", "--minify", "chart.ksh"]);
    assert!(result.is_err());
}
