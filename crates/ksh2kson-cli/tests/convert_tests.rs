//! Runs the built binary against charts on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const CHART: &str = "\
title=Song
artist=Artist
effect=Charter
jacket=jacket.png
illustrator=Painter
difficulty=infinite
level=18
t=200
m=song.ogg
o=0
po=0
plength=10000
--
1000|00|0-
0000|00|o-
--
";

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ksh2kson"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("KSH2KSON_PRETTY")
        .output()
        .unwrap()
}

#[test]
fn test_no_inputs_prints_usage() {
    let output = run(&[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_single_chart_writes_one_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.ksh");
    fs::write(&path, CHART).unwrap();

    let output = run(&[path.as_path()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let document: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(document["meta"]["difficulty"]["short_name"], "IN");
    assert_eq!(document["note"]["bt"][0][0]["y"], 0);
}

#[test]
fn test_failure_continues_and_sets_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.ksh");
    let bad = dir.path().join("bad.ksh");
    fs::write(&good, CHART).unwrap();
    fs::write(&bad, CHART.replace("level=18", "level=high")).unwrap();

    let output = run(&[bad.as_path(), good.as_path()]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("bad.ksh").count(), 1);
    assert!(stderr.contains("level"));
}
