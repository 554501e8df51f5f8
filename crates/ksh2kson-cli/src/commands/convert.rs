//! Batch conversion of chart files to stdout.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use ksh2kson_core::{KsonDocument, transcode_file, write_document};
use owo_colors::OwoColorize;
use tracing::debug;

/// Outcome of one batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn exit_code(&self) -> ExitCode {
        if self.failed == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn convert_one(path: &Path) -> Result<KsonDocument> {
    transcode_file(path).with_context(|| format!("Failed to convert {}", path.display()))
}

/// Convert each input in order, writing one document per chart to `out`.
///
/// A failed chart is reported on stderr and skipped; later charts still run.
pub fn convert_all<P, W>(inputs: &[P], pretty: bool, out: &mut W) -> Result<BatchSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut summary = BatchSummary::default();

    for input in inputs {
        let path = input.as_ref();
        match convert_one(path) {
            Ok(document) => {
                write_document(&mut *out, &document, pretty)
                    .context("Failed to write output")?;
                debug!("Converted {}", path.display());
                summary.converted += 1;
            }
            Err(e) => {
                eprintln!("{} {:#}", "error:".red().bold(), e);
                summary.failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

pub fn run<P: AsRef<Path>>(inputs: &[P], pretty: bool) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = convert_all(inputs, pretty, &mut out)?;

    if summary.failed > 0 {
        eprintln!(
            "{} of {} charts failed",
            summary.failed,
            summary.converted + summary.failed
        );
    }
    Ok(summary.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CHART: &str = "title=Song\nartist=A\neffect=C\njacket=j.png\nillustrator=I\n\
        difficulty=light\nlevel=3\nt=120\nm=s.ogg\no=0\npo=0\nplength=0\n--\n\
        1000|00|--\n--\n";

    #[test]
    fn test_convert_all_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.ksh");
        let missing = dir.path().join("missing.ksh");
        fs::write(&good, CHART).unwrap();

        let mut out = Vec::new();
        let summary = convert_all(&[&missing, &good, &good], false, &mut out).unwrap();

        assert_eq!(summary, BatchSummary { converted: 2, failed: 1 });

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("{\"version\":\"0.1.0\""));
    }

    #[test]
    fn test_convert_all_empty() {
        let mut out = Vec::new();
        let inputs: [&Path; 0] = [];
        let summary = convert_all(&inputs, true, &mut out).unwrap();
        assert_eq!(summary, BatchSummary::default());
        assert!(out.is_empty());
    }
}
