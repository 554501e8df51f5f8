//! KSH text reader.
//!
//! Turns a `.ksh` chart into a [`Chart`]. The header is a block of `key=value`
//! lines ending at the first `--`; the body is a sequence of measures, each
//! closed by a `--` line, holding note lines (`BBBB|FF|LL`) and option lines.

mod body;
mod lane_spin;

pub use body::{is_note_line, laser_char_value};
pub use lane_spin::parse_lane_spin;

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use encoding_rs::SHIFT_JIS;
use tracing::debug;

use crate::chart::Chart;
use crate::config::timing::{TEMPO_RANGE_MARKER, UNIT_MEASURE};
use crate::error::{Error, Result};

use body::BodyReader;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode file bytes: UTF-8 (with or without BOM), otherwise Shift_JIS.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return String::from_utf8_lossy(rest);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (decoded, _, had_errors) = SHIFT_JIS.decode(bytes);
            if had_errors {
                debug!("Shift_JIS decode replaced invalid sequences");
            }
            decoded
        }
    }
}

/// Read and parse a chart file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Chart> {
    let bytes = fs::read(path.as_ref())?;
    debug!("Read {} bytes from {:?}", bytes.len(), path.as_ref());
    parse(&decode_text(&bytes))
}

/// Parse `n/d`.
pub fn parse_time_signature(raw: &str) -> Result<(u32, u32)> {
    let malformed = || Error::malformed_number("beat", raw);
    let (n, d) = raw.trim().split_once('/').ok_or_else(malformed)?;
    let n: u32 = n.trim().parse().map_err(|_| malformed())?;
    let d: u32 = d.trim().parse().map_err(|_| malformed())?;
    if n == 0 || d == 0 || UNIT_MEASURE.checked_mul(n).is_none() {
        return Err(malformed());
    }
    Ok((n, d))
}

pub fn parse(text: &str) -> Result<Chart> {
    let mut chart = Chart::new();
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    for (_, line) in lines.by_ref() {
        let line = line.trim_start_matches('\u{feff}');
        if line.starts_with("--") {
            break;
        }
        if let Some((key, value)) = line.split_once('=') {
            chart.meta.insert(key.trim(), value);
        }
    }

    let (numerator, denominator) = match chart.meta.get("beat") {
        Some(raw) => parse_time_signature(raw)?,
        None => (4, 4),
    };
    chart.beat.set_time_signature(0, numerator, denominator);

    // A range (`120-180`) is display-only; the body must set the tempo.
    if let Some(raw) = chart.meta.get("t").filter(|t| !t.contains(TEMPO_RANGE_MARKER)) {
        let bpm = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::malformed_number("t", raw))?;
        chart.beat.set_tempo(0, bpm);
    }

    BodyReader::new(&mut chart, numerator, denominator).read(lines)?;

    debug!(
        "Parsed chart: {} header fields, {} notes",
        chart.meta.len(),
        chart.note_count()
    );

    Ok(chart)
}
