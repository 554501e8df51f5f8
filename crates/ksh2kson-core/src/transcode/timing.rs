//! Tempo/time-signature timeline and the display-tempo override decision.

use crate::chart::{TempoChange, TimeSignatureChange, Timeline};
use crate::config::timing::{RESOLUTION, TEMPO_RANGE_MARKER, TEMPO_TRUNCATE_SCALE};
use crate::error::{Error, Result};
use crate::kson::{BeatInfo, ByPulse, TimeSig};

pub struct TimingModel<'a> {
    timeline: &'a Timeline,
}

impl<'a> TimingModel<'a> {
    pub fn new(timeline: &'a Timeline) -> Self {
        Self { timeline }
    }

    /// Tempo in effect at pulse 0.
    pub fn initial_tempo(&self) -> Result<f64> {
        self.timeline
            .tempo_changes
            .first()
            .filter(|c| c.y == 0)
            .map(|c| c.bpm)
            .ok_or_else(|| Error::missing_field("t"))
    }

    pub fn tempo_changes(&self) -> &'a [TempoChange] {
        &self.timeline.tempo_changes
    }

    pub fn time_signatures(&self) -> &'a [TimeSignatureChange] {
        &self.timeline.time_signatures
    }

    /// Output `beat` section. A timeline without time signatures is 4/4.
    pub fn beat_info(&self) -> BeatInfo {
        let bpm = self
            .tempo_changes()
            .iter()
            .map(|c| ByPulse::new(c.y, c.bpm))
            .collect();

        let mut time_sig: Vec<_> = self
            .time_signatures()
            .iter()
            .map(|c| {
                ByPulse::new(
                    c.y,
                    TimeSig {
                        n: c.numerator,
                        d: c.denominator,
                    },
                )
            })
            .collect();
        if time_sig.is_empty() {
            time_sig.push(ByPulse::new(0, TimeSig { n: 4, d: 4 }));
        }

        BeatInfo {
            bpm,
            time_sig,
            resolution: RESOLUTION,
        }
    }
}

/// Tempo scaled by 1000 and truncated toward zero.
pub fn truncate_tempo(bpm: f64) -> i64 {
    (bpm * TEMPO_TRUNCATE_SCALE) as i64
}

/// Decide whether the header tempo text must be kept as a display override.
///
/// Returns the header text verbatim when it is a range (`120-180`) or when its
/// truncated value differs from the computed tempo at pulse 0.
pub fn display_tempo_override(header: &str, initial_tempo: f64) -> Result<Option<String>> {
    if header.contains(TEMPO_RANGE_MARKER) {
        return Ok(Some(header.to_string()));
    }

    let declared: f64 = header
        .trim()
        .parse()
        .map_err(|_| Error::malformed_number("t", header))?;

    if truncate_tempo(declared) != truncate_tempo(initial_tempo) {
        Ok(Some(header.to_string()))
    } else {
        Ok(None)
    }
}
