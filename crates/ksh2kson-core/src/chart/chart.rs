use crate::config::lanes::{BT_LANES, FX_LANES, LASER_LANES};

use super::{ChartMeta, LaserNote, Note, PositionalOptions, Pulse, TempoChange, TimeSignatureChange};

/// Tempo and time-signature changes, each sorted by y.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    pub tempo_changes: Vec<TempoChange>,
    pub time_signatures: Vec<TimeSignatureChange>,
}

impl Timeline {
    /// Record a tempo change, replacing one already at the same pulse.
    pub fn set_tempo(&mut self, y: Pulse, bpm: f64) {
        match self.tempo_changes.binary_search_by(|c| c.y.cmp(&y)) {
            Ok(i) => self.tempo_changes[i].bpm = bpm,
            Err(i) => self.tempo_changes.insert(i, TempoChange { y, bpm }),
        }
    }

    /// Record a time signature change, replacing one already at the same pulse.
    pub fn set_time_signature(&mut self, y: Pulse, numerator: u32, denominator: u32) {
        let change = TimeSignatureChange {
            y,
            numerator,
            denominator,
        };
        match self.time_signatures.binary_search_by(|c| c.y.cmp(&y)) {
            Ok(i) => self.time_signatures[i] = change,
            Err(i) => self.time_signatures.insert(i, change),
        }
    }
}

/// A fully parsed chart. Every lane's notes are sorted by y.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    pub meta: ChartMeta,
    pub beat: Timeline,
    pub bt: [Vec<Note>; BT_LANES],
    pub fx: [Vec<Note>; FX_LANES],
    pub laser: [Vec<LaserNote>; LASER_LANES],
    pub options: PositionalOptions,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of BT and FX notes plus laser notes.
    pub fn note_count(&self) -> usize {
        self.bt.iter().map(Vec::len).sum::<usize>()
            + self.fx.iter().map(Vec::len).sum::<usize>()
            + self.laser.iter().map(Vec::len).sum::<usize>()
    }
}
