//! BT/FX note lanes.

use crate::chart::Note;
use crate::kson::Interval;

/// Map one lane. Chips carry no length.
pub fn extract_lane(notes: &[Note]) -> Vec<Interval> {
    notes
        .iter()
        .map(|note| Interval {
            y: note.y,
            l: (note.length > 0).then_some(note.length),
        })
        .collect()
}

pub fn extract_lanes(lanes: &[Vec<Note>]) -> Vec<Vec<Interval>> {
    lanes.iter().map(|lane| extract_lane(lane)).collect()
}
