//! Laser curve segmentation.
//!
//! A lane's laser notes are walked once in increasing y. A note whose start
//! does not continue the previous note's end opens a new section; short notes
//! collapse into a slam on the section's last point instead of adding one.
//! Every note reports the section/point it landed on so that camera events
//! can address the same point.

use tracing::debug;

use crate::chart::{LaserLane, LaserNote, PositionalOptions, Pulse};
use crate::config::laser::{SLAM_THRESHOLD, WIDE_MARKER, X_MAX};
use crate::kson::{GraphSectionPoint, LaserSection};

/// Raw lane position to `[0, 1]`.
pub fn normalize_x(raw: u32) -> f64 {
    raw as f64 / X_MAX as f64
}

pub fn is_slam(note: &LaserNote) -> bool {
    note.length <= SLAM_THRESHOLD
}

/// Section and point a laser note's final value was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRef {
    pub lane: LaserLane,
    pub section: usize,
    pub point: usize,
}

/// Sections of one lane plus, for each input note, where it landed.
#[derive(Debug, Clone, PartialEq)]
pub struct LaserLaneCurve {
    pub sections: Vec<LaserSection>,
    pub placements: Vec<PointRef>,
}

pub struct LaserCurveBuilder<'a> {
    lane: LaserLane,
    options: &'a PositionalOptions,
    sections: Vec<LaserSection>,
    prev_end_y: Option<Pulse>,
}

impl<'a> LaserCurveBuilder<'a> {
    pub fn new(lane: LaserLane, options: &'a PositionalOptions) -> Self {
        Self {
            lane,
            options,
            sections: Vec::new(),
            prev_end_y: None,
        }
    }

    /// Width of a section starting at `y`. Only an exact `2x` marker widens it.
    fn wide_at(&self, y: Pulse) -> u8 {
        match self.options.get(self.lane.wide_key(), y) {
            Some(WIDE_MARKER) => 2,
            _ => 1,
        }
    }

    fn start_section(&mut self, note: &LaserNote) {
        let wide = self.wide_at(note.y);
        self.sections.push(LaserSection {
            y: note.y,
            v: vec![GraphSectionPoint::new(0, normalize_x(note.start_x))],
            wide,
        });
    }

    /// Feed the next note (notes must arrive in increasing y).
    pub fn push(&mut self, note: &LaserNote) -> PointRef {
        if self.prev_end_y != Some(note.y) {
            self.start_section(note);
        }

        let section_idx = self.sections.len() - 1;
        let section = &mut self.sections[section_idx];
        let end_v = normalize_x(note.end_x);

        if is_slam(note) {
            if let Some(last) = section.v.last_mut() {
                last.vf = Some(end_v);
            }
        } else {
            section
                .v
                .push(GraphSectionPoint::new(note.end_y() - section.y, end_v));
        }

        self.prev_end_y = Some(note.end_y());

        PointRef {
            lane: self.lane,
            section: section_idx,
            point: section.v.len() - 1,
        }
    }

    pub fn finish(self) -> Vec<LaserSection> {
        self.sections
    }
}

/// Build a whole lane in one pass.
pub fn build_lane(
    lane: LaserLane,
    notes: &[LaserNote],
    options: &PositionalOptions,
) -> LaserLaneCurve {
    let mut builder = LaserCurveBuilder::new(lane, options);
    let placements = notes.iter().map(|note| builder.push(note)).collect();
    let sections = builder.finish();

    debug!(
        "Laser lane {}: {} notes -> {} sections",
        <&str>::from(lane),
        notes.len(),
        sections.len()
    );

    LaserLaneCurve {
        sections,
        placements,
    }
}
