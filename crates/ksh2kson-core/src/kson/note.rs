use serde::{Deserialize, Serialize};

use crate::chart::Pulse;

/// BT/FX note. `l` is absent for chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub y: Pulse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<Pulse>,
}

/// Laser polyline point relative to its section start. `vf` marks a slam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphSectionPoint {
    pub ry: Pulse,
    pub v: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vf: Option<f64>,
}

impl GraphSectionPoint {
    pub fn new(ry: Pulse, v: f64) -> Self {
        Self { ry, v, vf: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserSection {
    pub y: Pulse,
    pub v: Vec<GraphSectionPoint>,
    pub wide: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteInfo {
    pub bt: Vec<Vec<Interval>>,
    pub fx: Vec<Vec<Interval>>,
    pub laser: Vec<Vec<LaserSection>>,
}
