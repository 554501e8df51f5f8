use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// Integer tick coordinate, `UNIT_MEASURE` pulses per 4/4 measure.
pub type Pulse = u32;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempoChange {
    pub y: Pulse,
    pub bpm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignatureChange {
    pub y: Pulse,
    pub numerator: u32,
    pub denominator: u32,
}

/// BT/FX note. Length 0 is a chip, anything longer is a hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub y: Pulse,
    pub length: Pulse,
}

impl Note {
    pub fn chip(y: Pulse) -> Self {
        Self { y, length: 0 }
    }

    pub fn hold(y: Pulse, length: Pulse) -> Self {
        Self { y, length }
    }

    pub fn is_chip(&self) -> bool {
        self.length == 0
    }
}

/// One laser segment from `start_x` at `y` to `end_x` at `y + length`.
///
/// `start_x`/`end_x` are raw positions in `0..=laser::X_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserNote {
    pub y: Pulse,
    pub length: Pulse,
    pub start_x: u32,
    pub end_x: u32,
    pub lane_spin: LaneSpin,
}

impl LaserNote {
    pub fn new(y: Pulse, length: Pulse, start_x: u32, end_x: u32) -> Self {
        Self {
            y,
            length,
            start_x,
            end_x,
            lane_spin: LaneSpin::default(),
        }
    }

    pub fn with_spin(mut self, lane_spin: LaneSpin) -> Self {
        self.lane_spin = lane_spin;
        self
    }

    pub fn end_y(&self) -> Pulse {
        self.y + self.length
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, IntoStaticStr,
)]
pub enum SpinType {
    #[default]
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "spin")]
    Normal,
    #[strum(serialize = "half_spin")]
    Half,
    #[strum(serialize = "swing")]
    Swing,
}

impl SpinType {
    /// Event pattern name used as the output key.
    pub fn pattern_name(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpinDirection {
    #[default]
    Left,
    Right,
}

impl SpinDirection {
    pub fn sign(&self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Camera roll/swing triggered by a laser note.
///
/// `amplitude`, `frequency` and `decay_order` only matter for `SpinType::Swing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaneSpin {
    pub kind: SpinType,
    pub direction: SpinDirection,
    pub length: Pulse,
    pub amplitude: i32,
    pub frequency: i32,
    pub decay_order: i32,
}

impl LaneSpin {
    pub fn is_none(&self) -> bool {
        self.kind == SpinType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_pattern_names() {
        assert_eq!(SpinType::Normal.pattern_name(), "spin");
        assert_eq!(SpinType::Half.pattern_name(), "half_spin");
        assert_eq!(SpinType::Swing.pattern_name(), "swing");
    }

    #[test]
    fn test_default_lane_spin_is_none() {
        let note = LaserNote::new(0, 240, 0, 50);
        assert!(note.lane_spin.is_none());
        assert_eq!(note.end_y(), 240);
    }

    #[test]
    fn test_spin_direction_sign() {
        assert_eq!(SpinDirection::Left.sign(), -1.0);
        assert_eq!(SpinDirection::Right.sign(), 1.0);
    }
}
