//! Engine constants.
//!
//! Grouped the same way they are consumed:
//! - `timing` - pulse resolution and tempo truncation
//! - `laser` - laser geometry and slam detection
//! - `camera` - camera curve scaling and lane spin conversion
//! - `lanes` - lane counts per note category
//! - `document` - output document identity

/// Pulse resolution.
pub mod timing {
    /// Pulses per 4/4 measure.
    pub const UNIT_MEASURE: u32 = 960;

    /// Pulses per quarter-note beat (written as `beat.resolution`).
    pub const RESOLUTION: u32 = UNIT_MEASURE / 4;

    /// Tempo values are compared after scaling by this factor and truncating.
    pub const TEMPO_TRUNCATE_SCALE: f64 = 1000.0;

    /// Marker in the header tempo text that denotes a tempo range (e.g. `120-180`).
    pub const TEMPO_RANGE_MARKER: char = '-';
}

/// Laser geometry.
pub mod laser {
    use super::timing::UNIT_MEASURE;

    /// Raw laser positions run from 0 to this value inclusive.
    pub const X_MAX: u32 = 50;

    /// Laser notes this short or shorter are slams (1/32 measure).
    pub const SLAM_THRESHOLD: u32 = UNIT_MEASURE / 32;

    /// Side-option value that marks a double-width laser section.
    pub const WIDE_MARKER: &str = "2x";
}

/// Camera motion.
pub mod camera {
    /// Raw zoom/rotation/shift values are divided by this.
    pub const VALUE_SCALE: f64 = 100.0;

    /// Lane spin lengths in the source are written in 1/192 measure units.
    pub const SPIN_LENGTH_UNIT: u32 = 192;

    /// Lateral-shift units per swing-amplitude unit.
    pub const SWING_SCALE_RATIO: f64 = 0.6;

    /// Swing defaults when the source omits amplitude, frequency or decay.
    pub const SWING_DEFAULT_AMPLITUDE: i32 = 250;
    pub const SWING_DEFAULT_FREQUENCY: i32 = 3;
    pub const SWING_DEFAULT_DECAY_ORDER: i32 = 2;
}

/// Lane counts.
pub mod lanes {
    pub const BT_LANES: usize = 4;
    pub const FX_LANES: usize = 2;
    pub const LASER_LANES: usize = 2;
}

/// Output document identity.
pub mod document {
    pub const VERSION: &str = "0.1.0";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_constants() {
        assert_eq!(timing::UNIT_MEASURE, 960);
        assert_eq!(timing::RESOLUTION, 240);
    }

    #[test]
    fn test_slam_threshold_is_one_32nd() {
        assert_eq!(laser::SLAM_THRESHOLD, 30);
        assert_eq!(laser::SLAM_THRESHOLD * 32, timing::UNIT_MEASURE);
    }
}
