use crate::chart::{LaneSpin, SpinDirection, SpinType};
use crate::config::camera::{
    SPIN_LENGTH_UNIT, SWING_DEFAULT_AMPLITUDE, SWING_DEFAULT_DECAY_ORDER, SWING_DEFAULT_FREQUENCY,
};
use crate::config::timing::UNIT_MEASURE;

fn spin_prefix(prefix: &str) -> Option<(SpinType, SpinDirection)> {
    Some(match prefix {
        "@(" => (SpinType::Normal, SpinDirection::Left),
        "@)" => (SpinType::Normal, SpinDirection::Right),
        "@<" => (SpinType::Half, SpinDirection::Left),
        "@>" => (SpinType::Half, SpinDirection::Right),
        "S<" => (SpinType::Swing, SpinDirection::Left),
        "S>" => (SpinType::Swing, SpinDirection::Right),
        _ => return None,
    })
}

/// Parse a note line's lane spin suffix, e.g. `@(192` or `S>96;150;2;1`.
///
/// The length is given in 1/192 measure and returned in pulses. Swing takes
/// optional `;amplitude;frequency;decay` parameters. Returns `None` when the
/// suffix is not a valid spin.
pub fn parse_lane_spin(suffix: &str) -> Option<LaneSpin> {
    let (kind, direction) = spin_prefix(suffix.get(..2)?)?;
    let mut params = suffix[2..].split(';');

    let length_units: u32 = params.next()?.trim().parse().ok()?;
    let mut spin = LaneSpin {
        kind,
        direction,
        length: length_units.checked_mul(UNIT_MEASURE)? / SPIN_LENGTH_UNIT,
        ..LaneSpin::default()
    };

    if kind == SpinType::Swing {
        let mut next_or = |default: i32| match params.next() {
            Some(p) => p.trim().parse::<i32>().ok(),
            None => Some(default),
        };
        spin.amplitude = next_or(SWING_DEFAULT_AMPLITUDE)?;
        spin.frequency = next_or(SWING_DEFAULT_FREQUENCY)?;
        spin.decay_order = next_or(SWING_DEFAULT_DECAY_ORDER)?;
    }

    if params.next().is_some() {
        return None;
    }
    Some(spin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_and_half_spins() {
        let spin = parse_lane_spin("@(192").unwrap();
        assert_eq!(spin.kind, SpinType::Normal);
        assert_eq!(spin.direction, SpinDirection::Left);
        assert_eq!(spin.length, 960);

        let spin = parse_lane_spin("@>96").unwrap();
        assert_eq!(spin.kind, SpinType::Half);
        assert_eq!(spin.direction, SpinDirection::Right);
        assert_eq!(spin.length, 480);
    }

    #[test]
    fn test_swing_defaults() {
        let spin = parse_lane_spin("S<192").unwrap();
        assert_eq!(spin.kind, SpinType::Swing);
        assert_eq!(
            (spin.amplitude, spin.frequency, spin.decay_order),
            (250, 3, 2)
        );
    }

    #[test]
    fn test_swing_explicit_parameters() {
        let spin = parse_lane_spin("S>96;150;2;1").unwrap();
        assert_eq!(spin.direction, SpinDirection::Right);
        assert_eq!(
            (spin.amplitude, spin.frequency, spin.decay_order),
            (150, 2, 1)
        );
    }

    #[test]
    fn test_invalid_spins() {
        assert!(parse_lane_spin("@").is_none());
        assert!(parse_lane_spin("@(").is_none());
        assert!(parse_lane_spin("@(abc").is_none());
        assert!(parse_lane_spin("X(192").is_none());
        assert!(parse_lane_spin("@(192;5").is_none());
        assert!(parse_lane_spin("S<192;1;2;3;4").is_none());
    }

    #[test]
    fn test_oversized_length_is_rejected() {
        assert!(parse_lane_spin("@(9999999").is_none());
        assert!(parse_lane_spin("S>4294967295").is_none());
    }
}
