//! Camera curves and laser-triggered spin events.

use tracing::debug;

use super::laser::PointRef;
use crate::chart::{LaserNote, PositionalOptions, SpinType};
use crate::config::camera::{SWING_SCALE_RATIO, VALUE_SCALE};
use crate::error::{Error, Result};
use crate::kson::{ByPulse, CamBodyInfo, GraphPoint, SlamEventInfo, SpinEventParams, SwingEventParams};

pub const ZOOM_KEY: &str = "zoom_bottom";
pub const ROTATION_KEY: &str = "zoom_top";
pub const SHIFT_KEY: &str = "zoom_side";

/// Parse `v` or `v;vf` into a scaled curve point.
pub fn parse_curve_point(key: &str, y: u32, raw: &str) -> Result<GraphPoint> {
    let parse = |s: &str| -> Result<f64> {
        s.trim()
            .parse::<f64>()
            .map_err(|_| Error::malformed_number(key, raw))
    };

    let (v, vf) = match raw.split_once(';') {
        Some((v, vf)) => (parse(v)?, Some(parse(vf)?)),
        None => (parse(raw)?, None),
    };

    Ok(GraphPoint {
        y,
        v: v / VALUE_SCALE,
        vf: vf.filter(|&vf| vf != v).map(|vf| vf / VALUE_SCALE),
    })
}

/// One curve from every `(y, value)` of `key`, in increasing y.
pub fn build_curve(options: &PositionalOptions, key: &str) -> Result<Vec<GraphPoint>> {
    options
        .iter(key)
        .map(|(y, raw)| parse_curve_point(key, y, raw))
        .collect()
}

pub fn build_body(options: &PositionalOptions) -> Result<CamBodyInfo> {
    Ok(CamBodyInfo {
        zoom: build_curve(options, ZOOM_KEY)?,
        rotation_x: build_curve(options, ROTATION_KEY)?,
        shift_x: build_curve(options, SHIFT_KEY)?,
    })
}

/// Collect spin events from laser notes and the points they landed on.
///
/// `placements[i]` must be the `PointRef` the laser builder returned for
/// `notes[i]` of the same lane.
pub fn collect_slam_events<'a, I>(lanes: I) -> SlamEventInfo
where
    I: IntoIterator<Item = (&'a [LaserNote], &'a [PointRef])>,
{
    let mut events = SlamEventInfo::default();

    for (notes, placements) in lanes {
        for (note, at) in notes.iter().zip(placements) {
            let spin = &note.lane_spin;
            let sign = spin.direction.sign();
            match spin.kind {
                SpinType::None => {}
                SpinType::Normal | SpinType::Half => {
                    let params = SpinEventParams {
                        l: spin.length,
                        lane: at.lane.index(),
                        sec: at.section,
                        idx: at.point,
                        scale: sign,
                    };
                    let list = if spin.kind == SpinType::Normal {
                        &mut events.spin
                    } else {
                        &mut events.half_spin
                    };
                    list.push(ByPulse::new(note.y, params));
                }
                SpinType::Swing => {
                    events.swing.push(ByPulse::new(
                        note.y,
                        SwingEventParams {
                            l: spin.length,
                            lane: at.lane.index(),
                            sec: at.section,
                            idx: at.point,
                            scale: sign * spin.amplitude as f64 * SWING_SCALE_RATIO / VALUE_SCALE,
                            repeat: spin.frequency,
                            decay_order: spin.decay_order,
                        },
                    ));
                }
            }
        }
    }

    events.spin.sort_by_key(|e| e.y);
    events.half_spin.sort_by_key(|e| e.y);
    events.swing.sort_by_key(|e| e.y);

    debug!(
        "Slam events: {} spin, {} half_spin, {} swing",
        events.spin.len(),
        events.half_spin.len(),
        events.swing.len()
    );

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{LaneSpin, LaserLane, SpinDirection};
    use crate::transcode::laser::build_lane;

    #[test]
    fn test_curve_point_scaling() {
        let p = parse_curve_point(ZOOM_KEY, 0, "150").unwrap();
        assert_eq!(p, GraphPoint { y: 0, v: 1.5, vf: None });

        let p = parse_curve_point(ZOOM_KEY, 960, "0;-100").unwrap();
        assert_eq!(p.v, 0.0);
        assert_eq!(p.vf, Some(-1.0));
    }

    #[test]
    fn test_equal_final_value_is_dropped() {
        let p = parse_curve_point(SHIFT_KEY, 0, "50;50").unwrap();
        assert_eq!(p.vf, None);
    }

    #[test]
    fn test_malformed_curve_value() {
        match parse_curve_point(ROTATION_KEY, 0, "up") {
            Err(Error::MalformedNumber { field, raw }) => {
                assert_eq!(field, "zoom_top");
                assert_eq!(raw, "up");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_body_curves_are_independent() {
        let mut options = PositionalOptions::new();
        options.insert(ZOOM_KEY, 0, "100");
        options.insert(ZOOM_KEY, 480, "200");
        options.insert(SHIFT_KEY, 240, "-50");

        let body = build_body(&options).unwrap();
        assert_eq!(body.zoom.len(), 2);
        assert!(body.rotation_x.is_empty());
        assert_eq!(body.shift_x[0].v, -0.5);
    }

    fn spin(kind: SpinType, direction: SpinDirection) -> LaneSpin {
        LaneSpin {
            kind,
            direction,
            length: 960,
            amplitude: 250,
            frequency: 3,
            decay_order: 2,
        }
    }

    #[test]
    fn test_spin_events_use_builder_indices() {
        let notes = vec![
            LaserNote::new(0, 240, 0, 50),
            LaserNote::new(240, 30, 50, 0).with_spin(spin(SpinType::Normal, SpinDirection::Left)),
            LaserNote::new(960, 30, 0, 50).with_spin(spin(SpinType::Half, SpinDirection::Right)),
        ];
        let curve = build_lane(LaserLane::Right, &notes, &PositionalOptions::new());

        let events = collect_slam_events([(notes.as_slice(), curve.placements.as_slice())]);
        assert_eq!(
            events.spin,
            vec![ByPulse::new(
                240,
                SpinEventParams {
                    l: 960,
                    lane: 1,
                    sec: 0,
                    idx: 1,
                    scale: -1.0,
                }
            )]
        );
        assert_eq!(events.half_spin[0].v.sec, 1);
        assert_eq!(events.half_spin[0].v.idx, 0);
        assert_eq!(events.half_spin[0].v.scale, 1.0);
        assert!(events.swing.is_empty());
    }

    #[test]
    fn test_swing_scale() {
        let notes =
            vec![LaserNote::new(0, 15, 0, 50).with_spin(spin(SpinType::Swing, SpinDirection::Left))];
        let curve = build_lane(LaserLane::Left, &notes, &PositionalOptions::new());

        let events = collect_slam_events([(notes.as_slice(), curve.placements.as_slice())]);
        let swing = &events.swing[0].v;
        assert!((swing.scale - -1.5).abs() < 1e-9);
        assert_eq!(swing.repeat, 3);
        assert_eq!(swing.decay_order, 2);
        assert_eq!(swing.l, 960);
    }

    #[test]
    fn test_events_sorted_across_lanes() {
        let left = vec![LaserNote::new(960, 30, 0, 50)
            .with_spin(spin(SpinType::Normal, SpinDirection::Right))];
        let right = vec![LaserNote::new(0, 30, 50, 0)
            .with_spin(spin(SpinType::Normal, SpinDirection::Left))];
        let l = build_lane(LaserLane::Left, &left, &PositionalOptions::new());
        let r = build_lane(LaserLane::Right, &right, &PositionalOptions::new());

        let events = collect_slam_events([
            (left.as_slice(), l.placements.as_slice()),
            (right.as_slice(), r.placements.as_slice()),
        ]);
        let ys: Vec<u32> = events.spin.iter().map(|e| e.y).collect();
        assert_eq!(ys, vec![0, 960]);
        assert_eq!(events.spin[0].v.lane, 1);
    }
}
