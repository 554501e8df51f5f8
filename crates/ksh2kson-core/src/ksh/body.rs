use tracing::{debug, warn};

use super::lane_spin::parse_lane_spin;
use super::parse_time_signature;
use crate::chart::{BtLane, Chart, FxLane, LaserNote, Note, Pulse};
use crate::config::lanes::{BT_LANES, FX_LANES, LASER_LANES};
use crate::config::timing::UNIT_MEASURE;
use crate::error::{Error, Result};

/// Options that may be written twice on one pulse to form a `v;vf` jump.
const MERGED_CURVE_KEYS: [&str; 3] = ["zoom_top", "zoom_bottom", "zoom_side"];

const BT_OFFSET: usize = 0;
const FX_OFFSET: usize = 5;
const LASER_OFFSET: usize = 8;
const NOTE_LINE_LEN: usize = 10;

/// `BBBB|FF|LL` followed by an optional lane spin suffix.
pub fn is_note_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= NOTE_LINE_LEN && bytes[4] == b'|' && bytes[7] == b'|'
}

/// Raw laser position of a position character (`0-9A-Za-o` -> 0..=50).
pub fn laser_char_value(c: u8) -> Option<u32> {
    let value = match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'Z' => c - b'A' + 10,
        b'a'..=b'o' => c - b'a' + 36,
        _ => return None,
    };
    Some(value as u32)
}

pub(super) struct BodyReader<'c> {
    chart: &'c mut Chart,
    measure_start: Pulse,
    numerator: u32,
    denominator: u32,
    next_signature: Option<(u32, u32)>,
    bt_hold: [Option<Pulse>; BT_LANES],
    fx_hold: [Option<Pulse>; FX_LANES],
    laser_point: [Option<(Pulse, u32)>; LASER_LANES],
}

impl<'c> BodyReader<'c> {
    pub(super) fn new(chart: &'c mut Chart, numerator: u32, denominator: u32) -> Self {
        Self {
            chart,
            measure_start: 0,
            numerator,
            denominator,
            next_signature: None,
            bt_hold: [None; BT_LANES],
            fx_hold: [None; FX_LANES],
            laser_point: [None; LASER_LANES],
        }
    }

    fn measure_length(&self) -> Pulse {
        UNIT_MEASURE * self.numerator / self.denominator
    }

    pub(super) fn read<'a, I>(mut self, lines: I) -> Result<()>
    where
        I: Iterator<Item = (usize, &'a str)>,
    {
        let mut measure = Vec::new();
        let mut measure_count = 0;

        for (line_no, line) in lines {
            if line.starts_with("--") {
                self.read_measure(&measure)?;
                measure.clear();
                measure_count += 1;
            } else {
                measure.push((line_no, line));
            }
        }

        if measure.iter().any(|(_, line)| is_note_line(line)) {
            self.read_measure(&measure)?;
            measure_count += 1;
        }

        self.close_holds();
        debug!("Read {} measures, chart ends at y={}", measure_count, self.measure_start);
        Ok(())
    }

    fn read_measure(&mut self, lines: &[(usize, &str)]) -> Result<()> {
        let next_start = self
            .measure_start
            .checked_add(self.measure_length())
            .ok_or_else(|| {
                Error::malformed_number("beat", format!("{}/{}", self.numerator, self.denominator))
            })?;
        let note_lines = lines.iter().filter(|(_, l)| is_note_line(l)).count() as u64;
        let mut index = 0u64;

        for &(line_no, line) in lines {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            let y = if note_lines == 0 {
                self.measure_start
            } else {
                self.measure_start + (self.measure_length() as u64 * index / note_lines) as Pulse
            };

            if is_note_line(line) {
                self.read_note_line(line_no, line, y)?;
                index += 1;
            } else if let Some((key, value)) = line.split_once('=') {
                self.read_option(key.trim(), value, y, index == 0)?;
            } else if line.contains('|') {
                return Err(Error::InvalidNoteLine {
                    line: line_no,
                    text: line.to_string(),
                });
            } else {
                debug!("Skipping unrecognized line {}: {:?}", line_no, line);
            }
        }

        self.measure_start = next_start;
        if let Some((n, d)) = self.next_signature.take() {
            self.set_signature(n, d);
        }
        Ok(())
    }

    fn set_signature(&mut self, numerator: u32, denominator: u32) {
        self.numerator = numerator;
        self.denominator = denominator;
        self.chart
            .beat
            .set_time_signature(self.measure_start, numerator, denominator);
    }

    fn read_option(&mut self, key: &str, value: &str, y: Pulse, before_notes: bool) -> Result<()> {
        match key {
            "t" => {
                let bpm = value
                    .trim()
                    .parse()
                    .map_err(|_| Error::malformed_number("t", value))?;
                self.chart.beat.set_tempo(y, bpm);
            }
            "beat" => {
                let (n, d) = parse_time_signature(value)?;
                if before_notes {
                    self.set_signature(n, d);
                } else {
                    self.next_signature = Some((n, d));
                }
            }
            key if MERGED_CURVE_KEYS.contains(&key) => {
                match self.chart.options.get_mut(key, y) {
                    Some(existing) => {
                        let start = existing.split(';').next().unwrap_or_default().to_string();
                        *existing = format!("{};{}", start, value);
                    }
                    None => self.chart.options.insert(key, y, value),
                }
            }
            _ => self.chart.options.insert(key, y, value),
        }
        Ok(())
    }

    fn read_note_line(&mut self, line_no: usize, line: &str, y: Pulse) -> Result<()> {
        let invalid = || Error::InvalidNoteLine {
            line: line_no,
            text: line.to_string(),
        };
        let bytes = line.as_bytes();

        for lane in BtLane::ALL {
            match bytes[BT_OFFSET + lane.index()] {
                b'0' => self.close_bt(lane, y),
                b'1' => {
                    self.close_bt(lane, y);
                    self.chart.bt[lane.index()].push(Note::chip(y));
                }
                b'2' => {
                    self.bt_hold[lane.index()].get_or_insert(y);
                }
                _ => return Err(invalid()),
            }
        }

        for lane in FxLane::ALL {
            match bytes[FX_OFFSET + lane.index()] {
                b'0' => self.close_fx(lane, y),
                b'2' => {
                    self.close_fx(lane, y);
                    self.chart.fx[lane.index()].push(Note::chip(y));
                }
                c if c.is_ascii_alphanumeric() => {
                    self.fx_hold[lane.index()].get_or_insert(y);
                }
                _ => return Err(invalid()),
            }
        }

        let mut ended_here = [false; LASER_LANES];
        for (lane, ended) in ended_here.iter_mut().enumerate() {
            match bytes[LASER_OFFSET + lane] {
                b'-' => self.laser_point[lane] = None,
                b':' => {}
                c => {
                    let x = laser_char_value(c).ok_or_else(invalid)?;
                    if let Some((start_y, start_x)) = self.laser_point[lane] {
                        self.chart.laser[lane].push(LaserNote::new(start_y, y - start_y, start_x, x));
                        *ended = true;
                    }
                    self.laser_point[lane] = Some((y, x));
                }
            }
        }

        let suffix = line.get(NOTE_LINE_LEN..).ok_or_else(invalid)?.trim();
        if !suffix.is_empty() {
            let spin = parse_lane_spin(suffix).ok_or_else(invalid)?;
            match ended_here.iter().position(|&ended| ended) {
                Some(lane) => {
                    if let Some(note) = self.chart.laser[lane].last_mut() {
                        note.lane_spin = spin;
                    }
                }
                None => warn!(
                    "Lane spin at line {} has no laser note ending there, dropped",
                    line_no
                ),
            }
        }

        Ok(())
    }

    fn close_bt(&mut self, lane: BtLane, y: Pulse) {
        if let Some(start) = self.bt_hold[lane.index()].take() {
            self.chart.bt[lane.index()].push(Note::hold(start, y - start));
        }
    }

    fn close_fx(&mut self, lane: FxLane, y: Pulse) {
        if let Some(start) = self.fx_hold[lane.index()].take() {
            self.chart.fx[lane.index()].push(Note::hold(start, y - start));
        }
    }

    fn close_holds(&mut self) {
        let end = self.measure_start;
        for lane in BtLane::ALL {
            self.close_bt(lane, end);
        }
        for lane in FxLane::ALL {
            self.close_fx(lane, end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_note_line() {
        assert!(is_note_line("0000|00|--"));
        assert!(is_note_line("1020|12|0o@(192"));
        assert!(!is_note_line("t=120"));
        assert!(!is_note_line("0000|00"));
    }

    #[test]
    fn test_laser_char_value() {
        assert_eq!(laser_char_value(b'0'), Some(0));
        assert_eq!(laser_char_value(b'A'), Some(10));
        assert_eq!(laser_char_value(b'P'), Some(25));
        assert_eq!(laser_char_value(b'o'), Some(50));
        assert_eq!(laser_char_value(b'p'), None);
        assert_eq!(laser_char_value(b'-'), None);
    }
}
