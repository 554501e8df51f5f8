//! Audio effect grammar: `Name`, `Name;p1` or `Name;p1;p2`.

use strum::{EnumString, IntoStaticStr};
use tracing::{debug, warn};

use crate::chart::{Chart, FxLane};
use crate::error::{Error, Result};
use crate::kson::{AudioEffectEvent, AudioEffectFxInfo, AudioEffectInfo, AudioEffectParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
pub enum AudioEffectKind {
    Retrigger,
    Gate,
    PitchShift,
    BitCrusher,
    Wobble,
    TapeStop,
    Echo,
}

impl AudioEffectKind {
    pub const ALL: [AudioEffectKind; 7] = [
        Self::Retrigger,
        Self::Gate,
        Self::PitchShift,
        Self::BitCrusher,
        Self::Wobble,
        Self::TapeStop,
        Self::Echo,
    ];

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Defaults for omitted `(p1, p2)`.
    pub fn default_params(&self) -> (i32, i32) {
        match self {
            Self::Retrigger => (8, 0),
            Self::Gate => (4, 0),
            Self::PitchShift => (12, 0),
            Self::BitCrusher => (5, 0),
            Self::Wobble => (12, 0),
            Self::TapeStop => (50, 0),
            Self::Echo => (4, 60),
        }
    }

    fn uses_p2(&self) -> bool {
        matches!(self, Self::Echo)
    }
}

/// Decoded effect with defaults applied. Unrecognized names keep `kind: None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioEffectSpec {
    pub name: String,
    pub kind: Option<AudioEffectKind>,
    pub p1: i32,
    pub p2: i32,
}

fn parse_param(raw: &str, part: &str) -> Result<i32> {
    part.trim()
        .parse()
        .map_err(|_| Error::malformed_effect(raw, "parameter is not an integer"))
}

impl AudioEffectSpec {
    pub fn decode(raw: &str) -> Result<Self> {
        let mut parts = raw.split(';');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(Error::malformed_effect(raw, "empty effect name"));
        }

        let p1 = parts.next().map(|p| parse_param(raw, p)).transpose()?;
        let p2 = parts.next().map(|p| parse_param(raw, p)).transpose()?;
        if parts.next().is_some() {
            return Err(Error::malformed_effect(raw, "too many parameters"));
        }

        let kind = name.parse::<AudioEffectKind>().ok();
        let (default_p1, default_p2) = kind.map(|k| k.default_params()).unwrap_or((0, 0));

        Ok(Self {
            name: name.to_string(),
            kind,
            p1: p1.unwrap_or(default_p1),
            p2: p2.unwrap_or(default_p2),
        })
    }

    /// Output parameter object; `None` for unrecognized effects.
    pub fn params(&self) -> Option<AudioEffectParams> {
        let wave_length = || format!("1/{}", self.p1);
        let params = match self.kind? {
            AudioEffectKind::Echo => AudioEffectParams::Echo {
                wave_length: wave_length(),
                feedback: format!("{}%", self.p2),
            },
            AudioEffectKind::Retrigger | AudioEffectKind::Gate | AudioEffectKind::Wobble => {
                AudioEffectParams::WaveLength {
                    wave_length: wave_length(),
                }
            }
            AudioEffectKind::PitchShift => AudioEffectParams::Pitch {
                pitch: self.p1.to_string(),
            },
            AudioEffectKind::BitCrusher => AudioEffectParams::Reduction {
                reduction: self.p1.to_string(),
            },
            AudioEffectKind::TapeStop => AudioEffectParams::Speed {
                speed: self.p1.to_string(),
            },
        };
        Some(params)
    }

    /// Re-encode with every parameter spelled out.
    pub fn encode(&self) -> String {
        match self.kind {
            Some(kind) if kind.uses_p2() => format!("{};{};{}", self.name, self.p1, self.p2),
            Some(_) => format!("{};{}", self.name, self.p1),
            None => self.name.clone(),
        }
    }
}

/// Effects of FX holds, read from the `fx-l`/`fx-r` option at each hold's start.
pub fn collect_audio_effects(chart: &Chart) -> Result<AudioEffectInfo> {
    let mut long_event = Vec::with_capacity(FxLane::ALL.len());

    for lane in FxLane::ALL {
        let mut events = Vec::new();
        for note in chart.fx[lane.index()].iter().filter(|n| !n.is_chip()) {
            let Some(raw) = chart.options.get(lane.effect_key(), note.y) else {
                continue;
            };
            let spec = AudioEffectSpec::decode(raw)?;
            if spec.kind.is_none() {
                warn!("Unrecognized audio effect {:?} at y={}", spec.name, note.y);
            }
            events.push(AudioEffectEvent {
                y: note.y,
                v: spec.params(),
                name: spec.name,
            });
        }
        debug!(
            "FX lane {}: {} audio effect events",
            <&str>::from(lane),
            events.len()
        );
        long_event.push(events);
    }

    Ok(AudioEffectInfo {
        fx: AudioEffectFxInfo { long_event },
    })
}
