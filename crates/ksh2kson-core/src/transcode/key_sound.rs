//! Key sound grammar: `filename` or `filename;vol`.

use std::collections::BTreeMap;

use tracing::debug;

use crate::chart::{Chart, FxLane};
use crate::error::{Error, Result};
use crate::kson::{ByPulse, KeySoundDef, KeySoundFxInfo, KeySoundInfo, KeySoundInvoke};

/// Volume percent assumed when the key sound string omits it.
pub const DEFAULT_VOLUME_PERCENT: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySoundSpec {
    pub filename: String,
    pub volume_percent: i32,
}

impl KeySoundSpec {
    pub fn decode(raw: &str) -> Result<Self> {
        let mut parts = raw.split(';');
        let filename = parts.next().unwrap_or_default().trim();
        if filename.is_empty() {
            return Err(Error::malformed_effect(raw, "empty key sound filename"));
        }

        let volume_percent = match parts.next() {
            Some(vol) => vol
                .trim()
                .parse()
                .map_err(|_| Error::malformed_effect(raw, "volume is not an integer"))?,
            None => DEFAULT_VOLUME_PERCENT,
        };
        if parts.next().is_some() {
            return Err(Error::malformed_effect(raw, "too many parameters"));
        }

        Ok(Self {
            filename: filename.to_string(),
            volume_percent,
        })
    }

    /// A filename with an extension is a custom asset; bare names are presets.
    pub fn is_custom(&self) -> bool {
        self.filename.contains('.')
    }

    /// Volume in `[0, 1]`, absent at the implicit default.
    pub fn volume(&self) -> Option<f64> {
        (self.volume_percent != DEFAULT_VOLUME_PERCENT).then(|| self.volume_percent as f64 / 100.0)
    }

    pub fn to_invoke(&self) -> KeySoundInvoke {
        KeySoundInvoke {
            filename: self.filename.clone(),
            vol: self.volume(),
        }
    }
}

/// Custom key sound definitions keyed by filename.
#[derive(Debug, Clone, Default)]
pub struct KeySoundTable {
    defs: BTreeMap<String, KeySoundDef>,
}

impl KeySoundTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom sound. Returns `false` for presets and repeats.
    pub fn register(&mut self, spec: &KeySoundSpec) -> bool {
        if !spec.is_custom() || self.defs.contains_key(&spec.filename) {
            return false;
        }
        self.defs.insert(
            spec.filename.clone(),
            KeySoundDef {
                filename: spec.filename.clone(),
            },
        );
        true
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn into_defs(self) -> BTreeMap<String, KeySoundDef> {
        self.defs
    }
}

/// Key sounds of FX chips, read from the `fx-l_se`/`fx-r_se` option at each chip.
pub fn collect_key_sounds(chart: &Chart) -> Result<KeySoundInfo> {
    let mut table = KeySoundTable::new();
    let mut chip_event = Vec::with_capacity(FxLane::ALL.len());

    for lane in FxLane::ALL {
        let mut events = Vec::new();
        for note in chart.fx[lane.index()].iter().filter(|n| n.is_chip()) {
            let Some(raw) = chart.options.get(lane.key_sound_key(), note.y) else {
                continue;
            };
            let spec = KeySoundSpec::decode(raw)?;
            if table.register(&spec) {
                debug!("Registered custom key sound {:?}", spec.filename);
            }
            events.push(ByPulse::new(note.y, spec.to_invoke()));
        }
        chip_event.push(events);
    }

    Ok(KeySoundInfo {
        def: table.into_defs(),
        fx: KeySoundFxInfo { chip_event },
    })
}
