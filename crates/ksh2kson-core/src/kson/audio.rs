use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ByPulse;
use crate::chart::Pulse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BgmInfo {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vol: Option<f64>,
    pub offset: i32,
    pub preview_offset: i32,
    pub preview_duration: i32,
}

/// Custom key sound registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySoundDef {
    pub filename: String,
}

/// Key sound played by one FX chip. `vol` is absent at full volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySoundInvoke {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vol: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeySoundFxInfo {
    pub chip_event: Vec<Vec<ByPulse<KeySoundInvoke>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeySoundInfo {
    pub def: BTreeMap<String, KeySoundDef>,
    pub fx: KeySoundFxInfo,
}

/// Type-specific effect parameters, serialized as a flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AudioEffectParams {
    Echo { wave_length: String, feedback: String },
    WaveLength { wave_length: String },
    Pitch { pitch: String },
    Reduction { reduction: String },
    Speed { speed: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioEffectEvent {
    pub y: Pulse,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<AudioEffectParams>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioEffectFxInfo {
    pub long_event: Vec<Vec<AudioEffectEvent>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioEffectInfo {
    pub fx: AudioEffectFxInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioInfo {
    pub bgm: BgmInfo,
    pub key_sound: KeySoundInfo,
    pub audio_effect: AudioEffectInfo,
}
