//! Output document types.
//!
//! Everything here is plain data: serialization shape only, no transcoding
//! logic. Optional fields are omitted from the JSON when absent.

mod audio;
mod camera;
mod meta;
mod note;

pub use audio::*;
pub use camera::*;
pub use meta::*;
pub use note::*;

use serde::{Deserialize, Serialize};

use crate::chart::Pulse;

/// A value anchored at a pulse (`{"y": .., "v": ..}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByPulse<T> {
    pub y: Pulse,
    pub v: T,
}

impl<T> ByPulse<T> {
    pub fn new(y: Pulse, v: T) -> Self {
        Self { y, v }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KsonDocument {
    pub version: String,
    pub meta: MetaInfo,
    pub beat: BeatInfo,
    pub gauge: GaugeInfo,
    pub note: NoteInfo,
    pub audio: AudioInfo,
    pub camera: CameraInfo,
    pub bg: BgInfo,
    #[serde(rename = "impl")]
    pub impl_: ImplInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSig {
    pub n: u32,
    pub d: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeatInfo {
    pub bpm: Vec<ByPulse<f64>>,
    pub time_sig: Vec<ByPulse<TimeSig>>,
    pub resolution: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GaugeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

/// Reserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BgInfo {}

/// Reserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplInfo {}
