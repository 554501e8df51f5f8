//! The transcoding engine.
//!
//! Each submodule maps one domain of the input chart:
//! - `timing` - tempo timeline and display-tempo override
//! - `notes` - BT/FX lanes
//! - `laser` - laser sections and slams
//! - `audio_effect`, `key_sound` - effect and key sound grammars
//! - `camera` - camera curves and spin events (indexed by `laser`)
//! - `meta` - header metadata
//! - `document` - composes all of the above

pub mod audio_effect;
pub mod camera;
pub mod document;
pub mod key_sound;
pub mod laser;
pub mod meta;
pub mod notes;
pub mod timing;

use std::path::Path;

pub use audio_effect::{AudioEffectKind, AudioEffectSpec};
pub use document::transcode;
pub use key_sound::{KeySoundSpec, KeySoundTable};
pub use laser::{LaserCurveBuilder, LaserLaneCurve, PointRef};
pub use timing::TimingModel;

use crate::error::Result;
use crate::kson::KsonDocument;

/// Load a KSH file and transcode it.
pub fn transcode_file<P: AsRef<Path>>(path: P) -> Result<KsonDocument> {
    let chart = crate::ksh::load(path)?;
    transcode(&chart)
}
