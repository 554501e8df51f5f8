//! # ksh2kson-core
//!
//! Core library for converting KSH charts into KSON documents.
//!
//! This crate provides:
//! - The typed chart model (`chart`) and a KSH text reader (`ksh`)
//! - The transcoding engine (`transcode`): timing, note lanes, laser curves,
//!   audio effects, key sounds, camera motion and metadata
//! - The output document types (`kson`) and JSON export (`export`)

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod ksh;
pub mod kson;
pub mod transcode;

// Re-export from chart module
pub use chart::{
    BtLane, Chart, ChartMeta, Difficulty, FxLane, LaneSpin, LaserLane, LaserNote, Note,
    PositionalOptions, Pulse, SpinDirection, SpinType, TempoChange, TimeSignatureChange, Timeline,
};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from export module
pub use export::{to_json_string, write_document};

// Re-export from kson module
pub use kson::KsonDocument;

// Re-export from transcode module
pub use transcode::{
    AudioEffectKind, AudioEffectSpec, KeySoundSpec, KeySoundTable, TimingModel, transcode,
    transcode_file,
};
