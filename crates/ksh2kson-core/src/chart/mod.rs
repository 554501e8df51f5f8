//! Typed in-memory chart: the transcoder's input.
//!
//! This module contains:
//! - `Chart`, `Timeline` - the whole chart and its tempo/time-signature timeline
//! - `Note`, `LaserNote`, `LaneSpin` - per-lane note data
//! - `BtLane`, `FxLane`, `LaserLane` - lane identities and their side-option keys
//! - `ChartMeta` - flat header metadata
//! - `PositionalOptions` - sparse `(property, pulse) -> value` lookup
//! - `Difficulty` - difficulty classification

mod chart;
mod difficulty;
mod lane;
mod meta;
mod options;
mod types;

pub use chart::*;
pub use difficulty::*;
pub use lane::*;
pub use meta::*;
pub use options::*;
pub use types::*;
