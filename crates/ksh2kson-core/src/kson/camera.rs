use serde::{Deserialize, Serialize};

use super::ByPulse;
use crate::chart::Pulse;

/// Curve point. `vf` is present only when the value jumps at `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub y: Pulse,
    pub v: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vf: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CamBodyInfo {
    pub zoom: Vec<GraphPoint>,
    pub rotation_x: Vec<GraphPoint>,
    pub shift_x: Vec<GraphPoint>,
}

/// Spin/half-spin parameters. `sec`/`idx` address a laser section point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinEventParams {
    pub l: Pulse,
    pub lane: usize,
    pub sec: usize,
    pub idx: usize,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingEventParams {
    pub l: Pulse,
    pub lane: usize,
    pub sec: usize,
    pub idx: usize,
    pub scale: f64,
    pub repeat: i32,
    pub decay_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlamEventInfo {
    pub spin: Vec<ByPulse<SpinEventParams>>,
    pub half_spin: Vec<ByPulse<SpinEventParams>>,
    pub swing: Vec<ByPulse<SwingEventParams>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CamPatternLaserInfo {
    pub slam_event: SlamEventInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CamPatternInfo {
    pub laser: CamPatternLaserInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CamInfo {
    pub body: CamBodyInfo,
    pub pattern: CamPatternInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraInfo {
    pub cam: CamInfo,
}
