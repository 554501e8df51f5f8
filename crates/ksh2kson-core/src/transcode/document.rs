//! Assembles the output document from the per-domain mappers.

use tracing::debug;

use super::{audio_effect, camera, key_sound, laser, meta, notes, timing::TimingModel};
use crate::chart::{Chart, LaserLane};
use crate::config::document::VERSION;
use crate::error::Result;
use crate::kson::{
    AudioInfo, BgInfo, CamInfo, CamPatternInfo, CamPatternLaserInfo, CameraInfo, ImplInfo,
    KsonDocument, NoteInfo,
};

/// Transcode one chart into a document.
pub fn transcode(chart: &Chart) -> Result<KsonDocument> {
    let timing = TimingModel::new(&chart.beat);
    let initial_tempo = timing.initial_tempo()?;

    let meta = meta::map_meta(&chart.meta, initial_tempo)?;
    let gauge = meta::map_gauge(&chart.meta)?;
    let bgm = meta::map_bgm(&chart.meta)?;

    let curves: Vec<_> = LaserLane::ALL
        .iter()
        .map(|&lane| laser::build_lane(lane, &chart.laser[lane.index()], &chart.options))
        .collect();

    let slam_event = camera::collect_slam_events(
        chart
            .laser
            .iter()
            .zip(&curves)
            .map(|(notes, curve)| (notes.as_slice(), curve.placements.as_slice())),
    );

    let note = NoteInfo {
        bt: notes::extract_lanes(&chart.bt),
        fx: notes::extract_lanes(&chart.fx),
        laser: curves.into_iter().map(|c| c.sections).collect(),
    };

    let audio = AudioInfo {
        bgm,
        key_sound: key_sound::collect_key_sounds(chart)?,
        audio_effect: audio_effect::collect_audio_effects(chart)?,
    };

    let camera = CameraInfo {
        cam: CamInfo {
            body: camera::build_body(&chart.options)?,
            pattern: CamPatternInfo {
                laser: CamPatternLaserInfo { slam_event },
            },
        },
    };

    debug!("Transcoded {:?} ({} notes)", meta.title, chart.note_count());

    Ok(KsonDocument {
        version: VERSION.to_string(),
        meta,
        beat: timing.beat_info(),
        gauge,
        note,
        audio,
        camera,
        bg: BgInfo::default(),
        impl_: ImplInfo::default(),
    })
}
