//! Header metadata: difficulty, numeric coercion, gauge and bgm fields.

use std::str::FromStr;

use crate::chart::{ChartMeta, Difficulty};
use crate::error::{Error, Result};
use crate::kson::{BgmInfo, DifficultyInfo, GaugeInfo, MetaInfo};

use super::timing::display_tempo_override;

/// Parse a required numeric field.
pub fn parse_field<T: FromStr>(meta: &ChartMeta, key: &str) -> Result<T> {
    let raw = meta.require(key)?;
    raw.trim()
        .parse()
        .map_err(|_| Error::malformed_number(key, raw))
}

/// Parse an optional numeric field; absent stays `None`.
pub fn parse_optional_field<T: FromStr>(meta: &ChartMeta, key: &str) -> Result<Option<T>> {
    meta.get(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| Error::malformed_number(key, raw))
        })
        .transpose()
}

fn require_string(meta: &ChartMeta, key: &str) -> Result<String> {
    meta.require(key).map(str::to_string)
}

pub fn difficulty_info(difficulty: Difficulty) -> DifficultyInfo {
    DifficultyInfo {
        name: difficulty.display_name().to_string(),
        short_name: difficulty.short_name().to_string(),
        idx: difficulty.index(),
    }
}

/// Build `meta`. `initial_tempo` is the computed tempo at pulse 0.
pub fn map_meta(meta: &ChartMeta, initial_tempo: f64) -> Result<MetaInfo> {
    let difficulty = Difficulty::classify(meta.require("difficulty")?);

    Ok(MetaInfo {
        title: require_string(meta, "title")?,
        title_translit: String::new(),
        artist: require_string(meta, "artist")?,
        artist_translit: String::new(),
        chart_author: require_string(meta, "effect")?,
        difficulty: difficulty_info(difficulty),
        level: parse_field(meta, "level")?,
        disp_bpm: display_tempo_override(meta.require("t")?, initial_tempo)?,
        std_bpm: parse_optional_field(meta, "to")?,
        jacket_filename: require_string(meta, "jacket")?,
        jacket_author: require_string(meta, "illustrator")?,
        information: meta.get("information").map(str::to_string),
    })
}

pub fn map_gauge(meta: &ChartMeta) -> Result<GaugeInfo> {
    Ok(GaugeInfo {
        total: parse_optional_field(meta, "total")?,
    })
}

/// Build `audio.bgm`. `m` may list extra files after `;`; only the first is kept.
pub fn map_bgm(meta: &ChartMeta) -> Result<BgmInfo> {
    let filename = meta
        .require("m")?
        .split(';')
        .next()
        .unwrap_or_default()
        .to_string();

    let vol = parse_optional_field::<i32>(meta, "mvol")?.map(|percent| percent as f64 / 100.0);

    Ok(BgmInfo {
        filename,
        vol,
        offset: parse_field(meta, "o")?,
        preview_offset: parse_field(meta, "po")?,
        preview_duration: parse_field(meta, "plength")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meta() -> ChartMeta {
        [
            ("title", "Song"),
            ("artist", "Artist"),
            ("effect", "Charter"),
            ("jacket", "jacket.png"),
            ("illustrator", "Painter"),
            ("difficulty", "extended"),
            ("level", "17"),
            ("t", "180"),
            ("m", "song.ogg;song_f.ogg"),
            ("o", "-120"),
            ("po", "30000"),
            ("plength", "15000"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_map_meta() {
        let info = map_meta(&sample_meta(), 180.0).unwrap();
        assert_eq!(info.title, "Song");
        assert_eq!(info.chart_author, "Charter");
        assert_eq!(info.level, 17);
        assert_eq!(info.difficulty.short_name, "EX");
        assert_eq!(info.difficulty.idx, 2);
        assert_eq!(info.disp_bpm, None);
        assert_eq!(info.std_bpm, None);
        assert_eq!(info.information, None);
        assert!(info.title_translit.is_empty());
    }

    #[test]
    fn test_unknown_difficulty_is_not_an_error() {
        let mut meta = sample_meta();
        meta.insert("difficulty", "gravity");
        let info = map_meta(&meta, 180.0).unwrap();
        assert_eq!(info.difficulty.name, "Infinite");
        assert_eq!(info.difficulty.idx, 3);
    }

    #[test]
    fn test_malformed_level_names_field() {
        let mut meta = sample_meta();
        meta.insert("level", "17+");
        match map_meta(&meta, 180.0) {
            Err(Error::MalformedNumber { field, raw }) => {
                assert_eq!(field, "level");
                assert_eq!(raw, "17+");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_missing_title() {
        let meta: ChartMeta = [("difficulty", "light")].into_iter().collect();
        assert!(matches!(
            map_meta(&meta, 120.0),
            Err(Error::MissingField { field }) if field == "title"
        ));
    }

    #[test]
    fn test_optional_fields() {
        let mut meta = sample_meta();
        meta.insert("to", "175.5");
        meta.insert("total", "210");
        meta.insert("information", "remix");

        let info = map_meta(&meta, 180.0).unwrap();
        assert_eq!(info.std_bpm, Some(175.5));
        assert_eq!(info.information.as_deref(), Some("remix"));
        assert_eq!(map_gauge(&meta).unwrap().total, Some(210));
        assert_eq!(map_gauge(&sample_meta()).unwrap().total, None);
    }

    #[test]
    fn test_map_bgm() {
        let mut meta = sample_meta();
        let bgm = map_bgm(&meta).unwrap();
        assert_eq!(bgm.filename, "song.ogg");
        assert_eq!(bgm.offset, -120);
        assert_eq!(bgm.preview_offset, 30000);
        assert_eq!(bgm.preview_duration, 15000);
        assert_eq!(bgm.vol, None);

        meta.insert("mvol", "75");
        assert_eq!(map_bgm(&meta).unwrap().vol, Some(0.75));

        meta.insert("mvol", "loud");
        assert!(matches!(map_bgm(&meta), Err(Error::MalformedNumber { .. })));
    }
}
