use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyInfo {
    pub name: String,
    pub short_name: String,
    pub idx: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaInfo {
    pub title: String,
    pub title_translit: String,
    pub artist: String,
    pub artist_translit: String,
    pub chart_author: String,
    pub difficulty: DifficultyInfo,
    pub level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disp_bpm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_bpm: Option<f64>,
    pub jacket_filename: String,
    pub jacket_author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,
}
