use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Album {
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, alias = "releaseInfo")]
    pub release_info: String,
    #[serde(default, alias = "albumCover")]
    pub album_cover: String,
    #[serde(default)]
    pub songs: Vec<Song>,
}

impl Album {
    pub fn song_count_label(&self) -> String {
        match self.songs.len() {
            1 => "1 song".to_string(),
            n => format!("{n} songs"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Song {
    pub title: String,
    /// Display duration in seconds; the media element reports the real one.
    #[serde(default, deserialize_with = "seconds_from_number_or_text")]
    pub duration: Option<f64>,
    #[serde(alias = "audioSrc")]
    pub audio_src: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeconds {
    Number(f64),
    Text(String),
}

/// Catalog files carry durations either as numbers or as numeric strings.
fn seconds_from_number_or_text<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawSeconds>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawSeconds::Number(value)) => Some(value),
        Some(RawSeconds::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    })
}
