//! Song model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::EntityId;

/// A song as returned by the backend.
///
/// Only the fields the dashboard renders are required. The rest are
/// optional because list and search endpoints do not always include them.
/// Anything else the backend sends (release date, lyrics, timestamps) is
/// kept untyped in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Song ID.
    pub song_id: EntityId,

    /// Song title.
    pub song_title: String,

    /// Performing artist.
    pub artist_id: EntityId,

    /// Duration in whole seconds.
    pub duration_seconds: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<EntityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_quality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disc_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub explicit_content: bool,

    #[serde(default)]
    pub is_premium_only: bool,

    #[serde(default)]
    pub play_count: u64,

    #[serde(default)]
    pub like_count: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Song {
    /// Create a song with the fields the dashboard renders.
    pub fn new<S: Into<String>>(
        song_id: EntityId,
        song_title: S,
        artist_id: EntityId,
        duration_seconds: u32,
    ) -> Self {
        Self {
            song_id,
            song_title: song_title.into(),
            artist_id,
            duration_seconds,
            ..Default::default()
        }
    }

    /// Get duration formatted as M:SS.
    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration_seconds)
    }
}

/// Format a duration in seconds as `m:ss`.
///
/// Minutes are not padded, seconds always take two digits.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(125), "2:05");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn test_song_from_backend_json() {
        let json = r#"{
            "songId": 7,
            "songTitle": "Midnight Dreams",
            "albumId": 3,
            "artistId": 12,
            "durationSeconds": 225,
            "audioFileUrl": "/audio/7.mp3",
            "explicitContent": false,
            "isPremiumOnly": true,
            "playCount": 42,
            "likeCount": 5
        }"#;

        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.song_id, 7);
        assert_eq!(song.song_title, "Midnight Dreams");
        assert_eq!(song.album_id, Some(3));
        assert!(song.is_premium_only);
        assert_eq!(song.duration_formatted(), "3:45");
    }

    #[test]
    fn test_untyped_fields_land_in_extra() {
        let json = r#"{
            "songId": 3,
            "songTitle": "Dated",
            "artistId": 1,
            "durationSeconds": 61,
            "releaseDate": {"year": 2023, "month": 5, "day": 1},
            "lyrics": "la la",
            "createdAt": "May 1, 2023, 10:00:00 AM"
        }"#;

        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.duration_formatted(), "1:01");
        assert_eq!(song.extra["releaseDate"]["year"], 2023);
        assert!(song.extra.contains_key("lyrics"));
        assert!(song.extra.contains_key("createdAt"));
    }

    #[test]
    fn test_minimal_song() {
        let json = r#"{"songId": 1, "songTitle": "A", "artistId": 2, "durationSeconds": 59}"#;
        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song, Song::new(1, "A", 2, 59));
    }
}
