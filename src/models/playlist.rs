//! Playlist models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::EntityId;
use super::song::Song;

/// Body of a playlist creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
    pub is_public: bool,
}

impl NewPlaylist {
    /// A public playlist, the default visibility.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, description: S2) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_public: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }
}

/// Body of an add-song request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistSongRef {
    pub song_id: EntityId,
}

/// A user playlist.
///
/// Fields the client does not know about are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(alias = "playlistId")]
    pub id: EntityId,

    #[serde(default, alias = "playlistName")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub is_public: bool,

    #[serde(default)]
    pub songs: Vec<Song>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
