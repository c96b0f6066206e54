//! Album model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::EntityId;
use super::song::Song;

/// An album record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(alias = "albumId")]
    pub id: EntityId,

    #[serde(default, alias = "albumTitle", alias = "title")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<EntityId>,

    #[serde(default)]
    pub songs: Vec<Song>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
