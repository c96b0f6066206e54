//! Artist model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::EntityId;
use super::song::Song;

/// An artist record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    #[serde(alias = "artistId")]
    pub id: EntityId,

    #[serde(default, alias = "artistName")]
    pub name: String,

    /// Present only when the backend embeds the catalogue.
    #[serde(default)]
    pub songs: Vec<Song>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_accepts_backend_key_names() {
        let artist: Artist =
            serde_json::from_str(r#"{"artistId": 12, "artistName": "Luna Wave", "bio": "x"}"#)
                .unwrap();
        assert_eq!(artist.id, 12);
        assert_eq!(artist.name, "Luna Wave");
        assert!(artist.extra.contains_key("bio"));
    }
}
