//! User activity models: likes, follows, listening history.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::EntityId;

/// Kind of entity a like or follow refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Song,
    Artist,
}

impl EntityType {
    /// Name used on the wire and in URL paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Song => "Song",
            EntityType::Artist => "Artist",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of like and follow requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    pub entity_type: EntityType,
    pub entity_id: EntityId,
}

impl EntityRef {
    pub fn song(song_id: EntityId) -> Self {
        Self {
            entity_type: EntityType::Song,
            entity_id: song_id,
        }
    }

    pub fn artist(artist_id: EntityId) -> Self {
        Self {
            entity_type: EntityType::Artist,
            entity_id: artist_id,
        }
    }
}

/// An entry of the liked list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub entity_id: EntityId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of a listening-history record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenEvent {
    pub song_id: EntityId,
    /// Seconds actually played.
    pub duration_played: u32,
    /// 0 to 100.
    pub completion_percentage: u8,
}

/// An entry of the listening history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub song_id: EntityId,

    #[serde(default)]
    pub duration_played: u32,

    #[serde(default)]
    pub completion_percentage: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listened_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_ref_wire_format() {
        let body = serde_json::to_value(EntityRef::song(9)).unwrap();
        assert_eq!(body, json!({"entityType": "Song", "entityId": 9}));

        let body = serde_json::to_value(EntityRef::artist(3)).unwrap();
        assert_eq!(body, json!({"entityType": "Artist", "entityId": 3}));
    }

    #[test]
    fn test_listen_event_wire_format() {
        let event = ListenEvent {
            song_id: 1,
            duration_played: 180,
            completion_percentage: 100,
        };
        assert_eq!(
            serde_json::to_value(event).unwrap(),
            json!({"songId": 1, "durationPlayed": 180, "completionPercentage": 100})
        );
    }

    #[test]
    fn test_like_needs_only_entity_id() {
        let like: Like = serde_json::from_str(r#"{"entityId": 11}"#).unwrap();
        assert_eq!(like.entity_id, 11);
        assert_eq!(like.entity_type, None);
    }
}
