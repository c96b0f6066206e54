//! User activity calls: likes and listening history.

use reqwest::Method;
use serde_json::Value;

use super::ApiClient;
use crate::error::Result;
use crate::models::{EntityId, EntityRef, EntityType, HistoryEntry, Like, ListenEvent};

/// Number of history entries requested when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Activity call group.
pub struct ActivityApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ActivityApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Record a play of `song_id`. The values are sent as given.
    pub async fn add_to_listening_history(
        &self,
        song_id: EntityId,
        duration_played: u32,
        completion_percentage: u8,
    ) -> Result<Value> {
        let event = ListenEvent {
            song_id,
            duration_played,
            completion_percentage,
        };
        self.client.post_json("/activity/listen", &event).await
    }

    pub async fn like_song(&self, song_id: EntityId) -> Result<Value> {
        self.client
            .post_json("/activity/like", &EntityRef::song(song_id))
            .await
    }

    pub async fn unlike_song(&self, song_id: EntityId) -> Result<Value> {
        self.client
            .delete(&format!("/activity/like/{}/{}", EntityType::Song, song_id))
            .await
    }

    pub async fn get_liked_songs(&self) -> Result<Vec<Like>> {
        self.client.get("/activity/likes").await
    }

    /// Most recent plays, newest first. `None` asks for
    /// [`DEFAULT_HISTORY_LIMIT`] entries.
    pub async fn get_listening_history(&self, limit: Option<u32>) -> Result<Vec<HistoryEntry>> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        let request = self
            .client
            .request(Method::GET, "/activity/history")
            .query(&[("limit", limit)]);
        self.client.send(request).await
    }
}
