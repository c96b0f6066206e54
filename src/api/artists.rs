//! Artist calls, including follow and unfollow.

use serde_json::Value;

use super::ApiClient;
use crate::error::Result;
use crate::models::{Artist, EntityId, EntityRef, EntityType, Song};

/// Artist call group.
pub struct ArtistsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ArtistsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all_artists(&self) -> Result<Vec<Artist>> {
        self.client.get("/artists").await
    }

    pub async fn get_artist_by_id(&self, id: EntityId) -> Result<Artist> {
        self.client.get(&format!("/artists/{}", id)).await
    }

    /// Songs of an artist. Same endpoint as
    /// [`SongsApi::get_songs_by_artist`](super::SongsApi::get_songs_by_artist).
    pub async fn get_artist_songs(&self, artist_id: EntityId) -> Result<Vec<Song>> {
        self.client.songs().get_songs_by_artist(artist_id).await
    }

    pub async fn follow_artist(&self, artist_id: EntityId) -> Result<Value> {
        self.client
            .post_json("/activity/follow", &EntityRef::artist(artist_id))
            .await
    }

    pub async fn unfollow_artist(&self, artist_id: EntityId) -> Result<Value> {
        self.client
            .delete(&format!(
                "/activity/follow/{}/{}",
                EntityType::Artist,
                artist_id
            ))
            .await
    }
}
