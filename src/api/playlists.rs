//! Playlist calls. Plain CRUD, the client keeps no playlist state.

use serde_json::Value;

use super::ApiClient;
use crate::error::Result;
use crate::models::playlist::PlaylistSongRef;
use crate::models::{EntityId, NewPlaylist, Playlist};

/// Playlist call group.
pub struct PlaylistsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PlaylistsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_user_playlists(&self) -> Result<Vec<Playlist>> {
        self.client.get("/playlists").await
    }

    /// Create a playlist. Use [`NewPlaylist::new`] for a public one.
    pub async fn create_playlist(&self, playlist: &NewPlaylist) -> Result<Value> {
        self.client.post_json("/playlists", playlist).await
    }

    pub async fn add_song_to_playlist(
        &self,
        playlist_id: EntityId,
        song_id: EntityId,
    ) -> Result<Value> {
        self.client
            .post_json(
                &format!("/playlists/{}/songs", playlist_id),
                &PlaylistSongRef { song_id },
            )
            .await
    }

    pub async fn remove_song_from_playlist(
        &self,
        playlist_id: EntityId,
        song_id: EntityId,
    ) -> Result<Value> {
        self.client
            .delete(&format!("/playlists/{}/songs/{}", playlist_id, song_id))
            .await
    }

    pub async fn delete_playlist(&self, playlist_id: EntityId) -> Result<Value> {
        self.client
            .delete(&format!("/playlists/{}", playlist_id))
            .await
    }
}
