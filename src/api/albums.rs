//! Album calls.

use super::ApiClient;
use crate::error::Result;
use crate::models::{Album, EntityId, Song};

/// Album call group.
pub struct AlbumsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AlbumsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all_albums(&self) -> Result<Vec<Album>> {
        self.client.get("/albums").await
    }

    pub async fn get_album_by_id(&self, id: EntityId) -> Result<Album> {
        self.client.get(&format!("/albums/{}", id)).await
    }

    pub async fn get_albums_by_artist(&self, artist_id: EntityId) -> Result<Vec<Album>> {
        self.client
            .get(&format!("/albums/artist/{}", artist_id))
            .await
    }

    /// Songs of an album. Same endpoint as
    /// [`SongsApi::get_songs_by_album`](super::SongsApi::get_songs_by_album).
    pub async fn get_album_songs(&self, album_id: EntityId) -> Result<Vec<Song>> {
        self.client.songs().get_songs_by_album(album_id).await
    }
}
