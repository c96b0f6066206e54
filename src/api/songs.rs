//! Song catalogue calls.

use reqwest::Method;
use tracing::debug;

use super::ApiClient;
use crate::error::Result;
use crate::models::{EntityId, Song};

/// Song call group.
pub struct SongsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SongsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all_songs(&self) -> Result<Vec<Song>> {
        let songs: Vec<Song> = self.client.get("/songs").await?;
        debug!(count = songs.len(), "Fetched songs");
        Ok(songs)
    }

    pub async fn get_song_by_id(&self, id: EntityId) -> Result<Song> {
        self.client.get(&format!("/songs/{}", id)).await
    }

    /// Search by free text. The query is sent URL-encoded as `q`.
    pub async fn search_songs(&self, query: &str) -> Result<Vec<Song>> {
        let request = self
            .client
            .request(Method::GET, "/songs/search")
            .query(&[("q", query)]);
        let songs: Vec<Song> = self.client.send(request).await?;
        debug!(query = %query, results = songs.len(), "Search complete");
        Ok(songs)
    }

    pub async fn get_songs_by_artist(&self, artist_id: EntityId) -> Result<Vec<Song>> {
        self.client
            .get(&format!("/songs/artist/{}", artist_id))
            .await
    }

    pub async fn get_songs_by_album(&self, album_id: EntityId) -> Result<Vec<Song>> {
        self.client.get(&format!("/songs/album/{}", album_id)).await
    }
}
