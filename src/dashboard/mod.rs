//! Songs dashboard: turns user gestures into API calls and folds the
//! results into [`DashboardState`].
//!
//! State sits behind a mutex that is never held across an `await`, so a
//! renderer can take a [`Dashboard::snapshot`] while a call is in flight.
//! Overlapping loads are not fenced: whichever response arrives last wins.

pub mod state;

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::api::ApiClient;
use crate::models::{EntityId, Song};

pub use state::{
    DashboardState, LoadPhase, Tab, DEFAULT_VOLUME, LOAD_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE,
};

/// Completion reported to the history endpoint when a song is picked.
const PLAY_COMPLETION_PERCENTAGE: u8 = 100;

/// Result of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggle {
    /// The song was not liked and now is.
    Liked,
    /// The song was liked and no longer is.
    Unliked,
    /// The call failed; the local set is unchanged.
    Failed,
}

/// Controller for the songs dashboard.
#[derive(Debug, Clone)]
pub struct Dashboard {
    api: ApiClient,
    state: Arc<Mutex<DashboardState>>,
}

impl Dashboard {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(DashboardState::default())),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Copy of the current render state.
    pub fn snapshot(&self) -> DashboardState {
        self.update(|s| s.clone())
    }

    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    /// Initial load: the song list and the liked set.
    pub async fn mount(&self) {
        tokio::join!(self.load_songs(), self.load_liked_songs());
    }

    /// Primary load of the unfiltered song list.
    pub async fn load_songs(&self) {
        self.update(DashboardState::begin_load);

        match self.api.songs().get_all_songs().await {
            Ok(songs) => self.update(|s| s.apply_songs(songs, true)),
            Err(e) => {
                error!(error = %e, "Error loading songs");
                self.update(|s| s.apply_failure(LOAD_FAILED_MESSAGE));
            }
        }
    }

    /// The "Refresh" action of the empty state.
    pub async fn refresh(&self) {
        self.load_songs().await;
    }

    /// Replace the liked set with the backend's. Failures are only logged.
    pub async fn load_liked_songs(&self) {
        match self.api.activity().get_liked_songs().await {
            Ok(likes) => {
                debug!(count = likes.len(), "Loaded liked songs");
                self.update(|s| s.replace_liked(likes.into_iter().map(|l| l.entity_id)));
            }
            Err(e) => warn!(error = %e, "Error loading liked songs"),
        }
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.update(|s| s.search_query = query);
    }

    /// Search with the stored query text.
    ///
    /// Blank text reloads the unfiltered list; anything else searches with
    /// the trimmed text. Either way the list is replaced wholesale.
    pub async fn submit_search(&self) {
        let query = self.update(|s| s.search_query.trim().to_string());
        if query.is_empty() {
            self.load_songs().await;
            return;
        }

        self.update(DashboardState::begin_load);

        match self.api.songs().search_songs(&query).await {
            Ok(songs) => self.update(|s| s.apply_songs(songs, false)),
            Err(e) => {
                error!(query = %query, error = %e, "Search error");
                self.update(|s| s.apply_failure(SEARCH_FAILED_MESSAGE));
            }
        }
    }

    /// Set the query text and submit it.
    pub async fn search(&self, query: impl Into<String>) {
        self.set_search_query(query);
        self.submit_search().await;
    }

    /// Make `song` current and playing, then record the play in the
    /// background.
    ///
    /// The history call never affects play state; its failure is only
    /// logged. The returned handle may be awaited or dropped. Must be called
    /// from within a Tokio runtime.
    pub fn play_song(&self, song: Song) -> JoinHandle<()> {
        let song_id = song.song_id;
        let duration = song.duration_seconds;
        self.update(|s| s.select_song(song));

        let api = self.api.clone();
        tokio::spawn(async move {
            if let Err(e) = api
                .activity()
                .add_to_listening_history(song_id, duration, PLAY_COMPLETION_PERCENTAGE)
                .await
            {
                warn!(song_id, error = %e, "Error tracking playback");
            }
        })
    }

    /// Like or unlike `song_id` depending on current local membership.
    ///
    /// The local set changes once the call succeeds, without re-fetching
    /// the server's list. A failed call is logged and leaves the set alone.
    pub async fn toggle_like(&self, song_id: EntityId) -> LikeToggle {
        let liked = self.update(|s| s.is_liked(song_id));

        let result = if liked {
            self.api.activity().unlike_song(song_id).await
        } else {
            self.api.activity().like_song(song_id).await
        };

        match result {
            Ok(_) => {
                self.update(|s| s.set_liked(song_id, !liked));
                if liked {
                    LikeToggle::Unliked
                } else {
                    LikeToggle::Liked
                }
            }
            Err(e) => {
                warn!(song_id, error = %e, "Error toggling like");
                LikeToggle::Failed
            }
        }
    }

    pub fn toggle_playback(&self) -> bool {
        self.update(DashboardState::toggle_playback)
    }

    pub fn set_volume(&self, volume: u8) {
        self.update(|s| s.set_volume(volume));
    }

    pub fn set_tab(&self, tab: Tab) {
        self.update(|s| s.set_tab(tab));
    }

    pub fn toggle_sidebar(&self) -> bool {
        self.update(DashboardState::toggle_sidebar)
    }

    /// Backdrop click.
    pub fn close_sidebar(&self) {
        self.update(DashboardState::close_sidebar);
    }

    pub fn dismiss_error(&self) {
        self.update(DashboardState::dismiss_error);
    }

    /// Songs to render for the active tab.
    pub fn visible_songs(&self) -> Vec<Song> {
        self.update(|s| s.visible_songs().into_iter().cloned().collect())
    }

    /// Log out through the API, which also clears the session.
    pub async fn logout(&self) {
        if let Err(e) = self.api.auth().logout().await {
            warn!(error = %e, "Logout call failed");
        }
    }
}
