//! Render state of the songs dashboard.
//!
//! Everything here is synchronous and backend-free; the controller in the
//! parent module folds call results into it.

use std::collections::HashSet;

use crate::models::{EntityId, Song};

/// Error shown when the primary song load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load songs. Please try again.";

/// Error shown when a search fails.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Player volume when the dashboard opens.
pub const DEFAULT_VOLUME: u8 = 70;

/// Navigation tabs of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Discover,
    Library,
    Liked,
}

impl Tab {
    /// Section heading shown above the song grid.
    pub fn heading(&self) -> &'static str {
        match self {
            Tab::Discover => "Discover Music",
            Tab::Library => "Your Library",
            Tab::Liked => "Liked Songs",
        }
    }
}

/// Phase of the primary song-list load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Snapshot of everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub songs: Vec<Song>,
    /// Client-side cache of the songs the user likes.
    pub liked: HashSet<EntityId>,
    pub current_song: Option<Song>,
    pub is_playing: bool,
    pub search_query: String,
    pub phase: LoadPhase,
    pub error: Option<String>,
    pub sidebar_open: bool,
    pub active_tab: Tab,
    pub volume: u8,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            songs: Vec::new(),
            liked: HashSet::new(),
            current_song: None,
            is_playing: false,
            search_query: String::new(),
            phase: LoadPhase::Idle,
            error: None,
            sidebar_open: true,
            active_tab: Tab::Discover,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Replace the song list wholesale with a call result.
    ///
    /// `clear_error` is set by the primary load; searches leave a shown
    /// error in place.
    pub fn apply_songs(&mut self, songs: Vec<Song>, clear_error: bool) {
        self.songs = songs;
        if clear_error {
            self.error = None;
        }
        self.phase = LoadPhase::Success;
    }

    /// Record a failed load or search. The current list is kept.
    pub fn apply_failure(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.phase = LoadPhase::Error;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Songs to render: the whole list, or only liked songs on the liked tab.
    pub fn visible_songs(&self) -> Vec<&Song> {
        self.songs
            .iter()
            .filter(|song| self.active_tab != Tab::Liked || self.liked.contains(&song.song_id))
            .collect()
    }

    /// True when the "No songs found" state shows.
    pub fn is_empty(&self) -> bool {
        !self.is_loading() && self.songs.is_empty()
    }

    pub fn heading(&self) -> &'static str {
        self.active_tab.heading()
    }

    pub fn is_liked(&self, song_id: EntityId) -> bool {
        self.liked.contains(&song_id)
    }

    pub fn replace_liked(&mut self, ids: impl IntoIterator<Item = EntityId>) {
        self.liked = ids.into_iter().collect();
    }

    pub fn set_liked(&mut self, song_id: EntityId, liked: bool) {
        if liked {
            self.liked.insert(song_id);
        } else {
            self.liked.remove(&song_id);
        }
    }

    /// Make `song` current and start playing it.
    pub fn select_song(&mut self, song: Song) {
        self.current_song = Some(song);
        self.is_playing = true;
    }

    /// Whether `song_id` is the current song and playing.
    pub fn is_song_playing(&self, song_id: EntityId) -> bool {
        self.is_playing
            && self
                .current_song
                .as_ref()
                .is_some_and(|s| s.song_id == song_id)
    }

    /// Flip play/pause. Without a current song there is nothing to toggle.
    pub fn toggle_playback(&mut self) -> bool {
        if self.current_song.is_some() {
            self.is_playing = !self.is_playing;
        }
        self.is_playing
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs() -> Vec<Song> {
        vec![
            Song::new(1, "Midnight Dreams", 10, 225),
            Song::new(2, "Electric Pulse", 11, 252),
            Song::new(3, "Ocean Breeze", 12, 208),
        ]
    }

    #[test]
    fn test_defaults() {
        let state = DashboardState::default();
        assert_eq!(state.phase, LoadPhase::Idle);
        assert!(state.sidebar_open);
        assert_eq!(state.active_tab, Tab::Discover);
        assert_eq!(state.volume, 70);
        assert_eq!(state.heading(), "Discover Music");
    }

    #[test]
    fn test_liked_tab_filters_by_local_set() {
        let mut state = DashboardState::default();
        state.apply_songs(songs(), true);
        state.replace_liked([2, 99]);

        assert_eq!(state.visible_songs().len(), 3);

        state.set_tab(Tab::Liked);
        let visible: Vec<_> = state.visible_songs().iter().map(|s| s.song_id).collect();
        assert_eq!(visible, vec![2]);
        assert_eq!(state.heading(), "Liked Songs");
    }

    #[test]
    fn test_library_tab_shows_everything() {
        let mut state = DashboardState::default();
        state.apply_songs(songs(), true);
        state.set_tab(Tab::Library);
        assert_eq!(state.visible_songs().len(), 3);
        assert_eq!(state.heading(), "Your Library");
    }

    #[test]
    fn test_failure_keeps_list_and_sets_error() {
        let mut state = DashboardState::default();
        state.apply_songs(songs(), true);
        state.begin_load();
        assert!(state.is_loading());

        state.apply_failure(SEARCH_FAILED_MESSAGE);
        assert!(!state.is_loading());
        assert_eq!(state.phase, LoadPhase::Error);
        assert_eq!(state.songs.len(), 3);
        assert_eq!(state.error.as_deref(), Some(SEARCH_FAILED_MESSAGE));
    }

    #[test]
    fn test_search_result_keeps_error_but_load_clears_it() {
        let mut state = DashboardState::default();
        state.apply_failure(LOAD_FAILED_MESSAGE);

        state.apply_songs(songs(), false);
        assert!(state.error.is_some());

        state.apply_songs(songs(), true);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_select_and_toggle_playback() {
        let mut state = DashboardState::default();
        assert!(!state.toggle_playback());

        state.select_song(Song::new(1, "A", 1, 60));
        assert!(state.is_song_playing(1));
        assert!(!state.is_song_playing(2));

        assert!(!state.toggle_playback());
        assert!(!state.is_song_playing(1));
        assert!(state.toggle_playback());
    }

    #[test]
    fn test_like_set_membership() {
        let mut state = DashboardState::default();
        state.set_liked(5, true);
        assert!(state.is_liked(5));
        state.set_liked(5, false);
        assert!(!state.is_liked(5));
    }

    #[test]
    fn test_empty_state_hidden_while_loading() {
        let mut state = DashboardState::default();
        assert!(state.is_empty());
        state.begin_load();
        assert!(!state.is_empty());
    }

    #[test]
    fn test_sidebar_and_volume() {
        let mut state = DashboardState::default();
        assert!(!state.toggle_sidebar());
        assert!(state.toggle_sidebar());
        state.close_sidebar();
        assert!(!state.sidebar_open);

        state.set_volume(150);
        assert_eq!(state.volume, 100);
    }
}
