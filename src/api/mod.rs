//! API client for the AlgoRythm backend.
//!
//! [`ApiClient`] is the single point of HTTP egress. Each call group is a
//! thin borrowed view over it:
//! - [`AuthApi`]: register, login, logout, profile
//! - [`SongsApi`]: catalogue listing and search
//! - [`ActivityApi`]: likes and listening history
//! - [`PlaylistsApi`]: playlist CRUD
//! - [`ArtistsApi`] / [`AlbumsApi`]: read-mostly catalogue, follows

pub mod activity;
pub mod albums;
pub mod artists;
pub mod auth;
pub mod client;
pub mod playlists;
pub mod songs;

pub use activity::{ActivityApi, DEFAULT_HISTORY_LIMIT};
pub use albums::AlbumsApi;
pub use artists::ArtistsApi;
pub use auth::AuthApi;
pub use client::ApiClient;
pub use playlists::PlaylistsApi;
pub use songs::SongsApi;
