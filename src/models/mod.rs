//! Data models for AlgoRythm API requests and responses.
//!
//! The backend owns these records; the client only checks their shape.

pub mod activity;
pub mod album;
pub mod artist;
pub mod common;
pub mod playlist;
pub mod song;
pub mod user;

// Re-exports for convenience
pub use activity::{EntityRef, EntityType, HistoryEntry, Like, ListenEvent};
pub use album::Album;
pub use artist::Artist;
pub use common::{EntityId, MessageResponse};
pub use playlist::{NewPlaylist, Playlist};
pub use song::{format_duration, Song};
pub use user::{LoginResponse, Profile, RegisterResponse, User};
