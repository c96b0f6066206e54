//! # AlgoRythm
//!
//! Client library for the AlgoRythm music streaming backend.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use algorythm::{ApiClient, ClientConfig, Dashboard, FileSession, Router, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Arc::new(Session::new(
//!         FileSession::new(".algorythm/session.json"),
//!         Arc::new(Router::default()),
//!     ));
//!     let api = ApiClient::new(ClientConfig::default(), session)?;
//!     api.auth().login("alice@example.com", "secret").await?;
//!
//!     let dashboard = Dashboard::new(api);
//!     dashboard.mount().await;
//!     dashboard.search("ocean").await;
//!
//!     for song in dashboard.visible_songs() {
//!         println!("{} - {}", song.song_title, song.duration_formatted());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`ApiClient`] - single HTTP egress with bearer injection and 401 handling
//! - [`Session`] - persisted current-user record and login navigation
//! - [`Dashboard`] - dashboard state driven by user gestures
//! - [`models`] - request and response records

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod session;

pub use api::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use dashboard::{Dashboard, DashboardState, LikeToggle, LoadPhase, Tab};
pub use error::{ApiError, Result};
pub use models::{format_duration, Album, Artist, Playlist, Song, User};
pub use session::{FileSession, MemorySession, Navigator, Route, Router, Session, SessionStore};
