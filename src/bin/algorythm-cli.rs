use std::path::PathBuf;
use std::sync::Arc;

use algorythm::models::NewPlaylist;
use algorythm::{ApiClient, ClientConfig, Dashboard, FileSession, Router, Session};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "algorythm-cli")]
#[command(about = "CLI for the AlgoRythm music streaming backend", long_about = None)]
struct Cli {
    /// Backend base URL (can also be set via ALGORYTHM_BASE_URL env var)
    #[arg(long, env = "ALGORYTHM_BASE_URL", default_value = algorythm::DEFAULT_BASE_URL)]
    base_url: String,

    /// Where the signed-in user record is kept
    #[arg(long, env = "ALGORYTHM_SESSION", default_value = ".algorythm/session.json")]
    session: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register {
        username: String,
        email: String,
        password: String,
    },
    /// Log in and remember the user
    Login { email: String, password: String },
    /// Log out and forget the user
    Logout,
    /// Show the signed-in user's profile
    Profile,
    /// List songs, optionally filtered
    Songs {
        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,

        /// Only songs by this artist
        #[arg(long, conflicts_with = "search")]
        artist: Option<i64>,

        /// Only songs on this album
        #[arg(long, conflicts_with_all = ["search", "artist"])]
        album: Option<i64>,
    },
    /// Show one song
    Song { id: i64 },
    /// Record a play of a song
    Play { id: i64 },
    /// Like a song
    Like { id: i64 },
    /// Remove a like from a song
    Unlike { id: i64 },
    /// List liked songs
    Likes,
    /// Show listening history
    History {
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Manage playlists
    Playlists {
        #[command(subcommand)]
        action: PlaylistAction,
    },
    /// List artists, or show one
    Artists { id: Option<i64> },
    /// List albums, or show one
    Albums {
        id: Option<i64>,

        /// Only albums by this artist
        #[arg(long, conflicts_with = "id")]
        artist: Option<i64>,
    },
    /// Follow an artist
    Follow { id: i64 },
    /// Unfollow an artist
    Unfollow { id: i64 },
}

#[derive(Subcommand)]
enum PlaylistAction {
    /// List your playlists
    List,
    /// Create a playlist
    Create {
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Create it private
        #[arg(long)]
        private: bool,
    },
    /// Add a song to a playlist
    Add { playlist: i64, song: i64 },
    /// Remove a song from a playlist
    Remove { playlist: i64, song: i64 },
    /// Delete a playlist
    Delete { playlist: i64 },
}

fn print_songs(songs: &[algorythm::Song]) {
    if songs.is_empty() {
        println!("No songs found");
        return;
    }
    for (i, song) in songs.iter().enumerate() {
        println!(
            "{}. {} (ID: {}, artist {}) {}",
            i + 1,
            song.song_title,
            song.song_id,
            song.artist_id,
            song.duration_formatted()
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algorythm=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let session = Arc::new(Session::new(
        FileSession::new(cli.session.clone()),
        Arc::new(Router::default()),
    ));
    let api = ApiClient::new(ClientConfig::new(&cli.base_url), session)?;

    match cli.command {
        Commands::Register {
            username,
            email,
            password,
        } => {
            let result = api.auth().register(&username, &email, &password).await?;
            println!("✅ Registered {} (user ID: {})", username, result.user_id);
        }
        Commands::Login { email, password } => {
            let result = api.auth().login(&email, &password).await?;
            println!("✅ Logged in as {}", result.username);
        }
        Commands::Logout => {
            api.auth().logout().await?;
            println!("Logged out");
        }
        Commands::Profile => {
            let profile = api.auth().get_profile().await?;
            println!("{} <{}>", profile.username, profile.email);
            if let Some(name) = profile.full_name.filter(|n| !n.is_empty()) {
                println!("   Name: {}", name);
            }
            if let Some(plan) = profile.subscription_type {
                println!("   Plan: {}", plan);
            }
            println!("   Verified: {}", profile.is_verified);
        }
        Commands::Songs {
            search,
            artist,
            album,
        } => {
            let songs = match (search, artist, album) {
                (Some(query), _, _) if !query.trim().is_empty() => {
                    api.songs().search_songs(query.trim()).await?
                }
                (_, Some(artist_id), _) => api.songs().get_songs_by_artist(artist_id).await?,
                (_, _, Some(album_id)) => api.songs().get_songs_by_album(album_id).await?,
                _ => api.songs().get_all_songs().await?,
            };
            print_songs(&songs);
        }
        Commands::Song { id } => {
            let song = api.songs().get_song_by_id(id).await?;
            print_songs(std::slice::from_ref(&song));
        }
        Commands::Play { id } => {
            let song = api.songs().get_song_by_id(id).await?;
            let dashboard = Dashboard::new(api);
            let tracking = dashboard.play_song(song.clone());
            println!("▶ Now playing: {} ({})", song.song_title, song.duration_formatted());
            tracking.await?;
        }
        Commands::Like { id } => {
            api.activity().like_song(id).await?;
            println!("❤️ Liked song {}", id);
        }
        Commands::Unlike { id } => {
            api.activity().unlike_song(id).await?;
            println!("🤍 Unliked song {}", id);
        }
        Commands::Likes => {
            let likes = api.activity().get_liked_songs().await?;
            for like in likes {
                println!("Song {}", like.entity_id);
            }
        }
        Commands::History { limit } => {
            let history = api.activity().get_listening_history(limit).await?;
            for entry in history {
                println!(
                    "Song {} - played {} ({:.0}%)",
                    entry.song_id,
                    algorythm::format_duration(entry.duration_played),
                    entry.completion_percentage
                );
            }
        }
        Commands::Playlists { action } => match action {
            PlaylistAction::List => {
                for playlist in api.playlists().get_user_playlists().await? {
                    println!(
                        "{}. {} ({} songs{})",
                        playlist.id,
                        playlist.name,
                        playlist.songs.len(),
                        if playlist.is_public { "" } else { ", private" }
                    );
                }
            }
            PlaylistAction::Create {
                name,
                description,
                private,
            } => {
                let mut request = NewPlaylist::new(&name, description);
                if private {
                    request = request.private();
                }
                api.playlists().create_playlist(&request).await?;
                println!("✅ Created playlist {}", name);
            }
            PlaylistAction::Add { playlist, song } => {
                api.playlists().add_song_to_playlist(playlist, song).await?;
                println!("✅ Added song {} to playlist {}", song, playlist);
            }
            PlaylistAction::Remove { playlist, song } => {
                api.playlists()
                    .remove_song_from_playlist(playlist, song)
                    .await?;
                println!("Removed song {} from playlist {}", song, playlist);
            }
            PlaylistAction::Delete { playlist } => {
                api.playlists().delete_playlist(playlist).await?;
                println!("Deleted playlist {}", playlist);
            }
        },
        Commands::Artists { id: Some(id) } => {
            let artist = api.artists().get_artist_by_id(id).await?;
            println!("{} (ID: {})", artist.name, artist.id);
            print_songs(&api.artists().get_artist_songs(id).await?);
        }
        Commands::Artists { id: None } => {
            for artist in api.artists().get_all_artists().await? {
                println!("{}. {}", artist.id, artist.name);
            }
        }
        Commands::Albums { id: Some(id), .. } => {
            let album = api.albums().get_album_by_id(id).await?;
            println!("{} (ID: {})", album.name, album.id);
            print_songs(&api.albums().get_album_songs(id).await?);
        }
        Commands::Albums { id: None, artist } => {
            let albums = match artist {
                Some(artist_id) => api.albums().get_albums_by_artist(artist_id).await?,
                None => api.albums().get_all_albums().await?,
            };
            for album in albums {
                println!("{}. {}", album.id, album.name);
            }
        }
        Commands::Follow { id } => {
            api.artists().follow_artist(id).await?;
            println!("Following artist {}", id);
        }
        Commands::Unfollow { id } => {
            api.artists().unfollow_artist(id).await?;
            println!("Unfollowed artist {}", id);
        }
    }

    Ok(())
}
