//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! artwork downloader: the browser-driven authorization handshake and the
//! playlist catalog operations. It handles all HTTP communication,
//! authorization state, error propagation, and transient-failure retries,
//! presenting a clean Rust interface to the CLI layer.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authorization (OAuth 2.0 Implicit Grant)
//!     └── Playlist Operations (Listing, Track Retrieval)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authorization Module
//!
//! [`auth`] - Implements the OAuth 2.0 implicit grant flow:
//! - **Complete Handshake**: Local callback server, browser launch, and a
//!   bounded wait for the redirect, all behind one function call
//! - **One-Shot Resolution**: The first terminal callback (token or error)
//!   resolves the session; duplicates are ignored
//! - **Structured Teardown**: The callback listener is stopped and its port
//!   released on every exit path, including errors and timeouts
//! - **State Validation**: A random `state` parameter is round-tripped and
//!   verified to reject redirects from foreign authorization attempts
//!
//! The implicit grant returns the access token directly in the redirect
//! fragment without a server-side exchange step. There is no refresh token:
//! tokens live for about an hour and are held in memory only, so every
//! command performs a fresh handshake.
//!
//! ### Playlist Module
//!
//! [`playlists`] - Handles catalog retrieval:
//! - **Playlist Listing**: The current user's playlists with full `next`
//!   pagination
//! - **Track Retrieval**: All tracks of a playlist, mapped into immutable
//!   domain values at the boundary; podcast episodes are skipped
//! - **Rate Resilience**: 502 Bad Gateway responses are retried after a
//!   delay; other HTTP errors propagate to the caller
//!
//! ## API Coverage
//!
//! - `GET /me/playlists` - Current user's playlists with pagination
//! - `GET /playlists/{id}/tracks` - Playlist tracks with pagination
//!
//! ## Error Types
//!
//! - [`auth::AuthError`] - Everything that can end the handshake without a
//!   token: bind failures, provider error callbacks, state mismatches,
//!   interruption, timeout
//! - **`reqwest::Error`** - HTTP client errors from catalog operations,
//!   propagated unretried (except 502) so the CLI layer decides how to
//!   present them
//!
//! ## Usage Patterns
//!
//! ```rust,ignore
//! // Authorize (opens the browser, waits for the redirect)
//! let token = spotify::auth::authorize().await?;
//!
//! // Fetch playlists and tracks
//! let playlists = spotify::playlists::get_current_user_playlists(&token).await?;
//! let tracks = spotify::playlists::get_playlist_tracks(&token, &playlists[0].id).await?;
//! ```
//!
//! ## Thread Safety
//!
//! The module is designed for async single-threaded use: all operations are
//! `async`, the callback slot uses `Arc<Mutex<...>>` for safe access from
//! the server task, and there is no global mutable state.
//!
//! ## Security Considerations
//!
//! - **No Client Secret**: The implicit grant never touches a secret
//! - **State Parameter**: Callback redirects must echo the random state
//! - **No Token Persistence**: Bearer tokens are never written to disk
//! - **HTTPS Only**: All API communication uses HTTPS; only the loopback
//!   callback is plain HTTP

pub mod auth;
pub mod playlists;
