//! # CLI Module
//!
//! This module provides the command-line interface layer for the Spotify
//! artwork downloader. It implements all user-facing commands and
//! coordinates between the authorization session, the Spotify Web API
//! layer, and the artwork/manifest management components.
//!
//! ## Command Categories
//!
//! ### Authorization
//!
//! - [`auth`] - Runs the OAuth implicit-grant handshake and reports the
//!   outcome. Tokens are held in memory only, so this is a connectivity
//!   check rather than a login: every command authorizes itself.
//!
//! ### Playlist Operations
//!
//! - [`playlists`] - Lists the current user's playlists as a numbered
//!   table. The numbers are what `download --playlist` accepts.
//!
//! ### Download Operations
//!
//! - [`download`] - The end-to-end flow: authorize, pick a playlist (flag
//!   or interactive selection), resolve the output directory, write the
//!   track manifest and tracklist, then download every distinct artwork.
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Artwork Set, Downloads, Manifests)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command delegates to the management and API modules while handling
//! user interaction, progress feedback, and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! - **Fatal before artifacts**: authorization failures, catalog errors,
//!   and an uncreatable output directory end the run via `error!`
//! - **Isolated after**: once downloading starts, a failed artwork is
//!   reported with a warning and the batch continues; the run ends with a
//!   "N of M" summary instead of aborting
//! - **Manifests first**: `trackinfo.json` and `tracklist.txt` are written
//!   before any download, so metadata survives a failed batch
//!
//! ## Usage Patterns
//!
//! ```bash
//! sartdl auth                                  # verify the handshake works
//! sartdl playlists                             # see the numbered listing
//! sartdl download                              # fully interactive
//! sartdl download --playlist 3 --output ./art  # scripted
//! sartdl download --playlist 3 --output ./art --clean
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Authorization and catalog retrieval
//! - [`crate::management`] - Artwork dedup, downloads, manifests
//! - [`crate::types`] - Data structures and type definitions
//! - [`crate::config`] - Timeouts and endpoint configuration

mod auth;
mod download;
mod playlists;

pub use auth::auth;
pub use download::download;
pub use playlists::playlists;
