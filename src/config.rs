//! Configuration management for the Spotify artwork downloader.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Every key has a built-in default
//! matching the Spotify application this tool ships with, so the binary
//! works without any setup; the `.env` file exists for users who register
//! their own application or need a different port.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults

use dotenv;
use std::{env, path::PathBuf};

use crate::warning;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `sartdl/.env`. A missing `.env` file is not an
/// error: the built-in defaults cover every key, and a template is placed
/// next to the expected location at build time. A file that exists but
/// cannot be loaded is reported with a warning and otherwise skipped, so a
/// typo in it never silently disables the overrides.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/sartdl/.env`
/// - macOS: `~/Library/Application Support/sartdl/.env`
/// - Windows: `%LOCALAPPDATA%/sartdl/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment was prepared, or an error string if
/// the parent directory cannot be created.
///
/// # Example
///
/// ```
/// use sartdl::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sartdl/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Defaults cover every key, so a missing file is fine; a present file
    // that fails to load is reported, not fatal.
    if path.exists() {
        if let Err(e) = dotenv::from_path(&path) {
            warning!("Could not load {}: {}", path.display(), e);
        }
    }
    Ok(())
}

/// Returns the address for the local OAuth callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// where the local HTTP server binds for handling OAuth callbacks. The port
/// must match the one in the registered redirect URI.
///
/// # Default
///
/// `127.0.0.1:33727`
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:33727".to_string())
}

/// Returns the Spotify API client ID for authorization.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable. The
/// default is this tool's registered application, whose redirect URI points
/// at `http://localhost:33727/callback`; replace both together.
///
/// # Default
///
/// `22fb770b881a4e60b18e745530f4cc88`
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .unwrap_or_else(|_| "22fb770b881a4e60b18e745530f4cc88".to_string())
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_API_REDIRECT_URI` environment variable which
/// specifies the callback URL Spotify redirects to after user authorization.
/// This must match the redirect URI registered in the Spotify application
/// settings, and its port must match [`server_addr`].
///
/// # Default
///
/// `http://localhost:33727/callback`
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI")
        .unwrap_or_else(|_| "http://localhost:33727/callback".to_string())
}

/// Returns the Spotify API scope permissions.
///
/// Retrieves the `SPOTIFY_API_AUTH_SCOPE` environment variable which defines
/// the scope of permissions requested during authorization. Reading private
/// playlists requires no scope beyond identifying the user.
///
/// # Default
///
/// `user-read-email user-read-private`
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE")
        .unwrap_or_else(|_| "user-read-email user-read-private".to_string())
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_API_AUTH_URL` environment variable which contains
/// the base URL for Spotify's authorization endpoint. This is where users
/// are redirected to grant permissions to the application.
///
/// # Default
///
/// `https://accounts.spotify.com/authorize`
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. All catalog requests are made
/// against this URL.
///
/// # Default
///
/// `https://api.spotify.com/v1`
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns how long to wait for the OAuth browser round-trip, in seconds.
///
/// Retrieves the `AUTH_TIMEOUT_SECONDS` environment variable. An abandoned
/// browser tab resolves into an authorization failure after this long
/// instead of hanging the process forever. Unparsable values fall back to
/// the default.
///
/// # Default
///
/// `120`
pub fn auth_timeout_secs() -> u64 {
    env::var("AUTH_TIMEOUT_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(120)
}

/// Returns the per-request timeout for artwork downloads, in seconds.
///
/// Retrieves the `DOWNLOAD_TIMEOUT_SECONDS` environment variable. A single
/// hung fetch fails that item after this long and the batch moves on.
/// Unparsable values fall back to the default.
///
/// # Default
///
/// `60`
pub fn download_timeout_secs() -> u64 {
    env::var("DOWNLOAD_TIMEOUT_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60)
}
