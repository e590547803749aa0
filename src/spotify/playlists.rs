use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{PlaylistSummary, PlaylistTracksResponse, Track, TrackObject, UserPlaylistsResponse},
};

/// Retrieves all playlists of the authenticated user.
///
/// Fetches the current user's playlists page by page (50 per request,
/// following the `next` links) and maps each into a [`PlaylistSummary`]
/// with its cover artwork resolved. The result preserves Spotify's
/// listing order, which is also the order the CLI numbers playlists in.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<PlaylistSummary>)` - All playlists of the user
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Other
/// errors are propagated immediately.
///
/// # Example
///
/// ```
/// let playlists = get_current_user_playlists(&token.access_token).await?;
/// println!("you have {} playlists", playlists.len());
/// ```
pub async fn get_current_user_playlists(
    token: &str,
) -> Result<Vec<PlaylistSummary>, reqwest::Error> {
    let mut playlists = Vec::new();
    let mut next_url = Some(format!(
        "{uri}/me/playlists?limit=50",
        uri = &config::spotify_apiurl()
    ));

    while let Some(api_url) = next_url {
        let response = get_with_retry(&api_url, token).await?;
        let res = response.json::<UserPlaylistsResponse>().await?;

        playlists.extend(res.items.into_iter().map(PlaylistSummary::from));
        next_url = res.next;
    }

    Ok(playlists)
}

/// Retrieves every track of a playlist, mapped into domain values.
///
/// Fetches the playlist's entries page by page (100 per request, following
/// the `next` links). Each entry is probed before deserialization: podcast
/// episodes and other non-track playables are skipped since they carry no
/// album artwork, and entries that do not deserialize as full tracks
/// (e.g. local files without catalog ids) are skipped as well.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Spotify id of the playlist to read
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - The playlist's tracks in playlist order
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Retry Logic
///
/// Implements the same retry logic as [`get_current_user_playlists`] for
/// 502 Bad Gateway errors.
pub async fn get_playlist_tracks(
    token: &str,
    playlist_id: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let mut tracks = Vec::new();
    let mut next_url = Some(format!(
        "{uri}/playlists/{id}/tracks?limit=100",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    ));

    while let Some(api_url) = next_url {
        let response = get_with_retry(&api_url, token).await?;
        let res = response.json::<PlaylistTracksResponse>().await?;

        for entry in res.items {
            let Some(value) = entry.track else {
                continue;
            };

            // Episodes carry no album artwork; only full tracks pass.
            if value.get("type").and_then(|t| t.as_str()) != Some("track") {
                continue;
            }

            if let Ok(track) = serde_json::from_value::<TrackObject>(value) {
                tracks.push(Track::from(track));
            }
        }

        next_url = res.next;
    }

    Ok(tracks)
}

// GET with bearer auth, retrying 502s after a delay.
async fn get_with_retry(api_url: &str, token: &str) -> Result<reqwest::Response, reqwest::Error> {
    loop {
        let client = Client::new();
        let response = client.get(api_url).bearer_auth(token).send().await;

        match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => return Ok(valid_response),
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => return Err(err), // network or reqwest error
        }
    }
}
