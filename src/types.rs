use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tokio::sync::{Mutex, oneshot};

#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub enum CallbackEvent {
    TokenReceived {
        access_token: String,
        token_type: String,
        expires_in: u64,
        state: Option<String>,
    },
    ErrorReceived {
        error: String,
        state: Option<String>,
    },
}

// The first callback takes the sender; later deliveries find the slot empty.
pub type CallbackSlot = Arc<Mutex<Option<oneshot::Sender<CallbackEvent>>>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPlaylistsResponse {
    pub items: Vec<PlaylistObject>,
    pub next: Option<String>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<ImageObject>,
    pub owner: OwnerObject,
    pub tracks: PlaylistTracksRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerObject {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistEntry>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub track: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    pub album: AlbumObject,
    pub artists: Vec<ArtistObject>,
    pub track_number: u32,
    pub disc_number: u32,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistObject>,
    #[serde(default)]
    pub images: Vec<ImageObject>,
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageObject {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artists: Vec<Artist>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub album: Album,
    pub artists: Vec<Artist>,
    pub release_date: String,
    #[serde(rename = "number")]
    pub track_number: u32,
    pub genre: String,
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    #[serde(rename = "diskNumber")]
    pub disc_number: String,
}

impl From<ArtistObject> for Artist {
    fn from(artist: ArtistObject) -> Self {
        Artist {
            id: artist.id,
            name: artist.name,
        }
    }
}

impl From<AlbumObject> for Album {
    fn from(album: AlbumObject) -> Self {
        let image_url = crate::utils::find_best_image(&album.images)
            .map(|img| img.url.clone())
            .unwrap_or_default();

        Album {
            id: album.id,
            title: album.name,
            artists: album.artists.into_iter().map(Artist::from).collect(),
            image_url,
        }
    }
}

impl From<TrackObject> for Track {
    fn from(track: TrackObject) -> Self {
        let release_date = track.album.release_date.clone();

        Track {
            id: track.id,
            title: track.name,
            album: Album::from(track.album),
            artists: track.artists.into_iter().map(Artist::from).collect(),
            release_date,
            track_number: track.track_number,
            genre: String::new(), // playlist track objects carry no genre
            duration_ms: track.duration_ms,
            disc_number: track.disc_number.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub total_tracks: u64,
    pub cover: Option<PlaylistCover>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistCover {
    pub url: String,
    pub display_name: String,
}

impl From<PlaylistObject> for PlaylistSummary {
    fn from(playlist: PlaylistObject) -> Self {
        let owner = playlist
            .owner
            .display_name
            .unwrap_or_else(|| playlist.owner.id.clone());

        let cover = crate::utils::find_best_image(&playlist.images).map(|img| PlaylistCover {
            url: img.url.clone(),
            display_name: format!("{} - {}", owner, playlist.name),
        });

        PlaylistSummary {
            id: playlist.id,
            name: playlist.name,
            owner,
            total_tracks: playlist.tracks.total,
            cover,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkItem {
    pub source_url: String,
    pub display_name: String,
    pub file_name: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub name: String,
    pub owner: String,
    pub tracks: u64,
}
