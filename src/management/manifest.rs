use std::{fmt, io, path::Path};

use crate::{types::Track, utils};

#[derive(Debug)]
pub enum ManifestError {
    IoError(io::Error),
    SerdeError(serde_json::Error),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::IoError(e) => write!(f, "io error: {}", e),
            ManifestError::SerdeError(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for ManifestError {}

impl From<io::Error> for ManifestError {
    fn from(err: io::Error) -> Self {
        ManifestError::IoError(err)
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        ManifestError::SerdeError(err)
    }
}

pub async fn write_track_metadata(tracks: &[Track], path: &Path) -> Result<(), ManifestError> {
    let json = serde_json::to_string_pretty(tracks)?;
    async_fs::write(path, json).await?;
    Ok(())
}

// Indexes are 1-based and padded to the digit width of the total count.
pub fn tracklist_lines(tracks: &[Track]) -> Vec<String> {
    let width = tracks.len().to_string().len();

    tracks
        .iter()
        .enumerate()
        .map(|(idx, track)| {
            let minutes = track.duration_ms / 60_000;
            let seconds = (track.duration_ms / 1_000) % 60;
            format!(
                "{index:0width$}. {artists} - {title} ({minutes}:{seconds:02})",
                index = idx + 1,
                width = width,
                artists = utils::join_artists(&track.artists),
                title = track.title,
                minutes = minutes,
                seconds = seconds,
            )
        })
        .collect()
}

pub async fn write_tracklist(tracks: &[Track], path: &Path) -> Result<(), ManifestError> {
    let mut contents = tracklist_lines(tracks).join("\n");
    contents.push('\n');
    async_fs::write(path, contents).await?;
    Ok(())
}
