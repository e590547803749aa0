mod artwork;
mod download;
mod manifest;

pub use artwork::ArtworkSet;
pub use download::DownloadError;
pub use download::DownloadOutcome;
pub use download::DownloadResult;
pub use download::clean_destination;
pub use download::download_all;
pub use manifest::ManifestError;
pub use manifest::tracklist_lines;
pub use manifest::write_track_metadata;
pub use manifest::write_tracklist;
