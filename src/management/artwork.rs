use std::collections::HashSet;

use crate::{
    types::{ArtworkItem, PlaylistCover, Track},
    utils,
};

pub struct ArtworkSet {
    items: Vec<ArtworkItem>,
}

impl ArtworkSet {
    // First-seen-wins: the earliest track's album names a shared artwork.
    pub fn build(tracks: &[Track], playlist_cover: Option<&PlaylistCover>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut items = Vec::new();

        for track in tracks {
            let url = &track.album.image_url;
            if url.is_empty() || !seen.insert(url.clone()) {
                continue;
            }

            items.push(Self::item(
                url,
                &format!(
                    "{} - {}",
                    utils::join_artists(&track.album.artists),
                    track.album.title
                ),
            ));
        }

        if let Some(cover) = playlist_cover {
            if seen.insert(cover.url.clone()) {
                items.push(Self::item(&cover.url, &cover.display_name));
            }
        }

        ArtworkSet { items }
    }

    fn item(url: &str, raw_name: &str) -> ArtworkItem {
        let display_name = utils::sanitize_filename(raw_name, utils::RESERVED_FILENAME_CHARS);

        ArtworkItem {
            source_url: url.to_string(),
            file_name: format!("{}.jpg", display_name),
            display_name,
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[ArtworkItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ArtworkItem> {
        self.items
    }
}
