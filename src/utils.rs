use rand::{Rng, distr::Alphanumeric};

use crate::types::{Artist, ImageObject};

#[cfg(windows)]
pub const RESERVED_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[cfg(not(windows))]
pub const RESERVED_FILENAME_CHARS: &[char] = &['/', '\0'];

pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn sanitize_filename(name: &str, reserved: &[char]) -> String {
    name.chars().filter(|c| !reserved.contains(c)).collect()
}

pub fn join_artists(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// Ties on area resolve to the last image in input order.
pub fn find_best_image(images: &[ImageObject]) -> Option<&ImageObject> {
    images
        .iter()
        .max_by_key(|img| img.width.unwrap_or(0) as u64 * img.height.unwrap_or(0) as u64)
}
