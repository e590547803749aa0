use sartdl::management::ArtworkSet;
use sartdl::types::{Album, Artist, PlaylistCover, Track};

// Helper function to create a test track whose album carries one artwork URL
fn create_test_track(id: &str, title: &str, artist: &str, album: &str, image_url: &str) -> Track {
    let artists = vec![Artist {
        id: format!("{}_artist", id),
        name: artist.to_string(),
    }];

    Track {
        id: id.to_string(),
        title: title.to_string(),
        album: Album {
            id: format!("{}_album", id),
            title: album.to_string(),
            artists: artists.clone(),
            image_url: image_url.to_string(),
        },
        artists,
        release_date: "2020-01-01".to_string(),
        track_number: 1,
        genre: String::new(),
        duration_ms: 180_000,
        disc_number: "1".to_string(),
    }
}

// Helper function to create a test playlist cover
fn create_test_cover(url: &str, display_name: &str) -> PlaylistCover {
    PlaylistCover {
        url: url.to_string(),
        display_name: display_name.to_string(),
    }
}

#[test]
fn test_build_dedupes_shared_artwork() {
    // Two tracks off the same album share one artwork URL
    let tracks = vec![
        create_test_track("t1", "One More Time", "Daft Punk", "Discovery", "https://img/discovery"),
        create_test_track("t2", "Aerodynamic", "Daft Punk", "Discovery", "https://img/discovery"),
        create_test_track("t3", "Windowlicker", "Aphex Twin", "Windowlicker", "https://img/windowlicker"),
    ];

    let set = ArtworkSet::build(&tracks, None);

    assert_eq!(set.count(), 2);
    assert_eq!(set.items()[0].source_url, "https://img/discovery");
    assert_eq!(set.items()[1].source_url, "https://img/windowlicker");
}

#[test]
fn test_build_first_seen_names_the_artwork() {
    // The same URL under two differently tagged albums; the earliest wins
    let tracks = vec![
        create_test_track("t1", "Intro", "Artist A", "First Album", "https://img/shared"),
        create_test_track("t2", "Outro", "Artist B", "Second Album", "https://img/shared"),
    ];

    let set = ArtworkSet::build(&tracks, None);

    assert_eq!(set.count(), 1);
    assert_eq!(set.items()[0].display_name, "Artist A - First Album");
    assert_eq!(set.items()[0].file_name, "Artist A - First Album.jpg");
}

#[test]
fn test_build_preserves_first_seen_order() {
    let tracks = vec![
        create_test_track("t1", "A", "One", "Album One", "https://img/1"),
        create_test_track("t2", "B", "Two", "Album Two", "https://img/2"),
        create_test_track("t3", "C", "One", "Album One", "https://img/1"),
        create_test_track("t4", "D", "Three", "Album Three", "https://img/3"),
    ];

    let set = ArtworkSet::build(&tracks, None);

    let urls: Vec<&str> = set.items().iter().map(|i| i.source_url.as_str()).collect();
    assert_eq!(urls, vec!["https://img/1", "https://img/2", "https://img/3"]);
}

#[test]
fn test_build_skips_tracks_without_artwork() {
    // Albums can come back without any image
    let tracks = vec![
        create_test_track("t1", "No Art", "Artist", "Bootleg", ""),
        create_test_track("t2", "Has Art", "Artist", "Album", "https://img/a"),
    ];

    let set = ArtworkSet::build(&tracks, None);

    assert_eq!(set.count(), 1);
    assert_eq!(set.items()[0].source_url, "https://img/a");
}

#[test]
fn test_build_appends_distinct_cover_last() {
    let tracks = vec![create_test_track("t1", "Song", "Artist", "Album", "https://img/album")];
    let cover = create_test_cover("https://img/cover", "someone - Mixtape");

    let set = ArtworkSet::build(&tracks, Some(&cover));

    assert_eq!(set.count(), 2);
    let last = &set.items()[1];
    assert_eq!(last.source_url, "https://img/cover");
    assert_eq!(last.display_name, "someone - Mixtape");
    assert_eq!(last.file_name, "someone - Mixtape.jpg");
}

#[test]
fn test_build_skips_cover_matching_track_art() {
    // Playlists without a custom cover reuse an album art as their cover
    let tracks = vec![create_test_track("t1", "Song", "Artist", "Album", "https://img/album")];
    let cover = create_test_cover("https://img/album", "someone - Mixtape");

    let set = ArtworkSet::build(&tracks, Some(&cover));

    assert_eq!(set.count(), 1);
    assert_eq!(set.items()[0].display_name, "Artist - Album");
}

#[test]
fn test_build_shared_art_and_matching_cover() {
    // Two tracks share one artwork, a third brings its own, and the
    // playlist cover reuses the shared one; only two downloads remain
    let tracks = vec![
        create_test_track("a", "Track A", "Artist", "Shared Album", "https://img/u1"),
        create_test_track("b", "Track B", "Artist", "Shared Album", "https://img/u1"),
        create_test_track("c", "Track C", "Other", "Other Album", "https://img/u2"),
    ];
    let cover = create_test_cover("https://img/u1", "owner - playlist");

    let set = ArtworkSet::build(&tracks, Some(&cover));

    assert_eq!(set.count(), 2);
    let urls: Vec<&str> = set.items().iter().map(|i| i.source_url.as_str()).collect();
    assert_eq!(urls, vec!["https://img/u1", "https://img/u2"]);
}

#[test]
fn test_build_sanitizes_file_names() {
    let tracks = vec![create_test_track("t1", "Song", "AC/DC", "Back In Black", "https://img/acdc")];

    let set = ArtworkSet::build(&tracks, None);

    let item = &set.items()[0];
    assert!(!item.file_name.contains('/'));
    assert!(item.file_name.ends_with(".jpg"));

    // The URL is never touched by sanitization
    assert_eq!(item.source_url, "https://img/acdc");
}

#[test]
fn test_build_empty_inputs() {
    let set = ArtworkSet::build(&[], None);
    assert_eq!(set.count(), 0);
    assert!(set.items().is_empty());

    // A cover alone still yields one artwork
    let cover = create_test_cover("https://img/cover", "someone - Empty Playlist");
    let set = ArtworkSet::build(&[], Some(&cover));
    assert_eq!(set.count(), 1);
    assert_eq!(set.items()[0].display_name, "someone - Empty Playlist");
}

#[test]
fn test_into_items_hands_over_the_batch() {
    let tracks = vec![
        create_test_track("t1", "Song", "Artist", "Album", "https://img/a"),
        create_test_track("t2", "Other", "Other Artist", "Other Album", "https://img/b"),
    ];

    let set = ArtworkSet::build(&tracks, None);
    let items = set.into_items();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].file_name, "Artist - Album.jpg");
}
