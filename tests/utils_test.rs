use sartdl::types::{Artist, ImageObject, PlaylistTableRow};
use sartdl::utils::*;
use tabled::Table;

// Helper function to create a test image
fn create_test_image(url: &str, width: Option<u32>, height: Option<u32>) -> ImageObject {
    ImageObject {
        url: url.to_string(),
        width,
        height,
    }
}

// Helper function to create a test artist
fn create_test_artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_generate_state_token() {
    let token = generate_state_token();

    // Should be exactly 16 characters
    assert_eq!(token.len(), 16);

    // Should contain only alphanumeric characters
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated tokens should be different
    let token2 = generate_state_token();
    assert_ne!(token, token2);
}

#[test]
fn test_sanitize_filename_removes_reserved() {
    let reserved = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

    assert_eq!(
        sanitize_filename("AC/DC - Back In Black", reserved),
        "ACDC - Back In Black"
    );
    assert_eq!(sanitize_filename("What Is Love?", reserved), "What Is Love");
    assert_eq!(
        sanitize_filename("Mezzanine: Remastered", reserved),
        "Mezzanine Remastered"
    );

    // Characters outside the reserved set pass through untouched
    assert_eq!(
        sanitize_filename("Sigur Rós - Ágætis byrjun", reserved),
        "Sigur Rós - Ágætis byrjun"
    );
}

#[test]
fn test_sanitize_filename_edge_cases() {
    let reserved = &['/', '\0'];

    // Empty input stays empty
    assert_eq!(sanitize_filename("", reserved), "");

    // Input made only of reserved characters collapses to empty
    assert_eq!(sanitize_filename("///", reserved), "");

    // An empty reserved set keeps everything
    assert_eq!(sanitize_filename("a/b", &[]), "a/b");
}

#[test]
fn test_reserved_filename_chars() {
    // The slash is reserved on every platform
    assert!(RESERVED_FILENAME_CHARS.contains(&'/'));
    assert_eq!(sanitize_filename("a/b", RESERVED_FILENAME_CHARS), "ab");
}

#[test]
fn test_join_artists() {
    let single = vec![create_test_artist("a1", "Daft Punk")];
    assert_eq!(join_artists(&single), "Daft Punk");

    let multiple = vec![
        create_test_artist("a1", "Run The Jewels"),
        create_test_artist("a2", "DJ Shadow"),
    ];
    assert_eq!(join_artists(&multiple), "Run The Jewels, DJ Shadow");

    // No artists means an empty string, not a dangling separator
    assert_eq!(join_artists(&[]), "");
}

#[test]
fn test_find_best_image_picks_largest_area() {
    let images = vec![
        create_test_image("small", Some(64), Some(64)),
        create_test_image("large", Some(640), Some(640)),
        create_test_image("medium", Some(300), Some(300)),
    ];

    let best = find_best_image(&images).unwrap();
    assert_eq!(best.url, "large");

    // A wide strip beats a small square on area alone
    let images = vec![
        create_test_image("square", Some(100), Some(100)),
        create_test_image("strip", Some(1000), Some(20)),
    ];
    assert_eq!(find_best_image(&images).unwrap().url, "strip");
}

#[test]
fn test_find_best_image_tie_takes_last() {
    let images = vec![
        create_test_image("first", Some(640), Some(640)),
        create_test_image("second", Some(640), Some(640)),
    ];

    // Equal areas resolve to the later entry
    let best = find_best_image(&images).unwrap();
    assert_eq!(best.url, "second");
}

#[test]
fn test_find_best_image_missing_dimensions() {
    // Unknown dimensions count as zero area
    let images = vec![
        create_test_image("unknown", None, None),
        create_test_image("sized", Some(64), Some(64)),
    ];
    assert_eq!(find_best_image(&images).unwrap().url, "sized");

    // A missing height zeroes the area even when the width is huge
    let images = vec![
        create_test_image("half", Some(4096), None),
        create_test_image("full", Some(10), Some(10)),
    ];
    assert_eq!(find_best_image(&images).unwrap().url, "full");
}

#[test]
fn test_find_best_image_empty() {
    assert!(find_best_image(&[]).is_none());
}

#[test]
fn test_playlist_table_headers() {
    let rows = vec![PlaylistTableRow {
        index: 1,
        name: "Morning".to_string(),
        owner: "ana".to_string(),
        tracks: 12,
    }];

    let table = Table::new(rows).to_string();

    // The position column renders as `#`, never as the field name
    assert!(table.contains('#'));
    assert!(!table.contains("index"));
    assert!(table.contains("name"));
    assert!(table.contains("owner"));
    assert!(table.contains("tracks"));
}
