use std::{path::PathBuf, time::Duration};

use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{
    config, error, info,
    management::{self, ArtworkSet, DownloadOutcome},
    spotify, success,
    types::{PlaylistSummary, Token, Track},
    warning,
};

pub async fn download(playlist: Option<usize>, output: Option<PathBuf>, clean: bool) {
    println!("Spotify API: Artwork downloader");
    println!("===============================");
    println!();

    let token = match spotify::auth::authorize().await {
        Ok(token) => token,
        Err(e) => {
            error!("Authorization failed: {}", e);
        }
    };
    success!("Authorization successful!");

    let playlists = fetch_playlists(&token).await;
    if playlists.is_empty() {
        info!("You have no playlists to download artworks from.");
        return;
    }

    let selected = select_playlist(&playlists, playlist);
    info!("Good choice! So, let me see...");

    let tracks = fetch_tracks(&token, &selected).await;

    let artworks = ArtworkSet::build(&tracks, selected.cover.as_ref());
    info!("Found {} unique artwork(s).", artworks.count());

    let dest = resolve_destination(output);
    if let Err(e) = async_fs::create_dir_all(&dest).await {
        error!("Cannot create output directory {}: {}", dest.display(), e);
    }

    if clean {
        if let Err(e) = management::clean_destination(&dest).await {
            warning!("Failed to clean output directory: {}", e);
        }
    }

    // Manifests go first so the metadata survives a failed batch.
    if let Err(e) =
        management::write_track_metadata(&tracks, &dest.join("trackinfo.json")).await
    {
        warning!("Failed to write trackinfo.json: {}", e);
    }
    if let Err(e) = management::write_tracklist(&tracks, &dest.join("tracklist.txt")).await {
        warning!("Failed to write tracklist.txt: {}", e);
    }

    let client = match Client::builder()
        .timeout(Duration::from_secs(config::download_timeout_secs()))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build download client: {}", e);
        }
    };

    let results = management::download_all(&client, artworks.items(), &dest).await;

    for result in &results {
        if let DownloadOutcome::Failed(e) = &result.outcome {
            warning!("Could not download {}: {}", result.item.source_url, e);
        }
    }

    let succeeded = results.iter().filter(|r| r.is_success()).count();
    if succeeded == results.len() {
        success!("Downloaded {} of {} artwork(s).", succeeded, results.len());
        println!("All download tasks completed! Have a nice day!");
    } else {
        warning!("Downloaded {} of {} artwork(s).", succeeded, results.len());
    }
}

async fn fetch_playlists(token: &Token) -> Vec<PlaylistSummary> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching your playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match spotify::playlists::get_current_user_playlists(&token.access_token).await {
        Ok(playlists) => {
            pb.finish_and_clear();
            playlists
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    }
}

async fn fetch_tracks(token: &Token, playlist: &PlaylistSummary) -> Vec<Track> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching tracks of {}...", playlist.name));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match spotify::playlists::get_playlist_tracks(&token.access_token, &playlist.id).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlist tracks: {}", e);
        }
    }
}

fn select_playlist(playlists: &[PlaylistSummary], index: Option<usize>) -> PlaylistSummary {
    // --playlist takes the 1-based numbers shown by `sartdl playlists`
    if let Some(index) = index {
        if index == 0 || index > playlists.len() {
            error!(
                "Playlist {} does not exist; pick between 1 and {}.",
                index,
                playlists.len()
            );
        }
        return playlists[index - 1].clone();
    }

    let labels: Vec<String> = playlists
        .iter()
        .map(|p| format!("{} ({}, {} tracks)", p.name, p.owner, p.total_tracks))
        .collect();

    let selection = Select::new()
        .with_prompt("Choose your playlist")
        .default(0)
        .items(&labels)
        .interact();

    match selection {
        Ok(idx) => playlists[idx].clone(),
        Err(e) => {
            error!("Playlist selection aborted: {}", e);
        }
    }
}

fn resolve_destination(output: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = output {
        return dir;
    }

    let entered = Input::<String>::new()
        .with_prompt("Output directory where artworks will be downloaded")
        .interact_text();

    match entered {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            error!("No output directory given: {}", e);
        }
    }
}
