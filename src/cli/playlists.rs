use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{error, info, spotify, types::PlaylistTableRow};

pub async fn playlists() {
    let token = match spotify::auth::authorize().await {
        Ok(token) => token,
        Err(e) => {
            error!("Authorization failed: {}", e);
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching your playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlists = match spotify::playlists::get_current_user_playlists(&token.access_token).await
    {
        Ok(playlists) => {
            pb.finish_and_clear();
            playlists
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    if playlists.is_empty() {
        info!("You have no playlists.");
        return;
    }

    // convert playlists to table rows, numbered the way `download --playlist`
    // expects them
    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .enumerate()
        .map(|(idx, p)| PlaylistTableRow {
            index: idx + 1,
            name: p.name,
            owner: p.owner,
            tracks: p.total_tracks,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
