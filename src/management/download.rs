use std::{fmt, io, path::Path, time::Duration};

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::types::ArtworkItem;

#[derive(Debug)]
pub enum DownloadError {
    Request(reqwest::Error),
    Write(io::Error),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::Request(e) => write!(f, "request failed: {}", e),
            DownloadError::Write(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl std::error::Error for DownloadError {}

impl From<reqwest::Error> for DownloadError {
    fn from(err: reqwest::Error) -> Self {
        DownloadError::Request(err)
    }
}

impl From<io::Error> for DownloadError {
    fn from(err: io::Error) -> Self {
        DownloadError::Write(err)
    }
}

#[derive(Debug)]
pub struct DownloadResult {
    pub item: ArtworkItem,
    pub outcome: DownloadOutcome,
}

impl DownloadResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, DownloadOutcome::Success)
    }
}

#[derive(Debug)]
pub enum DownloadOutcome {
    Success,
    Failed(DownloadError),
}

// One fetch per item; a failed item never aborts the rest of the batch.
pub async fn download_all(
    client: &Client,
    items: &[ArtworkItem],
    dest: &Path,
) -> Vec<DownloadResult> {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut results = Vec::with_capacity(items.len());

    for (idx, item) in items.iter().enumerate() {
        pb.set_message(format!(
            "Downloading {} ({}/{})...",
            item.display_name,
            idx + 1,
            items.len()
        ));

        let outcome = match fetch_one(client, item, dest).await {
            Ok(()) => DownloadOutcome::Success,
            Err(e) => DownloadOutcome::Failed(e),
        };

        results.push(DownloadResult {
            item: item.clone(),
            outcome,
        });
    }

    pb.finish_and_clear();
    results
}

async fn fetch_one(client: &Client, item: &ArtworkItem, dest: &Path) -> Result<(), DownloadError> {
    let response = client
        .get(&item.source_url)
        .send()
        .await?
        .error_for_status()?;
    let bytes = response.bytes().await?;

    async_fs::write(dest.join(&item.file_name), &bytes).await?;
    Ok(())
}

// Removes plain files only; subdirectories are left alone.
pub async fn clean_destination(dest: &Path) -> Result<(), io::Error> {
    let mut entries = async_fs::read_dir(dest).await?;
    while let Some(entry) = entries.next().await {
        let entry = entry?;
        if entry.file_type().await?.is_file() {
            async_fs::remove_file(entry.path()).await?;
        }
    }

    Ok(())
}
