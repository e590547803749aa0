//! Build script for the Spotify artwork downloader CLI.
//!
//! Copies the configuration template from the crate root into the user's
//! local data directory so that a ready-to-edit example sits next to the
//! `.env` file the application loads at startup.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` into the platform-specific data directory.
///
/// The template is read from the crate root (where Cargo.toml resides) and
/// written to:
/// - Linux: `~/.local/share/sartdl/.env.example`
/// - macOS: `~/Library/Application Support/sartdl/.env.example`
/// - Windows: `%LOCALAPPDATA%/sartdl/.env.example`
///
/// A missing template produces a cargo warning instead of failing the
/// build; directory creation or copy failures are fatal.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (the local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("sartdl");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
