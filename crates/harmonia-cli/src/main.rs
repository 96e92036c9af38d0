// SPDX-License-Identifier: GPL-3.0-or-later

//! Thin orchestrator binary: walks a directory tree, builds one `Item` per
//! audio file it finds (title from the filename; no real tag reading, see
//! module docs), runs the album tagger against MusicBrainz for each leaf
//! directory, and prints the resulting recommendation. This is NOT the
//! interactive import UI — no review loop, no persistence, no menu.

use anyhow::Result;
use clap::Parser;
use harmonia_autotag::tag_album;
use harmonia_config::AppConfig;
use harmonia_domain::Item;
use harmonia_musicbrainz::MusicBrainzClient;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Debug, Parser)]
#[command(name = "harmonia", about = "Autotagging core demo CLI")]
struct Cli {
    /// Directory to walk looking for albums (one leaf folder = one album).
    directory: PathBuf,

    /// Optional TOML config file (see harmonia-config for the schema).
    #[arg(long)]
    config: Option<PathBuf>,
}

const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "flac", "ogg", "m4a"];

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Groups audio files by their parent directory: each group is treated as
/// one candidate album. Mirrors the out-of-scope "directory walker"
/// contract (yields (folder, items) pairs; unreadable entries are skipped).
fn albums_in_dir(root: &Path) -> Vec<(PathBuf, Vec<Item>)> {
    let mut by_folder: std::collections::BTreeMap<PathBuf, Vec<Item>> = std::collections::BTreeMap::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() || !is_audio_file(entry.path()) {
            continue;
        }

        let Some(folder) = entry.path().parent() else {
            continue;
        };

        let title = entry
            .path()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        by_folder.entry(folder.to_path_buf()).or_default().push(Item {
            title,
            ..Default::default()
        });
    }

    by_folder.into_iter().collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config: AppConfig = harmonia_config::load(cli.config.as_deref())?;

    let catalog = MusicBrainzClient::builder()
        .base_url(config.musicbrainz.base_url.clone())
        .rate_limit_interval(std::time::Duration::from_millis(
            config.musicbrainz.rate_limit_interval_ms,
        ))
        .timeout(std::time::Duration::from_secs(config.musicbrainz.timeout_secs))
        .build()?;
    let external = harmonia_autotag::NullCandidateSource;

    let albums = albums_in_dir(&cli.directory);
    if albums.is_empty() {
        warn!(target: "cli", directory = %cli.directory.display(), "no audio files found");
        return Ok(());
    }

    for (folder, items) in albums {
        info!(target: "cli", folder = %folder.display(), items = items.len(), "tagging album");

        let result = tag_album(&items, &config.autotag, &catalog, &external, None, None).await;

        match result {
            Ok(result) => {
                println!(
                    "{}: {} candidate(s), recommendation = {}",
                    folder.display(),
                    result.candidates.len(),
                    result.recommendation
                );
                if let Some(best) = result.candidates.first() {
                    println!(
                        "  best match: {} - {} (distance {:.4})",
                        best.album.artist, best.album.album, best.distance
                    );
                }
            }
            Err(e) => {
                warn!(target: "cli", folder = %folder.display(), error = %e, "tagging failed");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn groups_audio_files_by_parent_directory() {
        let dir = tempdir().unwrap();
        let album_dir = dir.path().join("Radiohead - OK Computer");
        std::fs::create_dir_all(&album_dir).unwrap();
        std::fs::write(album_dir.join("01 Airbag.mp3"), b"").unwrap();
        std::fs::write(album_dir.join("02 Paranoid Android.flac"), b"").unwrap();
        std::fs::write(album_dir.join("cover.jpg"), b"").unwrap();

        let albums = albums_in_dir(dir.path());
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].1.len(), 2);
    }

    #[test]
    fn ignores_non_audio_extensions() {
        assert!(is_audio_file(Path::new("track.mp3")));
        assert!(!is_audio_file(Path::new("cover.jpg")));
        assert!(!is_audio_file(Path::new("README")));
    }
}
