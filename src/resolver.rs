use std::process::Command;

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::types::VideoItem;

// Flat playlist extraction yields either a playlist document with an
// `entries` array or a single video document without one.
#[derive(Deserialize)]
struct Metadata {
    title: Option<String>,
    webpage_url: Option<String>,
    entries: Option<Vec<MetadataEntry>>,
}

#[derive(Deserialize)]
struct MetadataEntry {
    title: Option<String>,
    url: Option<String>,
}

pub fn resolve(url: &str) -> Result<Vec<VideoItem>> {
    let output = Command::new("yt-dlp")
        .args([
            "--dump-single-json",
            "--flat-playlist",
            "--no-warnings",
            "--quiet",
            "--",
            url,
        ])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        return Err(anyhow!(
            "Resolving \"{}\" failed: {}",
            url,
            stderr.trim()
        ));
    }

    parse_metadata(&output.stdout)
}

fn parse_metadata(raw: &[u8]) -> Result<Vec<VideoItem>> {
    let metadata: Metadata = serde_json::from_slice(raw)?;

    if let Some(entries) = metadata.entries {
        entries.into_iter().map(entry_to_item).collect()
    } else {
        let item = VideoItem {
            title: require(metadata.title, "title")?,
            url: require(metadata.webpage_url, "webpage_url")?,
        };

        Ok(vec![item])
    }
}

fn entry_to_item(entry: MetadataEntry) -> Result<VideoItem> {
    Ok(VideoItem {
        title: require(entry.title, "title")?,
        url: require(entry.url, "url")?,
    })
}

fn require(field: Option<String>, name: &str) -> Result<String> {
    field
        .filter(|value| !value.is_empty())
        .ok_or_else(|| anyhow!("Video metadata is missing \"{}\"", name))
}
