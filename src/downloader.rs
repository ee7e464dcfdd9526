use std::path::Path;
use std::process::Command;

use anyhow::Result;

use crate::types::VideoItem;

// Printed by yt-dlp when --download-archive already lists the video.
const ARCHIVE_SKIP_MARKER: &str = "has already been recorded in the archive";

#[derive(Debug)]
pub enum DownloadStatus {
    DownloadSkipped { title: String },
    DownloadFailed { title: String, error_message: String },
    DownloadFinished { title: String },
}

pub fn download_audio(
    item: &VideoItem,
    target_dir: Option<&Path>,
    archive_file: Option<&Path>,
) -> Result<DownloadStatus> {
    let output = Command::new("yt-dlp")
        .args(download_args(&item.url, target_dir, archive_file))
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    Ok(classify(&item.title, output.status.success(), &stdout, &stderr))
}

fn download_args(
    url: &str,
    target_dir: Option<&Path>,
    archive_file: Option<&Path>,
) -> Vec<String> {
    // Without a target directory the template stays relative, so yt-dlp
    // writes into the current working directory.
    let output_template = match target_dir {
        Some(dir) => format!("{}/%(title)s.%(ext)s", dir.display()),
        None => "%(title)s.%(ext)s".to_string(),
    };

    let mut args = vec![
        "-f".to_string(),
        "bestaudio/best".to_string(),
        "-x".to_string(),
        "--audio-format".to_string(),
        "m4a".to_string(),
        "-o".to_string(),
        output_template,
        "--no-warnings".to_string(),
        "--ignore-errors".to_string(),
    ];

    if let Some(archive_file) = archive_file {
        args.push("--download-archive".to_string());
        args.push(archive_file.display().to_string());
    }

    args.push("--".to_string());
    args.push(url.to_string());

    args
}

fn classify(title: &str, success: bool, stdout: &str, stderr: &str) -> DownloadStatus {
    let is_skipped = stdout.contains(ARCHIVE_SKIP_MARKER);

    if success {
        if is_skipped {
            DownloadStatus::DownloadSkipped {
                title: title.to_string(),
            }
        } else {
            DownloadStatus::DownloadFinished {
                title: title.to_string(),
            }
        }
    } else {
        DownloadStatus::DownloadFailed {
            title: title.to_string(),
            error_message: stderr.to_string(),
        }
    }
}
