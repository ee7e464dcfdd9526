use std::path::Path;

use anyhow::{anyhow, Result};
use downloader::DownloadStatus;
use types::VideoItem;

use crate::{api::cli::Cli, config::config::Config};

mod api;
mod archive;
mod config;
mod downloader;
mod resolver;
mod types;
mod ui;
mod youtube;

fn main() -> Result<()> {
    let cli = Cli {};
    let program = cli.run();

    let config = Config::new_from_file(program.config)?;

    if !youtube::is_youtube_url(&program.url)? {
        return Err(anyhow!(
            "\"{}\" is not a Youtube video or playlist link",
            program.url
        ));
    }

    let target_dir = config.get_target_dir(program.file_path);
    let archive_file = config.get_archive_file(program.archive_file);

    let items = resolver::resolve(&program.url)?;

    if !program.skip_archive {
        archive::initialize_archive(&archive_file)?;
    }

    ui::print_resolved(items.len());

    let archive_file = if program.skip_archive {
        None
    } else {
        Some(archive_file.as_path())
    };

    let mut summary = ui::Summary::new();

    for (position, item) in items.iter().enumerate() {
        ui::print_started(position + 1, items.len(), &item.title);

        let status = download_item(item, target_dir.as_deref(), archive_file);

        ui::print_status(&status);
        summary.record(&status);
    }

    summary.print();

    Ok(())
}

// A failing item must not abort the batch, so downloader errors are folded
// into a failed status here instead of bubbling up.
fn download_item(
    item: &VideoItem,
    target_dir: Option<&Path>,
    archive_file: Option<&Path>,
) -> DownloadStatus {
    match downloader::download_audio(item, target_dir, archive_file) {
        Ok(status) => status,
        Err(error) => DownloadStatus::DownloadFailed {
            title: item.title.clone(),
            error_message: error.to_string(),
        },
    }
}
