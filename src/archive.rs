use std::fs::File;
use std::path::Path;

use anyhow::Result;

// The archive contents belong to yt-dlp; this only guarantees the file
// exists so the first run starts from an empty archive.
pub fn initialize_archive(path: &Path) -> Result<()> {
    if !path.exists() {
        File::create(path)?;
    }

    Ok(())
}
