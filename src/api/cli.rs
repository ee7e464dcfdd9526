use clap::Parser;

pub struct Cli;

impl Cli {
    pub fn run(&self) -> CliProgram {
        CliProgram::parse()
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Downloads a Youtube playlist or video to a folder. The playlist or video must be either public or unlisted to successfully download."
)]
pub struct CliProgram {
    #[arg(value_name = "URL", help = "Youtube link to either a video or playlist")]
    pub url: String,

    #[arg(
        short = 'f',
        long,
        value_name = "DIR_PATH",
        help = "Folder to download audio files into (default: current directory)"
    )]
    pub file_path: Option<String>,

    #[arg(
        long,
        value_name = "FILE_PATH",
        help = "Archive file tracking already downloaded videos (default: archive.txt)"
    )]
    pub archive_file: Option<String>,

    #[arg(
        long,
        help = "Skip reading from archive file to detect duplicate downloads",
        default_value_t = false
    )]
    pub skip_archive: bool,

    #[arg(
        long,
        short,
        value_name = "FILE_PATH",
        help = "Custom path to config file"
    )]
    pub config: Option<String>,
}
