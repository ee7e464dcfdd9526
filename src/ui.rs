use crossterm::style::Stylize;

use crate::downloader::DownloadStatus;

pub fn print_resolved(count: usize) -> () {
    println!("Resolved {} video(s)", count);
}

pub fn print_started(position: usize, total: usize, title: &str) -> () {
    println!("[{}/{}] Downloading {}", position, total, title);
}

pub fn print_status(status: &DownloadStatus) -> () {
    match status {
        DownloadStatus::DownloadSkipped { title } => {
            println!("{}", format!("skipped {} (already in archive)", title).grey());
        }
        DownloadStatus::DownloadFailed {
            title,
            error_message,
        } => {
            println!(
                "{}",
                format!("failed {} because {}", title, first_line(error_message)).red()
            );
        }
        DownloadStatus::DownloadFinished { title } => {
            println!("{}", format!("finished {}", title).green());
        }
    }
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("").trim()
}

pub struct Summary {
    finished: u32,
    skipped: u32,
    failed: u32,
}

impl Summary {
    pub fn new() -> Summary {
        Summary {
            finished: 0,
            skipped: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, status: &DownloadStatus) -> () {
        match status {
            DownloadStatus::DownloadFinished { .. } => self.finished += 1,
            DownloadStatus::DownloadSkipped { .. } => self.skipped += 1,
            DownloadStatus::DownloadFailed { .. } => self.failed += 1,
        }
    }

    pub fn print(&self) -> () {
        println!(
            "Done: {} finished, {} skipped, {} failed",
            self.finished, self.skipped, self.failed
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::downloader::DownloadStatus;

    use super::{first_line, Summary};

    #[test]
    fn it_counts_statuses_by_kind() {
        let mut summary = Summary::new();

        summary.record(&DownloadStatus::DownloadFinished {
            title: "First".to_string(),
        });
        summary.record(&DownloadStatus::DownloadSkipped {
            title: "Second".to_string(),
        });
        summary.record(&DownloadStatus::DownloadFailed {
            title: "Third".to_string(),
            error_message: "ERROR: Video unavailable".to_string(),
        });
        summary.record(&DownloadStatus::DownloadFinished {
            title: "Fourth".to_string(),
        });

        assert_eq!(summary.finished, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn it_takes_the_first_line_of_an_error() {
        let message = "ERROR: Video unavailable\nERROR: something else";

        assert_eq!(first_line(message), "ERROR: Video unavailable");
    }

    #[test]
    fn it_handles_an_empty_error() {
        assert_eq!(first_line(""), "");
    }
}
