use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct AppConfig {
    pub(super) target_dir: Option<String>,
    pub(super) archive_file: Option<String>,
}

impl AppConfig {
    pub fn new_default() -> AppConfig {
        AppConfig {
            target_dir: None,
            archive_file: None,
        }
    }
}
