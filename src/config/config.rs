use home_dir::HomeDirExt;
use std::{io::Write, path::PathBuf};

use anyhow::{anyhow, Result};

use super::app_config::AppConfig;

const DEFAULT_ARCHIVE_FILE: &str = "archive.txt";

pub struct Config {
    config_file: PathBuf,
    app_config: AppConfig,
}

impl Config {
    pub fn new_from_file(config_path: Option<String>) -> Result<Config> {
        if cfg!(target_os = "windows") {
            todo!("Windows is not supported")
        } else {
            if let Some(config_path) = config_path {
                let config_path = PathBuf::from(config_path);

                Config::new(config_path)
            } else {
                Config::new_default()
            }
        }
    }

    pub fn new_default() -> Result<Config> {
        let config_directory_root =
            std::env::var("XDG_CONFIG_HOME").unwrap_or("~/.config".to_string());

        let config_directory =
            PathBuf::from(config_directory_root.expand_home().unwrap()).join("yt-fetch");

        let config_file = config_directory.join("config.toml");

        Config::new(config_file)
    }

    fn new(config_file: PathBuf) -> Result<Config> {
        ensure_dir(&PathBuf::from(config_file.parent().unwrap()))?;

        let app_config: AppConfig = {
            let file_content = ensure_file(
                &config_file,
                toml::to_string_pretty(&AppConfig::new_default()).unwrap(),
            )?;

            toml::from_str(&file_content)?
        };

        let config = Config {
            config_file,
            app_config,
        };

        config.validate().and(Ok(config))
    }

    // CLI flags win over config values, which win over built-in defaults.
    pub fn get_target_dir(&self, cli_path: Option<String>) -> Option<PathBuf> {
        cli_path.map(PathBuf::from).or(self.config_target_dir())
    }

    pub fn get_archive_file(&self, cli_path: Option<String>) -> PathBuf {
        cli_path
            .map(PathBuf::from)
            .or(self.config_archive_file())
            .unwrap_or(PathBuf::from(DEFAULT_ARCHIVE_FILE))
    }

    fn config_target_dir(&self) -> Option<PathBuf> {
        self.app_config
            .target_dir
            .as_ref()
            .map(|p| p.expand_home().unwrap())
    }

    fn config_archive_file(&self) -> Option<PathBuf> {
        self.app_config
            .archive_file
            .as_ref()
            .map(|p| p.expand_home().unwrap())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(target_dir) = self.config_target_dir() {
            if !target_dir.exists() {
                return Err(anyhow!(
                    "Given target_dir (\"{}\") doesn't exist (config file path: \"{}\")",
                    target_dir.display(),
                    self.config_file.display()
                ));
            }
        }

        Ok(())
    }
}

fn ensure_dir(dir: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    Ok(())
}

fn ensure_file(file_path: &PathBuf, default: String) -> Result<String> {
    if !file_path.exists() {
        let mut file = std::fs::File::create(file_path)?;
        file.write_all(&default.as_bytes())?;
        Ok(default)
    } else {
        Ok(std::fs::read_to_string(file_path)?)
    }
}
