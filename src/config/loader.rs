use crate::config::constants::{
    CONFIG_FILE_ENV, DEFAULT_SERVER_URL, PROCESS_ENDPOINT, SERVER_URL_ENV,
};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    server_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_url: Url,
}

impl Config {
    /// Picks the first source that is set, in order: `server`, `config_file`,
    /// `UPLOADER_CONFIG`, `UPLOADER_SERVER_URL`, the default server. Sources
    /// after the chosen one are never read.
    pub fn new(
        server: Option<String>,
        config_file: Option<PathBuf>,
    ) -> Result<Config, ConfigError> {
        Config::resolve(
            server,
            config_file.or_else(|| env::var_os(CONFIG_FILE_ENV).map(PathBuf::from)),
            env::var(SERVER_URL_ENV).ok(),
        )
    }

    fn resolve(
        server: Option<String>,
        config_file: Option<PathBuf>,
        server_url: Option<String>,
    ) -> Result<Config, ConfigError> {
        match (server, config_file, server_url) {
            (Some(url), _, _) => Config::from_url(&url),
            (None, Some(path), _) => Config::from_file(path),
            (None, None, Some(url)) => Config::from_url(&url),
            (None, None, None) => Config::from_url(DEFAULT_SERVER_URL),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let file_config: FileConfig = serde_yaml::from_str(&contents)?;
        Config::from_url(&file_config.server_url)
    }

    pub fn from_url(server_url: &str) -> Result<Config, ConfigError> {
        Ok(Config {
            server_url: Url::parse(server_url)?,
        })
    }

    /// The endpoint path is absolute, so it replaces any path on the base url.
    pub fn process_url(&self) -> Result<Url, ConfigError> {
        Ok(self.server_url.join(PROCESS_ENDPOINT)?)
    }
}
