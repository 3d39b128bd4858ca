//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the identity service address, default request headers, and theme
//! preference.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/join-tui";
const DEFAULT_BASE_URL: &str = "http://localhost:5500/api";
const DEFAULT_REGISTER_PATH: &str = "/user/register";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub register_path: String,
    pub headers: HashMap<String, String>,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_register_path")]
    pub register_path: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_register_path() -> String {
    DEFAULT_REGISTER_PATH.to_string()
}

fn default_theme_name() -> String {
    "sunset".to_string()
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            register_path: default_register_path(),
            headers: HashMap::new(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. If no file exists yet, write the current values to
    /// the default file path or the custom path if provided.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.set_base_url(&data.base_url)?;
            self.register_path = data.register_path;
            self.headers = data.headers;
            self.theme_name = data.theme_name;
        } else {
            log::info!("Writing default configuration to {}...", file_path.display());
            self.save()?;
        }

        Ok(())
    }

    /// Set the identity service address after checking it is a URL.
    ///
    pub fn set_base_url(&mut self, url: &str) -> AppResult<()> {
        reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: url.to_owned(),
            message: e.to_string(),
        })?;
        self.base_url = url.to_owned();
        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            base_url: self.base_url.clone(),
            register_path: self.register_path.clone(),
            headers: self.headers.clone(),
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("join-tui-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_new_has_defaults() {
        let config = Config::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.register_path, "/user/register");
        assert!(config.headers.is_empty());
        assert_eq!(config.theme_name, "sunset");
    }

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let dir = temp_dir("defaults");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert!(dir.join(FILE_NAME).exists());

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.base_url, DEFAULT_BASE_URL);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_reads_existing_file() {
        let dir = temp_dir("existing");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "base_url: https://identity.example.com/api\nheaders:\n  X-Client: join-tui\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.base_url, "https://identity.example.com/api");
        assert_eq!(config.register_path, DEFAULT_REGISTER_PATH);
        assert_eq!(
            config.headers.get("X-Client").map(String::as_str),
            Some("join-tui")
        );
        assert_eq!(config.theme_name, "sunset");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_rejects_invalid_base_url() {
        let dir = temp_dir("invalid");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "base_url: not a url\n").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidBaseUrl { .. }))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
