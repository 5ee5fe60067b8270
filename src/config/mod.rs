use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Colour the rows of listing tables by state
    #[serde(default = "default_show_colors")]
    pub show_colors: bool,
}

fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
            separator_char: default_separator_char(),
            show_colors: default_show_colors(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("moveup")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".moveup")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("moveup.conf")
    }

    /// Return the default directory holding the JSON records
    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Record store rooted at the configured data directory
    pub fn record_store(&self) -> RecordStore {
        RecordStore::new(&self.data_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration file and data directory.
    ///
    /// Returns the data directory that was set up.
    pub fn init_all(custom_dir: Option<PathBuf>, is_test: bool) -> AppResult<PathBuf> {
        let data_dir = custom_dir.unwrap_or_else(Self::default_data_dir);
        fs::create_dir_all(&data_dir)?;

        // Write config file
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;

            let config = Config {
                data_dir: data_dir.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        }

        Ok(data_dir)
    }
}
