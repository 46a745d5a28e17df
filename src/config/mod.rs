use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "filesmith.yaml";

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
const DEFAULT_PROJECT_ROOT: &str = "projects";
const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid yaml in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("settings validation failed: {0}")]
    Settings(String),
    #[error("api key env var `{env}` is not set")]
    MissingApiKey { env: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String,
    pub timeout_seconds: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub project_root: PathBuf,
    pub backend: BackendSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from(DEFAULT_PROJECT_ROOT),
            backend: BackendSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings: Settings =
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_root.as_os_str().is_empty() {
            return Err(ConfigError::Settings(
                "`project_root` must not be empty".to_string(),
            ));
        }
        if self.backend.endpoint.trim().is_empty() {
            return Err(ConfigError::Settings(
                "`backend.endpoint` must not be empty".to_string(),
            ));
        }
        if self.backend.model.trim().is_empty() {
            return Err(ConfigError::Settings(
                "`backend.model` must not be empty".to_string(),
            ));
        }
        if self.backend.api_key_env.trim().is_empty() {
            return Err(ConfigError::Settings(
                "`backend.api_key_env` must not be empty".to_string(),
            ));
        }
        if self.backend.timeout_seconds == 0 {
            return Err(ConfigError::Settings(
                "`backend.timeout_seconds` must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.backend.api_key_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                env: self.backend.api_key_env.clone(),
            })
    }
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    let path = Path::new(SETTINGS_FILE_NAME);
    if path.is_file() {
        Settings::from_path(path)
    } else {
        Ok(Settings::default())
    }
}
