//! Optional `photo-prompt.toml` configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::{AppError, DEFAULT_COPY_CONFIRMATION};

pub const CONFIG_FILE_NAME: &str = "photo-prompt.toml";

/// Settings loaded from `photo-prompt.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory that receives `gemini-prompt.txt`. Relative paths resolve against the working directory.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipboardConfig {
    #[serde(default = "default_confirmation_secs")]
    pub confirmation_secs: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self { confirmation_secs: default_confirmation_secs() }
    }
}

fn default_confirmation_secs() -> u64 {
    DEFAULT_COPY_CONFIRMATION.as_secs()
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.clipboard.confirmation_secs == 0 {
            return Err(AppError::InvalidConfig(
                "clipboard.confirmation_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn copy_confirmation(&self) -> Duration {
        Duration::from_secs(self.clipboard.confirmation_secs)
    }

    /// Export directory resolved against `root`.
    pub fn export_dir(&self, root: &Path) -> PathBuf {
        match &self.export.directory {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from `explicit`, or from `root/photo-prompt.toml` when present.
///
/// An explicit path must exist; the implicit file is optional.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => root.join(path),
        None => {
            let path = root.join(CONFIG_FILE_NAME);
            if !path.exists() {
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    parse_config(&content)
}
