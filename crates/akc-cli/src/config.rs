//! CLI configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{CliError, CliResult};

/// File name of the per-user configuration.
const CONFIG_FILE: &str = ".akc_config.json";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Server URL (e.g., https://auth.example.com).
    pub base_url: String,

    /// API token sent as bearer credential.
    pub api_token: String,
}

impl CliConfig {
    /// Creates a configuration.
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Err(CliError::ConfigMissing {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Saves configuration to `path`, replacing any previous file.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Gets the default configuration file path.
    pub fn default_path() -> CliResult<PathBuf> {
        let home = dirs_next::home_dir()
            .ok_or_else(|| CliError::Config("could not determine home directory".to_string()))?;
        Ok(home.join(CONFIG_FILE))
    }
}
