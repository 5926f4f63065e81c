//! Unified path management for tandem configuration files.
//!
//! All tandem configuration and secrets live under the platform config
//! directory, the local fallback log under the current working directory
//! unless overridden.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/tandem/            # Config directory
//! ├── config.toml              # Application defaults
//! └── secret.json              # API keys and secrets
//!
//! ./chatlogs.jsonl             # Local fallback log (default location)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Default file name of the local fallback log.
pub const DEFAULT_LOG_FILE: &str = "chatlogs.jsonl";

/// Unified path management for tandem.
pub struct TandemPaths;

impl TandemPaths {
    /// Returns the tandem configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/tandem/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("tandem"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file (config.toml).
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file (secret.json).
    ///
    /// # Security Note
    ///
    /// The file holds API keys; it should be created with restrictive
    /// permissions and never committed anywhere.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }
}
