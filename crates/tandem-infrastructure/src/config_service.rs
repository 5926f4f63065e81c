//! Configuration service implementation.
//!
//! Loads the application defaults from the configuration file
//! (~/.config/tandem/config.toml).

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tandem_core::config::AppConfig;
use tracing::warn;

use crate::paths::TandemPaths;

/// Configuration service that loads and caches the application defaults.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService using the platform default path.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading from an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A missing or unreadable file yields the defaults; a parse error
    /// is logged and also yields the defaults (bad config never blocks
    /// a session).
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_default();

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    fn load_config(&self) -> Option<AppConfig> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => TandemPaths::config_file().ok()?,
        };
        let raw = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&raw) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring malformed config.toml");
                None
            }
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));
        let config = service.get_config();
        assert!(config.language.is_none());
        assert!(config.model.is_none());
    }

    #[test]
    fn test_config_values_parsed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"de\"\nlog_file = \"/tmp/fallback.jsonl\"\n").unwrap();

        let service = ConfigService::with_path(path);
        let config = service.get_config();
        assert_eq!(config.language.as_deref(), Some("de"));
        assert_eq!(config.log_file.as_deref(), Some("/tmp/fallback.jsonl"));
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = [broken").unwrap();

        let service = ConfigService::with_path(path);
        assert!(service.get_config().language.is_none());
    }
}
