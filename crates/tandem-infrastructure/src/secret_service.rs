//! Secret service implementation.
//!
//! Loads secret configuration (API keys) from secret.json, with
//! environment variables as a fallback for individual sections, and
//! caches the result to avoid repeated file I/O.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tandem_core::config::{OpenAiSecret, SecretConfig, SupabaseSecret};
use tandem_core::secret::SecretService;
use tracing::debug;

use crate::paths::TandemPaths;

/// Service for managing secret configuration.
///
/// Reads secret.json once and caches it. A missing file is not an
/// error: sections are then filled from environment variables where
/// available, and callers decide per section whether absence is fatal.
#[derive(Clone)]
pub struct FileSecretService {
    path: PathBuf,
    /// Cached secret config loaded from storage.
    /// Uses RwLock for thread-safe lazy loading.
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl FileSecretService {
    /// Creates a new FileSecretService.
    ///
    /// With `base_path = None` the platform default location
    /// (~/.config/tandem/secret.json) is used.
    pub fn new(base_path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match base_path {
            Some(path) => path.to_path_buf(),
            None => TandemPaths::secret_file()
                .map_err(|e| anyhow::anyhow!("Failed to resolve secret path: {e}"))?,
        };
        Ok(Self {
            path,
            secrets: Arc::new(RwLock::new(None)),
        })
    }

    /// Loads the secrets, merging in environment variables for sections
    /// the file does not provide.
    pub fn load(&self) -> Result<SecretConfig, String> {
        {
            let read_lock = self.secrets.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = self.read_file()?;

        if loaded.openai.is_none() {
            if let Ok(api_key) = env::var("OPENAI_API_KEY") {
                loaded.openai = Some(OpenAiSecret {
                    api_key,
                    model_name: env::var("OPENAI_MODEL_NAME").ok(),
                });
            }
        }
        if loaded.supabase.is_none() {
            if let (Ok(url), Ok(anon_key)) =
                (env::var("SUPABASE_URL"), env::var("SUPABASE_ANON_KEY"))
            {
                loaded.supabase = Some(SupabaseSecret { url, anon_key });
            }
        }

        {
            let mut write_lock = self.secrets.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    fn read_file(&self) -> Result<SecretConfig, String> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "secret file absent, relying on environment");
            return Ok(SecretConfig::default());
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read secret file: {e}"))?;
        serde_json::from_str(&raw).map_err(|e| format!("Failed to parse secret file: {e}"))
    }
}

#[async_trait::async_trait]
impl SecretService for FileSecretService {
    async fn load_secrets(&self) -> Result<SecretConfig, String> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_default_sections() {
        let dir = tempfile::TempDir::new().unwrap();
        let service = FileSecretService::new(Some(&dir.path().join("secret.json"))).unwrap();
        let secrets = service.read_file().unwrap();
        assert!(secrets.openai.is_none());
        assert!(secrets.supabase.is_none());
    }

    #[test]
    fn test_file_sections_parsed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("secret.json");
        std::fs::write(
            &path,
            r#"{
                "openai": {"api_key": "sk-test", "model_name": "gpt-4o-mini"},
                "supabase": {"url": "https://x.supabase.co", "anon_key": "anon"}
            }"#,
        )
        .unwrap();

        let service = FileSecretService::new(Some(&path)).unwrap();
        let secrets = service.load().unwrap();
        assert_eq!(secrets.openai.unwrap().api_key, "sk-test");
        assert_eq!(secrets.supabase.unwrap().url, "https://x.supabase.co");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("secret.json");
        std::fs::write(&path, "not json").unwrap();

        let service = FileSecretService::new(Some(&path)).unwrap();
        assert!(service.load().is_err());
    }
}
