//! Configuration types.
//!
//! Plain data; loading lives in the infrastructure crate.

use serde::{Deserialize, Serialize};

/// Optional application defaults read from `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct AppConfig {
    /// Default interface language ("en" or "de").
    pub language: Option<String>,
    /// Chat model override.
    pub model: Option<String>,
    /// Path of the local fallback log.
    pub log_file: Option<String>,
}

/// Credentials for the chat-completion endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenAiSecret {
    pub api_key: String,
    /// Model override; falls back to the built-in default when absent.
    pub model_name: Option<String>,
}

/// Credentials for the remote tabular store.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SupabaseSecret {
    pub url: String,
    pub anon_key: String,
}

/// Contents of `secret.json`.
///
/// Both sections are optional: a missing `openai` section is fatal for
/// the session (no conversation can start), a missing `supabase` section
/// only forces the local fallback.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    pub openai: Option<OpenAiSecret>,
    pub supabase: Option<SupabaseSecret>,
}
