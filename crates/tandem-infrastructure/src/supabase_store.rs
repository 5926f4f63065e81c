//! Supabase-backed remote store.
//!
//! Inserts rows via the PostgREST endpoint (`{url}/rest/v1/{table}`).
//! Row-insert semantics only; this system never reads back.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tandem_core::config::SupabaseSecret;
use tandem_core::error::{Result, TandemError};
use tandem_core::record::{ChatRecord, FeedbackRecord, RemoteStore};

const CHATS_TABLE: &str = "roleplay_chats";
const FEEDBACK_TABLE: &str = "roleplay_feedback";

/// Remote tabular store talking to the Supabase REST API.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    url: String,
    anon_key: String,
}

impl SupabaseStore {
    /// Creates a store from credentials.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the URL or key is blank.
    pub fn new(secret: &SupabaseSecret) -> Result<Self> {
        if secret.url.trim().is_empty() || secret.anon_key.trim().is_empty() {
            return Err(TandemError::config("Supabase URL or key not set"));
        }
        Ok(Self {
            client: Client::new(),
            url: secret.url.trim_end_matches('/').to_string(),
            anon_key: secret.anon_key.clone(),
        })
    }

    async fn insert_row<T: Serialize + Sync>(&self, table: &str, row: &T) -> Result<()> {
        let endpoint = format!("{}/rest/v1/{}", self.url, table);
        let response = self
            .client
            .post(&endpoint)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("content-type", "application/json")
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|err| TandemError::storage(format!("Insert into {table} failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(TandemError::storage(format!(
                "Insert into {table} returned {}: {}",
                status.as_u16(),
                body
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for SupabaseStore {
    async fn insert_chat(&self, record: &ChatRecord) -> Result<()> {
        self.insert_row(CHATS_TABLE, record).await
    }

    async fn insert_feedback(&self, record: &FeedbackRecord) -> Result<()> {
        self.insert_row(FEEDBACK_TABLE, record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials_rejected() {
        let secret = SupabaseSecret {
            url: "".into(),
            anon_key: "anon".into(),
        };
        assert!(SupabaseStore::new(&secret).is_err());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let secret = SupabaseSecret {
            url: "https://x.supabase.co/".into(),
            anon_key: "anon".into(),
        };
        let store = SupabaseStore::new(&secret).unwrap();
        assert_eq!(store.url, "https://x.supabase.co");
    }
}
