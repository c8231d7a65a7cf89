//! Lazily-connected store handle
//!
//! The table client is built on first use and cached for the life of the
//! process. Credentials are checked before anything touches the network; a
//! failed check is not cached, so fixing the environment and retrying works.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::config::StoreCredentials;
use crate::store::{PostgrestClient, TableClient};

/// Values shipped in the sample `.env`; treated the same as missing.
pub const PLACEHOLDER_URL: &str = "https://your-project-id.supabase.co";
pub const PLACEHOLDER_ANON_KEY: &str = "your-anon-key-here";

/// Store credentials are missing, placeholders, or unusable
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("SUPABASE_URL not configured. Please update .env file.")]
    MissingUrl,

    #[error("SUPABASE_ANON_KEY not configured. Please update .env file.")]
    MissingKey,

    #[error("SUPABASE_URL is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Shared handle to the blog store
pub struct Database {
    credentials: StoreCredentials,
    client: OnceCell<Arc<dyn TableClient>>,
}

impl Database {
    /// Handle that connects to Supabase on first use.
    pub fn new(credentials: StoreCredentials) -> Self {
        Self {
            credentials,
            client: OnceCell::new(),
        }
    }

    /// Handle backed by an already-built client (in-memory store, tests).
    pub fn with_client(client: Arc<dyn TableClient>) -> Self {
        Self {
            credentials: StoreCredentials::default(),
            client: OnceCell::with_value(client),
        }
    }

    /// The cached client, building it on first call.
    pub fn client(&self) -> Result<&Arc<dyn TableClient>, ConfigError> {
        self.client.get_or_try_init(|| connect(&self.credentials))
    }
}

fn usable<'a>(value: &'a Option<String>, placeholder: &str) -> Option<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != placeholder)
}

fn connect(credentials: &StoreCredentials) -> Result<Arc<dyn TableClient>, ConfigError> {
    let url = usable(&credentials.url, PLACEHOLDER_URL).ok_or(ConfigError::MissingUrl)?;
    let key = usable(&credentials.anon_key, PLACEHOLDER_ANON_KEY).ok_or(ConfigError::MissingKey)?;

    let client = PostgrestClient::new(url, key)?;
    tracing::info!(url = %url, "Supabase client initialized");
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryClient;

    #[test]
    fn missing_url_fails_first() {
        let db = Database::new(StoreCredentials::default());
        assert!(matches!(db.client(), Err(ConfigError::MissingUrl)));
    }

    #[test]
    fn placeholders_count_as_missing() {
        let db = Database::new(StoreCredentials::new(PLACEHOLDER_URL, "real-key"));
        assert!(matches!(db.client(), Err(ConfigError::MissingUrl)));

        let db = Database::new(StoreCredentials::new(
            "https://abc.supabase.co",
            PLACEHOLDER_ANON_KEY,
        ));
        assert!(matches!(db.client(), Err(ConfigError::MissingKey)));

        let db = Database::new(StoreCredentials::new("https://abc.supabase.co", "  "));
        assert!(matches!(db.client(), Err(ConfigError::MissingKey)));
    }

    #[test]
    fn error_messages_name_the_variable() {
        assert_eq!(
            ConfigError::MissingUrl.to_string(),
            "SUPABASE_URL not configured. Please update .env file."
        );
        assert_eq!(
            ConfigError::MissingKey.to_string(),
            "SUPABASE_ANON_KEY not configured. Please update .env file."
        );
    }

    #[test]
    fn unparseable_url_is_a_config_error() {
        let db = Database::new(StoreCredentials::new("abc.supabase.co", "key"));
        assert!(matches!(db.client(), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn client_is_built_once() {
        let db = Database::new(StoreCredentials::new("https://abc.supabase.co", "key"));
        let first = Arc::clone(db.client().unwrap());
        let second = Arc::clone(db.client().unwrap());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn preset_client_skips_credentials() {
        let db = Database::with_client(Arc::new(MemoryClient::new()));
        assert!(db.client().is_ok());
    }
}
