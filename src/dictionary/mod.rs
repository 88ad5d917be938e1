//! Definition lookup against dictionaryapi.dev.

pub mod types;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use tracing::{debug, warn};

use types::{Entry, first_definition};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("No dictionary entry for '{0}'")]
    NotFound(String),

    #[error("Dictionary API error ({code})")]
    Api { code: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// A source of word definitions.
/// Implemented by `DictionaryClient` for production; mock implementations used in tests.
pub trait DictionarySource {
    /// First definition of `word`. `Ok(None)` when the entry exists but carries no definition.
    async fn define(&self, word: &str) -> Result<Option<String>, DictionaryError>;
}

#[derive(Clone)]
pub struct DictionaryClient {
    http: Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl DictionarySource for DictionaryClient {
    async fn define(&self, word: &str) -> Result<Option<String>, DictionaryError> {
        let url = format!(
            "{}/{}",
            self.base_url,
            utf8_percent_encode(word, NON_ALPHANUMERIC)
        );

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", crate::USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            200..=299 => {
                let entries: Vec<Entry> = response.json().await?;
                Ok(first_definition(&entries).map(String::from))
            }
            404 => Err(DictionaryError::NotFound(word.to_string())),
            code => Err(DictionaryError::Api { code }),
        }
    }
}

/// Definition for `word`, or `""` when there is none or the lookup fails.
///
/// Lookup failures are logged and never reach the caller. An empty `word`
/// returns immediately without calling upstream.
pub async fn lookup_definition<D: DictionarySource>(dictionary: &D, word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    match dictionary.define(word).await {
        Ok(Some(definition)) => definition,
        Ok(None) => {
            debug!(word, "dictionary entry has no definition");
            String::new()
        }
        Err(DictionaryError::NotFound(_)) => {
            debug!(word, "word not in dictionary");
            String::new()
        }
        Err(e) => {
            warn!(word, error = %e, "dictionary lookup failed");
            String::new()
        }
    }
}
