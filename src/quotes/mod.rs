//! Quote acquisition: STANDS4 client, term parsing and the term-by-term search loop.

mod terms;
pub mod types;

pub use terms::parse_terms;
pub use types::QuoteRecord;

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::QuoteApiConfig;
use crate::quota::RequestCounter;
use types::QuoteResponse;

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Quote API rate limit exceeded. Please retry later.")]
    RateLimited,

    #[error("Quote API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed quote response: {0}")]
    Decode(String),

    #[error("Invalid quote API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A searchable source of quotes.
/// Implemented by `QuoteClient` for production; mock implementations used in tests.
pub trait QuoteSource {
    /// Run one upstream search. `Ok(None)` means the source answered but had
    /// no usable quote for `term`.
    async fn search(&self, term: &str) -> Result<Option<QuoteRecord>, QuoteError>;
}

#[derive(Clone)]
pub struct QuoteClient {
    http: Client,
    config: QuoteApiConfig,
}

impl QuoteClient {
    pub fn new(http: Client, config: QuoteApiConfig) -> Self {
        Self { http, config }
    }

    fn search_url(&self, term: &str) -> Result<Url, QuoteError> {
        Ok(Url::parse_with_params(
            &self.config.base_url,
            [
                ("uid", self.config.uid.as_str()),
                ("tokenid", self.config.token.expose()),
                ("search", term),
                ("format", "json"),
            ],
        )?)
    }
}

impl QuoteSource for QuoteClient {
    async fn search(&self, term: &str) -> Result<Option<QuoteRecord>, QuoteError> {
        let url = self.search_url(term)?;

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .header("User-Agent", crate::USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("quote API rate limited");
            return Err(QuoteError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let snippet: String = text.chars().take(200).collect();
            warn!(status = %status, "quote API error");
            return Err(QuoteError::Api {
                code: status.as_u16(),
                message: format!("HTTP {status}: {snippet}"),
            });
        }

        let text = response.text().await?;
        let body: QuoteResponse =
            serde_json::from_str(&text).map_err(|e| QuoteError::Decode(e.to_string()))?;
        let record = body.into_record();
        debug!(term, found = record.is_some(), "quote search complete");
        Ok(record)
    }
}

/// Query `source` for each term in order and return the first usable quote.
///
/// Exactly one upstream call is made per term tried, and the loop stops at
/// the first hit. A term with no quote moves on to the next one; an upstream
/// failure aborts the whole acquisition. When `counter` refuses a permit the
/// loop stops without calling upstream and the result is `None`.
pub async fn acquire_quote<S: QuoteSource>(
    source: &S,
    counter: &dyn RequestCounter,
    terms: &[String],
) -> Result<Option<QuoteRecord>, QuoteError> {
    for term in terms {
        if !counter.try_acquire() {
            let status = counter.status();
            warn!(
                limit = status.daily_limit,
                "daily quote request limit reached, skipping remaining terms"
            );
            return Ok(None);
        }

        match source.search(term).await? {
            Some(record) => {
                info!(term = %term, "quote found");
                return Ok(Some(record));
            }
            None => debug!(term = %term, "no quote for term"),
        }
    }
    Ok(None)
}
