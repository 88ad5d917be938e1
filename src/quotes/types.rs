use serde::Deserialize;
use tracing::debug;

/// Top-level body of the STANDS4 quotes endpoint.
///
/// The endpoint has been observed to answer with `{"result": ...}` as well as
/// `{"results": {"result": ...}}`; both are accepted here and resolved by
/// [`QuoteResponse::into_record`].
#[derive(Deserialize, Debug, Default)]
pub struct QuoteResponse {
    pub result: Option<QuoteResult>,
    pub results: Option<ResultsEnvelope>,
}

#[derive(Deserialize, Debug)]
pub struct ResultsEnvelope {
    pub result: Option<QuoteResult>,
}

/// Shape of a `result` value. `Unrecognized` captures anything else so that a
/// surprising body is treated as "no quote" rather than a decode failure.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum QuoteResult {
    List(Vec<serde_json::Value>),
    Single(RawQuote),
    Unrecognized(serde_json::Value),
}

/// A single quote item. Movie-script results use `line`/`character`/`script`
/// where plain quotes use `quote`/`author`/`title`.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct RawQuote {
    pub quote: Option<String>,
    pub line: Option<String>,
    pub author: Option<String>,
    pub character: Option<String>,
    pub title: Option<String>,
    pub script: Option<String>,
}

/// Normalized quote, independent of the upstream shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteRecord {
    pub text: String,
    pub speaker: String,
    pub source_title: String,
}

impl QuoteResponse {
    /// Resolve the response to a quote record.
    ///
    /// Priority is fixed: `result`, then `results.result`; a list contributes
    /// only its first element. Returns `None` when no shape matches or the
    /// quote text is empty.
    pub fn into_record(self) -> Option<QuoteRecord> {
        let result = self.result.or_else(|| self.results.and_then(|r| r.result))?;
        let raw = match result {
            QuoteResult::List(items) => {
                let first = items.into_iter().next()?;
                serde_json::from_value::<RawQuote>(first).ok()?
            }
            QuoteResult::Single(raw) => raw,
            QuoteResult::Unrecognized(value) => {
                debug!(%value, "unrecognized quote result shape");
                return None;
            }
        };
        raw.into_record()
    }
}

impl RawQuote {
    pub fn into_record(self) -> Option<QuoteRecord> {
        let text = first_present(self.quote, self.line)?;
        Some(QuoteRecord {
            text,
            speaker: first_present(self.author, self.character).unwrap_or_default(),
            source_title: first_present(self.title, self.script).unwrap_or_default(),
        })
    }
}

fn first_present(primary: Option<String>, alias: Option<String>) -> Option<String> {
    primary
        .filter(|s| !s.is_empty())
        .or_else(|| alias.filter(|s| !s.is_empty()))
}
