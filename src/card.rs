//! Word card orchestration: quote → phrase → definition.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::dictionary::{DictionarySource, lookup_definition};
use crate::extract::{extract_phrase, first_word};
use crate::fallback;
use crate::quota::{QuotaStatus, RequestCounter};
use crate::quotes::{QuoteError, QuoteSource, acquire_quote, parse_terms};

/// The vocabulary card returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCard {
    pub word: String,
    pub definition: String,
    pub quote: String,
    pub character: String,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("No quote found.")]
    NotFound,

    #[error("Failed to fetch quote: {0}")]
    Service(#[from] QuoteError),
}

/// Builds word cards from a quote source and a dictionary.
pub struct WordCards<Q, D> {
    quotes: Q,
    dictionary: D,
    counter: Arc<dyn RequestCounter>,
    fallback: bool,
}

impl<Q: QuoteSource, D: DictionarySource> WordCards<Q, D> {
    pub fn new(quotes: Q, dictionary: D, counter: Arc<dyn RequestCounter>) -> Self {
        Self {
            quotes,
            dictionary,
            counter,
            fallback: false,
        }
    }

    /// Serve a curated word instead of `NotFound` when no quote matches.
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback = enabled;
        self
    }

    pub fn quota(&self) -> QuotaStatus {
        self.counter.status()
    }

    /// Produce a card for the raw preference text.
    ///
    /// `NotFound` when no term yields a quote; `Service` when the quote source
    /// fails. Dictionary problems only ever leave `definition` empty.
    pub async fn word_card(&self, raw_prefs: &str) -> Result<WordCard, CardError> {
        let terms = parse_terms(raw_prefs);

        let quote = match acquire_quote(&self.quotes, self.counter.as_ref(), &terms).await {
            Ok(Some(quote)) => quote,
            Ok(None) if self.fallback => {
                let word = fallback::pick();
                info!(word = word.word, "no quote matched, serving fallback word");
                return Ok(word.to_card());
            }
            Ok(None) => return Err(CardError::NotFound),
            Err(e) => {
                warn!(error = %e, "quote acquisition failed");
                return Err(e.into());
            }
        };

        let word = extract_phrase(&quote.text);
        let definition = lookup_definition(&self.dictionary, first_word(&word)).await;

        info!(word = %word, has_definition = !definition.is_empty(), "word card ready");
        Ok(WordCard {
            word,
            definition,
            quote: quote.text,
            character: quote.speaker,
            title: quote.source_title,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;
    use crate::dictionary::DictionaryError;
    use crate::quota::DailyQuota;
    use crate::quotes::QuoteRecord;

    #[derive(Default)]
    struct MockQuotes {
        by_term: HashMap<String, QuoteRecord>,
        fail: bool,
        searched: RefCell<Vec<String>>,
    }

    impl MockQuotes {
        fn with(term: &str, text: &str, speaker: &str, title: &str) -> Self {
            let mut by_term = HashMap::new();
            by_term.insert(
                term.to_string(),
                QuoteRecord {
                    text: text.into(),
                    speaker: speaker.into(),
                    source_title: title.into(),
                },
            );
            Self {
                by_term,
                ..Default::default()
            }
        }
    }

    impl QuoteSource for MockQuotes {
        async fn search(&self, term: &str) -> Result<Option<QuoteRecord>, QuoteError> {
            self.searched.borrow_mut().push(term.to_string());
            if self.fail {
                return Err(QuoteError::Decode("expected value at line 1 column 1".into()));
            }
            Ok(self.by_term.get(term).cloned())
        }
    }

    #[derive(Default)]
    struct MockDictionary {
        definitions: HashMap<String, String>,
        fail: bool,
        lookups: Cell<usize>,
        last: RefCell<Option<String>>,
    }

    impl DictionarySource for MockDictionary {
        async fn define(&self, word: &str) -> Result<Option<String>, DictionaryError> {
            self.lookups.set(self.lookups.get() + 1);
            *self.last.borrow_mut() = Some(word.to_string());
            if self.fail {
                return Err(DictionaryError::Api { code: 500 });
            }
            self.definitions
                .get(word)
                .cloned()
                .map(Some)
                .ok_or_else(|| DictionaryError::NotFound(word.to_string()))
        }
    }

    fn dictionary(entries: &[(&str, &str)]) -> MockDictionary {
        MockDictionary {
            definitions: entries
                .iter()
                .map(|(w, d)| (w.to_string(), d.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    fn cards<Q: QuoteSource, D: DictionarySource>(q: Q, d: D) -> WordCards<Q, D> {
        WordCards::new(q, d, Arc::new(DailyQuota::unlimited()))
    }

    #[tokio::test]
    async fn assembles_card_from_quote_and_definition() {
        let quotes = MockQuotes::with(
            "courage",
            "Courage is resistance to fear, mastery of fear.",
            "Mark Twain",
            "Pudd'nhead Wilson",
        );
        let dict = dictionary(&[("Courage", "The quality of mind that enables one to face danger.")]);
        let service = cards(quotes, dict);

        let card = service.word_card("courage").await.unwrap();
        assert_eq!(
            card,
            WordCard {
                word: "Courage".into(),
                definition: "The quality of mind that enables one to face danger.".into(),
                quote: "Courage is resistance to fear, mastery of fear.".into(),
                character: "Mark Twain".into(),
                title: "Pudd'nhead Wilson".into(),
            }
        );
    }

    #[tokio::test]
    async fn phrase_lookup_uses_first_word() {
        let quotes = MockQuotes::with("", "super calif", "", "");
        let service = cards(quotes, dictionary(&[("super", "Excellent.")]));

        let card = service.word_card("").await.unwrap();
        assert_eq!(card.word, "super calif");
        assert_eq!(card.definition, "Excellent.");
        assert_eq!(service.dictionary.last.borrow().as_deref(), Some("super"));
    }

    #[tokio::test]
    async fn tries_terms_from_prefs_in_order() {
        let quotes = MockQuotes::with("jazz", "Improvisation is everything.", "Anon", "");
        let service = cards(quotes, dictionary(&[]));

        let card = service.word_card("blues, jazz\nrock").await.unwrap();
        assert_eq!(card.word, "Improvisation");
        assert_eq!(*service.quotes.searched.borrow(), vec!["blues", "jazz"]);
    }

    #[tokio::test]
    async fn all_terms_missing_is_not_found() {
        let service = cards(MockQuotes::default(), dictionary(&[]));

        let err = service.word_card("a, b").await.unwrap_err();
        assert!(matches!(err, CardError::NotFound));
        assert_eq!(service.dictionary.lookups.get(), 0);
    }

    #[tokio::test]
    async fn quote_failure_is_service_error() {
        let quotes = MockQuotes {
            fail: true,
            ..Default::default()
        };
        let service = cards(quotes, dictionary(&[]));

        let err = service.word_card("anything").await.unwrap_err();
        assert!(matches!(err, CardError::Service(QuoteError::Decode(_))));
    }

    #[tokio::test]
    async fn dictionary_failure_leaves_definition_empty() {
        let quotes = MockQuotes::with("", "Persistence conquers all.", "Anon", "Proverbs");
        let dict = MockDictionary {
            fail: true,
            ..Default::default()
        };
        let service = cards(quotes, dict);

        let card = service.word_card("").await.unwrap();
        assert_eq!(card.word, "Persistence");
        assert_eq!(card.definition, "");
        assert_eq!(card.title, "Proverbs");
    }

    #[tokio::test]
    async fn quote_without_letters_skips_dictionary() {
        let quotes = MockQuotes::with("", "42 ... 7", "", "");
        let service = cards(quotes, dictionary(&[]));

        let card = service.word_card("").await.unwrap();
        assert_eq!(card.word, "");
        assert_eq!(card.definition, "");
        assert_eq!(service.dictionary.lookups.get(), 0);
    }

    #[tokio::test]
    async fn identical_responses_yield_identical_cards() {
        let quotes = MockQuotes::with("", "The unexamined life is not worth living.", "Socrates", "Apology");
        let service = cards(quotes, dictionary(&[("unexamined", "Not examined.")]));

        let first = service.word_card("").await.unwrap();
        let second = service.word_card("").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn fallback_replaces_not_found() {
        let service = cards(MockQuotes::default(), dictionary(&[])).with_fallback(true);

        let card = service.word_card("nothing matches").await.unwrap();
        assert!(fallback::WORDS.iter().any(|w| w.word == card.word));
        assert_eq!(service.dictionary.lookups.get(), 0);
    }

    #[tokio::test]
    async fn fallback_never_masks_service_error() {
        let quotes = MockQuotes {
            fail: true,
            ..Default::default()
        };
        let service = cards(quotes, dictionary(&[])).with_fallback(true);

        assert!(matches!(
            service.word_card("x").await,
            Err(CardError::Service(_))
        ));
    }

    #[tokio::test]
    async fn exhausted_quota_reads_as_not_found() {
        let quotes = MockQuotes::with("x", "never served", "", "");
        let service = WordCards::new(quotes, dictionary(&[]), Arc::new(DailyQuota::new(1)));

        assert!(service.word_card("y").await.is_err());
        assert!(matches!(service.word_card("x").await, Err(CardError::NotFound)));
        assert_eq!(*service.quotes.searched.borrow(), vec!["y"]);
        assert_eq!(service.quota().remaining_requests, Some(0));
    }
}
