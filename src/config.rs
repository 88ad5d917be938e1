use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{debug, info};

const QUOTE_API_BASE: &str = "https://www.stands4.com/services/v2/quotes.php";
const DICTIONARY_API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DAILY_LIMIT: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set. Get STANDS4 credentials at https://www.stands4.com/services/")]
    MissingCredential(&'static str),

    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Connection details for the STANDS4 quotes API.
#[derive(Debug, Clone)]
pub struct QuoteApiConfig {
    pub base_url: String,
    pub uid: String,
    pub token: ApiKey,
}

/// Service configuration, read once at startup and passed down explicitly.
///
/// Environment variables:
/// - `STANDS4_UID`, `STANDS4_API_KEY`: quote API credentials (required)
/// - `STANDS4_BASE_URL`, `DICTIONARY_BASE_URL`: upstream overrides
/// - `QUOTE_DAILY_LIMIT`: quote requests per day, `0` disables the limit (default 100)
/// - `STICKY_FALLBACK`: serve a curated word when no quote matches (default false)
/// - `PORT`: HTTP listen port (default 3000)
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub quote_api: QuoteApiConfig,
    pub dictionary_base_url: String,
    pub daily_limit: u32,
    pub fallback: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let uid = var("STANDS4_UID").ok_or(ConfigError::MissingCredential("STANDS4_UID"))?;
        let token =
            var("STANDS4_API_KEY").ok_or(ConfigError::MissingCredential("STANDS4_API_KEY"))?;
        debug!("quote API credentials configured");

        Ok(Self {
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
            quote_api: QuoteApiConfig {
                base_url: var("STANDS4_BASE_URL").unwrap_or_else(|| QUOTE_API_BASE.to_string()),
                uid,
                token: ApiKey::new(token),
            },
            dictionary_base_url: var("DICTIONARY_BASE_URL")
                .unwrap_or_else(|| DICTIONARY_API_BASE.to_string()),
            daily_limit: parse_or("QUOTE_DAILY_LIMIT", var("QUOTE_DAILY_LIMIT"), DEFAULT_DAILY_LIMIT)?,
            fallback: var("STICKY_FALLBACK")
                .map(|v| parse_bool("STICKY_FALLBACK", &v))
                .transpose()?
                .unwrap_or(false),
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: Display,
    T::Err: Display,
{
    match value {
        Some(v) => v.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value: v,
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" | "true" | "on" => Ok(true),
        "0" | "n" | "no" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "expected true or false".into(),
        }),
    }
}
