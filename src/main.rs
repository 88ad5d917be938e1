mod card;
mod config;
mod dictionary;
mod extract;
mod fallback;
mod quota;
mod quotes;
mod server;

pub const USER_AGENT: &str = concat!("sticky-words/", env!("CARGO_PKG_VERSION"));

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use reqwest::Client;
use tracing::info;

use card::WordCards;
use config::Config;
use dictionary::DictionaryClient;
use quota::DailyQuota;
use quotes::QuoteClient;

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Global HTTP client timeout covering DNS + connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(version, about = "Learn a new word from a quote")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the word card API (default)
    Serve {
        /// Listen port, overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print one word card as JSON
    Card {
        /// Search terms separated by commas or newlines
        #[arg(default_value = "")]
        prefs: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sticky_words=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()
        .inspect_err(|e| tracing::error!("configuration error: {e}"))?;

    let http = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .build()?;
    let cards = WordCards::new(
        QuoteClient::new(http.clone(), config.quote_api.clone()),
        DictionaryClient::new(http, &config.dictionary_base_url),
        Arc::new(DailyQuota::new(config.daily_limit)),
    )
    .with_fallback(config.fallback);

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            info!(
                daily_limit = config.daily_limit,
                fallback = config.fallback,
                "starting sticky-words server"
            );
            server::serve(Arc::new(cards), port.unwrap_or(config.port)).await?;
        }
        Command::Card { prefs } => {
            let card = cards.word_card(&prefs).await?;
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
    }
    Ok(())
}
