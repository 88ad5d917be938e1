//! HTTP surface: `GET /api/quote` and `GET /api/status`.

mod errors;

pub use errors::AppError;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::card::{WordCard, WordCards};
use crate::dictionary::DictionaryClient;
use crate::quota::QuotaStatus;
use crate::quotes::QuoteClient;

pub type Cards = WordCards<QuoteClient, DictionaryClient>;

#[derive(Deserialize)]
struct QuoteParams {
    #[serde(default)]
    prefs: String,
}

pub fn router(cards: Arc<Cards>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/quote", get(quote_handler))
        .route("/api/status", get(status_handler))
        .layer(cors)
        .with_state(cards)
}

async fn quote_handler(
    State(cards): State<Arc<Cards>>,
    Query(params): Query<QuoteParams>,
) -> Result<Json<WordCard>, AppError> {
    info!(prefs = %params.prefs, "GET /api/quote");
    let card = cards.word_card(&params.prefs).await?;
    Ok(Json(card))
}

async fn status_handler(State(cards): State<Arc<Cards>>) -> Json<QuotaStatus> {
    Json(cards.quota())
}

/// Bind to `port` on all interfaces and serve until Ctrl+C or SIGTERM.
pub async fn serve(cards: Arc<Cards>, port: u16) -> std::io::Result<()> {
    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await?;
    info!("server running on {address}");

    axum::serve(listener, router(cards))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down");
        } else {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
