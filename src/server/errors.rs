use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::card::CardError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No quote found.")]
    NotFound,

    #[error("Failed to fetch quote")]
    Upstream(#[source] CardError),
}

impl From<CardError> for AppError {
    fn from(e: CardError) -> Self {
        match e {
            CardError::NotFound => AppError::NotFound,
            other => AppError::Upstream(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(source) => {
                error!(error = %source, "word card request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::QuoteError;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::from(CardError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn service_error_maps_to_500_without_details() {
        let err = AppError::from(CardError::Service(QuoteError::Api {
            code: 401,
            message: "invalid tokenid".into(),
        }));
        assert_eq!(err.to_string(), "Failed to fetch quote");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
