use crate::services::openai::OpenAiError;
use crate::services::supabase::SupabaseError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure taxonomy for the two content endpoints.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content type and topic are required")]
    MissingRequiredFields,

    #[error("Invalid content type. Must be social_post or ad_copy")]
    InvalidContentType,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("No authorization header")]
    MissingAuthorization,

    #[error("Invalid token")]
    InvalidToken,

    #[error(transparent)]
    Generation(#[from] OpenAiError),

    #[error("Supabase configuration missing")]
    SupabaseNotConfigured,

    #[error(transparent)]
    Store(#[from] SupabaseError),
}

/// Stable error code for the generation endpoint.
pub const CONTENT_GENERATION_FAILED: &str = "CONTENT_GENERATION_FAILED";
/// Stable error code for the stats endpoint.
pub const STATS_FETCH_FAILED: &str = "STATS_FETCH_FAILED";

/// A `ContentError` bound to its endpoint's stable error code.
///
/// Every failure leaves the HTTP boundary as a 500 carrying the
/// `{"error": {"code", "message"}}` envelope; validation and upstream
/// failures are not distinguished by status code.
#[derive(Debug)]
pub struct ApiError {
    code: &'static str,
    source: ContentError,
}

impl ApiError {
    pub fn generation(source: ContentError) -> Self {
        Self {
            code: CONTENT_GENERATION_FAILED,
            source,
        }
    }

    pub fn stats(source: ContentError) -> Self {
        Self {
            code: STATS_FETCH_FAILED,
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.source.to_string();
        tracing::error!(code = self.code, error = %message, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "code": self.code, "message": message } })),
        )
            .into_response()
    }
}
