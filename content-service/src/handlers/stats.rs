use crate::dtos::{ContentTypeCounts, DataEnvelope, UserStats};
use crate::error::{ApiError, ContentError};
use crate::middleware::BearerToken;
use crate::startup::AppState;
use axum::{extract::State, Json};
use chrono::{Duration, Utc};

/// GET /get-user-stats
///
/// Identity is mandatory here: a missing header, missing configuration or
/// failed token verification is fatal, and no partial stats are returned.
pub async fn get_user_stats(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<DataEnvelope<UserStats>>, ApiError> {
    fetch_stats(&state, token)
        .await
        .map(|data| Json(DataEnvelope { data }))
        .map_err(ApiError::stats)
}

async fn fetch_stats(state: &AppState, token: BearerToken) -> Result<UserStats, ContentError> {
    let token = token.0.ok_or(ContentError::MissingAuthorization)?;
    let supabase = state
        .supabase
        .as_ref()
        .ok_or(ContentError::SupabaseNotConfigured)?;

    let user_id = supabase.current_user(&token).await.map_err(|e| {
        tracing::warn!(error = %e, "Stats request with unverifiable token");
        ContentError::InvalidToken
    })?;

    let since = Utc::now() - Duration::days(7);

    // The three aggregates are independent reads; issue them concurrently.
    let (total_content, types, recent_content) = tokio::try_join!(
        supabase.count_contents(&user_id),
        supabase.content_types(&user_id),
        supabase.count_recent(&user_id, since),
    )?;

    Ok(UserStats {
        total_content,
        content_by_type: ContentTypeCounts::tally(types.iter().map(String::as_str)),
        recent_content,
        user_id,
    })
}
