use crate::dtos::{DataEnvelope, GenerateContentRequest, GeneratedContent};
use crate::error::{ApiError, ContentError};
use crate::middleware::BearerToken;
use crate::models::NewContentRecord;
use crate::prompt;
use crate::services::CompletionParams;
use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};

/// Fixed sampling parameters for copy generation.
const COMPLETION_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.7,
    max_tokens: 500,
};

/// POST /generate-content
///
/// Validation and upstream generation failures collapse into the
/// CONTENT_GENERATION_FAILED envelope; identity and persistence problems are
/// absorbed so the caller still gets the generated copy.
pub async fn generate_content(
    State(state): State<AppState>,
    token: BearerToken,
    body: Result<Json<GenerateContentRequest>, JsonRejection>,
) -> Result<Json<DataEnvelope<GeneratedContent>>, ApiError> {
    generate(&state, token, body)
        .await
        .map(|data| Json(DataEnvelope { data }))
        .map_err(ApiError::generation)
}

async fn generate(
    state: &AppState,
    token: BearerToken,
    body: Result<Json<GenerateContentRequest>, JsonRejection>,
) -> Result<GeneratedContent, ContentError> {
    let Json(request) = body.map_err(|e| ContentError::InvalidBody(e.body_text()))?;
    let brief = request.into_brief()?;

    let prompts = prompt::build_prompts(&brief);
    let content = state
        .openai
        .complete(&prompts.system, &prompts.user, COMPLETION_PARAMS)
        .await?;

    tracing::info!(
        content_type = brief.content_type.as_str(),
        topic = %brief.topic,
        chars = content.len(),
        "Content generated"
    );

    // Identity resolution is best-effort here: a missing, invalid or expired
    // token downgrades the request to anonymous generation.
    let user_id = match (&token.0, &state.supabase) {
        (Some(token), Some(supabase)) => match supabase.current_user(token).await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "Token verification failed; skipping persistence");
                None
            }
        },
        _ => None,
    };

    // Persistence is best-effort too: a failed insert is logged and the
    // generated copy is returned regardless.
    if let (Some(id), Some(supabase)) = (&user_id, &state.supabase) {
        let record = NewContentRecord::from_generated(&brief, id, &content);
        match supabase.insert_content(&record).await {
            Ok(()) => tracing::info!(user_id = %id, "Generated content persisted"),
            Err(e) => tracing::error!(error = %e, "Failed to persist generated content"),
        }
    }

    Ok(GeneratedContent {
        content,
        content_type: brief.content_type,
        platform: brief.platform,
        topic: brief.topic,
        user_id,
    })
}
