use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// Bearer token extractor.
///
/// Carries `None` when the `Authorization` header is absent or unreadable;
/// each handler decides whether that is fatal. The `Bearer ` prefix is
/// stripped when present so a bare token in the header still works.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(|raw| raw.strip_prefix("Bearer ").unwrap_or(raw).to_string());

        Ok(BearerToken(token))
    }
}
