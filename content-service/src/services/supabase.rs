//! Supabase client covering the two surfaces the service consumes: bearer
//! token verification via the Auth API and `contents` row access via
//! PostgREST (insert plus the three filtered reads behind the stats
//! endpoint).

use crate::config::SupabaseConfig;
use crate::models::NewContentRecord;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("Supabase API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Resolve the caller's bearer token to a user id.
    ///
    /// The caller's token authenticates the request; the service-role key
    /// goes in the `apikey` header as the Auth API requires.
    pub async fn current_user(&self, token: &str) -> Result<String, SupabaseError> {
        let url = format!("{}/auth/v1/user", self.config.url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header("apikey", self.config.service_role_key.expose_secret())
            .send()
            .await
            .map_err(|e| SupabaseError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let user: AuthUser = response
            .json()
            .await
            .map_err(|e| SupabaseError::UnexpectedResponse(e.to_string()))?;

        Ok(user.id)
    }

    /// Insert a freshly generated content row.
    pub async fn insert_content(&self, record: &NewContentRecord) -> Result<(), SupabaseError> {
        let url = format!("{}/rest/v1/contents", self.config.url);

        let response = self
            .service_auth(self.client.post(&url))
            .header("Prefer", "return=representation")
            .json(record)
            .send()
            .await
            .map_err(|e| SupabaseError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(())
    }

    /// Total number of content rows owned by the user.
    pub async fn count_contents(&self, user_id: &str) -> Result<u64, SupabaseError> {
        let url = format!("{}/rest/v1/contents", self.config.url);

        let response = self
            .service_auth(self.client.get(&url))
            .query(&[
                ("user_id", format!("eq.{}", user_id).as_str()),
                ("select", "count"),
            ])
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| SupabaseError::Network(e.to_string()))?;

        parse_count(response).await
    }

    /// Raw `content_type` values for every row owned by the user.
    pub async fn content_types(&self, user_id: &str) -> Result<Vec<String>, SupabaseError> {
        let url = format!("{}/rest/v1/contents", self.config.url);

        let response = self
            .service_auth(self.client.get(&url))
            .query(&[
                ("user_id", format!("eq.{}", user_id).as_str()),
                ("select", "content_type"),
            ])
            .send()
            .await
            .map_err(|e| SupabaseError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let rows: Vec<ContentTypeRow> = response
            .json()
            .await
            .map_err(|e| SupabaseError::UnexpectedResponse(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.content_type).collect())
    }

    /// Number of rows the user created at or after `since`.
    pub async fn count_recent(
        &self,
        user_id: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, SupabaseError> {
        let url = format!("{}/rest/v1/contents", self.config.url);

        let response = self
            .service_auth(self.client.get(&url))
            .query(&[
                ("user_id", format!("eq.{}", user_id).as_str()),
                ("created_at", format!("gte.{}", since.to_rfc3339()).as_str()),
                ("select", "count"),
            ])
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| SupabaseError::Network(e.to_string()))?;

        parse_count(response).await
    }

    /// PostgREST calls authenticate with the service-role key in both the
    /// bearer slot and the `apikey` header.
    fn service_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let key = self.config.service_role_key.expose_secret();
        builder.bearer_auth(key).header("apikey", key)
    }
}

async fn api_error(response: reqwest::Response) -> SupabaseError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    SupabaseError::Api { status, body }
}

async fn parse_count(response: reqwest::Response) -> Result<u64, SupabaseError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }

    let rows: Vec<CountRow> = response
        .json()
        .await
        .map_err(|e| SupabaseError::UnexpectedResponse(e.to_string()))?;

    Ok(rows.first().map(|row| row.count).unwrap_or(0))
}

// ============================================================================
// Supabase Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct ContentTypeRow {
    content_type: String,
}
