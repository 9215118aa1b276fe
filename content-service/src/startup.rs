//! Application startup and lifecycle management.

use crate::config::ContentConfig;
use crate::handlers;
use crate::services::{OpenAiClient, SupabaseClient};
use axum::http::{header, HeaderName, Method};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub openai: OpenAiClient,
    pub supabase: Option<SupabaseClient>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: ContentConfig) -> Result<Self, AppError> {
        let openai = OpenAiClient::new(config.openai.clone());

        let supabase = match config.supabase.clone() {
            Some(supabase_config) => Some(SupabaseClient::new(supabase_config)),
            None => {
                tracing::warn!(
                    "Supabase not configured - generation will be anonymous and stats unavailable"
                );
                None
            }
        };

        let state = AppState { openai, supabase };

        // Permissive CORS for the public browser-facing endpoints; the layer
        // answers OPTIONS preflight requests itself.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                HeaderName::from_static("x-client-info"),
                HeaderName::from_static("apikey"),
            ])
            .max_age(Duration::from_secs(86400));

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/generate-content", post(handlers::generate_content))
            .route("/get-user-stats", get(handlers::get_user_stats))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
