use content_service::config::{ContentConfig, OpenAiConfig, SupabaseConfig};
use content_service::startup::Application;
use secrecy::Secret;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

pub const TEST_USER_ID: &str = "user-123";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub openai: MockServer,
    pub supabase: MockServer,
}

impl TestApp {
    /// Spawn the service with wiremock doubles standing in for OpenAI and
    /// Supabase.
    pub async fn spawn() -> Self {
        Self::spawn_inner(true).await
    }

    /// Spawn the service without Supabase configuration (anonymous mode).
    pub async fn spawn_without_supabase() -> Self {
        Self::spawn_inner(false).await
    }

    async fn spawn_inner(with_supabase: bool) -> Self {
        let openai = MockServer::start().await;
        let supabase = MockServer::start().await;

        let config = ContentConfig {
            common: service_core::config::Config { port: 0 },
            openai: OpenAiConfig {
                api_key: Secret::new("test-api-key".to_string()),
                api_base_url: openai.uri(),
                model: "gpt-3.5-turbo".to_string(),
            },
            supabase: with_supabase.then(|| SupabaseConfig {
                url: supabase.uri(),
                service_role_key: Secret::new("service-role-key".to_string()),
            }),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(app.run_until_stopped());

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            openai,
            supabase,
        }
    }

    /// Mount an OpenAI chat-completion mock returning the given text.
    pub async fn mock_completion(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }]
            })))
            .mount(&self.openai)
            .await;
    }

    /// Mount a Supabase Auth mock resolving any token to `TEST_USER_ID`.
    pub async fn mock_identity(&self) {
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": TEST_USER_ID,
                "email": "user@example.com"
            })))
            .mount(&self.supabase)
            .await;
    }

    /// Mount a Supabase Auth mock rejecting every token.
    pub async fn mock_identity_rejection(&self) {
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_token" })),
            )
            .mount(&self.supabase)
            .await;
    }

    pub async fn post_generate(
        &self,
        body: &serde_json::Value,
        token: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .client
            .post(format!("{}/generate-content", self.address))
            .json(body);

        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        request.send().await.expect("Failed to execute request")
    }

    pub async fn get_stats(&self, token: Option<&str>) -> reqwest::Response {
        let mut request = self.client.get(format!("{}/get-user-stats", self.address));

        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        request.send().await.expect("Failed to execute request")
    }

    /// Requests the Supabase double received on the given path.
    pub async fn supabase_requests_to(&self, to_path: &str) -> Vec<Request> {
        self.supabase
            .received_requests()
            .await
            .expect("Request recording disabled")
            .into_iter()
            .filter(|r| r.url.path() == to_path)
            .collect()
    }
}

/// Matches requests carrying the given query parameter, whatever its value.
pub struct HasQueryParam(pub &'static str);

impl Match for HasQueryParam {
    fn matches(&self, request: &Request) -> bool {
        request.url.query_pairs().any(|(key, _)| key == self.0)
    }
}

/// Matches requests that do NOT carry the given query parameter.
pub struct LacksQueryParam(pub &'static str);

impl Match for LacksQueryParam {
    fn matches(&self, request: &Request) -> bool {
        request.url.query_pairs().all(|(key, _)| key != self.0)
    }
}
