use secrecy::Secret;
use service_core::config as core_config;
use service_core::config::{env_or, optional_env, require_env};
use service_core::error::AppError;

/// Default OpenAI-compatible API base. Overridable for proxies and tests.
const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub common: core_config::Config,
    pub openai: OpenAiConfig,
    /// Identity resolution and persistence both go through Supabase; when the
    /// pair of variables is not set, generation runs anonymously and stats
    /// requests fail with a configuration error.
    pub supabase: Option<SupabaseConfig>,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Secret<String>,
    pub api_base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_role_key: Secret<String>,
}

impl ContentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let openai = OpenAiConfig {
            api_key: Secret::new(require_env("OPENAI_API_KEY")?),
            api_base_url: env_or("OPENAI_API_BASE", DEFAULT_OPENAI_API_BASE),
            model: env_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
        };

        let supabase = match (
            optional_env("SUPABASE_URL"),
            optional_env("SUPABASE_SERVICE_ROLE_KEY"),
        ) {
            (Some(url), Some(key)) => Some(SupabaseConfig {
                url: url.trim_end_matches('/').to_string(),
                service_role_key: Secret::new(key),
            }),
            _ => None,
        };

        Ok(ContentConfig {
            common,
            openai,
            supabase,
        })
    }
}
