use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{HttpConfig, Result};

const DEFAULT_CONFIG: &str = include_str!("../fogg.json");
const ENV_PREFIX: &str = "FOGG";

/// Where generation requests are sent and which model answers them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[serde(rename_all = "snake_case")]
#[setters(into)]
pub struct ProviderConfig {
    /// Base URL of an OpenAI-compatible API; `chat/completions` is appended.
    pub base_url: Url,
    /// Bearer token. Requests are sent unauthenticated when absent.
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[serde(rename_all = "snake_case")]
pub struct AssessmentConfig {
    /// Clarification rounds allowed before a final assessment is forced.
    pub max_clarification_rounds: usize,
    /// Shortest description, in characters, worth sending to the model.
    pub min_input_chars: usize,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self { max_clarification_rounds: 2, min_input_chars: 10 }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[serde(rename_all = "snake_case")]
pub struct FoggConfig {
    pub provider: ProviderConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub assessment: AssessmentConfig,
}

impl FoggConfig {
    /// Loads configuration from, in increasing order of precedence:
    /// 1. the embedded `fogg.json` defaults
    /// 2. a `.env` file in the working directory, if present
    /// 3. environment variables prefixed with `FOGG_`
    ///
    /// Nested keys use a double underscore, e.g. `FOGG_PROVIDER__API_KEY`
    /// sets `provider.api_key` and `FOGG_HTTP__READ_TIMEOUT` sets
    /// `http.read_timeout`.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(error) if error.not_found() => {}
            Err(error) => tracing::warn!(error = %error, "Ignoring unreadable .env file"),
        }
        Self::from_sources(environment())
    }

    fn from_sources(env: ::config::Environment) -> Result<Self> {
        let config = ::config::Config::builder()
            .add_source(::config::File::from_str(
                DEFAULT_CONFIG,
                ::config::FileFormat::Json,
            ))
            .add_source(env)
            .build()?;

        let mut config: Self = config.try_deserialize()?;
        config.provider.base_url = with_trailing_slash(config.provider.base_url);
        Ok(config)
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn environment() -> ::config::Environment {
    ::config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
