use anyhow::{Context as _, Result};
use derive_builder::Builder;
use fogg_config::{HttpConfig, ProviderConfig};
use fogg_domain::{GenerationRequest, GenerationResponse, GenerationService};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, info, warn};
use url::Url;

use super::request::Request;
use super::response::Response;
use crate::error::Error;
use crate::utils::{format_http_context, sanitize_headers};

/// Text generation over any OpenAI-compatible chat-completions endpoint,
/// using its `json_schema` structured-output mode. One request per call; no
/// retries and no streaming.
#[derive(Clone, Builder)]
pub struct OpenAiProvider {
    client: Client,
    config: ProviderConfig,
}

impl OpenAiProvider {
    pub fn builder() -> OpenAiProviderBuilder {
        OpenAiProviderBuilder::default()
    }

    pub fn new(config: ProviderConfig, http: &HttpConfig) -> Result<Self> {
        let client = crate::build_http_client(http)?;
        Self::builder()
            .client(client)
            .config(config)
            .build()
            .context("Failed to initialize OpenAI-compatible provider")
    }

    fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.config.base_url.join(path).with_context(|| {
            format!("Failed to append {} to base URL: {}", path, self.config.base_url)
        })
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(ref api_key) = self.config.api_key {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {api_key}"))
                    .map_err(|_| Error::InvalidHeader("authorization"))?,
            );
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("X-Title", HeaderValue::from_static("fogg"));
        Ok(headers)
    }

    async fn complete(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let flow = request.flow;
        let url = self.url("chat/completions")?;
        let headers = self.headers()?;
        let body =
            Request::new(&self.config.model, request).temperature_or(self.config.temperature);

        info!(
            url = %url,
            model = %self.config.model,
            flow = %flow,
            headers = ?sanitize_headers(&headers),
            "Connecting upstream"
        );

        let response = self
            .client
            .post(url.clone())
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)
            .with_context(|| format_http_context(None, "POST", &url))?;

        let status = response.status();
        let ctx_message = format_http_context(Some(status), "POST", &url);
        let text = response
            .text()
            .await
            .map_err(Error::Transport)
            .with_context(|| ctx_message.clone())?;

        if !status.is_success() {
            return Err(Error::InvalidStatusCode { status: status.as_u16(), body: text })
                .context(ctx_message);
        }

        let response: Response = serde_json::from_str(&text)
            .map_err(Error::Decode)
            .with_context(|| ctx_message.clone())?;

        debug!(
            model = ?response.model,
            finish_reason = ?response.choices.first().and_then(|c| c.finish_reason.as_deref()),
            "Received completion from upstream"
        );
        if let Some(refusal) = response.choices.first().and_then(|c| c.message.refusal.as_deref()) {
            warn!(flow = %flow, refusal = %refusal, "Model refused the request");
        }

        Ok(GenerationResponse { content: response.into_content() })
    }
}

#[async_trait::async_trait]
impl GenerationService for OpenAiProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        self.complete(request).await
    }
}
