use derive_setters::Setters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// Named request/response operations executed against the text generation
/// service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    PreliminaryAssessment,
    BlogTopicSuggestion,
    BlogKeyPoints,
    BlogPostDraft,
}

/// A prompt plus the structural contract the generated output should follow.
#[derive(Clone, Debug, PartialEq, Setters)]
#[setters(into)]
pub struct GenerationRequest {
    pub flow: Flow,
    pub prompt: String,
    /// JSON schema of the expected output.
    pub schema: serde_json::Value,
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    pub fn new(flow: Flow, prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self { flow, prompt: prompt.into(), schema, temperature: None }
    }

    /// Builds a request whose contract is the JSON schema of `T`.
    pub fn for_output<T: JsonSchema>(flow: Flow, prompt: impl Into<String>) -> Self {
        Self::new(flow, prompt, schemars::schema_for!(T).to_value())
    }
}

/// Raw, untrusted output of the generation service.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationResponse {
    /// Text the model produced. `None` when the service answered without any
    /// content.
    pub content: Option<String>,
}

impl GenerationResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()) }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// External text generation service. Implementations perform exactly one
/// attempt per call; callers decide how failures degrade.
#[async_trait::async_trait]
pub trait GenerationService: Send + Sync + 'static {
    async fn generate(&self, request: GenerationRequest) -> anyhow::Result<GenerationResponse>;
}
