use fogg_domain::GenerationRequest;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub schema: serde_json::Value,
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonSchema { json_schema: JsonSchemaFormat },
}

/// Body of a `POST /chat/completions` call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Request {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub response_format: ResponseFormat,
    pub stream: bool,
}

impl Request {
    pub fn new(model: impl Into<String>, request: GenerationRequest) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message { role: Role::User, content: request.prompt }],
            temperature: request.temperature,
            response_format: ResponseFormat::JsonSchema {
                json_schema: JsonSchemaFormat {
                    name: request.flow.to_string(),
                    schema: request.schema,
                    strict: false,
                },
            },
            stream: false,
        }
    }

    pub fn temperature_or(mut self, fallback: Option<f32>) -> Self {
        self.temperature = self.temperature.or(fallback);
        self
    }
}
