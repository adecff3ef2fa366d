use std::collections::VecDeque;
use std::sync::Mutex;

use fogg_domain::{GenerationRequest, GenerationResponse, GenerationService};
use serde_json::Value;

/// Generation service that replays scripted responses in order and records
/// every request it receives.
#[derive(Default)]
pub struct ScriptedService {
    responses: Mutex<VecDeque<anyhow::Result<GenerationResponse>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, content: impl Into<String>) -> Self {
        self.push(Ok(GenerationResponse::new(content)))
    }

    pub fn respond_json(self, value: Value) -> Self {
        self.respond(value.to_string())
    }

    pub fn respond_empty(self) -> Self {
        self.push(Ok(GenerationResponse::empty()))
    }

    pub fn fail(self, message: &'static str) -> Self {
        self.push(Err(anyhow::anyhow!(message)))
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn push(self, response: anyhow::Result<GenerationResponse>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }
}

#[async_trait::async_trait]
impl GenerationService for ScriptedService {
    async fn generate(&self, request: GenerationRequest) -> anyhow::Result<GenerationResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("no scripted response left")))
    }
}
