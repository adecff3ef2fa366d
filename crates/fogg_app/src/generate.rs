use fogg_domain::{GenerationRequest, GenerationResponse, GenerationService};
use serde::de::DeserializeOwned;
use tracing::{error, warn};

/// What came back from a single generation attempt.
pub(crate) enum Generated<T> {
    /// Output parsed into `T`, possibly after repair. Cardinality and content
    /// are still unchecked.
    Parsed(T),
    /// The service answered, but with nothing usable.
    Unusable,
    /// The service call itself failed.
    Failed,
}

pub(crate) async fn generate<S, T>(services: &S, request: GenerationRequest) -> Generated<T>
where
    S: GenerationService + ?Sized,
    T: DeserializeOwned,
{
    let flow = request.flow;
    match services.generate(request).await {
        Err(e) => {
            error!(flow = %flow, error = ?e, "Generation service failed");
            Generated::Failed
        }
        Ok(GenerationResponse { content: None }) => {
            warn!(flow = %flow, "Generation service returned no content");
            Generated::Unusable
        }
        Ok(GenerationResponse { content: Some(content) }) => {
            match fogg_json_repair::from_str::<T>(&content) {
                Ok(output) => Generated::Parsed(output),
                Err(e) => {
                    warn!(flow = %flow, error = %e, "Discarding unparsable generation output");
                    Generated::Unusable
                }
            }
        }
    }
}
