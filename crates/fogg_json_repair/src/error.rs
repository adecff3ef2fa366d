#[derive(thiserror::Error, Debug)]
pub enum JsonRepairError {
    #[error("No JSON object or array found in model output")]
    NoPayload,

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON could not be repaired: {0}")]
    Unrepairable(String),
}

pub type Result<T> = std::result::Result<T, JsonRepairError>;
